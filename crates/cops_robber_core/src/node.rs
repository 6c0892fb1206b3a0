//! Node identities and labels of the tic-tac-toe graph.
//!
//! The graph has 17 nodes: nine playable cells plus eight line nodes
//! (three rows, three columns, two diagonals). Line nodes are never the
//! target of a move; they exist so that "three in a row" is the same
//! predicate as "every neighbor carries the same label".

use serde::{Deserialize, Serialize};

/// Board edge length.
pub const SIZE: i32 = 3;

/// Number of nodes in the tic-tac-toe graph.
pub const NODE_COUNT: usize = 17;

/// A cell coordinate as proposed by an engine.
///
/// Coordinates are signed and unchecked: an engine may propose `(5, 5)` or
/// `(-1, 0)`, and rejecting that is the referee's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Cell {
    /// Row index, valid range 0..=2.
    pub row: i32,
    /// Column index, valid range 0..=2.
    pub col: i32,
}

impl Cell {
    /// True if both coordinates lie on the 3×3 grid.
    pub fn in_bounds(&self) -> bool {
        (0..SIZE).contains(&self.row) && (0..SIZE).contains(&self.col)
    }

    /// All nine cells in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Cell { row, col }))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

/// Identity of a node in the tic-tac-toe graph.
///
/// Any value can be constructed; only the 17 members of the fixed graph are
/// known to the board. `Diagonal(0)` runs through cells with `row == col`,
/// `Diagonal(1)` through cells with `row + col == 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Node {
    /// A playable cell.
    Cell(Cell),
    /// Row line node.
    Row(i32),
    /// Column line node.
    Col(i32),
    /// Diagonal line node.
    Diagonal(i32),
}

impl Node {
    /// Shorthand for `Node::Cell(Cell::new(row, col))`.
    pub fn cell(row: i32, col: i32) -> Self {
        Node::Cell(Cell::new(row, col))
    }

    /// Dense index of this node in `0..NODE_COUNT`, or `None` when the node
    /// is not part of the fixed graph.
    ///
    /// Layout: cells 0..9 (row-major), rows 9..12, columns 12..15,
    /// diagonals 15..17.
    pub fn index(&self) -> Option<usize> {
        let line = |i: i32, count: i32, base: usize| {
            (0..count).contains(&i).then(|| base + i as usize)
        };
        match *self {
            Node::Cell(cell) => cell
                .in_bounds()
                .then(|| (cell.row * SIZE + cell.col) as usize),
            Node::Row(i) => line(i, SIZE, 9),
            Node::Col(j) => line(j, SIZE, 12),
            Node::Diagonal(k) => line(k, 2, 15),
        }
    }

    /// Inverse of [`Node::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        let i = index as i32;
        match index {
            0..9 => Some(Node::cell(i / SIZE, i % SIZE)),
            9..12 => Some(Node::Row(i - 9)),
            12..15 => Some(Node::Col(i - 12)),
            15..17 => Some(Node::Diagonal(i - 15)),
            _ => None,
        }
    }

    /// All nodes of the fixed graph, in index order.
    pub fn all() -> impl Iterator<Item = Node> {
        (0..NODE_COUNT).filter_map(Node::from_index)
    }

    /// True for row, column and diagonal nodes.
    pub fn is_line(&self) -> bool {
        !matches!(self, Node::Cell(_))
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Cell(cell) => write!(f, "cell {}", cell),
            Node::Row(i) => write!(f, "row {}", i),
            Node::Col(j) => write!(f, "col {}", j),
            Node::Diagonal(k) => write!(f, "diagonal {}", k),
        }
    }
}

/// Mark carried by a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Label {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Placed by the cops.
    Cop,
    /// Placed by the robber.
    Robber,
}

impl Label {
    /// Single-character symbol used in board dumps.
    pub fn symbol(self) -> char {
        match self {
            Label::Empty => ' ',
            Label::Cop => 'C',
            Label::Robber => 'R',
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
