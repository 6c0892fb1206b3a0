//! The tic-tac-toe graph and its labels.

use super::node::{Cell, Label, Node, NODE_COUNT, SIZE};
use tracing::instrument;

/// Error raised by board lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The node is not one of the 17 nodes of the tic-tac-toe graph.
    #[display("Unknown node: {}", _0)]
    UnknownNode(Node),
}

impl std::error::Error for BoardError {}

/// Labeled tic-tac-toe graph.
///
/// Every cell `(r, c)` is adjacent to `Row(r)`, `Col(c)`, to `Diagonal(0)`
/// when `r == c`, and to `Diagonal(1)` when `r + c == 2`. A line is complete
/// exactly when the line node's neighbors all carry the same mark, so win
/// detection is a single neighborhood scan over all nodes.
///
/// The board does not validate writes; the referee checks that a cell is
/// empty before labeling it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Labels indexed by [`Node::index`].
    labels: Vec<Label>,
    /// Neighbor indices per node, indexed by [`Node::index`].
    adjacency: Vec<Vec<usize>>,
}

impl Board {
    /// Builds the graph with every label empty.
    #[instrument]
    pub fn new() -> Self {
        let mut adjacency = vec![Vec::new(); NODE_COUNT];
        let mut connect = |a: Node, b: Node| {
            // Both endpoints are members of the fixed graph by construction.
            if let (Some(a), Some(b)) = (a.index(), b.index()) {
                adjacency[a].push(b);
                adjacency[b].push(a);
            }
        };

        for cell in Cell::all() {
            let node = Node::Cell(cell);
            connect(node, Node::Row(cell.row));
            connect(node, Node::Col(cell.col));
            if cell.row == cell.col {
                connect(node, Node::Diagonal(0));
            }
            if cell.row + cell.col == SIZE - 1 {
                connect(node, Node::Diagonal(1));
            }
        }

        Self {
            labels: vec![Label::Empty; NODE_COUNT],
            adjacency,
        }
    }

    fn index_of(node: Node) -> Result<usize, BoardError> {
        node.index().ok_or(BoardError::UnknownNode(node))
    }

    /// Returns the current label of a node.
    pub fn label_of(&self, node: Node) -> Result<Label, BoardError> {
        Ok(self.labels[Self::index_of(node)?])
    }

    /// Label of a cell, treating off-grid coordinates as unknown.
    pub fn label_at(&self, cell: Cell) -> Result<Label, BoardError> {
        self.label_of(Node::Cell(cell))
    }

    /// Writes a label into a cell without checking its previous value.
    #[instrument(skip(self))]
    pub fn set_label(&mut self, cell: Cell, label: Label) -> Result<(), BoardError> {
        let index = Self::index_of(Node::Cell(cell))?;
        self.labels[index] = label;
        Ok(())
    }

    /// Nodes adjacent to `node`.
    pub fn neighbors(&self, node: Node) -> Result<Vec<Node>, BoardError> {
        let index = Self::index_of(node)?;
        Ok(self.adjacency[index]
            .iter()
            .filter_map(|&i| Node::from_index(i))
            .collect())
    }

    /// True iff every neighbor of `node` currently carries exactly `label`.
    pub fn neighbors_all_labeled(&self, node: Node, label: Label) -> Result<bool, BoardError> {
        let index = Self::index_of(node)?;
        Ok(self.surrounded_by(index, label))
    }

    fn surrounded_by(&self, index: usize, label: Label) -> bool {
        self.adjacency[index]
            .iter()
            .all(|&neighbor| self.labels[neighbor] == label)
    }

    /// True if some node of the graph has a neighborhood labeled entirely
    /// with `label`.
    ///
    /// For a player's mark this is "three in a row": cells neighbor only line
    /// nodes, which are never labeled, so only a completed line can match.
    #[instrument(skip(self))]
    pub fn any_neighborhood_labeled(&self, label: Label) -> bool {
        (0..NODE_COUNT).any(|index| self.surrounded_by(index, label))
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        Cell::all().all(|cell| self.cell_label(cell) != Label::Empty)
    }

    /// Cells that are still empty, in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::all()
            .filter(|&cell| self.cell_label(cell) == Label::Empty)
            .collect()
    }

    /// Number of cells carrying `label`.
    pub fn count(&self, label: Label) -> usize {
        Cell::all()
            .filter(|&cell| self.cell_label(cell) == label)
            .count()
    }

    /// Row-major 3×3 view of the cell labels.
    pub fn rows(&self) -> [[Label; 3]; 3] {
        let mut rows = [[Label::Empty; 3]; 3];
        for cell in Cell::all() {
            rows[cell.row as usize][cell.col as usize] = self.cell_label(cell);
        }
        rows
    }

    /// Formats the cells as a human-readable grid.
    pub fn display(&self) -> String {
        self.rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|label| label.symbol().to_string())
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n-+-+-\n")
    }

    // Cells from `Cell::all` are always in bounds.
    fn cell_label(&self, cell: Cell) -> Label {
        self.labels[(cell.row * SIZE + cell.col) as usize]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
