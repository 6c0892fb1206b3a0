//! Greedy engine that reads threats off the line nodes.

use cops_robber_core::{Board, BoardError, Cell, Engine, EngineError, Label, Node, Side};
use tracing::{debug, instrument};

const CENTRE: Cell = Cell { row: 1, col: 1 };
const CORNERS: [Cell; 4] = [
    Cell { row: 0, col: 0 },
    Cell { row: 0, col: 2 },
    Cell { row: 2, col: 0 },
    Cell { row: 2, col: 2 },
];

/// One-ply greedy player.
///
/// In order of preference: complete an own line, block an opposing line,
/// take the centre, take a corner, take the first empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineHunter {
    side: Side,
}

impl LineHunter {
    /// Creates a hunter playing for `side`.
    pub fn new(side: Side) -> Self {
        Self { side }
    }

    /// Hunter playing the cops.
    pub fn cops() -> Self {
        Self::new(Side::Cops)
    }

    /// Hunter playing the robber.
    pub fn robber() -> Self {
        Self::new(Side::Robber)
    }

    /// Empty cell on a line node whose other two neighbors carry `label`.
    #[instrument(skip(board))]
    fn completing_cell(board: &Board, label: Label) -> Result<Option<Cell>, BoardError> {
        for line in Node::all().filter(Node::is_line) {
            let mut marked = 0;
            let mut open = None;
            for neighbor in board.neighbors(line)? {
                match board.label_of(neighbor)? {
                    l if l == label => marked += 1,
                    Label::Empty => {
                        if let Node::Cell(cell) = neighbor {
                            open = Some(cell);
                        }
                    }
                    _ => {}
                }
            }
            if marked == 2 && open.is_some() {
                return Ok(open);
            }
        }
        Ok(None)
    }

    fn is_empty(board: &Board, cell: Cell) -> Result<bool, BoardError> {
        Ok(board.label_at(cell)? == Label::Empty)
    }
}

impl Engine for LineHunter {
    fn step(&mut self, board: &Board) -> Result<Option<Cell>, EngineError> {
        if let Some(cell) = Self::completing_cell(board, self.side.label())? {
            debug!(side = %self.side, %cell, "Completing line");
            return Ok(Some(cell));
        }
        if let Some(cell) = Self::completing_cell(board, self.side.opponent().label())? {
            debug!(side = %self.side, %cell, "Blocking line");
            return Ok(Some(cell));
        }
        if Self::is_empty(board, CENTRE)? {
            return Ok(Some(CENTRE));
        }
        for corner in CORNERS {
            if Self::is_empty(board, corner)? {
                return Ok(Some(corner));
            }
        }
        Ok(board.empty_cells().first().copied())
    }
}
