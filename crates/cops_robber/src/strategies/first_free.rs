//! Engine that fills the grid in reading order.

use cops_robber_core::{Board, Cell, Construct, Engine, EngineError};
use tracing::debug;

/// Plays the first empty cell in row-major order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFree;

impl Engine for FirstFree {
    fn step(&mut self, board: &Board) -> Result<Option<Cell>, EngineError> {
        let choice = board.empty_cells().first().copied();
        debug!(?choice, "FirstFree chose cell");
        Ok(choice)
    }
}

impl Construct for FirstFree {
    fn construct() -> Result<Self, EngineError> {
        Ok(FirstFree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cops_robber_core::Label;

    #[test]
    fn test_picks_first_empty_cell() {
        let mut board = Board::new();
        board.set_label(Cell::new(0, 0), Label::Cop).unwrap();
        board.set_label(Cell::new(0, 1), Label::Robber).unwrap();
        assert_eq!(FirstFree.step(&board), Ok(Some(Cell::new(0, 2))));
    }

    #[test]
    fn test_full_board_yields_nothing() {
        let mut board = Board::new();
        for cell in Cell::all() {
            board.set_label(cell, Label::Cop).unwrap();
        }
        assert_eq!(FirstFree.step(&board), Ok(None));
    }
}
