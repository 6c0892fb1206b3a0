//! Engine that plays a random empty cell.

use cops_robber_core::{Board, Cell, Construct, Engine, EngineError};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

/// Picks uniformly among the empty cells.
#[derive(Debug, Clone)]
pub struct RandomMover {
    rng: SmallRng,
}

impl RandomMover {
    /// Creates a mover; `None` seeds from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self { rng }
    }
}

impl Engine for RandomMover {
    fn step(&mut self, board: &Board) -> Result<Option<Cell>, EngineError> {
        let choice = board.empty_cells().choose(&mut self.rng).copied();
        debug!(?choice, "RandomMover chose cell");
        Ok(choice)
    }
}

impl Construct for RandomMover {
    fn construct() -> Result<Self, EngineError> {
        Ok(Self::new(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cops_robber_core::Label;

    #[test]
    fn test_only_empty_cells_are_chosen() {
        let mut board = Board::new();
        for cell in Cell::all().take(8) {
            board.set_label(cell, Label::Robber).unwrap();
        }
        let mut mover = RandomMover::new(Some(11));
        for _ in 0..5 {
            assert_eq!(mover.step(&board), Ok(Some(Cell::new(2, 2))));
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut a = RandomMover::new(Some(42));
        let mut b = RandomMover::new(Some(42));
        for _ in 0..10 {
            assert_eq!(a.step(&board), b.step(&board));
        }
    }
}
