//! Line nodes are never labeled.

use super::Invariant;
use crate::{Game, Label, Node};

/// Invariant: every row, column and diagonal node stays empty.
///
/// Win detection relies on it: a cell neighbors only line nodes, so a cell
/// can never look like a completed line.
pub struct LineNodesBlankInvariant;

impl Invariant<Game> for LineNodesBlankInvariant {
    fn holds(game: &Game) -> bool {
        Node::all()
            .filter(Node::is_line)
            .all(|node| game.board().label_of(node) == Ok(Label::Empty))
    }

    fn description() -> &'static str {
        "Line nodes are never labeled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NullObserver, ScriptedEngine};

    #[test]
    fn test_holds_through_a_full_game() {
        let cops = ScriptedEngine::from_cells([(0, 0), (0, 2), (1, 2), (2, 1), (2, 0)]);
        let robber = ScriptedEngine::from_cells([(1, 1), (0, 1), (1, 0), (2, 2)]);
        let mut game = Game::new(move || Ok(cops), move || Ok(robber), NullObserver);

        assert!(LineNodesBlankInvariant::holds(&game));
        while !game.is_over() {
            game.next_round();
            assert!(LineNodesBlankInvariant::holds(&game));
        }
    }
}
