//! Result and status move together.

use super::Invariant;
use crate::{Game, Status};

/// Invariant: the result is `Continuing` exactly when the status is
/// "Game continues".
pub struct OutcomeCoherentInvariant;

impl Invariant<Game> for OutcomeCoherentInvariant {
    fn holds(game: &Game) -> bool {
        game.is_over() == (game.status() != Status::GameContinues)
    }

    fn description() -> &'static str {
        "Result and status are latched together"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EngineError, NullObserver, ScriptedEngine};

    #[test]
    fn test_holds_before_and_after_decision() {
        let mut game = Game::new(
            || Ok(ScriptedEngine::from_cells([(7, 7)])),
            || Ok(ScriptedEngine::default()),
            NullObserver,
        );
        assert!(OutcomeCoherentInvariant::holds(&game));
        game.next_round();
        assert!(game.is_over());
        assert!(OutcomeCoherentInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_construction_failure() {
        let game = Game::new(
            || Err::<ScriptedEngine, _>(EngineError::new("no cops today")),
            || Ok(ScriptedEngine::default()),
            NullObserver,
        );
        assert!(OutcomeCoherentInvariant::holds(&game));
    }
}
