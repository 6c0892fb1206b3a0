//! Mark balance: cops are never behind, and never more than one ahead.

use super::Invariant;
use crate::{Game, Label};

/// Invariant: while the game continues, cop marks minus robber marks is 0
/// or 1.
///
/// Once decided, the referee keeps calling engines if asked to, so the
/// counts may drift; the check is vacuous for decided games.
pub struct MarkBalanceInvariant;

impl Invariant<Game> for MarkBalanceInvariant {
    fn holds(game: &Game) -> bool {
        if game.is_over() {
            return true;
        }
        let cops = game.board().count(Label::Cop);
        let robber = game.board().count(Label::Robber);
        cops == robber || cops == robber + 1
    }

    fn description() -> &'static str {
        "Cop marks lead robber marks by zero or one"
    }
}
