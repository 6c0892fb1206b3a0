//! Self-checks the referee runs after every ply in debug builds.
//!
//! Invariants are logical properties of a [`Game`](crate::Game) that no
//! sequence of engine behaviour should be able to break. A violation means
//! a referee bug, so it is reported through the observer and never changes
//! the outcome.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two and three invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

pub mod line_nodes_blank;
pub mod mark_balance;
pub mod outcome_coherent;

pub use line_nodes_blank::LineNodesBlankInvariant;
pub use mark_balance::MarkBalanceInvariant;
pub use outcome_coherent::OutcomeCoherentInvariant;

/// All referee invariants as a composable set.
pub type RefereeInvariants = (
    LineNodesBlankInvariant,
    MarkBalanceInvariant,
    OutcomeCoherentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Game, Label, NullObserver, ScriptedEngine};

    fn game(cops: &[(i32, i32)], robber: &[(i32, i32)]) -> Game {
        let cops = ScriptedEngine::from_cells(cops.to_vec());
        let robber = ScriptedEngine::from_cells(robber.to_vec());
        Game::new(move || Ok(cops), move || Ok(robber), NullObserver)
    }

    #[test]
    fn test_invariant_set_holds_for_fresh_game() {
        assert!(RefereeInvariants::check_all(&game(&[], &[])).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = game(&[(0, 0), (1, 1)], &[(2, 2), (0, 1)]);
        for _ in 0..4 {
            game.next_round();
        }
        assert!(RefereeInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_corruption() {
        let mut game = game(&[(0, 0)], &[]);
        game.next_round();
        game.board.set_label(Cell::new(2, 2), Label::Cop).unwrap();

        let violations = RefereeInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, MarkBalanceInvariant::description());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (LineNodesBlankInvariant, OutcomeCoherentInvariant);
        assert!(TwoInvariants::check_all(&game(&[], &[])).is_ok());
    }
}
