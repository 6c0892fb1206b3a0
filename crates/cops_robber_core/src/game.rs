//! The referee: turn order, move validation and the outcome latch.

use super::board::Board;
use super::engine::{Construct, Engine, EngineError};
use super::node::{Cell, Label};
use super::observer::{EnginePhase, GameEvent, GameObserver, InvalidMoveReason, TracingObserver};
use super::outcome::{GameOutcome, GameResult, Side, Status};
use std::panic::{self, AssertUnwindSafe};
use tracing::instrument;

/// Referee for one game of cops and robber on the tic-tac-toe graph.
///
/// Cops move on even rounds, the robber on odd rounds. Any engine failure
/// or invalid proposal forfeits the game to the opponent. The first
/// decisive event is latched; later rounds may still be played but never
/// change [`Game::result`] or [`Game::status`].
pub struct Game {
    pub(crate) board: Board,
    pub(crate) outcome: GameOutcome,
    pub(crate) round: i64,
    cops: Option<Box<dyn Engine>>,
    robber: Option<Box<dyn Engine>>,
    observer: Box<dyn GameObserver>,
}

impl Game {
    /// Builds the board and both engines.
    ///
    /// If the cops factory fails the robber wins and the robber factory is
    /// never called. If the robber factory fails the cops win. Factory
    /// panics count as failures.
    #[instrument(skip_all)]
    pub fn new<C, R, CE, RE>(cops: C, robber: R, observer: impl GameObserver + 'static) -> Self
    where
        C: FnOnce() -> Result<CE, EngineError>,
        CE: Engine + 'static,
        R: FnOnce() -> Result<RE, EngineError>,
        RE: Engine + 'static,
    {
        let mut game = Self {
            board: Board::new(),
            outcome: GameOutcome::default(),
            round: -1,
            cops: None,
            robber: None,
            observer: Box::new(observer),
        };

        match build(cops) {
            Ok(engine) => game.cops = Some(engine),
            Err(error) => {
                game.engine_failed(Side::Cops, EnginePhase::Construction, error);
                return game;
            }
        }

        match build(robber) {
            Ok(engine) => game.robber = Some(engine),
            Err(error) => game.engine_failed(Side::Robber, EnginePhase::Construction, error),
        }

        game
    }

    /// Builds both engines through their zero-argument constructors and
    /// reports through `tracing`.
    pub fn with_engines<C: Construct, R: Construct>() -> Self {
        Self::new(C::construct, R::construct, TracingObserver)
    }

    /// Plays one ply.
    ///
    /// On a cops ply the three-in-a-row check runs before the full-board
    /// check, so a line completed with the last cell is a cops win. The
    /// robber ply has no full-board check.
    #[instrument(skip(self), fields(round = self.round + 1))]
    pub fn next_round(&mut self) {
        self.round += 1;
        let side = Side::for_round(self.round);

        let proposed = self.request_move(side);
        self.place(side, proposed);

        if self.board.any_neighborhood_labeled(side.label()) {
            self.decide(side.victory(), Status::three_in_a_row(side));
        }
        if side == Side::Cops && self.board.is_full() {
            self.decide(GameResult::RobberWins, Status::CopsShiftEnds);
        }

        #[cfg(debug_assertions)]
        self.check_invariants();
    }

    /// Current result.
    pub fn result(&self) -> GameResult {
        self.outcome.result()
    }

    /// Current status.
    pub fn status(&self) -> Status {
        self.outcome.status()
    }

    /// Result and status together.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// True once the game is decided.
    pub fn is_over(&self) -> bool {
        self.outcome.is_decided()
    }

    /// Round counter: -1 before the first ply, then the index of the last
    /// ply played.
    pub fn round(&self) -> i64 {
        self.round
    }

    /// Read access to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side whose engine is called by the next `next_round`.
    pub fn to_move(&self) -> Side {
        Side::for_round(self.round + 1)
    }

    fn request_move(&mut self, side: Side) -> Option<Cell> {
        let board = &self.board;
        let engine = match side {
            Side::Cops => self.cops.as_deref_mut(),
            Side::Robber => self.robber.as_deref_mut(),
        };

        // Engines are missing only after a construction failure.
        let outcome = match engine {
            Some(engine) => panic::catch_unwind(AssertUnwindSafe(|| engine.step(board)))
                .unwrap_or_else(|payload| Err(EngineError::from_panic(payload))),
            None => Err(EngineError::new("engine was never constructed")),
        };

        match outcome {
            Ok(proposed) => proposed,
            Err(error) => {
                self.engine_failed(side, EnginePhase::Step, error);
                None
            }
        }
    }

    fn place(&mut self, side: Side, proposed: Option<Cell>) {
        let Some(cell) = proposed else {
            return self.reject(side, None, InvalidMoveReason::Absent);
        };

        match self.board.label_at(cell) {
            Err(_) => self.reject(side, proposed, InvalidMoveReason::OutOfRange),
            Ok(Label::Empty) => match self.board.set_label(cell, side.label()) {
                Ok(()) => self.observer.observe(&GameEvent::MovePlayed {
                    side,
                    round: self.round,
                    cell,
                }),
                Err(_) => self.reject(side, proposed, InvalidMoveReason::OutOfRange),
            },
            Ok(label) => self.reject(side, proposed, InvalidMoveReason::Occupied(label)),
        }
    }

    fn reject(&mut self, side: Side, proposed: Option<Cell>, reason: InvalidMoveReason) {
        self.observer.observe(&GameEvent::InvalidMove {
            side,
            round: self.round,
            proposed,
            reason,
        });
        self.decide(side.opponent().victory(), Status::invalid_step(side));
    }

    fn engine_failed(&mut self, side: Side, phase: EnginePhase, error: EngineError) {
        self.observer.observe(&GameEvent::EngineFailed {
            side,
            phase,
            round: self.round,
            error,
        });
        self.decide(side.opponent().victory(), Status::exception(side));
    }

    fn decide(&mut self, result: GameResult, status: Status) {
        if self.outcome.decide(result, status) {
            self.observer.observe(&GameEvent::Decided {
                round: self.round,
                result,
                status,
            });
        }
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&mut self) {
        use super::invariants::{InvariantSet, RefereeInvariants};

        if let Err(violations) = RefereeInvariants::check_all(&*self) {
            for violation in violations {
                self.observer.observe(&GameEvent::InvariantViolated {
                    round: self.round,
                    description: violation.description,
                });
            }
        }
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board)
            .field("outcome", &self.outcome)
            .field("round", &self.round)
            .field("cops", &self.cops.is_some())
            .field("robber", &self.robber.is_some())
            .finish()
    }
}

// Runs a factory, treating a panic like an error return.
fn build<F, E>(factory: F) -> Result<Box<dyn Engine>, EngineError>
where
    F: FnOnce() -> Result<E, EngineError>,
    E: Engine + 'static,
{
    match panic::catch_unwind(AssertUnwindSafe(factory)) {
        Ok(Ok(engine)) => Ok(Box::new(engine)),
        Ok(Err(error)) => Err(error),
        Err(payload) => Err(EngineError::from_panic(payload)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ScriptedEngine;
    use crate::observer::{NullObserver, RecordingObserver};

    fn scripted(
        cops: &[(i32, i32)],
        robber: &[(i32, i32)],
        observer: impl GameObserver + 'static,
    ) -> Game {
        let cops = ScriptedEngine::from_cells(cops.to_vec());
        let robber = ScriptedEngine::from_cells(robber.to_vec());
        Game::new(move || Ok(cops), move || Ok(robber), observer)
    }

    #[test]
    fn test_fresh_game_continues() {
        let game = scripted(&[], &[], NullObserver);
        assert_eq!(game.result(), GameResult::Continuing);
        assert_eq!(game.status(), Status::GameContinues);
        assert_eq!(game.round(), -1);
        assert_eq!(game.to_move(), Side::Cops);
    }

    #[test]
    fn test_move_labels_cell() {
        let mut game = scripted(&[(1, 1)], &[(0, 0)], NullObserver);
        game.next_round();
        assert_eq!(game.board().label_at(Cell::new(1, 1)), Ok(Label::Cop));
        game.next_round();
        assert_eq!(game.board().label_at(Cell::new(0, 0)), Ok(Label::Robber));
        assert_eq!(game.round(), 1);
        assert!(!game.is_over());
    }

    #[test]
    fn test_exhausted_script_is_invalid_step() {
        let mut game = scripted(&[(1, 1)], &[], NullObserver);
        game.next_round();
        game.next_round();
        assert_eq!(game.result(), GameResult::CopsWins);
        assert_eq!(game.status(), Status::RobberInvalidStep);
    }

    #[test]
    fn test_failed_step_records_exception_before_invalid_step() {
        struct Broken;
        impl Engine for Broken {
            fn step(&mut self, _board: &Board) -> Result<Option<Cell>, EngineError> {
                Err(EngineError::new("out of ideas"))
            }
        }

        let recorder = RecordingObserver::new();
        let mut game = Game::new(
            || Ok(Broken),
            || Ok(ScriptedEngine::default()),
            recorder.clone(),
        );
        game.next_round();

        assert_eq!(game.status(), Status::CopsException);
        assert_eq!(game.result(), GameResult::RobberWins);

        // The failed call still goes through validation as an absent move.
        let events = recorder.events();
        assert!(matches!(events[0], GameEvent::EngineFailed { side: Side::Cops, .. }));
        assert!(matches!(events[1], GameEvent::Decided { .. }));
        assert!(matches!(
            events[2],
            GameEvent::InvalidMove { reason: InvalidMoveReason::Absent, .. }
        ));
        assert_eq!(recorder.count(|e| matches!(e, GameEvent::Decided { .. })), 1);
    }
}
