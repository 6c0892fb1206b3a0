//! Pluggable strategy engines.
//!
//! The referee knows two things about an engine: how to build it without
//! arguments, and how to ask it for a move. Everything else is up to the
//! implementation.

use super::board::{Board, BoardError};
use super::node::Cell;
use derive_more::{Display, Error};
use std::any::Any;
use std::collections::VecDeque;
use tracing::instrument;

/// Failure raised by an engine while being built or while stepping.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Engine error: {} at {}:{}", message, file, line)]
pub struct EngineError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Converts a caught panic payload into an error.
    #[track_caller]
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let detail = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        Self::new(format!("engine panicked: {}", detail))
    }
}

impl From<BoardError> for EngineError {
    #[track_caller]
    fn from(err: BoardError) -> Self {
        Self::new(format!("Board error: {}", err))
    }
}

/// A strategy for one side of the game.
pub trait Engine {
    /// Proposes the next move for the current board.
    ///
    /// `Ok(None)` means "no move". The proposal is not trusted: the referee
    /// rejects absent, off-grid and occupied cells.
    fn step(&mut self, board: &Board) -> Result<Option<Cell>, EngineError>;
}

impl<E: Engine + ?Sized> Engine for Box<E> {
    fn step(&mut self, board: &Board) -> Result<Option<Cell>, EngineError> {
        (**self).step(board)
    }
}

/// Engines that can be built without arguments.
///
/// `Game::with_engines::<C, R>()` uses this as the zero-argument factory.
pub trait Construct: Engine + Sized + 'static {
    /// Builds a fresh engine instance.
    fn construct() -> Result<Self, EngineError>;
}

/// Engine that replays a fixed list of proposals.
///
/// Once the script runs out every further step proposes nothing, which the
/// referee treats as an invalid step.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEngine {
    script: VecDeque<Option<Cell>>,
}

impl ScriptedEngine {
    /// Creates an engine from raw proposals, including absent ones.
    pub fn new(script: impl IntoIterator<Item = Option<Cell>>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Creates an engine that proposes the given coordinates in order.
    pub fn from_cells(cells: impl IntoIterator<Item = (i32, i32)>) -> Self {
        Self::new(cells.into_iter().map(|cell| Some(Cell::from(cell))))
    }

    /// Proposals not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Engine for ScriptedEngine {
    #[instrument(skip(self, _board), fields(remaining = self.script.len()))]
    fn step(&mut self, _board: &Board) -> Result<Option<Cell>, EngineError> {
        Ok(self.script.pop_front().flatten())
    }
}

impl Construct for ScriptedEngine {
    fn construct() -> Result<Self, EngineError> {
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_engine_replays_then_runs_dry() {
        let board = Board::new();
        let mut engine = ScriptedEngine::new([Some(Cell::new(1, 1)), None, Some(Cell::new(9, 9))]);

        assert_eq!(engine.step(&board), Ok(Some(Cell::new(1, 1))));
        assert_eq!(engine.step(&board), Ok(None));
        assert_eq!(engine.step(&board), Ok(Some(Cell::new(9, 9))));
        assert_eq!(engine.remaining(), 0);
        assert_eq!(engine.step(&board), Ok(None));
    }

    #[test]
    fn test_panic_payloads_become_messages() {
        let err = EngineError::from_panic(Box::new("boom"));
        assert_eq!(err.message, "engine panicked: boom");

        let err = EngineError::from_panic(Box::new(String::from("bang")));
        assert_eq!(err.message, "engine panicked: bang");

        let err = EngineError::from_panic(Box::new(7_u8));
        assert_eq!(err.message, "engine panicked: non-string panic payload");
    }

    #[test]
    fn test_error_records_location() {
        let err = EngineError::new("no idea");
        assert!(err.file.ends_with("engine.rs"));
        assert!(err.to_string().starts_with("Engine error: no idea at "));
    }
}
