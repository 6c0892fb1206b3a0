//! Referee events and the observers that receive them.
//!
//! The referee never logs through global state. Everything worth recording
//! is turned into a [`GameEvent`] and handed to the observer supplied at
//! construction.

use super::engine::EngineError;
use super::node::{Cell, Label};
use super::outcome::{GameResult, Side, Status};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Where an engine failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EnginePhase {
    /// While running the zero-argument factory.
    #[display("construction")]
    Construction,
    /// While computing a move.
    #[display("step")]
    Step,
}

/// Why a proposed move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMoveReason {
    /// The engine proposed nothing (or failed, which counts as nothing).
    #[display("no move")]
    Absent,
    /// Row or column outside 0..=2.
    #[display("off the grid")]
    OutOfRange,
    /// The cell already carries a mark.
    #[display("cell already labeled {:?}", _0)]
    Occupied(Label),
}

/// Something the referee did or noticed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// An engine raised an error or panicked.
    EngineFailed {
        /// Side owning the engine.
        side: Side,
        /// Construction or step.
        phase: EnginePhase,
        /// Round counter at the time (-1 during construction).
        round: i64,
        /// The failure.
        error: EngineError,
    },
    /// A proposal failed validation.
    InvalidMove {
        /// Side that proposed it.
        side: Side,
        /// Round counter.
        round: i64,
        /// The proposal, if any.
        proposed: Option<Cell>,
        /// Why it was rejected.
        reason: InvalidMoveReason,
    },
    /// A cell was labeled.
    MovePlayed {
        /// Side that moved.
        side: Side,
        /// Round counter.
        round: i64,
        /// The labeled cell.
        cell: Cell,
    },
    /// The outcome latch moved away from "Game continues".
    Decided {
        /// Round counter (-1 if decided during construction).
        round: i64,
        /// Latched result.
        result: GameResult,
        /// Latched status.
        status: Status,
    },
    /// A referee self-check failed.
    InvariantViolated {
        /// Round counter.
        round: i64,
        /// Description of the violated invariant.
        description: String,
    },
}

/// Receiver for referee events.
pub trait GameObserver {
    /// Called synchronously for every event, in order.
    fn observe(&mut self, event: &GameEvent);
}

/// Forwards events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl GameObserver for TracingObserver {
    fn observe(&mut self, event: &GameEvent) {
        match event {
            GameEvent::EngineFailed {
                side,
                phase,
                round,
                error,
            } => warn!(%side, %phase, round, %error, "Engine call failed"),
            GameEvent::InvalidMove {
                side,
                round,
                proposed,
                reason,
            } => info!(%side, round, ?proposed, %reason, "Invalid move rejected"),
            GameEvent::MovePlayed { side, round, cell } => {
                debug!(%side, round, %cell, "Move played")
            }
            GameEvent::Decided {
                round,
                result,
                status,
            } => info!(round, result = result.value(), %status, "Game decided"),
            GameEvent::InvariantViolated { round, description } => {
                warn!(round, %description, "Referee invariant violated")
            }
        }
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {
    fn observe(&mut self, _event: &GameEvent) {}
}

/// Collects events into a shared buffer.
///
/// Clone the observer before handing it to the game; both copies see the
/// same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl RecordingObserver {
    /// Creates an observer with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events recorded so far.
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Number of recorded events matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| predicate(e)).count()
    }
}

impl GameObserver for RecordingObserver {
    fn observe(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_observer_shares_buffer() {
        let recorder = RecordingObserver::new();
        let mut handle = recorder.clone();

        handle.observe(&GameEvent::MovePlayed {
            side: Side::Cops,
            round: 0,
            cell: Cell::new(1, 1),
        });

        assert_eq!(recorder.events().len(), 1);
        assert_eq!(
            recorder.count(|e| matches!(e, GameEvent::MovePlayed { .. })),
            1
        );
    }

    #[test]
    fn test_reason_display() {
        assert_eq!(InvalidMoveReason::Absent.to_string(), "no move");
        assert_eq!(
            InvalidMoveReason::Occupied(Label::Cop).to_string(),
            "cell already labeled Cop"
        );
    }
}
