//! Cops and robber on the tic-tac-toe graph.
//!
//! A referee for a two-player game on the 3×3 grid. The cops move first and
//! win by completing a row, column or diagonal. The robber wins by
//! completing one of their own, or by surviving until the cops fill the
//! last cell. An engine that fails or proposes an illegal cell forfeits.
//!
//! # Architecture
//!
//! - **Board**: the grid as a graph whose line nodes (rows, columns,
//!   diagonals) make "three in a row" a uniform neighborhood check
//! - **Game**: the referee, with a latched result/status pair
//! - **Engine**: the trait strategy engines implement
//! - **GameObserver**: injected event sink, `tracing` by default
//!
//! # Example
//!
//! ```
//! use cops_robber_core::{Game, GameResult, NullObserver, ScriptedEngine, Status};
//!
//! let cops = ScriptedEngine::from_cells([(0, 0), (1, 1), (2, 2)]);
//! let robber = ScriptedEngine::from_cells([(0, 1), (0, 2)]);
//! let mut game = Game::new(move || Ok(cops), move || Ok(robber), NullObserver);
//!
//! while game.result() == GameResult::Continuing {
//!     game.next_round();
//! }
//! assert_eq!(game.result().value(), 1);
//! assert_eq!(game.status(), Status::RobberCaught);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod engine;
mod game;
pub mod invariants;
mod node;
mod observer;
mod outcome;

// Crate-level exports - Graph
pub use board::{Board, BoardError};
pub use node::{Cell, Label, Node, NODE_COUNT, SIZE};

// Crate-level exports - Engines
pub use engine::{Construct, Engine, EngineError, ScriptedEngine};

// Crate-level exports - Referee
pub use game::Game;
pub use outcome::{GameOutcome, GameResult, Side, Status};

// Crate-level exports - Observation
pub use observer::{
    EnginePhase, GameEvent, GameObserver, InvalidMoveReason, NullObserver, RecordingObserver,
    TracingObserver,
};
