//! Match runner for cops and robber on the tic-tac-toe graph.
//!
//! Wires configured strategy engines into the referee from
//! [`cops_robber_core`], plays the match to completion and reports the
//! outcome.
//!
//! # Example
//!
//! ```
//! use cops_robber::{play, EngineKind, MatchConfig};
//!
//! let config = MatchConfig::new(EngineKind::LineHunter, EngineKind::FirstFree);
//! let report = play(&config)?;
//! assert_ne!(report.result, 0);
//! # Ok::<(), cops_robber::RunnerError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod runner;
pub mod strategies;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineKind, MatchConfig};

// Crate-level exports - Match running
pub use runner::{new_game, play, run_match, MatchReport, RunnerError, MAX_ROUNDS};
