//! Drives a game to completion and reports the result.

use crate::config::MatchConfig;
use crate::strategies::build_engine;
use cops_robber_core::{Board, Game, GameResult, Label, Side, TracingObserver};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Ceiling on plies per match.
///
/// A game is always decided within nine plies; hitting this means the
/// referee is broken.
pub const MAX_ROUNDS: i64 = 64;

/// Error raised while running a match.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RunnerError {
    /// The game did not finish within [`MAX_ROUNDS`] plies.
    #[display("Game still undecided after {} rounds", _0)]
    RoundLimit(i64),
}

impl std::error::Error for RunnerError {}

/// Summary of a finished match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// -1 robber wins, 1 cops win.
    pub result: i8,
    /// Fixed reason string.
    pub status: String,
    /// Plies played (0 if an engine failed to build).
    pub rounds: i64,
    /// Final cell labels, row-major.
    pub board: [[Label; 3]; 3],
    /// Winning side.
    pub winner: Option<Side>,
}

impl MatchReport {
    fn from_game(game: &Game) -> Self {
        Self {
            result: game.result().value(),
            status: game.status().to_string(),
            rounds: game.round() + 1,
            board: game.board().rows(),
            winner: game.result().winner(),
        }
    }
}

/// Builds a game from the configured engines.
#[instrument(skip(config), fields(cops = %config.cops(), robber = %config.robber()))]
pub fn new_game(config: &MatchConfig) -> Game {
    let seed = *config.seed();
    let (cops, robber) = (config.cops().clone(), config.robber().clone());
    Game::new(
        move || build_engine(&cops, Side::Cops, seed),
        move || build_engine(&robber, Side::Robber, seed),
        TracingObserver,
    )
}

/// Plays rounds until the game is decided, logging the board after each.
#[instrument(skip(game))]
pub fn run_match(game: &mut Game) -> Result<MatchReport, RunnerError> {
    log_board(game.board());

    while game.result() == GameResult::Continuing {
        if game.round() + 1 >= MAX_ROUNDS {
            return Err(RunnerError::RoundLimit(game.round() + 1));
        }
        game.next_round();
        log_board(game.board());
    }

    info!("Result: {}, status: {}", game.result().value(), game.status());
    match game.result() {
        GameResult::RobberWins => info!("Robber wins"),
        _ => info!("Cops win"),
    }

    Ok(MatchReport::from_game(game))
}

/// Builds and plays a match from configuration.
pub fn play(config: &MatchConfig) -> Result<MatchReport, RunnerError> {
    let mut game = new_game(config);
    run_match(&mut game)
}

fn log_board(board: &Board) {
    let rows = board.rows().map(|row| format!("{:?}", row));
    info!("\n{}\n{}\n{}", rows[0], rows[1], rows[2]);
}
