//! Result, status and the monotonic outcome latch.

use super::node::Label;
use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Side {
    /// Moves on even rounds, wins with three in a row.
    Cops,
    /// Moves on odd rounds, wins by escaping or outlasting the cops.
    Robber,
}

impl Side {
    /// Side to move on the given (non-negative) round.
    pub fn for_round(round: i64) -> Self {
        if round % 2 == 0 { Side::Cops } else { Side::Robber }
    }

    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Cops => Side::Robber,
            Side::Robber => Side::Cops,
        }
    }

    /// Mark this side places on the board.
    pub fn label(self) -> Label {
        match self {
            Side::Cops => Label::Cop,
            Side::Robber => Label::Robber,
        }
    }

    /// Result recorded when this side wins.
    pub fn victory(self) -> GameResult {
        match self {
            Side::Cops => GameResult::CopsWins,
            Side::Robber => GameResult::RobberWins,
        }
    }
}

/// Ternary game result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameResult {
    /// No decisive event yet.
    #[default]
    Continuing,
    /// The robber won.
    RobberWins,
    /// The cops won.
    CopsWins,
}

impl GameResult {
    /// Numeric encoding: 0 continuing, -1 robber wins, 1 cops win.
    pub fn value(self) -> i8 {
        match self {
            GameResult::Continuing => 0,
            GameResult::RobberWins => -1,
            GameResult::CopsWins => 1,
        }
    }

    /// Winning side, if decided.
    pub fn winner(self) -> Option<Side> {
        match self {
            GameResult::Continuing => None,
            GameResult::RobberWins => Some(Side::Robber),
            GameResult::CopsWins => Some(Side::Cops),
        }
    }

    /// True once the game has been decided.
    pub fn is_decided(self) -> bool {
        self != GameResult::Continuing
    }
}

/// Reason attached to the game result.
///
/// The display strings are fixed; drivers and logs match on them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
pub enum Status {
    /// Nothing decisive has happened.
    #[default]
    #[strum(serialize = "Game continues")]
    GameContinues,
    /// Cops returned no move, an off-grid cell or an occupied cell.
    #[strum(serialize = "Cops invalid step")]
    CopsInvalidStep,
    /// Robber returned no move, an off-grid cell or an occupied cell.
    #[strum(serialize = "Robber invalid step")]
    RobberInvalidStep,
    /// The cops engine failed to build or to step.
    #[strum(serialize = "Exception in cops call")]
    CopsException,
    /// The robber engine failed to build or to step.
    #[strum(serialize = "Exception in robber call")]
    RobberException,
    /// Cops completed a line.
    #[strum(serialize = "Robber caught")]
    RobberCaught,
    /// Robber completed a line.
    #[strum(serialize = "Robber escapes")]
    RobberEscapes,
    /// The board filled up without the cops completing a line.
    #[strum(serialize = "Cops shift ends")]
    CopsShiftEnds,
}

impl Status {
    /// The fixed reason string.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Status for an invalid move by `side`.
    pub fn invalid_step(side: Side) -> Self {
        match side {
            Side::Cops => Status::CopsInvalidStep,
            Side::Robber => Status::RobberInvalidStep,
        }
    }

    /// Status for a failed engine call by `side`.
    pub fn exception(side: Side) -> Self {
        match side {
            Side::Cops => Status::CopsException,
            Side::Robber => Status::RobberException,
        }
    }

    /// Status for `side` completing a line.
    pub fn three_in_a_row(side: Side) -> Self {
        match side {
            Side::Cops => Status::RobberCaught,
            Side::Robber => Status::RobberEscapes,
        }
    }
}

/// Result/status pair that can leave its initial value exactly once.
///
/// Serialize-only: a pair is coherent only when produced by the referee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GameOutcome {
    result: GameResult,
    status: Status,
}

impl GameOutcome {
    /// Current result.
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Current status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// True once a decisive event has been latched.
    pub fn is_decided(&self) -> bool {
        self.result.is_decided()
    }

    /// Records a decision unless one is already latched.
    ///
    /// Returns `true` if this call changed the outcome.
    pub(crate) fn decide(&mut self, result: GameResult, status: Status) -> bool {
        if self.is_decided() || status == Status::GameContinues {
            return false;
        }
        self.result = result;
        self.status = status;
        true
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Result: {}, status: {}", self.result.value(), self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_status_strings_are_fixed() {
        let strings: Vec<&str> = Status::iter().map(Status::as_str).collect();
        assert_eq!(
            strings,
            vec![
                "Game continues",
                "Cops invalid step",
                "Robber invalid step",
                "Exception in cops call",
                "Exception in robber call",
                "Robber caught",
                "Robber escapes",
                "Cops shift ends",
            ]
        );
        assert_eq!(Status::RobberCaught.to_string(), "Robber caught");
    }

    #[test]
    fn test_result_values() {
        assert_eq!(GameResult::Continuing.value(), 0);
        assert_eq!(GameResult::RobberWins.value(), -1);
        assert_eq!(GameResult::CopsWins.value(), 1);
    }

    #[test]
    fn test_latch_keeps_first_decision() {
        let mut outcome = GameOutcome::default();
        assert_eq!(outcome.status(), Status::GameContinues);

        assert!(outcome.decide(GameResult::RobberWins, Status::CopsException));
        assert!(!outcome.decide(GameResult::RobberWins, Status::CopsInvalidStep));
        assert!(!outcome.decide(GameResult::CopsWins, Status::RobberCaught));

        assert_eq!(outcome.result(), GameResult::RobberWins);
        assert_eq!(outcome.status(), Status::CopsException);
    }

    #[test]
    fn test_round_parity() {
        assert_eq!(Side::for_round(0), Side::Cops);
        assert_eq!(Side::for_round(1), Side::Robber);
        assert_eq!(Side::for_round(8), Side::Cops);
        assert_eq!(Side::Cops.opponent().victory(), GameResult::RobberWins);
    }

    #[test]
    fn test_outcome_serializes_by_variant_name() {
        let mut outcome = GameOutcome::default();
        outcome.decide(GameResult::CopsWins, Status::RobberInvalidStep);

        let json = serde_json::to_value(outcome).unwrap();
        assert_eq!(json["result"], "CopsWins");
        assert_eq!(json["status"], "RobberInvalidStep");
        assert_eq!(outcome.to_string(), "Result: 1, status: Robber invalid step");
    }
}
