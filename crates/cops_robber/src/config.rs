//! Match configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Strategy engine selectable from the command line or a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum EngineKind {
    /// First empty cell in row-major order.
    FirstFree,
    /// Uniformly random empty cell.
    Random,
    /// Completes its own lines, blocks the opponent's, prefers the centre.
    LineHunter,
    /// Fixed list of `[row, col]` proposals (config file only).
    Scripted {
        /// Proposals in play order.
        moves: Vec<(i32, i32)>,
    },
}

impl FromStr for EngineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first-free" => Ok(EngineKind::FirstFree),
            "random" => Ok(EngineKind::Random),
            "line-hunter" => Ok(EngineKind::LineHunter),
            "scripted" => Err("scripted engines need a move list; use a config file".to_string()),
            other => Err(format!(
                "unknown engine '{}' (expected first-free, random or line-hunter)",
                other
            )),
        }
    }
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineKind::FirstFree => write!(f, "first-free"),
            EngineKind::Random => write!(f, "random"),
            EngineKind::LineHunter => write!(f, "line-hunter"),
            EngineKind::Scripted { moves } => write!(f, "scripted ({} moves)", moves.len()),
        }
    }
}

/// Settings for one match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Engine playing the cops.
    #[serde(default = "default_cops")]
    cops: EngineKind,

    /// Engine playing the robber.
    #[serde(default = "default_robber")]
    robber: EngineKind,

    /// Seed for random engines; the robber uses `seed + 1`.
    #[serde(default)]
    seed: Option<u64>,

    /// Log destination. Logs go to stderr when unset.
    #[serde(default)]
    log_file: Option<PathBuf>,

    /// Print the match report as JSON.
    #[serde(default)]
    json: bool,
}

fn default_cops() -> EngineKind {
    EngineKind::LineHunter
}

fn default_robber() -> EngineKind {
    EngineKind::LineHunter
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            cops: default_cops(),
            robber: default_robber(),
            seed: None,
            log_file: None,
            json: false,
        }
    }
}

impl MatchConfig {
    /// Creates a configuration for the given engines.
    pub fn new(cops: EngineKind, robber: EngineKind) -> Self {
        Self {
            cops,
            robber,
            ..Self::default()
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(cops = %config.cops, robber = %config.robber, "Config loaded successfully");
        Ok(config)
    }

    /// Replaces the cops engine.
    pub fn with_cops(mut self, cops: EngineKind) -> Self {
        self.cops = cops;
        self
    }

    /// Replaces the robber engine.
    pub fn with_robber(mut self, robber: EngineKind) -> Self {
        self.robber = robber;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the log file.
    pub fn with_log_file(mut self, path: PathBuf) -> Self {
        self.log_file = Some(path);
        self
    }

    /// Enables JSON output.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_kind_from_str() {
        assert_eq!("first-free".parse::<EngineKind>(), Ok(EngineKind::FirstFree));
        assert_eq!(" Line-Hunter ".parse::<EngineKind>(), Ok(EngineKind::LineHunter));
        assert!("scripted".parse::<EngineKind>().is_err());
        assert!("minimax".parse::<EngineKind>().is_err());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: MatchConfig = toml::from_str("").unwrap();
        assert_eq!(config, MatchConfig::default());
    }

    #[test]
    fn test_scripted_engine_from_toml() {
        let config: MatchConfig = toml::from_str(
            r#"
            seed = 7
            json = true

            [cops]
            kind = "scripted"
            moves = [[0, 0], [1, 1], [2, 2]]

            [robber]
            kind = "random"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.cops(),
            &EngineKind::Scripted {
                moves: vec![(0, 0), (1, 1), (2, 2)]
            }
        );
        assert_eq!(config.robber(), &EngineKind::Random);
        assert_eq!(config.seed(), &Some(7));
        assert!(*config.json());
    }

    #[test]
    fn test_builder_overrides() {
        let config = MatchConfig::default()
            .with_cops(EngineKind::FirstFree)
            .with_seed(3)
            .with_json(true);
        assert_eq!(config.cops(), &EngineKind::FirstFree);
        assert_eq!(config.robber(), &EngineKind::LineHunter);
        assert_eq!(config.seed(), &Some(3));
    }
}
