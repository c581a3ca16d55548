//! Application configuration.
//!
//! Values come from an optional TOML file; command-line flags override
//! them. A missing file means defaults.

use crate::cli::PlayArgs;
use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts::{Difficulty, GameMode, SessionConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Who plays O.
    mode: GameMode,

    /// Opponent strength in `pvai` mode.
    difficulty: Difficulty,

    /// Pause before the computer moves, in milliseconds.
    opponent_delay_ms: u64,

    /// Seed for the random strategy; entropy when unset.
    seed: Option<u64>,

    /// Log destination while the terminal UI is running.
    log_file: PathBuf,
}

#[instrument]
fn default_opponent_delay_ms() -> u64 {
    500
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            opponent_delay_ms: default_opponent_delay_ms(),
            seed: None,
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, args: &PlayArgs) -> Self {
        if let Some(mode) = args.mode {
            self.mode = mode;
        }
        if let Some(difficulty) = args.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(delay) = args.delay_ms {
            self.opponent_delay_ms = delay;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        if let Some(log_file) = &args.log_file {
            self.log_file = log_file.clone();
        }
        self
    }

    /// Mode and difficulty for the game core.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            mode: self.mode,
            difficulty: self.difficulty,
        }
    }

    /// Opponent delay as a [`Duration`].
    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
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
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.opponent_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mode = \"pvai\"\ndifficulty = \"hard\"").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(*config.mode(), GameMode::PvAI);
        assert_eq!(*config.difficulty(), Difficulty::Optimal);
        assert_eq!(*config.opponent_delay_ms(), 500);
        assert_eq!(config.log_file(), &PathBuf::from("noughts.log"));
    }

    #[test]
    fn test_bad_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mode = \"online\"").unwrap();

        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_flags_override_file() {
        let args = PlayArgs {
            mode: Some(GameMode::PvAI),
            delay_ms: Some(0),
            seed: Some(3),
            ..Default::default()
        };
        let config = AppConfig::default().with_overrides(&args);
        assert_eq!(config.session_config().mode, GameMode::PvAI);
        assert_eq!(config.session_config().difficulty, Difficulty::Random);
        assert_eq!(config.opponent_delay(), Duration::ZERO);
        assert_eq!(*config.seed(), Some(3));
    }
}
