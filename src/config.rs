//! Session configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tictac_engine::{GameEngine, Mark};
use tracing::{debug, info, instrument};

/// Tunables for a game session.
///
/// Every key is optional in the file; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Pause before the random opponent moves, in milliseconds.
    #[serde(default = "default_opponent_delay_ms")]
    opponent_delay_ms: u64,

    /// Mark played by the random opponent. X always moves first.
    #[serde(default = "default_opponent_mark")]
    opponent_mark: Mark,

    /// Fixed seed for the opponent; drawn from entropy when absent.
    #[serde(default)]
    rng_seed: Option<u64>,
}

fn default_opponent_delay_ms() -> u64 {
    700
}

fn default_opponent_mark() -> Mark {
    Mark::O
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            opponent_delay_ms: default_opponent_delay_ms(),
            opponent_mark: default_opponent_mark(),
            rng_seed: None,
        }
    }
}

impl SessionConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::parse(&content)?;
        info!(
            delay_ms = config.opponent_delay_ms,
            opponent = %config.opponent_mark,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Returns a copy with a fixed opponent seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Returns a copy with a different opponent delay.
    pub fn with_opponent_delay(mut self, delay: Duration) -> Self {
        self.opponent_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Pause before the random opponent moves.
    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }

    /// Builds an inert engine configured with this opponent.
    #[instrument(skip(self))]
    pub fn build_engine(&self) -> GameEngine {
        let engine = match self.rng_seed {
            Some(seed) => GameEngine::with_seed(seed),
            None => GameEngine::new(),
        };
        engine.with_opponent(self.opponent_mark)
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
