//! Match configuration.
//!
//! Loaded from TOML or built in code:
//!
//! ```
//! use tug_of_math::core::MatchConfig;
//!
//! let config = MatchConfig::from_toml_str("difficulty = 7\nmax_rope = 4").unwrap();
//! assert_eq!(config.difficulty, Some(7));
//! assert_eq!(config.max_rope, 4);
//! assert_eq!(config.round_seconds, Some(30));
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::error::{ConfigError, Result};

/// Environment variable naming a TOML config file.
pub const CONFIG_PATH_ENV: &str = "TUG_CONFIG_PATH";

/// Default rope half-length (steps from centre to either end).
pub const DEFAULT_MAX_ROPE: i32 = 5;

/// Match configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Template difficulty used every round (1-10).
    /// `None` or an out-of-range value draws a random template each round.
    pub difficulty: Option<u8>,

    /// Steps from the centre to either end of the rope.
    pub max_rope: i32,

    /// Per-round countdown in seconds. `None` disables it.
    pub round_seconds: Option<u32>,

    /// Match-wide countdown in seconds. `None` disables it.
    pub match_seconds: Option<u32>,

    /// How long the host should show feedback before `advance_round`.
    /// Advisory only; the core never waits.
    pub feedback_delay_ms: u64,

    /// Streak length that flags a milestone on the answer event.
    pub streak_milestone: u32,

    /// Seed for the problem factory. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            difficulty: Some(3),
            max_rope: DEFAULT_MAX_ROPE,
            round_seconds: Some(30),
            match_seconds: None,
            feedback_delay_ms: 2200,
            streak_milestone: 3,
            seed: None,
        }
    }
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fixed difficulty (`None` = random every round).
    pub fn with_difficulty(mut self, difficulty: Option<u8>) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_max_rope(mut self, max_rope: i32) -> Self {
        self.max_rope = max_rope;
        self
    }

    pub fn with_round_seconds(mut self, seconds: Option<u32>) -> Self {
        self.round_seconds = seconds;
        self
    }

    pub fn with_match_seconds(mut self, seconds: Option<u32>) -> Self {
        self.match_seconds = seconds;
        self
    }

    pub fn with_streak_milestone(mut self, streak: u32) -> Self {
        self.streak_milestone = streak;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check structural constraints. Difficulty is deliberately not checked.
    pub fn validate(&self) -> Result<()> {
        if self.max_rope < 1 {
            return Err(ConfigError::Invalid(format!(
                "max_rope must be at least 1, got {}",
                self.max_rope
            )));
        }
        if self.round_seconds == Some(0) {
            return Err(ConfigError::Invalid("round_seconds must be positive".into()));
        }
        if self.match_seconds == Some(0) {
            return Err(ConfigError::Invalid("match_seconds must be positive".into()));
        }
        if self.streak_milestone == 0 {
            return Err(ConfigError::Invalid("streak_milestone must be positive".into()));
        }
        Ok(())
    }

    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        info!(path = %path.display(), "loaded match config");
        Ok(config)
    }

    /// Load from `TUG_CONFIG_PATH`, falling back to defaults when the
    /// variable is unset or the file is unusable.
    pub fn load_from_env() -> Self {
        let Ok(path) = std::env::var(CONFIG_PATH_ENV) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                error!(%path, error = %e, "falling back to default match config");
                Self::default()
            }
        }
    }
}
