//! Error types.
//!
//! Problem generation and match transitions never fail: invalid calls are
//! ignored. Configuration loading is the only fallible surface, apart
//! from rejecting out-of-range seats when deserializing a `PlayerId`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// A seat index other than 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("player index {0} is out of range")]
pub struct InvalidPlayerId(pub u8);

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
