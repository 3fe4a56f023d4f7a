//! Core types: players, RNG, configuration, errors.
//!
//! Everything here is independent of the problem catalogue and the match
//! state machine.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{Player, PlayerId, PlayerMap, PlayerSetup, PlayerStats};
pub use rng::{MathRng, MathRngState};
pub use config::{MatchConfig, CONFIG_PATH_ENV, DEFAULT_MAX_ROPE};
pub use error::{ConfigError, InvalidPlayerId};
