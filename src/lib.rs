//! # tug-of-math
//!
//! Problem generator and match engine for a two-player "tug of war"
//! algebra game.
//!
//! ## Design Principles
//!
//! 1. **Explicit randomness**: every draw goes through a `MathRng` passed
//!    by the caller, so matches and problems are reproducible from a seed.
//!
//! 2. **Closed catalogue**: the ten templates form an exhaustively
//!    matchable `TemplateKind`, looked up by difficulty 1-10.
//!
//! 3. **Host owns time and pixels**: the match never sleeps or renders. It
//!    reacts to answers, ticks and `advance_round` calls and returns a
//!    snapshot plus events.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, errors
//! - `problems`: formatter, templates, distractors, factory
//! - `game`: match state machine, countdowns, events
//! - `sim`: headless self-play

pub mod core;
pub mod problems;
pub mod game;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    MatchConfig, MathRng, MathRngState,
    Player, PlayerId, PlayerMap, PlayerSetup, PlayerStats,
    ConfigError,
};

pub use crate::problems::{
    generate_problem, max_difficulty, difficulty_label,
    Choice, InputType, Problem, ProblemFactory, ProblemSource,
    TemplateKind, Term, format_polynomial, format_term,
};

pub use crate::game::{
    Answer, MatchEvent, MatchState, MatchSummary, Phase, RoundPhase, TugMatch, Update,
};
