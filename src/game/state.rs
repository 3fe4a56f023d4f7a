//! Match state: the single mutable object of the core.
//!
//! Mutated only through `TugMatch`. Cloning is cheap enough to hand a
//! snapshot to the host after every transition; the round history uses a
//! persistent `im::Vector`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::clock::Countdown;
use crate::core::{Player, PlayerId, PlayerMap, PlayerSetup, PlayerStats};
use crate::problems::Problem;

/// Top-level lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Menu,
    Playing,
    Finished,
}

/// Per-round sub-cycle while `Playing`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    AwaitingAnswer,
    Feedback,
}

/// Why the match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinishReason {
    /// The rope reached one end.
    RopeEnd,
    /// The match-wide countdown ran out (or the host forced the end).
    MatchClock,
}

/// Result of the last resolved answer, shown until `advance_round`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub correct: bool,
    pub timed_out: bool,
    pub answer_markup: String,
    /// The player the rope moved toward.
    pub puller: PlayerId,
}

/// One resolved round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    pub player: PlayerId,
    pub difficulty: u8,
    pub category: String,
    pub correct: bool,
    pub timed_out: bool,
    pub rope_after: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub phase: Phase,
    pub round_phase: RoundPhase,
    pub players: PlayerMap<Player>,
    pub stats: PlayerMap<PlayerStats>,
    /// Whose round it is.
    pub turn: PlayerId,
    /// In `[-max_rope, max_rope]`; negative favours player 0.
    pub rope_position: i32,
    pub max_rope: i32,
    /// Starts at 1.
    pub round: u32,
    /// Consecutive correct answers, reset by any miss.
    pub streak: u32,
    pub winner: Option<PlayerId>,
    pub finish_reason: Option<FinishReason>,
    /// Configured difficulty; `None` draws a random template each round.
    pub difficulty: Option<u8>,
    /// Problem of the current round.
    pub problem: Option<Problem>,
    pub feedback: Option<Feedback>,
    pub round_clock: Option<Countdown>,
    pub match_clock: Option<Countdown>,
    pub history: Vector<RoundRecord>,
}

impl MatchState {
    /// Fresh pre-game state with default players.
    #[must_use]
    pub fn menu(max_rope: i32) -> Self {
        Self {
            phase: Phase::Menu,
            round_phase: RoundPhase::AwaitingAnswer,
            players: PlayerMap::new(|p| Player::from_setup(p, &PlayerSetup::default_for(p))),
            stats: PlayerMap::with_default(),
            turn: PlayerId::ZERO,
            rope_position: 0,
            max_rope,
            round: 1,
            streak: 0,
            winner: None,
            finish_reason: None,
            difficulty: None,
            problem: None,
            feedback: None,
            round_clock: None,
            match_clock: None,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    /// True when a submitted answer would be evaluated.
    #[must_use]
    pub fn is_awaiting_answer(&self) -> bool {
        self.phase == Phase::Playing
            && self.round_phase == RoundPhase::AwaitingAnswer
            && self.problem.is_some()
    }

    /// The player the rope currently favours, if it is off-centre.
    #[must_use]
    pub fn leader(&self) -> Option<PlayerId> {
        match self.rope_position {
            p if p < 0 => Some(PlayerId::ZERO),
            p if p > 0 => Some(PlayerId::ONE),
            _ => None,
        }
    }
}
