//! Notifications for the presentation layer.
//!
//! Every `TugMatch` operation returns the events it produced alongside a
//! state snapshot. An ignored call produces no events.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::state::{FinishReason, MatchState};
use crate::core::{Player, PlayerId, PlayerMap, PlayerStats};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    MatchStarted {
        difficulty: Option<u8>,
        max_rope: i32,
    },
    RoundStarted {
        round: u32,
        player: PlayerId,
        difficulty: u8,
    },
    AnswerResolved {
        round: u32,
        player: PlayerId,
        correct: bool,
        timed_out: bool,
        rope_position: i32,
        streak: u32,
        /// Streak reached the configured milestone on this answer.
        streak_milestone: bool,
    },
    Finished(MatchSummary),
    Reset,
}

/// Final standings carried by `MatchEvent::Finished`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub winner: PlayerId,
    pub reason: FinishReason,
    pub rounds: u32,
    pub rope_position: i32,
    pub players: PlayerMap<Player>,
    pub stats: PlayerMap<PlayerStats>,
}

pub type Events = SmallVec<[MatchEvent; 2]>;

/// Snapshot plus whatever happened during one operation.
#[derive(Clone, Debug, PartialEq)]
pub struct Update {
    pub snapshot: MatchState,
    pub events: Events,
}

impl Update {
    /// The operation was ignored.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.events.is_empty()
    }

    /// The `Finished` summary, if this update ended the match.
    #[must_use]
    pub fn finished(&self) -> Option<&MatchSummary> {
        self.events.iter().find_map(|e| match e {
            MatchEvent::Finished(summary) => Some(summary),
            _ => None,
        })
    }
}
