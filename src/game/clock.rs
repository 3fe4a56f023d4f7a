//! Countdowns driven by host ticks.
//!
//! The core never reads a clock. The host reports elapsed whole seconds
//! via `TugMatch::tick`, and the match decides what expiry means.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    duration: u32,
    remaining: u32,
}

impl Countdown {
    /// A zero duration is raised to one second.
    #[must_use]
    pub const fn new(seconds: u32) -> Self {
        let seconds = if seconds == 0 { 1 } else { seconds };
        Self {
            duration: seconds,
            remaining: seconds,
        }
    }

    #[must_use]
    pub const fn duration(&self) -> u32 {
        self.duration
    }

    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    pub fn restart(&mut self) {
        self.remaining = self.duration;
    }

    /// Advance by `seconds`. Returns `true` only on the tick that reaches zero.
    pub fn tick(&mut self, seconds: u32) -> bool {
        if self.is_expired() {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(seconds);
        self.is_expired()
    }
}
