//! The two sides of the rope.
//!
//! Player 0 pulls toward the negative end of the rope, player 1 toward
//! the positive end. Per-seat data lives in a two-slot `PlayerMap`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::InvalidPlayerId;

/// One of the two players. Serialized as its seat index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The left player (pulls toward negative rope positions).
    pub const ZERO: PlayerId = PlayerId(0);
    /// The right player (pulls toward positive rope positions).
    pub const ONE: PlayerId = PlayerId(1);

    /// Create a player ID from a 0-based index. Any index other than 0
    /// maps to player 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        if id == 0 {
            Self::ZERO
        } else {
            Self::ONE
        }
    }

    /// Seat index, 0 or 1.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        PlayerId(1 - self.0)
    }

    /// Rope direction this player pulls: -1 for player 0, +1 for player 1.
    #[must_use]
    pub const fn pull(self) -> i32 {
        if self.0 == 0 {
            -1
        } else {
            1
        }
    }

    /// Both players in turn order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [Self::ZERO, Self::ONE].into_iter()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = InvalidPlayerId;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::ZERO),
            1 => Ok(Self::ONE),
            other => Err(InvalidPlayerId(other)),
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "seat {}", self.0)
    }
}

/// Per-player data for exactly two players.
///
/// ```
/// use tug_of_math::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::with_value(0);
/// scores[PlayerId::ONE] += 1;
/// assert_eq!(scores[PlayerId::ZERO], 0);
/// assert_eq!(scores[PlayerId::ONE], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    seats: [T; 2],
}

impl<T> PlayerMap<T> {
    /// One value per seat, built by `factory`.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            seats: [factory(PlayerId::ZERO), factory(PlayerId::ONE)],
        }
    }

    pub fn from_array(seats: [T; 2]) -> Self {
        Self { seats }
    }

    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Entries in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().zip(self.seats.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::both().zip(self.seats.iter_mut())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.seats[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.seats[player.index()]
    }
}

/// Name and colour supplied by the host when a match starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSetup {
    pub name: String,
    pub color_id: String,
}

impl PlayerSetup {
    pub fn new(name: impl Into<String>, color_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color_id: color_id.into(),
        }
    }

    /// Default setup for a seat ("Player 1" violet, "Player 2" pink).
    #[must_use]
    pub fn default_for(player: PlayerId) -> Self {
        match player.index() {
            0 => Self::new("Player 1", "violet"),
            _ => Self::new("Player 2", "pink"),
        }
    }
}

/// A player as seen by the match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub score: u32,
    pub color_id: String,
}

impl Player {
    /// Build a zero-score player from setup, falling back to the seat's
    /// default name and colour when either is blank.
    #[must_use]
    pub fn from_setup(player: PlayerId, setup: &PlayerSetup) -> Self {
        let fallback = PlayerSetup::default_for(player);
        let name = if setup.name.trim().is_empty() {
            fallback.name
        } else {
            setup.name.trim().to_string()
        };
        let color_id = if setup.color_id.trim().is_empty() {
            fallback.color_id
        } else {
            setup.color_id.clone()
        };

        Self {
            name,
            score: 0,
            color_id,
        }
    }
}

/// Per-player answer statistics for the end-of-match summary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub correct: u32,
    pub wrong: u32,
    pub current_streak: u32,
    pub max_streak: u32,
}

impl PlayerStats {
    pub fn record_correct(&mut self) {
        self.correct += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
    }

    pub fn record_wrong(&mut self) {
        self.wrong += 1;
        self.current_streak = 0;
    }

    /// Fraction of answered rounds that were correct (0.0 when none).
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        let total = self.correct + self.wrong;
        if total == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(total)
        }
    }
}
