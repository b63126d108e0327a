//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! A duel has exactly two seats, `P1` and `P2`. The wire names are the
//! literal strings `"P1"` and `"P2"`.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId`. Serializes as a map keyed
//! by the wire names so snapshots read `{"P1": ..., "P2": ...}`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats in a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    P1,
    P2,
}

impl PlayerId {
    /// Both seats, in seating order.
    pub const ALL: [PlayerId; 2] = [PlayerId::P1, PlayerId::P2];

    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PlayerId::P1 => PlayerId::P2,
            PlayerId::P2 => PlayerId::P1,
        }
    }

    /// Slot index (0 for `P1`, 1 for `P2`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::P1 => 0,
            PlayerId::P2 => 1,
        }
    }

    /// Iterate over both seats.
    ///
    /// ```
    /// use grid_duel::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::P1, PlayerId::P2]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::P1 => write!(f, "P1"),
            PlayerId::P2 => write!(f, "P2"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use grid_duel::core::{PlayerId, PlayerMap};
///
/// let mut hp: PlayerMap<u32> = PlayerMap::new(|_| 10);
/// hp[PlayerId::P2] = 7;
///
/// assert_eq!(hp[PlayerId::P1], 10);
/// assert_eq!(hp[PlayerId::P2], 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    #[serde(rename = "P1")]
    p1: T,
    #[serde(rename = "P2")]
    p2: T,
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            p1: factory(PlayerId::P1),
            p2: factory(PlayerId::P2),
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            p1: value.clone(),
            p2: value,
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        match player {
            PlayerId::P1 => &self.p1,
            PlayerId::P2 => &self.p2,
        }
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        match player {
            PlayerId::P1 => &mut self.p1,
            PlayerId::P2 => &mut self.p2,
        }
    }

    /// Mutable references to both entries at once, in (`player`, other) order.
    pub fn pair_mut(&mut self, player: PlayerId) -> (&mut T, &mut T) {
        match player {
            PlayerId::P1 => (&mut self.p1, &mut self.p2),
            PlayerId::P2 => (&mut self.p2, &mut self.p1),
        }
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        [(PlayerId::P1, &self.p1), (PlayerId::P2, &self.p2)].into_iter()
    }

    /// Iterate over all values.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        [&self.p1, &self.p2].into_iter()
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
