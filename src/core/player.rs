//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! A match always seats exactly two players. `PlayerId::FIRST` acts first
//! in every turn cycle and is credited tied rounds.
//!
//! ## PlayerMap
//!
//! Two-slot per-player storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier: 0 for Player 1, 1 for Player 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Player 1.
    pub const FIRST: PlayerId = PlayerId(0);

    /// Player 2.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> PlayerId {
        PlayerId(1 - self.0)
    }

    /// Both seats, in turn order.
    ///
    /// ```
    /// use rust_gwent::core::PlayerId;
    ///
    /// let order: Vec<_> = PlayerId::both().collect();
    /// assert_eq!(order, vec![PlayerId::FIRST, PlayerId::SECOND]);
    /// ```
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [PlayerId::FIRST, PlayerId::SECOND].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_gwent::core::{PlayerId, PlayerMap};
///
/// let mut life: PlayerMap<u32> = PlayerMap::with_value(2);
/// life[PlayerId::SECOND] -= 1;
///
/// assert_eq!(life[PlayerId::FIRST], 2);
/// assert_eq!(life[PlayerId::SECOND], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map from explicit values for Player 1 and Player 2.
    pub fn from_pair(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self::from_pair(factory(PlayerId::FIRST), factory(PlayerId::SECOND))
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_pair(value.clone(), value)
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::both().zip(self.data.iter_mut())
    }

    /// Apply `f` to both entries, keeping seat order.
    pub fn map<U>(&self, mut f: impl FnMut(PlayerId, &T) -> U) -> PlayerMap<U> {
        PlayerMap::from_pair(
            f(PlayerId::FIRST, &self.data[0]),
            f(PlayerId::SECOND, &self.data[1]),
        )
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
