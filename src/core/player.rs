//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. Seats are 0-based in the order players were
//! passed to `GameLogic::start_game`.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `Vec` for O(1) access. The engine keeps its
//! `Player` records in one, and hands out disjoint mutable pairs for
//! two-player effects (steal, swap).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player identifier supporting 1-255 seats.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use flip_out::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use flip_out::core::{PlayerId, PlayerMap};
///
/// let mut blocked: PlayerMap<u32> = PlayerMap::new(4, |_| 0);
/// blocked[PlayerId::new(1)] = 2;
/// assert_eq!(blocked[PlayerId::new(1)], 2);
/// assert_eq!(blocked[PlayerId::new(0)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Take ownership of one value per seat, in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    /// Give the values back, in seat order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Check whether `player` is a seat in this map.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.data.len()
    }

    /// Get a reference to a player's data, or `None` for an unknown seat.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Borrow two distinct seats mutably at once.
    ///
    /// Returns `None` if the seats are equal or either is out of range.
    pub fn pair_mut(&mut self, a: PlayerId, b: PlayerId) -> Option<(&mut T, &mut T)> {
        let (ai, bi) = (a.index(), b.index());
        if ai == bi || ai >= self.data.len() || bi >= self.data.len() {
            return None;
        }

        if ai < bi {
            let (left, right) = self.data.split_at_mut(bi);
            Some((&mut left[ai], &mut right[0]))
        } else {
            let (left, right) = self.data.split_at_mut(ai);
            Some((&mut right[0], &mut left[bi]))
        }
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_map_from_vec_roundtrip() {
        let map = PlayerMap::from_vec(vec!["a", "b", "c"]);
        assert_eq!(map.player_count(), 3);
        assert_eq!(map[PlayerId::new(2)], "c");
        assert!(map.contains(PlayerId::new(2)));
        assert!(!map.contains(PlayerId::new(3)));
        assert_eq!(map.get(PlayerId::new(3)), None);
        assert_eq!(map.into_vec(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_pair_mut_both_orders() {
        let mut map = PlayerMap::new(4, |p| p.index() as i32);

        {
            let (a, b) = map.pair_mut(PlayerId::new(1), PlayerId::new(3)).unwrap();
            assert_eq!((*a, *b), (1, 3));
            std::mem::swap(a, b);
        }
        assert_eq!(map[PlayerId::new(1)], 3);
        assert_eq!(map[PlayerId::new(3)], 1);

        let (a, b) = map.pair_mut(PlayerId::new(2), PlayerId::new(0)).unwrap();
        assert_eq!((*a, *b), (2, 0));
    }

    #[test]
    fn test_pair_mut_rejects_same_or_missing() {
        let mut map = PlayerMap::new(2, |_| 0);
        assert!(map.pair_mut(PlayerId::new(0), PlayerId::new(0)).is_none());
        assert!(map.pair_mut(PlayerId::new(0), PlayerId::new(5)).is_none());
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i32> = PlayerMap::new(3, |p| p.index() as i32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], (PlayerId::new(0), &0));
        assert_eq!(pairs[2], (PlayerId::new(2), &2));
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::new(2, |p| p.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::from_vec(Vec::new());
    }
}
