//! Player identification and per-player data storage.
//!
//! The companion app always runs exactly two players on a shared screen,
//! so the player type is a closed enum rather than an open index.
//!
//! ## PlayerPair
//!
//! Per-player data storage indexable by `Player`. The usual pattern is a
//! `PlayerPair<T>` field on the game state holding one `T` per seat.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 0-based index, for array-backed storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Both players, in deterministic order.
    ///
    /// Batched passes (domain ticks, cooldown ticks) iterate in this order
    /// so simultaneous outcomes are reproducible.
    #[must_use]
    pub const fn both() -> [Player; 2] {
        [Player::One, Player::Two]
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use larien_engine::core::{Player, PlayerPair};
///
/// let mut life: PlayerPair<i64> = PlayerPair::with_value(20);
///
/// assert_eq!(life[Player::One], 20);
///
/// life[Player::Two] = 15;
/// assert_eq!(life[Player::Two], 15);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create with a factory function.
    pub fn new(mut f: impl FnMut(Player) -> T) -> Self {
        Self {
            data: [f(Player::One), f(Player::Two)],
        }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Iterate over `(player, value)` pairs in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::both().into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: Player) -> &T {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<Player> for PlayerPair<T> {
    fn index_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
    }

    #[test]
    fn test_both_order() {
        assert_eq!(Player::both(), [Player::One, Player::Two]);
    }

    #[test]
    fn test_pair_indexing() {
        let mut pair = PlayerPair::with_value(0);
        pair[Player::One] = 7;
        pair[Player::Two] = 3;

        assert_eq!(pair[Player::One], 7);
        assert_eq!(pair[Player::Two], 3);
    }

    #[test]
    fn test_pair_factory() {
        let pair = PlayerPair::new(|p| p.index() as i64);
        assert_eq!(pair[Player::One], 0);
        assert_eq!(pair[Player::Two], 1);
    }

    #[test]
    fn test_pair_iter() {
        let pair = PlayerPair::new(|p| p.index());
        let collected: Vec<_> = pair.iter().map(|(p, v)| (p, *v)).collect();
        assert_eq!(collected, vec![(Player::One, 0), (Player::Two, 1)]);
    }

    #[test]
    fn test_pair_serde() {
        let pair: PlayerPair<i64> = PlayerPair::with_value(20);
        let json = serde_json::to_string(&pair).unwrap();
        let back: PlayerPair<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, back);
    }
}
