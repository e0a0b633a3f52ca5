//! Game configuration.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Phases of one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Draw,
    Main,
    Attack,
}

impl Phase {
    /// Next phase within the same turn, or `None` at the end of the turn.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Draw => Some(Self::Main),
            Self::Main => Some(Self::Attack),
            Self::Attack => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Draw => "Draw",
            Self::Main => "Main",
            Self::Attack => "Attack",
        };
        write!(f, "{name}")
    }
}

/// Static setup for one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Starting (and configured maximum) life. Games run at 20 or 40.
    pub starting_life: u32,
    pub starting_player: Player,
    /// RNG seed; a full game replays from it.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_life: 20,
            starting_player: Player::One,
            seed: 0,
        }
    }
}
