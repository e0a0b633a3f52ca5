//! Summoned entities and token counts.
//!
//! Summon skills create tracked entities with their own decay rules: the
//! dragon carries a death counter that ticks down each of its owner's turn
//! ends while its attack grows, the hero and queen-spawned insects last
//! only until the owner's turn ends, the giant and demon persist.

use serde::{Deserialize, Serialize};

use crate::catalog::{SummonKind, TokenKind};
use crate::core::player::Player;

/// Dragon death counter at summon time.
pub const DRAGON_DEATH_COUNTER: u32 = 3;

/// Attack gained by the dragon per owner turn end.
pub const DRAGON_ATTACK_GROWTH: u32 = 2;

/// One tracked summoned entity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSummon {
    pub kind: SummonKind,
    pub owner: Player,
    /// Turns until the entity dies; `None` for entities without a counter.
    pub death_counter: Option<u32>,
    /// Attack accumulated on top of the printed value.
    pub attack_bonus: u32,
    /// Removed when the owner's turn ends.
    pub until_end_of_turn: bool,
}

impl ActiveSummon {
    #[must_use]
    pub fn new(kind: SummonKind, owner: Player) -> Self {
        match kind {
            SummonKind::Dragon => Self {
                kind,
                owner,
                death_counter: Some(DRAGON_DEATH_COUNTER),
                attack_bonus: 0,
                until_end_of_turn: false,
            },
            SummonKind::Hero => Self {
                kind,
                owner,
                death_counter: None,
                attack_bonus: 0,
                until_end_of_turn: true,
            },
            SummonKind::Giant => Self {
                kind,
                owner,
                death_counter: None,
                attack_bonus: 0,
                until_end_of_turn: false,
            },
        }
    }

    /// Advance the death counter at the owner's turn end. Returns `true`
    /// when the entity dies.
    pub fn tick_owner_turn(&mut self) -> bool {
        match self.death_counter.as_mut() {
            None => false,
            Some(counter) => {
                *counter = counter.saturating_sub(1);
                self.attack_bonus += DRAGON_ATTACK_GROWTH;
                *counter == 0
            }
        }
    }
}

/// Per-player token counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCounts {
    /// Queen-spawned insects; cleared at the owner's turn end.
    pub insects: u32,
    /// Demons persist.
    pub demons: u32,
}

impl TokenCounts {
    pub fn add(&mut self, kind: TokenKind, count: u32) {
        match kind {
            TokenKind::Insect => self.insects += count,
            TokenKind::Demon => self.demons += count,
        }
    }
}
