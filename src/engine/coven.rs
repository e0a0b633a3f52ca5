//! Witch coven state.
//!
//! The coven is a permanent domain with its own counters: witches across
//! four zones feeding the Caldero Negro damage formula, a permanently
//! raisable treasure limit, and the Mother Witch gamble's cooldown. The
//! state transitions that touch lives and domains live in the engine; this
//! module keeps the counter arithmetic.

use serde::{Deserialize, Serialize};

/// Damage dealt by the Caldero Negro per counted witch.
pub const CALDERO_DAMAGE_PER_WITCH: u32 = 3;

/// Starting treasure limit.
pub const BASE_TREASURE_LIMIT: u32 = 7;

/// Treasure gained on a successful Mother Witch spell.
pub const MOTHER_WITCH_TREASURE_BONUS: u32 = 2;

/// Life lost on a failed Mother Witch spell.
pub const MOTHER_WITCH_FAILURE_DAMAGE: u32 = 3;

/// Cooldown after a successful Mother Witch spell.
pub const MOTHER_WITCH_SUCCESS_COOLDOWN: u32 = 1;

/// Cooldown after a failed Mother Witch spell.
pub const MOTHER_WITCH_FAILURE_COOLDOWN: u32 = 3;

/// Witch counts per zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WitchZones {
    pub field: u32,
    pub hand: u32,
    pub graveyard: u32,
    pub averno: u32,
}

/// Per-player coven state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WitchCovenState {
    /// One-way latch: never reverts within a game.
    pub is_active: bool,
    /// Owner turn count when the coven was activated.
    pub activated_turn: u32,
    pub witches: WitchZones,
    pub treasure_limit: u32,
    pub mother_witch_cooldown: u32,
    /// Owner turn count of the last Mother Witch cast.
    pub last_mother_witch_turn: u32,
}

impl Default for WitchCovenState {
    fn default() -> Self {
        Self {
            is_active: false,
            activated_turn: 0,
            witches: WitchZones::default(),
            treasure_limit: BASE_TREASURE_LIMIT,
            mother_witch_cooldown: 0,
            last_mother_witch_turn: 0,
        }
    }
}

impl WitchCovenState {
    /// Witches counted toward the caldero.
    ///
    /// The graveyard always counts; field, hand, and averno count only
    /// while the coven is active.
    #[must_use]
    pub fn witch_total(&self) -> u32 {
        let mut total = self.witches.graveyard;
        if self.is_active {
            total += self.witches.field + self.witches.hand + self.witches.averno;
        }
        total
    }

    /// Caldero Negro damage at the current witch total.
    #[must_use]
    pub fn caldero_damage(&self) -> u32 {
        CALDERO_DAMAGE_PER_WITCH * self.witch_total()
    }

    /// Latch the coven on.
    pub fn activate(&mut self, owner_turn: u32) {
        self.is_active = true;
        self.activated_turn = owner_turn;
    }

    /// Whether the Mother Witch spell may be cast.
    #[must_use]
    pub fn can_cast_mother_witch(&self) -> bool {
        self.is_active && self.mother_witch_cooldown == 0
    }

    /// Record a Mother Witch outcome.
    ///
    /// Success raises the treasure limit permanently and sets the short
    /// cooldown; failure sets the long one. Returns the life penalty to
    /// apply to the owner, if any.
    pub fn resolve_mother_witch(&mut self, success: bool, owner_turn: u32) -> Option<u32> {
        self.last_mother_witch_turn = owner_turn;
        if success {
            self.treasure_limit += MOTHER_WITCH_TREASURE_BONUS;
            self.mother_witch_cooldown = MOTHER_WITCH_SUCCESS_COOLDOWN;
            None
        } else {
            self.mother_witch_cooldown = MOTHER_WITCH_FAILURE_COOLDOWN;
            Some(MOTHER_WITCH_FAILURE_DAMAGE)
        }
    }

    /// Owner-turn-end tick. Unlike skill cooldowns, this only advances on
    /// the owner's own turn.
    pub fn tick_owner_turn(&mut self) {
        self.mother_witch_cooldown = self.mother_witch_cooldown.saturating_sub(1);
    }
}
