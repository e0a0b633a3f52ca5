//! Punishment records and severity rules.
//!
//! When a finite domain runs out of turns, the owner owes a punishment.
//! Records are queued FIFO in [`GameState`](crate::core::state::GameState)
//! and resolved one at a time, either by rolling the luck passive or by
//! accepting the outcome directly. This module holds the record type and
//! the pure severity/luck rules; the state transitions live in the engine.

use serde::{Deserialize, Serialize};

use crate::catalog::SkillId;
use crate::core::player::Player;
use crate::core::state::JackpotEffects;
use crate::engine::domains::DomainId;

/// Base luck percentage when no 100% charge is held.
pub const BASE_LUCK_PERCENT: u8 = 25;

/// Life left by a reduced punishment.
pub const REDUCED_PUNISHMENT_LIFE: u32 = 5;

/// Life left when a complete punishment is accepted directly.
pub const ACCEPTED_DEFEAT_LIFE: u32 = 1;

/// How hard a punishment lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PunishmentSeverity {
    /// Defeat: life floored, hand, deck, and graveyard discarded.
    Complete,
    /// Life set to 5, hand discarded, skill reactivated, second chance on.
    Reduced,
    /// Voided entirely; the skill reactivates.
    Canceled,
}

impl PunishmentSeverity {
    /// One step softer. Option 8's escape hatch.
    #[must_use]
    pub const fn downgraded(self) -> Self {
        match self {
            Self::Complete => Self::Reduced,
            Self::Reduced | Self::Canceled => Self::Canceled,
        }
    }
}

/// A pending punishment for one expired domain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainPunishment {
    pub domain: DomainId,
    pub domain_name: String,
    pub skill: SkillId,
    pub player: Player,
    /// The domain ran out during its own owner's turn end.
    pub ended_on_own_turn: bool,
    /// Base severity before any option-8 downgrade.
    pub severity: PunishmentSeverity,
    pub has_effect_8: bool,
    pub has_effect_9: bool,
    pub luck_percentage: u8,
    /// The 100% came from a banked overflowing-luck charge, which is
    /// spent when the luck passive is rolled.
    pub uses_overflowing_luck: bool,
}

impl DomainPunishment {
    /// Build the punishment record for an expired domain.
    ///
    /// Severity is complete when the domain ended on its owner's own turn,
    /// reduced otherwise. Luck is 100% under effect 9, else 100% from a
    /// banked overflowing-luck charge, else the skill's base percentage.
    #[must_use]
    pub fn for_expiry(
        domain: DomainId,
        domain_name: String,
        skill: SkillId,
        player: Player,
        ended_on_own_turn: bool,
        effects: &JackpotEffects,
        base_luck: u8,
    ) -> Self {
        let severity = if ended_on_own_turn {
            PunishmentSeverity::Complete
        } else {
            PunishmentSeverity::Reduced
        };
        let (luck_percentage, uses_overflowing_luck) = if effects.has_effect_9 {
            (100, false)
        } else if effects.overflowing_luck {
            (100, true)
        } else {
            (base_luck, false)
        };
        Self {
            domain,
            domain_name,
            skill,
            player,
            ended_on_own_turn,
            severity,
            has_effect_8: effects.has_effect_8,
            has_effect_9: effects.has_effect_9,
            luck_percentage,
            uses_overflowing_luck,
        }
    }

    /// Severity actually applied on a failed (or skipped) luck roll.
    #[must_use]
    pub fn applied_severity(&self) -> PunishmentSeverity {
        if self.has_effect_8 {
            self.severity.downgraded()
        } else {
            self.severity
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::registry::skills;

    fn effects(e8: bool, e9: bool, overflow: bool) -> JackpotEffects {
        JackpotEffects {
            has_effect_8: e8,
            has_effect_9: e9,
            overflowing_luck: overflow,
            is_second_chance: false,
        }
    }

    fn punishment(own_turn: bool, fx: &JackpotEffects) -> DomainPunishment {
        DomainPunishment::for_expiry(
            DomainId(1),
            "Jackpot".into(),
            skills::JACKPOT,
            Player::One,
            own_turn,
            fx,
            BASE_LUCK_PERCENT,
        )
    }

    #[test]
    fn test_severity_from_turn_ownership() {
        let fx = effects(false, false, false);
        assert_eq!(punishment(true, &fx).severity, PunishmentSeverity::Complete);
        assert_eq!(punishment(false, &fx).severity, PunishmentSeverity::Reduced);
    }

    #[test]
    fn test_luck_percentage_sources() {
        assert_eq!(punishment(true, &effects(false, false, false)).luck_percentage, 25);

        let nine = punishment(true, &effects(false, true, false));
        assert_eq!(nine.luck_percentage, 100);
        assert!(!nine.uses_overflowing_luck);

        let overflow = punishment(true, &effects(false, false, true));
        assert_eq!(overflow.luck_percentage, 100);
        assert!(overflow.uses_overflowing_luck);

        // Effect 9 takes precedence; the banked charge is not spent.
        let both = punishment(true, &effects(false, true, true));
        assert!(!both.uses_overflowing_luck);
    }

    #[test]
    fn test_effect_8_downgrade_chain() {
        let fx = effects(true, false, false);
        assert_eq!(punishment(true, &fx).applied_severity(), PunishmentSeverity::Reduced);
        assert_eq!(punishment(false, &fx).applied_severity(), PunishmentSeverity::Canceled);

        let plain = effects(false, false, false);
        assert_eq!(punishment(true, &plain).applied_severity(), PunishmentSeverity::Complete);
    }
}
