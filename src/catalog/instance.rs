//! Per-player runtime state of a skill.
//!
//! A `SkillInstance` tracks the mutable side of one skill slot: whether it
//! has been spent, how many uses remain, the current cooldown, and which
//! options have already been picked. The immutable rules live in the
//! [`SkillDefinition`](super::definition::SkillDefinition).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::definition::{OptionId, SkillDefinition, SkillKind, UsagePolicy};

/// Summoning skills unlock on the owner's third turn.
pub const SUMMON_UNLOCK_TURN: u32 = 3;

/// The witch coven unlocks on the owner's fifth turn.
pub const COVEN_UNLOCK_TURN: u32 = 5;

/// Why a skill cannot be used right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UseDenied {
    /// Exhausted, on cooldown, or all uses spent.
    Exhausted,
    /// The skill only works during the owner's turn.
    NotOwnerTurn,
    /// The owner's life is above the activation threshold.
    LifeTooHigh,
    /// Summoning skills need the owner's third turn.
    SummonLocked,
    /// The coven needs the owner's fifth turn.
    CovenLocked,
}

/// Snapshot of the facts `can_use` gates on.
#[derive(Clone, Copy, Debug)]
pub struct UseContext {
    /// Whether it is currently the skill owner's turn.
    pub is_owner_turn: bool,
    /// The owner's current life.
    pub current_life: u32,
    /// How many turns the owner has taken (including the current one).
    pub owner_turn_count: u32,
}

/// Maximum life inferred from current life.
///
/// Games are played at 20 or 40 life; a player above 20 must be in a
/// 40-life game.
#[must_use]
pub const fn infer_max_life(current_life: u32) -> u32 {
    if current_life > 20 {
        40
    } else {
        20
    }
}

/// Runtime state of one skill slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillInstance {
    /// Fully spent (no further activations under its policy).
    pub used: bool,
    /// Remaining uses for `Limited` skills; `None` for other policies.
    pub uses_remaining: Option<u32>,
    /// Turns until the skill comes off cooldown. Zero means ready.
    pub cooldown_remaining: u32,
    /// Options already picked on this instance.
    pub used_options: SmallVec<[OptionId; 4]>,
}

impl SkillInstance {
    /// Fresh instance for a definition.
    #[must_use]
    pub fn new(definition: &SkillDefinition) -> Self {
        let uses_remaining = match definition.usage {
            UsagePolicy::Limited { max } => Some(max),
            _ => None,
        };
        Self {
            used: false,
            uses_remaining,
            cooldown_remaining: 0,
            used_options: SmallVec::new(),
        }
    }

    /// Check every activation gate against the definition and context.
    ///
    /// Returns `Ok(())` when the skill may be activated, or the first
    /// failing gate otherwise.
    pub fn can_use(
        &self,
        definition: &SkillDefinition,
        ctx: &UseContext,
    ) -> Result<(), UseDenied> {
        if self.is_exhausted(definition) {
            return Err(UseDenied::Exhausted);
        }
        if definition.owner_turn_only && !ctx.is_owner_turn {
            return Err(UseDenied::NotOwnerTurn);
        }
        if let Some(pct) = definition.activation.percent() {
            let max_life = infer_max_life(ctx.current_life);
            if ctx.current_life * 100 > max_life * pct {
                return Err(UseDenied::LifeTooHigh);
            }
        }
        if definition.is_summon && ctx.owner_turn_count < SUMMON_UNLOCK_TURN {
            return Err(UseDenied::SummonLocked);
        }
        if definition.kind == SkillKind::WitchCoven && ctx.owner_turn_count < COVEN_UNLOCK_TURN {
            return Err(UseDenied::CovenLocked);
        }
        Ok(())
    }

    /// Whether the usage policy has nothing left to give.
    #[must_use]
    pub fn is_exhausted(&self, definition: &SkillDefinition) -> bool {
        match definition.usage {
            UsagePolicy::Conditional => false,
            UsagePolicy::Once => self.used,
            UsagePolicy::Limited { .. } => {
                self.used || self.uses_remaining.is_some_and(|n| n == 0)
            }
            UsagePolicy::Cooldown { .. } => self.cooldown_remaining > 0,
        }
    }

    /// Record an activation, spending the policy and the chosen option.
    pub fn consume(&mut self, definition: &SkillDefinition, option: Option<OptionId>) {
        if let Some(option) = option {
            if !self.used_options.contains(&option) {
                self.used_options.push(option);
            }
        }
        match definition.usage {
            UsagePolicy::Conditional => {}
            UsagePolicy::Once => {
                self.used = true;
            }
            UsagePolicy::Limited { .. } => {
                if let Some(remaining) = self.uses_remaining.as_mut() {
                    *remaining = remaining.saturating_sub(1);
                    if *remaining == 0 {
                        self.used = true;
                    }
                }
            }
            UsagePolicy::Cooldown { turns } => {
                self.cooldown_remaining = turns;
            }
        }
    }

    /// Advance the cooldown by one turn.
    pub fn tick_cooldown(&mut self) {
        self.cooldown_remaining = self.cooldown_remaining.saturating_sub(1);
    }

    /// Restore the skill to a usable state.
    ///
    /// Used when a punishment is reduced instead of completed and the
    /// domain gets a second chance.
    pub fn reactivate(&mut self, definition: &SkillDefinition) {
        self.used = false;
        self.cooldown_remaining = 0;
        if let UsagePolicy::Limited { max } = definition.usage {
            self.uses_remaining = Some(max);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::definition::{ActivationCondition, SkillId, SummonKind, SummonOutput};

    fn ctx(is_owner_turn: bool, life: u32, turns: u32) -> UseContext {
        UseContext {
            is_owner_turn,
            current_life: life,
            owner_turn_count: turns,
        }
    }

    fn once_skill() -> SkillDefinition {
        SkillDefinition::new(SkillId::new(1), "Once", SkillKind::Standard)
            .with_usage(UsagePolicy::Once)
    }

    #[test]
    fn test_once_policy() {
        let def = once_skill();
        let mut inst = SkillInstance::new(&def);

        assert_eq!(inst.can_use(&def, &ctx(true, 20, 1)), Ok(()));
        inst.consume(&def, None);
        assert_eq!(inst.can_use(&def, &ctx(true, 20, 1)), Err(UseDenied::Exhausted));
    }

    #[test]
    fn test_limited_policy() {
        let def = SkillDefinition::new(SkillId::new(2), "Limited", SkillKind::Standard)
            .with_usage(UsagePolicy::Limited { max: 2 });
        let mut inst = SkillInstance::new(&def);

        assert_eq!(inst.uses_remaining, Some(2));
        inst.consume(&def, Some(OptionId::new(1)));
        assert_eq!(inst.can_use(&def, &ctx(true, 20, 1)), Ok(()));
        inst.consume(&def, Some(OptionId::new(2)));
        assert!(inst.used);
        assert_eq!(inst.can_use(&def, &ctx(true, 20, 1)), Err(UseDenied::Exhausted));
        assert_eq!(inst.used_options.as_slice(), &[OptionId::new(1), OptionId::new(2)]);
    }

    #[test]
    fn test_cooldown_policy() {
        let def = SkillDefinition::new(SkillId::new(3), "Cooldown", SkillKind::Standard)
            .with_usage(UsagePolicy::Cooldown { turns: 2 });
        let mut inst = SkillInstance::new(&def);

        inst.consume(&def, None);
        assert_eq!(inst.cooldown_remaining, 2);
        assert_eq!(inst.can_use(&def, &ctx(true, 20, 1)), Err(UseDenied::Exhausted));
        inst.tick_cooldown();
        inst.tick_cooldown();
        assert_eq!(inst.can_use(&def, &ctx(true, 20, 1)), Ok(()));
    }

    #[test]
    fn test_owner_turn_gate() {
        let def = once_skill().owner_turn_only();
        let inst = SkillInstance::new(&def);

        assert_eq!(inst.can_use(&def, &ctx(false, 20, 1)), Err(UseDenied::NotOwnerTurn));
        assert_eq!(inst.can_use(&def, &ctx(true, 20, 1)), Ok(()));
    }

    #[test]
    fn test_life_threshold_with_inferred_max() {
        let def = once_skill().with_activation(ActivationCondition::LifeAtMost50);
        let inst = SkillInstance::new(&def);

        // 20-life game: threshold is 10.
        assert_eq!(inst.can_use(&def, &ctx(true, 11, 1)), Err(UseDenied::LifeTooHigh));
        assert_eq!(inst.can_use(&def, &ctx(true, 10, 1)), Ok(()));
        // Above 20 life implies a 40-life game: threshold is 20... but 21
        // is above it, while exactly 20 reads as a 20-life game at full.
        assert_eq!(inst.can_use(&def, &ctx(true, 21, 1)), Err(UseDenied::LifeTooHigh));
    }

    #[test]
    fn test_summon_gate() {
        let def = once_skill().summon(SummonOutput::Summon(SummonKind::Hero));
        let inst = SkillInstance::new(&def);

        assert_eq!(inst.can_use(&def, &ctx(true, 20, 2)), Err(UseDenied::SummonLocked));
        assert_eq!(inst.can_use(&def, &ctx(true, 20, 3)), Ok(()));
    }

    #[test]
    fn test_coven_gate() {
        let def = SkillDefinition::new(SkillId::new(4), "Coven", SkillKind::WitchCoven)
            .with_usage(UsagePolicy::Once);
        let inst = SkillInstance::new(&def);

        assert_eq!(inst.can_use(&def, &ctx(true, 20, 4)), Err(UseDenied::CovenLocked));
        assert_eq!(inst.can_use(&def, &ctx(true, 20, 5)), Ok(()));
    }

    #[test]
    fn test_reactivate() {
        let def = once_skill();
        let mut inst = SkillInstance::new(&def);
        inst.consume(&def, None);
        assert!(inst.used);

        inst.reactivate(&def);
        assert!(!inst.used);
        assert_eq!(inst.can_use(&def, &ctx(true, 20, 1)), Ok(()));
    }
}
