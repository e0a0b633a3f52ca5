//! Skill definitions - static skill data.
//!
//! `SkillDefinition` holds the immutable properties of a skill: its usage
//! policy, activation gates, options, and what it produces when activated.
//! Per-game mutable state (used flags, cooldown counters) lives separately
//! in `SkillInstance`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a skill definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillId(pub u32);

impl SkillId {
    /// Create a new skill ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SkillId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Skill({})", self.0)
    }
}

/// Identifier for an option within a skill (wish number, jackpot effect
/// number, treasure tier). Only unique within its skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionId(pub u8);

impl OptionId {
    /// Create a new option ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

/// Sealed behavior variant for a skill.
///
/// The engine dispatches on this instead of comparing raw skill ids, so
/// adding a standard skill never touches engine control flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillKind {
    /// Randomized multi-turn domain with punishment on expiry.
    Jackpot,
    /// Permanent domain with its own counter sub-game.
    WitchCoven,
    /// Reacts to incoming lethal damage instead of being activated.
    Reactive,
    /// Everything else: direct activation per usage policy.
    Standard,
}

/// How often a skill may be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UsagePolicy {
    /// Usable whenever its condition holds; never exhausted.
    Conditional,
    /// One use per game.
    Once,
    /// A fixed number of uses per game.
    Limited { max: u32 },
    /// Re-usable after a cooldown of full turns.
    Cooldown { turns: u32 },
}

/// Life threshold required before a skill may be activated.
///
/// Percentages are evaluated against the inferred max life
/// (`life > 20 ? 40 : 20`), matching the app's gating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationCondition {
    #[default]
    None,
    LifeAtMost50,
    LifeAtMost40,
    LifeAtMost25,
}

impl ActivationCondition {
    /// Threshold as a percentage of max life, if any.
    #[must_use]
    pub const fn percent(self) -> Option<u32> {
        match self {
            ActivationCondition::None => None,
            ActivationCondition::LifeAtMost50 => Some(50),
            ActivationCondition::LifeAtMost40 => Some(40),
            ActivationCondition::LifeAtMost25 => Some(25),
        }
    }
}

/// Kind of tracked summon produced by a summon skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SummonKind {
    /// Enters with a 3-turn death counter and +2 attack per turn.
    Dragon,
    /// Destroyed at the end of the owner's turn.
    Hero,
    /// Permanent until destroyed by play.
    Giant,
}

/// Kind of counted token produced by a summon skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Queen-spawned insects die at the end of the owner's turn.
    Insect,
    Demon,
}

/// What a summon-producing skill creates on activation.
///
/// This is the static skill-to-entity table; the activation engine reads
/// it rather than branching per skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummonOutput {
    Summon(SummonKind),
    /// Token with a fixed count per activation.
    Token { kind: TokenKind, count: u32 },
    /// Token whose count is supplied by the player (insect queen: one per
    /// poisoned enemy unit).
    TokenFromInput(TokenKind),
}

/// A selectable (or, for domain skills, drawable) option of a skill.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillOption {
    pub id: OptionId,
    pub name: String,
    pub description: String,
}

impl SkillOption {
    pub fn new(id: OptionId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Static skill definition.
///
/// ## Example
///
/// ```
/// use larien_engine::catalog::{SkillDefinition, SkillId, SkillKind, UsagePolicy};
///
/// let skill = SkillDefinition::new(SkillId::new(1), "Delorian", SkillKind::Standard)
///     .with_usage(UsagePolicy::Once);
///
/// assert_eq!(skill.name, "Delorian");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SkillDefinition {
    /// Unique identifier for this skill.
    pub id: SkillId,

    /// Display name.
    pub name: String,

    /// Behavior variant the engine dispatches on.
    pub kind: SkillKind,

    /// How often the skill may be used.
    pub usage: UsagePolicy,

    /// Options (wishes, treasure tiers, jackpot effects). For domain skills
    /// these are drawn automatically, never chosen.
    pub options: Vec<SkillOption>,

    /// Domain skills draw their options at random and track a domain.
    pub is_domain: bool,

    /// Life threshold gate.
    pub activation: ActivationCondition,

    /// Usable only during the owner's turn.
    pub owner_turn_only: bool,

    /// Options restricted to the owner's turn (when the skill itself is not).
    pub owner_turn_only_options: Vec<OptionId>,

    /// Summon skills are blocked until the owner's third turn.
    pub is_summon: bool,

    /// What a summon skill produces, if anything.
    pub summon_output: Option<SummonOutput>,

    /// Base luck-passive percentage for domain punishment (25 for Jackpot).
    pub base_luck: u8,
}

impl SkillDefinition {
    /// Create a new skill definition with defaults.
    #[must_use]
    pub fn new(id: SkillId, name: impl Into<String>, kind: SkillKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            usage: UsagePolicy::Once,
            options: Vec::new(),
            is_domain: false,
            activation: ActivationCondition::None,
            owner_turn_only: false,
            owner_turn_only_options: Vec::new(),
            is_summon: false,
            summon_output: None,
            base_luck: 25,
        }
    }

    /// Set the usage policy (builder pattern).
    #[must_use]
    pub fn with_usage(mut self, usage: UsagePolicy) -> Self {
        self.usage = usage;
        self
    }

    /// Add an option (builder pattern).
    #[must_use]
    pub fn with_option(
        mut self,
        id: u8,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.options
            .push(SkillOption::new(OptionId::new(id), name, description));
        self
    }

    /// Mark as a domain skill.
    #[must_use]
    pub fn domain(mut self) -> Self {
        self.is_domain = true;
        self
    }

    /// Set the life-threshold gate.
    #[must_use]
    pub fn with_activation(mut self, condition: ActivationCondition) -> Self {
        self.activation = condition;
        self
    }

    /// Restrict to the owner's turn.
    #[must_use]
    pub fn owner_turn_only(mut self) -> Self {
        self.owner_turn_only = true;
        self
    }

    /// Restrict specific options to the owner's turn.
    #[must_use]
    pub fn with_owner_turn_options(mut self, ids: &[u8]) -> Self {
        self.owner_turn_only_options = ids.iter().copied().map(OptionId::new).collect();
        self
    }

    /// Mark as a summon skill (blocked before owner turn 3).
    #[must_use]
    pub fn summon(mut self, output: SummonOutput) -> Self {
        self.is_summon = true;
        self.summon_output = Some(output);
        self
    }

    /// Look up an option by id.
    #[must_use]
    pub fn option(&self, id: OptionId) -> Option<&SkillOption> {
        self.options.iter().find(|o| o.id == id)
    }

    /// Whether an option is restricted to the owner's turn.
    #[must_use]
    pub fn option_owner_turn_only(&self, id: OptionId) -> bool {
        self.owner_turn_only_options.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let skill = SkillDefinition::new(SkillId::new(1), "Test", SkillKind::Standard);

        assert_eq!(skill.usage, UsagePolicy::Once);
        assert!(!skill.is_domain);
        assert!(!skill.owner_turn_only);
        assert_eq!(skill.activation, ActivationCondition::None);
        assert_eq!(skill.base_luck, 25);
    }

    #[test]
    fn test_builder_chain() {
        let skill = SkillDefinition::new(SkillId::new(2), "Domain", SkillKind::Jackpot)
            .with_usage(UsagePolicy::Once)
            .domain()
            .with_activation(ActivationCondition::LifeAtMost50)
            .owner_turn_only()
            .with_option(1, "First", "does a thing")
            .with_option(2, "Second", "does another");

        assert!(skill.is_domain);
        assert!(skill.owner_turn_only);
        assert_eq!(skill.options.len(), 2);
        assert_eq!(skill.option(OptionId::new(1)).unwrap().name, "First");
        assert!(skill.option(OptionId::new(9)).is_none());
    }

    #[test]
    fn test_owner_turn_options() {
        let skill = SkillDefinition::new(SkillId::new(3), "Lamp", SkillKind::Standard)
            .with_owner_turn_options(&[1, 2]);

        assert!(skill.option_owner_turn_only(OptionId::new(1)));
        assert!(skill.option_owner_turn_only(OptionId::new(2)));
        assert!(!skill.option_owner_turn_only(OptionId::new(3)));
    }

    #[test]
    fn test_activation_percent() {
        assert_eq!(ActivationCondition::None.percent(), None);
        assert_eq!(ActivationCondition::LifeAtMost50.percent(), Some(50));
        assert_eq!(ActivationCondition::LifeAtMost25.percent(), Some(25));
    }
}
