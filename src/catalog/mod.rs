//! Skill catalog: definitions, registry, and per-player instances.

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{
    ActivationCondition, OptionId, SkillDefinition, SkillId, SkillKind, SkillOption, SummonKind,
    SummonOutput, TokenKind, UsagePolicy,
};
pub use instance::{SkillInstance, UseContext, UseDenied};
pub use registry::SkillRegistry;
