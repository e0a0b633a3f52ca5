//! Skill activation.
//!
//! One entry point, [`activate_skill`], runs the gate checks and then
//! dispatches on the skill's [`SkillKind`]: jackpot activations roll the
//! duration die and draw effects, the coven latches its permanent domain,
//! everything else resolves immediately (consuming the policy and, for
//! summon skills, creating the table-driven entity). Any failed gate is a
//! silent no-op with no partial mutation.

use crate::catalog::{
    OptionId, SkillDefinition, SkillKind, SkillRegistry, SummonOutput, UsagePolicy,
};
use crate::catalog::registry::jackpot;
use crate::core::player::Player;
use crate::core::state::GameState;
use crate::engine::domains::{ActiveDomain, DomainDuration};
use crate::engine::draw::{
    apply_bonus_effects, draw_domain_duration, draw_domain_effects, BASE_EFFECT_COUNT,
};
use crate::engine::summons::ActiveSummon;
use crate::events::GameEvent;

/// Activate `player`'s equipped skill.
pub(crate) fn activate_skill(
    registry: &SkillRegistry,
    state: &mut GameState,
    player: Player,
    option: Option<OptionId>,
    input: Option<u32>,
) {
    let Some(skill_id) = state.skills[player].as_ref().map(|eq| eq.skill) else {
        return;
    };
    let Some(def) = registry.get(skill_id) else {
        return;
    };
    let ctx = state.use_context(player);
    let Some(equipped) = state.skills[player].as_ref() else {
        return;
    };
    if equipped.instance.can_use(def, &ctx).is_err() {
        return;
    }
    if !def.is_domain {
        if let Some(option) = option {
            if def.option(option).is_none() {
                return;
            }
            if def.option_owner_turn_only(option) && !ctx.is_owner_turn {
                return;
            }
            // Limited skills spend each option at most once.
            if matches!(def.usage, UsagePolicy::Limited { .. })
                && equipped.instance.used_options.contains(&option)
            {
                return;
            }
        } else if !def.options.is_empty() {
            // Option-based skills need a pick.
            return;
        }
    }

    match def.kind {
        SkillKind::Jackpot => activate_jackpot(def, state, player),
        SkillKind::WitchCoven => activate_coven(def, state, player),
        SkillKind::Standard | SkillKind::Reactive => {
            activate_standard(def, state, player, option, input);
        }
    }
}

/// Roll duration and effects, commit the domain, and flag the draw.
fn activate_jackpot(def: &SkillDefinition, state: &mut GameState, player: Player) {
    let is_second_chance = state.jackpot[player].is_second_chance;
    let pool: Vec<OptionId> = def.options.iter().map(|opt| opt.id).collect();
    let exclude: &[OptionId] = if is_second_chance {
        &[jackpot::REWRITE_OF_FATE, jackpot::FULL_CHANCE]
    } else {
        &[]
    };

    let (_roll, turns) = draw_domain_duration(&mut state.rng);
    let mut effects = draw_domain_effects(&pool, exclude, BASE_EFFECT_COUNT, &mut state.rng);
    apply_bonus_effects(&mut effects, &pool, is_second_chance, &mut state.rng);

    let has_8 = effects.contains(&jackpot::REWRITE_OF_FATE);
    let has_9 = effects.contains(&jackpot::FULL_CHANCE);
    let fx = &mut state.jackpot[player];
    fx.has_effect_8 = has_8;
    fx.has_effect_9 = has_9;
    if has_8 && has_9 && !is_second_chance {
        fx.overflowing_luck = true;
    }

    let id = state.allocate_domain_id();
    state.domains[player].push_back(ActiveDomain {
        id,
        skill: def.id,
        name: def.name.clone(),
        duration: DomainDuration::Turns(turns),
        effects: effects.clone(),
        owner: player,
    });
    state.record_history(def, &effects, Some(turns), Some(id));
    consume(def, state, player, None);

    state.push_event(GameEvent::SkillActivated {
        player,
        skill: def.id,
        option: None,
    });
    state.push_event(GameEvent::DomainActivated {
        player,
        domain: id,
        skill: def.id,
        turns: Some(turns),
        effects,
    });
}

/// Latch the coven on and track its permanent domain.
///
/// The coven skill is never marked used: the latch itself is the
/// exhaustion, and the domain never expires.
fn activate_coven(def: &SkillDefinition, state: &mut GameState, player: Player) {
    if state.coven[player].is_active {
        return;
    }
    let owner_turn = state.turn_counts[player];
    state.coven[player].activate(owner_turn);

    let id = state.allocate_domain_id();
    state.domains[player].push_back(ActiveDomain {
        id,
        skill: def.id,
        name: def.name.clone(),
        duration: DomainDuration::Permanent,
        effects: Default::default(),
        owner: player,
    });
    state.record_history(def, &[], None, Some(id));

    state.push_event(GameEvent::SkillActivated {
        player,
        skill: def.id,
        option: None,
    });
    state.push_event(GameEvent::DomainActivated {
        player,
        domain: id,
        skill: def.id,
        turns: None,
        effects: Default::default(),
    });
}

/// Immediate resolution for standard and reactive skills.
fn activate_standard(
    def: &SkillDefinition,
    state: &mut GameState,
    player: Player,
    option: Option<OptionId>,
    input: Option<u32>,
) {
    if let Some(output) = def.summon_output {
        match output {
            SummonOutput::Summon(kind) => {
                state.summons.push_back(ActiveSummon::new(kind, player));
            }
            SummonOutput::Token { kind, count } => {
                state.tokens[player].add(kind, count);
            }
            SummonOutput::TokenFromInput(kind) => {
                state.tokens[player].add(kind, input.unwrap_or(1));
            }
        }
    }

    let effect_ids: Vec<OptionId> = option.into_iter().collect();
    state.record_history(def, &effect_ids, None, None);
    consume(def, state, player, option);

    state.push_event(GameEvent::SkillActivated {
        player,
        skill: def.id,
        option,
    });
}

fn consume(def: &SkillDefinition, state: &mut GameState, player: Player, option: Option<OptionId>) {
    if let Some(equipped) = state.skills[player].as_mut() {
        equipped.instance.consume(def, option);
    }
}
