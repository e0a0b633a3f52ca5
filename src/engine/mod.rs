//! The rules engine.
//!
//! [`Engine`] owns the skill registry and applies [`GameAction`]s to a
//! [`GameState`]. Every transition is synchronous and deterministic; batch
//! work (turn-end ticking, simultaneous expiries) always processes
//! Player::One's entries before Player::Two's, in list order, so a game
//! replays identically from its seed.

pub mod activation;
pub mod coven;
pub mod domains;
pub mod draw;
pub mod punishment;
pub mod summons;

use im::Vector;
use smallvec::smallvec;

use crate::catalog::{SkillId, SkillInstance, SkillKind, SkillRegistry};
use crate::core::action::GameAction;
use crate::core::config::{GameConfig, Phase};
use crate::core::player::Player;
use crate::core::state::{EquippedSkill, GameState, JackpotEffects, PendingReactive};
use crate::events::{DiscardZone, GameEvent, PunishmentOutcome};

use domains::ActiveDomain;
use punishment::{DomainPunishment, PunishmentSeverity, ACCEPTED_DEFEAT_LIFE, REDUCED_PUNISHMENT_LIFE};

/// Applies actions to game states.
///
/// ## Example
///
/// ```
/// use larien_engine::core::{GameAction, GameConfig, Player};
/// use larien_engine::engine::Engine;
///
/// let engine = Engine::with_builtin();
/// let mut state = engine.new_game(GameConfig::default());
/// engine.apply(&mut state, &GameAction::EndTurn);
/// assert_eq!(state.current_player, Player::Two);
/// ```
#[derive(Clone, Debug)]
pub struct Engine {
    registry: SkillRegistry,
}

impl Engine {
    #[must_use]
    pub fn new(registry: SkillRegistry) -> Self {
        Self { registry }
    }

    /// Engine over the builtin Larien catalog.
    #[must_use]
    pub fn with_builtin() -> Self {
        Self::new(SkillRegistry::builtin())
    }

    #[must_use]
    pub fn registry(&self) -> &SkillRegistry {
        &self.registry
    }

    /// Fresh state for a configuration.
    #[must_use]
    pub fn new_game(&self, config: GameConfig) -> GameState {
        GameState::new(config)
    }

    /// Apply one action. Invalid actions are silent no-ops.
    ///
    /// `GameState` clones are O(1), so callers that need the reducer style
    /// can clone before applying.
    pub fn apply(&self, state: &mut GameState, action: &GameAction) {
        match *action {
            GameAction::AssignSkill { player, skill } => self.assign_skill(state, player, skill),
            GameAction::DraftRandomSkills => self.draft_random_skills(state),
            GameAction::ActivateSkill {
                player,
                option,
                input,
            } => activation::activate_skill(&self.registry, state, player, option, input),
            GameAction::AdvancePhase => {
                if let Some(next) = state.phase.next() {
                    state.phase = next;
                } else {
                    self.end_turn(state);
                }
            }
            GameAction::EndTurn => self.end_turn(state),
            GameAction::ApplyDamage { target, amount } => self.apply_damage(state, target, amount),
            GameAction::SetLife { player, value } => state.set_life(player, value),
            GameAction::ApplyLifeDelta { player, delta } => state.apply_life_delta(player, delta),
            GameAction::TryLuck => self.try_luck(state),
            GameAction::AcceptPunishment => self.accept_punishment(state),
            GameAction::CalderoNegro { player } => self.caldero_negro(state, player),
            GameAction::MotherWitch { player, success } => {
                self.mother_witch(state, player, success);
            }
            GameAction::ResolveReactive {
                winner,
                final_damage,
            } => self.resolve_reactive(state, winner, final_damage),
            GameAction::RemoveDomain { player, domain } => {
                Self::remove_domain(state, player, domain);
            }
            GameAction::Reset => state.reset(),
        }
    }

    fn assign_skill(&self, state: &mut GameState, player: Player, skill: SkillId) {
        if state.skills[player].is_some() {
            return;
        }
        let Some(def) = self.registry.get(skill) else {
            return;
        };
        state.skills[player] = Some(EquippedSkill {
            skill,
            instance: SkillInstance::new(def),
        });
    }

    /// Deal each player a distinct random skill. No-op once anyone has one.
    fn draft_random_skills(&self, state: &mut GameState) {
        if Player::both().iter().any(|&p| state.skills[p].is_some()) {
            return;
        }
        let mut ids = self.registry.ids();
        if ids.len() < 2 {
            return;
        }
        state.rng.shuffle(&mut ids);
        for (player, skill) in Player::both().into_iter().zip(ids) {
            self.assign_skill(state, player, skill);
        }
    }

    /// One "turn ended" event: expire end-of-turn entities, tick the
    /// ending player's per-owner counters, advance the clock, tick global
    /// skill cooldowns, then decay and expire domains.
    fn end_turn(&self, state: &mut GameState) {
        let ending = state.current_player;

        self.expire_end_of_turn_entities(state, ending);
        state.coven[ending].tick_owner_turn();

        let next = ending.opponent();
        state.current_player = next;
        state.phase = Phase::Draw;
        state.turn += 1;
        state.turn_counts[next] += 1;
        state.push_event(GameEvent::TurnEnded {
            ending_player: ending,
            next_player: next,
            turn: state.turn,
        });

        // Skill cooldowns tick globally, for both players, on every
        // turn-end event.
        for player in Player::both() {
            if let Some(equipped) = state.skills[player].as_mut() {
                equipped.instance.tick_cooldown();
            }
        }

        self.tick_domains(state, ending);
    }

    fn expire_end_of_turn_entities(&self, state: &mut GameState, ending: Player) {
        let mut survivors = Vector::new();
        for mut summon in std::mem::take(&mut state.summons) {
            if summon.owner == ending {
                if summon.until_end_of_turn || summon.tick_owner_turn() {
                    state.push_event(GameEvent::SummonExpired {
                        player: ending,
                        kind: summon.kind,
                    });
                    continue;
                }
            }
            survivors.push_back(summon);
        }
        state.summons = survivors;
        state.tokens[ending].insects = 0;
    }

    /// Decrement every finite domain once and route expiries, Player::One
    /// first, list order.
    fn tick_domains(&self, state: &mut GameState, ending: Player) {
        for owner in Player::both() {
            let mut remaining = Vector::new();
            let mut expired = Vec::new();
            for mut domain in std::mem::take(&mut state.domains[owner]) {
                if domain.tick() {
                    expired.push(domain);
                } else {
                    remaining.push_back(domain);
                }
            }
            state.domains[owner] = remaining;
            for domain in expired {
                self.expire_domain(state, domain, ending);
            }
        }
    }

    fn expire_domain(&self, state: &mut GameState, domain: ActiveDomain, ending: Player) {
        let owner = domain.owner;
        let ended_on_own_turn = owner == ending;
        state.deactivate_history(domain.id);
        state.push_event(GameEvent::DomainExpired {
            player: owner,
            domain: domain.id,
            ended_on_own_turn,
        });

        if state.jackpot[owner].is_second_chance {
            // Do or die: the second attempt expired, so the owner loses
            // outright with no luck roll.
            state.jackpot[owner] = JackpotEffects::default();
            state.set_life(owner, 0);
            state.push_event(GameEvent::PunishmentResolved {
                player: owner,
                domain: domain.id,
                outcome: PunishmentOutcome::SecondChanceDefeat,
            });
            return;
        }

        let base_luck = self
            .registry
            .get(domain.skill)
            .map_or(punishment::BASE_LUCK_PERCENT, |def| def.base_luck);
        let record = DomainPunishment::for_expiry(
            domain.id,
            domain.name,
            domain.skill,
            owner,
            ended_on_own_turn,
            &state.jackpot[owner],
            base_luck,
        );
        state.push_event(GameEvent::PunishmentQueued {
            player: owner,
            domain: record.domain,
        });
        state.punishments.push_back(record);
    }

    /// Roll the luck passive for the front of the punishment queue.
    fn try_luck(&self, state: &mut GameState) {
        let Some(record) = state.punishments.pop_front() else {
            return;
        };
        let (roll, success) = draw::draw_luck(&mut state.rng, record.luck_percentage);
        state.push_event(GameEvent::LuckRolled {
            player: record.player,
            percentage: record.luck_percentage,
            roll,
            success,
        });
        if record.uses_overflowing_luck {
            state.jackpot[record.player].overflowing_luck = false;
        }

        if success {
            self.reactivate_skill(state, record.player);
            state.jackpot[record.player].clear_draw_flags();
            state.push_event(GameEvent::PunishmentResolved {
                player: record.player,
                domain: record.domain,
                outcome: PunishmentOutcome::Averted,
            });
        } else {
            // The luck flow burns any banked charge along with the flags.
            state.jackpot[record.player].overflowing_luck = false;
            self.apply_severity(state, &record, record.applied_severity(), 0);
        }
    }

    /// Apply the front punishment directly, skipping the luck roll.
    fn accept_punishment(&self, state: &mut GameState) {
        let Some(record) = state.punishments.pop_front() else {
            return;
        };
        self.apply_severity(state, &record, record.applied_severity(), ACCEPTED_DEFEAT_LIFE);
    }

    fn apply_severity(
        &self,
        state: &mut GameState,
        record: &DomainPunishment,
        severity: PunishmentSeverity,
        complete_life: u32,
    ) {
        let player = record.player;
        match severity {
            PunishmentSeverity::Canceled => {
                self.reactivate_skill(state, player);
                state.jackpot[player].clear_draw_flags();
            }
            PunishmentSeverity::Reduced => {
                state.set_life(player, REDUCED_PUNISHMENT_LIFE);
                state.push_event(GameEvent::Discard {
                    player,
                    zones: smallvec![DiscardZone::Hand],
                });
                self.reactivate_skill(state, player);
                let fx = &mut state.jackpot[player];
                fx.clear_draw_flags();
                fx.is_second_chance = true;
            }
            PunishmentSeverity::Complete => {
                state.set_life(player, complete_life);
                state.push_event(GameEvent::Discard {
                    player,
                    zones: smallvec![DiscardZone::Hand, DiscardZone::Deck, DiscardZone::Graveyard],
                });
                state.jackpot[player].clear_draw_flags();
                if complete_life > 0 {
                    // Life 1 from a direct accept is still a defeat signal.
                    state.push_event(GameEvent::PlayerDefeated { player });
                }
            }
        }
        state.push_event(GameEvent::PunishmentResolved {
            player,
            domain: record.domain,
            outcome: PunishmentOutcome::Applied(severity),
        });
    }

    fn reactivate_skill(&self, state: &mut GameState, player: Player) {
        let Some(equipped) = state.skills[player].as_mut() else {
            return;
        };
        if let Some(def) = self.registry.get(equipped.skill) {
            equipped.instance.reactivate(def);
        }
    }

    /// Route damage, holding lethal hits for an unused reactive skill.
    fn apply_damage(&self, state: &mut GameState, target: Player, amount: u32) {
        if amount == 0 {
            return;
        }
        let lethal = amount >= state.lives[target];
        if lethal && state.pending_reactive.is_none() && self.has_unused_reactive(state, target) {
            let pending = PendingReactive {
                attacker: target.opponent(),
                defender: target,
                damage: amount,
            };
            state.pending_reactive = Some(pending);
            state.push_event(GameEvent::ReactivePending {
                attacker: pending.attacker,
                defender: pending.defender,
                damage: amount,
            });
            return;
        }
        state.apply_life_delta(target, -(amount.min(i32::MAX as u32) as i32));
    }

    fn has_unused_reactive(&self, state: &GameState, player: Player) -> bool {
        let Some(equipped) = state.skills[player].as_ref() else {
            return false;
        };
        let Some(def) = self.registry.get(equipped.skill) else {
            return false;
        };
        def.kind == SkillKind::Reactive && !equipped.instance.is_exhausted(def)
    }

    /// Apply the adjudicated outcome of a pending reactive skill.
    fn resolve_reactive(&self, state: &mut GameState, winner: Player, final_damage: u32) {
        let Some(pending) = state.pending_reactive.take() else {
            return;
        };
        if let Some(equipped) = state.skills[pending.defender].as_mut() {
            if let Some(def) = self.registry.get(equipped.skill) {
                if def.kind == SkillKind::Reactive {
                    equipped.instance.consume(def, None);
                }
            }
        }
        let loser = winner.opponent();
        state.push_event(GameEvent::ReactiveResolved {
            winner,
            loser,
            final_damage,
        });
        if final_damage > 0 {
            state.apply_life_delta(loser, -(final_damage.min(i32::MAX as u32) as i32));
        }
    }

    /// Fire the Caldero Negro at the opponent.
    fn caldero_negro(&self, state: &mut GameState, player: Player) {
        if !state.coven[player].is_active {
            return;
        }
        let witches = state.coven[player].witch_total();
        let damage = state.coven[player].caldero_damage();
        let target = player.opponent();
        state.push_event(GameEvent::CalderoFired {
            player,
            target,
            witches,
            damage,
        });
        self.apply_damage(state, target, damage);
    }

    /// Record the externally adjudicated Mother Witch outcome.
    fn mother_witch(&self, state: &mut GameState, player: Player, success: bool) {
        if !state.coven[player].can_cast_mother_witch() {
            return;
        }
        let owner_turn = state.turn_counts[player];
        let penalty = state.coven[player].resolve_mother_witch(success, owner_turn);
        state.push_event(GameEvent::MotherWitchResolved { player, success });
        if let Some(damage) = penalty {
            state.apply_life_delta(player, -(damage as i32));
        }
    }

    /// Remove a domain without punishment.
    fn remove_domain(state: &mut GameState, player: Player, domain: domains::DomainId) {
        let before = state.domains[player].len();
        state.domains[player].retain(|d| d.id != domain);
        if state.domains[player].len() != before {
            state.deactivate_history(domain);
            state.push_event(GameEvent::DomainRemoved { player, domain });
        }
    }
}
