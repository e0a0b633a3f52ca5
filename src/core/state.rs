//! Full game state.
//!
//! One `GameState` holds everything a game needs: lives, the turn/phase
//! clock, equipped skills, jackpot effect flags, tracked domains, coven
//! state, summons and tokens, the pending-punishment queue, history, and
//! the RNG. Persistent collections (`im::Vector`) keep snapshots cheap to
//! clone.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::catalog::{OptionId, SkillDefinition, SkillId, SkillInstance, UseContext};
use crate::engine::coven::WitchCovenState;
use crate::engine::domains::{ActiveDomain, DomainId};
use crate::engine::punishment::DomainPunishment;
use crate::engine::summons::{ActiveSummon, TokenCounts};
use crate::events::GameEvent;

use super::config::{GameConfig, Phase};
use super::player::{Player, PlayerPair};
use super::rng::GameRng;

/// A player's equipped skill: definition reference plus runtime state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippedSkill {
    pub skill: SkillId,
    pub instance: SkillInstance,
}

/// Jackpot effect flags for one player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JackpotEffects {
    pub has_effect_8: bool,
    pub has_effect_9: bool,
    /// Banked 100% luck charge from drawing 8 and 9 together; persists
    /// until spent on a luck roll.
    pub overflowing_luck: bool,
    /// One more domain attempt allowed; its expiry is an automatic loss.
    pub is_second_chance: bool,
}

impl JackpotEffects {
    /// Clear the per-draw flags, leaving the banked charge and the
    /// second-chance marker alone.
    pub fn clear_draw_flags(&mut self) {
        self.has_effect_8 = false;
        self.has_effect_9 = false;
    }
}

/// Lethal damage on hold until a reactive skill resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingReactive {
    pub attacker: Player,
    pub defender: Player,
    pub damage: u32,
}

/// One activation record for the history panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub skill: SkillId,
    pub skill_name: String,
    /// Drawn effect names with their descriptions.
    pub effects: Vec<(String, String)>,
    /// Global turn the activation happened on.
    pub turn: u32,
    /// Position within the game's history, for stable ordering.
    pub sequence: u32,
    pub turns_remaining: Option<u8>,
    /// The backing domain, when the activation created one.
    pub domain: Option<DomainId>,
    /// Flipped off when the backing domain expires or is removed.
    pub active: bool,
}

/// Everything about one game in flight.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub lives: PlayerPair<u32>,
    /// Global turn number, starting at 1.
    pub turn: u32,
    pub current_player: Player,
    pub phase: Phase,
    /// Turns each player has taken, counting the one in progress.
    pub turn_counts: PlayerPair<u32>,
    pub skills: PlayerPair<Option<EquippedSkill>>,
    pub jackpot: PlayerPair<JackpotEffects>,
    pub domains: PlayerPair<Vector<ActiveDomain>>,
    pub coven: PlayerPair<WitchCovenState>,
    pub summons: Vector<ActiveSummon>,
    pub tokens: PlayerPair<TokenCounts>,
    /// Pending punishments, resolved front-first.
    pub punishments: Vector<DomainPunishment>,
    pub pending_reactive: Option<PendingReactive>,
    pub history: Vector<HistoryRecord>,
    pub rng: GameRng,
    next_domain_id: u64,
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh state for a configuration. The starting player is one turn
    /// into the game.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut turn_counts = PlayerPair::with_value(0);
        turn_counts[config.starting_player] = 1;
        Self {
            config,
            lives: PlayerPair::with_value(config.starting_life),
            turn: 1,
            current_player: config.starting_player,
            phase: Phase::Draw,
            turn_counts,
            skills: PlayerPair::new(|_| None),
            jackpot: PlayerPair::with_value(JackpotEffects::default()),
            domains: PlayerPair::new(|_| Vector::new()),
            coven: PlayerPair::new(|_| WitchCovenState::default()),
            summons: Vector::new(),
            tokens: PlayerPair::with_value(TokenCounts::default()),
            punishments: Vector::new(),
            pending_reactive: None,
            history: Vector::new(),
            rng: GameRng::new(config.seed),
            next_domain_id: 0,
            events: Vec::new(),
        }
    }

    /// Rebuild in-game state, keeping the configuration. The RNG forks so
    /// the new game does not replay the old one's rolls.
    pub fn reset(&mut self) {
        let rng = self.rng.fork();
        *self = Self::new(self.config);
        self.rng = rng;
    }

    /// Whether it is `player`'s turn.
    #[must_use]
    pub fn is_owner_turn(&self, player: Player) -> bool {
        self.current_player == player
    }

    /// The gate context for `player`'s skill checks.
    #[must_use]
    pub fn use_context(&self, player: Player) -> UseContext {
        UseContext {
            is_owner_turn: self.is_owner_turn(player),
            current_life: self.lives[player],
            owner_turn_count: self.turn_counts[player],
        }
    }

    /// Allocate a fresh domain id.
    pub fn allocate_domain_id(&mut self) -> DomainId {
        self.next_domain_id += 1;
        DomainId(self.next_domain_id)
    }

    /// Set a life total directly, recording the event.
    pub fn set_life(&mut self, player: Player, value: u32) {
        self.lives[player] = value;
        self.push_event(GameEvent::LifeSet { player, value });
        if value == 0 {
            self.push_event(GameEvent::PlayerDefeated { player });
        }
    }

    /// Apply a signed life delta, clamped at zero.
    pub fn apply_life_delta(&mut self, player: Player, delta: i32) {
        let current = i64::from(self.lives[player]);
        let value = (current + i64::from(delta)).max(0) as u32;
        self.lives[player] = value;
        self.push_event(GameEvent::LifeChanged {
            player,
            delta,
            value,
        });
        if value == 0 {
            self.push_event(GameEvent::PlayerDefeated { player });
        }
    }

    /// The defeated player, if the game is over.
    #[must_use]
    pub fn defeated(&self) -> Option<Player> {
        Player::both().into_iter().find(|&p| self.lives[p] == 0)
    }

    /// The winner, if the game is over.
    #[must_use]
    pub fn result(&self) -> Option<Player> {
        self.defeated().map(Player::opponent)
    }

    /// Append an activation record and return its sequence number.
    pub fn record_history(
        &mut self,
        skill: &SkillDefinition,
        effect_ids: &[OptionId],
        turns_remaining: Option<u8>,
        domain: Option<DomainId>,
    ) -> u32 {
        let sequence = self.history.len() as u32;
        let effects = effect_ids
            .iter()
            .filter_map(|id| skill.option(*id))
            .map(|opt| (opt.name.clone(), opt.description.clone()))
            .collect();
        self.history.push_back(HistoryRecord {
            skill: skill.id,
            skill_name: skill.name.clone(),
            effects,
            turn: self.turn,
            sequence,
            turns_remaining,
            domain,
            active: true,
        });
        sequence
    }

    /// Flip the history record backing `domain` to inactive.
    pub fn deactivate_history(&mut self, domain: DomainId) {
        for record in self.history.iter_mut() {
            if record.domain == Some(domain) {
                record.active = false;
            }
        }
    }

    /// Record an outbound event.
    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain the accumulated events for the presentation layer.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Peek at the accumulated events without draining them.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }
}
