//! Outbound events for external collaborators.
//!
//! The engine mutates its own state and records what happened as
//! [`GameEvent`]s; the presentation layer drains them with
//! [`GameState::take_events`](crate::core::state::GameState::take_events)
//! and routes each to the life display, discard prompt, history panel, or
//! modal it concerns. The engine never reads events back.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::{OptionId, SkillId};
use crate::core::player::Player;
use crate::engine::domains::DomainId;
use crate::engine::punishment::PunishmentSeverity;

/// Zones a punishment tells the external deck collaborator to discard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscardZone {
    Hand,
    Deck,
    Graveyard,
}

/// How a queued punishment was settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PunishmentOutcome {
    /// Luck roll succeeded; no consequences, skill reactivated.
    Averted,
    /// Severity landed (complete or reduced), or was voided (canceled).
    Applied(PunishmentSeverity),
    /// Second-chance expiry: unconditional defeat, no luck roll offered.
    SecondChanceDefeat,
}

/// Something the outside world should react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    LifeSet {
        player: Player,
        value: u32,
    },
    LifeChanged {
        player: Player,
        delta: i32,
        value: u32,
    },
    Discard {
        player: Player,
        zones: SmallVec<[DiscardZone; 3]>,
    },
    SkillActivated {
        player: Player,
        skill: SkillId,
        option: Option<OptionId>,
    },
    DomainActivated {
        player: Player,
        domain: DomainId,
        skill: SkillId,
        turns: Option<u8>,
        effects: SmallVec<[OptionId; 5]>,
    },
    DomainExpired {
        player: Player,
        domain: DomainId,
        ended_on_own_turn: bool,
    },
    DomainRemoved {
        player: Player,
        domain: DomainId,
    },
    PunishmentQueued {
        player: Player,
        domain: DomainId,
    },
    LuckRolled {
        player: Player,
        percentage: u8,
        /// `None` when 100% short-circuited without a die.
        roll: Option<u8>,
        success: bool,
    },
    PunishmentResolved {
        player: Player,
        domain: DomainId,
        outcome: PunishmentOutcome,
    },
    /// Lethal damage held back pending a reactive-skill resolution.
    ReactivePending {
        attacker: Player,
        defender: Player,
        damage: u32,
    },
    ReactiveResolved {
        winner: Player,
        loser: Player,
        final_damage: u32,
    },
    CalderoFired {
        player: Player,
        target: Player,
        witches: u32,
        damage: u32,
    },
    MotherWitchResolved {
        player: Player,
        success: bool,
    },
    SummonExpired {
        player: Player,
        kind: crate::catalog::SummonKind,
    },
    TurnEnded {
        ending_player: Player,
        next_player: Player,
        turn: u32,
    },
    PlayerDefeated {
        player: Player,
    },
}
