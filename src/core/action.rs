//! Actions the engine can apply.

use serde::{Deserialize, Serialize};

use crate::catalog::{OptionId, SkillId};
use crate::engine::domains::DomainId;

use super::player::Player;

/// One state transition request.
///
/// Invalid or gated-out actions are silent no-ops: the presentation layer
/// is expected to disable them, but the engine defends regardless and
/// never partially applies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Equip a skill. No-op if the player already has one.
    AssignSkill { player: Player, skill: SkillId },
    /// Deal each player a distinct random skill from the registry.
    DraftRandomSkills,
    /// Activate the equipped skill, optionally picking an option. `input`
    /// feeds skills whose output scales with a chosen number (the insect
    /// queen's token count).
    ActivateSkill {
        player: Player,
        option: Option<OptionId>,
        input: Option<u32>,
    },
    /// Advance the phase; advancing past Attack ends the turn.
    AdvancePhase,
    /// End the current player's turn immediately.
    EndTurn,
    /// Apply damage, routed through reactive-skill interception.
    ApplyDamage { target: Player, amount: u32 },
    SetLife { player: Player, value: u32 },
    ApplyLifeDelta { player: Player, delta: i32 },
    /// Roll the luck passive for the punishment at the front of the queue.
    TryLuck,
    /// Accept the punishment at the front of the queue without a roll.
    AcceptPunishment,
    /// Fire the Caldero Negro at the opponent.
    CalderoNegro { player: Player },
    /// Report the externally adjudicated Mother Witch outcome.
    MotherWitch { player: Player, success: bool },
    /// Report the adjudicated outcome of a pending reactive skill.
    ResolveReactive { winner: Player, final_damage: u32 },
    /// Remove a domain without punishment.
    RemoveDomain { player: Player, domain: DomainId },
    /// Rebuild in-game state, keeping the configuration.
    Reset,
}
