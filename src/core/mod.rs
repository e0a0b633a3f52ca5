//! Core state types: players, RNG, configuration, actions, game state.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::GameAction;
pub use config::{GameConfig, Phase};
pub use player::{Player, PlayerPair};
pub use rng::{GameRng, GameRngState};
pub use state::{EquippedSkill, GameState, HistoryRecord, JackpotEffects, PendingReactive};
