//! # Larien Engine
//!
//! The skill and domain resolution engine for the Larien companion app:
//! two players on one shared screen, each with one optional skill, with a
//! pair of randomized "domain" skills (the Jackpot and the Witch Coven)
//! whose multi-turn lifetimes, drawn effects, and failure punishments this
//! crate adjudicates.
//!
//! ## Architecture
//!
//! - [`catalog`] — static skill definitions, the builtin registry, and
//!   per-player skill instances with their usage gates
//! - [`core`] — players, configuration, deterministic RNG, actions, and
//!   the full [`GameState`](core::GameState)
//! - [`engine`] — the [`Engine`](engine::Engine) reducer: activation,
//!   effect draws, domain decay, the punishment queue, and the coven
//! - [`events`] — outbound [`GameEvent`](events::GameEvent)s for the
//!   presentation layer
//!
//! The crate is a pure in-process library: no I/O, no threads, no clock of
//! its own. All randomness flows through a seeded RNG, so a whole game
//! replays from `(seed, action sequence)`.
//!
//! ## Example
//!
//! ```
//! use larien_engine::catalog::registry::skills;
//! use larien_engine::core::{GameAction, GameConfig, Player};
//! use larien_engine::engine::Engine;
//!
//! let engine = Engine::with_builtin();
//! let mut state = engine.new_game(GameConfig { seed: 7, ..GameConfig::default() });
//!
//! engine.apply(&mut state, &GameAction::AssignSkill {
//!     player: Player::One,
//!     skill: skills::JACKPOT,
//! });
//! engine.apply(&mut state, &GameAction::EndTurn);
//!
//! assert_eq!(state.current_player, Player::Two);
//! for event in state.take_events() {
//!     println!("{event:?}");
//! }
//! ```

pub mod catalog;
pub mod core;
pub mod engine;
pub mod events;

pub use catalog::{SkillDefinition, SkillId, SkillKind, SkillRegistry};
pub use core::{GameAction, GameConfig, GameState, Player};
pub use engine::Engine;
pub use events::GameEvent;
