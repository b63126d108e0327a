//! # grid-duel
//!
//! Authoritative rules engine for a two-player, turn-based grid-tactics
//! duel.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: `apply(state, action)` either returns the next
//!    state or a `Rejection`. The input state is never modified.
//!
//! 2. **Closed Vocabulary**: Abilities, statuses and resolutions are enums,
//!    matched exhaustively.
//!
//! 3. **Injected Randomness**: Damage rolls, arrow placement and gambit
//!    outcomes draw from a `RandomSource` owned by the engine.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`, so the
//!   engine's working copy shares structure with the caller's state.
//!
//! - **No I/O**: The session layer owns transport, rooms and storage. It
//!   hands the engine a state and an action and relays what comes back.
//!
//! ## Modules
//!
//! - `core`: Players, tiles, state, actions, RNG, configuration
//! - `board`: Bounds, obstacles, line of sight, pathfinding, area patterns
//! - `abilities`: Ability definitions and the catalog
//! - `status`: Timed conditions and the modifiers they imply
//! - `combat`: Damage pipeline, knockback, win detection
//! - `schedule`: Delayed effects
//! - `turn`: Turn boundaries and resources
//! - `rules`: Validation and the transition engine

pub mod core;
pub mod board;
pub mod abilities;
pub mod status;
pub mod combat;
pub mod schedule;
pub mod turn;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap, Tile,
    GameRng, GameRngState, RandomSource,
    RulesConfig, Neighborhood, ConfigError,
    Action,
    MatchState, MatchResult, Combatant, TurnInfo, EventLog, SnapshotError,
};

pub use crate::board::{Board, Direction};

pub use crate::abilities::{AbilityCatalog, AbilityDef, AbilityId};

pub use crate::status::{StatusEffect, StatusKind};

pub use crate::schedule::PendingEffect;

pub use crate::rules::{create_initial_state, DuelEngine, Rejection, Rules};
