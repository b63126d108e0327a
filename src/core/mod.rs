//! Core engine types: players, tiles, state, actions, RNG, configuration.
//!
//! Everything here is plain value data. The transition engine in
//! `crate::rules` is the only code that mutates a `MatchState`, and it does
//! so on a private copy.

pub mod player;
pub mod tile;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{PlayerId, PlayerMap};
pub use tile::Tile;
pub use rng::{GameRng, GameRngState, RandomSource};
pub use config::{ConfigError, Neighborhood, RulesConfig};
pub use action::Action;
pub use state::{Combatant, EventLog, MatchResult, MatchState, SnapshotError, TurnInfo, LOG_CAPACITY};
