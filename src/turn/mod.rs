//! Turn and resource management.
//!
//! The active player spends action points on casts and movement points on
//! walking. `end_turn` runs the boundary between two turns: periodic
//! damage, delayed effects, resource refill, status and cooldown ticks.
//!
//! Statuses and cooldowns tick at their owner's turn start, so a two-turn
//! stun applied by the opponent removes exactly one of the victim's turns.

mod manager;

pub use manager::end_turn;
