//! Timed conditions on combatants.
//!
//! - `StatusKind`: closed set of condition kinds
//! - `StatusEffect`: an active instance with duration and payload
//!
//! Lifecycle methods (`apply_status`, `tick_statuses`, `tick_periodic`) and
//! the derived queries that gate actions live on `Combatant`.
//!
//! Re-applying a held kind refreshes it: the longer duration and stronger
//! payload are kept, nothing accumulates.

mod effect;
mod registry;

pub use effect::{StatusEffect, StatusKind};
