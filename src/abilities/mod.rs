//! Ability definitions and the catalog.
//!
//! - `AbilityId`: closed set of castable abilities
//! - `AbilityDef`: costs, range window, area, damage and resolution
//! - `AbilityCatalog`: lookup table consulted by the engine
//!
//! Definitions are static. Per-combatant data (cooldowns, casts this turn,
//! escalation stage) lives on `Combatant`.

mod catalog;
mod definition;

pub use catalog::AbilityCatalog;
pub use definition::{AbilityDef, AbilityId, AbilityKind, AreaShape, DamageSpec, Resolution, Targeting};
