//! Combat resolution: damage, forced movement and win detection.
//!
//! ## Damage pipeline
//!
//! `damage` resolves a hit on a tile: the caster's amplification, then the
//! target's exposure, then guard absorption, then flat reduction. Guard is
//! consumed by the first hit, and a melee hit into a guard costs the
//! attacker 1 hp if both survive.
//!
//! `wound` skips the pipeline and is used for periodic ticks and collisions.
//!
//! ## Win detection
//!
//! Every hp loss is followed by `win_check`, so a lethal hit decides the
//! match inside the same action.

mod damage;
mod knockback;

pub use damage::{damage, win_check, wound, DamageKind, GUARD_COUNTER};
pub use knockback::{knockback, PushOutcome};
