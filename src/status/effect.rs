//! Status effect definitions.

use serde::{Deserialize, Serialize};

/// Kind of timed condition. A combatant holds at most one of each.
///
/// The meaning of `StatusEffect::magnitude` depends on the kind:
///
/// | kind | magnitude |
/// |---|---|
/// | `Slow` | percent of max movement points removed each turn |
/// | `DamageReduction` | flat reduction of incoming damage |
/// | `ResourceReduction` | flat movement points removed each turn |
/// | `DamageAmplification` | percent bonus on outgoing damage |
/// | `Exposed` | percent bonus on incoming damage |
/// | `Guard` | damage absorbed by the next hit |
/// | `Burn`, `Bleed` | damage per tick |
/// | others | unused |
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusKind {
    Slow,
    Root,
    Stun,
    Knockdown,
    Reveal,
    DamageReduction,
    MovementLoss,
    ResourceReduction,
    DamageAmplification,
    Exposed,
    Guard,
    Burn,
    Bleed,
}

impl StatusKind {
    /// Periodic-damage kinds are ticked by the turn manager, not by the
    /// generic tick.
    #[must_use]
    pub const fn is_periodic(self) -> bool {
        matches!(self, StatusKind::Burn | StatusKind::Bleed)
    }

    /// Lower-case display name used in the event log.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            StatusKind::Slow => "slow",
            StatusKind::Root => "root",
            StatusKind::Stun => "stun",
            StatusKind::Knockdown => "knockdown",
            StatusKind::Reveal => "reveal",
            StatusKind::DamageReduction => "damage reduction",
            StatusKind::MovementLoss => "movement loss",
            StatusKind::ResourceReduction => "resource reduction",
            StatusKind::DamageAmplification => "damage amplification",
            StatusKind::Exposed => "exposed",
            StatusKind::Guard => "guard",
            StatusKind::Burn => "burn",
            StatusKind::Bleed => "bleed",
        }
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An active condition on a combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEffect {
    pub kind: StatusKind,

    /// Owner turn-starts left before expiry. Always > 0 while held.
    pub turns_remaining: u32,

    /// Kind-specific payload.
    pub magnitude: u32,
}

impl StatusEffect {
    #[must_use]
    pub const fn new(kind: StatusKind, turns_remaining: u32, magnitude: u32) -> Self {
        Self {
            kind,
            turns_remaining,
            magnitude,
        }
    }

    /// A payload-free condition such as stun or root.
    #[must_use]
    pub const fn flag(kind: StatusKind, turns_remaining: u32) -> Self {
        Self::new(kind, turns_remaining, 0)
    }

    /// Merge a re-application into this instance: longest duration and
    /// strongest payload win, nothing accumulates.
    #[must_use]
    pub fn refreshed(self, incoming: StatusEffect) -> Self {
        Self {
            kind: self.kind,
            turns_remaining: self.turns_remaining.max(incoming.turns_remaining),
            magnitude: self.magnitude.max(incoming.magnitude),
        }
    }
}
