//! Status lifecycle and derived modifiers on a combatant.

use smallvec::SmallVec;

use super::{StatusEffect, StatusKind};
use crate::core::Combatant;

impl Combatant {
    /// Install a status, or refresh the held one of the same kind.
    ///
    /// Effects with zero duration are ignored.
    pub fn apply_status(&mut self, effect: StatusEffect) {
        if effect.turns_remaining == 0 {
            return;
        }

        let merged = match self.statuses.get(&effect.kind) {
            Some(held) => held.refreshed(effect),
            None => effect,
        };
        self.statuses.insert(effect.kind, merged);
    }

    /// Remove a status outright.
    pub fn clear_status(&mut self, kind: StatusKind) -> Option<StatusEffect> {
        self.statuses.remove(&kind)
    }

    #[must_use]
    pub fn status(&self, kind: StatusKind) -> Option<&StatusEffect> {
        self.statuses.get(&kind)
    }

    #[must_use]
    pub fn has_status(&self, kind: StatusKind) -> bool {
        self.statuses.contains_key(&kind)
    }

    fn magnitude(&self, kind: StatusKind) -> u32 {
        self.status(kind).map_or(0, |s| s.magnitude)
    }

    /// Count down every timed status except guard and the periodic kinds.
    ///
    /// Returns the kinds that expired, in kind order.
    pub fn tick_statuses(&mut self) -> SmallVec<[StatusKind; 4]> {
        let mut expired = SmallVec::new();
        let kinds: SmallVec<[StatusKind; 8]> = self
            .statuses
            .keys()
            .copied()
            .filter(|kind| !kind.is_periodic() && *kind != StatusKind::Guard)
            .collect();

        for kind in kinds {
            if let Some(effect) = self.statuses.get_mut(&kind) {
                effect.turns_remaining = effect.turns_remaining.saturating_sub(1);
                if effect.turns_remaining == 0 {
                    self.statuses.remove(&kind);
                    expired.push(kind);
                }
            }
        }

        expired
    }

    /// Take one tick of a periodic status.
    ///
    /// Returns the damage for this tick, or `None` if the status is not
    /// held. The status is removed once its last tick is taken.
    pub fn tick_periodic(&mut self, kind: StatusKind) -> Option<u32> {
        let effect = self.statuses.get_mut(&kind)?;
        let damage = effect.magnitude;
        effect.turns_remaining = effect.turns_remaining.saturating_sub(1);
        if effect.turns_remaining == 0 {
            self.statuses.remove(&kind);
        }
        Some(damage)
    }

    // === Action gates ===

    #[must_use]
    pub fn is_stunned(&self) -> bool {
        self.has_status(StatusKind::Stun)
    }

    #[must_use]
    pub fn is_rooted(&self) -> bool {
        self.has_status(StatusKind::Root)
    }

    #[must_use]
    pub fn is_knocked_down(&self) -> bool {
        self.has_status(StatusKind::Knockdown)
    }

    #[must_use]
    pub fn has_movement_loss(&self) -> bool {
        self.has_status(StatusKind::MovementLoss)
    }

    /// Any condition that forbids walking.
    #[must_use]
    pub fn movement_impaired(&self) -> bool {
        self.is_stunned() || self.is_rooted() || self.is_knocked_down() || self.has_movement_loss()
    }

    // === Modifiers ===

    /// Percent bonus on damage this combatant deals.
    #[must_use]
    pub fn damage_amplification(&self) -> u32 {
        self.magnitude(StatusKind::DamageAmplification)
    }

    /// Percent bonus on damage this combatant takes.
    #[must_use]
    pub fn exposure(&self) -> u32 {
        self.magnitude(StatusKind::Exposed)
    }

    /// Absorption left on the guard, if guarding.
    #[must_use]
    pub fn guard_value(&self) -> Option<u32> {
        self.status(StatusKind::Guard).map(|s| s.magnitude)
    }

    /// Flat reduction of incoming damage.
    #[must_use]
    pub fn damage_reduction(&self) -> u32 {
        self.magnitude(StatusKind::DamageReduction)
    }

    /// Movement points withheld at the start of this combatant's turn.
    #[must_use]
    pub fn resource_reduction(&self, max_movement_points: u32) -> u32 {
        let slowed = max_movement_points * self.magnitude(StatusKind::Slow) / 100;
        slowed + self.magnitude(StatusKind::ResourceReduction)
    }
}
