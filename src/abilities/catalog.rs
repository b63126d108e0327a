//! Ability catalog for definition lookup.
//!
//! The `AbilityCatalog` stores the definitions available in a match. The
//! engine consults it for every cast and rejects ids it does not hold.

use rustc_hash::FxHashMap;

use super::definition::{AbilityDef, AbilityId, AbilityKind, AreaShape, DamageSpec, Resolution, Targeting};
use crate::status::{StatusEffect, StatusKind};

/// Catalog of ability definitions.
///
/// ## Example
///
/// ```
/// use grid_duel::abilities::{AbilityCatalog, AbilityId};
///
/// let catalog = AbilityCatalog::standard();
///
/// let shot = catalog.get(AbilityId::Shot).unwrap();
/// assert_eq!(shot.casts_per_turn, 2);
/// assert!(shot.requires_los);
/// ```
#[derive(Clone, Debug, Default)]
pub struct AbilityCatalog {
    abilities: FxHashMap<AbilityId, AbilityDef>,
}

impl AbilityCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a definition, replacing any previous one with the same id.
    pub fn register(&mut self, ability: AbilityDef) {
        self.abilities.insert(ability.id, ability);
    }

    /// Builder form of `register`.
    #[must_use]
    pub fn with(mut self, ability: AbilityDef) -> Self {
        self.register(ability);
        self
    }

    #[must_use]
    pub fn get(&self, id: AbilityId) -> Option<&AbilityDef> {
        self.abilities.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: AbilityId) -> bool {
        self.abilities.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    /// Registered ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = AbilityId> + '_ {
        AbilityId::ALL.into_iter().filter(|id| self.contains(*id))
    }

    /// Iterate over all definitions, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &AbilityDef> {
        self.abilities.values()
    }

    /// The full standard ability set.
    #[must_use]
    pub fn standard() -> Self {
        use AbilityId as Id;
        use AbilityKind::{Attack, Buff, Displacement};

        let melee = Resolution::Hit { melee: true };
        let ranged = Resolution::Hit { melee: false };

        Self::new()
            .with(
                AbilityDef::new(Id::Strike, Attack, melee)
                    .with_targeting(Targeting::Unit)
                    .with_damage(DamageSpec::Fixed(2)),
            )
            .with(
                AbilityDef::new(Id::Shot, Attack, ranged)
                    .with_range(1, 3)
                    .with_casts_per_turn(2)
                    .with_line_of_sight()
                    .with_damage(DamageSpec::Fixed(1)),
            )
            .with(
                AbilityDef::new(Id::Snipe, Attack, ranged)
                    .with_range(3, 8)
                    .with_cost(2)
                    .with_cooldown(2)
                    .with_line_of_sight()
                    .with_damage(DamageSpec::Fixed(2))
                    .with_status(StatusEffect::flag(StatusKind::Reveal, 2)),
            )
            .with(
                AbilityDef::new(
                    Id::Force,
                    Attack,
                    Resolution::Knockback {
                        distance: 1,
                        collision_per_tile: 1,
                        knockdown: 2,
                    },
                )
                .with_targeting(Targeting::Unit)
                .with_range(1, 2)
                .with_cooldown(3)
                .with_line_of_sight()
                .with_damage(DamageSpec::Fixed(1)),
            )
            .with(
                AbilityDef::new(Id::Hammer, Attack, melee)
                    .with_targeting(Targeting::Unit)
                    .with_cost(2)
                    .with_cooldown(3)
                    .with_damage(DamageSpec::Fixed(1))
                    .with_status(StatusEffect::flag(StatusKind::Stun, 2)),
            )
            .with(
                AbilityDef::new(Id::Rend, Attack, melee)
                    .with_targeting(Targeting::Unit)
                    .with_cooldown(2)
                    .with_damage(DamageSpec::Roll { min: 1, max: 3 })
                    .with_status(StatusEffect::new(StatusKind::Bleed, 3, 1)),
            )
            .with(
                AbilityDef::new(Id::Surge, Attack, ranged)
                    .with_range(1, 3)
                    .with_line_of_sight()
                    .with_damage(DamageSpec::Staged(vec![1, 2, 4])),
            )
            .with(
                AbilityDef::new(Id::Snare, Attack, ranged)
                    .with_targeting(Targeting::Unit)
                    .with_range(1, 3)
                    .with_cooldown(3)
                    .with_line_of_sight()
                    .with_status(StatusEffect::flag(StatusKind::Root, 2)),
            )
            .with(
                AbilityDef::new(Id::Quake, Attack, ranged)
                    .with_range(1, 3)
                    .with_cost(2)
                    .with_cooldown(3)
                    .with_line_of_sight()
                    .with_area(AreaShape::Cross { radius: 1 })
                    .with_damage(DamageSpec::Fixed(2))
                    .with_status(StatusEffect::new(StatusKind::Slow, 2, 50)),
            )
            .with(
                AbilityDef::new(Id::Flame, Attack, ranged)
                    .with_cost(2)
                    .with_cooldown(3)
                    .with_area(AreaShape::Cone { length: 3 })
                    .with_damage(DamageSpec::Fixed(1))
                    .with_status(StatusEffect::new(StatusKind::Burn, 2, 1)),
            )
            .with(
                AbilityDef::new(Id::Lance, Attack, ranged)
                    .with_cost(2)
                    .with_cooldown(2)
                    .with_area(AreaShape::Line { length: 4 })
                    .with_damage(DamageSpec::Fixed(2))
                    .with_status(StatusEffect::flag(StatusKind::MovementLoss, 2)),
            )
            .with(
                AbilityDef::new(
                    Id::Meteor,
                    Attack,
                    Resolution::Delayed {
                        delay: 1,
                        bonus_vs: StatusKind::Burn,
                        bonus: 2,
                    },
                )
                .with_range(2, 5)
                .with_cost(2)
                .with_cooldown(4)
                .with_area(AreaShape::Block3x3)
                .with_damage(DamageSpec::Fixed(3)),
            )
            .with(
                AbilityDef::new(Id::Volley, Attack, Resolution::Bombard { arrows: 3 })
                    .with_range(2, 5)
                    .with_cost(2)
                    .with_cooldown(3)
                    .with_line_of_sight()
                    .with_area(AreaShape::Block3x3)
                    .with_damage(DamageSpec::Fixed(1)),
            )
            .with(
                AbilityDef::new(Id::Gambit, Attack, Resolution::Trick)
                    .with_targeting(Targeting::Unit)
                    .with_range(1, 4)
                    .with_cooldown(4)
                    .with_line_of_sight(),
            )
            .with(
                AbilityDef::new(Id::Dash, Displacement, Resolution::Reposition { retreat: false })
                    .with_targeting(Targeting::EmptyTile)
                    .with_range(1, 2)
                    .with_cooldown(2),
            )
            .with(
                AbilityDef::new(Id::Backstep, Displacement, Resolution::Reposition { retreat: true })
                    .with_targeting(Targeting::EmptyTile)
                    .with_cooldown(1)
                    .with_status(StatusEffect::new(StatusKind::DamageReduction, 2, 1)),
            )
            .with(
                AbilityDef::new(Id::Guard, Buff, Resolution::Ward)
                    .with_targeting(Targeting::SelfOnly)
                    .with_range(0, 0)
                    .with_cooldown(3)
                    .with_status(StatusEffect::new(StatusKind::Guard, 1, 2)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_covers_every_id() {
        let catalog = AbilityCatalog::standard();
        assert_eq!(catalog.len(), AbilityId::ALL.len());
        assert!(catalog.ids().eq(AbilityId::ALL));
    }

    #[test]
    fn test_costs_fit_action_budget() {
        let catalog = AbilityCatalog::standard();
        for ability in catalog.iter() {
            assert!(ability.ap_cost >= 1 && ability.ap_cost <= 3, "{}", ability.id);
            assert!(ability.min_range <= ability.max_range, "{}", ability.id);
            assert!(ability.casts_per_turn >= 1, "{}", ability.id);
        }
    }

    #[test]
    fn test_missing_id() {
        let catalog = AbilityCatalog::new().with(
            AbilityDef::new(AbilityId::Strike, AbilityKind::Attack, Resolution::Hit { melee: true })
                .with_damage(DamageSpec::Fixed(2)),
        );

        assert!(catalog.contains(AbilityId::Strike));
        assert!(catalog.get(AbilityId::Meteor).is_none());
        assert_eq!(catalog.ids().collect::<Vec<_>>(), vec![AbilityId::Strike]);
    }

    #[test]
    fn test_surge_escalates() {
        let catalog = AbilityCatalog::standard();
        assert!(catalog.get(AbilityId::Surge).is_some_and(AbilityDef::escalates));
        assert!(!catalog.get(AbilityId::Strike).is_some_and(AbilityDef::escalates));
    }
}
