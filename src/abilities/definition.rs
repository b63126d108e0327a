//! Ability definitions - static ability data.
//!
//! `AbilityDef` holds the immutable properties of an ability: what it
//! costs, where it can be aimed, what area it covers, how much damage it
//! does and which resolution routine carries it out.
//!
//! Per-combatant data (cooldowns, casts this turn, escalation stage) is
//! stored on `Combatant`.

use serde::{Deserialize, Serialize};

use crate::board::{patterns, Board, Direction, Tiles};
use crate::core::{RandomSource, Tile};
use crate::status::{StatusEffect, StatusKind};

/// Identifier of every castable ability. Wire names are upper case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AbilityId {
    Strike,
    Shot,
    Snipe,
    Force,
    Hammer,
    Rend,
    Surge,
    Snare,
    Quake,
    Flame,
    Lance,
    Meteor,
    Volley,
    Gambit,
    Dash,
    Backstep,
    Guard,
}

impl AbilityId {
    /// Every ability, in declaration order.
    pub const ALL: [AbilityId; 17] = [
        AbilityId::Strike,
        AbilityId::Shot,
        AbilityId::Snipe,
        AbilityId::Force,
        AbilityId::Hammer,
        AbilityId::Rend,
        AbilityId::Surge,
        AbilityId::Snare,
        AbilityId::Quake,
        AbilityId::Flame,
        AbilityId::Lance,
        AbilityId::Meteor,
        AbilityId::Volley,
        AbilityId::Gambit,
        AbilityId::Dash,
        AbilityId::Backstep,
        AbilityId::Guard,
    ];

    /// Upper-case name, as on the wire and in the event log.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            AbilityId::Strike => "STRIKE",
            AbilityId::Shot => "SHOT",
            AbilityId::Snipe => "SNIPE",
            AbilityId::Force => "FORCE",
            AbilityId::Hammer => "HAMMER",
            AbilityId::Rend => "REND",
            AbilityId::Surge => "SURGE",
            AbilityId::Snare => "SNARE",
            AbilityId::Quake => "QUAKE",
            AbilityId::Flame => "FLAME",
            AbilityId::Lance => "LANCE",
            AbilityId::Meteor => "METEOR",
            AbilityId::Volley => "VOLLEY",
            AbilityId::Gambit => "GAMBIT",
            AbilityId::Dash => "DASH",
            AbilityId::Backstep => "BACKSTEP",
            AbilityId::Guard => "GUARD",
        }
    }
}

impl std::fmt::Display for AbilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Broad category of an ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityKind {
    Attack,
    Displacement,
    Buff,
}

/// What the target tile must hold at cast time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Targeting {
    /// The living opponent must stand on the target.
    Unit,
    /// Any tile in range.
    Tile,
    /// An unoccupied, walkable tile.
    EmptyTile,
    /// The caster; the submitted target is ignored.
    SelfOnly,
}

/// Tiles covered by an ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaShape {
    Point,
    Cross { radius: i32 },
    Block3x3,
    Block5x5,
    /// Projectile from the caster toward the target.
    Line { length: i32 },
    /// Wedge from the caster toward the target.
    Cone { length: i32 },
}

impl AreaShape {
    /// Covered tiles for a cast from `caster` at `target`, filtered to the board.
    #[must_use]
    pub fn tiles(self, board: &Board, caster: Tile, target: Tile) -> Tiles {
        let raw = match self {
            AreaShape::Point => patterns::point(target),
            AreaShape::Cross { radius } => patterns::cross(target, radius),
            AreaShape::Block3x3 => patterns::block3x3(target),
            AreaShape::Block5x5 => patterns::block5x5(target),
            AreaShape::Line { length } => patterns::line(board, caster, Direction::toward(caster, target), length),
            AreaShape::Cone { length } => patterns::cone(caster, Direction::toward(caster, target), length),
        };
        raw.into_iter().filter(|&tile| board.in_bounds(tile)).collect()
    }
}

/// How much damage an ability deals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageSpec {
    None,
    Fixed(u32),
    /// Uniform roll in `min..=max`.
    Roll { min: u32, max: u32 },
    /// Damage by escalation stage; the last entry repeats.
    Staged(Vec<u32>),
}

impl DamageSpec {
    /// Damage for one hit, or `None` for non-damaging abilities.
    pub fn amount(&self, stage: u32, rng: &mut dyn RandomSource) -> Option<u32> {
        match self {
            DamageSpec::None => None,
            DamageSpec::Fixed(amount) => Some(*amount),
            DamageSpec::Roll { min, max } => Some(rng.roll(*min, *max)),
            DamageSpec::Staged(table) => {
                let index = (stage as usize).min(table.len().saturating_sub(1));
                table.get(index).copied()
            }
        }
    }

    /// Number of escalation stages (0 for non-staged damage).
    #[must_use]
    pub fn stages(&self) -> u32 {
        match self {
            DamageSpec::Staged(table) => u32::try_from(table.len()).unwrap_or(u32::MAX),
            _ => 0,
        }
    }
}

/// Resolution routine run after a cast is paid for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// Damage every unit in the area. An empty area is a miss.
    Hit { melee: bool },
    /// Damage the target, then push it away from the caster if it survives.
    /// A blocked push knocks the target down for `knockdown` turns.
    Knockback { distance: u32, collision_per_tile: u32, knockdown: u32 },
    /// Mark the area now, resolve it `delay` turns later.
    Delayed { delay: u32, bonus_vs: StatusKind, bonus: u32 },
    /// Drop `arrows` hits on random open tiles of the area.
    Bombard { arrows: u32 },
    /// Weighted random mix of side effects on caster and target.
    Trick,
    /// Relocate the caster. `retreat` forbids closing distance to the enemy.
    Reposition { retreat: bool },
    /// Apply the ability's status to the caster.
    Ward,
}

/// Static ability definition.
///
/// ## Example
///
/// ```
/// use grid_duel::abilities::{AbilityDef, AbilityId, AbilityKind, DamageSpec, Resolution, Targeting};
///
/// let strike = AbilityDef::new(AbilityId::Strike, AbilityKind::Attack, Resolution::Hit { melee: true })
///     .with_targeting(Targeting::Unit)
///     .with_range(1, 1)
///     .with_damage(DamageSpec::Fixed(2));
///
/// assert_eq!(strike.max_range, 1);
/// assert_eq!(strike.casts_per_turn, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityDef {
    pub id: AbilityId,

    pub kind: AbilityKind,

    pub targeting: Targeting,

    /// Inclusive Manhattan range window.
    pub min_range: u32,
    pub max_range: u32,

    pub ap_cost: u32,

    /// Cooldown set once the per-turn cast cap is reached.
    pub cooldown: u32,

    pub casts_per_turn: u32,

    pub requires_los: bool,

    pub area: AreaShape,

    pub damage: DamageSpec,

    /// Status applied to struck units (attacks) or the caster (others).
    pub inflicts: Option<StatusEffect>,

    pub resolution: Resolution,
}

impl AbilityDef {
    /// A single-target, range-1, one-cast-per-turn ability costing 1 AP.
    #[must_use]
    pub fn new(id: AbilityId, kind: AbilityKind, resolution: Resolution) -> Self {
        Self {
            id,
            kind,
            targeting: Targeting::Tile,
            min_range: 1,
            max_range: 1,
            ap_cost: 1,
            cooldown: 0,
            casts_per_turn: 1,
            requires_los: false,
            area: AreaShape::Point,
            damage: DamageSpec::None,
            inflicts: None,
            resolution,
        }
    }

    #[must_use]
    pub fn with_targeting(mut self, targeting: Targeting) -> Self {
        self.targeting = targeting;
        self
    }

    #[must_use]
    pub fn with_range(mut self, min: u32, max: u32) -> Self {
        self.min_range = min;
        self.max_range = max;
        self
    }

    #[must_use]
    pub fn with_cost(mut self, ap: u32) -> Self {
        self.ap_cost = ap;
        self
    }

    #[must_use]
    pub fn with_cooldown(mut self, turns: u32) -> Self {
        self.cooldown = turns;
        self
    }

    #[must_use]
    pub fn with_casts_per_turn(mut self, casts: u32) -> Self {
        self.casts_per_turn = casts;
        self
    }

    #[must_use]
    pub fn with_line_of_sight(mut self) -> Self {
        self.requires_los = true;
        self
    }

    #[must_use]
    pub fn with_area(mut self, area: AreaShape) -> Self {
        self.area = area;
        self
    }

    #[must_use]
    pub fn with_damage(mut self, damage: DamageSpec) -> Self {
        self.damage = damage;
        self
    }

    #[must_use]
    pub fn with_status(mut self, effect: StatusEffect) -> Self {
        self.inflicts = Some(effect);
        self
    }

    /// Whether `distance` falls inside the range window.
    #[must_use]
    pub fn in_range(&self, distance: u32) -> bool {
        (self.min_range..=self.max_range).contains(&distance)
    }

    /// Whether the damage escalates with repeated casts.
    #[must_use]
    pub fn escalates(&self) -> bool {
        self.damage.stages() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    #[test]
    fn test_ability_id_wire_names() {
        for id in AbilityId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.name()));
        }
    }

    #[test]
    fn test_staged_damage_caps_at_last_stage() {
        let mut rng = GameRng::new(1);
        let spec = DamageSpec::Staged(vec![1, 2, 4]);

        assert_eq!(spec.amount(0, &mut rng), Some(1));
        assert_eq!(spec.amount(2, &mut rng), Some(4));
        assert_eq!(spec.amount(9, &mut rng), Some(4));
        assert_eq!(spec.stages(), 3);
    }

    #[test]
    fn test_roll_within_bounds() {
        let mut rng = GameRng::new(3);
        let spec = DamageSpec::Roll { min: 1, max: 3 };
        for _ in 0..50 {
            let amount = spec.amount(0, &mut rng).unwrap();
            assert!((1..=3).contains(&amount));
        }
        assert_eq!(DamageSpec::None.amount(0, &mut rng), None);
    }

    #[test]
    fn test_area_filters_to_board() {
        let board = Board::open(10, 10);
        let tiles = AreaShape::Block3x3.tiles(&board, Tile::new(5, 5), Tile::new(0, 0));
        assert_eq!(tiles.len(), 4);
    }

    #[test]
    fn test_aimed_area_uses_caster_origin() {
        let board = Board::open(10, 10);
        let tiles = AreaShape::Line { length: 3 }.tiles(&board, Tile::new(2, 2), Tile::new(3, 2));
        assert_eq!(tiles.as_slice(), &[Tile::new(3, 2), Tile::new(4, 2), Tile::new(5, 2)]);
    }

    #[test]
    fn test_range_window() {
        let snipe = AbilityDef::new(AbilityId::Snipe, AbilityKind::Attack, Resolution::Hit { melee: false })
            .with_range(3, 8);
        assert!(!snipe.in_range(2));
        assert!(snipe.in_range(3));
        assert!(snipe.in_range(8));
        assert!(!snipe.in_range(9));
    }
}
