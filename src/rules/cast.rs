//! Ability casting: validation, payment and resolution.
//!
//! A cast is checked in full before anything is paid, including the
//! conditions that only matter to its resolution (an empty landing tile
//! for repositioning, open tiles for a bombardment). Once paid, resolution
//! cannot fail.

use super::Rejection;
use crate::abilities::{AbilityCatalog, AbilityDef, AbilityId, AbilityKind, AreaShape, Resolution, Targeting};
use crate::board::{line_of_sight, Tiles};
use crate::combat::{damage, knockback, win_check, DamageKind};
use crate::core::{MatchState, PlayerId, RandomSource, RulesConfig, Tile};
use crate::schedule::schedule;
use crate::status::{StatusEffect, StatusKind};

/// Relative odds of each gambit outcome, in `Trick` order.
const TRICK_WEIGHTS: [u32; 3] = [45, 45, 10];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Trick {
    /// Drain a movement point from the target for two turns; the caster
    /// gains one now.
    Steal,
    /// Caster deals 50% more, target takes 25% more and is revealed.
    Empower,
    /// Exchange hit points. Both are revealed.
    Swap,
}

impl Trick {
    const ALL: [Trick; 3] = [Trick::Steal, Trick::Empower, Trick::Swap];
}

/// Check a cast without changing anything.
///
/// Returns the definition and the effective target (the caster's own tile
/// for self-targeted abilities).
pub fn validate_cast<'a>(
    state: &MatchState,
    config: &RulesConfig,
    catalog: &'a AbilityCatalog,
    caster: PlayerId,
    ability: AbilityId,
    target: Tile,
) -> Result<(&'a AbilityDef, Tile), Rejection> {
    let unit = state.unit(caster);

    if unit.is_stunned() {
        return Err(Rejection::Stunned);
    }

    let def = catalog.get(ability).ok_or(Rejection::UnknownAbility(ability))?;

    let turns = unit.cooldown(ability);
    if turns > 0 {
        return Err(Rejection::OnCooldown { ability, turns });
    }

    if unit.casts(ability) >= def.casts_per_turn {
        return Err(Rejection::CastLimit {
            ability,
            limit: def.casts_per_turn,
        });
    }

    if state.turn.action_points < def.ap_cost {
        return Err(Rejection::InsufficientActionPoints {
            needed: def.ap_cost,
            available: state.turn.action_points,
        });
    }

    if def.kind == AbilityKind::Displacement && unit.movement_impaired() {
        return Err(Rejection::MovementImpaired);
    }

    if def.targeting == Targeting::SelfOnly {
        return Ok((def, unit.position));
    }

    if !config.board.in_bounds(target) {
        return Err(Rejection::OutOfBounds(target));
    }

    let distance = unit.position.manhattan(target);
    if distance == 0 || !def.in_range(distance) {
        return Err(Rejection::OutOfRange { ability, distance });
    }

    if def.requires_los && !line_of_sight(&config.board, unit.position, target) {
        return Err(Rejection::NoLineOfSight(target));
    }

    let invalid = Rejection::InvalidTarget { ability, target };
    match def.targeting {
        Targeting::Unit if state.occupant(target) != Some(caster.other()) => return Err(invalid),
        Targeting::EmptyTile if !config.board.is_open(target) || state.occupant(target).is_some() => {
            return Err(invalid)
        }
        _ => {}
    }

    match def.resolution {
        Resolution::Reposition { retreat: true } => {
            let enemy = state.opponent_of(caster).position;
            if target.manhattan(enemy) < unit.position.manhattan(enemy) {
                return Err(invalid);
            }
        }
        Resolution::Bombard { .. } if landing_tiles(def.area, config, unit.position, target).is_empty() => {
            return Err(invalid);
        }
        _ => {}
    }

    Ok((def, target))
}

/// Pay for a validated cast: action points, cast count, cooldown once the
/// per-turn cap is reached.
pub fn commit(state: &mut MatchState, def: &AbilityDef, caster: PlayerId) {
    state.turn.action_points -= def.ap_cost;

    let unit = state.unit_mut(caster);
    let casts = unit.casts(def.id) + 1;
    unit.casts_this_turn.insert(def.id, casts);
    if casts >= def.casts_per_turn && def.cooldown > 0 {
        unit.cooldowns.insert(def.id, def.cooldown);
    }

    state.push_log(format!("{caster} casts {}", def.id));
}

/// Carry out a paid cast.
pub fn resolve(
    state: &mut MatchState,
    config: &RulesConfig,
    rng: &mut dyn RandomSource,
    def: &AbilityDef,
    caster: PlayerId,
    target: Tile,
) {
    match def.resolution {
        Resolution::Hit { melee } => strike_area(state, config, rng, def, caster, target, melee),
        Resolution::Knockback {
            distance,
            collision_per_tile,
            knockdown,
        } => {
            let origin = state.unit(caster).position;
            let amount = def.damage.amount(0, rng).unwrap_or(0);
            damage(state, target, amount, DamageKind::Ranged, Some(caster));

            let victim = caster.other();
            if state.unit(victim).is_alive() {
                let outcome = knockback(state, config, victim, origin, distance, collision_per_tile);
                if outcome.collided && state.unit(victim).is_alive() {
                    inflict(state, caster, victim, StatusEffect::flag(StatusKind::Knockdown, knockdown));
                }
            }
        }
        Resolution::Delayed { delay, .. } => {
            let trigger_turn = state.turn.number + delay;
            schedule(state, def.id, trigger_turn, target, caster);
        }
        Resolution::Bombard { arrows } => {
            let origin = state.unit(caster).position;
            let tiles = landing_tiles(def.area, config, origin, target);
            if tiles.is_empty() {
                return;
            }
            for _ in 0..arrows {
                let tile = tiles[rng.pick(tiles.len())];
                state.push_log(format!("Arrow lands at {tile}"));
                if state.occupant(tile).is_some_and(|hit| hit != caster) {
                    let amount = def.damage.amount(0, rng).unwrap_or(0);
                    damage(state, tile, amount, DamageKind::Area, Some(caster));
                }
            }
        }
        Resolution::Trick => gambit(state, config, rng, caster),
        Resolution::Reposition { .. } => {
            state.unit_mut(caster).position = target;
            state.push_log(format!("{caster} {} to {target}", verb(def.id)));
            if let Some(effect) = def.inflicts {
                inflict(state, caster, caster, effect);
            }
        }
        Resolution::Ward => {
            if let Some(effect) = def.inflicts {
                inflict(state, caster, caster, effect);
            }
        }
    }
}

/// Damage and afflict every unit but the caster inside the area.
fn strike_area(
    state: &mut MatchState,
    config: &RulesConfig,
    rng: &mut dyn RandomSource,
    def: &AbilityDef,
    caster: PlayerId,
    target: Tile,
    melee: bool,
) {
    let origin = state.unit(caster).position;
    let kind = match (melee, def.area) {
        (true, _) => DamageKind::Melee,
        (false, AreaShape::Point) => DamageKind::Ranged,
        (false, _) => DamageKind::Area,
    };
    let stage = state.unit(caster).stage(def.id);

    let mut landed = false;
    for tile in def.area.tiles(&config.board, origin, target) {
        let Some(victim) = state.occupant(tile).filter(|&hit| hit != caster) else {
            continue;
        };
        landed = true;

        if let Some(amount) = def.damage.amount(stage, rng) {
            damage(state, tile, amount, kind, Some(caster));
        }
        if let Some(effect) = def.inflicts.filter(|_| state.unit(victim).is_alive()) {
            inflict(state, caster, victim, effect);
        }
    }

    if !landed {
        state.push_log(format!("{} missed (no target)", def.id));
    }

    if def.escalates() {
        let last = def.damage.stages() - 1;
        state.unit_mut(caster).stages.insert(def.id, (stage + 1).min(last));
    }
}

fn gambit(state: &mut MatchState, config: &RulesConfig, rng: &mut dyn RandomSource, caster: PlayerId) {
    let victim = caster.other();
    let trick = rng
        .pick_weighted(&TRICK_WEIGHTS)
        .and_then(|index| Trick::ALL.get(index).copied())
        .unwrap_or(Trick::Steal);

    match trick {
        Trick::Steal => {
            state.push_log(format!("GAMBIT: {caster} steals momentum"));
            inflict(state, caster, victim, StatusEffect::new(StatusKind::ResourceReduction, 2, 1));
            state.turn.movement_points = (state.turn.movement_points + 1).min(config.max_movement_points);
        }
        Trick::Empower => {
            state.push_log(format!("GAMBIT: {caster} is empowered"));
            inflict(state, caster, caster, StatusEffect::new(StatusKind::DamageAmplification, 2, 50));
            inflict(state, caster, victim, StatusEffect::new(StatusKind::Exposed, 2, 25));
            inflict(state, caster, victim, StatusEffect::flag(StatusKind::Reveal, 2));
        }
        Trick::Swap => {
            state.push_log(format!("GAMBIT: {caster} and {victim} swap vitality"));
            let (mine, theirs) = state.units.pair_mut(caster);
            std::mem::swap(&mut mine.hp, &mut theirs.hp);
            inflict(state, caster, caster, StatusEffect::flag(StatusKind::Reveal, 2));
            inflict(state, caster, victim, StatusEffect::flag(StatusKind::Reveal, 2));
            win_check(state);
        }
    }
}

fn inflict(state: &mut MatchState, source: PlayerId, player: PlayerId, effect: StatusEffect) {
    state.unit_mut(player).apply_status(effect);
    if source == player {
        state.push_log(format!("{player} gains {}", effect.kind));
    } else {
        state.push_log(format!("{player} suffers {}", effect.kind));
    }
}

/// Walkable tiles of a bombardment area.
fn landing_tiles(area: AreaShape, config: &RulesConfig, origin: Tile, target: Tile) -> Tiles {
    area.tiles(&config.board, origin, target)
        .into_iter()
        .filter(|&tile| config.board.is_open(tile))
        .collect()
}

fn verb(ability: AbilityId) -> &'static str {
    match ability {
        AbilityId::Backstep => "steps back",
        _ => "dashes",
    }
}
