//! Delayed effect scheduler.
//!
//! Abilities with a `Delayed` resolution mark an area now and strike it
//! later. The mark is stored on the state as a `PendingEffect`; the turn
//! manager calls `resolve_due` at every turn boundary with the turn number
//! about to begin.
//!
//! Each effect resolves exactly once: due effects are split off the queue
//! before they are applied.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::abilities::{AbilityCatalog, AbilityId, Resolution};
use crate::combat::{damage, win_check, DamageKind};
use crate::core::{MatchState, PlayerId, RandomSource, RulesConfig, Tile};

/// An ability waiting to land.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingEffect {
    pub ability: AbilityId,

    /// Turn number at whose start the effect lands.
    pub trigger_turn: u32,

    /// Centre of the area, fixed at cast time.
    pub target: Tile,

    pub caster: PlayerId,
}

/// Queue a delayed effect.
pub fn schedule(state: &mut MatchState, ability: AbilityId, trigger_turn: u32, target: Tile, caster: PlayerId) {
    state.pending_effects.push_back(PendingEffect {
        ability,
        trigger_turn,
        target,
        caster,
    });
    state.push_log(format!("{ability} marked {target} for turn {trigger_turn}"));
}

/// Resolve every effect with `trigger_turn <= turn`, in scheduling order.
///
/// Effects for abilities missing from the catalog are dropped.
pub fn resolve_due(
    state: &mut MatchState,
    turn: u32,
    config: &RulesConfig,
    catalog: &AbilityCatalog,
    rng: &mut dyn RandomSource,
) {
    let (due, kept): (Vector<PendingEffect>, Vector<PendingEffect>) = state
        .pending_effects
        .iter()
        .cloned()
        .partition(|effect| effect.trigger_turn <= turn);

    state.pending_effects = kept;

    for effect in due {
        let Some(def) = catalog.get(effect.ability) else {
            log::warn!("dropping pending {} with no catalog entry", effect.ability);
            continue;
        };

        let (bonus_vs, bonus) = match def.resolution {
            Resolution::Delayed { bonus_vs, bonus, .. } => (Some(bonus_vs), bonus),
            _ => (None, 0),
        };

        state.push_log(format!("{} lands at {}", effect.ability, effect.target));

        let origin = state.unit(effect.caster).position;
        for tile in def.area.tiles(&config.board, origin, effect.target) {
            let Some(victim) = state.occupant(tile) else {
                continue;
            };

            let mut amount = def.damage.amount(0, rng).unwrap_or(0);
            if bonus_vs.is_some_and(|kind| state.unit(victim).has_status(kind)) {
                amount += bonus;
            }

            if amount > 0 {
                damage(state, tile, amount, DamageKind::Delayed, Some(effect.caster));
            }
            if let Some(status) = def.inflicts.filter(|_| state.unit(victim).is_alive()) {
                state.unit_mut(victim).apply_status(status);
            }
        }
    }

    win_check(state);
}
