//! Turn boundary processing.

use im::OrdMap;

use crate::abilities::AbilityCatalog;
use crate::combat::wound;
use crate::core::{MatchState, RandomSource, RulesConfig};
use crate::schedule::resolve_due;
use crate::status::StatusKind;

/// Hand the turn to the other player.
///
/// Runs the boundary steps in order, stopping as soon as a step ends the
/// match:
///
/// 1. Escalation reset and bleed tick for the player whose turn is ending.
/// 2. Delayed effects due at the upcoming turn number.
/// 3. Switch the current player.
/// 4. Advance the turn number when play returns to the first player.
/// 5. Refill action and movement points, less any resource reduction.
/// 6. Clear the new player's cast counters and guard.
/// 7. Burn tick for the new player.
/// 8. Count down the new player's other timed statuses.
/// 9. Count down the new player's cooldowns.
pub fn end_turn(state: &mut MatchState, config: &RulesConfig, catalog: &AbilityCatalog, rng: &mut dyn RandomSource) {
    let ending = state.turn.current_player;
    let next = ending.other();

    reset_idle_escalations(state, catalog);
    if let Some(amount) = state.unit_mut(ending).tick_periodic(StatusKind::Bleed) {
        wound(state, ending, amount, "bleed");
    }
    if state.is_concluded() {
        return;
    }

    let upcoming = state.turn.number + u32::from(next == config.first_player);
    resolve_due(state, upcoming, config, catalog, rng);
    if state.is_concluded() {
        return;
    }

    state.turn.current_player = next;
    state.turn.number = upcoming;
    log::trace!("turn {} begins for {next}", state.turn.number);

    let withheld = state.unit(next).resource_reduction(config.max_movement_points);
    state.turn.action_points = config.max_action_points;
    state.turn.movement_points = config.max_movement_points.saturating_sub(withheld);

    let unit = state.unit_mut(next);
    unit.casts_this_turn = OrdMap::new();
    unit.clear_status(StatusKind::Guard);

    if let Some(amount) = state.unit_mut(next).tick_periodic(StatusKind::Burn) {
        wound(state, next, amount, "burn");
    }
    if state.is_concluded() {
        return;
    }

    for kind in state.unit_mut(next).tick_statuses() {
        state.push_log(format!("{next}'s {kind} wore off"));
    }

    let unit = state.unit_mut(next);
    unit.cooldowns = unit
        .cooldowns
        .iter()
        .map(|(&id, &turns)| (id, turns.saturating_sub(1)))
        .collect();
}

/// Staged abilities that were ready but left unused this turn drop back to
/// their first stage.
fn reset_idle_escalations(state: &mut MatchState, catalog: &AbilityCatalog) {
    let player = state.turn.current_player;
    let unit = state.unit_mut(player);
    let idle: Vec<_> = unit
        .stages
        .keys()
        .copied()
        .filter(|&id| catalog.get(id).is_some_and(|def| def.escalates()))
        .filter(|&id| unit.casts(id) == 0 && unit.cooldown(id) == 0)
        .collect();

    for id in idle {
        unit.stages.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::AbilityId;
    use crate::core::{GameRng, MatchResult, PlayerId, Tile};
    use crate::status::StatusEffect;

    fn setup() -> (RulesConfig, AbilityCatalog, MatchState, GameRng) {
        let config = RulesConfig::standard();
        let catalog = AbilityCatalog::standard();
        let state = MatchState::new(&config, catalog.ids());
        (config, catalog, state, GameRng::new(9))
    }

    #[test]
    fn test_alternation_and_numbering() {
        let (config, catalog, mut state, mut rng) = setup();

        end_turn(&mut state, &config, &catalog, &mut rng);
        assert_eq!(state.turn.current_player, PlayerId::P2);
        assert_eq!(state.turn.number, 1);

        end_turn(&mut state, &config, &catalog, &mut rng);
        assert_eq!(state.turn.current_player, PlayerId::P1);
        assert_eq!(state.turn.number, 2);
    }

    #[test]
    fn test_resources_refill_with_slow() {
        let (config, catalog, mut state, mut rng) = setup();
        state.turn.action_points = 0;
        state.turn.movement_points = 0;
        state.unit_mut(PlayerId::P2).apply_status(StatusEffect::new(StatusKind::Slow, 2, 50));

        end_turn(&mut state, &config, &catalog, &mut rng);

        assert_eq!(state.turn.action_points, 3);
        assert_eq!(state.turn.movement_points, 2);
    }

    #[test]
    fn test_reduction_floors_at_zero() {
        let (config, catalog, mut state, mut rng) = setup();
        state
            .unit_mut(PlayerId::P2)
            .apply_status(StatusEffect::new(StatusKind::ResourceReduction, 2, 7));

        end_turn(&mut state, &config, &catalog, &mut rng);

        assert_eq!(state.turn.movement_points, 0);
    }

    #[test]
    fn test_guard_and_casts_cleared_for_new_player() {
        let (config, catalog, mut state, mut rng) = setup();
        let p2 = state.unit_mut(PlayerId::P2);
        p2.apply_status(StatusEffect::new(StatusKind::Guard, 1, 2));
        p2.casts_this_turn.insert(AbilityId::Shot, 2);

        end_turn(&mut state, &config, &catalog, &mut rng);

        assert!(state.unit(PlayerId::P2).guard_value().is_none());
        assert_eq!(state.unit(PlayerId::P2).casts(AbilityId::Shot), 0);
    }

    #[test]
    fn test_cooldowns_tick_for_new_player_only() {
        let (config, catalog, mut state, mut rng) = setup();
        state.unit_mut(PlayerId::P1).cooldowns.insert(AbilityId::Guard, 3);
        state.unit_mut(PlayerId::P2).cooldowns.insert(AbilityId::Guard, 3);

        end_turn(&mut state, &config, &catalog, &mut rng);

        assert_eq!(state.unit(PlayerId::P1).cooldown(AbilityId::Guard), 3);
        assert_eq!(state.unit(PlayerId::P2).cooldown(AbilityId::Guard), 2);
    }

    #[test]
    fn test_status_wears_off() {
        let (config, catalog, mut state, mut rng) = setup();
        state.unit_mut(PlayerId::P2).apply_status(StatusEffect::flag(StatusKind::Stun, 1));

        end_turn(&mut state, &config, &catalog, &mut rng);

        assert!(!state.unit(PlayerId::P2).is_stunned());
        assert_eq!(state.log.last(), Some("P2's stun wore off"));
    }

    #[test]
    fn test_bleed_ticks_on_ending_player() {
        let (config, catalog, mut state, mut rng) = setup();
        state.unit_mut(PlayerId::P1).apply_status(StatusEffect::new(StatusKind::Bleed, 3, 1));

        end_turn(&mut state, &config, &catalog, &mut rng);

        assert_eq!(state.unit(PlayerId::P1).hp, 9);
        assert_eq!(state.unit(PlayerId::P1).status(StatusKind::Bleed).map(|s| s.turns_remaining), Some(2));
    }

    #[test]
    fn test_lethal_burn_stops_processing() {
        let (config, catalog, mut state, mut rng) = setup();
        state.unit_mut(PlayerId::P2).hp = 1;
        state.unit_mut(PlayerId::P2).apply_status(StatusEffect::new(StatusKind::Burn, 2, 1));
        state.unit_mut(PlayerId::P2).apply_status(StatusEffect::flag(StatusKind::Stun, 1));
        state.unit_mut(PlayerId::P2).cooldowns.insert(AbilityId::Guard, 2);

        end_turn(&mut state, &config, &catalog, &mut rng);

        assert_eq!(state.result(), Some(MatchResult::Winner(PlayerId::P1)));
        assert!(state.unit(PlayerId::P2).is_stunned());
        assert_eq!(state.unit(PlayerId::P2).cooldown(AbilityId::Guard), 2);
    }

    #[test]
    fn test_idle_escalation_resets() {
        let (config, catalog, mut state, mut rng) = setup();
        state.unit_mut(PlayerId::P1).stages.insert(AbilityId::Surge, 2);

        end_turn(&mut state, &config, &catalog, &mut rng);

        assert_eq!(state.unit(PlayerId::P1).stage(AbilityId::Surge), 0);
    }

    #[test]
    fn test_used_escalation_kept() {
        let (config, catalog, mut state, mut rng) = setup();
        let p1 = state.unit_mut(PlayerId::P1);
        p1.stages.insert(AbilityId::Surge, 2);
        p1.casts_this_turn.insert(AbilityId::Surge, 1);

        end_turn(&mut state, &config, &catalog, &mut rng);

        assert_eq!(state.unit(PlayerId::P1).stage(AbilityId::Surge), 2);
    }

    #[test]
    fn test_delayed_effect_lands_before_next_round() {
        let (config, catalog, mut state, mut rng) = setup();
        let p2_tile = state.unit(PlayerId::P2).position;
        crate::schedule::schedule(&mut state, AbilityId::Meteor, 2, p2_tile, PlayerId::P1);

        end_turn(&mut state, &config, &catalog, &mut rng);
        assert_eq!(state.pending_effects.len(), 1);

        state.unit_mut(PlayerId::P2).position = Tile::new(8, 8);
        end_turn(&mut state, &config, &catalog, &mut rng);
        assert!(state.pending_effects.is_empty());
        assert_eq!(state.unit(PlayerId::P2).hp, 10);
    }
}
