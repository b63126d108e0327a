//! Damage pipeline and win detection.

use crate::core::{MatchResult, MatchState, PlayerId, Tile};
use crate::status::StatusKind;

/// Source category of a hit.
///
/// Only melee hits provoke a guard counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DamageKind {
    Melee,
    Ranged,
    Area,
    Delayed,
}

/// Damage dealt back to a melee attacker who strikes a guard.
pub const GUARD_COUNTER: u32 = 1;

/// Deal `raw` damage to whoever stands on `tile`.
///
/// Returns `false` if the tile is empty. Modifiers apply in a fixed order:
/// the caster's amplification, the target's exposure, the target's guard
/// (consumed), then flat damage reduction. Ends with a win check.
pub fn damage(state: &mut MatchState, tile: Tile, raw: u32, kind: DamageKind, caster: Option<PlayerId>) -> bool {
    let Some(target) = state.occupant(tile) else {
        return false;
    };

    let mut amount = raw;
    if let Some(caster) = caster {
        amount = scale(amount, state.unit(caster).damage_amplification());
    }
    amount = scale(amount, state.unit(target).exposure());

    let mut countered = false;
    if let Some(absorb) = state.unit(target).guard_value() {
        amount = amount.saturating_sub(absorb);
        state.unit_mut(target).clear_status(StatusKind::Guard);
        state.push_log("Guard reduced damage");
        countered = kind == DamageKind::Melee;
    }

    amount = amount.saturating_sub(state.unit(target).damage_reduction());

    state.unit_mut(target).lose_hp(amount);
    state.push_log(format!("{target} took {amount} damage"));
    win_check(state);

    if let Some(attacker) = caster.filter(|&c| countered && c != target) {
        if state.unit(target).is_alive() && state.unit(attacker).is_alive() {
            state.unit_mut(attacker).lose_hp(GUARD_COUNTER);
            state.push_log(format!("Counter-attack hit {attacker}"));
            win_check(state);
        }
    }

    true
}

/// Apply `amount` straight to a combatant's hit points, skipping every
/// modifier. Used for periodic ticks and collisions.
pub fn wound(state: &mut MatchState, player: PlayerId, amount: u32, cause: &str) {
    state.unit_mut(player).lose_hp(amount);
    state.push_log(format!("{player} took {amount} {cause} damage"));
    win_check(state);
}

/// Settle the winner from current hit points.
///
/// Both down is a draw, one down hands the win to the other, otherwise
/// the result is left as it is.
pub fn win_check(state: &mut MatchState) {
    let p1_down = !state.unit(PlayerId::P1).is_alive();
    let p2_down = !state.unit(PlayerId::P2).is_alive();

    let result = match (p1_down, p2_down) {
        (true, true) => MatchResult::Draw,
        (true, false) => MatchResult::Winner(PlayerId::P2),
        (false, true) => MatchResult::Winner(PlayerId::P1),
        (false, false) => return,
    };

    if state.winner != Some(result) {
        log::trace!("match decided: {result:?}");
    }
    state.winner = Some(result);
}

fn scale(amount: u32, percent: u32) -> u32 {
    amount + amount * percent / 100
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::AbilityId;
    use crate::core::RulesConfig;
    use crate::status::StatusEffect;

    fn fresh() -> MatchState {
        MatchState::new(&RulesConfig::standard(), [AbilityId::Strike])
    }

    fn p2_tile(state: &MatchState) -> Tile {
        state.unit(PlayerId::P2).position
    }

    #[test]
    fn test_empty_tile() {
        let mut state = fresh();
        assert!(!damage(&mut state, Tile::new(9, 9), 3, DamageKind::Ranged, Some(PlayerId::P1)));
        assert!(state.log.is_empty());
    }

    #[test]
    fn test_plain_hit() {
        let mut state = fresh();
        let tile = p2_tile(&state);

        assert!(damage(&mut state, tile, 2, DamageKind::Ranged, Some(PlayerId::P1)));
        assert_eq!(state.unit(PlayerId::P2).hp, 8);
        assert_eq!(state.log.last(), Some("P2 took 2 damage"));
    }

    #[test]
    fn test_modifier_order() {
        let mut state = fresh();
        let tile = p2_tile(&state);
        state
            .unit_mut(PlayerId::P1)
            .apply_status(StatusEffect::new(StatusKind::DamageAmplification, 2, 50));
        state.unit_mut(PlayerId::P2).apply_status(StatusEffect::new(StatusKind::Exposed, 2, 25));
        state
            .unit_mut(PlayerId::P2)
            .apply_status(StatusEffect::new(StatusKind::DamageReduction, 2, 1));

        // 4 -> 6 (amp) -> 7 (exposed, floor) -> 6 (reduction)
        damage(&mut state, tile, 4, DamageKind::Ranged, Some(PlayerId::P1));
        assert_eq!(state.unit(PlayerId::P2).hp, 4);
    }

    #[test]
    fn test_guard_absorbs_and_counters_melee() {
        let mut state = fresh();
        let tile = p2_tile(&state);
        state.unit_mut(PlayerId::P2).apply_status(StatusEffect::new(StatusKind::Guard, 1, 2));

        damage(&mut state, tile, 2, DamageKind::Melee, Some(PlayerId::P1));

        assert_eq!(state.unit(PlayerId::P2).hp, 10);
        assert_eq!(state.unit(PlayerId::P1).hp, 9);
        assert!(state.unit(PlayerId::P2).guard_value().is_none());
        assert!(state.log.contains("Guard reduced damage"));
        assert_eq!(state.log.last(), Some("Counter-attack hit P1"));
    }

    #[test]
    fn test_guard_no_counter_on_ranged() {
        let mut state = fresh();
        let tile = p2_tile(&state);
        state.unit_mut(PlayerId::P2).apply_status(StatusEffect::new(StatusKind::Guard, 1, 2));

        damage(&mut state, tile, 3, DamageKind::Ranged, Some(PlayerId::P1));

        assert_eq!(state.unit(PlayerId::P2).hp, 9);
        assert_eq!(state.unit(PlayerId::P1).hp, 10);
    }

    #[test]
    fn test_lethal_sets_winner() {
        let mut state = fresh();
        let tile = p2_tile(&state);
        state.unit_mut(PlayerId::P2).hp = 2;

        damage(&mut state, tile, 5, DamageKind::Ranged, Some(PlayerId::P1));

        assert_eq!(state.unit(PlayerId::P2).hp, 0);
        assert_eq!(state.result(), Some(MatchResult::Winner(PlayerId::P1)));
    }

    #[test]
    fn test_win_check_draw_and_idempotent() {
        let mut state = fresh();
        win_check(&mut state);
        assert_eq!(state.result(), None);

        state.unit_mut(PlayerId::P1).hp = 0;
        state.unit_mut(PlayerId::P2).hp = 0;
        win_check(&mut state);
        win_check(&mut state);
        assert_eq!(state.result(), Some(MatchResult::Draw));
    }

    #[test]
    fn test_wound_bypasses_guard() {
        let mut state = fresh();
        state.unit_mut(PlayerId::P2).apply_status(StatusEffect::new(StatusKind::Guard, 1, 2));

        wound(&mut state, PlayerId::P2, 1, "bleed");

        assert_eq!(state.unit(PlayerId::P2).hp, 9);
        assert_eq!(state.unit(PlayerId::P2).guard_value(), Some(2));
        assert_eq!(state.log.last(), Some("P2 took 1 bleed damage"));
    }
}
