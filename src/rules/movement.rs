//! Walking.

use super::Rejection;
use crate::board::path_distance;
use crate::core::{MatchState, PlayerId, RulesConfig, Tile};

/// Check a move and return its movement point cost.
pub fn validate_move(state: &MatchState, config: &RulesConfig, player: PlayerId, to: Tile) -> Result<u32, Rejection> {
    if !config.board.in_bounds(to) {
        return Err(Rejection::OutOfBounds(to));
    }
    if state.occupant(to).is_some() {
        return Err(Rejection::Occupied(to));
    }

    let available = state.turn.movement_points;
    if available == 0 {
        return Err(Rejection::InsufficientMovementPoints { needed: 1, available });
    }

    let unit = state.unit(player);
    if unit.movement_impaired() {
        return Err(Rejection::MovementImpaired);
    }

    let cost = path_distance(&config.board, state, config.neighborhood, unit.position, to)
        .ok_or(Rejection::Unreachable(to))?;
    if cost > available {
        return Err(Rejection::InsufficientMovementPoints { needed: cost, available });
    }

    Ok(cost)
}

/// Walk a validated move.
pub fn walk(state: &mut MatchState, player: PlayerId, to: Tile, cost: u32) {
    state.unit_mut(player).position = to;
    state.turn.movement_points -= cost;
    state.push_log(format!("{player} moved to {to}"));
}
