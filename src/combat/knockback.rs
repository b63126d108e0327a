//! Forced movement with collisions and ring-out.

use super::damage::{win_check, wound};
use crate::board::Direction;
use crate::core::{MatchState, PlayerId, RulesConfig, Tile};

/// What happened to a pushed combatant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PushOutcome {
    /// Tiles actually travelled.
    pub moved: u32,

    /// The push stopped against an edge, an obstacle or a unit.
    pub collided: bool,

    /// The combatant was pushed off a ring-out edge.
    pub ringed_out: bool,
}

/// Push `target` up to `distance` tiles directly away from `origin`.
///
/// The push advances one tile at a time. Leaving a ring-out board drops
/// the target to 0 hp. Anything else that stops it early (a plain edge,
/// an obstacle or the other combatant) deals `collision_per_tile` for
/// every step not taken; with `unit_collision_damages_both` set, a unit
/// collision hurts the obstructing combatant by the same amount.
pub fn knockback(
    state: &mut MatchState,
    config: &RulesConfig,
    target: PlayerId,
    origin: Tile,
    distance: u32,
    collision_per_tile: u32,
) -> PushOutcome {
    let board = &config.board;
    let direction = Direction::toward(origin, state.unit(target).position);
    let mut outcome = PushOutcome::default();

    for step in 0..distance {
        let next = direction.step(state.unit(target).position, 1);

        let obstruction = if !board.in_bounds(next) {
            if board.ring_out {
                state.unit_mut(target).hp = 0;
                state.push_log("Ring out!");
                win_check(state);
                outcome.ringed_out = true;
                return outcome;
            }
            None
        } else if board.is_obstacle(next) {
            None
        } else if let Some(other) = state.occupant(next) {
            Some(other)
        } else {
            state.unit_mut(target).position = next;
            state.push_log(format!("Pushed to {next}"));
            outcome.moved += 1;
            continue;
        };

        outcome.collided = true;
        state.push_log("Push blocked");

        let impact = (distance - step) * collision_per_tile;
        if impact > 0 {
            wound(state, target, impact, "collision");
            if let Some(other) = obstruction.filter(|_| config.unit_collision_damages_both) {
                wound(state, other, impact, "collision");
            }
        }
        break;
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::AbilityId;
    use crate::board::Board;
    use crate::core::MatchResult;

    fn setup(board: Board, p1: Tile, p2: Tile) -> (RulesConfig, MatchState) {
        let config = RulesConfig::standard()
            .with_board(board)
            .with_start(PlayerId::P1, p1)
            .with_start(PlayerId::P2, p2);
        let state = MatchState::new(&config, [AbilityId::Force]);
        (config, state)
    }

    #[test]
    fn test_free_push() {
        let (config, mut state) = setup(Board::open(10, 10), Tile::new(2, 2), Tile::new(3, 2));

        let outcome = knockback(&mut state, &config, PlayerId::P2, Tile::new(2, 2), 2, 1);

        assert_eq!(outcome, PushOutcome { moved: 2, collided: false, ringed_out: false });
        assert_eq!(state.unit(PlayerId::P2).position, Tile::new(5, 2));
        assert_eq!(state.log.last(), Some("Pushed to (5,2)"));
    }

    #[test]
    fn test_ring_out() {
        let board = Board::open(10, 10).with_ring_out(true);
        let (config, mut state) = setup(board, Tile::new(8, 5), Tile::new(9, 5));

        let outcome = knockback(&mut state, &config, PlayerId::P2, Tile::new(8, 5), 1, 1);

        assert!(outcome.ringed_out);
        assert_eq!(state.unit(PlayerId::P2).hp, 0);
        assert_eq!(state.result(), Some(MatchResult::Winner(PlayerId::P1)));
        assert_eq!(state.log.last(), Some("Ring out!"));
    }

    #[test]
    fn test_edge_without_ring_out_collides() {
        let (config, mut state) = setup(Board::open(10, 10), Tile::new(8, 5), Tile::new(9, 5));

        let outcome = knockback(&mut state, &config, PlayerId::P2, Tile::new(8, 5), 2, 1);

        assert!(outcome.collided);
        assert_eq!(outcome.moved, 0);
        assert_eq!(state.unit(PlayerId::P2).hp, 8);
        assert_eq!(state.unit(PlayerId::P2).position, Tile::new(9, 5));
    }

    #[test]
    fn test_obstacle_collision_counts_remaining_steps() {
        let board = Board::open(10, 10).with_obstacles([Tile::new(5, 2)]);
        let (config, mut state) = setup(board, Tile::new(2, 2), Tile::new(3, 2));

        let outcome = knockback(&mut state, &config, PlayerId::P2, Tile::new(2, 2), 3, 1);

        assert_eq!(outcome.moved, 1);
        assert!(outcome.collided);
        assert_eq!(state.unit(PlayerId::P2).position, Tile::new(4, 2));
        assert_eq!(state.unit(PlayerId::P2).hp, 8);
        assert!(state.log.contains("Push blocked"));
    }

    #[test]
    fn test_unit_collision_damages_both() {
        let (config, mut state) = setup(Board::open(10, 10), Tile::new(4, 2), Tile::new(3, 2));

        // P2 pushed east from (2,2) runs into P1 at (4,2).
        let outcome = knockback(&mut state, &config, PlayerId::P2, Tile::new(2, 2), 1, 1);

        assert!(outcome.collided);
        assert_eq!(state.unit(PlayerId::P2).hp, 9);
        assert_eq!(state.unit(PlayerId::P1).hp, 9);

        let config = config.with_unit_collision_damage(false);
        let mut state = MatchState::new(&config, [AbilityId::Force]);
        knockback(&mut state, &config, PlayerId::P2, Tile::new(2, 2), 1, 1);
        assert_eq!(state.unit(PlayerId::P2).hp, 9);
        assert_eq!(state.unit(PlayerId::P1).hp, 10);
    }

    #[test]
    fn test_zero_collision_damage_still_blocks() {
        let board = Board::open(10, 10).with_obstacles([Tile::new(4, 2)]);
        let (config, mut state) = setup(board, Tile::new(2, 2), Tile::new(3, 2));

        let outcome = knockback(&mut state, &config, PlayerId::P2, Tile::new(2, 2), 1, 0);

        assert!(outcome.collided);
        assert_eq!(state.unit(PlayerId::P2).hp, 10);
        assert_eq!(state.log.last(), Some("Push blocked"));
    }
}
