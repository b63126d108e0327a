//! Weighted shortest-path search for movement.
//!
//! Diagonal steps cost more than orthogonal ones on the eight-neighbour
//! grid, so the frontier must be cost ordered; plain breadth-first order
//! can settle a tile through a more expensive diagonal before a cheaper
//! orthogonal route is seen.

use pathfinding::prelude::dijkstra;
use smallvec::SmallVec;

use super::Board;
use crate::core::{MatchState, Neighborhood, Tile};

const ORTHOGONAL: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONAL: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Passable neighbours of `tile` with their step costs.
///
/// Off-board tiles, obstacles and living units are impassable.
pub fn steps(
    board: &Board,
    state: &MatchState,
    neighborhood: Neighborhood,
    tile: Tile,
) -> SmallVec<[(Tile, u32); 8]> {
    let diagonals: &[(i32, i32)] = match neighborhood {
        Neighborhood::Four => &[],
        Neighborhood::Eight => &DIAGONAL,
    };

    let orthogonal = ORTHOGONAL.iter().map(|&d| (d, 1));
    let diagonal = diagonals.iter().map(|&d| (d, 2));

    orthogonal
        .chain(diagonal)
        .map(|((dx, dy), cost)| (tile.offset(dx, dy), cost))
        .filter(|&(next, _)| board.is_open(next) && state.occupant(next).is_none())
        .collect()
}

/// Minimum movement cost from `from` to `to`, or `None` if unreachable.
///
/// `from` itself may be occupied (it is the mover's own tile); every other
/// tile on the path, `to` included, must be passable.
#[must_use]
pub fn path_distance(
    board: &Board,
    state: &MatchState,
    neighborhood: Neighborhood,
    from: Tile,
    to: Tile,
) -> Option<u32> {
    if from == to {
        return Some(0);
    }

    dijkstra(
        &from,
        |&tile| steps(board, state, neighborhood, tile),
        |&tile| tile == to,
    )
    .map(|(_, cost)| cost)
}
