//! Area-of-effect tile patterns.
//!
//! Generators return raw tiles, possibly off the board; callers filter
//! with `Board::in_bounds`. The exception is `line`, which is a travelling
//! projectile and stops at the first obstacle or board edge.

use smallvec::SmallVec;

use super::{Board, Direction};
use crate::core::Tile;

/// Tile list sized for the common patterns without heap allocation.
pub type Tiles = SmallVec<[Tile; 16]>;

/// Just the center.
#[must_use]
pub fn point(center: Tile) -> Tiles {
    SmallVec::from_slice(&[center])
}

/// Center plus four arms of `radius` tiles.
#[must_use]
pub fn cross(center: Tile, radius: i32) -> Tiles {
    let mut tiles = point(center);
    for r in 1..=radius {
        tiles.push(center.offset(0, -r));
        tiles.push(center.offset(r, 0));
        tiles.push(center.offset(0, r));
        tiles.push(center.offset(-r, 0));
    }
    tiles
}

/// Square of side `2 * half + 1` around `center`.
#[must_use]
pub fn block(center: Tile, half: i32) -> Tiles {
    (-half..=half)
        .flat_map(|dy| (-half..=half).map(move |dx| center.offset(dx, dy)))
        .collect()
}

#[must_use]
pub fn block3x3(center: Tile) -> Tiles {
    block(center, 1)
}

#[must_use]
pub fn block5x5(center: Tile) -> Tiles {
    block(center, 2)
}

/// Up to `max_range` tiles from `origin` (exclusive) along `direction`,
/// stopping before the first obstacle or the board edge.
#[must_use]
pub fn line(board: &Board, origin: Tile, direction: Direction, max_range: i32) -> Tiles {
    (1..=max_range)
        .map(|d| direction.step(origin, d))
        .take_while(|&tile| board.is_open(tile))
        .collect()
}

/// Widening wedge in front of `origin`.
///
/// Row `d` (1-based distance along `direction`) spans `d - 1` tiles either
/// side of the aim line, so the rows are 1, 3, 5, ... tiles wide.
#[must_use]
pub fn cone(origin: Tile, direction: Direction, range: i32) -> Tiles {
    let side = direction.perpendicular();
    let mut tiles = Tiles::new();
    for d in 1..=range {
        let spine = direction.step(origin, d);
        for w in -(d - 1)..=(d - 1) {
            tiles.push(side.step(spine, w));
        }
    }
    tiles
}
