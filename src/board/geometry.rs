//! Board bounds, obstacles, directions and line of sight.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::Tile;

/// Static board layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub cols: i32,
    pub rows: i32,

    /// Pushing a unit off the edge knocks it out.
    pub ring_out: bool,

    /// Impassable, sight-blocking tiles.
    pub obstacles: FxHashSet<Tile>,
}

impl Board {
    /// The 10x10 ring-out arena with its five pillars.
    #[must_use]
    pub fn standard() -> Self {
        Self::open(10, 10)
            .with_ring_out(true)
            .with_obstacles([(4, 4), (5, 4), (4, 5), (7, 2), (2, 7)].map(Tile::from))
    }

    /// An obstacle-free board without ring-out.
    #[must_use]
    pub fn open(cols: i32, rows: i32) -> Self {
        Self {
            cols,
            rows,
            ring_out: false,
            obstacles: FxHashSet::default(),
        }
    }

    #[must_use]
    pub fn with_ring_out(mut self, ring_out: bool) -> Self {
        self.ring_out = ring_out;
        self
    }

    #[must_use]
    pub fn with_obstacles(mut self, tiles: impl IntoIterator<Item = Tile>) -> Self {
        self.obstacles.extend(tiles);
        self
    }

    #[must_use]
    pub fn in_bounds(&self, tile: Tile) -> bool {
        tile.x >= 0 && tile.x < self.cols && tile.y >= 0 && tile.y < self.rows
    }

    #[must_use]
    pub fn is_obstacle(&self, tile: Tile) -> bool {
        self.obstacles.contains(&tile)
    }

    /// In bounds and not an obstacle. Units are not considered.
    #[must_use]
    pub fn is_open(&self, tile: Tile) -> bool {
        self.in_bounds(tile) && !self.is_obstacle(tile)
    }

    /// Every tile on the board, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        (0..self.rows).flat_map(move |y| (0..self.cols).map(move |x| Tile::new(x, y)))
    }
}

/// A unit step along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
}

impl Direction {
    pub const EAST: Direction = Direction { dx: 1, dy: 0 };
    pub const WEST: Direction = Direction { dx: -1, dy: 0 };
    pub const NORTH: Direction = Direction { dx: 0, dy: -1 };
    pub const SOUTH: Direction = Direction { dx: 0, dy: 1 };

    /// Axis of greatest displacement from `from` to `to`.
    ///
    /// Ties go to the vertical axis; identical tiles aim east.
    #[must_use]
    pub fn toward(from: Tile, to: Tile) -> Self {
        let dx = to.x - from.x;
        let dy = to.y - from.y;

        if dx.abs() > dy.abs() {
            Direction { dx: dx.signum(), dy: 0 }
        } else if dy != 0 {
            Direction { dx: 0, dy: dy.signum() }
        } else {
            Direction::EAST
        }
    }

    /// Rotated a quarter turn.
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        Direction {
            dx: -self.dy,
            dy: self.dx,
        }
    }

    /// `origin` moved `steps` times in this direction.
    #[must_use]
    pub const fn step(self, origin: Tile, steps: i32) -> Tile {
        origin.offset(self.dx * steps, self.dy * steps)
    }
}

/// Bresenham raster walk from `from` to `to`.
///
/// Every visited tile, both endpoints included, must be free of obstacles.
/// Units never block sight.
///
/// The walk is direction-dependent: on ties it steps both axes in the
/// caster's frame, so `(0,0) -> (2,1)` visits `(1,1)` while the reverse
/// visits `(1,0)`. Sight is judged from the caster's side.
#[must_use]
pub fn line_of_sight(board: &Board, from: Tile, to: Tile) -> bool {
    raster(from, to).all(|tile| !board.is_obstacle(tile))
}

/// Tiles visited by the Bresenham walk, `from` first and `to` last.
pub fn raster(from: Tile, to: Tile) -> impl Iterator<Item = Tile> {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };

    let mut err = dx + dy;
    let mut cursor = Some(from);

    std::iter::from_fn(move || {
        let current = cursor?;
        if current == to {
            cursor = None;
            return Some(current);
        }

        let mut next = current;
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            next.x += sx;
        }
        if e2 <= dx {
            err += dx;
            next.y += sy;
        }
        cursor = Some(next);
        Some(current)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_board() {
        let board = Board::standard();

        assert!(board.in_bounds(Tile::new(0, 0)));
        assert!(board.in_bounds(Tile::new(9, 9)));
        assert!(!board.in_bounds(Tile::new(10, 0)));
        assert!(!board.in_bounds(Tile::new(0, -1)));
        assert!(board.is_obstacle(Tile::new(4, 4)));
        assert!(!board.is_obstacle(Tile::new(3, 3)));
        assert!(!board.is_open(Tile::new(2, 7)));
        assert_eq!(board.tiles().count(), 100);
    }

    #[test]
    fn test_direction_toward() {
        let origin = Tile::new(5, 5);

        assert_eq!(Direction::toward(origin, Tile::new(8, 6)), Direction::EAST);
        assert_eq!(Direction::toward(origin, Tile::new(4, 1)), Direction::NORTH);
        // Tie goes vertical.
        assert_eq!(Direction::toward(origin, Tile::new(7, 7)), Direction::SOUTH);
        assert_eq!(Direction::toward(origin, Tile::new(3, 3)), Direction::NORTH);
        // Same tile aims east.
        assert_eq!(Direction::toward(origin, origin), Direction::EAST);
    }

    #[test]
    fn test_perpendicular() {
        assert_eq!(Direction::EAST.perpendicular(), Direction::SOUTH);
        assert_eq!(Direction::NORTH.perpendicular(), Direction::EAST);
    }

    #[test]
    fn test_raster_endpoints() {
        let tiles: Vec<_> = raster(Tile::new(0, 0), Tile::new(3, 0)).collect();
        assert_eq!(
            tiles,
            vec![Tile::new(0, 0), Tile::new(1, 0), Tile::new(2, 0), Tile::new(3, 0)]
        );

        let single: Vec<_> = raster(Tile::new(2, 2), Tile::new(2, 2)).collect();
        assert_eq!(single, vec![Tile::new(2, 2)]);
    }

    #[test]
    fn test_raster_is_direction_dependent() {
        let forward: Vec<_> = raster(Tile::new(0, 0), Tile::new(2, 1)).collect();
        let backward: Vec<_> = raster(Tile::new(2, 1), Tile::new(0, 0)).collect();

        assert_eq!(forward, vec![Tile::new(0, 0), Tile::new(1, 1), Tile::new(2, 1)]);
        assert_eq!(backward, vec![Tile::new(2, 1), Tile::new(1, 0), Tile::new(0, 0)]);
    }

    #[test]
    fn test_line_of_sight_asymmetry() {
        let board = Board::open(5, 5).with_obstacles([Tile::new(1, 1)]);
        let a = Tile::new(0, 0);
        let b = Tile::new(2, 1);

        assert!(!line_of_sight(&board, a, b));
        assert!(line_of_sight(&board, b, a));
    }

    #[test]
    fn test_line_of_sight_blocked_by_pillar() {
        let board = Board::standard();

        // Straight through (4,4).
        assert!(!line_of_sight(&board, Tile::new(2, 4), Tile::new(6, 4)));
        assert!(line_of_sight(&board, Tile::new(2, 5), Tile::new(3, 1)));
        // Endpoint on an obstacle blocks.
        assert!(!line_of_sight(&board, Tile::new(7, 0), Tile::new(7, 2)));
    }
}
