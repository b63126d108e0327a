//! Grid coordinates.
//!
//! Every position on the board is a `Tile`. Coordinates are signed so that
//! client-supplied targets off the board can be represented and rejected,
//! and so pattern generators can produce off-board tiles for callers to
//! filter.
//!
//! ```
//! use grid_duel::core::Tile;
//!
//! let a = Tile::new(2, 5);
//! let b = Tile::new(4, 4);
//!
//! assert_eq!(a.manhattan(b), 3);
//! assert_eq!(a.chebyshev(b), 2);
//! assert_eq!(a.to_string(), "(2,5)");
//! ```

use serde::{Deserialize, Serialize};

/// A board coordinate. `x` grows to the right, `y` grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
}

impl Tile {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Sum of axis distances.
    #[must_use]
    pub fn manhattan(self, other: Tile) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Largest axis distance.
    #[must_use]
    pub fn chebyshev(self, other: Tile) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// This tile shifted by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Tile {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distances_are_symmetric() {
        let a = Tile::new(-1, 3);
        let b = Tile::new(4, 0);

        assert_eq!(a.manhattan(b), 8);
        assert_eq!(b.manhattan(a), 8);
        assert_eq!(a.chebyshev(b), 5);
        assert_eq!(b.chebyshev(a), 5);
    }

    #[test]
    fn test_offset() {
        assert_eq!(Tile::new(1, 1).offset(-1, 2), Tile::new(0, 3));
    }

    #[test]
    fn test_serialization_shape() {
        let json = serde_json::to_string(&Tile::new(3, 7)).unwrap();
        assert_eq!(json, r#"{"x":3,"y":7}"#);
    }
}
