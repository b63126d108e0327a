//! Board geometry.
//!
//! - `Board`: bounds, obstacles and the ring-out rule
//! - `line_of_sight`: Bresenham raycast against obstacles
//! - `path_distance`: cost-ordered shortest path for movement
//! - `patterns`: area-of-effect tile generators
//!
//! Nothing in here mutates state; all functions are queries over a board
//! and, where units matter, a `MatchState`.

mod geometry;
mod pathing;
pub mod patterns;

pub use geometry::{line_of_sight, raster, Board, Direction};
pub use pathing::{path_distance, steps};
pub use patterns::Tiles;
