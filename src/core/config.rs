//! Rules configuration.
//!
//! A `RulesConfig` fixes everything about a match that does not change
//! while it is played: the board, where the combatants start, who moves
//! first, and the per-turn resource maxima.
//!
//! `RulesConfig::standard()` is the 10x10 ring-out arena. Custom layouts
//! are built with the `with_*` methods and checked with `validate()`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{PlayerId, PlayerMap, Tile};
use crate::board::Board;

/// Which neighbouring tiles a single movement step can reach.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Neighborhood {
    /// Orthogonal steps only, each costing 1.
    Four,
    /// Orthogonal steps cost 1, diagonal steps cost 2.
    #[default]
    Eight,
}

/// A configuration that cannot host a match.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must have at least one column and one row, got {cols}x{rows}")]
    EmptyBoard { cols: i32, rows: i32 },

    #[error("{player} starts off the board at {tile}")]
    StartOutOfBounds { player: PlayerId, tile: Tile },

    #[error("{player} starts on an obstacle at {tile}")]
    StartOnObstacle { player: PlayerId, tile: Tile },

    #[error("both players start on {0}")]
    SharedStart(Tile),

    #[error("{0} must be greater than zero")]
    ZeroMaximum(&'static str),
}

/// Complete rules configuration for one match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Board bounds, obstacles and edge rule.
    pub board: Board,

    /// Starting tile for each player.
    pub starts: PlayerMap<Tile>,

    /// Player who acts first; the turn number advances when play returns here.
    pub first_player: PlayerId,

    /// Starting (and maximum) hit points.
    pub max_hp: u32,

    /// Action points granted at the start of each turn.
    pub max_action_points: u32,

    /// Movement points granted at the start of each turn.
    pub max_movement_points: u32,

    /// Step pattern for pathfinding.
    pub neighborhood: Neighborhood,

    /// Whether a unit knocked into another unit damages both.
    pub unit_collision_damages_both: bool,
}

impl RulesConfig {
    /// The standard arena: 10x10, ring-out edges, five obstacles.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            board: Board::standard(),
            starts: PlayerMap::new(|p| match p {
                PlayerId::P1 => Tile::new(2, 5),
                PlayerId::P2 => Tile::new(3, 1),
            }),
            first_player: PlayerId::P1,
            max_hp: 10,
            max_action_points: 3,
            max_movement_points: 3,
            neighborhood: Neighborhood::Eight,
            unit_collision_damages_both: true,
        }
    }

    /// Replace the board.
    #[must_use]
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Set a player's starting tile.
    #[must_use]
    pub fn with_start(mut self, player: PlayerId, tile: Tile) -> Self {
        self.starts[player] = tile;
        self
    }

    /// Set starting hit points.
    #[must_use]
    pub fn with_max_hp(mut self, hp: u32) -> Self {
        self.max_hp = hp;
        self
    }

    /// Set per-turn action and movement points.
    #[must_use]
    pub fn with_resources(mut self, action_points: u32, movement_points: u32) -> Self {
        self.max_action_points = action_points;
        self.max_movement_points = movement_points;
        self
    }

    /// Set the step pattern.
    #[must_use]
    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    /// Set whether unit-to-unit collisions damage both parties.
    #[must_use]
    pub fn with_unit_collision_damage(mut self, both: bool) -> Self {
        self.unit_collision_damages_both = both;
        self
    }

    /// Check that a match can start under this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.cols <= 0 || self.board.rows <= 0 {
            return Err(ConfigError::EmptyBoard {
                cols: self.board.cols,
                rows: self.board.rows,
            });
        }

        for (player, &tile) in self.starts.iter() {
            if !self.board.in_bounds(tile) {
                return Err(ConfigError::StartOutOfBounds { player, tile });
            }
            if self.board.is_obstacle(tile) {
                return Err(ConfigError::StartOnObstacle { player, tile });
            }
        }

        if self.starts[PlayerId::P1] == self.starts[PlayerId::P2] {
            return Err(ConfigError::SharedStart(self.starts[PlayerId::P1]));
        }

        let maxima = [
            ("max_hp", self.max_hp),
            ("max_action_points", self.max_action_points),
            ("max_movement_points", self.max_movement_points),
        ];
        if let Some((name, _)) = maxima.into_iter().find(|&(_, value)| value == 0) {
            return Err(ConfigError::ZeroMaximum(name));
        }

        Ok(())
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::standard()
    }
}
