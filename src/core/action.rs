//! Player actions.
//!
//! An action is one of three verbs, each carrying the identity of the
//! player who submitted it:
//! - `Move`: walk to a tile, paying movement points
//! - `Cast`: use an ability on a target tile, paying action points
//! - `EndTurn`: pass play to the opponent
//!
//! The serialized shape is the wire format the session layer relays:
//!
//! ```
//! use grid_duel::core::{Action, PlayerId, Tile};
//!
//! let action = Action::Move { player: PlayerId::P1, to: Tile::new(3, 5) };
//! let json = serde_json::to_string(&action).unwrap();
//! assert_eq!(json, r#"{"type":"MOVE","playerId":"P1","to":{"x":3,"y":5}}"#);
//! ```

use serde::{Deserialize, Serialize};

use super::{PlayerId, Tile};
use crate::abilities::AbilityId;

/// A proposed state transition.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Walk to `to` along the cheapest free path.
    Move {
        #[serde(rename = "playerId")]
        player: PlayerId,
        to: Tile,
    },

    /// Use `ability` aimed at `target`.
    Cast {
        #[serde(rename = "playerId")]
        player: PlayerId,
        #[serde(rename = "spellId")]
        ability: AbilityId,
        target: Tile,
    },

    /// Finish the turn.
    EndTurn {
        #[serde(rename = "playerId")]
        player: PlayerId,
    },
}

impl Action {
    /// The player who submitted this action.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match self {
            Action::Move { player, .. } | Action::Cast { player, .. } | Action::EndTurn { player } => *player,
        }
    }

    /// Short verb for diagnostics.
    #[must_use]
    pub fn verb(&self) -> &'static str {
        match self {
            Action::Move { .. } => "move",
            Action::Cast { .. } => "cast",
            Action::EndTurn { .. } => "end turn",
        }
    }
}
