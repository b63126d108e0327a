//! Reasons an action is refused.

use thiserror::Error;

use crate::abilities::AbilityId;
use crate::core::{PlayerId, Tile};

/// Why the engine refused an action.
///
/// A rejected action never changes the match: the caller keeps the state
/// it passed in.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("the match is over")]
    MatchConcluded,

    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("{0} is not available in this match")]
    UnknownAbility(AbilityId),

    #[error("{ability} is on cooldown for {turns} more turn(s)")]
    OnCooldown { ability: AbilityId, turns: u32 },

    #[error("{ability} can only be cast {limit} time(s) per turn")]
    CastLimit { ability: AbilityId, limit: u32 },

    #[error("needs {needed} action point(s), {available} left")]
    InsufficientActionPoints { needed: u32, available: u32 },

    #[error("needs {needed} movement point(s), {available} left")]
    InsufficientMovementPoints { needed: u32, available: u32 },

    #[error("{0} is off the board")]
    OutOfBounds(Tile),

    #[error("{ability} cannot reach distance {distance}")]
    OutOfRange { ability: AbilityId, distance: u32 },

    #[error("no line of sight to {0}")]
    NoLineOfSight(Tile),

    #[error("{ability} cannot target {target}")]
    InvalidTarget { ability: AbilityId, target: Tile },

    #[error("{0} is occupied")]
    Occupied(Tile),

    #[error("no free path to {0}")]
    Unreachable(Tile),

    #[error("movement is impaired")]
    MovementImpaired,

    #[error("stunned")]
    Stunned,
}
