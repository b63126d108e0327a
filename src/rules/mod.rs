//! Action validation and state transitions.
//!
//! `DuelEngine` implements `Rules`:
//! - Refuses everything once the match is decided
//! - Refuses actions from the player who is not on turn
//! - Validates moves and casts in full before paying for them
//! - Returns the successor state, or a `Rejection` naming the reason
//!
//! The input state is never modified. `Rules::apply_or_keep` folds a
//! rejection back into "the same state", for callers that compare states
//! instead of matching on the result.

mod cast;
mod engine;
mod movement;
mod rejection;

pub use cast::validate_cast;
pub use engine::{create_initial_state, DuelEngine, Rules};
pub use movement::validate_move;
pub use rejection::Rejection;
