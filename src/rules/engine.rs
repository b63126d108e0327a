//! The transition engine.
//!
//! `DuelEngine` validates an action against a match state and, if it is
//! legal, returns the successor state. The input state is never touched:
//! the engine works on an O(1) persistent clone and drops it on rejection.

use super::cast::{commit, resolve, validate_cast};
use super::movement::{validate_move, walk};
use super::Rejection;
use crate::abilities::{AbilityCatalog, Targeting};
use crate::core::{Action, ConfigError, GameRng, GameRngState, MatchResult, MatchState, RandomSource, RulesConfig};
use crate::turn::end_turn;

/// Rules seam used by the session layer.
///
/// ## Implementation Notes
///
/// - `apply` must leave the input state untouched, accepted or not
/// - `apply` must refuse every action once `result` is `Some`
/// - `legal_actions` lists actions that would pass validation for the
///   current player; randomness never makes a listed action fail
pub trait Rules {
    fn config(&self) -> &RulesConfig;

    /// The opening position of a match.
    fn initial_state(&self) -> MatchState;

    /// Validate and apply one action.
    fn apply(&mut self, state: &MatchState, action: &Action) -> Result<MatchState, Rejection>;

    /// Every action the current player could submit.
    fn legal_actions(&self, state: &MatchState) -> Vec<Action>;

    /// The match result, if decided.
    fn result(&self, state: &MatchState) -> Option<MatchResult> {
        state.result()
    }

    // === Convenience Methods ===

    /// Apply an action, handing back an unchanged copy of `state` if it is
    /// refused.
    fn apply_or_keep(&mut self, state: &MatchState, action: &Action) -> MatchState {
        self.apply(state, action).unwrap_or_else(|_| state.clone())
    }
}

/// Opening position of a standard match.
#[must_use]
pub fn create_initial_state() -> MatchState {
    MatchState::new(&RulesConfig::standard(), AbilityCatalog::standard().ids())
}

/// Rules engine for one match.
///
/// Owns its random source, so one engine serialises the actions of one
/// match. Matches never share an engine.
///
/// ## Example
///
/// ```
/// use grid_duel::core::{Action, PlayerId, Tile};
/// use grid_duel::rules::{DuelEngine, Rules};
///
/// let mut engine = DuelEngine::standard(7);
/// let state = engine.initial_state();
///
/// let moved = engine
///     .apply(&state, &Action::Move { player: PlayerId::P1, to: Tile::new(3, 5) })
///     .unwrap();
/// assert_eq!(moved.turn.movement_points, 2);
///
/// let refused = engine.apply(&moved, &Action::EndTurn { player: PlayerId::P2 });
/// assert!(refused.is_err());
/// ```
#[derive(Clone, Debug)]
pub struct DuelEngine<R: RandomSource = GameRng> {
    config: RulesConfig,
    catalog: AbilityCatalog,
    rng: R,
}

impl DuelEngine<GameRng> {
    /// Standard board and ability set with a seeded `GameRng`.
    #[must_use]
    pub fn standard(seed: u64) -> Self {
        Self {
            config: RulesConfig::standard(),
            catalog: AbilityCatalog::standard(),
            rng: GameRng::new(seed),
        }
    }

    /// Checkpoint of the random stream, to be stored beside the match
    /// snapshot. Restore with `GameRng::from_state` and `DuelEngine::new`.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl<R: RandomSource> DuelEngine<R> {
    /// Engine for a custom configuration.
    pub fn new(config: RulesConfig, catalog: AbilityCatalog, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, catalog, rng })
    }

    #[must_use]
    pub fn catalog(&self) -> &AbilityCatalog {
        &self.catalog
    }

    fn transition(&mut self, state: &MatchState, action: &Action) -> Result<MatchState, Rejection> {
        if state.is_concluded() {
            return Err(Rejection::MatchConcluded);
        }

        let player = action.player();
        if player != state.turn.current_player {
            return Err(Rejection::NotYourTurn(player));
        }

        let mut next = state.clone();

        match *action {
            Action::Move { to, .. } => {
                let cost = validate_move(&next, &self.config, player, to)?;
                walk(&mut next, player, to, cost);
            }
            Action::Cast { ability, target, .. } => {
                let (def, target) = validate_cast(&next, &self.config, &self.catalog, player, ability, target)?;
                commit(&mut next, def, player);
                resolve(&mut next, &self.config, &mut self.rng, def, player, target);
            }
            Action::EndTurn { .. } => {
                next.push_log(format!("{player} ends turn"));
                end_turn(&mut next, &self.config, &self.catalog, &mut self.rng);
            }
        }

        Ok(next)
    }
}

impl<R: RandomSource> Rules for DuelEngine<R> {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn initial_state(&self) -> MatchState {
        MatchState::new(&self.config, self.catalog.ids())
    }

    fn apply(&mut self, state: &MatchState, action: &Action) -> Result<MatchState, Rejection> {
        let outcome = self.transition(state, action);
        match &outcome {
            Ok(_) => log::trace!("accepted {} by {}", action.verb(), action.player()),
            Err(reason) => log::debug!("rejected {} by {}: {reason}", action.verb(), action.player()),
        }
        outcome
    }

    fn legal_actions(&self, state: &MatchState) -> Vec<Action> {
        if state.is_concluded() {
            return Vec::new();
        }

        let player = state.turn.current_player;
        let board = &self.config.board;
        let mut actions = Vec::new();

        for to in board.tiles() {
            if validate_move(state, &self.config, player, to).is_ok() {
                actions.push(Action::Move { player, to });
            }
        }

        for ability in self.catalog.ids() {
            let self_only = self.catalog.get(ability).is_some_and(|def| def.targeting == Targeting::SelfOnly);
            let targets: Vec<_> = if self_only {
                vec![state.unit(player).position]
            } else {
                board.tiles().collect()
            };

            for target in targets {
                if validate_cast(state, &self.config, &self.catalog, player, ability, target).is_ok() {
                    actions.push(Action::Cast { player, ability, target });
                }
            }
        }

        actions.push(Action::EndTurn { player });
        actions
    }
}
