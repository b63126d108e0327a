//! Match state.
//!
//! ## MatchState
//!
//! The root aggregate handed between the session layer and the engine:
//! - Turn info (active player, turn number, remaining AP/MP)
//! - Both combatants
//! - Pending delayed effects
//! - Winner, once decided
//! - A short player-facing event log
//!
//! Collections use `im` persistent structures, so cloning a state for the
//! engine's working copy is O(1) and shares structure with the original.
//!
//! ## Snapshot shape
//!
//! Serializes as `{turn, units: {P1, P2}, pendingEffects, winner, log}`,
//! with `winner` one of `null`, `"P1"`, `"P2"`, `"DRAW"`.

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::RulesConfig;
use super::player::{PlayerId, PlayerMap};
use super::tile::Tile;
use crate::abilities::AbilityId;
use crate::schedule::PendingEffect;
use crate::status::{StatusEffect, StatusKind};

/// Maximum number of entries kept in the event log.
pub const LOG_CAPACITY: usize = 12;

/// Final result of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ResultRepr", into = "ResultRepr")]
pub enum MatchResult {
    /// One player is standing.
    Winner(PlayerId),
    /// Both players fell.
    Draw,
}

impl MatchResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, MatchResult::Winner(p) if *p == player)
    }
}

#[derive(Clone, Copy, Serialize, Deserialize)]
enum ResultRepr {
    P1,
    P2,
    #[serde(rename = "DRAW")]
    Draw,
}

impl From<ResultRepr> for MatchResult {
    fn from(repr: ResultRepr) -> Self {
        match repr {
            ResultRepr::P1 => MatchResult::Winner(PlayerId::P1),
            ResultRepr::P2 => MatchResult::Winner(PlayerId::P2),
            ResultRepr::Draw => MatchResult::Draw,
        }
    }
}

impl From<MatchResult> for ResultRepr {
    fn from(result: MatchResult) -> Self {
        match result {
            MatchResult::Winner(PlayerId::P1) => ResultRepr::P1,
            MatchResult::Winner(PlayerId::P2) => ResultRepr::P2,
            MatchResult::Draw => ResultRepr::Draw,
        }
    }
}

/// Bounded, oldest-first event log.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventLog {
    entries: Vector<String>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, evicting the oldest beyond `LOG_CAPACITY`.
    pub fn push(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        log::trace!("event: {entry}");
        self.entries.push_back(entry);
        while self.entries.len() > LOG_CAPACITY {
            self.entries.pop_front();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    /// Iterate oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Whether any entry contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|e| e.contains(needle))
    }
}

/// Whose turn it is and what they have left to spend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnInfo {
    pub current_player: PlayerId,

    /// Full rounds played, starting at 1.
    pub number: u32,

    pub action_points: u32,

    pub movement_points: u32,
}

/// One of the two duelists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combatant {
    pub id: PlayerId,

    pub position: Tile,

    pub hp: u32,

    /// Active timed conditions, at most one per kind.
    pub statuses: OrdMap<StatusKind, StatusEffect>,

    /// Turns until each ability is usable again. Missing means ready.
    pub cooldowns: OrdMap<AbilityId, u32>,

    /// Casts made during the current turn.
    pub casts_this_turn: OrdMap<AbilityId, u32>,

    /// Escalation stage for abilities with staged damage.
    pub stages: OrdMap<AbilityId, u32>,
}

impl Combatant {
    #[must_use]
    pub fn new(id: PlayerId, position: Tile, hp: u32) -> Self {
        Self {
            id,
            position,
            hp,
            statuses: OrdMap::new(),
            cooldowns: OrdMap::new(),
            casts_this_turn: OrdMap::new(),
            stages: OrdMap::new(),
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Remaining cooldown for an ability.
    #[must_use]
    pub fn cooldown(&self, ability: AbilityId) -> u32 {
        self.cooldowns.get(&ability).copied().unwrap_or(0)
    }

    /// Casts of an ability made this turn.
    #[must_use]
    pub fn casts(&self, ability: AbilityId) -> u32 {
        self.casts_this_turn.get(&ability).copied().unwrap_or(0)
    }

    /// Current escalation stage of an ability.
    #[must_use]
    pub fn stage(&self, ability: AbilityId) -> u32 {
        self.stages.get(&ability).copied().unwrap_or(0)
    }

    /// Lose hit points, never going below zero.
    pub fn lose_hp(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }
}

/// Failure to encode or decode a binary snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot codec failed: {0}")]
    Codec(#[from] bincode::Error),
}

/// Complete state of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchState {
    pub turn: TurnInfo,

    pub units: PlayerMap<Combatant>,

    /// Delayed effects in scheduling order.
    pub pending_effects: Vector<PendingEffect>,

    /// `None` while the match is in progress.
    pub winner: Option<MatchResult>,

    pub log: EventLog,
}

impl MatchState {
    /// Fresh match: both combatants at their starts with full hp, every
    /// listed ability off cooldown, first player active with full resources.
    #[must_use]
    pub fn new(config: &RulesConfig, abilities: impl IntoIterator<Item = AbilityId>) -> Self {
        let cooldowns: OrdMap<AbilityId, u32> = abilities.into_iter().map(|id| (id, 0u32)).collect();

        let units = PlayerMap::new(|player| {
            let mut unit = Combatant::new(player, config.starts[player], config.max_hp);
            unit.cooldowns = cooldowns.clone();
            unit
        });

        Self {
            turn: TurnInfo {
                current_player: config.first_player,
                number: 1,
                action_points: config.max_action_points,
                movement_points: config.max_movement_points,
            },
            units,
            pending_effects: Vector::new(),
            winner: None,
            log: EventLog::new(),
        }
    }

    #[must_use]
    pub fn unit(&self, player: PlayerId) -> &Combatant {
        &self.units[player]
    }

    pub fn unit_mut(&mut self, player: PlayerId) -> &mut Combatant {
        &mut self.units[player]
    }

    /// The combatant whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Combatant {
        &self.units[self.turn.current_player]
    }

    /// The combatant facing `player`.
    #[must_use]
    pub fn opponent_of(&self, player: PlayerId) -> &Combatant {
        &self.units[player.other()]
    }

    /// The living combatant standing on `tile`, if any.
    #[must_use]
    pub fn occupant(&self, tile: Tile) -> Option<PlayerId> {
        self.units
            .iter()
            .find(|(_, unit)| unit.is_alive() && unit.position == tile)
            .map(|(id, _)| id)
    }

    /// The match result, if decided.
    #[must_use]
    pub fn result(&self) -> Option<MatchResult> {
        self.winner
    }

    #[must_use]
    pub fn is_concluded(&self) -> bool {
        self.winner.is_some()
    }

    /// Append to the event log.
    pub fn push_log(&mut self, entry: impl Into<String>) {
        self.log.push(entry);
    }

    /// Encode for the session layer's match store.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
