//! Race configuration with fail-fast validation.
use serde::{Deserialize, Serialize};

use crate::constants::{LENGTH, NB_PLAYERS, WALK_MAX};

/// Tuning for one race: track geometry, movement model, and field size.
///
/// Defaults reproduce the reference race (`WALK_MAX = 3`, `LENGTH = 15`,
/// `NB_PLAYERS = 4`). Deserializing from a partial JSON document fills
/// missing fields with those defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceConfig {
    /// Maximum advance per turn; each of `1..=walk_max` has weight `1/walk_max`.
    #[serde(default = "default_walk_max")]
    pub walk_max: usize,
    /// Number of interior positions before the absorbing end of the track.
    #[serde(default = "default_length")]
    pub length: usize,
    /// Total number of independent larvae in the race.
    #[serde(default = "default_players")]
    pub players: u32,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            walk_max: WALK_MAX,
            length: LENGTH,
            players: NB_PLAYERS,
        }
    }
}

impl RaceConfig {
    /// Validate the configuration before any computation starts.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for degenerate values: a zero-length track,
    /// an empty field, or a larva that cannot move.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if self.players == 0 {
            return Err(ConfigError::NoPlayers);
        }
        if self.walk_max == 0 {
            return Err(ConfigError::ZeroWalk);
        }
        Ok(())
    }
}

/// Rejected configuration values, surfaced before any computation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("track length must be at least 1")]
    ZeroLength,
    #[error("a race needs at least one larva")]
    NoPlayers,
    #[error("walk_max must be at least 1, otherwise no larva ever moves")]
    ZeroWalk,
}

fn default_walk_max() -> usize {
    WALK_MAX
}

fn default_length() -> usize {
    LENGTH
}

fn default_players() -> u32 {
    NB_PLAYERS
}
