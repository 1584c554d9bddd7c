//! Environment construction configuration.
//!
//! Every environment is built from an `EnvConfig`:
//! - `initial_board`: board layout loaded at each reset (`None` = the game's
//!   standard starting position)
//! - `player`: which side the agent plays; choosing the second side makes the
//!   environment play one forced opening move for the first side at reset
//! - `verbose`: render every move through `tracing` at info level
//! - `seed`: seed for the opening policy stream
//! - `allow_resignation`: expose the resign action in the legal set
//!
//! Configs deserialize with defaults for missing fields, so a JSON file only
//! needs to name what it changes.

use serde::{Deserialize, Serialize};

use super::error::{EnvError, Result};
use super::observation::Grid;
use super::player::PlayerId;

/// Number of sides in every shipped game.
pub const PLAYER_COUNT: usize = 2;

/// Complete environment configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// Board loaded at reset. Shape and ids are validated by the game.
    pub initial_board: Option<Grid>,

    /// Side assigned to the agent.
    pub player: PlayerId,

    /// Render each move at info level.
    pub verbose: bool,

    /// Seed for policy randomness.
    pub seed: u64,

    /// Whether the resign action is part of the legal set.
    pub allow_resignation: bool,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            initial_board: None,
            player: PlayerId::FIRST,
            verbose: false,
            seed: 42,
            allow_resignation: false,
        }
    }
}

impl EnvConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start every episode from the given board.
    #[must_use]
    pub fn with_initial_board(mut self, board: Grid) -> Self {
        self.initial_board = Some(board);
        self
    }

    /// Assign the agent to a side.
    #[must_use]
    pub fn with_player(mut self, player: PlayerId) -> Self {
        self.player = player;
        self
    }

    /// Enable move rendering at info level.
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Set the policy seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Make the resign action legal.
    #[must_use]
    pub fn with_resignation(mut self) -> Self {
        self.allow_resignation = true;
        self
    }

    /// Reject settings no environment can honor.
    ///
    /// Board contents are checked later by the game itself.
    pub fn validate(&self) -> Result<()> {
        if self.player.index() >= PLAYER_COUNT {
            return Err(EnvError::Config(format!(
                "player index {} outside 0..{PLAYER_COUNT}",
                self.player.index()
            )));
        }
        Ok(())
    }
}
