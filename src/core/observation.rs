//! What an environment hands back to the agent.
//!
//! ## Observation
//!
//! A pair of board views, one per player. Both players currently receive the
//! same full-information view.
//!
//! ## Step
//!
//! The result of one `step` call: observation, reward, termination flag and
//! diagnostic info.
//!
//! ## Rewards
//!
//! Rewards are expressed from the point of view of the player who acted:
//! `WIN_REWARD`, `LOSS_REWARD` and `DRAW_REWARD` on terminal steps, zero on
//! ordinary steps, `INVALID_ACTION_REWARD` when the action was not legal.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Row-major grid of signed cell ids. The sign encodes the owning player.
pub type Grid = Vec<Vec<i8>>;

pub const WIN_REWARD: f32 = 1.0;
pub const LOSS_REWARD: f32 = 0.0;
pub const DRAW_REWARD: f32 = 0.5;
pub const INVALID_ACTION_REWARD: f32 = -1.0;

/// Per-player board views.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub views: [Grid; 2],
}

impl Observation {
    /// Both players see the whole board.
    #[must_use]
    pub fn full_information(grid: Grid) -> Self {
        Self {
            views: [grid.clone(), grid],
        }
    }

    /// The view of a given player.
    #[must_use]
    pub fn view(&self, player: PlayerId) -> &Grid {
        &self.views[player.index().min(1)]
    }
}

/// Diagnostic information attached to every step.
///
/// Never consulted by the controller itself.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StepInfo {
    /// Completed rounds.
    pub move_count: u32,

    /// Player to act next.
    pub current_player: PlayerId,

    /// Legal moves of the player to act, in the game's notation.
    pub possible_moves: Vec<String>,

    /// Game-specific rule flags (castling rights, check flags, ...).
    pub flags: FxHashMap<String, bool>,
}

impl StepInfo {
    /// Look up a flag, defaulting to false for unknown names.
    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }
}

/// Result of one environment step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub observation: Observation,
    pub reward: f32,
    pub done: bool,
    pub info: StepInfo,
}
