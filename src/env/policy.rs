//! Action-choosing collaborators.
//!
//! Environments use a policy whenever they must move on someone's behalf:
//! the forced opening move played for the first player when the agent is
//! assigned the second side, and `TurnController::suggest_action`.
//!
//! - `UniformPolicy`: uniform over the legal set
//! - `FirstLegalPolicy`: deterministic, lowest legal id

use crate::core::{ActionId, GameRng};

use super::game::{Game, Position};
use super::state::GameState;

/// Policy choosing one action out of a legal set.
pub trait Policy<G: Game>: Send + Sync {
    /// Choose an action for the player to act in `state`.
    ///
    /// Returns `None` if no legal actions exist.
    fn choose_action(
        &self,
        game: &G,
        state: &GameState<Position<G>>,
        legal: &[ActionId],
        rng: &mut GameRng,
    ) -> Option<ActionId>;
}

/// Uniform random policy.
///
/// Selects uniformly from legal actions.
#[derive(Clone, Debug, Default)]
pub struct UniformPolicy;

impl<G: Game> Policy<G> for UniformPolicy {
    fn choose_action(
        &self,
        _game: &G,
        _state: &GameState<Position<G>>,
        legal: &[ActionId],
        rng: &mut GameRng,
    ) -> Option<ActionId> {
        rng.choose(legal).copied()
    }
}

/// Deterministic policy: the smallest legal id.
#[derive(Clone, Debug, Default)]
pub struct FirstLegalPolicy;

impl<G: Game> Policy<G> for FirstLegalPolicy {
    fn choose_action(
        &self,
        _game: &G,
        _state: &GameState<Position<G>>,
        legal: &[ActionId],
        _rng: &mut GameRng,
    ) -> Option<ActionId> {
        legal.iter().min().copied()
    }
}
