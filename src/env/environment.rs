//! Object-safe environment interface.
//!
//! `TurnController<G>` is generic over its game; registries and language
//! bindings need to hold environments of different games behind one type.
//! `Environment` erases the game parameter and keeps only the operations a
//! training loop drives.

use crate::core::{ActionId, Observation, Result, Step, StepInfo};

use super::controller::TurnController;
use super::game::Game;
use super::render::RenderMode;

/// Type-erased environment.
pub trait Environment: Send {
    /// Registry-style name of the game.
    fn name(&self) -> &'static str;

    /// Number of action ids.
    fn action_space(&self) -> usize;

    fn reset(&mut self) -> Result<Observation>;

    fn step(&mut self, action: ActionId) -> Result<Step>;

    /// Legal actions of the player to act.
    fn legal_actions(&self) -> Vec<ActionId>;

    /// Index of the player to act.
    fn to_play(&self) -> usize;

    fn is_done(&self) -> bool;

    fn info(&self) -> Result<StepInfo>;

    fn render(&self, mode: RenderMode) -> Result<Option<String>>;

    /// Serialized current state.
    fn snapshot(&self) -> Result<Vec<u8>>;

    fn restore(&mut self, bytes: &[u8]) -> Result<Observation>;
}

impl<G: Game> Environment for TurnController<G> {
    fn name(&self) -> &'static str {
        self.game().name()
    }

    fn action_space(&self) -> usize {
        TurnController::action_space(self)
    }

    fn reset(&mut self) -> Result<Observation> {
        TurnController::reset(self)
    }

    fn step(&mut self, action: ActionId) -> Result<Step> {
        TurnController::step(self, action)
    }

    fn legal_actions(&self) -> Vec<ActionId> {
        TurnController::legal_actions(self)
    }

    fn to_play(&self) -> usize {
        TurnController::to_play(self)
    }

    fn is_done(&self) -> bool {
        TurnController::is_done(self)
    }

    fn info(&self) -> Result<StepInfo> {
        TurnController::info(self)
    }

    fn render(&self, mode: RenderMode) -> Result<Option<String>> {
        TurnController::render(self, mode)
    }

    fn snapshot(&self) -> Result<Vec<u8>> {
        TurnController::snapshot(self)
    }

    fn restore(&mut self, bytes: &[u8]) -> Result<Observation> {
        TurnController::restore(self, bytes)
    }
}
