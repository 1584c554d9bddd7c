//! Checkers as a `Game`.

use crate::core::{EnvConfig, EnvError, Grid, Result};
use crate::env::{Environment, EnvRegistry, Game, TurnController};

use super::board::CheckersPosition;
use super::codec::CheckersCodec;
use super::engine::CheckersEngine;
use super::render::CheckersRenderer;

/// Registry id of the checkers environment.
pub const CHECKERS_ID: &str = "Checkers-v0";

#[derive(Clone, Copy, Debug, Default)]
pub struct Checkers {
    engine: CheckersEngine,
    codec: CheckersCodec,
    renderer: CheckersRenderer,
}

impl Checkers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Game for Checkers {
    type Engine = CheckersEngine;
    type Codec = CheckersCodec;
    type Renderer = CheckersRenderer;

    fn name(&self) -> &'static str {
        CHECKERS_ID
    }

    fn engine(&self) -> &CheckersEngine {
        &self.engine
    }

    fn codec(&self) -> &CheckersCodec {
        &self.codec
    }

    fn renderer(&self) -> &CheckersRenderer {
        &self.renderer
    }

    fn initial_position(&self, board: Option<&Grid>) -> Result<CheckersPosition> {
        match board {
            None => Ok(CheckersPosition::default()),
            Some(grid) => CheckersPosition::from_grid(grid).map_err(|err| EnvError::Config(err.to_string())),
        }
    }

    fn grid(&self, position: &CheckersPosition) -> Grid {
        position.to_grid()
    }

    /// `capture_pending` is set when the side to move must jump.
    fn flags(&self, position: &CheckersPosition) -> Vec<(&'static str, bool)> {
        let pending = !CheckersEngine::captures(&position.board, position.side_to_move).is_empty();
        vec![("capture_pending", pending)]
    }
}

/// Checkers environment with the given configuration.
#[must_use]
pub fn checkers_env(config: EnvConfig) -> TurnController<Checkers> {
    TurnController::new(Checkers::new(), config)
}

/// Register `Checkers-v0`.
pub fn register(registry: &mut EnvRegistry) -> Result<()> {
    registry.register(CHECKERS_ID, |config| {
        Ok(Box::new(checkers_env(config.clone())) as Box<dyn Environment>)
    })
}
