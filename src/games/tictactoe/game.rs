//! Tic-tac-toe as a `Game`.

use crate::core::{EnvConfig, EnvError, Grid, Result};
use crate::env::{Environment, EnvRegistry, Game, TurnController};

use super::board::TicTacToePosition;
use super::codec::TicTacToeCodec;
use super::engine::TicTacToeEngine;
use super::render::TicTacToeRenderer;

/// Registry id of the tic-tac-toe environment.
pub const TICTACTOE_ID: &str = "TicTacToe-v0";

#[derive(Clone, Copy, Debug, Default)]
pub struct TicTacToe {
    engine: TicTacToeEngine,
    codec: TicTacToeCodec,
    renderer: TicTacToeRenderer,
}

impl TicTacToe {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Game for TicTacToe {
    type Engine = TicTacToeEngine;
    type Codec = TicTacToeCodec;
    type Renderer = TicTacToeRenderer;

    fn name(&self) -> &'static str {
        TICTACTOE_ID
    }

    fn engine(&self) -> &TicTacToeEngine {
        &self.engine
    }

    fn codec(&self) -> &TicTacToeCodec {
        &self.codec
    }

    fn renderer(&self) -> &TicTacToeRenderer {
        &self.renderer
    }

    fn initial_position(&self, board: Option<&Grid>) -> Result<TicTacToePosition> {
        match board {
            None => Ok(TicTacToePosition::default()),
            Some(grid) => TicTacToePosition::from_grid(grid).map_err(|err| EnvError::Config(err.to_string())),
        }
    }

    fn grid(&self, position: &TicTacToePosition) -> Grid {
        position.to_grid()
    }
}

/// Tic-tac-toe environment with the given configuration.
#[must_use]
pub fn tictactoe_env(config: EnvConfig) -> TurnController<TicTacToe> {
    TurnController::new(TicTacToe::new(), config)
}

/// Register `TicTacToe-v0`.
pub fn register(registry: &mut EnvRegistry) -> Result<()> {
    registry.register(TICTACTOE_ID, |config| {
        Ok(Box::new(tictactoe_env(config.clone())) as Box<dyn Environment>)
    })
}
