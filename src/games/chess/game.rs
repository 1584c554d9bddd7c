//! Chess as a `Game`.

use crate::core::{EnvConfig, EnvError, Grid, Result};
use crate::env::{Environment, EnvRegistry, Game, TurnController};

use super::codec::ChessCodec;
use super::engine::ChessEngine;
use super::pieces::Color;
use super::position::ChessPosition;
use super::render::ChessRenderer;

/// Registry id of the chess environment.
pub const CHESS_ID: &str = "Chess-v0";

#[derive(Clone, Copy, Debug, Default)]
pub struct Chess {
    engine: ChessEngine,
    codec: ChessCodec,
    renderer: ChessRenderer,
}

impl Chess {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Game for Chess {
    type Engine = ChessEngine;
    type Codec = ChessCodec;
    type Renderer = ChessRenderer;

    fn name(&self) -> &'static str {
        CHESS_ID
    }

    fn engine(&self) -> &ChessEngine {
        &self.engine
    }

    fn codec(&self) -> &ChessCodec {
        &self.codec
    }

    fn renderer(&self) -> &ChessRenderer {
        &self.renderer
    }

    fn initial_position(&self, board: Option<&Grid>) -> Result<ChessPosition> {
        match board {
            None => Ok(ChessPosition::default()),
            Some(grid) => ChessPosition::from_grid(grid).map_err(|err| EnvError::Config(err.to_string())),
        }
    }

    fn grid(&self, position: &ChessPosition) -> Grid {
        position.to_grid()
    }

    fn flags(&self, position: &ChessPosition) -> Vec<(&'static str, bool)> {
        let white = position.rights(Color::White);
        let black = position.rights(Color::Black);
        vec![
            ("white_king_castle_is_possible", white.king_side),
            ("white_queen_castle_is_possible", white.queen_side),
            ("black_king_castle_is_possible", black.king_side),
            ("black_queen_castle_is_possible", black.queen_side),
            ("white_king_is_checked", position.is_checked(Color::White)),
            ("black_king_is_checked", position.is_checked(Color::Black)),
            ("white_king_on_the_board", position.king_on_board(Color::White)),
            ("black_king_on_the_board", position.king_on_board(Color::Black)),
        ]
    }
}

/// Chess environment with the given configuration.
#[must_use]
pub fn chess_env(config: EnvConfig) -> TurnController<Chess> {
    TurnController::new(Chess::new(), config)
}

/// Register `Chess-v0`.
pub fn register(registry: &mut EnvRegistry) -> Result<()> {
    registry.register(CHESS_ID, |config| {
        Ok(Box::new(chess_env(config.clone())) as Box<dyn Environment>)
    })
}
