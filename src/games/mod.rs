//! Playable games.
//!
//! - `chess`: 8x8 chess with castling and queen promotion
//! - `checkers`: 8x8 English draughts with forced captures
//! - `tictactoe`: 3x3 noughts and crosses
//!
//! `grid` holds the framed 8x8 text layout shared by the board renderers.

pub mod checkers;
pub mod chess;
pub mod grid;
pub mod tictactoe;

use crate::core::Result;
use crate::env::EnvRegistry;

/// Register every game shipped with this crate.
pub fn register_all(registry: &mut EnvRegistry) -> Result<()> {
    chess::register(registry)?;
    checkers::register(registry)?;
    tictactoe::register(registry)?;
    Ok(())
}
