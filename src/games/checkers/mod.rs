//! Checkers (English draughts).
//!
//! Played on the 32 dark squares of an 8x8 board. Red, the first player,
//! starts on the bottom three rows and moves up; black holds the top three.
//! Captures are forced and multi-jumps are named by their first and last
//! square, giving an action space of `32 * 32`.

mod board;
mod codec;
mod engine;
mod game;
mod moves;
mod render;

pub use board::{CheckersPosition, Square, DARK_SQUARES, DEFAULT_BOARD, KING_ID, MAN_ID};
pub use codec::{CheckersCodec, ACTION_SPACE};
pub use engine::{CheckersEngine, QUIET_PLY_LIMIT};
pub use game::{checkers_env, register, Checkers, CHECKERS_ID};
pub use moves::{CheckersMove, Sequence};
pub use render::{layout, CheckersRenderer};
