//! Tic-tac-toe.
//!
//! Exercises the same `TurnController` as chess with a 3x3 board, nine
//! actions and no special moves. `ExpertPolicy` is a rule-based opponent
//! usable as the opening policy or through `suggest_action`.

mod board;
mod codec;
mod engine;
mod expert;
mod game;
mod render;

pub use board::{Cell, TicTacToePosition};
pub use codec::{TicTacToeCodec, ACTION_SPACE};
pub use engine::TicTacToeEngine;
pub use expert::ExpertPolicy;
pub use game::{register, tictactoe_env, TicTacToe, TICTACTOE_ID};
pub use render::TicTacToeRenderer;
