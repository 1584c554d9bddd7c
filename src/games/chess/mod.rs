//! Chess.
//!
//! 8x8 signed-id boards, a 4101-id action space (coordinate pairs plus
//! castling and resignation) and a stateless reference rules engine.
//!
//! - `pieces`: ids, colors, icons, starting board
//! - `moves` / `notation`: move vocabulary and the engine's string notation
//! - `position`: the snapshot exchanged with the engine
//! - `engine`: move generation and game-over detection
//! - `codec`, `render`, `game`: the environment-facing pieces

mod codec;
mod engine;
mod game;
mod moves;
mod notation;
mod pieces;
mod position;
mod render;

pub use codec::{ChessCodec, ACTION_SPACE, BASE_ACTIONS};
pub use engine::{ChessEngine, MoveBuf};
pub use game::{chess_env, register, Chess, CHESS_ID};
pub use moves::{ChessMove, SpecialMove, Square};
pub use notation::{parse_square, Notation};
pub use pieces::{
    icon, letter, owner, Board, Color, BISHOP_ID, DEFAULT_BOARD, EMPTY_SQUARE_ID, KING_ID, KNIGHT_ID, PAWN_ID,
    QUEEN_ID, ROOK_ID,
};
pub use position::{CastleRights, ChessPosition};
pub use render::{layout, ChessRenderer};
