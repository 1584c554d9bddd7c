//! Chess action encoding.
//!
//! Coordinate moves occupy `0..4096` as `from * 64 + to` with
//! `square = row * 8 + col`. The symbolic moves follow directly above in
//! `SpecialMove::ALL` order:
//!
//! | id   | move                    |
//! |------|-------------------------|
//! | 4096 | castle king side white  |
//! | 4097 | castle queen side white |
//! | 4098 | castle king side black  |
//! | 4099 | castle queen side black |
//! | 4100 | resign                  |

use crate::core::{ActionId, CodecError};
use crate::env::ActionCodec;

use super::moves::{ChessMove, SpecialMove, Square};
use super::notation::Notation;
use super::pieces::{letter, Board};

/// Number of coordinate-pair actions.
pub const BASE_ACTIONS: usize = 64 * 64;

/// Size of the chess action space.
pub const ACTION_SPACE: usize = BASE_ACTIONS + SpecialMove::ALL.len();

#[derive(Clone, Copy, Debug, Default)]
pub struct ChessCodec;

impl ChessCodec {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Short description: piece letter, origin, `x` on capture, destination.
    ///
    /// Castling reads `O-O` / `O-O-O`.
    #[must_use]
    pub fn describe(board: &Board, mv: &ChessMove) -> String {
        match mv {
            ChessMove::Normal { from, to } => {
                let piece = board[from.row as usize][from.col as usize];
                let capture = board[to.row as usize][to.col as usize] != 0;
                format!("{}{}{}{}", letter(piece), from, if capture { "x" } else { "" }, to)
            }
            ChessMove::Special(special) => match special.castle_side() {
                Some((_, true)) => "O-O".to_string(),
                Some((_, false)) => "O-O-O".to_string(),
                None => "resign".to_string(),
            },
        }
    }
}

impl ActionCodec for ChessCodec {
    type Move = ChessMove;
    type Native = Notation;

    fn action_space(&self) -> usize {
        ACTION_SPACE
    }

    fn move_to_action(&self, mv: &ChessMove) -> ActionId {
        let raw = match mv {
            ChessMove::Normal { from, to } => from.index() * 64 + to.index(),
            ChessMove::Special(special) => BASE_ACTIONS + special.ordinal(),
        };
        ActionId(raw as u32)
    }

    fn action_to_move(&self, action: ActionId) -> Result<ChessMove, CodecError> {
        let raw = action.index();
        if raw < BASE_ACTIONS {
            let from = Square::from_index(raw / 64);
            let to = Square::from_index(raw % 64);
            return match (from, to) {
                (Some(from), Some(to)) => Ok(ChessMove::normal(from, to)),
                _ => Err(CodecError::ActionOutOfRange {
                    action: action.raw(),
                    size: ACTION_SPACE,
                }),
            };
        }
        SpecialMove::ALL
            .get(raw - BASE_ACTIONS)
            .map(|&special| ChessMove::Special(special))
            .ok_or(CodecError::ActionOutOfRange {
                action: action.raw(),
                size: ACTION_SPACE,
            })
    }

    fn to_native(&self, mv: &ChessMove) -> Result<Notation, CodecError> {
        Ok(Notation::from(mv))
    }

    fn from_native(&self, native: &Notation) -> Result<ChessMove, CodecError> {
        native.parse()
    }

    fn resignation(&self) -> Option<ChessMove> {
        Some(ChessMove::Special(SpecialMove::Resign))
    }
}
