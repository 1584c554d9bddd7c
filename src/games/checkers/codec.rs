//! Checkers action encoding over the 32 dark squares.
//!
//! `action = from * 32 + to`, with squares numbered four per row from the
//! top-left dark square.

use crate::core::{ActionId, CodecError};
use crate::env::ActionCodec;

use super::board::{Square, DARK_SQUARES};
use super::moves::CheckersMove;

pub const ACTION_SPACE: usize = DARK_SQUARES * DARK_SQUARES;

#[derive(Clone, Copy, Debug, Default)]
pub struct CheckersCodec;

impl ActionCodec for CheckersCodec {
    type Move = CheckersMove;
    type Native = CheckersMove;

    fn action_space(&self) -> usize {
        ACTION_SPACE
    }

    fn move_to_action(&self, mv: &CheckersMove) -> ActionId {
        ActionId((mv.from.dark_index() * DARK_SQUARES + mv.to.dark_index()) as u32)
    }

    fn action_to_move(&self, action: ActionId) -> Result<CheckersMove, CodecError> {
        let index = action.index();
        let out_of_range = CodecError::ActionOutOfRange {
            action: action.raw(),
            size: ACTION_SPACE,
        };
        let from = Square::from_dark_index(index / DARK_SQUARES).ok_or(out_of_range.clone())?;
        let to = Square::from_dark_index(index % DARK_SQUARES).ok_or(out_of_range)?;
        Ok(CheckersMove::new(from, to))
    }

    fn to_native(&self, mv: &CheckersMove) -> Result<CheckersMove, CodecError> {
        Ok(*mv)
    }

    fn from_native(&self, native: &CheckersMove) -> Result<CheckersMove, CodecError> {
        for square in [native.from, native.to] {
            if Square::new(square.row, square.col).is_none() {
                return Err(CodecError::SquareOutOfBounds {
                    row: i32::from(square.row),
                    col: i32::from(square.col),
                });
            }
        }
        Ok(*native)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_ids() {
        let codec = CheckersCodec;
        assert_eq!(codec.action_space(), 1024);
        // c3 is dark square 21, d4 is 17
        let mv = CheckersMove::new(sq(5, 2), sq(4, 3));
        assert_eq!(codec.move_to_action(&mv), ActionId(21 * 32 + 17));
        assert_eq!(codec.action_to_move(ActionId(21 * 32 + 17)).unwrap(), mv);
        assert!(codec.action_to_move(ActionId(1024)).is_err());
        assert!(codec.resignation().is_none());
    }

    #[test]
    fn test_light_squares_rejected() {
        let codec = CheckersCodec;
        let light = CheckersMove {
            from: Square { row: 0, col: 0 },
            to: sq(1, 0),
        };
        assert_eq!(
            codec.from_native(&light),
            Err(CodecError::SquareOutOfBounds { row: 0, col: 0 })
        );
    }
}
