//! Tic-tac-toe action encoding: `action = row * 3 + col`.

use crate::core::{ActionId, CodecError};
use crate::env::ActionCodec;

use super::board::Cell;

pub const ACTION_SPACE: usize = 9;

#[derive(Clone, Copy, Debug, Default)]
pub struct TicTacToeCodec;

impl ActionCodec for TicTacToeCodec {
    type Move = Cell;
    type Native = Cell;

    fn action_space(&self) -> usize {
        ACTION_SPACE
    }

    fn move_to_action(&self, mv: &Cell) -> ActionId {
        ActionId(mv.index() as u32)
    }

    fn action_to_move(&self, action: ActionId) -> Result<Cell, CodecError> {
        Cell::from_index(action.index()).ok_or(CodecError::ActionOutOfRange {
            action: action.raw(),
            size: ACTION_SPACE,
        })
    }

    fn to_native(&self, mv: &Cell) -> Result<Cell, CodecError> {
        Ok(*mv)
    }

    fn from_native(&self, native: &Cell) -> Result<Cell, CodecError> {
        Cell::new(native.row, native.col).ok_or(CodecError::SquareOutOfBounds {
            row: i32::from(native.row),
            col: i32::from(native.col),
        })
    }
}
