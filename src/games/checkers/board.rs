//! Draughts board, dark squares and piece ids.
//!
//! Cells hold signed ids: `MAN_ID` or `KING_ID` for the first player (red,
//! bottom rows, moving up), the negated id for the second player (black).
//! Only the 32 dark squares, where `row + col` is odd, ever hold a piece.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Grid, PlayerId};

pub const MAN_ID: i8 = 1;
pub const KING_ID: i8 = 2;

/// Number of playable squares.
pub const DARK_SQUARES: usize = 32;

/// 8x8 board of signed piece ids, row 0 on top.
pub type Board = [[i8; 8]; 8];

const R: i8 = MAN_ID;
const B: i8 = -MAN_ID;

/// Twelve men per side on the three rows nearest each player.
pub const DEFAULT_BOARD: Board = [
    [0, B, 0, B, 0, B, 0, B],
    [B, 0, B, 0, B, 0, B, 0],
    [0, B, 0, B, 0, B, 0, B],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [R, 0, R, 0, R, 0, R, 0],
    [0, R, 0, R, 0, R, 0, R],
    [R, 0, R, 0, R, 0, R, 0],
];

/// A dark square; row 0 is rank 8, column 0 is file a.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Square at `(row, col)`, if it is a dark square on the board.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 && (row + col) % 2 == 1 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Dark square number `index`, four per row, top row first.
    #[must_use]
    pub const fn from_dark_index(index: usize) -> Option<Self> {
        if index >= DARK_SQUARES {
            return None;
        }
        let row = (index / 4) as u8;
        let col = (index % 4) as u8 * 2 + (1 - row % 2);
        Some(Self { row, col })
    }

    #[must_use]
    pub const fn dark_index(self) -> usize {
        self.row as usize * 4 + self.col as usize / 2
    }

    /// Square shifted by a diagonal delta, if still on the board.
    #[must_use]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Self::new(row as u8, col as u8)
        } else {
            None
        }
    }

    /// All dark squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..DARK_SQUARES).filter_map(Square::from_dark_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        write!(f, "{}{}", file, 8 - self.row)
    }
}

/// Player owning a piece id, `None` for an empty cell.
#[must_use]
pub fn owner(id: i8) -> Option<PlayerId> {
    if id == 0 {
        None
    } else {
        PlayerId::from_sign(id.signum())
    }
}

/// Row on which the men of `player` are crowned.
#[must_use]
pub const fn crown_row(player: PlayerId) -> u8 {
    match player.sign() {
        1 => 0,
        _ => 7,
    }
}

/// Row delta of a forward step for `player`.
#[must_use]
pub const fn forward(player: PlayerId) -> i8 {
    -player.sign()
}

/// Complete snapshot exchanged with the checkers engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckersPosition {
    pub board: Board,
    pub side_to_move: PlayerId,
    /// Plies since the last capture or man move.
    pub quiet_plies: u16,
}

impl Default for CheckersPosition {
    fn default() -> Self {
        Self::from_board(DEFAULT_BOARD)
    }
}

impl CheckersPosition {
    /// First player to move, quiet counter at zero.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            side_to_move: PlayerId::FIRST,
            quiet_plies: 0,
        }
    }

    /// Position from a signed grid, validating shape, ids and square colors.
    pub fn from_grid(grid: &Grid) -> Result<Self, EngineError> {
        if grid.len() != 8 {
            return Err(EngineError::IllegalPosition(format!(
                "expected 8 rows, got {}",
                grid.len()
            )));
        }
        let mut board = [[0i8; 8]; 8];
        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != 8 {
                return Err(EngineError::IllegalPosition(format!(
                    "row {row} has {} columns, expected 8",
                    cells.len()
                )));
            }
            for (col, &id) in cells.iter().enumerate() {
                if id.abs() > KING_ID {
                    return Err(EngineError::IllegalPosition(format!(
                        "unknown piece id {id} at ({row}, {col})"
                    )));
                }
                if id != 0 && (row + col) % 2 == 0 {
                    return Err(EngineError::IllegalPosition(format!(
                        "piece on light square ({row}, {col})"
                    )));
                }
                board[row][col] = id;
            }
        }
        Ok(Self::from_board(board))
    }

    #[must_use]
    pub fn to_grid(&self) -> Grid {
        self.board.iter().map(|row| row.to_vec()).collect()
    }

    /// Piece id on `square`.
    #[must_use]
    pub fn at(&self, square: Square) -> i8 {
        self.board[square.row as usize][square.col as usize]
    }

    /// Number of pieces `player` has left.
    #[must_use]
    pub fn count(&self, player: PlayerId) -> usize {
        self.board
            .iter()
            .flatten()
            .filter(|&&id| owner(id) == Some(player))
            .count()
    }

    /// Same arrangement with the same player to move.
    #[must_use]
    pub fn same_arrangement(&self, other: &CheckersPosition) -> bool {
        self.board == other.board && self.side_to_move == other.side_to_move
    }
}
