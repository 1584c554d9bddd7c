//! Piece ids, colors and the standard starting board.
//!
//! Boards are 8x8 grids of signed ids: the magnitude names the piece, the
//! sign its color (white positive). Row 0 is rank 8, column 0 is file a.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

pub const EMPTY_SQUARE_ID: i8 = 0;
pub const KING_ID: i8 = 1;
pub const QUEEN_ID: i8 = 2;
pub const ROOK_ID: i8 = 3;
pub const BISHOP_ID: i8 = 4;
pub const KNIGHT_ID: i8 = 5;
pub const PAWN_ID: i8 = 6;

/// Chess board as signed piece ids.
pub type Board = [[i8; 8]; 8];

/// Standard starting position.
pub const DEFAULT_BOARD: Board = [
    [-3, -5, -4, -2, -1, -4, -5, -3],
    [-6, -6, -6, -6, -6, -6, -6, -6],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [6, 6, 6, 6, 6, 6, 6, 6],
    [3, 5, 4, 2, 1, 4, 5, 3],
];

/// Side of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// White is the first player.
    #[must_use]
    pub const fn from_player(player: PlayerId) -> Self {
        match player.0 {
            0 => Color::White,
            _ => Color::Black,
        }
    }

    #[must_use]
    pub const fn player(self) -> PlayerId {
        match self {
            Color::White => PlayerId::FIRST,
            Color::Black => PlayerId::SECOND,
        }
    }

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Array index: white 0, black 1.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Back rank row.
    #[must_use]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row delta of a pawn push.
    #[must_use]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row from which pawns may advance two squares.
    #[must_use]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row on which pawns promote.
    #[must_use]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

/// Color of the piece with `id`; `None` for an empty square.
#[must_use]
pub const fn owner(id: i8) -> Option<Color> {
    if id > 0 {
        Some(Color::White)
    } else if id < 0 {
        Some(Color::Black)
    } else {
        None
    }
}

/// Check if `id` names a square content.
#[must_use]
pub const fn is_valid_id(id: i8) -> bool {
    id >= -PAWN_ID && id <= PAWN_ID
}

/// Board icon of a square content.
#[must_use]
pub const fn icon(id: i8) -> &'static str {
    match id {
        -6 => "♙",
        -5 => "♘",
        -4 => "♗",
        -3 => "♖",
        -2 => "♕",
        -1 => "♔",
        1 => "♚",
        2 => "♛",
        3 => "♜",
        4 => "♝",
        5 => "♞",
        6 => "♟",
        _ => ".",
    }
}

/// Move-notation letter of a piece; pawns have none.
#[must_use]
pub const fn letter(id: i8) -> &'static str {
    match id.abs() {
        KING_ID => "K",
        QUEEN_ID => "Q",
        ROOK_ID => "R",
        BISHOP_ID => "B",
        KNIGHT_ID => "N",
        _ => "",
    }
}
