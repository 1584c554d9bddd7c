//! Squares and the chess move vocabulary.

use std::fmt;

use super::pieces::Color;

/// Board square; row 0 is rank 8, column 0 is file a.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Square at `(row, col)`, if on the board.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Square with index `row * 8 + col`.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 64 {
            Some(Self {
                row: (index / 8) as u8,
                col: (index % 8) as u8,
            })
        } else {
            None
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Square shifted by a row/column delta, if still on the board.
    #[must_use]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    /// Algebraic name, `a8` for `(0, 0)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        write!(f, "{}{}", file, 8 - self.row)
    }
}

/// Symbolic moves, in action-id order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpecialMove {
    CastleKingSideWhite,
    CastleQueenSideWhite,
    CastleKingSideBlack,
    CastleQueenSideBlack,
    Resign,
}

impl SpecialMove {
    pub const ALL: [SpecialMove; 5] = [
        SpecialMove::CastleKingSideWhite,
        SpecialMove::CastleQueenSideWhite,
        SpecialMove::CastleKingSideBlack,
        SpecialMove::CastleQueenSideBlack,
        SpecialMove::Resign,
    ];

    /// Position in `ALL`.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        match self {
            SpecialMove::CastleKingSideWhite => 0,
            SpecialMove::CastleQueenSideWhite => 1,
            SpecialMove::CastleKingSideBlack => 2,
            SpecialMove::CastleQueenSideBlack => 3,
            SpecialMove::Resign => 4,
        }
    }

    /// Castling move of `color` on the king or queen side.
    #[must_use]
    pub const fn castle(color: Color, king_side: bool) -> Self {
        match (color, king_side) {
            (Color::White, true) => SpecialMove::CastleKingSideWhite,
            (Color::White, false) => SpecialMove::CastleQueenSideWhite,
            (Color::Black, true) => SpecialMove::CastleKingSideBlack,
            (Color::Black, false) => SpecialMove::CastleQueenSideBlack,
        }
    }

    /// Color and side of a castling move; `None` for resignation.
    #[must_use]
    pub const fn castle_side(self) -> Option<(Color, bool)> {
        match self {
            SpecialMove::CastleKingSideWhite => Some((Color::White, true)),
            SpecialMove::CastleQueenSideWhite => Some((Color::White, false)),
            SpecialMove::CastleKingSideBlack => Some((Color::Black, true)),
            SpecialMove::CastleQueenSideBlack => Some((Color::Black, false)),
            SpecialMove::Resign => None,
        }
    }

    /// Engine notation.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            SpecialMove::CastleKingSideWhite => "CASTLE_KING_SIDE_WHITE",
            SpecialMove::CastleQueenSideWhite => "CASTLE_QUEEN_SIDE_WHITE",
            SpecialMove::CastleKingSideBlack => "CASTLE_KING_SIDE_BLACK",
            SpecialMove::CastleQueenSideBlack => "CASTLE_QUEEN_SIDE_BLACK",
            SpecialMove::Resign => "RESIGN",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        SpecialMove::ALL.into_iter().find(|special| special.code() == code)
    }
}

/// A chess move: a coordinate pair or a symbolic move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChessMove {
    Normal { from: Square, to: Square },
    Special(SpecialMove),
}

impl ChessMove {
    #[must_use]
    pub const fn normal(from: Square, to: Square) -> Self {
        ChessMove::Normal { from, to }
    }
}

impl fmt::Display for ChessMove {
    /// Engine notation: `e2e4`, `CASTLE_KING_SIDE_WHITE`, `RESIGN`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessMove::Normal { from, to } => write!(f, "{from}{to}"),
            ChessMove::Special(special) => f.write_str(special.code()),
        }
    }
}
