//! Chess engine snapshot.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Grid};

use super::moves::Square;
use super::pieces::{is_valid_id, Board, Color, DEFAULT_BOARD, KING_ID};

/// Castling rights of one color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastleRights {
    pub king_side: bool,
    pub queen_side: bool,
}

impl CastleRights {
    pub const ALL: CastleRights = CastleRights {
        king_side: true,
        queen_side: true,
    };

    pub const NONE: CastleRights = CastleRights {
        king_side: false,
        queen_side: false,
    };

    #[must_use]
    pub const fn side(self, king_side: bool) -> bool {
        if king_side {
            self.king_side
        } else {
            self.queen_side
        }
    }
}

/// Complete snapshot exchanged with the chess engine.
///
/// Check flags are derived; `ChessEngine::update_state` recomputes them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChessPosition {
    pub board: Board,
    pub side_to_move: Color,
    /// Indexed by `Color::index`.
    pub castling: [CastleRights; 2],
    /// Indexed by `Color::index`.
    pub checked: [bool; 2],
}

impl Default for ChessPosition {
    fn default() -> Self {
        Self::from_board(DEFAULT_BOARD)
    }
}

impl ChessPosition {
    /// White to move, full castling rights, flags not yet computed.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            side_to_move: Color::White,
            castling: [CastleRights::ALL; 2],
            checked: [false; 2],
        }
    }

    /// Position from a signed grid, validating shape and piece ids.
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
                if !is_valid_id(id) {
                    return Err(EngineError::IllegalPosition(format!(
                        "unknown piece id {id} at ({row}, {col})"
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

    /// Square of the king of `color`, if it is on the board.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = KING_ID * color.sign();
        Square::all().find(|&square| self.at(square) == king)
    }

    #[must_use]
    pub fn king_on_board(&self, color: Color) -> bool {
        self.king_square(color).is_some()
    }

    #[must_use]
    pub fn rights(&self, color: Color) -> CastleRights {
        self.castling[color.index()]
    }

    #[must_use]
    pub fn is_checked(&self, color: Color) -> bool {
        self.checked[color.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::chess::pieces::ROOK_ID;

    #[test]
    fn test_default_position() {
        let position = ChessPosition::default();
        assert_eq!(position.side_to_move, Color::White);
        assert_eq!(position.king_square(Color::White), Square::new(7, 4));
        assert_eq!(position.king_square(Color::Black), Square::new(0, 4));
        assert!(position.rights(Color::Black).king_side);
        assert!(!position.is_checked(Color::White));
    }

    #[test]
    fn test_grid_round_trip() {
        let position = ChessPosition::default();
        let grid = position.to_grid();
        assert_eq!(ChessPosition::from_grid(&grid).unwrap(), position);
    }

    #[test]
    fn test_grid_validation() {
        let mut grid = ChessPosition::default().to_grid();
        grid[3][3] = 9;
        assert!(matches!(
            ChessPosition::from_grid(&grid),
            Err(EngineError::IllegalPosition(_))
        ));

        let short = vec![vec![0; 8]; 7];
        assert!(ChessPosition::from_grid(&short).is_err());

        let mut ragged = vec![vec![0; 8]; 8];
        ragged[2].push(ROOK_ID);
        assert!(ChessPosition::from_grid(&ragged).is_err());
    }

    #[test]
    fn test_missing_king() {
        let position = ChessPosition::from_board([[0; 8]; 8]);
        assert!(!position.king_on_board(Color::White));
        assert!(position.king_square(Color::Black).is_none());
    }
}
