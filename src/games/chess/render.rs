//! Chess board rendering.
//!
//! ```text
//!     -------------------------
//!  8 | ♖  ♘  ♗  ♕  ♔  ♗  ♘  ♖ |
//!  ...
//!  1 | ♜  ♞  ♝  ♛  ♚  ♝  ♞  ♜ |
//!     -------------------------
//!       a  b  c  d  e  f  g  h
//! ```
//!
//! Highlighting is computed as a marker grid first and painted when the
//! board is framed.

use crate::env::Renderer;
use crate::games::grid::{frame, Cell, Marker};

use super::codec::ChessCodec;
use super::moves::ChessMove;
use super::pieces::{icon, Board};
use super::position::ChessPosition;

/// Arrow cells of a castling move, by column.
const KING_SIDE_ARROWS: &[(usize, &str)] = &[(5, " >>"), (6, "<< ")];
const QUEEN_SIDE_ARROWS: &[(usize, &str)] = &[(1, " >>"), (2, "> <"), (3, "<< ")];

/// Cells of `board` with `moves` highlighted.
///
/// Castling overwrites the squares it spans; a coordinate move never
/// re-highlights a square that is already marked.
#[must_use]
pub fn layout(board: &Board, moves: &[ChessMove]) -> Vec<Vec<Cell>> {
    let mut cells: Vec<Vec<Cell>> = board
        .iter()
        .map(|row| row.iter().map(|&id| Cell::plain(format!(" {} ", icon(id)))).collect())
        .collect();

    for mv in moves {
        match *mv {
            ChessMove::Special(special) => {
                let Some((color, king_side)) = special.castle_side() else {
                    continue;
                };
                let row = &mut cells[color.home_row() as usize];
                let (ends, arrows) = if king_side {
                    ([4, 7], KING_SIDE_ARROWS)
                } else {
                    ([0, 4], QUEEN_SIDE_ARROWS)
                };
                for col in ends {
                    row[col].marker = Some(Marker::Origin);
                }
                for &(col, arrow) in arrows {
                    row[col] = Cell {
                        text: arrow.to_string(),
                        marker: Some(Marker::Castle),
                    };
                }
            }
            ChessMove::Normal { from, to } => {
                cells[from.row as usize][from.col as usize].highlight(Marker::Origin);
                let occupied = board[to.row as usize][to.col as usize] != 0;
                cells[to.row as usize][to.col as usize].highlight(if occupied {
                    Marker::Capture
                } else {
                    Marker::Quiet
                });
            }
        }
    }
    cells
}

/// Text renderer for chess boards.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChessRenderer;

impl Renderer for ChessRenderer {
    type Position = ChessPosition;
    type Move = ChessMove;

    fn render_text(&self, position: &ChessPosition, highlights: &[ChessMove]) -> String {
        frame(&layout(&position.board, highlights))
    }

    fn describe_move(&self, position: &ChessPosition, mv: &ChessMove) -> String {
        ChessCodec::describe(&position.board, mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::chess::moves::{SpecialMove, Square};
    use crate::games::chess::pieces::DEFAULT_BOARD;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_plain_layout() {
        let text = ChessRenderer.render_text(&ChessPosition::default(), &[]);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], format!("    {}", "-".repeat(25)));
        assert_eq!(lines[1], " 8 |  ♖  ♘  ♗  ♕  ♔  ♗  ♘  ♖ |");
        assert_eq!(lines[4], " 5 |  .  .  .  .  .  .  .  . |");
        assert_eq!(lines[8], " 1 |  ♜  ♞  ♝  ♛  ♚  ♝  ♞  ♜ |");
        assert_eq!(lines[9], lines[0]);
        assert_eq!(lines[10], "      a  b  c  d  e  f  g  h ");
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn test_move_markers() {
        let mut board = DEFAULT_BOARD;
        board[5][5] = -6;
        let moves = [
            ChessMove::normal(sq(6, 4), sq(4, 4)),
            ChessMove::normal(sq(7, 6), sq(5, 5)),
        ];
        let cells = layout(&board, &moves);

        assert_eq!(cells[6][4].marker, Some(Marker::Origin));
        assert_eq!(cells[4][4].marker, Some(Marker::Quiet));
        assert_eq!(cells[5][5].marker, Some(Marker::Capture));
        assert_eq!(cells[3][3].marker, None);
    }

    #[test]
    fn test_square_highlighted_once() {
        let moves = [
            ChessMove::normal(sq(6, 4), sq(5, 4)),
            ChessMove::normal(sq(5, 4), sq(4, 4)),
        ];
        let cells = layout(&DEFAULT_BOARD, &moves);
        assert_eq!(cells[5][4].marker, Some(Marker::Quiet));
    }

    #[test]
    fn test_castle_arrows() {
        let cells = layout(&DEFAULT_BOARD, &[ChessMove::Special(SpecialMove::CastleQueenSideWhite)]);
        let row: Vec<&str> = cells[7].iter().map(|c| c.text.as_str()).collect();
        assert_eq!(&row[1..4], &[" >>", "> <", "<< "]);
        assert_eq!(cells[7][0].marker, Some(Marker::Origin));
        assert_eq!(cells[7][4].marker, Some(Marker::Origin));
        assert_eq!(cells[7][2].marker, Some(Marker::Castle));

        let cells = layout(&DEFAULT_BOARD, &[ChessMove::Special(SpecialMove::CastleKingSideBlack)]);
        assert_eq!(cells[0][5].text, " >>");
        assert_eq!(cells[0][6].text, "<< ");
        assert_eq!(cells[0][7].marker, Some(Marker::Origin));
    }

    #[test]
    fn test_resign_is_not_drawn() {
        let cells = layout(&DEFAULT_BOARD, &[ChessMove::Special(SpecialMove::Resign)]);
        assert!(cells.iter().flatten().all(|cell| cell.marker.is_none()));
    }

    #[test]
    fn test_describe_uses_board() {
        let position = ChessPosition::default();
        let mv = ChessMove::normal(sq(7, 1), sq(5, 2));
        assert_eq!(ChessRenderer.describe_move(&position, &mv), "Nb1c3");
    }
}
