//! Checkers text rendering on the shared 8x8 frame.
//!
//! `r`/`R` are red men and kings, `b`/`B` black ones; empty dark squares
//! show a dot.

use crate::env::Renderer;
use crate::games::grid::{frame, Cell, Marker};

use super::board::{CheckersPosition, KING_ID, MAN_ID};
use super::moves::CheckersMove;

fn icon(id: i8, dark: bool) -> &'static str {
    match id {
        MAN_ID => " r ",
        KING_ID => " R ",
        -1 => " b ",
        -2 => " B ",
        _ if dark => " . ",
        _ => "   ",
    }
}

/// Board cells with move origins and destinations marked.
#[must_use]
pub fn layout(position: &CheckersPosition, highlights: &[CheckersMove]) -> Vec<Vec<Cell>> {
    let mut cells: Vec<Vec<Cell>> = position
        .board
        .iter()
        .enumerate()
        .map(|(row, ids)| {
            ids.iter()
                .enumerate()
                .map(|(col, &id)| Cell::plain(icon(id, (row + col) % 2 == 1)))
                .collect()
        })
        .collect();

    for mv in highlights {
        cells[mv.from.row as usize][mv.from.col as usize].highlight(Marker::Origin);
        let marker = if mv.is_jump() { Marker::Capture } else { Marker::Quiet };
        cells[mv.to.row as usize][mv.to.col as usize].highlight(marker);
    }
    cells
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CheckersRenderer;

impl Renderer for CheckersRenderer {
    type Position = CheckersPosition;
    type Move = CheckersMove;

    fn render_text(&self, position: &CheckersPosition, highlights: &[CheckersMove]) -> String {
        frame(&layout(position, highlights))
    }

    fn describe_move(&self, position: &CheckersPosition, mv: &CheckersMove) -> String {
        let piece = if position.at(mv.from).abs() == KING_ID { "king" } else { "man" };
        if mv.is_jump() {
            format!("{piece} captures {mv}")
        } else {
            format!("{piece} {mv}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::checkers::board::Square;

    #[test]
    fn test_plain_layout() {
        let text = CheckersRenderer.render_text(&CheckersPosition::default(), &[]);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[1], format!(" 8 | {}|", "    b ".repeat(4)));
        assert_eq!(lines[4], format!(" 5 | {}|", " .    ".repeat(4)));
        assert_eq!(lines[6], format!(" 3 | {}|", " r    ".repeat(4)));
        assert_eq!(lines[10], "      a  b  c  d  e  f  g  h ");
    }

    #[test]
    fn test_highlights() {
        let from = Square::new(5, 2).unwrap();
        let step = CheckersMove::new(from, Square::new(4, 3).unwrap());
        let jump = CheckersMove::new(from, Square::new(3, 0).unwrap());
        let cells = layout(&CheckersPosition::default(), &[step, jump]);

        assert_eq!(cells[5][2].marker, Some(Marker::Origin));
        assert_eq!(cells[4][3].marker, Some(Marker::Quiet));
        assert_eq!(cells[3][0].marker, Some(Marker::Capture));
        assert_eq!(cells[0][0].marker, None);
    }

    #[test]
    fn test_describe_move() {
        let position = CheckersPosition::default();
        let step = CheckersMove::new(Square::new(5, 2).unwrap(), Square::new(4, 3).unwrap());
        assert_eq!(CheckersRenderer.describe_move(&position, &step), "man c3-d4");
        let jump = CheckersMove::new(Square::new(5, 2).unwrap(), Square::new(3, 4).unwrap());
        assert_eq!(CheckersRenderer.describe_move(&position, &jump), "man captures c3xe5");
    }
}
