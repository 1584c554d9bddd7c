//! Tic-tac-toe rendering: three rows of `X | . | O`.

use crate::env::Renderer;

use super::board::{Cell, TicTacToePosition};

fn symbol(mark: i8) -> char {
    match mark {
        1 => 'X',
        -1 => 'O',
        _ => '.',
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TicTacToeRenderer;

impl Renderer for TicTacToeRenderer {
    type Position = TicTacToePosition;
    type Move = Cell;

    /// Highlighted empty cells are drawn as `*`.
    fn render_text(&self, position: &TicTacToePosition, highlights: &[Cell]) -> String {
        let mut out = String::new();
        for row in 0..3u8 {
            let line: Vec<String> = (0..3u8)
                .filter_map(|col| Cell::new(row, col))
                .map(|cell| {
                    let mark = position.at(cell);
                    if mark == 0 && highlights.contains(&cell) {
                        "*".to_string()
                    } else {
                        symbol(mark).to_string()
                    }
                })
                .collect();
            out.push_str(&line.join(" | "));
            out.push('\n');
        }
        out
    }

    fn describe_move(&self, _position: &TicTacToePosition, mv: &Cell) -> String {
        format!("mark {mv}")
    }
}
