//! Text framing shared by the 8x8 board renderers.
//!
//! ```text
//!     -------------------------
//!  8 | ..  ..  ..  ..  ..  .. |
//!  ...
//!     -------------------------
//!       a  b  c  d  e  f  g  h
//! ```
//!
//! Each cell is three characters wide. Highlighted cells get a terminal
//! background color: origins white, captures red, quiet destinations and
//! castling arrows green.

use crossterm::style::{Color as TermColor, Stylize};

const RANKS: &str = "87654321";
const FILES: &str = "      a  b  c  d  e  f  g  h ";

/// Highlight kind of a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Origin,
    Capture,
    Quiet,
    Castle,
}

/// One rendered square: three characters of text and an optional marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub marker: Option<Marker>,
}

impl Cell {
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marker: None,
        }
    }

    /// Mark the cell unless it is already marked.
    pub fn highlight(&mut self, marker: Marker) {
        if self.marker.is_none() {
            self.marker = Some(marker);
        }
    }
}

/// Cell text with its marker painted as a background color.
#[must_use]
pub fn paint(cell: &Cell) -> String {
    let background = match cell.marker {
        None => return cell.text.clone(),
        Some(Marker::Origin) => TermColor::White,
        Some(Marker::Capture) => TermColor::Red,
        Some(Marker::Quiet | Marker::Castle) => TermColor::Green,
    };
    cell.text.as_str().with(TermColor::DarkGrey).on(background).to_string()
}

/// Frame eight rows of cells with rank labels, borders and file labels.
#[must_use]
pub fn frame(cells: &[Vec<Cell>]) -> String {
    let border = format!("    {}\n", "-".repeat(25));
    let mut out = border.clone();
    for (rank, row) in RANKS.chars().zip(cells) {
        out.push_str(&format!(" {rank} | "));
        for cell in row {
            out.push_str(&paint(cell));
        }
        out.push_str("|\n");
    }
    out.push_str(&border);
    out.push_str(FILES);
    out.push('\n');
    out
}
