//! Engine move notation.
//!
//! The chess engine speaks file/rank strings: `e2e4` for a coordinate move
//! and `CASTLE_KING_SIDE_WHITE` (and friends) for castling. Conversion to and
//! from `ChessMove` is lossless over the 64 board squares.

use std::fmt;

use crate::core::CodecError;

use super::moves::{ChessMove, SpecialMove, Square};

/// A move in engine notation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Notation(String);

impl Notation {
    /// Wrap a raw notation string without validating it.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse into a move.
    pub fn parse(&self) -> Result<ChessMove, CodecError> {
        if let Some(special) = SpecialMove::from_code(&self.0) {
            return Ok(ChessMove::Special(special));
        }
        let malformed = || CodecError::MalformedNotation(self.0.clone());
        if !self.0.is_ascii() || self.0.len() != 4 {
            return Err(malformed());
        }
        let from = parse_square(&self.0[..2]).ok_or_else(malformed)?;
        let to = parse_square(&self.0[2..]).ok_or_else(malformed)?;
        Ok(ChessMove::normal(from, to))
    }
}

impl From<&ChessMove> for Notation {
    fn from(mv: &ChessMove) -> Self {
        Self(mv.to_string())
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Square from a two-character name such as `e2`.
#[must_use]
pub fn parse_square(name: &str) -> Option<Square> {
    let &[file, rank] = name.as_bytes() else {
        return None;
    };
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }
    Square::new(b'8' - rank, file - b'a')
}
