//! Checkers moves as origin and destination squares.

use std::fmt;

use smallvec::SmallVec;

use super::board::Square;

/// A move from one dark square to another.
///
/// A multi-jump is named by its first and last square; the engine resolves
/// the path in between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CheckersMove {
    pub from: Square,
    pub to: Square,
}

impl CheckersMove {
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Check if the move spans more than one diagonal step.
    #[must_use]
    pub fn is_jump(&self) -> bool {
        self.from.row.abs_diff(self.to.row) != 1
    }
}

impl fmt::Display for CheckersMove {
    /// `c3-d4` for a step, `c3xe5` for a jump.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_jump() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

/// Full path of one move: every landing square and every captured square.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence {
    pub from: Square,
    pub landings: SmallVec<[Square; 4]>,
    pub captured: SmallVec<[Square; 4]>,
}

impl Sequence {
    #[must_use]
    pub fn new(from: Square) -> Self {
        Self {
            from,
            landings: SmallVec::new(),
            captured: SmallVec::new(),
        }
    }

    /// Final square, the origin for a sequence without landings.
    #[must_use]
    pub fn to(&self) -> Square {
        self.landings.last().copied().unwrap_or(self.from)
    }

    #[must_use]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    #[must_use]
    pub fn as_move(&self) -> CheckersMove {
        CheckersMove::new(self.from, self.to())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_notation() {
        assert_eq!(CheckersMove::new(sq(5, 2), sq(4, 3)).to_string(), "c3-d4");
        assert_eq!(CheckersMove::new(sq(5, 2), sq(3, 4)).to_string(), "c3xe5");
        // a double jump returning to the origin row
        assert!(CheckersMove::new(sq(5, 2), sq(5, 6)).is_jump());
    }

    #[test]
    fn test_sequence_endpoints() {
        let mut sequence = Sequence::new(sq(6, 1));
        assert_eq!(sequence.to(), sq(6, 1));
        sequence.landings.push(sq(4, 3));
        sequence.captured.push(sq(5, 2));
        sequence.landings.push(sq(2, 5));
        sequence.captured.push(sq(3, 4));
        assert!(sequence.is_capture());
        assert_eq!(sequence.as_move(), CheckersMove::new(sq(6, 1), sq(2, 5)));
    }
}
