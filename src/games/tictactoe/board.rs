//! Tic-tac-toe board and cells.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Grid, PlayerId};

/// The eight winning lines as (row, col) triples.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// A board cell; also the move placing a mark on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 3 + self.col as usize
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 9 {
            Some(Self {
                row: (index / 3) as u8,
                col: (index % 3) as u8,
            })
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = Cell> {
        (0..9).filter_map(Cell::from_index)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Board of marks: first player +1, second player -1, empty 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToePosition {
    pub cells: [[i8; 3]; 3],
}

impl TicTacToePosition {
    /// Position from a signed grid, validating shape and marks.
    pub fn from_grid(grid: &Grid) -> Result<Self, EngineError> {
        let shape_ok = grid.len() == 3 && grid.iter().all(|row| row.len() == 3);
        if !shape_ok {
            return Err(EngineError::IllegalPosition("expected a 3x3 board".to_string()));
        }
        let mut cells = [[0i8; 3]; 3];
        for (row, marks) in grid.iter().enumerate() {
            for (col, &mark) in marks.iter().enumerate() {
                if !(-1..=1).contains(&mark) {
                    return Err(EngineError::IllegalPosition(format!(
                        "unknown mark {mark} at ({row}, {col})"
                    )));
                }
                cells[row][col] = mark;
            }
        }
        Ok(Self { cells })
    }

    #[must_use]
    pub fn to_grid(&self) -> Grid {
        self.cells.iter().map(|row| row.to_vec()).collect()
    }

    #[must_use]
    pub fn at(&self, cell: Cell) -> i8 {
        self.cells[cell.row as usize][cell.col as usize]
    }

    /// Same board with `player`'s mark on `cell`.
    #[must_use]
    pub fn with_mark(&self, cell: Cell, player: PlayerId) -> Self {
        let mut next = *self;
        next.cells[cell.row as usize][cell.col as usize] = player.sign();
        next
    }

    /// Check if `player` owns a full line.
    #[must_use]
    pub fn has_line(&self, player: PlayerId) -> bool {
        let mark = player.sign();
        LINES
            .iter()
            .any(|line| line.iter().all(|&(row, col)| self.cells[row][col] == mark))
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&mark| mark != 0)
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::all().filter(|&cell| self.at(cell) == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines() {
        let mut position = TicTacToePosition::default();
        for col in 0..3 {
            position = position.with_mark(Cell::new(1, col).unwrap(), PlayerId::SECOND);
        }
        assert!(position.has_line(PlayerId::SECOND));
        assert!(!position.has_line(PlayerId::FIRST));
    }

    #[test]
    fn test_diagonal_line() {
        let grid = vec![vec![1, -1, 0], vec![-1, 1, 0], vec![0, 0, 1]];
        let position = TicTacToePosition::from_grid(&grid).unwrap();
        assert!(position.has_line(PlayerId::FIRST));
        assert_eq!(position.empty_cells().count(), 4);
    }

    #[test]
    fn test_grid_validation() {
        assert!(TicTacToePosition::from_grid(&vec![vec![0; 3]; 2]).is_err());
        assert!(TicTacToePosition::from_grid(&vec![vec![2, 0, 0], vec![0; 3], vec![0; 3]]).is_err());
    }

    #[test]
    fn test_cell_index_round_trip() {
        for cell in Cell::all() {
            assert_eq!(Cell::from_index(cell.index()), Some(cell));
        }
        assert!(Cell::from_index(9).is_none());
    }
}
