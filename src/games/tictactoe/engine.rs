//! Stateless tic-tac-toe rules.

use crate::core::{EngineError, History, PlayerId};
use crate::rules::{RulesEngine, Verdict};

use super::board::{Cell, TicTacToePosition};

#[derive(Clone, Copy, Debug, Default)]
pub struct TicTacToeEngine;

impl RulesEngine for TicTacToeEngine {
    type Position = TicTacToePosition;
    type Move = Cell;

    fn update_state(&self, position: &TicTacToePosition) -> Result<TicTacToePosition, EngineError> {
        if position.has_line(PlayerId::FIRST) && position.has_line(PlayerId::SECOND) {
            return Err(EngineError::IllegalPosition("both players own a line".to_string()));
        }
        Ok(*position)
    }

    /// Empty cells, none once a line is complete. `attack` has no effect.
    fn possible_moves(
        &self,
        position: &TicTacToePosition,
        _player: PlayerId,
        _attack: bool,
    ) -> Result<Vec<Cell>, EngineError> {
        if position.has_line(PlayerId::FIRST) || position.has_line(PlayerId::SECOND) {
            return Ok(Vec::new());
        }
        Ok(position.empty_cells().collect())
    }

    fn next_state(
        &self,
        position: &TicTacToePosition,
        player: PlayerId,
        mv: &Cell,
    ) -> Result<TicTacToePosition, EngineError> {
        if !self.possible_moves(position, player, false)?.contains(mv) {
            return Err(EngineError::IllegalMove {
                mv: mv.to_string(),
                reason: "cell is taken or the game is over".to_string(),
            });
        }
        Ok(position.with_mark(*mv, player))
    }

    fn is_game_over(
        &self,
        _history: &History<TicTacToePosition>,
        position: &TicTacToePosition,
        player: PlayerId,
    ) -> Result<Verdict, EngineError> {
        let verdict = if position.has_line(player.opponent()) {
            Verdict::Loss
        } else if position.has_line(player) {
            Verdict::Win
        } else if position.is_full() {
            Verdict::Draw
        } else {
            Verdict::Ongoing
        };
        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: u8, col: u8) -> Cell {
        Cell::new(row, col).unwrap()
    }

    #[test]
    fn test_taken_cell_rejected() {
        let position = TicTacToePosition::default().with_mark(cell(1, 1), PlayerId::FIRST);
        let err = TicTacToeEngine
            .next_state(&position, PlayerId::SECOND, &cell(1, 1))
            .unwrap_err();
        assert!(matches!(err, EngineError::IllegalMove { .. }));
    }

    #[test]
    fn test_verdicts_are_relative() {
        let grid = vec![vec![1, 1, 1], vec![-1, -1, 0], vec![0, 0, 0]];
        let position = TicTacToePosition::from_grid(&grid).unwrap();
        let history = History::new();

        assert_eq!(
            TicTacToeEngine.is_game_over(&history, &position, PlayerId::FIRST).unwrap(),
            Verdict::Win
        );
        assert_eq!(
            TicTacToeEngine.is_game_over(&history, &position, PlayerId::SECOND).unwrap(),
            Verdict::Loss
        );
        assert!(TicTacToeEngine
            .possible_moves(&position, PlayerId::SECOND, false)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_full_board_draw() {
        let grid = vec![vec![1, -1, 1], vec![1, -1, -1], vec![-1, 1, 1]];
        let position = TicTacToePosition::from_grid(&grid).unwrap();
        let verdict = TicTacToeEngine
            .is_game_over(&History::new(), &position, PlayerId::FIRST)
            .unwrap();
        assert_eq!(verdict, Verdict::Draw);
    }
}
