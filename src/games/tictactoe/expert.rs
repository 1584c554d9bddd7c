//! Rule-based tic-tac-toe opponent.

use crate::core::{ActionId, GameRng};
use crate::env::{ActionCodec, Game, GameState, Policy};

use super::board::{Cell, TicTacToePosition};
use super::game::TicTacToe;

const CENTER: Cell = Cell { row: 1, col: 1 };

/// Win if possible, else block, else take the center, else play randomly.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExpertPolicy;

impl ExpertPolicy {
    fn completing(
        game: &TicTacToe,
        state: &GameState<TicTacToePosition>,
        legal: &[ActionId],
        for_opponent: bool,
    ) -> Option<ActionId> {
        let player = if for_opponent {
            state.player.opponent()
        } else {
            state.player
        };
        legal.iter().copied().find(|&action| {
            game.codec()
                .action_to_move(action)
                .is_ok_and(|cell| state.position.with_mark(cell, player).has_line(player))
        })
    }
}

impl Policy<TicTacToe> for ExpertPolicy {
    fn choose_action(
        &self,
        game: &TicTacToe,
        state: &GameState<TicTacToePosition>,
        legal: &[ActionId],
        rng: &mut GameRng,
    ) -> Option<ActionId> {
        let center = game.codec().move_to_action(&CENTER);
        Self::completing(game, state, legal, false)
            .or_else(|| Self::completing(game, state, legal, true))
            .or_else(|| legal.contains(&center).then_some(center))
            .or_else(|| rng.choose(legal).copied())
    }
}
