//! Checkers rules: English draughts on the dark squares.
//!
//! Men step and capture diagonally forward, kings in all four directions.
//! Captures are mandatory and a capturing piece keeps jumping while it can.
//! A man reaching the far row is crowned and its move ends there.
//!
//! A side with no move left loses. Threefold repetition of the arrangement
//! and a long run of quiet plies are draws.

use smallvec::SmallVec;

use crate::core::{EngineError, History, PlayerId};
use crate::rules::{RulesEngine, Verdict};

use super::board::{crown_row, forward, owner, Board, CheckersPosition, Square, KING_ID, MAN_ID};
use super::moves::{CheckersMove, Sequence};

const REPETITION_LIMIT: usize = 3;

/// Plies without a capture or man move before the game is drawn.
pub const QUIET_PLY_LIMIT: u16 = 80;

const ALL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

fn at(board: &Board, square: Square) -> i8 {
    board[square.row as usize][square.col as usize]
}

fn set(board: &mut Board, square: Square, id: i8) {
    board[square.row as usize][square.col as usize] = id;
}

fn directions(id: i8) -> SmallVec<[(i8, i8); 4]> {
    match owner(id) {
        Some(_) if id.abs() == KING_ID => ALL_DIRECTIONS.into_iter().collect(),
        Some(player) => {
            let dr = forward(player);
            [(dr, -1), (dr, 1)].into_iter().collect()
        }
        None => SmallVec::new(),
    }
}

/// The id `piece` becomes on landing at `square`.
fn landed(piece: i8, square: Square) -> i8 {
    match owner(piece) {
        Some(player) if piece.abs() == MAN_ID && square.row == crown_row(player) => KING_ID * player.sign(),
        _ => piece,
    }
}

fn extend_jumps(board: &Board, at_square: Square, piece: i8, path: &mut Sequence, out: &mut Vec<Sequence>) {
    let mut extended = false;
    for (dr, dc) in directions(piece) {
        let (Some(over), Some(land)) = (at_square.offset(dr, dc), at_square.offset(2 * dr, 2 * dc)) else {
            continue;
        };
        let victim = at(board, over);
        if victim == 0 || victim.signum() == piece.signum() || at(board, land) != 0 {
            continue;
        }
        extended = true;

        let moved = landed(piece, land);
        let mut next = *board;
        set(&mut next, at_square, 0);
        set(&mut next, over, 0);
        set(&mut next, land, moved);

        path.landings.push(land);
        path.captured.push(over);
        if moved != piece {
            out.push(path.clone());
        } else {
            extend_jumps(&next, land, moved, path, out);
        }
        path.landings.pop();
        path.captured.pop();
    }
    if !extended && path.is_capture() {
        out.push(path.clone());
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CheckersEngine;

impl CheckersEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Every capture sequence available to `player`.
    #[must_use]
    pub fn captures(board: &Board, player: PlayerId) -> Vec<Sequence> {
        let mut out = Vec::new();
        for from in Square::all() {
            let piece = at(board, from);
            if owner(piece) == Some(player) {
                extend_jumps(board, from, piece, &mut Sequence::new(from), &mut out);
            }
        }
        out
    }

    /// Single diagonal steps onto empty squares.
    #[must_use]
    pub fn steps(board: &Board, player: PlayerId) -> Vec<Sequence> {
        let mut out = Vec::new();
        for from in Square::all() {
            let piece = at(board, from);
            if owner(piece) != Some(player) {
                continue;
            }
            for (dr, dc) in directions(piece) {
                if let Some(to) = from.offset(dr, dc).filter(|&to| at(board, to) == 0) {
                    let mut sequence = Sequence::new(from);
                    sequence.landings.push(to);
                    out.push(sequence);
                }
            }
        }
        out
    }

    /// Sequences `player` may play: captures when any exist, steps otherwise.
    #[must_use]
    pub fn sequences(board: &Board, player: PlayerId) -> Vec<Sequence> {
        let captures = Self::captures(board, player);
        if captures.is_empty() {
            Self::steps(board, player)
        } else {
            captures
        }
    }

    /// Legal moves of `player`, one per distinct origin and destination.
    #[must_use]
    pub fn legal_moves(board: &Board, player: PlayerId) -> Vec<CheckersMove> {
        let mut moves: Vec<CheckersMove> = Vec::new();
        for sequence in Self::sequences(board, player) {
            let mv = sequence.as_move();
            if !moves.contains(&mv) {
                moves.push(mv);
            }
        }
        moves
    }

    /// Position after `player` plays `sequence`. The sequence is not validated.
    #[must_use]
    pub fn apply(position: &CheckersPosition, player: PlayerId, sequence: &Sequence) -> CheckersPosition {
        let mut board = position.board;
        let piece = at(&board, sequence.from);
        set(&mut board, sequence.from, 0);
        for &square in &sequence.captured {
            set(&mut board, square, 0);
        }
        let to = sequence.to();
        set(&mut board, to, landed(piece, to));

        let quiet = !sequence.is_capture() && piece.abs() == KING_ID;
        CheckersPosition {
            board,
            side_to_move: player.opponent(),
            quiet_plies: if quiet { position.quiet_plies.saturating_add(1) } else { 0 },
        }
    }
}

impl RulesEngine for CheckersEngine {
    type Position = CheckersPosition;
    type Move = CheckersMove;

    /// Crowns any man standing on its far row.
    fn update_state(&self, position: &CheckersPosition) -> Result<CheckersPosition, EngineError> {
        let mut board = position.board;
        for square in Square::all() {
            let piece = landed(at(&board, square), square);
            set(&mut board, square, piece);
        }
        Ok(CheckersPosition { board, ..*position })
    }

    /// With `attack` set, captures and steps are listed together, ignoring
    /// the obligation to capture.
    fn possible_moves(
        &self,
        position: &CheckersPosition,
        player: PlayerId,
        attack: bool,
    ) -> Result<Vec<CheckersMove>, EngineError> {
        if !attack {
            return Ok(Self::legal_moves(&position.board, player));
        }
        let mut moves: Vec<CheckersMove> = Vec::new();
        let all = Self::captures(&position.board, player)
            .into_iter()
            .chain(Self::steps(&position.board, player));
        for mv in all.map(|sequence| sequence.as_move()) {
            if !moves.contains(&mv) {
                moves.push(mv);
            }
        }
        Ok(moves)
    }

    /// Plays the first legal sequence joining `mv.from` to `mv.to`.
    fn next_state(
        &self,
        position: &CheckersPosition,
        player: PlayerId,
        mv: &CheckersMove,
    ) -> Result<CheckersPosition, EngineError> {
        let sequence = Self::sequences(&position.board, player)
            .into_iter()
            .find(|sequence| sequence.as_move() == *mv)
            .ok_or_else(|| EngineError::IllegalMove {
                mv: mv.to_string(),
                reason: "no legal step or capture joins these squares".to_string(),
            })?;
        Ok(Self::apply(position, player, &sequence))
    }

    fn is_game_over(
        &self,
        history: &History<CheckersPosition>,
        position: &CheckersPosition,
        player: PlayerId,
    ) -> Result<Verdict, EngineError> {
        let to_move = position.side_to_move;
        if Self::legal_moves(&position.board, to_move).is_empty() {
            return Ok(if player == to_move { Verdict::Loss } else { Verdict::Win });
        }
        let repeats = history.iter().filter(|past| past.same_arrangement(position)).count();
        if repeats >= REPETITION_LIMIT || position.quiet_plies >= QUIET_PLY_LIMIT {
            return Ok(Verdict::Draw);
        }
        Ok(Verdict::Ongoing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn mv(from: (u8, u8), to: (u8, u8)) -> CheckersMove {
        CheckersMove::new(sq(from.0, from.1), sq(to.0, to.1))
    }

    fn board_with(pieces: &[((u8, u8), i8)]) -> Board {
        let mut board = [[0i8; 8]; 8];
        for &((row, col), id) in pieces {
            board[row as usize][col as usize] = id;
        }
        board
    }

    #[test]
    fn test_opening_moves() {
        let position = CheckersPosition::default();
        let moves = CheckersEngine::legal_moves(&position.board, PlayerId::FIRST);
        assert_eq!(moves.len(), 7);
        assert!(moves.iter().all(|mv| mv.from.row == 5 && mv.to.row == 4));

        let replies = CheckersEngine::legal_moves(&position.board, PlayerId::SECOND);
        assert_eq!(replies.len(), 7);
        assert!(replies.iter().all(|mv| mv.from.row == 2 && mv.to.row == 3));
    }

    #[test]
    fn test_capture_is_forced() {
        let board = board_with(&[((5, 2), MAN_ID), ((7, 6), MAN_ID), ((4, 3), -MAN_ID), ((0, 7), -MAN_ID)]);
        let position = CheckersPosition::from_board(board);
        let engine = CheckersEngine;

        let legal = engine.possible_moves(&position, PlayerId::FIRST, false).unwrap();
        assert_eq!(legal, vec![mv((5, 2), (3, 4))]);

        let all = engine.possible_moves(&position, PlayerId::FIRST, true).unwrap();
        assert!(all.contains(&mv((5, 2), (3, 4))));
        assert!(all.contains(&mv((7, 6), (6, 5))));

        let err = engine.next_state(&position, PlayerId::FIRST, &mv((7, 6), (6, 5))).unwrap_err();
        assert!(matches!(err, EngineError::IllegalMove { .. }));
    }

    #[test]
    fn test_multi_jump() {
        let board = board_with(&[((6, 1), MAN_ID), ((5, 2), -MAN_ID), ((3, 4), -MAN_ID), ((0, 7), -KING_ID)]);
        let position = CheckersPosition::from_board(board);
        let engine = CheckersEngine;

        let legal = engine.possible_moves(&position, PlayerId::FIRST, false).unwrap();
        assert_eq!(legal, vec![mv((6, 1), (2, 5))]);
        assert_eq!(legal[0].to_string(), "b2xf6");

        let next = engine.next_state(&position, PlayerId::FIRST, &legal[0]).unwrap();
        assert_eq!(next.at(sq(2, 5)), MAN_ID);
        assert_eq!(next.at(sq(5, 2)), 0);
        assert_eq!(next.at(sq(3, 4)), 0);
        assert_eq!(next.count(PlayerId::SECOND), 1);
        assert_eq!(next.side_to_move, PlayerId::SECOND);
        assert_eq!(next.quiet_plies, 0);
    }

    #[test]
    fn test_crowning_ends_the_move() {
        let board = board_with(&[((2, 1), MAN_ID), ((1, 2), -MAN_ID), ((1, 4), -MAN_ID)]);
        let position = CheckersPosition::from_board(board);
        let engine = CheckersEngine;

        let legal = engine.possible_moves(&position, PlayerId::FIRST, false).unwrap();
        assert_eq!(legal, vec![mv((2, 1), (0, 3))]);

        let next = engine.next_state(&position, PlayerId::FIRST, &legal[0]).unwrap();
        assert_eq!(next.at(sq(0, 3)), KING_ID);
        assert_eq!(next.at(sq(1, 4)), -MAN_ID);
    }

    #[test]
    fn test_kings_move_backward() {
        let board = board_with(&[((4, 3), KING_ID), ((0, 7), -MAN_ID)]);
        let position = CheckersPosition::from_board(board);
        let moves = CheckersEngine::legal_moves(&position.board, PlayerId::FIRST);
        assert_eq!(moves.len(), 4);
        assert!(moves.contains(&mv((4, 3), (5, 4))));

        let next = CheckersEngine.next_state(&position, PlayerId::FIRST, &mv((4, 3), (5, 2))).unwrap();
        assert_eq!(next.quiet_plies, 1);
    }

    #[test]
    fn test_blocked_side_loses() {
        let board = board_with(&[((6, 1), -MAN_ID), ((7, 0), MAN_ID), ((7, 2), MAN_ID)]);
        let mut position = CheckersPosition::from_board(board);
        position.side_to_move = PlayerId::SECOND;
        let history = History::new();

        let engine = CheckersEngine;
        assert_eq!(engine.is_game_over(&history, &position, PlayerId::SECOND).unwrap(), Verdict::Loss);
        assert_eq!(engine.is_game_over(&history, &position, PlayerId::FIRST).unwrap(), Verdict::Win);
    }

    #[test]
    fn test_draw_rules() {
        let board = board_with(&[((4, 3), KING_ID), ((0, 7), -KING_ID)]);
        let engine = CheckersEngine;

        let mut quiet = CheckersPosition::from_board(board);
        quiet.quiet_plies = QUIET_PLY_LIMIT;
        assert_eq!(engine.is_game_over(&History::new(), &quiet, PlayerId::FIRST).unwrap(), Verdict::Draw);

        let position = CheckersPosition::from_board(board);
        let mut history = History::new();
        for plies in 0..3 {
            history.push(CheckersPosition {
                quiet_plies: plies * 4,
                ..position
            });
        }
        assert_eq!(engine.is_game_over(&history, &position, PlayerId::SECOND).unwrap(), Verdict::Draw);
        assert_eq!(engine.is_game_over(&History::new(), &position, PlayerId::SECOND).unwrap(), Verdict::Ongoing);
    }

    #[test]
    fn test_update_state_crowns() {
        let board = board_with(&[((0, 1), MAN_ID), ((7, 0), -MAN_ID)]);
        let position = CheckersEngine.update_state(&CheckersPosition::from_board(board)).unwrap();
        assert_eq!(position.at(sq(0, 1)), KING_ID);
        assert_eq!(position.at(sq(7, 0)), -KING_ID);
    }
}
