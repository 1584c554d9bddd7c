//! Stateless chess rules.
//!
//! Mailbox move generation over the signed-id board: offset tables for the
//! stepping pieces, rays for the sliders. A move is legal when the mover's
//! king is not attacked after it; sides without a king on the board have no
//! king-safety constraint.
//!
//! Supported: castling (rights, empty path, no attacked transit squares),
//! double pawn pushes, automatic queen promotion. Not supported: en passant,
//! under-promotion, the fifty-move rule.
//!
//! Game over:
//! - checkmate of the queried player: loss
//! - checkmate of the opponent: win
//! - stalemate of the side to move, threefold repetition, insufficient
//!   material: draw

use smallvec::SmallVec;

use crate::core::{EngineError, History, PlayerId};
use crate::rules::{RulesEngine, Verdict};

use super::moves::{ChessMove, SpecialMove, Square};
use super::notation::Notation;
use super::pieces::{owner, Board, Color, BISHOP_ID, KING_ID, KNIGHT_ID, PAWN_ID, QUEEN_ID, ROOK_ID};
use super::position::{CastleRights, ChessPosition};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Move buffer sized for a typical middlegame.
pub type MoveBuf = SmallVec<[ChessMove; 64]>;

/// Threefold repetition.
const REPETITION_LIMIT: usize = 3;

#[derive(Clone, Copy, Debug, Default)]
pub struct ChessEngine;

impl ChessEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Coordinate moves of `color`, without king safety or castling.
    #[must_use]
    pub fn pseudo_legal_moves(board: &Board, color: Color) -> MoveBuf {
        let mut moves = MoveBuf::new();
        for from in Square::all() {
            let id = at(board, from);
            if owner(id) == Some(color) {
                piece_moves(board, from, id, color, &mut moves);
            }
        }
        moves
    }

    /// Legal moves of `color`: coordinate moves first, then castling.
    #[must_use]
    pub fn legal_moves(position: &ChessPosition, color: Color) -> Vec<ChessMove> {
        let mut legal: Vec<ChessMove> = Self::pseudo_legal_moves(&position.board, color)
            .into_iter()
            .filter(|mv| !king_attacked(&apply_to_board(&position.board, mv), color))
            .collect();
        legal.extend(castle_moves(position, color));
        legal
    }

    /// Check if `square` is attacked by any piece of `by`.
    #[must_use]
    pub fn is_attacked(board: &Board, square: Square, by: Color) -> bool {
        let sign = by.sign();
        let pawn_row = -by.pawn_direction();
        step_hits(board, square, &KNIGHT_OFFSETS, KNIGHT_ID * sign)
            || step_hits(board, square, &KING_OFFSETS, KING_ID * sign)
            || step_hits(board, square, &[(pawn_row, -1), (pawn_row, 1)], PAWN_ID * sign)
            || ray_hits(board, square, &ORTHOGONAL, [ROOK_ID * sign, QUEEN_ID * sign])
            || ray_hits(board, square, &DIAGONAL, [BISHOP_ID * sign, QUEEN_ID * sign])
    }

    /// Position after `color` plays `mv`. The move is not validated.
    #[must_use]
    pub fn apply(position: &ChessPosition, color: Color, mv: &ChessMove) -> ChessPosition {
        let board = apply_to_board(&position.board, mv);
        let mut castling = position.castling;

        match *mv {
            ChessMove::Normal { from, to } => {
                let piece = at(&position.board, from);
                if piece.abs() == KING_ID {
                    if let Some(mover) = owner(piece) {
                        castling[mover.index()] = CastleRights::NONE;
                    }
                }
                for square in [from, to] {
                    match (square.row, square.col) {
                        (7, 0) => castling[Color::White.index()].queen_side = false,
                        (7, 7) => castling[Color::White.index()].king_side = false,
                        (0, 0) => castling[Color::Black.index()].queen_side = false,
                        (0, 7) => castling[Color::Black.index()].king_side = false,
                        _ => {}
                    }
                }
            }
            ChessMove::Special(special) => {
                if let Some((castler, _)) = special.castle_side() {
                    castling[castler.index()] = CastleRights::NONE;
                }
            }
        }

        ChessPosition {
            checked: check_flags(&board),
            board,
            side_to_move: color.opponent(),
            castling,
        }
    }

    /// Check if the board holds too little material for either side to mate.
    #[must_use]
    pub fn insufficient_material(board: &Board) -> bool {
        let mut minors = 0;
        for &id in board.iter().flatten() {
            match id.abs() {
                0 | KING_ID => {}
                BISHOP_ID | KNIGHT_ID => minors += 1,
                _ => return false,
            }
        }
        minors <= 1
    }

    fn is_checkmated(position: &ChessPosition, color: Color) -> bool {
        king_attacked(&position.board, color) && Self::legal_moves(position, color).is_empty()
    }
}

impl RulesEngine for ChessEngine {
    type Position = ChessPosition;
    type Move = Notation;

    fn update_state(&self, position: &ChessPosition) -> Result<ChessPosition, EngineError> {
        let checked = check_flags(&position.board);
        if checked.iter().all(|&c| c) {
            return Err(EngineError::IllegalPosition("both kings are in check".to_string()));
        }
        Ok(ChessPosition {
            checked,
            ..position.clone()
        })
    }

    fn possible_moves(
        &self,
        position: &ChessPosition,
        player: PlayerId,
        attack: bool,
    ) -> Result<Vec<Notation>, EngineError> {
        let color = Color::from_player(player);
        let moves = if attack {
            Self::pseudo_legal_moves(&position.board, color).into_vec()
        } else {
            Self::legal_moves(position, color)
        };
        Ok(moves.iter().map(Notation::from).collect())
    }

    fn next_state(
        &self,
        position: &ChessPosition,
        player: PlayerId,
        mv: &Notation,
    ) -> Result<ChessPosition, EngineError> {
        let color = Color::from_player(player);
        let parsed = mv.parse()?;
        if !Self::legal_moves(position, color).contains(&parsed) {
            return Err(EngineError::IllegalMove {
                mv: mv.to_string(),
                reason: format!("not a legal move for {}", color.name()),
            });
        }
        Ok(Self::apply(position, color, &parsed))
    }

    fn is_game_over(
        &self,
        history: &History<ChessPosition>,
        position: &ChessPosition,
        player: PlayerId,
    ) -> Result<Verdict, EngineError> {
        let color = Color::from_player(player);
        if Self::is_checkmated(position, color) {
            return Ok(Verdict::Loss);
        }
        if Self::is_checkmated(position, color.opponent()) {
            return Ok(Verdict::Win);
        }

        let to_move = position.side_to_move;
        let stalemate =
            !king_attacked(&position.board, to_move) && Self::legal_moves(position, to_move).is_empty();
        if stalemate
            || history.occurrences(position) >= REPETITION_LIMIT
            || Self::insufficient_material(&position.board)
        {
            return Ok(Verdict::Draw);
        }
        Ok(Verdict::Ongoing)
    }

    fn in_check(&self, position: &ChessPosition, player: PlayerId) -> bool {
        position.is_checked(Color::from_player(player))
    }
}

fn at(board: &Board, square: Square) -> i8 {
    board[square.row as usize][square.col as usize]
}

fn set(board: &mut Board, square: Square, id: i8) {
    board[square.row as usize][square.col as usize] = id;
}

fn piece_moves(board: &Board, from: Square, id: i8, color: Color, out: &mut MoveBuf) {
    match id.abs() {
        PAWN_ID => pawn_moves(board, from, color, out),
        KNIGHT_ID => step_moves(board, from, color, &KNIGHT_OFFSETS, out),
        KING_ID => step_moves(board, from, color, &KING_OFFSETS, out),
        BISHOP_ID => slide_moves(board, from, color, &DIAGONAL, out),
        ROOK_ID => slide_moves(board, from, color, &ORTHOGONAL, out),
        QUEEN_ID => {
            slide_moves(board, from, color, &ORTHOGONAL, out);
            slide_moves(board, from, color, &DIAGONAL, out);
        }
        _ => {}
    }
}

fn step_moves(board: &Board, from: Square, color: Color, offsets: &[(i8, i8)], out: &mut MoveBuf) {
    for &(dr, dc) in offsets {
        if let Some(to) = from.offset(dr, dc) {
            if owner(at(board, to)) != Some(color) {
                out.push(ChessMove::normal(from, to));
            }
        }
    }
}

fn slide_moves(board: &Board, from: Square, color: Color, directions: &[(i8, i8)], out: &mut MoveBuf) {
    for &(dr, dc) in directions {
        let mut current = from;
        while let Some(to) = current.offset(dr, dc) {
            let target = at(board, to);
            if owner(target) == Some(color) {
                break;
            }
            out.push(ChessMove::normal(from, to));
            if target != 0 {
                break;
            }
            current = to;
        }
    }
}

fn pawn_moves(board: &Board, from: Square, color: Color, out: &mut MoveBuf) {
    let dir = color.pawn_direction();
    if let Some(one) = from.offset(dir, 0) {
        if at(board, one) == 0 {
            out.push(ChessMove::normal(from, one));
            if from.row == color.pawn_start_row() {
                if let Some(two) = one.offset(dir, 0) {
                    if at(board, two) == 0 {
                        out.push(ChessMove::normal(from, two));
                    }
                }
            }
        }
    }
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc) {
            if owner(at(board, to)) == Some(color.opponent()) {
                out.push(ChessMove::normal(from, to));
            }
        }
    }
}

fn step_hits(board: &Board, square: Square, offsets: &[(i8, i8)], id: i8) -> bool {
    offsets
        .iter()
        .any(|&(dr, dc)| square.offset(dr, dc).is_some_and(|sq| at(board, sq) == id))
}

fn ray_hits(board: &Board, square: Square, directions: &[(i8, i8)], attackers: [i8; 2]) -> bool {
    directions.iter().any(|&(dr, dc)| {
        let mut current = square;
        while let Some(next) = current.offset(dr, dc) {
            let id = at(board, next);
            if id != 0 {
                return attackers.contains(&id);
            }
            current = next;
        }
        false
    })
}

fn king_attacked(board: &Board, color: Color) -> bool {
    let king = KING_ID * color.sign();
    Square::all()
        .find(|&square| at(board, square) == king)
        .is_some_and(|square| ChessEngine::is_attacked(board, square, color.opponent()))
}

fn check_flags(board: &Board) -> [bool; 2] {
    [king_attacked(board, Color::White), king_attacked(board, Color::Black)]
}

/// Columns that must be empty for castling, per side.
const KING_SIDE_BETWEEN: &[u8] = &[5, 6];
const QUEEN_SIDE_BETWEEN: &[u8] = &[1, 2, 3];

/// Columns the king crosses or lands on, per side.
const KING_SIDE_TRANSIT: &[u8] = &[5, 6];
const QUEEN_SIDE_TRANSIT: &[u8] = &[3, 2];

/// Rook column, empty columns and transit columns of a castling move.
fn castle_path(king_side: bool) -> (u8, &'static [u8], &'static [u8]) {
    if king_side {
        (7, KING_SIDE_BETWEEN, KING_SIDE_TRANSIT)
    } else {
        (0, QUEEN_SIDE_BETWEEN, QUEEN_SIDE_TRANSIT)
    }
}

fn castle_moves(position: &ChessPosition, color: Color) -> SmallVec<[ChessMove; 2]> {
    let mut moves = SmallVec::new();
    let board = &position.board;
    let row = color.home_row();
    let sign = color.sign();
    let enemy = color.opponent();

    let king_home = Square { row, col: 4 };
    if at(board, king_home) != KING_ID * sign || ChessEngine::is_attacked(board, king_home, enemy) {
        return moves;
    }

    let rights = position.rights(color);
    for king_side in [true, false] {
        if !rights.side(king_side) {
            continue;
        }
        let (rook_col, between, transit) = castle_path(king_side);
        let rook_ok = at(board, Square { row, col: rook_col }) == ROOK_ID * sign;
        let path_clear = between.iter().all(|&col| at(board, Square { row, col }) == 0);
        let path_safe = transit
            .iter()
            .all(|&col| !ChessEngine::is_attacked(board, Square { row, col }, enemy));
        if rook_ok && path_clear && path_safe {
            moves.push(ChessMove::Special(SpecialMove::castle(color, king_side)));
        }
    }
    moves
}

fn apply_to_board(board: &Board, mv: &ChessMove) -> Board {
    let mut next = *board;
    match *mv {
        ChessMove::Normal { from, to } => {
            let mut piece = at(board, from);
            if let Some(color) = owner(piece) {
                if piece.abs() == PAWN_ID && to.row == color.promotion_row() {
                    piece = QUEEN_ID * color.sign();
                }
            }
            set(&mut next, from, 0);
            set(&mut next, to, piece);
        }
        ChessMove::Special(special) => {
            if let Some((color, king_side)) = special.castle_side() {
                let row = color.home_row();
                let sign = color.sign();
                let (rook_from, king_to, rook_to) = if king_side { (7, 6, 5) } else { (0, 2, 3) };
                set(&mut next, Square { row, col: 4 }, 0);
                set(&mut next, Square { row, col: rook_from }, 0);
                set(&mut next, Square { row, col: king_to }, KING_ID * sign);
                set(&mut next, Square { row, col: rook_to }, ROOK_ID * sign);
            }
        }
    }
    next
}
