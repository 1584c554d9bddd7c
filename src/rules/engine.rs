//! Rules engine trait for game implementations.
//!
//! Engines are the rule authority of one game:
//! - Which moves a player may make in a position
//! - Which position a move leads to
//! - Whether the game is over, and for whom
//!
//! Engines are stateless. Every call consumes a complete position snapshot
//! and, where it produces one, returns a complete new snapshot. Moves are
//! exchanged in the engine's own notation; the game's `ActionCodec` converts
//! to and from it.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::error::EngineError;
use crate::core::history::History;
use crate::core::player::PlayerId;

/// Terminal verdict for one queried player.
///
/// Engines encode it as a small integer on the wire: 0 = ongoing,
/// 1 = loss, 2 = draw, 3 = win.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The game continues.
    Ongoing,
    /// The queried player has lost.
    Loss,
    /// The game is drawn.
    Draw,
    /// The queried player has won.
    Win,
}

impl Verdict {
    /// Integer code of this verdict.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Verdict::Ongoing => 0,
            Verdict::Loss => 1,
            Verdict::Draw => 2,
            Verdict::Win => 3,
        }
    }

    /// Decode an integer verdict. Unknown codes are `None`.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Verdict::Ongoing),
            1 => Some(Verdict::Loss),
            2 => Some(Verdict::Draw),
            3 => Some(Verdict::Win),
            _ => None,
        }
    }

    /// Check if the verdict ends the game.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Verdict::Ongoing)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `possible_moves`: Return empty vec if the player can't move
/// - `next_state`: Must be deterministic; never mutate the input
/// - `is_game_over`: Answers for the queried player only
/// - `in_check`: Pure query of the snapshot, no move generation
pub trait RulesEngine: Send + Sync {
    /// Complete position snapshot exchanged with the engine.
    type Position: Clone + std::fmt::Debug + PartialEq + Send + Sync + Serialize + DeserializeOwned + 'static;

    /// Move in the engine's native notation.
    type Move: Clone + std::fmt::Debug + PartialEq + Send + Sync + 'static;

    /// Recompute derived fields (check flags and the like) of a position.
    fn update_state(&self, position: &Self::Position) -> Result<Self::Position, EngineError>;

    /// Moves available to `player`.
    ///
    /// With `attack` set, returns pseudo-legal moves: squares the player's
    /// pieces reach without filtering moves that expose their own king.
    fn possible_moves(
        &self,
        position: &Self::Position,
        player: PlayerId,
        attack: bool,
    ) -> Result<Vec<Self::Move>, EngineError>;

    /// Position reached when `player` plays `mv`.
    fn next_state(
        &self,
        position: &Self::Position,
        player: PlayerId,
        mv: &Self::Move,
    ) -> Result<Self::Position, EngineError>;

    /// Terminal verdict for `player`, given the positions played so far.
    fn is_game_over(
        &self,
        history: &History<Self::Position>,
        position: &Self::Position,
        player: PlayerId,
    ) -> Result<Verdict, EngineError>;

    /// Whether `player` is currently in check.
    ///
    /// Games without the notion of check return false.
    fn in_check(&self, _position: &Self::Position, _player: PlayerId) -> bool {
        false
    }
}
