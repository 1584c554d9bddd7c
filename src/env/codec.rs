//! Action codec trait.
//!
//! A codec is the bijection between a game's dense action ids and its move
//! descriptors, plus a lossless converter between those descriptors and the
//! engine's native notation. Codecs never check legality, only structural
//! validity.

use std::fmt::{Debug, Display};

use crate::core::action::ActionId;
use crate::core::error::CodecError;

/// Bijective action encoding for one game.
pub trait ActionCodec: Send + Sync {
    /// The adapter's move vocabulary.
    type Move: Clone + Debug + Display + PartialEq + Send + Sync + 'static;

    /// The engine's move notation.
    type Native;

    /// Size of the action space; ids are `0..action_space()`.
    fn action_space(&self) -> usize;

    /// Encode a move. Total over every structurally valid move.
    fn move_to_action(&self, mv: &Self::Move) -> ActionId;

    /// Decode an action id. Fails only for ids outside the action space.
    fn action_to_move(&self, action: ActionId) -> Result<Self::Move, CodecError>;

    /// Convert a move into engine notation.
    fn to_native(&self, mv: &Self::Move) -> Result<Self::Native, CodecError>;

    /// Convert engine notation back into a move.
    fn from_native(&self, native: &Self::Native) -> Result<Self::Move, CodecError>;

    /// The resignation move, for games that have one.
    fn resignation(&self) -> Option<Self::Move> {
        None
    }

    /// Check if a move is a resignation.
    fn is_resignation(&self, mv: &Self::Move) -> bool {
        self.resignation().as_ref() == Some(mv)
    }
}
