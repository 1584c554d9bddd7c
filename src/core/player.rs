//! Player identification.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Turn-based environments alternate between
//! two players: `PlayerId::FIRST` (white, crosses) always opens the game,
//! `PlayerId::SECOND` answers.
//!
//! Each player also has a signed identifier (+1 / -1) matching the sign
//! convention used on boards, where positive cells belong to the first player.

use serde::{Deserialize, Serialize};

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The player that opens every game.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The player that answers the opening move.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player of a two-player game.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self.0 {
            0 => Self::SECOND,
            _ => Self::FIRST,
        }
    }

    /// Signed identifier: +1 for the first player, -1 for the second.
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self.0 {
            0 => 1,
            _ => -1,
        }
    }

    /// Player owning cells with the given sign, if any.
    #[must_use]
    pub const fn from_sign(sign: i8) -> Option<Self> {
        if sign > 0 {
            Some(Self::FIRST)
        } else if sign < 0 {
            Some(Self::SECOND)
        } else {
            None
        }
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use zarena::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(2).collect();
    /// assert_eq!(players, vec![PlayerId::FIRST, PlayerId::SECOND]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
