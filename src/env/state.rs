//! Adapter-owned game state.
//!
//! ## GameState
//!
//! Immutable aggregate of everything the engine does not remember between
//! calls: the engine position snapshot plus turn bookkeeping (player to act,
//! completed rounds, resignation). Transitions are pure functions returning
//! a new value.
//!
//! ## GameStateStore
//!
//! Holds the current `GameState` and swaps it wholesale. There is no way to
//! patch a field of the stored state in place.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;

/// Complete state of one episode at one point in time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState<P> {
    /// Engine snapshot (board and rule flags).
    pub position: P,

    /// Player to act.
    pub player: PlayerId,

    /// Completed rounds: incremented each time play returns to the first player.
    pub move_count: u32,

    /// Player who resigned, if the episode ended by resignation.
    pub resigned: Option<PlayerId>,
}

impl<P> GameState<P> {
    /// Fresh state with the first player to act.
    #[must_use]
    pub fn new(position: P) -> Self {
        Self {
            position,
            player: PlayerId::FIRST,
            move_count: 0,
            resigned: None,
        }
    }

    /// Same bookkeeping, new engine snapshot.
    #[must_use]
    pub fn with_position(self, position: P) -> Self {
        Self { position, ..self }
    }

    /// Hand the turn to the opponent.
    ///
    /// The move counter advances once per round, when play returns to the
    /// first player.
    #[must_use]
    pub fn advance_turn(self) -> Self {
        let player = self.player.opponent();
        let move_count = if player == PlayerId::FIRST {
            self.move_count + 1
        } else {
            self.move_count
        };
        Self {
            player,
            move_count,
            ..self
        }
    }

    /// Mark the player to act as resigned.
    #[must_use]
    pub fn with_resignation(self) -> Self {
        let resigned = Some(self.player);
        Self { resigned, ..self }
    }

    /// Signed identifier of the player to act.
    #[must_use]
    pub fn sign(&self) -> i8 {
        self.player.sign()
    }
}

/// Holder of the current state, replaced only as a whole.
#[derive(Clone, Debug)]
pub struct GameStateStore<P> {
    current: Option<GameState<P>>,
}

impl<P> Default for GameStateStore<P> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<P> GameStateStore<P> {
    /// Empty store (no episode started).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state, if an episode has started.
    #[must_use]
    pub fn get(&self) -> Option<&GameState<P>> {
        self.current.as_ref()
    }

    /// Replace the whole state, returning the previous one.
    pub fn replace(&mut self, state: GameState<P>) -> Option<GameState<P>> {
        self.current.replace(state)
    }
}
