//! The per-game capability set.
//!
//! A game bundles the three pieces that differ between games (rule engine,
//! action codec, renderer) with the few facts the controller needs to start
//! an episode and describe a position. Everything else (the reset/step
//! lifecycle, history, rewards) lives once in `TurnController`.

use crate::core::error::Result;
use crate::core::observation::Grid;
use crate::rules::RulesEngine;

use super::codec::ActionCodec;
use super::render::Renderer;

/// Engine position type of a game.
pub type Position<G> = <<G as Game>::Engine as RulesEngine>::Position;

/// Adapter move type of a game.
pub type GameMove<G> = <<G as Game>::Codec as ActionCodec>::Move;

/// A game playable through the environment contract.
pub trait Game: Send + Sync + 'static {
    type Engine: RulesEngine;
    type Codec: ActionCodec<Native = <Self::Engine as RulesEngine>::Move>;
    type Renderer: Renderer<Position = Position<Self>, Move = GameMove<Self>>;

    /// Registry-style name of the game.
    fn name(&self) -> &'static str;

    fn engine(&self) -> &Self::Engine;

    fn codec(&self) -> &Self::Codec;

    fn renderer(&self) -> &Self::Renderer;

    /// Position loaded at reset.
    ///
    /// `board` overrides the standard starting layout; it is validated
    /// against the game's board shape and cell ids.
    fn initial_position(&self, board: Option<&Grid>) -> Result<Position<Self>>;

    /// Board of a position as a signed grid.
    fn grid(&self, position: &Position<Self>) -> Grid;

    /// Named rule flags of a position, reported in step info.
    fn flags(&self, _position: &Position<Self>) -> Vec<(&'static str, bool)> {
        Vec::new()
    }
}
