//! The environment layer: game capability traits, the turn controller and
//! the registry of playable games.

pub mod codec;
pub mod controller;
pub mod environment;
pub mod game;
pub mod policy;
pub mod registry;
pub mod render;
pub mod state;

pub use codec::ActionCodec;
pub use controller::{Phase, TurnController};
pub use environment::Environment;
pub use game::{Game, GameMove, Position};
pub use policy::{FirstLegalPolicy, Policy, UniformPolicy};
pub use registry::{global, make, EnvFactory, EnvRegistry};
pub use render::{RenderMode, Renderer};
pub use state::{GameState, GameStateStore};
