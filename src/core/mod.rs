//! Core environment types: players, actions, observations, history, RNG,
//! configuration and errors.
//!
//! This module contains the building blocks that are game-agnostic.
//! Games plug into them via the `Game` trait rather than modifying the core.

pub mod action;
pub mod config;
pub mod error;
pub mod history;
pub mod observation;
pub mod player;
pub mod rng;

pub use action::{ActionId, ActionRecord};
pub use config::{EnvConfig, PLAYER_COUNT};
pub use error::{CodecError, EngineError, EnvError, Result};
pub use history::History;
pub use observation::{
    Grid, Observation, Step, StepInfo, DRAW_REWARD, INVALID_ACTION_REWARD, LOSS_REWARD, WIN_REWARD,
};
pub use player::PlayerId;
pub use rng::GameRng;
