//! # zarena
//!
//! Turn-based board games behind one reset/step environment contract for
//! reinforcement-learning agents.
//!
//! ## Design Principles
//!
//! 1. **Stateless Engines**: Rule engines never remember anything between
//!    calls. They consume a complete position snapshot and return a new one.
//!
//! 2. **One Controller**: The reset/step lifecycle, history, rewards and
//!    termination live once in `TurnController`. Games only provide an
//!    engine, an action codec and a renderer.
//!
//! 3. **Whole-Value Updates**: A step either replaces the entire game state
//!    or leaves it untouched.
//!
//! ## Rewards
//!
//! - win `1.0`, loss `0.0`, draw `0.5`, non-terminal `0.0`
//! - an action outside the legal set returns `-1.0` and changes nothing
//! - steps after termination return `0.5` with `done = true`
//!
//! ## Modules
//!
//! - `core`: Players, actions, observations, history, RNG, config, errors
//! - `rules`: `RulesEngine` trait and terminal verdicts
//! - `env`: Game capability traits, `TurnController`, registry
//! - `games`: Chess, checkers and tic-tac-toe
//!
//! ## Example
//!
//! ```
//! use zarena::core::EnvConfig;
//! use zarena::env;
//!
//! let mut chess = env::make("Chess-v0", &EnvConfig::default()).unwrap();
//! chess.reset().unwrap();
//! assert_eq!(chess.action_space(), 4101);
//! assert_eq!(chess.legal_actions().len(), 20);
//! ```

pub mod core;
pub mod env;
pub mod games;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ActionId, ActionRecord, EnvConfig, EnvError, GameRng, Grid, History, Observation, PlayerId, Step,
    StepInfo,
};

pub use crate::env::{
    ActionCodec, EnvRegistry, Environment, Game, GameState, Phase, Policy, RenderMode, Renderer,
    TurnController,
};

pub use crate::rules::{RulesEngine, Verdict};
