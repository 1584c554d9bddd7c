//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal moves for each position
//! - How moves transform positions
//! - Win/loss/draw conditions
//!
//! The environment controller calls into `RulesEngine` but never interprets
//! game-specific concepts directly.

pub mod engine;

pub use engine::{RulesEngine, Verdict};
