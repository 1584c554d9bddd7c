//! Error types surfaced by codecs, rule engines and environments.
//!
//! Invalid actions and post-terminal steps are not errors: the controller
//! turns them into reward signals. Everything here is fatal for the call that
//! raised it and propagates unmodified to the caller.

use thiserror::Error;

/// Structural failures of an action codec or a move notation converter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("action {action} outside action space of size {size}")]
    ActionOutOfRange { action: u32, size: usize },

    #[error("malformed move notation `{0}`")]
    MalformedNotation(String),

    #[error("square ({row}, {col}) outside the board")]
    SquareOutOfBounds { row: i32, col: i32 },
}

/// Failures raised by a rule engine call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("malformed move: {0}")]
    MalformedMove(#[from] CodecError),

    #[error("illegal move `{mv}`: {reason}")]
    IllegalMove { mv: String, reason: String },

    #[error("illegal position: {0}")]
    IllegalPosition(String),
}

/// Errors surfaced by environments and the registry.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("environment has not been reset")]
    NotStarted,

    #[error("engine failure: {0}")]
    Engine(#[from] EngineError),

    #[error("unknown environment `{0}`")]
    UnknownEnvironment(String),

    #[error("environment `{0}` is already registered")]
    DuplicateEnvironment(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("opening policy produced no move for the first player")]
    NoOpeningMove,

    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}

/// A move that cannot be decoded is an engine failure, never a silent drop.
impl From<CodecError> for EnvError {
    fn from(err: CodecError) -> Self {
        EnvError::Engine(EngineError::MalformedMove(err))
    }
}

pub type Result<T> = std::result::Result<T, EnvError>;
