//! Errors surfaced to callers of the session and service layers

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("position ({row}, {col}) is outside the 15x15 board")]
    OutOfRange { row: i32, col: i32 },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: u8, col: u8 },

    #[error("game is already over")]
    GameAlreadyOver,

    #[error("undo limit of {limit} reached")]
    UndoLimitExceeded { limit: u32 },

    #[error("cannot undo {requested} moves, only {available} played")]
    InsufficientHistory { requested: usize, available: usize },

    #[error("undo steps must be at least 1")]
    InvalidUndoSteps,

    #[error("hint limit of {limit} reached")]
    HintLimitExceeded { limit: u32 },

    #[error("session {0} not found")]
    SessionNotFound(Uuid),

    #[error("no legal move available")]
    NoLegalMove,

    #[error("unknown difficulty '{0}', expected easy, medium or hard")]
    UnknownDifficulty(String),
}

impl GameError {
    /// HTTP-style status code for the web boundary
    pub fn status_code(&self) -> u16 {
        match self {
            GameError::SessionNotFound(_) => 404,
            GameError::NoLegalMove => 500,
            _ => 400,
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
