//! Question provider error types.

use thiserror::Error;

use crate::game::entities::QuestionError;

/// Failures of the remote generator. All of them end in the fallback pool;
/// none reach the game.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The HTTP call could not be made or timed out
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },

    /// The completion carried no message content
    #[error("completion had no content")]
    EmptyCompletion,

    /// The content was not the JSON shape asked for
    #[error("malformed question payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The prompt text was blank
    #[error("question text is empty")]
    EmptyPrompt,

    /// A kept answer's text was blank; the index is its board slot
    #[error("answer {0} has no text")]
    EmptyAnswer(usize),

    /// A kept answer's score was NaN or infinite
    #[error("answer {0} has a non-finite score")]
    InvalidScore(usize),

    /// Fewer candidates than board slots
    #[error("need 4 answers, got {0}")]
    TooFewAnswers(usize),

    /// The kept answers don't make a valid board
    #[error("invalid board: {0}")]
    InvalidBoard(#[from] QuestionError),
}

/// Fallback pool errors
#[derive(Debug, Eq, Error, PartialEq)]
pub enum PoolError {
    #[error("fallback pool has no questions")]
    Empty,
}

/// Configuration errors
#[derive(Debug, Eq, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Result type for generator calls
pub type GeneratorResult<T> = Result<T, GeneratorError>;
