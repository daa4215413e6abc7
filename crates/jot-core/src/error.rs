//! Error types for jot-core

use thiserror::Error;

/// Result type alias using jot-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur talking to the notes service
#[derive(Error, Debug)]
pub enum Error {
    /// Transport or decoding failure reported by the HTTP client
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a status the operation does not accept
    #[error("Unexpected HTTP {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// User-visible failure of a session operation.
///
/// Every variant renders as one fixed message; details stay in the logs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationError {
    #[error("Could not fetch notes.")]
    FetchListFailed,
    #[error("Could not create note")]
    CreateFailed,
    #[error("Could not update note")]
    UpdateFailed,
    #[error("Could not delete note.")]
    DeleteFailed,
}
