//! Error types for the circuit_core library.

use std::io;
use uuid::Uuid;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for circuit_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Program has no nonzero-duration exercises anywhere
    ///
    /// This is a valid-but-unplayable program, not a malformed one;
    /// callers should surface an exit affordance rather than crash.
    #[error("program has no playable steps")]
    EmptyTimeline,

    /// No program with the given id exists in the library
    #[error("program not found: {0}")]
    ProgramNotFound(Uuid),

    /// No program with the given name exists in the library
    #[error("unknown program: {0}")]
    UnknownProgram(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
