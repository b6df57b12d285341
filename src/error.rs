//! Error types for architecture identification.
//!
//! Detection itself is infallible and reports unrecognized targets as
//! [`Architecture::Unknown`](crate::arch::Architecture::Unknown). These errors
//! only come from parsing names, the fail-fast helpers and the CLI.

use thiserror::Error;

/// Result type alias for identification operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type
#[derive(Error, Debug)]
pub enum Error {
    /// Name is not one of the canonical architecture identifiers
    #[error("Unknown architecture name: {name} (expected one of: {expected})")]
    UnknownArchitectureName {
        /// Name that failed to parse
        name: String,
        /// Comma-separated list of accepted names
        expected: String,
    },

    /// Target could not be mapped to a supported architecture
    #[error("Unsupported architecture for target: {target}")]
    UnsupportedArchitecture {
        /// Description of the target that was classified
        target: String,
    },

    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
