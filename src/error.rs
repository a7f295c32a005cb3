//! Error types for NanoDB
//!
//! Only real failures live here. Interpreter diagnostics such as a malformed
//! `insert` are ordinary [`Response`](crate::protocol::Response) values.

use thiserror::Error;

/// Result type alias using NanoError
pub type Result<T> = std::result::Result<T, NanoError>;

/// Unified error type for NanoDB operations
#[derive(Debug, Error)]
pub enum NanoError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
