//! Error types for termfolio.

use std::io;

/// Errors produced by the termfolio crates.
///
/// User-input mistakes at the prompt are never errors; they become response
/// blocks in the output log. These variants cover loading and host faults.
#[derive(Debug, thiserror::Error)]
pub enum TermfolioError {
    #[error("config error: {0}")]
    Config(String),

    #[error("project error: {0}")]
    Project(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TermfolioError>;
