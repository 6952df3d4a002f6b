//! # Thrive Development Tools
//!
//! Command-line tools for development:
//! - Session config validation
//! - Board previews (ASCII or JSON)

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod preview;
pub mod validate;

use thiserror::Error;
use thrive_core::error::GameError;

/// Errors reported by the tools.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Failed to read a file.
    #[error("Failed to read '{path}': {source}")]
    Io {
        /// Path to the file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A config file is not valid RON for a session config.
    #[error("Failed to parse '{path}': {source}")]
    Parse {
        /// Path to the file.
        path: String,
        /// Underlying parse error.
        #[source]
        source: ron::error::SpannedError,
    },

    /// Config or session rejected by the core.
    #[error(transparent)]
    Game(#[from] GameError),

    /// JSON output failed.
    #[error("Failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;
