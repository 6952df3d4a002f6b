//! Error types for board generation and session setup.

use thiserror::Error;

/// Result type alias using [`GameError`].
pub type Result<T> = std::result::Result<T, GameError>;

/// Top-level error type for all core errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    /// Fewer than two distinct non-water positions were available.
    #[error("No valid spawn points: need 2 distinct candidates, found {candidates}")]
    NoValidSpawn {
        /// Number of distinct candidates that were available.
        candidates: usize,
    },

    /// Grid configuration rejected before generation.
    #[error("Invalid grid configuration: {0}")]
    InvalidConfig(String),

    /// Animation parameters rejected at construction.
    #[error("Invalid animation: {0}")]
    InvalidAnimation(String),

    /// Session config text is not valid RON for a session config.
    #[error("Failed to parse session config: {0}")]
    ConfigParse(#[source] ron::error::SpannedError),

    /// Session config could not be written as RON.
    #[error("Failed to write session config: {0}")]
    ConfigWrite(#[source] ron::Error),
}
