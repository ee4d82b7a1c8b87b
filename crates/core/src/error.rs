//! Error types for beatmap identity parsing
//!
//! Textual beatmap identities (hex keys and hex digests) are validated when a
//! beatmap is constructed, never later during encoding.

use thiserror::Error;

/// Result type alias for beatmap construction
pub type Result<T> = std::result::Result<T, BeatmapError>;

/// Errors raised while building a beatmap from textual or raw input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BeatmapError {
    /// Key is not a base-16 unsigned 32-bit number
    #[error("Invalid beatmap key: {0:?}")]
    InvalidKey(String),

    /// Hash is not exactly 40 hex characters
    #[error("Invalid beatmap hash: {0:?}")]
    InvalidHash(String),

    /// Raw digest does not have the required length
    #[error("Invalid hash length: expected {expected} bytes, got {actual}")]
    InvalidHashLength {
        /// Required digest length
        expected: usize,
        /// Length supplied
        actual: usize,
    },
}
