//! Conversion error types

use std::io;
use thiserror::Error;

/// Errors that can occur while converting a legacy playlist
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The legacy `image` field is not valid base64
    #[error("Invalid base64 cover: {0}")]
    InvalidBase64(String),

    /// The decoded cover is neither PNG nor JPEG
    #[error("Invalid cover format: {mime}")]
    InvalidCover {
        /// Detected MIME type of the decoded bytes
        mime: &'static str,
    },

    /// A song hash is not 40 hex characters
    #[error("Invalid map hash: {0}")]
    InvalidMapHash(String),

    /// A song key is not a base-16 catalog key
    #[error("Invalid map key: {0}")]
    InvalidMapKey(String),

    /// The legacy document is not valid JSON of the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl ConversionError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
