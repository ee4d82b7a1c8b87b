//! Encoding options

use crate::error::{FormatError, FormatResult};
use serde::{Deserialize, Serialize};

/// Default gzip compression level
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// Options for writing a playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeOptions {
    /// Gzip compression level (0-9, default: 6)
    #[serde(default = "default_compression_level")]
    pub compression_level: u32,
}

fn default_compression_level() -> u32 {
    DEFAULT_COMPRESSION_LEVEL
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

impl EncodeOptions {
    /// Fastest compression; the body is still gzip-framed
    pub fn fast() -> Self {
        Self {
            compression_level: 1,
        }
    }

    /// Smallest output
    pub fn best() -> Self {
        Self {
            compression_level: 9,
        }
    }

    /// Set compression level
    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.compression_level = level;
        self
    }

    /// Validate options
    pub fn validate(&self) -> FormatResult<()> {
        if self.compression_level > 9 {
            return Err(FormatError::InvalidCompressionLevel(self.compression_level));
        }
        Ok(())
    }
}
