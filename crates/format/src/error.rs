//! Format error types
//!
//! Every error here is fatal to the read or write call that raised it. The
//! codec never recovers, skips, or returns a partially decoded playlist.

use std::io;
use thiserror::Error;

/// Result type for playlist format operations
pub type FormatResult<T> = Result<T, FormatError>;

/// Errors that can occur while reading or writing a `Blist.v3` playlist
#[derive(Debug, Error)]
pub enum FormatError {
    /// The first 8 bytes are not the `Blist.v3` magic token
    #[error("Invalid magic number: {found:02x?}")]
    InvalidMagicNumber {
        /// Bytes actually found (may be shorter than 8 at end of input)
        found: Vec<u8>,
    },

    /// The host is big-endian; the format is little-endian only
    #[error("Unsupported endianness: Blist.v3 requires a little-endian host")]
    UnsupportedEndianness,

    /// An entry carried an unknown type tag
    #[error("Invalid beatmap type: {0}")]
    InvalidBeatmapType(u8),

    /// The gzip body is malformed
    #[error("Decompression error: {0}")]
    Decompression(String),

    /// The stream ended before a declared length or entry count was satisfied
    #[error("Truncated stream while reading {what}")]
    Truncated {
        /// Field being read when input ran out
        what: &'static str,
    },

    /// A string field was not valid UTF-8
    #[error("Invalid UTF-8 in {what}")]
    InvalidUtf8 {
        /// Field being decoded
        what: &'static str,
    },

    /// A string does not fit its length prefix
    #[error("String too long: {len} bytes (max {max})")]
    StringTooLong {
        /// Encoded length in bytes
        len: usize,
        /// Largest length the prefix can express
        max: usize,
    },

    /// A blob does not fit its 32-bit length prefix
    #[error("Blob too long: {len} bytes")]
    BlobTooLong {
        /// Blob length in bytes
        len: usize,
    },

    /// More entries than a 32-bit count can express
    #[error("Too many entries: {count}")]
    TooManyEntries {
        /// Number of entries in the playlist
        count: usize,
    },

    /// Compression level outside 0..=9
    #[error("Invalid compression level: {0} (expected 0-9)")]
    InvalidCompressionLevel(u32),

    /// Underlying I/O failure
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl FormatError {
    /// Classify an I/O error raised while reading `what` from the body
    ///
    /// End of input becomes [`FormatError::Truncated`]; corrupt deflate or
    /// gzip framing becomes [`FormatError::Decompression`].
    pub fn from_read(err: io::Error, what: &'static str) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => FormatError::Truncated { what },
            io::ErrorKind::InvalidData | io::ErrorKind::InvalidInput => {
                FormatError::Decompression(err.to_string())
            }
            _ => FormatError::Io(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_read_eof_is_truncated() {
        let err = io::Error::new(io::ErrorKind::UnexpectedEof, "eof");
        assert!(matches!(
            FormatError::from_read(err, "title"),
            FormatError::Truncated { what: "title" }
        ));
    }

    #[test]
    fn test_from_read_invalid_data_is_decompression() {
        let err = io::Error::new(io::ErrorKind::InvalidData, "corrupt deflate stream");
        let mapped = FormatError::from_read(err, "u8");
        match mapped {
            FormatError::Decompression(msg) => assert!(msg.contains("corrupt deflate")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_from_read_other_is_io() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(FormatError::from_read(err, "u8"), FormatError::Io(_)));
    }

    #[test]
    fn test_error_display() {
        let err = FormatError::InvalidMagicNumber {
            found: b"Blist.v2".to_vec(),
        };
        assert!(err.to_string().contains("Invalid magic number"));

        let err = FormatError::InvalidBeatmapType(7);
        assert_eq!(err.to_string(), "Invalid beatmap type: 7");

        let err = FormatError::StringTooLong { len: 300, max: 255 };
        assert!(err.to_string().contains("300"));
    }
}
