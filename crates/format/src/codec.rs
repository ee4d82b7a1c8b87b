//! Primitive codec for the playlist body
//!
//! Operates on the decompressed byte stream that follows the magic token.
//!
//! ## Encodings
//!
//! ```text
//! short string:          [len: u8]  [UTF-8 bytes]      len 0 = ""
//! optional long string:  [len: u16] [UTF-8 bytes]      len 0 = absent
//! bytes:                 [len: u32] [bytes]            len 0 = empty
//! optional bytes:        [len: u32] [bytes]            len 0 = absent
//! hash:                  [20 raw bytes]
//! integers:              little-endian, fixed width
//! ```
//!
//! The format is little-endian only. Both codec halves refuse to construct
//! on a big-endian host.

use crate::error::{FormatError, FormatResult};
use blister_core::HASH_LEN;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

/// Largest encodable short string
pub const MAX_SHORT_STRING_LEN: usize = u8::MAX as usize;

/// Largest encodable long string
pub const MAX_LONG_STRING_LEN: usize = u16::MAX as usize;

/// Largest encodable blob
pub const MAX_BYTES_LEN: usize = u32::MAX as usize;

/// Fail unless the host is little-endian
pub fn ensure_little_endian() -> FormatResult<()> {
    if cfg!(target_endian = "little") {
        Ok(())
    } else {
        Err(FormatError::UnsupportedEndianness)
    }
}

// ============================================================================
// Reader
// ============================================================================

/// Reads body primitives from a byte stream
pub struct BlisterReader<R> {
    inner: R,
}

impl<R: Read> BlisterReader<R> {
    /// Wrap a stream
    ///
    /// Fails with [`FormatError::UnsupportedEndianness`] on big-endian hosts.
    pub fn new(inner: R) -> FormatResult<Self> {
        ensure_little_endian()?;
        Ok(BlisterReader { inner })
    }

    /// Unwrap the underlying stream
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Read a `u8`
    pub fn read_u8(&mut self) -> FormatResult<u8> {
        self.inner
            .read_u8()
            .map_err(|e| FormatError::from_read(e, "u8"))
    }

    /// Read a little-endian `u16`
    pub fn read_u16(&mut self) -> FormatResult<u16> {
        self.inner
            .read_u16::<LittleEndian>()
            .map_err(|e| FormatError::from_read(e, "u16"))
    }

    /// Read a little-endian `u32`
    pub fn read_u32(&mut self) -> FormatResult<u32> {
        self.inner
            .read_u32::<LittleEndian>()
            .map_err(|e| FormatError::from_read(e, "u32"))
    }

    /// Read a little-endian `u64`
    pub fn read_u64(&mut self) -> FormatResult<u64> {
        self.inner
            .read_u64::<LittleEndian>()
            .map_err(|e| FormatError::from_read(e, "u64"))
    }

    /// Read a raw 20-byte digest
    pub fn read_hash(&mut self) -> FormatResult<[u8; HASH_LEN]> {
        let mut digest = [0u8; HASH_LEN];
        self.inner
            .read_exact(&mut digest)
            .map_err(|e| FormatError::from_read(e, "hash digest"))?;
        Ok(digest)
    }

    /// Read a u8-prefixed string; length 0 is the empty string
    pub fn read_short_string(&mut self) -> FormatResult<String> {
        let len = self.read_u8()? as usize;
        if len == 0 {
            return Ok(String::new());
        }
        self.read_utf8(len, "short string")
    }

    /// Read a u16-prefixed string; length 0 means absent
    pub fn read_optional_long_string(&mut self) -> FormatResult<Option<String>> {
        let len = self.read_u16()? as usize;
        if len == 0 {
            return Ok(None);
        }
        self.read_utf8(len, "long string").map(Some)
    }

    /// Read a u32-prefixed blob; length 0 is an empty blob
    pub fn read_bytes(&mut self) -> FormatResult<Vec<u8>> {
        let len = self.read_u32()? as usize;
        self.read_exact_vec(len, "bytes")
    }

    /// Read a u32-prefixed blob; length 0 means absent
    pub fn read_optional_bytes(&mut self) -> FormatResult<Option<Vec<u8>>> {
        let len = self.read_u32()? as usize;
        if len == 0 {
            return Ok(None);
        }
        self.read_exact_vec(len, "bytes").map(Some)
    }

    fn read_utf8(&mut self, len: usize, what: &'static str) -> FormatResult<String> {
        let bytes = self.read_exact_vec(len, what)?;
        String::from_utf8(bytes).map_err(|_| FormatError::InvalidUtf8 { what })
    }

    // Grows the buffer as data arrives so a corrupt length cannot force a
    // multi-gigabyte allocation up front.
    fn read_exact_vec(&mut self, len: usize, what: &'static str) -> FormatResult<Vec<u8>> {
        let mut buf = Vec::new();
        self.inner
            .by_ref()
            .take(len as u64)
            .read_to_end(&mut buf)
            .map_err(|e| FormatError::from_read(e, what))?;
        if buf.len() != len {
            return Err(FormatError::Truncated { what });
        }
        Ok(buf)
    }
}

// ============================================================================
// Writer
// ============================================================================

/// Writes body primitives to a byte stream
pub struct BlisterWriter<W> {
    inner: W,
}

impl<W: Write> BlisterWriter<W> {
    /// Wrap a stream
    ///
    /// Fails with [`FormatError::UnsupportedEndianness`] on big-endian hosts.
    pub fn new(inner: W) -> FormatResult<Self> {
        ensure_little_endian()?;
        Ok(BlisterWriter { inner })
    }

    /// Unwrap the underlying stream
    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Write a `u8`
    pub fn write_u8(&mut self, value: u8) -> FormatResult<()> {
        Ok(self.inner.write_u8(value)?)
    }

    /// Write a little-endian `u16`
    pub fn write_u16(&mut self, value: u16) -> FormatResult<()> {
        Ok(self.inner.write_u16::<LittleEndian>(value)?)
    }

    /// Write a little-endian `u32`
    pub fn write_u32(&mut self, value: u32) -> FormatResult<()> {
        Ok(self.inner.write_u32::<LittleEndian>(value)?)
    }

    /// Write a little-endian `u64`
    pub fn write_u64(&mut self, value: u64) -> FormatResult<()> {
        Ok(self.inner.write_u64::<LittleEndian>(value)?)
    }

    /// Write a raw 20-byte digest
    pub fn write_hash(&mut self, digest: &[u8; HASH_LEN]) -> FormatResult<()> {
        Ok(self.inner.write_all(digest)?)
    }

    /// Write a u8-prefixed string
    pub fn write_short_string(&mut self, value: &str) -> FormatResult<()> {
        let bytes = value.as_bytes();
        if bytes.len() > MAX_SHORT_STRING_LEN {
            return Err(FormatError::StringTooLong {
                len: bytes.len(),
                max: MAX_SHORT_STRING_LEN,
            });
        }
        self.write_u8(bytes.len() as u8)?;
        Ok(self.inner.write_all(bytes)?)
    }

    /// Write a u16-prefixed string; `None` and `""` are both written as length 0
    pub fn write_optional_long_string(&mut self, value: Option<&str>) -> FormatResult<()> {
        let bytes = value.map(str::as_bytes).unwrap_or_default();
        if bytes.len() > MAX_LONG_STRING_LEN {
            return Err(FormatError::StringTooLong {
                len: bytes.len(),
                max: MAX_LONG_STRING_LEN,
            });
        }
        self.write_u16(bytes.len() as u16)?;
        Ok(self.inner.write_all(bytes)?)
    }

    /// Write a u32-prefixed blob
    pub fn write_bytes(&mut self, value: &[u8]) -> FormatResult<()> {
        if value.len() > MAX_BYTES_LEN {
            return Err(FormatError::BlobTooLong { len: value.len() });
        }
        self.write_u32(value.len() as u32)?;
        Ok(self.inner.write_all(value)?)
    }

    /// Write a u32-prefixed blob; `None` and an empty blob are both length 0
    pub fn write_optional_bytes(&mut self, value: Option<&[u8]>) -> FormatResult<()> {
        self.write_bytes(value.unwrap_or_default())
    }
}
