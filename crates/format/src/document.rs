//! Playlist document framing
//!
//! ## File Format
//!
//! ```text
//! [Magic: "Blist.v3", 8 bytes, uncompressed]
//! [Gzip-compressed body]
//!   [Title: short string]
//!   [Author: short string]
//!   [Description: optional long string]
//!   [Cover: optional bytes]
//!   [Entry count: u32 LE]
//!   [Entry records...]
//! ```
//!
//! The body is always gzip-framed, even for tiny playlists. Reads stop at
//! the first error; a partially decoded playlist is never returned.

use crate::codec::{ensure_little_endian, BlisterReader, BlisterWriter};
use crate::error::{FormatError, FormatResult};
use crate::options::EncodeOptions;
use crate::record::{read_beatmap, write_beatmap};
use blister_core::Playlist;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Magic token at offset 0 of every playlist file
pub const MAGIC_NUMBER: &[u8; 8] = b"Blist.v3";

/// Conventional file extension for binary playlists
pub const BLIST_EXTENSION: &str = "blist";

// Caps the up-front allocation for a declared entry count
const MAX_PREALLOCATED_ENTRIES: usize = 1024;

// ============================================================================
// Writer
// ============================================================================

/// Writer for `Blist.v3` playlists
pub struct PlaylistWriter {
    options: EncodeOptions,
}

impl PlaylistWriter {
    /// Create a writer with the given options
    pub fn new(options: &EncodeOptions) -> Self {
        Self { options: *options }
    }

    /// Create a writer with default options
    pub fn with_defaults() -> Self {
        Self::new(&EncodeOptions::default())
    }

    /// Write a playlist to `out`, returning the stream once the gzip body is finished
    pub fn write<W: Write>(&self, playlist: &Playlist, mut out: W) -> FormatResult<W> {
        self.options.validate()?;
        ensure_little_endian()?;

        out.write_all(MAGIC_NUMBER)?;

        let encoder = GzEncoder::new(out, Compression::new(self.options.compression_level));
        let mut writer = BlisterWriter::new(encoder)?;

        writer.write_short_string(&playlist.title)?;
        writer.write_short_string(&playlist.author)?;
        writer.write_optional_long_string(playlist.description.as_deref())?;
        writer.write_optional_bytes(playlist.cover.as_deref())?;

        let count = u32::try_from(playlist.maps.len()).map_err(|_| FormatError::TooManyEntries {
            count: playlist.maps.len(),
        })?;
        writer.write_u32(count)?;
        for map in &playlist.maps {
            write_beatmap(&mut writer, map)?;
        }

        let out = writer.into_inner().finish()?;
        debug!(
            title = %playlist.title,
            entries = count,
            compression_level = self.options.compression_level,
            "Wrote playlist"
        );
        Ok(out)
    }

    /// Write a playlist to a new buffer
    pub fn write_to_vec(&self, playlist: &Playlist) -> FormatResult<Vec<u8>> {
        self.write(playlist, Vec::new())
    }

    /// Write a playlist to `path`
    ///
    /// Writes to a temporary sibling first and renames it into place, so a
    /// failed write leaves no partial file behind.
    pub fn write_to_file(&self, playlist: &Playlist, path: &Path) -> FormatResult<()> {
        let temp_path = temp_path_for(path);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        match self.write_file_inner(playlist, &temp_path) {
            Ok(()) => {
                fs::rename(&temp_path, path)?;
                debug!(path = %path.display(), "Saved playlist");
                Ok(())
            }
            Err(e) => {
                let _ = fs::remove_file(&temp_path);
                Err(e)
            }
        }
    }

    fn write_file_inner(&self, playlist: &Playlist, path: &Path) -> FormatResult<()> {
        let file = File::create(path)?;
        let mut buf_writer = self.write(playlist, BufWriter::new(file))?;
        buf_writer.flush()?;
        buf_writer.get_ref().sync_all()?;
        Ok(())
    }
}

// `a.blist` -> `a.blist.tmp`, so targets sharing a stem never share a temp file
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

impl Default for PlaylistWriter {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ============================================================================
// Reader
// ============================================================================

/// Reader for `Blist.v3` playlists
pub struct PlaylistReader;

impl PlaylistReader {
    /// Read a playlist from a stream
    pub fn read<R: Read>(mut input: R) -> FormatResult<Playlist> {
        Self::read_magic_number(&mut input)?;

        let mut reader = BlisterReader::new(GzDecoder::new(input))?;

        let title = reader.read_short_string()?;
        let author = reader.read_short_string()?;
        let description = reader.read_optional_long_string()?;
        let cover = reader.read_optional_bytes()?;

        let count = reader.read_u32()? as usize;
        let mut maps = Vec::with_capacity(count.min(MAX_PREALLOCATED_ENTRIES));
        for _ in 0..count {
            maps.push(read_beatmap(&mut reader)?);
        }

        // The gzip trailer (CRC32 and size) is only checked once the decoder hits EOF
        io::copy(&mut reader.into_inner(), &mut io::sink())
            .map_err(|e| FormatError::from_read(e, "gzip trailer"))?;

        debug!(title = %title, entries = count, "Read playlist");
        Ok(Playlist {
            title,
            author,
            description,
            cover,
            maps,
        })
    }

    /// Read a playlist from a buffer
    pub fn read_from_slice(bytes: &[u8]) -> FormatResult<Playlist> {
        Self::read(bytes)
    }

    /// Read a playlist from a file
    pub fn read_from_file(path: &Path) -> FormatResult<Playlist> {
        let file = File::open(path)?;
        Self::read(BufReader::new(file))
    }

    /// Check whether `bytes` starts with the magic token
    pub fn has_magic_number(bytes: &[u8]) -> bool {
        bytes.starts_with(MAGIC_NUMBER)
    }

    fn read_magic_number<R: Read>(input: &mut R) -> FormatResult<()> {
        let mut found = Vec::with_capacity(MAGIC_NUMBER.len());
        input
            .by_ref()
            .take(MAGIC_NUMBER.len() as u64)
            .read_to_end(&mut found)?;
        if found.as_slice() != MAGIC_NUMBER {
            return Err(FormatError::InvalidMagicNumber { found });
        }
        Ok(())
    }
}

// ============================================================================
// Convenience
// ============================================================================

/// Binary encode/decode surface on [`Playlist`]
pub trait PlaylistFormat: Sized {
    /// Read from a stream
    fn from_reader<R: Read>(input: R) -> FormatResult<Self>;

    /// Read from a buffer
    fn from_slice(bytes: &[u8]) -> FormatResult<Self>;

    /// Read from a file
    fn from_file(path: impl AsRef<Path>) -> FormatResult<Self>;

    /// Write to a stream with default options
    fn write_to<W: Write>(&self, out: W) -> FormatResult<W>;

    /// Encode to a new buffer with default options
    fn to_bytes(&self) -> FormatResult<Vec<u8>>;

    /// Write to a file with default options
    fn write_to_file(&self, path: impl AsRef<Path>) -> FormatResult<()>;
}

impl PlaylistFormat for Playlist {
    fn from_reader<R: Read>(input: R) -> FormatResult<Self> {
        PlaylistReader::read(input)
    }

    fn from_slice(bytes: &[u8]) -> FormatResult<Self> {
        PlaylistReader::read_from_slice(bytes)
    }

    fn from_file(path: impl AsRef<Path>) -> FormatResult<Self> {
        PlaylistReader::read_from_file(path.as_ref())
    }

    fn write_to<W: Write>(&self, out: W) -> FormatResult<W> {
        PlaylistWriter::with_defaults().write(self, out)
    }

    fn to_bytes(&self) -> FormatResult<Vec<u8>> {
        PlaylistWriter::with_defaults().write_to_vec(self)
    }

    fn write_to_file(&self, path: impl AsRef<Path>) -> FormatResult<()> {
        PlaylistWriter::with_defaults().write_to_file(self, path.as_ref())
    }
}
