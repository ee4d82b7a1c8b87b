//! Binary codec for `Blist.v3` playlists
//!
//! This crate handles everything that touches the binary format:
//!
//! - Primitive codec: fixed-width integers, length-prefixed strings and blobs
//! - Endianness guard: the format is little-endian only
//! - Beatmap records: tag, added-at stamp, variant payload
//! - Document framing: magic token plus gzip-compressed body
//! - File, stream and buffer read/write surfaces

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec; // Length-prefixed primitives over the decompressed body
pub mod document; // Magic token, gzip envelope, playlist read/write
pub mod error; // FormatError taxonomy
pub mod options; // EncodeOptions
pub mod record; // Beatmap entry records

pub use codec::{
    ensure_little_endian, BlisterReader, BlisterWriter, MAX_BYTES_LEN, MAX_LONG_STRING_LEN,
    MAX_SHORT_STRING_LEN,
};
pub use document::{PlaylistFormat, PlaylistReader, PlaylistWriter, BLIST_EXTENSION, MAGIC_NUMBER};
pub use error::{FormatError, FormatResult};
pub use options::{EncodeOptions, DEFAULT_COMPRESSION_LEVEL};
pub use record::{read_beatmap, write_beatmap};
