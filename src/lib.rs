//! Blister - Reader, writer and legacy converter for `Blist.v3` playlists
//!
//! A playlist is a title, an author, an optional description and cover, and an
//! ordered list of beatmap references. Each reference is one of four kinds:
//! a catalog key, a 20-byte content hash, an embedded zip, or a level id.
//!
//! # Quick Start
//!
//! ```ignore
//! use blister::{Beatmap, Playlist, PlaylistFormat};
//!
//! let mut playlist = Playlist::new("Favourites", "me");
//! playlist.push(Beatmap::key_from_hex("1a2b")?);
//!
//! let bytes = playlist.to_bytes()?;
//! let decoded = Playlist::from_slice(&bytes)?;
//! ```
//!
//! # Architecture
//!
//! - `blister-core`: the domain model, no I/O
//! - `blister-format`: the binary codec (magic token, gzip body, records)
//! - `blister-conversion`: legacy JSON playlists into the domain model
//!
//! Everything callers need is re-exported here.

pub use blister_conversion::{
    convert_legacy_playlist, decode_base64_image, ConversionConfig, ConversionError,
    ConversionFlags, ConversionResult, CoverFormat, LegacyConverter, LegacyPlaylist, LegacySong,
    CONFIG_FILE_NAME,
};
pub use blister_core::{
    Beatmap, BeatmapError, BeatmapHash, BeatmapKey, BeatmapKind, BeatmapType, DateAdded, Playlist,
    HASH_HEX_LEN, HASH_LEN,
};
pub use blister_format::{
    EncodeOptions, FormatError, FormatResult, PlaylistFormat, PlaylistReader, PlaylistWriter,
    BLIST_EXTENSION, DEFAULT_COMPRESSION_LEVEL, MAGIC_NUMBER,
};
