//! Core types for Blister playlists
//!
//! This crate defines the domain model shared by the codec and the converter:
//! - Playlist: metadata plus ordered beatmap entries
//! - Beatmap: one entry, identified by key, hash, embedded zip, or level id
//! - BeatmapKey / BeatmapHash: validated textual and raw identities
//! - DateAdded: second-precision added-at stamp
//! - BeatmapError: construction-time validation failures

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod beatmap;
pub mod date_added;
pub mod error;
pub mod playlist;

pub use beatmap::{
    Beatmap, BeatmapHash, BeatmapKey, BeatmapKind, BeatmapType, HASH_HEX_LEN, HASH_LEN,
};
pub use date_added::DateAdded;
pub use error::{BeatmapError, Result};
pub use playlist::Playlist;
