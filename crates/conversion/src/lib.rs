//! Legacy playlist conversion for Blister
//!
//! Turns the legacy JSON playlist shape into a validated [`Playlist`]:
//! - LegacyPlaylist / LegacySong: serde model of the JSON document
//! - ConversionFlags: which validation failures are tolerated
//! - LegacyConverter: identity resolution, cover checks, timestamping
//! - ConversionConfig: flags and encode options from `blister.toml`
//!
//! [`Playlist`]: blister_core::Playlist

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod converter;
pub mod cover;
pub mod error;
pub mod flags;
pub mod legacy;

pub use config::{ConversionConfig, CONFIG_FILE_NAME};
pub use converter::{convert_legacy_playlist, LegacyConverter};
pub use cover::{decode_base64_image, CoverFormat};
pub use error::{ConversionError, ConversionResult};
pub use flags::ConversionFlags;
pub use legacy::{LegacyPlaylist, LegacySong};
