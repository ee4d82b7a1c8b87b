//! Legacy JSON playlist shape
//!
//! ```json
//! {
//!   "playlistTitle": "...",
//!   "playlistAuthor": "...",
//!   "playlistDescription": "...",
//!   "image": "<base64>",
//!   "songs": [ { "key": "1a2b" }, { "hash": "..." }, { "levelId": "..." } ]
//! }
//! ```
//!
//! Unknown fields (e.g. `songName`) are ignored.

use crate::error::ConversionResult;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// A playlist in the legacy JSON format
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyPlaylist {
    /// Playlist title
    #[serde(default)]
    pub playlist_title: String,
    /// Playlist author
    #[serde(default)]
    pub playlist_author: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playlist_description: Option<String>,
    /// Base64 cover image, optionally as a data URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Songs in playlist order
    #[serde(default)]
    pub songs: Vec<LegacySong>,
}

/// One song entry of a legacy playlist
///
/// Legacy files may set more than one identity field; the converter decides
/// which one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacySong {
    /// Hex catalog key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// 40-character hex content digest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// Opaque level identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_id: Option<String>,
}

impl LegacySong {
    /// Song identified by key
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ..Default::default()
        }
    }

    /// Song identified by hash
    pub fn with_hash(hash: impl Into<String>) -> Self {
        Self {
            hash: Some(hash.into()),
            ..Default::default()
        }
    }

    /// Song identified by level id
    pub fn with_level_id(level_id: impl Into<String>) -> Self {
        Self {
            level_id: Some(level_id.into()),
            ..Default::default()
        }
    }
}

impl LegacyPlaylist {
    /// Parse from JSON text
    pub fn from_json_str(text: &str) -> ConversionResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse from JSON bytes
    pub fn from_json_slice(bytes: &[u8]) -> ConversionResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Parse from a JSON stream
    pub fn from_json_reader<R: Read>(reader: R) -> ConversionResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}
