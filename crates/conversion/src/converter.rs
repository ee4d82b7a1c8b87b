//! Legacy playlist converter
//!
//! ## Identity Resolution
//!
//! Each song yields at most one entry. The first non-empty field wins, in
//! this order:
//!
//! 1. `hash`: lower-cased, must be 40 hex characters
//! 2. `key`: must be a hex catalog key
//! 3. `levelId`: accepted as-is
//!
//! A song with none of these contributes nothing. Invalid hashes and keys
//! either fail the conversion or skip the song, per [`ConversionFlags`].
//!
//! ## Cover
//!
//! The base64 `image` is decoded and must be PNG or JPEG. Only a base64
//! decode failure is covered by `ignore_invalid_cover`; a decodable image of
//! any other format always fails.
//!
//! Every entry is stamped with the conversion time, since legacy songs carry
//! no timestamp.

use crate::cover::{decode_base64_image, CoverFormat};
use crate::error::{ConversionError, ConversionResult};
use crate::flags::ConversionFlags;
use crate::legacy::{LegacyPlaylist, LegacySong};
use blister_core::{Beatmap, BeatmapHash, BeatmapKey, DateAdded, Playlist};
use tracing::{debug, warn};

/// Converts legacy JSON playlists into [`Playlist`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyConverter {
    flags: ConversionFlags,
}

impl LegacyConverter {
    /// Create a converter with the given leniency flags
    pub fn new(flags: ConversionFlags) -> Self {
        Self { flags }
    }

    /// Create a converter that tolerates nothing
    pub fn strict() -> Self {
        Self::new(ConversionFlags::strict())
    }

    /// Create a converter that tolerates everything it can
    pub fn loose() -> Self {
        Self::new(ConversionFlags::loose())
    }

    /// Flags in effect
    pub fn flags(&self) -> ConversionFlags {
        self.flags
    }

    /// Convert a legacy playlist
    ///
    /// Title, author and level id lengths are not checked here. A value
    /// longer than 255 bytes converts, then fails on write with
    /// `FormatError::StringTooLong`.
    pub fn convert(&self, legacy: &LegacyPlaylist) -> ConversionResult<Playlist> {
        let date_added = DateAdded::now();

        let mut playlist = Playlist::new(&legacy.playlist_title, &legacy.playlist_author);
        playlist.description = legacy.playlist_description.clone();
        playlist.cover = self.convert_cover(legacy.image.as_deref())?;

        for (index, song) in legacy.songs.iter().enumerate() {
            if let Some(map) = self.convert_song(index, song)? {
                playlist.push(map.with_date_added(date_added));
            }
        }

        debug!(
            title = %playlist.title,
            songs = legacy.songs.len(),
            entries = playlist.len(),
            "Converted legacy playlist"
        );
        Ok(playlist)
    }

    /// Parse legacy JSON text and convert it
    pub fn convert_json_str(&self, text: &str) -> ConversionResult<Playlist> {
        self.convert(&LegacyPlaylist::from_json_str(text)?)
    }

    fn convert_cover(&self, image: Option<&str>) -> ConversionResult<Option<Vec<u8>>> {
        let image = match image {
            Some(image) if !image.is_empty() => image,
            _ => return Ok(None),
        };

        let cover = match decode_base64_image(image) {
            Ok(cover) => cover,
            Err(e) if self.flags.ignore_invalid_cover => {
                warn!(error = %e, "Dropping cover that is not valid base64");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let format = CoverFormat::detect(&cover);
        if !format.is_supported() {
            return Err(ConversionError::InvalidCover {
                mime: format.mime(),
            });
        }
        Ok(Some(cover))
    }

    fn convert_song(&self, index: usize, song: &LegacySong) -> ConversionResult<Option<Beatmap>> {
        if let Some(hash) = non_empty(&song.hash) {
            let hash = hash.to_lowercase();
            return match hash.parse::<BeatmapHash>() {
                Ok(hash) => Ok(Some(Beatmap::hash(hash))),
                Err(_) if self.flags.ignore_invalid_hashes => {
                    debug!(index, hash = %hash, "Skipping song with invalid hash");
                    Ok(None)
                }
                Err(_) => Err(ConversionError::InvalidMapHash(hash)),
            };
        }

        if let Some(key) = non_empty(&song.key) {
            return match key.parse::<BeatmapKey>() {
                Ok(key) => Ok(Some(Beatmap::key(key))),
                Err(_) if self.flags.ignore_invalid_keys => {
                    debug!(index, key = %key, "Skipping song with invalid key");
                    Ok(None)
                }
                Err(_) => Err(ConversionError::InvalidMapKey(key.to_string())),
            };
        }

        if let Some(level_id) = non_empty(&song.level_id) {
            return Ok(Some(Beatmap::level_id(level_id)));
        }

        debug!(index, "Skipping song without identity");
        Ok(None)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Convert a legacy playlist with the given flags
pub fn convert_legacy_playlist(
    legacy: &LegacyPlaylist,
    flags: ConversionFlags,
) -> ConversionResult<Playlist> {
    LegacyConverter::new(flags).convert(legacy)
}
