//! Playlist document
//!
//! Metadata plus an ordered list of beatmap entries. Entry order is the
//! on-disk order; nothing here reorders or deduplicates.

use crate::beatmap::Beatmap;
use serde::{Deserialize, Serialize};

/// A playlist of beatmaps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist title (at most 255 bytes of UTF-8 when written)
    pub title: String,
    /// Playlist author (at most 255 bytes of UTF-8 when written)
    pub author: String,
    /// Optional description (at most 65535 bytes of UTF-8 when written)
    pub description: Option<String>,
    /// Optional cover image
    pub cover: Option<Vec<u8>>,
    /// Entries in playlist order
    pub maps: Vec<Beatmap>,
}

impl Playlist {
    /// Create an empty playlist with the given title and author
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Playlist {
            title: title.into(),
            author: author.into(),
            description: None,
            cover: None,
            maps: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the cover image
    pub fn with_cover(mut self, cover: impl Into<Vec<u8>>) -> Self {
        self.cover = Some(cover.into());
        self
    }

    /// Set all entries at once
    pub fn with_maps(mut self, maps: Vec<Beatmap>) -> Self {
        self.maps = maps;
        self
    }

    /// Append an entry
    pub fn push(&mut self, map: Beatmap) {
        self.maps.push(map);
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    /// Whether the playlist has no entries
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Iterate over entries in order
    pub fn iter(&self) -> std::slice::Iter<'_, Beatmap> {
        self.maps.iter()
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Beatmap;
    type IntoIter = std::slice::Iter<'a, Beatmap>;

    fn into_iter(self) -> Self::IntoIter {
        self.maps.iter()
    }
}

impl Extend<Beatmap> for Playlist {
    fn extend<T: IntoIterator<Item = Beatmap>>(&mut self, iter: T) {
        self.maps.extend(iter);
    }
}
