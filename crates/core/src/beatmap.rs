//! Beatmap entries
//!
//! A playlist entry references one game level through exactly one of four
//! identification schemes. The set is fixed by the wire format, so it is a
//! closed enum rather than an extensible trait.
//!
//! | Type      | Tag | Payload                         |
//! |-----------|-----|---------------------------------|
//! | `Key`     | 0   | catalog key (u32)               |
//! | `Hash`    | 1   | 20-byte content digest          |
//! | `Zip`     | 2   | embedded archive bytes          |
//! | `LevelId` | 3   | opaque level identifier string  |
//!
//! Every entry also carries a [`DateAdded`] stamp.

use crate::date_added::DateAdded;
use crate::error::{BeatmapError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length in bytes of a beatmap content digest
pub const HASH_LEN: usize = 20;

/// Length in characters of a hex-encoded beatmap digest
pub const HASH_HEX_LEN: usize = HASH_LEN * 2;

// ============================================================================
// BeatmapKey
// ============================================================================

/// Numeric catalog key, written on the wire as an unsigned 32-bit integer
///
/// Textual keys are base-16 without prefix, e.g. `"1a2b"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BeatmapKey(u32);

impl BeatmapKey {
    /// Create from a raw key
    #[inline]
    pub const fn new(key: u32) -> Self {
        BeatmapKey(key)
    }

    /// Raw unsigned value as stored on the wire
    #[inline]
    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// Signed view of the same 32 bits
    #[inline]
    pub const fn as_i32(&self) -> i32 {
        self.0 as i32
    }

    /// Lower-case hex form without padding, as used by catalog URLs
    pub fn to_hex(&self) -> String {
        format!("{:x}", self.0)
    }
}

impl FromStr for BeatmapKey {
    type Err = BeatmapError;

    fn from_str(s: &str) -> Result<Self> {
        // from_str_radix tolerates a leading sign, which keys never carry.
        // Zero padding is fine; values past u32::MAX overflow below.
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(BeatmapError::InvalidKey(s.to_string()));
        }
        u32::from_str_radix(s, 16)
            .map(BeatmapKey)
            .map_err(|_| BeatmapError::InvalidKey(s.to_string()))
    }
}

impl From<u32> for BeatmapKey {
    fn from(key: u32) -> Self {
        BeatmapKey(key)
    }
}

impl From<i32> for BeatmapKey {
    fn from(key: i32) -> Self {
        BeatmapKey(key as u32)
    }
}

impl fmt::Display for BeatmapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

// ============================================================================
// BeatmapHash
// ============================================================================

/// 20-byte content digest identifying a beatmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BeatmapHash([u8; HASH_LEN]);

impl BeatmapHash {
    /// Create from a raw digest
    #[inline]
    pub const fn new(digest: [u8; HASH_LEN]) -> Self {
        BeatmapHash(digest)
    }

    /// Create from a byte slice, which must be exactly 20 bytes long
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let digest: [u8; HASH_LEN] =
            bytes
                .try_into()
                .map_err(|_| BeatmapError::InvalidHashLength {
                    expected: HASH_LEN,
                    actual: bytes.len(),
                })?;
        Ok(BeatmapHash(digest))
    }

    /// Raw digest bytes
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    /// 40-character lower-case hex form
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Check whether `s` is a well-formed 40-character hex digest
    pub fn is_valid_hex(s: &str) -> bool {
        s.len() == HASH_HEX_LEN && s.bytes().all(|b| b.is_ascii_hexdigit())
    }
}

impl FromStr for BeatmapHash {
    type Err = BeatmapError;

    /// Parse a 40-character hex digest; either case is accepted
    fn from_str(s: &str) -> Result<Self> {
        if !Self::is_valid_hex(s) {
            return Err(BeatmapError::InvalidHash(s.to_string()));
        }
        let mut digest = [0u8; HASH_LEN];
        hex::decode_to_slice(s, &mut digest)
            .map_err(|_| BeatmapError::InvalidHash(s.to_string()))?;
        Ok(BeatmapHash(digest))
    }
}

impl From<[u8; HASH_LEN]> for BeatmapHash {
    fn from(digest: [u8; HASH_LEN]) -> Self {
        BeatmapHash(digest)
    }
}

impl fmt::Display for BeatmapHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ============================================================================
// BeatmapType
// ============================================================================

/// Wire tag identifying which payload follows an entry header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BeatmapType {
    /// Catalog key
    Key = 0,
    /// Content digest
    Hash = 1,
    /// Embedded archive
    Zip = 2,
    /// Level identifier
    LevelId = 3,
}

impl BeatmapType {
    /// Tag byte written before each entry
    pub fn to_byte(&self) -> u8 {
        *self as u8
    }

    /// Map a tag byte back to its type, `None` for unknown tags
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            0 => Some(BeatmapType::Key),
            1 => Some(BeatmapType::Hash),
            2 => Some(BeatmapType::Zip),
            3 => Some(BeatmapType::LevelId),
            _ => None,
        }
    }
}

// ============================================================================
// Beatmap
// ============================================================================

/// Identity payload of a beatmap entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeatmapKind {
    /// Referenced by catalog key
    Key(BeatmapKey),
    /// Referenced by content digest
    Hash(BeatmapHash),
    /// Fully embedded archive
    Zip(Vec<u8>),
    /// Referenced by opaque level identifier
    LevelId(String),
}

impl BeatmapKind {
    /// Wire tag for this payload
    pub fn beatmap_type(&self) -> BeatmapType {
        match self {
            BeatmapKind::Key(_) => BeatmapType::Key,
            BeatmapKind::Hash(_) => BeatmapType::Hash,
            BeatmapKind::Zip(_) => BeatmapType::Zip,
            BeatmapKind::LevelId(_) => BeatmapType::LevelId,
        }
    }
}

/// One playlist entry: an identity plus the time it was added
///
/// Entries are immutable once built. Constructors stamp the current time;
/// use [`Beatmap::with_date_added`] to supply a specific one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Beatmap {
    kind: BeatmapKind,
    date_added: DateAdded,
}

impl Beatmap {
    /// Build an entry from its parts
    pub fn new(kind: BeatmapKind, date_added: DateAdded) -> Self {
        Beatmap { kind, date_added }
    }

    /// Entry referencing a catalog key
    pub fn key(key: impl Into<BeatmapKey>) -> Self {
        Self::new(BeatmapKind::Key(key.into()), DateAdded::now())
    }

    /// Entry referencing a hex catalog key such as `"1a2b"`
    pub fn key_from_hex(key: &str) -> Result<Self> {
        Ok(Self::key(key.parse::<BeatmapKey>()?))
    }

    /// Entry referencing a content digest
    pub fn hash(hash: impl Into<BeatmapHash>) -> Self {
        Self::new(BeatmapKind::Hash(hash.into()), DateAdded::now())
    }

    /// Entry referencing a 40-character hex digest
    pub fn hash_from_hex(hash: &str) -> Result<Self> {
        Ok(Self::hash(hash.parse::<BeatmapHash>()?))
    }

    /// Entry embedding a complete archive
    pub fn zip(archive: impl Into<Vec<u8>>) -> Self {
        Self::new(BeatmapKind::Zip(archive.into()), DateAdded::now())
    }

    /// Entry referencing a level identifier
    pub fn level_id(level_id: impl Into<String>) -> Self {
        Self::new(BeatmapKind::LevelId(level_id.into()), DateAdded::now())
    }

    /// Replace the added-at stamp
    pub fn with_date_added(mut self, date_added: DateAdded) -> Self {
        self.date_added = date_added;
        self
    }

    /// Identity payload
    pub fn kind(&self) -> &BeatmapKind {
        &self.kind
    }

    /// When the entry was added
    pub fn date_added(&self) -> DateAdded {
        self.date_added
    }

    /// Wire tag for this entry
    pub fn beatmap_type(&self) -> BeatmapType {
        self.kind.beatmap_type()
    }

    /// Consume the entry, returning its parts
    pub fn into_parts(self) -> (BeatmapKind, DateAdded) {
        (self.kind, self.date_added)
    }
}
