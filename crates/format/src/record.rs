//! Beatmap entry records
//!
//! ## Record Format
//!
//! ```text
//! [Type: u8]          0 = key, 1 = hash, 2 = zip, 3 = level id
//! [DateAdded: u64 LE] unix seconds
//! [Payload]
//!   key:      u32 LE
//!   hash:     20 raw bytes
//!   zip:      u32 LE length + bytes
//!   level id: u8 length + UTF-8 bytes
//! ```

use crate::codec::{BlisterReader, BlisterWriter};
use crate::error::{FormatError, FormatResult};
use blister_core::{Beatmap, BeatmapHash, BeatmapKey, BeatmapKind, BeatmapType, DateAdded};
use std::io::{Read, Write};
use tracing::trace;

/// Decode one beatmap record
///
/// An unknown type tag fails with [`FormatError::InvalidBeatmapType`].
pub fn read_beatmap<R: Read>(reader: &mut BlisterReader<R>) -> FormatResult<Beatmap> {
    let tag = reader.read_u8()?;
    let beatmap_type = BeatmapType::from_byte(tag).ok_or(FormatError::InvalidBeatmapType(tag))?;
    let date_added = DateAdded::from_secs(reader.read_u64()?);

    let kind = match beatmap_type {
        BeatmapType::Key => BeatmapKind::Key(BeatmapKey::new(reader.read_u32()?)),
        BeatmapType::Hash => BeatmapKind::Hash(BeatmapHash::new(reader.read_hash()?)),
        BeatmapType::Zip => BeatmapKind::Zip(reader.read_bytes()?),
        BeatmapType::LevelId => BeatmapKind::LevelId(reader.read_short_string()?),
    };

    trace!(?beatmap_type, date_added = date_added.as_secs(), "Read beatmap record");
    Ok(Beatmap::new(kind, date_added))
}

/// Encode one beatmap record
pub fn write_beatmap<W: Write>(writer: &mut BlisterWriter<W>, map: &Beatmap) -> FormatResult<()> {
    let beatmap_type = map.beatmap_type();
    writer.write_u8(beatmap_type.to_byte())?;
    writer.write_u64(map.date_added().as_secs())?;

    match map.kind() {
        BeatmapKind::Key(key) => writer.write_u32(key.as_u32())?,
        BeatmapKind::Hash(hash) => writer.write_hash(hash.as_bytes())?,
        BeatmapKind::Zip(archive) => writer.write_bytes(archive)?,
        BeatmapKind::LevelId(level_id) => writer.write_short_string(level_id)?,
    }

    trace!(?beatmap_type, "Wrote beatmap record");
    Ok(())
}
