//! Document-level codec tests
//!
//! These tests exercise whole-file behavior:
//! - Round trip of all four entry types through buffers and files
//! - Absent vs empty optional fields
//! - Fatal errors for unknown tags and short entry lists

use blister_core::{Beatmap, DateAdded, Playlist};
use blister_format::{
    BlisterWriter, FormatError, PlaylistFormat, PlaylistReader, PlaylistWriter, MAGIC_NUMBER,
};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use tempfile::TempDir;

fn date() -> DateAdded {
    DateAdded::from_secs(1_700_000_000)
}

fn all_variants() -> Playlist {
    Playlist::new("Test", "Me")
        .with_description("A test playlist")
        .with_cover(vec![0, 1, 2, 3])
        .with_maps(vec![
            Beatmap::key(1234u32).with_date_added(date()),
            Beatmap::hash([0u8; 20]).with_date_added(date()),
            Beatmap::zip(vec![0, 1, 2, 3]).with_date_added(date()),
            Beatmap::level_id("Test").with_date_added(date()),
        ])
}

/// Build a file from a hand-written body so malformed bodies can be tested
fn frame(body: &[u8]) -> Vec<u8> {
    let mut out = MAGIC_NUMBER.to_vec();
    let mut encoder = GzEncoder::new(&mut out, Compression::default());
    encoder.write_all(body).unwrap();
    encoder.finish().unwrap();
    out
}

/// Body header with empty metadata and the given declared entry count
fn header(count: u32) -> Vec<u8> {
    let mut writer = BlisterWriter::new(Vec::new()).unwrap();
    writer.write_short_string("t").unwrap();
    writer.write_short_string("a").unwrap();
    writer.write_optional_long_string(None).unwrap();
    writer.write_optional_bytes(None).unwrap();
    writer.write_u32(count).unwrap();
    writer.into_inner()
}

#[test]
fn test_roundtrip_all_variants() {
    let playlist = all_variants();
    let decoded = Playlist::from_slice(&playlist.to_bytes().unwrap()).unwrap();

    assert_eq!(decoded.title, playlist.title);
    assert_eq!(decoded.author, playlist.author);
    assert_eq!(decoded.description, playlist.description);
    assert_eq!(decoded.cover, playlist.cover);
    assert_eq!(decoded.maps, playlist.maps);
}

#[test]
fn test_roundtrip_preserves_date_added() {
    let now = DateAdded::now();
    let playlist = Playlist::new("t", "a").with_maps(vec![Beatmap::key(1u32).with_date_added(now)]);
    let decoded = Playlist::from_slice(&playlist.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded.maps[0].date_added(), now);
}

#[test]
fn test_roundtrip_preserves_entry_order() {
    let maps: Vec<_> = (0..50u32)
        .rev()
        .map(|k| Beatmap::key(k).with_date_added(date()))
        .collect();
    let playlist = Playlist::new("t", "a").with_maps(maps.clone());
    let decoded = Playlist::from_slice(&playlist.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded.maps, maps);
}

#[test]
fn test_description_absent_roundtrips_as_absent() {
    let playlist = Playlist::new("t", "a");
    let decoded = Playlist::from_slice(&playlist.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded.description, None);
}

#[test]
fn test_description_empty_collapses_to_absent() {
    // Length 0 means "absent" on the wire, so an empty description has no
    // distinct encoding.
    let playlist = Playlist::new("t", "a").with_description("");
    let decoded = Playlist::from_slice(&playlist.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded.description, None);
}

#[test]
fn test_cover_empty_collapses_to_absent() {
    let playlist = Playlist::new("t", "a").with_cover(Vec::new());
    let decoded = Playlist::from_slice(&playlist.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded.cover, None);

    let absent = Playlist::new("t", "a");
    assert_eq!(playlist.to_bytes().unwrap(), absent.to_bytes().unwrap());
}

#[test]
fn test_unknown_tag_fails_whole_read() {
    let mut body = header(2);
    // valid key entry
    body.extend_from_slice(&[0, 1, 0, 0, 0, 0, 0, 0, 0, 7, 0, 0, 0]);
    // entry with tag 4
    body.extend_from_slice(&[4, 1, 0, 0, 0, 0, 0, 0, 0, 7, 0, 0, 0]);

    let result = PlaylistReader::read_from_slice(&frame(&body));
    assert!(matches!(result, Err(FormatError::InvalidBeatmapType(4))));
}

#[test]
fn test_fewer_entries_than_declared_is_truncation() {
    let mut body = header(3);
    body.extend_from_slice(&[0, 1, 0, 0, 0, 0, 0, 0, 0, 7, 0, 0, 0]);

    let result = PlaylistReader::read_from_slice(&frame(&body));
    assert!(matches!(result, Err(FormatError::Truncated { .. })));
}

#[test]
fn test_reads_hand_framed_body() {
    let mut body = header(1);
    body.extend_from_slice(&[3, 5, 0, 0, 0, 0, 0, 0, 0, 2, b'i', b'd']);

    let playlist = PlaylistReader::read_from_slice(&frame(&body)).unwrap();
    assert_eq!(playlist.title, "t");
    assert_eq!(playlist.maps.len(), 1);
    assert_eq!(playlist.maps[0], Beatmap::level_id("id").with_date_added(DateAdded::from_secs(5)));
}

#[test]
fn test_file_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("test.blist");

    let playlist = all_variants();
    playlist.write_to_file(&path).unwrap();

    assert!(path.exists());
    assert!(!path.with_file_name("test.blist.tmp").exists());
    assert_eq!(Playlist::from_file(&path).unwrap(), playlist);
}

#[test]
fn test_failed_file_write_leaves_nothing_behind() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.blist");

    let playlist = Playlist::new("x".repeat(300), "a");
    let result = PlaylistWriter::with_defaults().write_to_file(&playlist, &path);

    assert!(matches!(result, Err(FormatError::StringTooLong { .. })));
    assert!(!path.exists());
    assert!(!path.with_file_name("bad.blist.tmp").exists());
}

#[test]
fn test_same_stem_targets_do_not_collide() {
    let temp_dir = TempDir::new().unwrap();
    let primary = temp_dir.path().join("mix.blist");
    let backup = temp_dir.path().join("mix.bak");

    let first = Playlist::new("first", "a");
    let second = Playlist::new("second", "a");
    first.write_to_file(&primary).unwrap();
    second.write_to_file(&backup).unwrap();

    assert_eq!(Playlist::from_file(&primary).unwrap(), first);
    assert_eq!(Playlist::from_file(&backup).unwrap(), second);
    assert!(!temp_dir.path().join("mix.tmp").exists());
}

#[test]
fn test_corrupt_gzip_checksum_rejected() {
    let playlist = Playlist::new("t", "a").with_maps(vec![Beatmap::key(1u32)]);
    let mut bytes = playlist.to_bytes().unwrap();

    // Trailer is CRC32 then ISIZE, both u32 LE
    let crc_offset = bytes.len() - 8;
    bytes[crc_offset] ^= 0xFF;

    assert!(matches!(
        Playlist::from_slice(&bytes),
        Err(FormatError::Decompression(_))
    ));
}

#[test]
fn test_corrupt_gzip_size_rejected() {
    let mut bytes = all_variants().to_bytes().unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0x01;

    assert!(matches!(
        Playlist::from_slice(&bytes),
        Err(FormatError::Decompression(_))
    ));
}

#[test]
fn test_missing_gzip_trailer_is_truncation() {
    let mut bytes = all_variants().to_bytes().unwrap();
    bytes.truncate(bytes.len() - 8);

    assert!(matches!(
        Playlist::from_slice(&bytes),
        Err(FormatError::Truncated { .. }) | Err(FormatError::Decompression(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = Playlist::from_file(temp_dir.path().join("missing.blist"));
    assert!(matches!(result, Err(FormatError::Io(_))));
}

#[test]
fn test_write_to_stream_returns_stream() {
    let playlist = all_variants();
    let out = playlist.write_to(Vec::new()).unwrap();
    assert_eq!(Playlist::from_reader(out.as_slice()).unwrap(), playlist);
}
