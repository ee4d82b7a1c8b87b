//! Property-based tests for textual beatmap identities
//!
//! Rendering a key or hash as hex and parsing it back yields the same value.

use blister_core::{Beatmap, BeatmapHash, BeatmapKey, BeatmapKind, DateAdded};
use proptest::prelude::*;

proptest! {
    #[test]
    fn key_hex_roundtrip(raw in any::<u32>()) {
        let key = BeatmapKey::new(raw);
        prop_assert_eq!(key.to_hex().parse::<BeatmapKey>().unwrap(), key);
    }

    #[test]
    fn key_parse_ignores_case_and_padding(raw in any::<u32>(), zeros in 0usize..8) {
        let text = format!("{}{:X}", "0".repeat(zeros), raw);
        prop_assert_eq!(text.parse::<BeatmapKey>().unwrap().as_u32(), raw);
    }

    #[test]
    fn key_parse_matches_radix(text in "[0-9a-fA-F]{1,8}") {
        let expected = u32::from_str_radix(&text, 16).unwrap();
        let map = Beatmap::key_from_hex(&text).unwrap();
        prop_assert_eq!(map.kind(), &BeatmapKind::Key(BeatmapKey::new(expected)));
    }

    #[test]
    fn hash_hex_roundtrip(bytes in any::<[u8; 20]>()) {
        let hash = BeatmapHash::new(bytes);
        let hex = hash.to_hex();
        prop_assert_eq!(hex.len(), 40);
        prop_assert_eq!(hex.parse::<BeatmapHash>().unwrap(), hash);
        prop_assert_eq!(hex.to_uppercase().parse::<BeatmapHash>().unwrap(), hash);
    }

    #[test]
    fn hash_rejects_wrong_length(text in "[0-9a-f]{0,39}") {
        prop_assert!(text.parse::<BeatmapHash>().is_err());
    }

    #[test]
    fn date_added_preserved_by_with_date_added(secs in any::<u64>()) {
        let map = Beatmap::level_id("x").with_date_added(DateAdded::from_secs(secs));
        prop_assert_eq!(map.date_added().as_secs(), secs);
    }
}
