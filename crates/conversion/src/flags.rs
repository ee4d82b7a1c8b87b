//! Leniency flags for legacy conversion
//!
//! Each flag independently turns one class of validation failure into a
//! silent skip. They combine freely.

use serde::{Deserialize, Serialize};

/// Which validation failures the converter tolerates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionFlags {
    /// Skip songs whose hash is not 40 hex characters
    pub ignore_invalid_hashes: bool,
    /// Skip songs whose key is not a hex catalog key
    pub ignore_invalid_keys: bool,
    /// Drop a cover that is not valid base64
    ///
    /// A cover that decodes but is neither PNG nor JPEG still fails.
    pub ignore_invalid_cover: bool,
}

impl ConversionFlags {
    /// Tolerate nothing (default)
    pub const fn strict() -> Self {
        Self {
            ignore_invalid_hashes: false,
            ignore_invalid_keys: false,
            ignore_invalid_cover: false,
        }
    }

    /// Tolerate everything that can be tolerated
    pub const fn loose() -> Self {
        Self {
            ignore_invalid_hashes: true,
            ignore_invalid_keys: true,
            ignore_invalid_cover: true,
        }
    }

    /// Set `ignore_invalid_hashes`
    pub fn with_ignore_invalid_hashes(mut self, value: bool) -> Self {
        self.ignore_invalid_hashes = value;
        self
    }

    /// Set `ignore_invalid_keys`
    pub fn with_ignore_invalid_keys(mut self, value: bool) -> Self {
        self.ignore_invalid_keys = value;
        self
    }

    /// Set `ignore_invalid_cover`
    pub fn with_ignore_invalid_cover(mut self, value: bool) -> Self {
        self.ignore_invalid_cover = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        assert_eq!(ConversionFlags::default(), ConversionFlags::strict());
    }

    #[test]
    fn test_flags_are_independent() {
        let flags = ConversionFlags::strict().with_ignore_invalid_cover(true);
        assert!(flags.ignore_invalid_cover);
        assert!(!flags.ignore_invalid_hashes);
        assert!(!flags.ignore_invalid_keys);

        let combined = flags.with_ignore_invalid_keys(true);
        assert!(combined.ignore_invalid_cover && combined.ignore_invalid_keys);
        assert!(!combined.ignore_invalid_hashes);
    }

    #[test]
    fn test_loose_sets_all() {
        let flags = ConversionFlags::loose();
        assert!(flags.ignore_invalid_hashes);
        assert!(flags.ignore_invalid_keys);
        assert!(flags.ignore_invalid_cover);
    }
}
