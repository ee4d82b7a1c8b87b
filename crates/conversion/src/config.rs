//! Conversion configuration via `blister.toml`
//!
//! A missing file means defaults: strict conversion, compression level 6.

use crate::error::{ConversionError, ConversionResult};
use crate::flags::ConversionFlags;
use blister_format::EncodeOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "blister.toml";

/// Settings for converting legacy playlists and writing the result
///
/// # Example
///
/// ```toml
/// [conversion]
/// ignore_invalid_hashes = false
/// ignore_invalid_keys = false
/// ignore_invalid_cover = true
///
/// [encode]
/// compression_level = 6
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Leniency flags
    #[serde(default)]
    pub conversion: ConversionFlags,
    /// Output encoding options
    #[serde(default)]
    pub encode: EncodeOptions,
}

impl ConversionConfig {
    /// Template written for new configurations
    pub fn default_toml() -> &'static str {
        r#"# Leniency flags for legacy playlist conversion.
# Each flag turns one kind of invalid input into a skipped song or dropped cover.
[conversion]
ignore_invalid_hashes = false
ignore_invalid_keys = false
ignore_invalid_cover = false

# Output encoding. compression_level is the gzip level, 0-9.
[encode]
compression_level = 6
"#
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> ConversionResult<Self> {
        let config: ConversionConfig = toml::from_str(content)
            .map_err(|e| ConversionError::config(format!("Failed to parse config: {}", e)))?;
        config
            .encode
            .validate()
            .map_err(|e| ConversionError::config(e.to_string()))?;
        Ok(config)
    }

    /// Load from a file; a missing file yields defaults
    pub fn load(path: &Path) -> ConversionResult<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConversionError::Io(e)),
        }
    }

    /// Write as TOML
    pub fn write_to_file(&self, path: &Path) -> ConversionResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConversionError::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_toml_parses_to_default() {
        let config = ConversionConfig::from_toml_str(ConversionConfig::default_toml()).unwrap();
        assert_eq!(config, ConversionConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = ConversionConfig::from_toml_str(
            r#"
            [conversion]
            ignore_invalid_cover = true
            "#,
        )
        .unwrap();
        assert!(config.conversion.ignore_invalid_cover);
        assert!(!config.conversion.ignore_invalid_keys);
        assert_eq!(config.encode.compression_level, 6);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(
            ConversionConfig::from_toml_str("").unwrap(),
            ConversionConfig::default()
        );
    }

    #[test]
    fn test_invalid_compression_level_rejected() {
        let result = ConversionConfig::from_toml_str("[encode]\ncompression_level = 42\n");
        assert!(matches!(result, Err(ConversionError::Config(_))));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = ConversionConfig::from_toml_str("[conversion\n");
        assert!(matches!(result, Err(ConversionError::Config(_))));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = ConversionConfig::load(&temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, ConversionConfig::default());
    }

    #[test]
    fn test_write_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        let config = ConversionConfig {
            conversion: ConversionFlags::loose(),
            encode: EncodeOptions::best(),
        };
        config.write_to_file(&path).unwrap();
        assert_eq!(ConversionConfig::load(&path).unwrap(), config);
    }
}
