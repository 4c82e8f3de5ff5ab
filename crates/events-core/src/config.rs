use serde::{Deserialize, Serialize};

use crate::error::{EventError, Result};

// ── LoaderConfig ───────────────────────────────────────────────────────────────

/// How the CSV loader reads a source.
///
/// Every key is optional when deserialized and falls back to [`Default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Cell separator. Must be a single ASCII character.
    pub delimiter: char,
    /// Accept rows whose cell count differs from the header.
    ///
    /// Short rows then produce records without the trailing fields and
    /// surplus cells are dropped. When `false` the reader rejects such rows.
    pub flexible: bool,
    /// Trim leading and trailing whitespace from headers and cells.
    pub trim: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            flexible: false,
            trim: false,
        }
    }
}

impl LoaderConfig {
    /// The delimiter as the single byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> Result<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(EventError::Config(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoaderConfig::default();
        assert_eq!(config.delimiter, ',');
        assert!(!config.flexible);
        assert!(!config.trim);
        assert_eq!(config.delimiter_byte().unwrap(), b',');
    }

    #[test]
    fn test_tab_delimiter_byte() {
        let config = LoaderConfig {
            delimiter: '\t',
            ..LoaderConfig::default()
        };
        assert_eq!(config.delimiter_byte().unwrap(), b'\t');
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let config = LoaderConfig {
            delimiter: '§',
            ..LoaderConfig::default()
        };
        assert!(matches!(config.delimiter_byte(), Err(EventError::Config(_))));
    }

    #[test]
    fn test_deserialize_partial_fills_defaults() {
        let config: LoaderConfig = serde_json::from_str(r#"{"delimiter": ";"}"#).unwrap();
        assert_eq!(config.delimiter, ';');
        assert!(!config.flexible);
        assert!(!config.trim);
    }
}
