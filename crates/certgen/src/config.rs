//! certgen configuration file
//!
//! ```json
//! {
//!     "template": {
//!         "url": "https://drive.google.com/uc?id=...",
//!         "cachePath": "template.png"
//!     },
//!     "fonts": [
//!         { "id": "serif", "source": "fonts/DejaVuSerif.ttf" }
//!     ]
//! }
//! ```

use crate::template::{drive_url, TEMPLATE_FILE_ID};
use cert_core::{CertError, FontTable};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Font error: {0}")]
    Font(#[from] CertError),
}

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Where the certificate template comes from
    #[serde(default)]
    pub template: TemplateSource,

    /// Font table entries
    #[serde(default)]
    pub fonts: Vec<FontDef>,
}

/// Remote template location and its local cache file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSource {
    pub url: String,
    pub cache_path: PathBuf,
}

impl Default for TemplateSource {
    fn default() -> Self {
        Self {
            url: drive_url(TEMPLATE_FILE_ID),
            cache_path: PathBuf::from("template.png"),
        }
    }
}

/// One font family in the font table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontDef {
    /// Family name used in font selections
    pub id: String,
    /// Path to the TTF/OTF file
    pub source: PathBuf,
}

impl Config {
    /// Parse configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a file; a missing file gives the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("{} not found, using default configuration", path.display());
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Read every configured font file into a font table
    pub fn font_table(&self) -> Result<FontTable, ConfigError> {
        let mut table = FontTable::new();
        for font in &self.fonts {
            let data = std::fs::read(&font.source).map_err(|source| ConfigError::Io {
                path: font.source.clone(),
                source,
            })?;
            table.register(&font.id, &data)?;
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "template": {
                "url": "https://example.com/template.png",
                "cachePath": "cache/template.png"
            },
            "fonts": [
                { "id": "serif", "source": "fonts/DejaVuSerif.ttf" },
                { "id": "sans", "source": "fonts/DejaVuSans.ttf" }
            ]
        }"#;

        let config = Config::from_json(json).unwrap();
        assert_eq!(config.template.url, "https://example.com/template.png");
        assert_eq!(
            config.template.cache_path,
            PathBuf::from("cache/template.png")
        );
        assert_eq!(config.fonts.len(), 2);
        assert_eq!(config.fonts[1].id, "sans");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(
            config.template.url,
            "https://drive.google.com/uc?id=1SnVrwMx07fuR0-mofW1DmPjXiPoBjAr1"
        );
        assert_eq!(config.template.cache_path, PathBuf::from("template.png"));
        assert!(config.fonts.is_empty());
    }

    #[test]
    fn test_invalid_json() {
        let result = Config::from_json("{ fonts: ");
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("certgen-does-not-exist.json");
        let config = Config::load(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_font_table_missing_font_file() {
        let config = Config {
            template: TemplateSource::default(),
            fonts: vec![FontDef {
                id: "serif".to_string(),
                source: PathBuf::from("/nonexistent/serif.ttf"),
            }],
        };

        match config.font_table() {
            Err(ConfigError::Io { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/serif.ttf"))
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_font_table_rejects_non_font() {
        let path = std::env::temp_dir().join(format!("certgen-not-a-font-{}.ttf", std::process::id()));
        std::fs::write(&path, b"definitely not a font").unwrap();

        let config = Config {
            template: TemplateSource::default(),
            fonts: vec![FontDef {
                id: "broken".to_string(),
                source: path.clone(),
            }],
        };
        let result = config.font_table();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(
            result,
            Err(ConfigError::Font(CertError::FontParseError(_)))
        ));
    }
}
