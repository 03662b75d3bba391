//! Configuration handling for the demo list

use alphabetic_scroll_list::IndexGeometry;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Index cell height in rows when not configured
const DEFAULT_CELL_ROWS: u16 = 1;
/// Index cell padding in rows when not configured
const DEFAULT_CELL_PADDING_ROWS: u16 = 0;

/// User configuration for the list
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ListConfig {
    /// Index cell size, in terminal rows
    pub index_cell_size: Option<u16>,
    /// Index cell padding, in terminal rows
    pub index_cell_padding: Option<u16>,
    /// Newline separated items to list instead of the sample names
    pub items_file: Option<PathBuf>,
    /// Header color name (e.g. "cyan", "light-green", "#ff8800")
    pub header_color: Option<String>,
}

impl ListConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "alphabetic-scroll-list", "alphabetic-scroll-list")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: ListConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Index bar geometry in terminal rows
    pub fn index_geometry(&self) -> IndexGeometry {
        IndexGeometry::new(
            f32::from(self.index_cell_size.unwrap_or(DEFAULT_CELL_ROWS)),
            f32::from(self.index_cell_padding.unwrap_or(DEFAULT_CELL_PADDING_ROWS)),
        )
    }

    /// Configured header color; unknown names fall back to the default
    pub fn header_color(&self) -> Option<Color> {
        let name = self.header_color.as_deref()?;
        match Color::from_str(name) {
            Ok(color) => Some(color),
            Err(_) => {
                tracing::warn!("Unknown header color {name:?}, using default");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = ListConfig::default();
        assert!(config.index_cell_size.is_none());
        assert!(config.index_cell_padding.is_none());
        assert!(config.items_file.is_none());
        assert!(config.header_color.is_none());
    }

    #[test]
    fn test_default_geometry_is_one_row_per_letter() {
        let geometry = ListConfig::default().index_geometry();
        assert_eq!(geometry, IndexGeometry::new(1.0, 0.0));
        assert_eq!(geometry.cell_extent(), 1.0);
    }

    #[test]
    fn test_configured_geometry() {
        let config = ListConfig {
            index_cell_size: Some(2),
            index_cell_padding: Some(1),
            ..Default::default()
        };
        assert_eq!(config.index_geometry().cell_extent(), 3.0);
    }

    #[test]
    fn test_serialization() {
        let config = ListConfig {
            index_cell_size: Some(1),
            index_cell_padding: Some(1),
            items_file: Some(PathBuf::from("/tmp/names.txt")),
            header_color: Some("magenta".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: ListConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.index_cell_size, Some(1));
        assert_eq!(parsed.index_cell_padding, Some(1));
        assert_eq!(parsed.items_file, Some(PathBuf::from("/tmp/names.txt")));
        assert_eq!(parsed.header_color, Some("magenta".to_string()));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: ListConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.index_cell_size.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"index_cell_size": 2, "unknown_field": "value"}"#;
        let parsed: ListConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.index_cell_size, Some(2));
    }

    #[test]
    fn test_header_color() {
        let config = ListConfig {
            header_color: Some("green".to_string()),
            ..Default::default()
        };
        assert_eq!(config.header_color(), Some(Color::Green));

        let unknown = ListConfig {
            header_color: Some("not-a-color".to_string()),
            ..Default::default()
        };
        assert_eq!(unknown.header_color(), None);
        assert_eq!(ListConfig::default().header_color(), None);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "alphabetic-scroll-list-config-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{"index_cell_padding": 1}"#).unwrap();

        let config = ListConfig::load_from(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.index_cell_padding, Some(1));
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let path = std::env::temp_dir().join("alphabetic-scroll-list-missing/config.json");
        let err = ListConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }

    #[test]
    fn test_load_from_invalid_json_fails() {
        let path = std::env::temp_dir().join(format!(
            "alphabetic-scroll-list-bad-{}.json",
            std::process::id()
        ));
        fs::write(&path, "{ not json").unwrap();

        let err = ListConfig::load_from(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(err.to_string().contains("parsing config"));
    }

    #[test]
    fn test_config_path_is_config_json_in_app_dir() {
        // No home directory (some CI sandboxes) means no path at all
        if let Some(path) = ListConfig::config_path() {
            assert_eq!(path.file_name().unwrap(), "config.json");
            assert!(path.to_string_lossy().contains("alphabetic-scroll-list"));
        }
    }
}
