use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::data::{SortColumn, SortDir};
use crate::error::{ProctableError, Result};

/// Runtime configuration for a process table
#[derive(Debug)]
pub struct Config {
    pub sort_column: SortColumn,
    pub sort_dir: SortDir,
    /// Optional BCP-47 locale tag overriding the system locale for
    /// text-column collation.
    pub locale: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sort_column: SortColumn::Cpu,
            sort_dir: SortColumn::Cpu.default_dir(),
            locale: None,
        }
    }
}

/// File-based configuration (TOML)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    display: DisplayConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DisplayConfig {
    sort_column: String,
    sort_dir: String,
    locale: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            sort_column: "cpu".to_string(),
            sort_dir: String::new(),
            locale: String::new(),
        }
    }
}

impl Config {
    /// Load from the default config file location; a missing or
    /// unreadable file yields the defaults.
    pub fn load() -> Self {
        load_config_file().map(Self::from_file).unwrap_or_default()
    }

    /// Load from an explicit path, surfacing read and parse failures.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|err| ProctableError::config_invalid(path.to_path_buf(), err.to_string()))?;
        let file: FileConfig = toml::from_str(&content)
            .map_err(|err| ProctableError::config_invalid(path.to_path_buf(), err.to_string()))?;
        Ok(Self::from_file(file))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(content)?;
        Ok(Self::from_file(file))
    }

    fn from_file(file: FileConfig) -> Self {
        let sort_column =
            SortColumn::parse(&file.display.sort_column).unwrap_or(SortColumn::Cpu);
        let sort_dir = if file.display.sort_dir.is_empty() {
            sort_column.default_dir()
        } else {
            SortDir::parse(&file.display.sort_dir).unwrap_or_else(|| sort_column.default_dir())
        };
        let locale = if file.display.locale.is_empty() {
            None
        } else {
            Some(file.display.locale)
        };

        Self {
            sort_column,
            sort_dir,
            locale,
        }
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("proctable").join("config.toml"))
}

fn load_config_file() -> Option<FileConfig> {
    let path = config_path()?;
    let content = fs::read_to_string(&path).ok()?;
    toml::from_str(&content).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.sort_column, SortColumn::Cpu);
        assert_eq!(config.sort_dir, SortDir::Desc);
        assert!(config.locale.is_none());
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let config = Config::from_toml(
            r#"
            [display]
            sort_column = "mem"
            "#,
        )
        .unwrap();
        assert_eq!(config.sort_column, SortColumn::Memory);
        assert_eq!(config.sort_dir, SortColumn::Memory.default_dir());
    }

    #[test]
    fn explicit_values_are_honored() {
        let config = Config::from_toml(
            r#"
            [display]
            sort_column = "user"
            sort_dir = "asc"
            locale = "sv"
            "#,
        )
        .unwrap();
        assert_eq!(config.sort_column, SortColumn::User);
        assert_eq!(config.sort_dir, SortDir::Asc);
        assert_eq!(config.locale.as_deref(), Some("sv"));
    }

    #[test]
    fn unknown_values_fall_back() {
        let config = Config::from_toml(
            r#"
            [display]
            sort_column = "bogus"
            sort_dir = "sideways"
            "#,
        )
        .unwrap();
        assert_eq!(config.sort_column, SortColumn::Cpu);
        assert_eq!(config.sort_dir, SortDir::Desc);
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        let err = Config::load_from(Path::new("/nonexistent/proctable.toml")).unwrap_err();
        assert!(matches!(err, ProctableError::ConfigInvalid { .. }));
    }
}
