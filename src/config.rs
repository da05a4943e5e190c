//! User configuration
//!
//! Read from `~/.config/dcviz/config.toml` when present; the `--base-url`
//! flag (or `DCVIZ_URL`) overrides the file, and everything falls back to a
//! local default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DcvizError, Result};

/// Default analyzer service location
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Persistent client settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the analyzer/history/auth service
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Path of the user config file, if a config directory exists
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dcviz").join("config.toml"))
    }

    /// Load the user config, falling back to defaults when the file is absent
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and parse a specific config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| DcvizError::ConfigError {
            message: format!("{}: {}", path.display(), e),
        })
    }

    /// Resolve the effective base URL: flag/env beats file beats default
    pub fn resolve_base_url(&self, override_url: Option<&str>) -> String {
        override_url.unwrap_or(&self.base_url).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"https://dc.example.com\"").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.base_url, "https://dc.example.com");
    }

    #[test]
    fn test_malformed_file_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = [not toml").unwrap();
        assert!(matches!(
            Config::load_from(file.path()),
            Err(DcvizError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_override_beats_file_value() {
        let config = Config {
            base_url: "http://from-file".to_string(),
        };
        assert_eq!(
            config.resolve_base_url(Some("http://from-flag")),
            "http://from-flag"
        );
        assert_eq!(config.resolve_base_url(None), "http://from-file");
    }
}
