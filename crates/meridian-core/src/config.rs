//! Configuration management for the Meridian client.
//!
//! Loads configuration from ${MERIDIAN_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for Meridian configuration and data directories.
    //!
    //! MERIDIAN_HOME resolution order:
    //! 1. MERIDIAN_HOME environment variable (if set)
    //! 2. ~/.config/meridian (default)

    use std::path::PathBuf;

    /// Returns the user's home directory, if one can be determined.
    pub fn home_dir() -> Option<PathBuf> {
        std::env::var_os("HOME").map(PathBuf::from)
    }

    /// Returns the Meridian home directory.
    ///
    /// Checks MERIDIAN_HOME env var first, falls back to ~/.config/meridian
    pub fn meridian_home() -> PathBuf {
        if let Ok(home) = std::env::var("MERIDIAN_HOME") {
            return PathBuf::from(home);
        }

        home_dir()
            .map(|h| h.join(".config").join("meridian"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        meridian_home().join("config.toml")
    }

    /// Returns the directory where log files are written.
    pub fn logs_dir() -> PathBuf {
        meridian_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base address of the advisory backend.
    pub base_url: String,

    /// Request timeout in seconds for every backend call.
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: Self::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    const DEFAULT_BASE_URL: &str = "https://api.meridianadvisory.example/";
    const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Loads configuration from the default config path.
    ///
    /// `MERIDIAN_BASE_URL` overrides the file's base address when set.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&paths::config_path())?;
        if let Ok(base) = std::env::var("MERIDIAN_BASE_URL")
            && !base.trim().is_empty()
        {
            config.base_url = base;
        }
        Ok(config)
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the commented default template to the default config path.
    ///
    /// Refuses to overwrite an existing file.
    pub fn init() -> Result<std::path::PathBuf> {
        let path = paths::config_path();
        if path.exists() {
            anyhow::bail!("Config already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, default_config_template())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Returns the configured request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.base_url, Config::DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout_secs, Config::DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "base_url = \"http://localhost:8080/\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/");
        assert_eq!(config.request_timeout_secs, Config::DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn template_parses_to_defaults() {
        let config: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(config.request_timeout_secs, Config::DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "base_url = [nonsense").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
