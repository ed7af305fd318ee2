//! Configuration management for folio.
//!
//! Loads configuration from ${FOLIO_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the portfolio backend.
    pub base_url: String,
}

impl Config {
    /// Backend address used when nothing else is configured.
    pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
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

    /// Saves only the base URL to the default config file.
    pub fn save_base_url(base_url: &str) -> Result<()> {
        Self::save_base_url_to(&paths::config_path(), base_url)
    }

    /// Saves only the base URL to a specific config file path.
    ///
    /// Creates the file if it doesn't exist. Preserves existing fields and
    /// comments using toml_edit.
    pub fn save_base_url_to(path: &Path, base_url: &str) -> Result<()> {
        use toml_edit::{value, DocumentMut};

        validate_url(base_url)?;

        let contents = if path.exists() {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?
        } else {
            String::new()
        };
        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        doc["base_url"] = value(base_url);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        fs::write(path, doc.to_string())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Resolves the effective backend base URL.
    ///
    /// Precedence: CLI override > `FOLIO_BASE_URL` env var > config file.
    /// The winning value must parse as a URL.
    pub fn resolve_base_url(&self, cli_override: Option<&str>) -> Result<String> {
        if let Some(cli) = cli_override {
            let trimmed = cli.trim();
            if !trimmed.is_empty() {
                validate_url(trimmed)?;
                return Ok(trimmed.to_string());
            }
        }

        if let Ok(env_url) = std::env::var("FOLIO_BASE_URL") {
            let trimmed = env_url.trim();
            if !trimmed.is_empty() {
                validate_url(trimmed)?;
                return Ok(trimmed.to_string());
            }
        }

        validate_url(&self.base_url)?;
        Ok(self.base_url.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Validates that a URL is well-formed.
fn validate_url(url: &str) -> Result<()> {
    url::Url::parse(url).with_context(|| format!("Invalid backend base URL: {url}"))?;
    Ok(())
}

pub mod paths {
    //! Path resolution for folio configuration and data directories.
    //!
    //! FOLIO_HOME resolution order:
    //! 1. FOLIO_HOME environment variable (if set)
    //! 2. ~/.config/folio (default)

    use std::path::PathBuf;

    /// Returns the folio home directory.
    ///
    /// Checks FOLIO_HOME env var first, falls back to ~/.config/folio
    pub fn folio_home() -> PathBuf {
        if let Ok(home) = std::env::var("FOLIO_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("folio"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        folio_home().join("config.toml")
    }

    /// Returns the path to the local preferences file.
    pub fn prefs_path() -> PathBuf {
        folio_home().join("prefs.json")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        folio_home().join("logs")
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
    }

    #[test]
    fn loads_base_url_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "base_url = \"https://api.example.com\"\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn cli_override_wins() {
        let config = Config::default();
        let resolved = config
            .resolve_base_url(Some("http://127.0.0.1:9000"))
            .unwrap();
        assert_eq!(resolved, "http://127.0.0.1:9000");
    }

    #[test]
    fn malformed_override_is_rejected() {
        let config = Config::default();
        assert!(config.resolve_base_url(Some("not a url")).is_err());
    }

    #[test]
    fn rejects_unparsable_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "base_url = [1, 2]\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn save_base_url_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        Config::save_base_url_to(&path, "https://api.example.com").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn save_base_url_keeps_comments_and_other_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "# my backend\nbase_url = \"http://old.example.com\"\n",
        )
        .unwrap();

        Config::save_base_url_to(&path, "http://new.example.com").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("# my backend"));
        assert!(contents.contains("http://new.example.com"));
    }

    #[test]
    fn save_base_url_rejects_malformed_urls() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(Config::save_base_url_to(&path, "not a url").is_err());
        assert!(!path.exists());
    }
}
