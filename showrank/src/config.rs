//! Configuration resolution for showrank
//!
//! Settings resolve per key with the priority CLI/env override > TOML
//! config file > compiled default. The config file lives in the platform
//! config directory (e.g. `~/.config/showrank/config.toml` on Linux):
//!
//! ```toml
//! base_url = "https://jsonmock.hackerrank.com/api/tvseries"
//! timeout_secs = 10
//! ```
//!
//! A missing file is normal; a broken one degrades to defaults with a
//! warning rather than blocking the search.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::catalog::{DEFAULT_BASE_URL, FETCH_TIMEOUT};

/// Resolved catalog settings.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base endpoint URL; the page index is sent as a query parameter.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: FETCH_TIMEOUT,
        }
    }
}

impl CatalogConfig {
    /// Merge override values (CLI or environment) over the user's config
    /// file over compiled defaults.
    pub fn resolve(base_url: Option<String>, timeout_secs: Option<u64>) -> Self {
        Self::resolve_with_file(base_url, timeout_secs, ConfigFile::load_default())
    }

    /// Merge against an explicit file config. Split out so tests can
    /// exercise the priority order without touching the filesystem.
    pub fn resolve_with_file(
        base_url: Option<String>,
        timeout_secs: Option<u64>,
        file: ConfigFile,
    ) -> Self {
        let defaults = Self::default();
        Self {
            base_url: base_url.or(file.base_url).unwrap_or(defaults.base_url),
            timeout: timeout_secs
                .or(file.timeout_secs)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }
}

/// On-disk config file contents. Every key is optional.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ConfigFile {
    /// Parse config file contents.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load the config file from the platform config directory, falling
    /// back to the empty config when there is none.
    pub fn load_default() -> Self {
        match default_config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load a config file from an explicit path. Missing, unreadable, and
    /// malformed files all degrade to the empty config; the latter two log
    /// a warning.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring unreadable config file");
                return Self::default();
            }
        };

        match Self::from_toml(&content) {
            Ok(config) => {
                debug!(path = %path.display(), "Loaded config file");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring malformed config file");
                Self::default()
            }
        }
    }
}

/// Default config file location (`<config_dir>/showrank/config.toml`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("showrank").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_from_toml_full() {
        let file = ConfigFile::from_toml(
            "base_url = \"http://localhost:8080/api\"\ntimeout_secs = 30\n",
        )
        .unwrap();
        assert_eq!(file.base_url.as_deref(), Some("http://localhost:8080/api"));
        assert_eq!(file.timeout_secs, Some(30));
    }

    #[test]
    fn test_from_toml_partial_and_empty() {
        let partial = ConfigFile::from_toml("timeout_secs = 5\n").unwrap();
        assert_eq!(partial.base_url, None);
        assert_eq!(partial.timeout_secs, Some(5));

        let empty = ConfigFile::from_toml("").unwrap();
        assert_eq!(empty.base_url, None);
        assert_eq!(empty.timeout_secs, None);
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        assert!(ConfigFile::from_toml("base_url = [not toml").is_err());
    }

    #[test]
    fn test_resolve_priority_override_beats_file_beats_default() {
        let file = ConfigFile {
            base_url: Some("http://from-file/api".to_string()),
            timeout_secs: Some(20),
        };

        let overridden = CatalogConfig::resolve_with_file(
            Some("http://from-cli/api".to_string()),
            Some(3),
            file,
        );
        assert_eq!(overridden.base_url, "http://from-cli/api");
        assert_eq!(overridden.timeout, Duration::from_secs(3));

        let from_file = CatalogConfig::resolve_with_file(
            None,
            None,
            ConfigFile {
                base_url: Some("http://from-file/api".to_string()),
                timeout_secs: Some(20),
            },
        );
        assert_eq!(from_file.base_url, "http://from-file/api");
        assert_eq!(from_file.timeout, Duration::from_secs(20));

        let defaults = CatalogConfig::resolve_with_file(None, None, ConfigFile::default());
        assert_eq!(defaults.base_url, DEFAULT_BASE_URL);
        assert_eq!(defaults.timeout, FETCH_TIMEOUT);
    }
}
