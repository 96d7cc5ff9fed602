//! Application configuration.
//!
//! Read from `ecofinds.toml` (or JSON when the file ends in `.json`). Every
//! section is optional; missing values fall back to the defaults below.

use crate::error::AppError;
use ecofinds_session::MAX_PROFILE_IMAGE_BYTES;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["ecofinds.toml", ".ecofinds.toml", "ecofinds.json"];

/// Environment variable that overrides `[logging] level`.
pub const LOG_LEVEL_ENV: &str = "ECOFINDS_LOG";

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Store configuration.
    #[serde(default)]
    pub store: StoreConfig,

    /// Profile image upload configuration.
    #[serde(default)]
    pub upload: UploadConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| {
                AppError::Config(format!("failed to parse JSON config {}: {}", path.display(), e))
            })
        } else {
            toml::from_str(&content).map_err(|e| {
                AppError::Config(format!("failed to parse TOML config {}: {}", path.display(), e))
            })
        }
    }

    /// Find a config file in `start` or one of its parents.
    pub fn find(start: &Path) -> Option<PathBuf> {
        start.ancestors().find_map(|dir| {
            CONFIG_FILE_NAMES
                .iter()
                .map(|name| dir.join(name))
                .find(|candidate| candidate.is_file())
        })
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must load. Otherwise the directory tree above `cwd`
    /// is searched, and defaults are used when nothing is found. Returns the
    /// file that was used, if any.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<(Self, Option<PathBuf>), AppError> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::find(cwd),
        };

        match path {
            Some(path) => Ok((Self::load(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    /// Apply a log level override, e.g. from [`LOG_LEVEL_ENV`].
    pub fn with_log_level_override(mut self, level: Option<String>) -> Self {
        if let Some(level) = level.filter(|l| !l.trim().is_empty()) {
            self.logging.level = level.trim().to_string();
        }
        self
    }

    /// Apply overrides taken from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_log_level_override(std::env::var(LOG_LEVEL_ENV).ok())
    }
}

/// In-memory store configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Start with the sample listings.
    #[serde(default = "default_true")]
    pub seed_catalog: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { seed_catalog: true }
    }
}

/// Profile image upload limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Largest accepted file, in bytes.
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_image_bytes: default_max_image_bytes(),
        }
    }
}

/// Logging output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Human,
    /// One JSON object per line.
    Json,
}

fn default_true() -> bool {
    true
}

fn default_max_image_bytes() -> u64 {
    MAX_PROFILE_IMAGE_BYTES
}

fn default_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.store.seed_catalog);
        assert_eq!(config.upload.max_image_bytes, 5 * 1024 * 1024);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Human);
    }

    #[test]
    fn test_load_partial_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ecofinds.toml");
        fs::write(
            &path,
            "[store]\nseed_catalog = false\n\n[logging]\nformat = \"json\"\n",
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert!(!config.store.seed_catalog);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.upload, UploadConfig::default());
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ecofinds.json");
        fs::write(&path, r#"{"upload": {"max_image_bytes": 1024}}"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.upload.max_image_bytes, 1024);
        assert!(config.store.seed_catalog);
    }

    #[test]
    fn test_load_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ecofinds.toml");
        fs::write(&path, "[store\nseed_catalog = ").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_find_searches_parents() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(".ecofinds.toml"), "").unwrap();

        assert_eq!(
            AppConfig::find(&nested),
            Some(dir.path().join(".ecofinds.toml"))
        );
    }

    #[test]
    fn test_discover_explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(AppConfig::discover(Some(&missing), dir.path()).is_err());
    }

    #[test]
    fn test_log_level_override() {
        let config = AppConfig::default().with_log_level_override(Some("debug".to_string()));
        assert_eq!(config.logging.level, "debug");

        let config = config.with_log_level_override(Some("  ".to_string()));
        assert_eq!(config.logging.level, "debug");

        let config = config.with_log_level_override(None);
        assert_eq!(config.logging.level, "debug");
    }
}
