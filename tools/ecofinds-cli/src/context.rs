//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use ecofinds_app::{AppConfig, AppState};

use crate::output::Output;

/// Global flags that adjust the loaded configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flags {
    /// Raise the log level to `debug`.
    pub verbose: bool,
    /// Skip the sample listings.
    pub no_seed: bool,
}

/// Execution context for CLI commands.
pub struct Context {
    /// Resolved configuration.
    pub config: AppConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    ///
    /// Precedence, lowest first: config file, command-line flags, the
    /// `ECOFINDS_LOG` environment variable.
    pub fn load(config_path: Option<&str>, flags: Flags, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (mut config, config_path) = AppConfig::discover(config_path.map(Path::new), &cwd)
            .context("Failed to load configuration")?;

        if flags.no_seed {
            config.store.seed_catalog = false;
        }
        if flags.verbose {
            config = config.with_log_level_override(Some("debug".to_string()));
        }
        let config = config.with_env_overrides();

        if let Some(path) = &config_path {
            output.debug(&format!("Using config: {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Build a fresh marketplace from the configuration.
    pub fn app_state(&self) -> AppState {
        AppState::new(&self.config)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = PathBuf::from(path.trim());
        if path.is_absolute() {
            path
        } else {
            self.cwd.join(path)
        }
    }
}
