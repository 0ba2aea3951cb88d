//! Project configuration management for `svgvar.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/   # [build] section
//! ├── error      # ConfigError, ConfigDiagnostics
//! ├── util       # config file discovery
//! └── mod.rs     # ProjectConfig (this file)
//! ```

mod error;
mod section;
mod util;

pub use error::{ConfigDiagnostics, ConfigError};
pub use section::{BuildConfig, ColorMode};

use crate::{cli::BuildArgs, debug};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing svgvar.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,
}

impl ProjectConfig {
    /// Load configuration for the `build` command.
    ///
    /// Searches upward from cwd for `config_name`. Without a config file the
    /// defaults apply and cwd is the project root. CLI arguments override
    /// file values.
    pub fn load(config_name: &Path, args: &BuildArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match util::find_config_file(config_name) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = Some(path);
                config
            }
            None => {
                debug!("config"; "`{}` not found, using defaults", config_name.display());
                Self {
                    root: cwd.clone(),
                    ..Self::default()
                }
            }
        };

        config.normalize_paths();
        config.apply_build_args(args, &cwd);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::parse(&content)
    }

    /// Resolve relative paths against the project root.
    fn normalize_paths(&mut self) {
        self.build.input = self.root.join(&self.build.input);
        self.build.output = self.root.join(&self.build.output);
    }

    /// Apply build arguments from CLI. Paths are relative to cwd.
    fn apply_build_args(&mut self, args: &BuildArgs, cwd: &Path) {
        if let Some(input) = &args.input {
            self.build.input = cwd.join(input);
        }
        if let Some(output) = &args.output {
            self.build.output = cwd.join(output);
        }
        Self::update_option(&mut self.build.minify, args.minify.as_ref());
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.build.validate(&mut diag);
        diag.into_result()
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }
}
