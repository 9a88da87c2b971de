//! Layered configuration assembly.

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Builds a [`Config`] from files, environment and programmatic overrides.
///
/// Sources are merged from lowest to highest precedence: configuration
/// files, then `RESPATH_*` environment variables, then the config passed to
/// [`with_config`](Self::with_config). The result is validated before it is
/// returned.
///
/// # Examples
///
/// ```
/// use respath::config::{CacheConfig, Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         cache: Some(CacheConfig { ttl_seconds: Some(5) }),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.resolved().cache_ttl.as_secs(), 5);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that loads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory where project configuration discovery starts.
    ///
    /// Defaults to the process working directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Directory holding the user `config.yaml`, instead of `~/.respath`.
    #[must_use]
    pub fn with_config_dir(mut self, dir: &Path) -> Self {
        self.config_dir = Some(dir.to_path_buf());
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `RESPATH_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Programmatic overrides, applied on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Load, merge and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed, if
    /// an environment variable holds an invalid value, or if the merged
    /// configuration fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            ConfigMerger::merge(ConfigLoader::load_all(
                &working_dir,
                self.config_dir.as_deref(),
            )?)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
