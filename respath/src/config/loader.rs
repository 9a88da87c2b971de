//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading respath configuration files
//! from various locations with proper precedence.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the user configuration file inside the configuration directory.
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// Name of the shared project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "respath.yaml";

/// Name of the private, uncommitted project configuration file.
pub const LOCAL_CONFIG_FILE: &str = "respath.local.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use respath::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.respath/config.yaml` (precedence 1)
    /// 2. Project `respath.yaml` walking up from `working_dir` (precedence 2)
    /// 3. Project `respath.local.yaml` next to it (precedence 3)
    ///
    /// The `config_dir` parameter overrides where the user config is loaded from.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, config_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(config_dir)? {
            sources.push(user_config);
        }

        sources.extend(Self::discover_project_configs(working_dir)?);

        // Higher precedence last for easier merging
        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    /// Load the user configuration file, if there is one.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if no `config_dir` is given and the home directory is unknown.
    fn load_user_config(config_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match config_dir {
            Some(dir) => dir.join(USER_CONFIG_FILE),
            None => default_config_dir()?.join(USER_CONFIG_FILE),
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Discover project configurations by walking up directories.
    ///
    /// Stops at the first directory containing either `respath.yaml` or
    /// `respath.local.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if any discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut configs = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            for (name, precedence) in [(PROJECT_CONFIG_FILE, 2), (LOCAL_CONFIG_FILE, 3)] {
                let candidate = current.join(name);
                if candidate.exists() {
                    let config = Self::load_file(&candidate)?;
                    configs.push(ConfigSource {
                        path: candidate,
                        precedence,
                        config,
                    });
                }
            }

            if !configs.is_empty() || !current.pop() {
                break;
            }
        }

        Ok(configs)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file is an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }
}

/// The default user configuration directory, `~/.respath`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_config_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: PathBuf::from("~"),
        reason: "Cannot determine home directory".to_string(),
    })?;
    Ok(home.join(".respath"))
}
