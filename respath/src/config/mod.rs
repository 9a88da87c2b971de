//! Configuration system for respath.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`RESPATH_*`)
//! 3. Private project config (`respath.local.yaml`)
//! 4. Project config (`respath.yaml`)
//! 5. User config (`~/.respath/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! Basic usage with defaults:
//!
//! ```no_run
//! use respath::config::ConfigBuilder;
//!
//! let settings = ConfigBuilder::new()
//!     .build()
//!     .unwrap()
//!     .resolved();
//!
//! println!("Cache TTL: {:?}", settings.cache_ttl);
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use respath::config::{Config, ConfigBuilder, ExtensionConfig};
//!
//! let custom = Config {
//!     extensions: Some(ExtensionConfig {
//!         legacy: Some("adl".to_string()),
//!         current: Some("display".to_string()),
//!     }),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.resolved().legacy_extension, "adl");
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{
    default_config_dir, ConfigLoader, ConfigSource, LOCAL_CONFIG_FILE, PROJECT_CONFIG_FILE,
    USER_CONFIG_FILE,
};
pub use merger::ConfigMerger;
pub use schema::{
    CacheConfig, Config, ExtensionConfig, NetworkConfig, ResolverSettings,
    DEFAULT_CACHE_TTL_SECONDS, DEFAULT_CURRENT_EXTENSION, DEFAULT_LEGACY_EXTENSION,
    DEFAULT_READ_TIMEOUT_MS,
};
pub use validator::ConfigValidator;
