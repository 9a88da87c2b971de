//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! configuration loading and resolver construction.

use crate::error::CliError;
use respath::config::{CacheConfig, NetworkConfig};
use respath::{Config, ConfigBuilder, ResolverSettings, ResourceResolver};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the user configuration directory.
    pub config_dir: Option<PathBuf>,

    /// Override the cache time-to-live (in seconds).
    pub cache_ttl: Option<u64>,

    /// Override the network read timeout (in milliseconds).
    pub read_timeout_ms: Option<u64>,

    /// Accept self-signed certificates for `https` resources.
    pub trust_self_signed: bool,
}

impl GlobalOptions {
    /// Configuration expressing the command-line overrides.
    fn overrides(&self) -> Config {
        let cache = self.cache_ttl.map(|ttl| CacheConfig {
            ttl_seconds: Some(ttl),
        });
        let network = (self.read_timeout_ms.is_some() || self.trust_self_signed).then(|| {
            NetworkConfig {
                read_timeout_ms: self.read_timeout_ms,
                trust_self_signed: self.trust_self_signed.then_some(true),
            }
        });

        Config {
            cache,
            network,
            ..Default::default()
        }
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_config(global.overrides());
    if let Some(ref dir) = global.config_dir {
        builder = builder.with_config_dir(dir);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Load the effective resolver settings.
pub fn load_settings(global: &GlobalOptions) -> Result<ResolverSettings, CliError> {
    Ok(load_configuration(global)?.resolved())
}

/// Build a resolver from the effective configuration.
pub fn build_resolver(global: &GlobalOptions) -> Result<ResourceResolver, CliError> {
    let settings = load_settings(global)?;
    log::debug!("Resolver settings: {settings:?}");
    Ok(ResourceResolver::new(settings))
}
