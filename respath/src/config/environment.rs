//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `RESPATH_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Overrides the cache time-to-live, in seconds.
pub const ENV_CACHE_TTL_SECONDS: &str = "RESPATH_CACHE_TTL_SECONDS";
/// Overrides the network read timeout, in milliseconds.
pub const ENV_READ_TIMEOUT_MS: &str = "RESPATH_READ_TIMEOUT_MS";
/// Overrides whether self-signed `https` certificates are accepted.
pub const ENV_TRUST_SELF_SIGNED: &str = "RESPATH_TRUST_SELF_SIGNED";
/// Overrides the legacy file extension.
pub const ENV_LEGACY_EXTENSION: &str = "RESPATH_LEGACY_EXTENSION";
/// Overrides the current file extension.
pub const ENV_CURRENT_EXTENSION: &str = "RESPATH_CURRENT_EXTENSION";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use respath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric timeout, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(ENV_CACHE_TTL_SECONDS) {
            let cache = config.cache.get_or_insert_with(Default::default);
            cache.ttl_seconds = Some(Self::parse_u64(ENV_CACHE_TTL_SECONDS, &val)?);
        }

        if let Ok(val) = env::var(ENV_READ_TIMEOUT_MS) {
            let network = config.network.get_or_insert_with(Default::default);
            network.read_timeout_ms = Some(Self::parse_u64(ENV_READ_TIMEOUT_MS, &val)?);
        }

        if let Ok(val) = env::var(ENV_TRUST_SELF_SIGNED) {
            let network = config.network.get_or_insert_with(Default::default);
            network.trust_self_signed = Some(Self::parse_bool(ENV_TRUST_SELF_SIGNED, &val)?);
        }

        if let Ok(val) = env::var(ENV_LEGACY_EXTENSION) {
            let extensions = config.extensions.get_or_insert_with(Default::default);
            extensions.legacy = Some(val);
        }

        if let Ok(val) = env::var(ENV_CURRENT_EXTENSION) {
            let extensions = config.extensions.get_or_insert_with(Default::default);
            extensions.current = Some(val);
        }

        Ok(())
    }

    /// Parse a boolean from common string representations.
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    fn parse_u64(field: &str, s: &str) -> Result<u64> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Must be a non-negative integer, got '{s}'"),
        })
    }
}
