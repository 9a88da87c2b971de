//! Configuration validation.
//!
//! This module checks merged configuration values before they are turned
//! into [`ResolverSettings`](crate::config::ResolverSettings).

use crate::config::schema::{
    CacheConfig, Config, ExtensionConfig, NetworkConfig, DEFAULT_CURRENT_EXTENSION,
    DEFAULT_LEGACY_EXTENSION,
};
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use respath::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref cache) = config.cache {
            Self::validate_cache(cache)?;
        }

        if let Some(ref network) = config.network {
            Self::validate_network(network)?;
        }

        if let Some(ref extensions) = config.extensions {
            Self::validate_extensions(extensions)?;
        }

        Ok(())
    }

    fn validate_cache(cache: &CacheConfig) -> Result<()> {
        if cache.ttl_seconds == Some(0) {
            return Err(Error::Validation {
                field: "cache.ttl_seconds".into(),
                message: "TTL must be greater than 0".into(),
            });
        }
        Ok(())
    }

    fn validate_network(network: &NetworkConfig) -> Result<()> {
        if network.read_timeout_ms == Some(0) {
            return Err(Error::Validation {
                field: "network.read_timeout_ms".into(),
                message: "Timeout must be greater than 0".into(),
            });
        }
        Ok(())
    }

    /// Validate the extension pair.
    ///
    /// Unset members fall back to their defaults before the pair is compared.
    fn validate_extensions(extensions: &ExtensionConfig) -> Result<()> {
        if let Some(ref legacy) = extensions.legacy {
            Self::validate_extension("extensions.legacy", legacy)?;
        }

        if let Some(ref current) = extensions.current {
            Self::validate_extension("extensions.current", current)?;
        }

        let legacy = extensions
            .legacy
            .as_deref()
            .unwrap_or(DEFAULT_LEGACY_EXTENSION);
        let current = extensions
            .current
            .as_deref()
            .unwrap_or(DEFAULT_CURRENT_EXTENSION);

        if legacy == current {
            return Err(Error::Validation {
                field: "extensions".into(),
                message: format!("legacy and current extensions are both '{legacy}'"),
            });
        }

        Ok(())
    }

    fn validate_extension(field: &str, value: &str) -> Result<()> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if let Some(bare) = trimmed.strip_prefix('.') {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Give the extension without a leading dot, e.g. '{bare}'"),
            });
        }

        if trimmed.contains('/') || trimmed.contains('\\') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain path separators".into(),
            });
        }

        Ok(())
    }
}
