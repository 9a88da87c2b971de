//! Configuration merging and precedence handling.
//!
//! This module implements hierarchical merging of configuration sources.
//! Nested sections are merged field by field so that a later file can
//! override a single value without repeating its siblings.

use crate::config::loader::ConfigSource;
use crate::config::schema::{CacheConfig, Config, ExtensionConfig, NetworkConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use respath::config::{CacheConfig, Config, ConfigMerger};
///
/// let low = Config {
///     cache: Some(CacheConfig { ttl_seconds: Some(10) }),
///     ..Default::default()
/// };
/// let high = Config {
///     cache: Some(CacheConfig { ttl_seconds: Some(20) }),
///     ..Default::default()
/// };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.cache.unwrap().ttl_seconds, Some(20));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            log::debug!(
                "merging configuration from {} (precedence {})",
                source.path.display(),
                source.precedence
            );
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Every leaf field of `source` that is `Some` replaces the value in
    /// `target`; `None` leaves the target untouched.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if let Some(ref cache) = source.cache {
            Self::merge_cache(target.cache.get_or_insert_with(Default::default), cache);
        }

        if let Some(ref network) = source.network {
            Self::merge_network(target.network.get_or_insert_with(Default::default), network);
        }

        if let Some(ref extensions) = source.extensions {
            Self::merge_extensions(
                target.extensions.get_or_insert_with(Default::default),
                extensions,
            );
        }
    }

    fn merge_cache(target: &mut CacheConfig, source: &CacheConfig) {
        if source.ttl_seconds.is_some() {
            target.ttl_seconds = source.ttl_seconds;
        }
    }

    fn merge_network(target: &mut NetworkConfig, source: &NetworkConfig) {
        if source.read_timeout_ms.is_some() {
            target.read_timeout_ms = source.read_timeout_ms;
        }

        if source.trust_self_signed.is_some() {
            target.trust_self_signed = source.trust_self_signed;
        }
    }

    fn merge_extensions(target: &mut ExtensionConfig, source: &ExtensionConfig) {
        if source.legacy.is_some() {
            target.legacy.clone_from(&source.legacy);
        }

        if source.current.is_some() {
            target.current.clone_from(&source.current);
        }
    }
}
