//! Configuration schema definitions.
//!
//! This module defines the configuration structure for respath: cache
//! lifetime, network behaviour and the legacy file extension upgrade.
//! Every field is optional so partial files can be layered on top of each
//! other; [`Config::resolved`] fills the gaps with built-in defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default time a fetched URL stays cached.
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 60;

/// Default network read timeout.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 10_000;

/// Extension of legacy display files.
pub const DEFAULT_LEGACY_EXTENSION: &str = "opi";

/// Extension of current display files.
pub const DEFAULT_CURRENT_EXTENSION: &str = "bob";

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use respath::config::{CacheConfig, Config};
///
/// let config = Config {
///     cache: Some(CacheConfig { ttl_seconds: Some(5) }),
///     ..Default::default()
/// };
/// assert_eq!(config.resolved().cache_ttl.as_secs(), 5);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Content cache settings.
    pub cache: Option<CacheConfig>,

    /// Network access settings.
    pub network: Option<NetworkConfig>,

    /// Legacy-to-current file extension upgrade.
    pub extensions: Option<ExtensionConfig>,
}

/// Content cache configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// How long a fetched value remains valid before the next lookup re-fetches.
    pub ttl_seconds: Option<u64>,
}

/// Network access configuration.
///
/// # Examples
///
/// ```
/// use respath::config::NetworkConfig;
///
/// let config = NetworkConfig {
///     read_timeout_ms: Some(2_000),
///     trust_self_signed: Some(true),
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfig {
    /// Read timeout for a single URL fetch, in milliseconds.
    pub read_timeout_ms: Option<u64>,

    /// Accept any certificate chain and host name for `https` URLs.
    ///
    /// Only meant for internal servers with self-signed certificates.
    pub trust_self_signed: Option<bool>,
}

/// File extension upgrade configuration.
///
/// A reference to `name.<legacy>` is first tried as `name.<current>`.
/// Extensions are given without the leading dot.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExtensionConfig {
    /// Extension of legacy files, e.g. `opi`.
    pub legacy: Option<String>,

    /// Extension of current files, e.g. `bob`.
    pub current: Option<String>,
}

/// Concrete settings for a resource resolver, with all defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSettings {
    /// Time-to-live of cached URL content.
    pub cache_ttl: Duration,

    /// Read timeout for a single URL fetch.
    pub read_timeout: Duration,

    /// Accept any certificate chain and host name for `https` URLs.
    pub trust_self_signed: bool,

    /// Extension of legacy files, without the dot.
    pub legacy_extension: String,

    /// Extension of current files, without the dot.
    pub current_extension: String,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Config::default().resolved()
    }
}

impl From<&ResolverSettings> for Config {
    /// Express concrete settings as a fully populated configuration.
    fn from(settings: &ResolverSettings) -> Self {
        Self {
            cache: Some(CacheConfig {
                ttl_seconds: Some(settings.cache_ttl.as_secs()),
            }),
            network: Some(NetworkConfig {
                read_timeout_ms: Some(
                    u64::try_from(settings.read_timeout.as_millis()).unwrap_or(u64::MAX),
                ),
                trust_self_signed: Some(settings.trust_self_signed),
            }),
            extensions: Some(ExtensionConfig {
                legacy: Some(settings.legacy_extension.clone()),
                current: Some(settings.current_extension.clone()),
            }),
        }
    }
}

impl Config {
    /// Apply built-in defaults to every unset field.
    ///
    /// # Examples
    ///
    /// ```
    /// use respath::config::Config;
    /// use std::time::Duration;
    ///
    /// let settings = Config::default().resolved();
    /// assert_eq!(settings.cache_ttl, Duration::from_secs(60));
    /// assert_eq!(settings.read_timeout, Duration::from_millis(10_000));
    /// assert!(!settings.trust_self_signed);
    /// assert_eq!(settings.legacy_extension, "opi");
    /// assert_eq!(settings.current_extension, "bob");
    /// ```
    #[must_use]
    pub fn resolved(&self) -> ResolverSettings {
        let cache = self.cache.clone().unwrap_or_default();
        let network = self.network.clone().unwrap_or_default();
        let extensions = self.extensions.clone().unwrap_or_default();

        ResolverSettings {
            cache_ttl: Duration::from_secs(cache.ttl_seconds.unwrap_or(DEFAULT_CACHE_TTL_SECONDS)),
            read_timeout: Duration::from_millis(
                network.read_timeout_ms.unwrap_or(DEFAULT_READ_TIMEOUT_MS),
            ),
            trust_self_signed: network.trust_self_signed.unwrap_or(false),
            legacy_extension: extensions
                .legacy
                .unwrap_or_else(|| DEFAULT_LEGACY_EXTENSION.to_string()),
            current_extension: extensions
                .current
                .unwrap_or_else(|| DEFAULT_CURRENT_EXTENSION.to_string()),
        }
    }
}
