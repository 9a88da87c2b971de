//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::{CacheConfig, Config, ExtensionConfig, NetworkConfig};
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn extension_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(prop::option::of(1u64..=86_400)),
        prop::option::of((
            prop::option::of(1u64..=600_000),
            prop::option::of(any::<bool>()),
        )),
        prop::option::of((
            prop::option::of(extension_strategy()),
            prop::option::of(extension_strategy()),
        )),
    )
        .prop_map(|(cache, network, extensions)| Config {
            cache: cache.map(|ttl_seconds| CacheConfig { ttl_seconds }),
            network: network.map(|(read_timeout_ms, trust_self_signed)| NetworkConfig {
                read_timeout_ms,
                trust_self_signed,
            }),
            extensions: extensions.map(|(legacy, current)| ExtensionConfig { legacy, current }),
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // A value set in the higher source always wins, otherwise the lower one persists
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        let low_settings = low.resolved();
        let high_ttl = high.cache.as_ref().and_then(|c| c.ttl_seconds);
        let high_timeout = high.network.as_ref().and_then(|n| n.read_timeout_ms);
        let high_legacy = high.extensions.as_ref().and_then(|e| e.legacy.clone());

        let settings = merged.resolved();
        prop_assert_eq!(
            settings.cache_ttl.as_secs(),
            high_ttl.unwrap_or(low_settings.cache_ttl.as_secs())
        );
        prop_assert_eq!(
            u64::try_from(settings.read_timeout.as_millis()).unwrap(),
            high_timeout.unwrap_or(u64::try_from(low_settings.read_timeout.as_millis()).unwrap())
        );
        prop_assert_eq!(
            settings.legacy_extension,
            high_legacy.unwrap_or(low_settings.legacy_extension)
        );
    }

    // Empty config is identity element for merge
    #[test]
    fn config_merge_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(&merged, &config);

        let mut from_empty = Config::default();
        ConfigMerger::merge_into(&mut from_empty, &config);
        prop_assert_eq!(from_empty, config);
    }

    // Merging is associative
    #[test]
    fn config_merge_associative(
        a in config_strategy(),
        b in config_strategy(),
        c in config_strategy()
    ) {
        let mut left = a.clone();
        ConfigMerger::merge_into(&mut left, &b);
        ConfigMerger::merge_into(&mut left, &c);

        let mut right = a;
        let mut b_merge_c = b;
        ConfigMerger::merge_into(&mut b_merge_c, &c);
        ConfigMerger::merge_into(&mut right, &b_merge_c);

        prop_assert_eq!(left, right);
    }

    // Positive numbers and distinct plain extensions always validate
    #[test]
    fn generated_configs_validate_unless_extensions_collide(config in config_strategy()) {
        let settings = config.resolved();
        let result = ConfigValidator::validate(&config);
        if settings.legacy_extension == settings.current_extension {
            prop_assert!(result.is_err());
        } else {
            prop_assert!(result.is_ok());
        }
    }
}
