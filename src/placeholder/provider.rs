//! The placeholder provider: config + instant -> placeholder set.

use std::sync::Arc;
use std::time::Instant;

use rand::Rng;

use super::hostinfo::{self, HostMetrics, SystemHostMetrics};
use super::random::set_rand_placeholders;
use super::runtime::{set_runtime_placeholders, RuntimeStats};
use super::time::{set_all_time_placeholders, Clock, Now, SystemClock};
use super::value::{PlaceholderSet, PlaceholderSetBuilder};
use super::version::{set_version_placeholders, HostVersion};
use crate::config::PlaceholderConfig;
use crate::metrics::PlaceholderMetrics;

/// Computes the `extra.*` placeholders for a request.
///
/// The provider holds only immutable configuration and read-only
/// collaborators, so one instance is shared by all requests.
#[derive(Clone)]
pub struct PlaceholderProvider {
    config: PlaceholderConfig,
    version: HostVersion,
    host: Arc<dyn HostMetrics>,
    clock: Arc<dyn Clock>,
}

impl PlaceholderProvider {
    pub fn new(
        config: PlaceholderConfig,
        version: HostVersion,
        host: Arc<dyn HostMetrics>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            version,
            host,
            clock,
        }
    }

    /// Provider wired to the real system clock and host metrics
    pub fn system(config: PlaceholderConfig) -> Self {
        Self::new(
            config,
            HostVersion::from_build(),
            Arc::new(SystemHostMetrics),
            Arc::new(SystemClock),
        )
    }

    pub fn config(&self) -> &PlaceholderConfig {
        &self.config
    }

    /// Compute a fresh set using the clock and the thread-local generator.
    pub fn compute(&self) -> PlaceholderSet {
        let started = Instant::now();
        let now = self.clock.now();
        let set = self.compute_at(&now, &mut rand::rng());
        PlaceholderMetrics::record_computed(started.elapsed());
        set
    }

    /// Compute a set for a given instant with a caller-supplied generator.
    ///
    /// Never fails: unavailable host metrics and an unusable random range
    /// degrade instead of aborting the remaining keys.
    pub fn compute_at<R: Rng + ?Sized>(&self, now: &Now, rng: &mut R) -> PlaceholderSet {
        let mut out = PlaceholderSetBuilder::default();

        set_version_placeholders(&mut out, &self.version);
        set_rand_placeholders(
            &mut out,
            rng,
            self.config.rand_int_min,
            self.config.rand_int_max,
        );
        if !self.config.disable_loadavg_placeholders {
            hostinfo::set_loadavg_placeholders(&mut out, self.host.as_ref());
        }
        hostinfo::set_hostinfo_placeholders(&mut out, self.host.as_ref());
        set_runtime_placeholders(&mut out, RuntimeStats::current());
        set_all_time_placeholders(&mut out, now, &self.config.time_format_custom);

        out.build()
    }
}

impl std::fmt::Debug for PlaceholderProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaceholderProvider")
            .field("config", &self.config)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::DateTime;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::placeholder::hostinfo::{LoadAverage, StaticHostMetrics, UPTIME_ERROR};
    use crate::placeholder::keys;
    use crate::placeholder::time::FixedClock;

    fn healthy_host() -> StaticHostMetrics {
        StaticHostMetrics {
            load: Some(LoadAverage {
                one: 0.42,
                five: 0.3,
                fifteen: 0.12,
            }),
            uptime: Some(Duration::from_secs(3 * 3600 + 25 * 60 + 9)),
        }
    }

    fn provider(config: PlaceholderConfig, host: StaticHostMetrics) -> PlaceholderProvider {
        let local = DateTime::parse_from_rfc3339("2024-12-31T23:30:05-05:00").unwrap();
        PlaceholderProvider::new(
            config,
            HostVersion::new("v1.2.3", "v1.2.3 test"),
            Arc::new(host),
            Arc::new(FixedClock::new(local, "EST")),
        )
    }

    fn compute(p: &PlaceholderProvider, seed: u64) -> PlaceholderSet {
        let now = p.clock.now();
        p.compute_at(&now, &mut StdRng::seed_from_u64(seed))
    }

    fn expected_keys() -> Vec<String> {
        let mut expected: Vec<String> = [
            keys::VERSION_SIMPLE,
            keys::VERSION_FULL,
            keys::RAND_FLOAT,
            keys::RAND_INT,
            keys::LOADAVG_1,
            keys::LOADAVG_5,
            keys::LOADAVG_15,
            keys::HOSTINFO_UPTIME,
        ]
        .iter()
        .map(|k| k.to_string())
        .collect();
        for base in [keys::TIME_LOCAL_BASE, keys::TIME_UTC_BASE] {
            for field in keys::TIME_FIELDS {
                expected.push(keys::time_key(base, field));
            }
        }
        expected.sort();
        expected
    }

    #[test]
    fn test_full_key_set() {
        let p = provider(PlaceholderConfig::default(), healthy_host());
        let set = compute(&p, 1);
        let keys: Vec<String> = set.keys().map(String::from).collect();
        assert_eq!(keys, expected_keys());

        assert_eq!(set.get(keys::VERSION_SIMPLE).and_then(|v| v.as_str()), Some("v1.2.3"));
        assert_eq!(
            set.get(keys::HOSTINFO_UPTIME).and_then(|v| v.as_str()),
            Some("3h25m9s")
        );
        assert_eq!(set.get(keys::LOADAVG_1).and_then(|v| v.as_float()), Some(0.42));
        assert_eq!(
            set.get("extra.time.now.custom").and_then(|v| v.as_str()),
            Some("2024-12-31 23:30:05")
        );
    }

    #[test]
    fn test_key_set_is_deterministic_across_calls() {
        let p = provider(PlaceholderConfig::default(), healthy_host());
        let first: Vec<String> = compute(&p, 1).keys().map(String::from).collect();
        let second: Vec<String> = compute(&p, 2).keys().map(String::from).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rand_int_respects_config() {
        let config = PlaceholderConfig {
            rand_int_min: 500,
            rand_int_max: 505,
            ..PlaceholderConfig::default()
        };
        let p = provider(config, healthy_host());
        for seed in 0..500 {
            let v = compute(&p, seed)
                .get(keys::RAND_INT)
                .and_then(|v| v.as_int())
                .unwrap();
            assert!((500..=505).contains(&v));
        }
    }

    #[test]
    fn test_misconfigured_range_falls_back_at_request_time() {
        let config = PlaceholderConfig {
            rand_int_min: 10,
            rand_int_max: 3,
            ..PlaceholderConfig::default()
        };
        assert!(config.validate().is_err());

        let p = provider(config, healthy_host());
        for seed in 0..500 {
            let v = compute(&p, seed)
                .get(keys::RAND_INT)
                .and_then(|v| v.as_int())
                .unwrap();
            assert!((0..=100).contains(&v));
        }
    }

    /// Load averages disappear on failure while uptime gets a sentinel.
    /// The asymmetry is intentional and kept as observed behaviour.
    #[test]
    fn test_metric_failure_quirk_omits_loadavg_but_sets_uptime_sentinel() {
        let p = provider(PlaceholderConfig::default(), StaticHostMetrics::unavailable());
        let set = compute(&p, 3);

        assert!(!set.contains_key(keys::LOADAVG_1));
        assert!(!set.contains_key(keys::LOADAVG_5));
        assert!(!set.contains_key(keys::LOADAVG_15));
        assert_eq!(
            set.get(keys::HOSTINFO_UPTIME).and_then(|v| v.as_str()),
            Some(UPTIME_ERROR)
        );

        // everything else is still there
        assert_eq!(set.len(), expected_keys().len() - 3);
        assert_eq!(
            set.get("extra.time.now.utc.timezone_name").and_then(|v| v.as_str()),
            Some("UTC")
        );
        assert!(set.contains_key(keys::RAND_FLOAT));
        assert!(set.contains_key(keys::VERSION_FULL));
    }

    #[test]
    fn test_disable_loadavg_omits_keys_even_when_available() {
        let config = PlaceholderConfig {
            disable_loadavg_placeholders: true,
            ..PlaceholderConfig::default()
        };
        let p = provider(config, healthy_host());
        let set = compute(&p, 4);
        assert!(!set.contains_key(keys::LOADAVG_1));
        assert!(!set.contains_key(keys::LOADAVG_15));
        assert!(set.contains_key(keys::HOSTINFO_UPTIME));
    }

    #[test]
    fn test_custom_format_applies_to_both_variants() {
        let config = PlaceholderConfig {
            time_format_custom: "%H:%M".to_string(),
            ..PlaceholderConfig::default()
        };
        let p = provider(config, healthy_host());
        let set = compute(&p, 5);
        assert_eq!(set.get("extra.time.now.custom").and_then(|v| v.as_str()), Some("23:30"));
        assert_eq!(
            set.get("extra.time.now.utc.custom").and_then(|v| v.as_str()),
            Some("04:30")
        );
    }

    #[test]
    fn test_system_provider_computes() {
        let set = PlaceholderProvider::system(PlaceholderConfig::default()).compute();
        assert!(set.contains_key(keys::HOSTINFO_UPTIME));
        assert!(set.contains_key("extra.time.now.utc.custom"));
    }
}
