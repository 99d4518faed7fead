//! Application configuration from the environment.

use std::net::SocketAddr;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::fetcher::HzppConfig;
use crate::transport::TransportConfig;

const DEFAULT_PORT: u16 = 3000;

/// A day; moka rejects very long TTLs at build time.
const CACHE_TTL_SECS: RangeInclusive<u64> = 1..=24 * 60 * 60;

/// Zero permits would leave every request queued forever.
const MAX_CONCURRENT: RangeInclusive<usize> = 1..=1000;

const CONNECT_TIMEOUT_SECS: RangeInclusive<u64> = 1..=300;

/// Error returned when an environment variable holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {key}")]
pub struct ConfigError {
    key: &'static str,
    value: String,
}

/// Everything the binary needs to wire up the tracker.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the web server listens on
    pub bind: SocketAddr,
    pub transport: TransportConfig,
    pub cache: CacheConfig,
    pub hzpp: HzppConfig,
}

impl AppConfig {
    /// Read configuration from `TRAINTRACKER_*` environment variables.
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind = parse_or(&lookup, "TRAINTRACKER_BIND", || {
            SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT))
        })?;

        let defaults = TransportConfig::default();
        let transport = defaults
            .clone()
            .with_connect_timeout(parse_within(
                &lookup,
                "TRAINTRACKER_CONNECT_TIMEOUT_SECS",
                CONNECT_TIMEOUT_SECS,
                || defaults.connect_timeout_secs,
            )?)
            .with_max_concurrent(parse_within(
                &lookup,
                "TRAINTRACKER_MAX_CONCURRENT",
                MAX_CONCURRENT,
                || defaults.max_concurrent,
            )?);

        let cache_defaults = CacheConfig::default();
        let cache = CacheConfig::default()
            .with_ttl(Duration::from_secs(parse_within(
                &lookup,
                "TRAINTRACKER_CACHE_TTL_SECS",
                CACHE_TTL_SECS,
                || cache_defaults.ttl.as_secs(),
            )?))
            .with_max_capacity(parse_or(&lookup, "TRAINTRACKER_CACHE_CAPACITY", || {
                cache_defaults.max_capacity
            })?);

        let hzpp = HzppConfig::default().with_fetch_overview(parse_or(
            &lookup,
            "TRAINTRACKER_FETCH_OVERVIEW",
            || false,
        )?);

        Ok(Self {
            bind,
            transport,
            cache,
            hzpp,
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: impl FnOnce() -> T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError { key, value }),
        None => {
            tracing::trace!("{key} not set, using default");
            Ok(default())
        }
    }
}

/// Like [`parse_or`], but values outside `range` are rejected too.
fn parse_within<T: FromStr + PartialOrd>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    range: RangeInclusive<T>,
    default: impl FnOnce() -> T,
) -> Result<T, ConfigError> {
    let value = parse_or(lookup, key, default)?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError {
            key,
            value: lookup(key).unwrap_or_default(),
        })
    }
}
