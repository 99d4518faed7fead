//! Caching layer for voyage lookups.
//!
//! Current positions change over time, so entries expire after a short TTL.
//! Within that window repeated polls for the same voyage are answered from
//! memory. Absent results are cached exactly like present ones.
//!
//! Concurrent lookups for one key share a single upstream fetch: moka's
//! `get_with` runs the initializer once and hands the result to every waiter.
//! If the caller driving the fetch is dropped, one of the waiters takes over.

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::domain::{Carrier, CarrierCode, Voyage, VoyageId};
use crate::fetcher::VoyageFetcher;

/// Cached lookup outcome. `None` is a remembered miss.
type VoyageEntry = Option<Voyage>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_capacity: 1000,
        }
    }
}

impl CacheConfig {
    /// Set the TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set the maximum number of entries.
    pub fn with_max_capacity(mut self, max_capacity: u64) -> Self {
        self.max_capacity = max_capacity;
        self
    }
}

/// Build the cache key for a voyage, e.g. `hzpp:203`.
///
/// Neither component can contain `:`, so keys never collide across carriers.
pub fn cache_key(carrier: CarrierCode, voyage_id: &VoyageId) -> String {
    format!("{}:{}", carrier.as_str(), voyage_id.as_str())
}

/// Voyage fetcher with caching.
///
/// Wraps any `VoyageFetcher` and is itself a `VoyageFetcher`.
pub struct CachedVoyageFetcher<F> {
    inner: F,
    voyages: MokaCache<String, VoyageEntry>,
}

impl<F: VoyageFetcher> CachedVoyageFetcher<F> {
    /// Create a new cached fetcher.
    pub fn new(inner: F, config: &CacheConfig) -> Self {
        let voyages = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, voyages }
    }

    /// Access the underlying fetcher for lookups that bypass the cache.
    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// Get cache statistics.
    pub fn entry_count(&self) -> u64 {
        self.voyages.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.voyages.invalidate_all();
    }
}

#[async_trait]
impl<F: VoyageFetcher> VoyageFetcher for CachedVoyageFetcher<F> {
    fn carrier(&self) -> &Carrier {
        self.inner.carrier()
    }

    async fn get_voyage(&self, voyage_id: &VoyageId) -> Option<Voyage> {
        let key = cache_key(self.inner.carrier().code(), voyage_id);
        trace!(key = %key, "voyage lookup");

        self.voyages
            .get_with(key, self.inner.get_voyage(voyage_id))
            .await
    }
}
