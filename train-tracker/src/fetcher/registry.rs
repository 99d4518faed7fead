//! Carrier code → fetcher dispatch.

use std::collections::HashMap;
use std::sync::Arc;

use super::VoyageFetcher;

/// Routes lookups to the fetcher that serves a carrier.
#[derive(Clone, Default)]
pub struct FetcherRegistry {
    fetchers: HashMap<&'static str, Arc<dyn VoyageFetcher>>,
}

impl FetcherRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fetcher under the code of the carrier it serves.
    ///
    /// A later registration for the same carrier replaces the earlier one.
    pub fn register(mut self, fetcher: Arc<dyn VoyageFetcher>) -> Self {
        let code = fetcher.carrier().code().as_str();
        self.fetchers.insert(code, fetcher);
        self
    }

    /// Find the fetcher for a carrier code.
    pub fn get(&self, code: &str) -> Option<&Arc<dyn VoyageFetcher>> {
        self.fetchers.get(code)
    }

    /// Registered carrier codes, sorted.
    pub fn codes(&self) -> Vec<&'static str> {
        let mut codes: Vec<_> = self.fetchers.keys().copied().collect();
        codes.sort_unstable();
        codes
    }

    pub fn len(&self) -> usize {
        self.fetchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fetchers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::{HzppConfig, HzppVoyageFetcher};
    use crate::transport::mock::MockTransport;

    fn hzpp() -> Arc<dyn VoyageFetcher> {
        Arc::new(HzppVoyageFetcher::new(
            Arc::new(MockTransport::new()),
            HzppConfig::default(),
        ))
    }

    #[test]
    fn dispatches_by_carrier_code() {
        let registry = FetcherRegistry::new().register(hzpp());

        let fetcher = registry.get("hzpp").unwrap();
        assert_eq!(fetcher.carrier().code().as_str(), "hzpp");
        assert!(registry.get("hr").is_none());
        assert!(registry.get("HZPP").is_none());
    }

    #[test]
    fn re_registering_replaces() {
        let registry = FetcherRegistry::new().register(hzpp()).register(hzpp());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.codes(), ["hzpp"]);
    }

    #[test]
    fn empty_registry() {
        let registry = FetcherRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("hzpp").is_none());
    }
}
