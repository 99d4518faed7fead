//! Application state for the web layer.

use std::sync::Arc;

use crate::domain::CarrierCode;
use crate::fetcher::FetcherRegistry;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Fetchers (already cached) keyed by carrier code
    pub fetchers: Arc<FetcherRegistry>,

    /// Where `/` redirects to
    pub default_carrier: CarrierCode,
}

impl AppState {
    /// Create a new app state.
    pub fn new(fetchers: FetcherRegistry, default_carrier: CarrierCode) -> Self {
        Self {
            fetchers: Arc::new(fetchers),
            default_carrier,
        }
    }
}
