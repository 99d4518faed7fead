//! HŽ Infrastruktura voyage fetcher.
//!
//! Scrapes the carrier's legacy "hzinfo" pages. The site serves
//! `windows-1250` regardless of what any header claims, so bodies are always
//! decoded with the carrier's fixed encoding.

mod parser;
mod request;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::domain::carrier::{self, Carrier};
use crate::domain::{Voyage, VoyageId};
use crate::transport::HttpTransport;

use super::{FetchError, VoyageFetcher};

pub use parser::{
    ParseError, parse_current_position, parse_overview, try_parse_current_position,
    try_parse_overview,
};
pub use request::{current_position_target, overview_target};

/// Configuration for the HŽ fetcher.
#[derive(Debug, Clone, Default)]
pub struct HzppConfig {
    /// Also fetch the full route overview (a second request per lookup).
    pub fetch_overview: bool,
}

impl HzppConfig {
    /// Enable or disable the overview request.
    pub fn with_fetch_overview(mut self, fetch_overview: bool) -> Self {
        self.fetch_overview = fetch_overview;
        self
    }
}

/// Voyage fetcher for HŽ Infrastruktura.
pub struct HzppVoyageFetcher {
    carrier: Carrier,
    transport: Arc<dyn HttpTransport>,
    clock: Arc<dyn Clock>,
    fetch_overview: bool,
}

impl HzppVoyageFetcher {
    /// Create a fetcher using the system clock.
    pub fn new(transport: Arc<dyn HttpTransport>, config: HzppConfig) -> Self {
        Self::with_clock(transport, Arc::new(SystemClock), config)
    }

    /// Create a fetcher with an explicit clock.
    pub fn with_clock(
        transport: Arc<dyn HttpTransport>,
        clock: Arc<dyn Clock>,
        config: HzppConfig,
    ) -> Self {
        Self {
            carrier: carrier::hzpp(),
            transport,
            clock,
            fetch_overview: config.fetch_overview,
        }
    }

    /// Perform one lookup, keeping the reason for failure.
    pub async fn fetch(&self, voyage_id: &VoyageId) -> Result<Voyage, FetchError> {
        // One instant for both the service date and the fetch time
        let now = self.clock.now_in(self.carrier.time_zone());
        let service_date = now.date();

        let current_target = current_position_target(voyage_id);
        let html = self.fetch_page(&current_target).await?;
        let current_station = try_parse_current_position(&html)
            .map_err(|source| FetchError::Parse {
                target: current_target.clone(),
                source,
            })?
            .ok_or(FetchError::NotFound)?;

        let mut sources = vec![current_target];
        let mut stations = Vec::new();

        if self.fetch_overview {
            let overview_url = overview_target(voyage_id, service_date);
            let html = self.fetch_page(&overview_url).await?;
            stations = try_parse_overview(&html).unwrap_or_else(|e| {
                warn!(url = %overview_url, error = %e, "could not parse overview page");
                Vec::new()
            });
            if !stations.is_empty() {
                sources.push(overview_url);
            }
        }

        Ok(Voyage::new(
            voyage_id.clone(),
            service_date,
            current_station,
            stations,
            sources,
            now.time(),
        ))
    }

    async fn fetch_page(&self, target: &str) -> Result<String, FetchError> {
        let bytes = self
            .transport
            .get(target)
            .await
            .map_err(|source| FetchError::Transport {
                target: target.to_string(),
                source,
            })?;

        let (text, had_errors) = self.carrier.encoding().decode_without_bom_handling(&bytes);
        if had_errors {
            debug!(url = %target, "body contained bytes outside {}", self.carrier.encoding().name());
        }
        Ok(text.into_owned())
    }
}

#[async_trait]
impl VoyageFetcher for HzppVoyageFetcher {
    fn carrier(&self) -> &Carrier {
        &self.carrier
    }

    async fn get_voyage(&self, voyage_id: &VoyageId) -> Option<Voyage> {
        match self.fetch(voyage_id).await {
            Ok(voyage) => Some(voyage),
            Err(FetchError::NotFound) => {
                debug!(voyage = %voyage_id, "voyage not found");
                None
            }
            Err(e @ FetchError::Transport { .. }) => {
                warn!(voyage = %voyage_id, error = %e, "transport failure");
                None
            }
            Err(e @ FetchError::Parse { .. }) => {
                warn!(voyage = %voyage_id, error = %e, "unexpected page shape");
                None
            }
        }
    }
}
