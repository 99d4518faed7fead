//! Carrier-specific voyage fetchers.
//!
//! Every carrier gets one `VoyageFetcher` implementation. Callers only see
//! the trait: present or absent, never an error.

mod error;
pub mod hzpp;
mod registry;

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Carrier, Voyage, VoyageId};

pub use error::FetchError;
pub use hzpp::{HzppConfig, HzppVoyageFetcher};
pub use registry::FetcherRegistry;

/// Looks up the current state of a voyage for one carrier.
#[async_trait]
pub trait VoyageFetcher: Send + Sync {
    /// The carrier this fetcher serves.
    fn carrier(&self) -> &Carrier;

    /// Fetch a fresh snapshot of a voyage.
    ///
    /// Returns `None` if the voyage is unknown, has no current position, or
    /// the carrier could not be reached or understood. Failures are logged,
    /// not returned.
    async fn get_voyage(&self, voyage_id: &VoyageId) -> Option<Voyage>;
}

#[async_trait]
impl<T: VoyageFetcher + ?Sized> VoyageFetcher for Arc<T> {
    fn carrier(&self) -> &Carrier {
        (**self).carrier()
    }

    async fn get_voyage(&self, voyage_id: &VoyageId) -> Option<Voyage> {
        (**self).get_voyage(voyage_id).await
    }
}
