//! Outbound HTTP transport.
//!
//! Fetchers depend on the `HttpTransport` trait only. The transport returns
//! the raw response body: legacy carrier pages are not UTF-8, and choosing
//! the decoder is the carrier's decision.

mod client;
mod error;
#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;

pub use client::{ReqwestTransport, TransportConfig};
pub use error::TransportError;

/// Executes an HTTP GET and returns the raw body of a successful response.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, target: &str) -> Result<Vec<u8>, TransportError>;
}
