//! reqwest-backed transport.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Semaphore;
use tracing::debug;

use super::HttpTransport;
use super::error::TransportError;

/// Default maximum concurrent outbound requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Default connect timeout in seconds.
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default whole-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the HTTP transport.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header sent upstream
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("train-tracker/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl TransportConfig {
    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set connect timeout.
    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP transport over a pooled `reqwest::Client`.
///
/// A semaphore caps the number of requests in flight.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
    semaphore: Arc<Semaphore>,
}

impl ReqwestTransport {
    /// Create a new transport with the given configuration.
    pub fn new(config: TransportConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, target: &str) -> Result<Vec<u8>, TransportError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| TransportError::Closed)?;

        debug!(url = %target, "executing request");
        let response = self.http.get(target).send().await?;

        let status = response.status();
        debug!(url = %target, status = status.as_u16(), "received response");

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        // Raw bytes: decoding is the carrier's job, never the transport's
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
