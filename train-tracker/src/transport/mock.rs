//! Scripted transport for tests.
//!
//! Serves canned responses keyed by URL prefix and records every request
//! target, so tests can assert on how many round trips a lookup made.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::HttpTransport;
use super::error::TransportError;

/// Canned outcome for a matching request.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Body(Vec<u8>),
    Timeout,
    Status(u16),
    /// Connection-level failure, surfaced as a `reqwest::Error`
    ConnectionFailed,
}

/// Transport that answers from a fixed script.
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: Vec<(String, MockResponse)>,
    requests: Mutex<Vec<String>>,
    latency: Duration,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer requests whose target starts with `prefix`.
    ///
    /// Routes are tried in registration order.
    pub fn route(mut self, prefix: impl Into<String>, response: MockResponse) -> Self {
        self.routes.push((prefix.into(), response));
        self
    }

    /// Wait `latency` before answering each request.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Every request target seen so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, target: &str) -> Result<Vec<u8>, TransportError> {
        self.requests.lock().unwrap().push(target.to_string());

        let response = self
            .routes
            .iter()
            .find(|(prefix, _)| target.starts_with(prefix.as_str()))
            .map(|(_, response)| response.clone())
            .unwrap_or(MockResponse::Status(404));

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        match response {
            MockResponse::Body(body) => Ok(body),
            MockResponse::Timeout => Err(TransportError::Timeout),
            MockResponse::Status(status) => Err(TransportError::Status { status }),
            MockResponse::ConnectionFailed => Err(connection_error().into()),
        }
    }
}

/// A real `reqwest::Error` without touching the network.
fn connection_error() -> reqwest::Error {
    reqwest::Client::new()
        .get("not a url")
        .build()
        .expect_err("relative URL must not build")
}
