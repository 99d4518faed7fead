//! Transport error types.

/// Errors from executing an outbound request.
///
/// Every variant is terminal for the lookup that hit it; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connection or protocol failure
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// Connect or request timeout elapsed
    #[error("request timed out")]
    Timeout,

    /// Upstream answered with a non-success status
    #[error("upstream returned status {status}")]
    Status { status: u16 },

    /// The transport was shut down while the request was queued
    #[error("transport closed")]
    Closed,
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else {
            TransportError::Http(err)
        }
    }
}
