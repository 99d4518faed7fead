//! Lookup failure taxonomy.
//!
//! None of these cross the `VoyageFetcher` boundary: they exist so that a
//! failed lookup can be logged for what it was before becoming `None`.

use crate::transport::TransportError;

use super::hzpp::ParseError;

/// Why a lookup produced no voyage.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be completed
    #[error("request to {target} failed: {source}")]
    Transport {
        target: String,
        #[source]
        source: TransportError,
    },

    /// The carrier reports no such voyage, or no current position for it
    #[error("voyage not found")]
    NotFound,

    /// The page was fetched but not understood
    #[error("could not parse {target}: {source}")]
    Parse {
        target: String,
        #[source]
        source: ParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FetchError::Transport {
            target: "http://example.test/a".into(),
            source: TransportError::Timeout,
        };
        assert_eq!(
            err.to_string(),
            "request to http://example.test/a failed: request timed out"
        );

        assert_eq!(FetchError::NotFound.to_string(), "voyage not found");

        let err = FetchError::Parse {
            target: "http://example.test/b".into(),
            source: ParseError::UnexpectedShape("no table".into()),
        };
        assert_eq!(
            err.to_string(),
            "could not parse http://example.test/b: unexpected page shape: no table"
        );
    }
}
