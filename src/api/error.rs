//! API Errors

use thiserror::Error;

/// Failure of a single round trip to the party API.
///
/// HTTP status is never inspected: a 4xx/5xx with a well-formed envelope is a success.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request could not be sent or no response arrived
    #[error("network error: {0}")]
    Network(String),
    /// Response body was not a `{ data }` envelope of the expected shape
    #[error("decode error: {0}")]
    Decode(String),
    /// Request body could not be serialized
    #[error("encode error: {0}")]
    Encode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.to_string(), "network error: connection refused");
        let err = ApiError::Decode("missing field `data`".into());
        assert_eq!(err.to_string(), "decode error: missing field `data`");
    }
}
