/// Error types for the remuneration API client
use thiserror::Error;

/// Main error type for API operations
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("{url} returned status {status}")]
    Status { status: u16, url: String },

    /// Body was not the JSON shape expected for this endpoint
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Body decoded but a value failed domain validation
    #[error("invalid {what}: {reason}")]
    Invalid { what: &'static str, reason: String },
}

impl ApiError {
    pub(crate) fn invalid(what: &'static str, reason: impl Into<String>) -> Self {
        ApiError::Invalid {
            what,
            reason: reason.into(),
        }
    }

    /// True when the server said the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

/// Type alias for Results using ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_404_counts_as_not_found() {
        let missing = ApiError::Status { status: 404, url: "/v2/orgao/ghost".to_string() };
        assert!(missing.is_not_found());
        assert_eq!(missing.to_string(), "/v2/orgao/ghost returned status 404");
        assert!(!ApiError::Status { status: 500, url: String::new() }.is_not_found());
        assert!(!ApiError::invalid("year", "out of range").is_not_found());
    }
}
