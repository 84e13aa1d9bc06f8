use thiserror::Error;

/// Failure of a single upstream fetch. Callers log it and fall back to an
/// empty result or a generic error response.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connect, send or timeout failure before a status was seen
    #[error("network error while fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("upstream returned HTTP {status} for {url}")]
    Upstream { status: u16, url: String },

    #[error("failed to decode response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

impl FetchError {
    pub fn network(url: &str, source: reqwest::Error) -> Self {
        FetchError::Network {
            url: url.to_string(),
            source,
        }
    }

    pub fn decode(url: &str, reason: impl std::fmt::Display) -> Self {
        FetchError::Decode {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Network { source, .. } if source.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_message_names_status_and_url() {
        let err = FetchError::Upstream {
            status: 503,
            url: "https://api.nasa.gov/x".to_string(),
        };
        assert_eq!(err.to_string(), "upstream returned HTTP 503 for https://api.nasa.gov/x");
        assert!(!err.is_timeout());
    }
}
