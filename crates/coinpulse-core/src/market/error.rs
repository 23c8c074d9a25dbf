use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Mock mode is active but no mock rule matches the endpoint.
    #[error("No mock data available for endpoint: {endpoint}")]
    NoMockData { endpoint: String },

    #[error("API Error: {status}: {message}")]
    Api { status: u16, message: String },

    /// The request never completed.
    #[error("network error: {0}")]
    Transport(String),

    #[error("failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid request URL for {endpoint}: {reason}")]
    InvalidUrl { endpoint: String, reason: String },
}

impl FetchError {
    /// HTTP status carried by an upstream error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
