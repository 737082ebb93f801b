use thiserror::Error;

/// Failures talking to the verification API.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("HTTP client initialization failed: {source}")]
    ClientInit {
        #[source]
        source: reqwest::Error,
    },
    #[error("request failed: {source}")]
    Http {
        #[source]
        source: reqwest::Error,
    },
    #[error("API answered with HTTP status {status}")]
    Status { status: u16 },
    #[error("invalid API response: {0}")]
    InvalidResponse(String),
    #[error("API error: {0}")]
    Api(String),
}

impl RemoteError {
    pub(crate) fn client_init(source: reqwest::Error) -> Self {
        Self::ClientInit { source }
    }

    pub(crate) fn http(source: reqwest::Error) -> Self {
        Self::Http { source }
    }

    pub(crate) fn invalid_response<T: std::fmt::Display>(err: T) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}
