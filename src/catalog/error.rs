//! Error taxonomy for the catalog API client.
//!
//! Four failure shapes, each carrying enough to render a useful message:
//! the request never reached the server, the server said no, the server said
//! yes but sent garbage, or we never had a session token to begin with.
//! [`ApiError::status`] collapses all of them to the numeric code UI layers
//! key off (0 for transport failures, 401 for the local short-circuit).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never reached the server (DNS, refused connection,
    /// timeout before any response).
    #[error("network error: check your connection ({detail})")]
    Network { detail: String },

    /// The server responded with a non-2xx status. The body is parsed
    /// best-effort; `None` when it was not valid JSON.
    #[error("server returned status {status}")]
    Server {
        status: u16,
        body: Option<serde_json::Value>,
    },

    /// A 2xx response whose body failed to parse as the expected shape.
    #[error("invalid data format in response (status {status})")]
    MalformedResponse { status: u16 },

    /// An authenticated call was attempted without a session token
    /// available. Raised locally, before any network traffic.
    #[error("not authenticated: no session token available")]
    Unauthenticated,
}

impl ApiError {
    /// The HTTP status this error maps to for display purposes.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Network { .. } => 0,
            ApiError::Server { status, .. } => *status,
            ApiError::MalformedResponse { status } => *status,
            ApiError::Unauthenticated => 401,
        }
    }
}
