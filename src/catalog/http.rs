//! HTTP transport seam for the catalog client.
//!
//! Requests and responses are plain data. [`CatalogClient`] builds an
//! [`HttpRequest`], the [`HttpTransport`] executes it, and the client
//! classifies the [`HttpResponse`]. Non-2xx responses come back as data, not
//! errors — only a transport-level failure (no response at all) is an `Err`
//! here, and it surfaces as [`ApiError::Network`] with status 0. Splitting
//! the I/O out this way lets every client behavior — auth injection, query
//! building, the error taxonomy — run under test against a fake transport.
//!
//! [`CatalogClient`]: super::client::CatalogClient

use std::time::Duration;

use super::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data. Any status, including non-2xx.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes an [`HttpRequest`] against the network (or a test double).
pub trait HttpTransport {
    /// Err only when no response was received at all.
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Production transport backed by a blocking `ureq` agent.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout(Duration::from_secs(10))
                .build(),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut req = self.agent.request(request.method.as_str(), &request.url);
        for (name, value) in &request.headers {
            req = req.set(name, value);
        }

        let result = match &request.body {
            Some(body) => req.send_string(body),
            None => req.call(),
        };

        let response = match result {
            Ok(response) => response,
            // ureq reports non-2xx as an error; to us it is still a response.
            Err(ureq::Error::Status(status, response)) => {
                return Ok(HttpResponse {
                    status,
                    body: response.into_string().unwrap_or_default(),
                });
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(ApiError::Network {
                    detail: transport.to_string(),
                });
            }
        };

        let status = response.status();
        let body = response.into_string().map_err(|e| ApiError::Network {
            detail: format!("failed reading response body: {}", e),
        })?;
        Ok(HttpResponse { status, body })
    }
}

/// Percent-encode a query component (RFC 3986 unreserved set passes through).
pub fn encode_query_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push_str(&format!("%{:02X}", byte));
            }
        }
    }
    out
}

/// Build `?k=v&k2=v2` from pairs, empty string for no pairs.
pub fn build_query_string(pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let encoded: Vec<String> = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, encode_query_component(v)))
        .collect();
    format!("?{}", encoded.join("&"))
}
