//! Session token acquisition for authenticated catalog calls.
//!
//! Tokens are short-lived and fetched per call, never cached: the session
//! endpoint is the authority on whether the user still has a session, and a
//! stale cached token would turn a clean local 401 into a confusing server
//! one.

use serde::Deserialize;

use super::http::{HttpMethod, HttpRequest, HttpTransport};

/// Supplies the bearer token for authenticated requests.
///
/// Returning `None` means "no session"; the client short-circuits with
/// a local 401 without touching the network.
pub trait TokenProvider {
    fn bearer_token(&self) -> Option<String>;
}

/// Anonymous access. Authenticated calls will fail locally with 401.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSession;

impl TokenProvider for NoSession {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}

/// A fixed token, for tests and scripted use.
#[derive(Debug, Clone)]
pub struct FixedToken(pub Option<String>);

impl TokenProvider for FixedToken {
    fn bearer_token(&self) -> Option<String> {
        self.0.clone()
    }
}

#[derive(Deserialize)]
struct SessionPayload {
    token: Option<String>,
}

/// Fetches the token from the same-origin session endpoint on every call.
pub struct SessionTokenProvider<T: HttpTransport> {
    transport: T,
    session_url: String,
}

impl<T: HttpTransport> SessionTokenProvider<T> {
    pub fn new(transport: T, session_url: impl Into<String>) -> Self {
        Self {
            transport,
            session_url: session_url.into(),
        }
    }
}

impl<T: HttpTransport> TokenProvider for SessionTokenProvider<T> {
    fn bearer_token(&self) -> Option<String> {
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: self.session_url.clone(),
            headers: Vec::new(),
            body: None,
        };
        // Any failure here means "no session" to the caller; the client
        // raises the local 401 and the UI asks the user to sign in.
        let response = self.transport.execute(&request).ok()?;
        if !(200..300).contains(&response.status) {
            return None;
        }
        let payload: SessionPayload = serde_json::from_str(&response.body).ok()?;
        payload.token
    }
}
