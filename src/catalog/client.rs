//! The typed catalog client.
//!
//! Every feature area reaches the remote backend through this one wrapper:
//! it owns the base URL, stamps `Content-Type: application/json` on every
//! request, injects `Authorization: Bearer <token>` on authenticated ones
//! (token fetched per call, never cached), and normalizes failures into the
//! [`ApiError`] taxonomy. Nothing here retries; a failed call is the caller's
//! problem to re-issue.

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::http::{build_query_string, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use super::token::TokenProvider;
use super::types::{CardQuery, Paged, SavedDeck, SetSummary, Single};
use crate::model::{Card, DeckSnapshot};

pub struct CatalogClient<T: HttpTransport, P: TokenProvider> {
    base_url: String,
    transport: T,
    tokens: P,
}

impl<T: HttpTransport, P: TokenProvider> CatalogClient<T, P> {
    pub fn new(base_url: &str, transport: T, tokens: P) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            tokens,
        }
    }

    // --- Typed operations ---

    /// Search the card catalog. Unauthenticated.
    pub fn search_cards(&self, query: &CardQuery) -> Result<Paged<Card>, ApiError> {
        let pairs = query.to_pairs();
        let borrowed: Vec<(&str, String)> = pairs.iter().map(|(k, v)| (*k, v.clone())).collect();
        self.get("/cards", &borrowed)
    }

    /// Fetch a single card by catalog id. Unauthenticated.
    pub fn get_card(&self, id: &str) -> Result<Card, ApiError> {
        let wrapped: Single<Card> = self.get(&format!("/cards/{}", id), &[])?;
        Ok(wrapped.data)
    }

    /// List all card sets. Unauthenticated.
    pub fn list_sets(&self) -> Result<Vec<SetSummary>, ApiError> {
        let page: Paged<SetSummary> = self.get("/sets", &[])?;
        Ok(page.data)
    }

    /// Save the deck remotely. Authenticated; raises a local 401 when no
    /// session token is available.
    pub fn save_deck(&self, snapshot: &DeckSnapshot) -> Result<SavedDeck, ApiError> {
        // An unencodable payload never leaves the process, so it reports as
        // status 0 like any other request that produced no response.
        let body = serde_json::to_string(snapshot).map_err(|e| ApiError::Network {
            detail: format!("failed to encode request body: {}", e),
        })?;
        let response = self.request(HttpMethod::Post, "/decks", &[], Some(body), true)?;
        let wrapped: Single<SavedDeck> = parse_body(&response)?;
        Ok(wrapped.data)
    }

    // --- Generic request plumbing ---

    fn get<D: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<D, ApiError> {
        let response = self.request(HttpMethod::Get, path, query, None, false)?;
        parse_body(&response)
    }

    fn request(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(&str, String)],
        body: Option<String>,
        authenticated: bool,
    ) -> Result<HttpResponse, ApiError> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];

        if authenticated {
            // Fetched fresh per call; the session endpoint is the authority.
            let token = self.tokens.bearer_token().ok_or(ApiError::Unauthenticated)?;
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        let url = format!("{}{}{}", self.base_url, path, build_query_string(query));
        let request = HttpRequest {
            method,
            url,
            headers,
            body,
        };

        let response = self.transport.execute(&request)?;
        if !(200..300).contains(&response.status) {
            return Err(ApiError::Server {
                status: response.status,
                body: serde_json::from_str(&response.body).ok(),
            });
        }
        Ok(response)
    }
}

fn parse_body<D: DeserializeOwned>(response: &HttpResponse) -> Result<D, ApiError> {
    serde_json::from_str(&response.body).map_err(|_| ApiError::MalformedResponse {
        status: response.status,
    })
}
