//! # Catalog HTTP Client
//!
//! The typed client every feature area uses to reach the remote card
//! catalog. The layering mirrors the rest of the crate: logic and I/O are
//! separated at a trait seam.
//!
//! - [`http`]: requests/responses as plain data, the [`HttpTransport`] seam,
//!   and the production `ureq` transport.
//! - [`client`]: [`CatalogClient`] — base URL, header stamping, per-call
//!   bearer-token injection, query building, and error classification.
//! - [`token`]: [`TokenProvider`] implementations (session endpoint, fixed,
//!   anonymous).
//! - [`matcher`]: resolves imported deck-list lines to real cards through
//!   the [`CardLookup`] seam.
//!
//! ## Error Contract
//!
//! All failures land in [`ApiError`]: status 0 for transport failures, the
//! real status for server rejections, a distinct variant for 2xx responses
//! with unparseable bodies, and a locally raised 401 when an authenticated
//! call has no session token. Errors bubble to the UI; nothing here retries.

pub mod client;
pub mod error;
pub mod http;
pub mod matcher;
pub mod token;
pub mod types;

pub use client::CatalogClient;
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse, HttpTransport, UreqTransport};
pub use matcher::{CardLookup, MatchReport, MatchedLine};
pub use token::{FixedToken, NoSession, SessionTokenProvider, TokenProvider};
pub use types::{CardQuery, Paged, SavedDeck, SetSummary};
