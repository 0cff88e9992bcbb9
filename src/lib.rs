//! # Decklab Core
//!
//! Decklab is a **UI-agnostic deck-building library** for a trading card
//! game: the deck state store, deck-list text codec, validation pass and
//! catalog HTTP client behind one facade. The browser front end is a client
//! of this crate, not part of it.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  API Facade (api.rs)                                    │
//! │  - DeckApi: import/export/validate orchestration        │
//! └─────────────────────────────────────────────────────────┘
//!                            │
//!          ┌─────────────────┼──────────────────┐
//!          ▼                 ▼                  ▼
//! ┌────────────────┐ ┌──────────────┐ ┌──────────────────┐
//! │ Deck Store     │ │ Codec        │ │ Catalog Client   │
//! │ (deck.rs)      │ │ (codec/)     │ │ (catalog/)       │
//! │ - invariants   │ │ - export     │ │ - typed HTTP     │
//! │ - dirty flag   │ │ - parse      │ │ - auth, errors   │
//! └────────────────┘ └──────────────┘ └──────────────────┘
//!          │                                   │
//!          ▼                                   ▼
//! ┌────────────────┐                  ┌──────────────────┐
//! │ Storage Layer  │                  │ HttpTransport    │
//! │ (store/)       │                  │ seam (ureq /     │
//! │ Fs / Mem       │                  │ test fakes)      │
//! └────────────────┘                  └──────────────────┘
//! ```
//!
//! ## Key Principles
//!
//! - **Explicit construction, no singletons**: the store and client are
//!   built once at application start and injected. Tests construct fresh,
//!   isolated instances over the in-memory backend and fake transports.
//! - **Invariants live in the store**: the copy limit and position
//!   reindexing are enforced on mutation; validation only reports.
//! - **Failure is data**: deck-list imports and catalog matching accumulate
//!   per-line failures instead of aborting; persistence failures are logged
//!   and swallowed; API failures carry a typed taxonomy to the UI.
//! - **No retries**: nothing in this crate retries a failed call. A retry
//!   is a user action in the UI, not core policy.

pub mod api;
pub mod catalog;
pub mod codec;
pub mod config;
pub mod deck;
pub mod error;
pub mod model;
pub mod store;
pub mod validate;

pub use api::{DeckApi, ImportOutcome};
pub use catalog::{ApiError, CatalogClient, UreqTransport};
pub use codec::Dialect;
pub use config::DeckConfig;
pub use deck::DeckStore;
pub use error::{DeckError, Result};
pub use model::{Card, DeckCardEntry, DeckFormat, DeckSnapshot, Supertype};
pub use validate::{Issue, Severity};
