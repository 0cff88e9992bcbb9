//! # Storage Layer
//!
//! Local persistence for the deck under construction. One deck lives under
//! one fixed key; every mutation of [`DeckStore`] writes through here, and
//! startup reads the last saved snapshot back.
//!
//! ## Philosophy
//!
//! Persistence is fire-and-forget: a failed write is logged by the store and
//! swallowed, never surfaced to the caller, and never retried. A missing or
//! corrupt save at startup degrades to "no saved deck". The deck being
//! edited lives in memory; storage only has to be good enough to survive a
//! restart.
//!
//! ## Implementations
//!
//! - [`fs::FsBackend`]: production; `deck.json` in a data directory, written
//!   atomically (tmp file + rename).
//! - [`memory::MemBackend`]: for tests; holds the serialized snapshot in a
//!   cell and can simulate write failures and corrupt data.
//!
//! [`DeckStore`]: crate::deck::DeckStore

use crate::error::Result;
use crate::model::DeckSnapshot;

pub mod fs;
pub mod memory;

/// Abstract interface for deck persistence.
pub trait StorageBackend {
    /// Load the saved snapshot. `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<DeckSnapshot>>;

    /// Persist the snapshot, replacing any previous save.
    fn save(&self, snapshot: &DeckSnapshot) -> Result<()>;
}
