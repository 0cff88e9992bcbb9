//! # Deck State Store
//!
//! [`DeckStore`] owns the single in-memory deck being edited. All mutation
//! goes through it; the game-legality invariants (copy limit, basic-resource
//! exemption, dense positions) are enforced here, not just reported by
//! validation.
//!
//! ## Persistence
//!
//! Every mutation writes the snapshot through to the injected
//! [`StorageBackend`]. A write failure is logged and swallowed — edits never
//! fail because local storage did. On construction the store rehydrates from
//! the backend; an unreadable save is logged and treated as "no saved deck".
//!
//! ## Dirty Flag
//!
//! `is_modified` tracks unsaved changes relative to the last loaded/saved
//! snapshot. Any actual change sets it; [`DeckStore::load`] and
//! [`DeckStore::mark_saved`] clear it. A call that changes nothing (adding a
//! capped card, removing an absent one) leaves both the flag and storage
//! untouched.
//!
//! ## Construction
//!
//! The store is an explicit object, constructed once at application start
//! and injected wherever needed. Tests build fresh, isolated instances over
//! [`MemBackend`].
//!
//! [`MemBackend`]: crate::store::memory::MemBackend

use crate::model::{
    Card, DeckCardEntry, DeckFormat, DeckSnapshot, Supertype, MAX_COPIES, TOURNAMENT_DECK_SIZE,
};
use crate::store::StorageBackend;

pub struct DeckStore<B: StorageBackend> {
    backend: B,
    state: DeckSnapshot,
    is_modified: bool,
}

impl<B: StorageBackend> DeckStore<B> {
    /// Construct the store, rehydrating any previously saved deck.
    pub fn new(backend: B) -> Self {
        let state = match backend.load() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => DeckSnapshot::default(),
            Err(e) => {
                log::warn!("failed to load saved deck, starting empty: {}", e);
                DeckSnapshot::default()
            }
        };
        Self {
            backend,
            state,
            is_modified: false,
        }
    }

    // --- Mutations ---

    /// Add one copy of `card`. Appends a new entry at the next position, or
    /// increments an existing one. At the copy limit (for limited cards)
    /// this is a silent no-op.
    pub fn add_card(&mut self, card: Card) {
        if let Some(entry) = self.state.entries.iter_mut().find(|e| e.card.id == card.id) {
            if !entry.card.is_unlimited() && entry.quantity >= MAX_COPIES {
                return;
            }
            entry.quantity += 1;
        } else {
            let position = self.state.entries.len();
            self.state.entries.push(DeckCardEntry {
                card,
                quantity: 1,
                position,
            });
        }
        self.touch();
    }

    /// Remove one copy of the card with `card_id`. Deletes the entry when
    /// its last copy goes, reindexing the remaining positions. No-op when
    /// the card is not in the deck.
    pub fn remove_card(&mut self, card_id: &str) {
        let Some(index) = self.state.entries.iter().position(|e| e.card.id == card_id) else {
            return;
        };
        if self.state.entries[index].quantity > 1 {
            self.state.entries[index].quantity -= 1;
        } else {
            self.state.entries.remove(index);
            self.reindex();
        }
        self.touch();
    }

    /// Set the quantity directly. 0 deletes the entry; limited cards are
    /// clamped to the copy limit. No-op when the card is absent or the
    /// (clamped) quantity is unchanged.
    pub fn set_quantity(&mut self, card_id: &str, quantity: u32) {
        let Some(index) = self.state.entries.iter().position(|e| e.card.id == card_id) else {
            return;
        };
        if quantity == 0 {
            self.state.entries.remove(index);
            self.reindex();
            self.touch();
            return;
        }

        let entry = &mut self.state.entries[index];
        let clamped = if entry.card.is_unlimited() {
            quantity
        } else {
            quantity.min(MAX_COPIES)
        };
        if entry.quantity == clamped {
            return;
        }
        entry.quantity = clamped;
        self.touch();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.state.name = name.into();
        self.touch();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.state.description = description.into();
        self.touch();
    }

    pub fn set_format(&mut self, format: DeckFormat) {
        self.state.format = format;
        self.touch();
    }

    /// Empty the deck. Name and description are kept; the user is usually
    /// rebuilding the same list, not abandoning it.
    pub fn clear(&mut self) {
        self.state.entries.clear();
        self.touch();
    }

    /// Replace the whole state with a saved snapshot. Clears the dirty flag
    /// so opening a saved deck does not immediately show as unsaved.
    pub fn load(&mut self, snapshot: DeckSnapshot) {
        self.state = snapshot;
        self.is_modified = false;
        self.persist();
    }

    /// Clear the dirty flag without touching the data (after a successful
    /// remote save).
    pub fn mark_saved(&mut self) {
        self.is_modified = false;
    }

    // --- Derived reads ---

    pub fn entries(&self) -> &[DeckCardEntry] {
        &self.state.entries
    }

    pub fn name(&self) -> &str {
        &self.state.name
    }

    pub fn description(&self) -> &str {
        &self.state.description
    }

    pub fn format(&self) -> DeckFormat {
        self.state.format
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Sum of quantities across all entries.
    pub fn total_cards(&self) -> u32 {
        self.state.entries.iter().map(|e| e.quantity).sum()
    }

    pub fn count_for(&self, supertype: Supertype) -> u32 {
        self.state
            .entries
            .iter()
            .filter(|e| e.card.supertype == supertype)
            .map(|e| e.quantity)
            .sum()
    }

    pub fn is_tournament_size(&self) -> bool {
        self.total_cards() == TOURNAMENT_DECK_SIZE
    }

    /// Entries grouped by supertype in the fixed section order, position
    /// order preserved within each group. Empty groups are omitted.
    pub fn grouped_entries(&self) -> Vec<(Supertype, Vec<&DeckCardEntry>)> {
        Supertype::ordered()
            .into_iter()
            .filter_map(|supertype| {
                let mut group: Vec<&DeckCardEntry> = self
                    .state
                    .entries
                    .iter()
                    .filter(|e| e.card.supertype == supertype)
                    .collect();
                group.sort_by_key(|e| e.position);
                (!group.is_empty()).then_some((supertype, group))
            })
            .collect()
    }

    /// Clone of the persistable state.
    pub fn snapshot(&self) -> DeckSnapshot {
        self.state.clone()
    }

    // --- Internals ---

    fn reindex(&mut self) {
        for (position, entry) in self.state.entries.iter_mut().enumerate() {
            entry.position = position;
        }
    }

    fn touch(&mut self) {
        self.is_modified = true;
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.backend.save(&self.state) {
            log::warn!("failed to persist deck: {}", e);
        }
    }
}
