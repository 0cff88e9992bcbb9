//! # API Facade
//!
//! [`DeckApi`] is a thin facade over the deck store, codec, matcher and
//! validation — the single entry point a UI wires up. It dispatches and
//! aggregates; the business logic lives in the modules it calls.
//!
//! Generic over the storage backend and the catalog lookup, so the whole
//! facade runs under test with [`MemBackend`] and a fake lookup.
//!
//! [`MemBackend`]: crate::store::memory::MemBackend

use crate::catalog::matcher::{resolve_lines, CardLookup};
use crate::codec::export::export_deck_list;
use crate::codec::import::parse_deck_list;
use crate::codec::Dialect;
use crate::deck::DeckStore;
use crate::store::StorageBackend;
use crate::validate::{validate, Issue};

/// Cumulative accounting for a deck-list import.
#[derive(Debug, Default)]
pub struct ImportOutcome {
    /// Lines resolved to a catalog card and added to the deck.
    pub added: usize,
    /// Lines that parsed but matched nothing in the catalog.
    pub not_found: usize,
    /// Parse errors and per-line lookup failures, in input order.
    pub errors: Vec<String>,
}

pub struct DeckApi<B: StorageBackend, L: CardLookup> {
    deck: DeckStore<B>,
    catalog: L,
}

impl<B: StorageBackend, L: CardLookup> DeckApi<B, L> {
    pub fn new(deck: DeckStore<B>, catalog: L) -> Self {
        Self { deck, catalog }
    }

    pub fn deck(&self) -> &DeckStore<B> {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut DeckStore<B> {
        &mut self.deck
    }

    /// Export the current deck as a plain-text list.
    pub fn export_list(&self, dialect: Dialect) -> String {
        export_deck_list(self.deck.entries(), dialect)
    }

    /// Import a pasted deck list: parse every line, resolve each parsed line
    /// against the catalog one at a time, and add what matched. Failures of
    /// any kind are accumulated, never fatal.
    pub fn import_list(&mut self, text: &str) -> ImportOutcome {
        let parsed = parse_deck_list(text);
        let report = resolve_lines(&self.catalog, &parsed.cards);

        let mut outcome = ImportOutcome {
            added: report.matched.len(),
            not_found: report.unmatched.len(),
            errors: parsed.errors,
        };
        outcome.errors.extend(report.errors);

        for line in report.matched {
            for _ in 0..line.quantity {
                self.deck.add_card(line.card.clone());
            }
        }

        outcome
    }

    /// Run the advisory validation pass over the current deck.
    pub fn validate(&self) -> Vec<Issue> {
        validate(self.deck.entries())
    }
}
