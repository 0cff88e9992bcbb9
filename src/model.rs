//! # Domain Model: Cards and Deck State
//!
//! This module defines the core data structures: [`Card`], [`DeckCardEntry`],
//! and [`DeckSnapshot`].
//!
//! ## Ownership
//!
//! Cards are owned by the remote catalog and immutable once fetched. The deck
//! holds its own copy of every card it references (by value, not by id), so a
//! saved deck renders without re-fetching the catalog.
//!
//! ## Entry Invariants
//!
//! A deck holds at most one [`DeckCardEntry`] per card id:
//!
//! - `quantity` is always >= 1; an entry that would drop to 0 is removed.
//! - `position` is dense and zero-based among current entries and is used
//!   only for stable display ordering. After any removal, positions are
//!   reindexed to stay contiguous.
//! - For limited cards (anything not [`Card::is_unlimited`]), `quantity`
//!   never exceeds [`MAX_COPIES`]. The store enforces this, not just
//!   validation.
//!
//! ## The Persisted Shape
//!
//! [`DeckSnapshot`] is exactly what goes to storage: entries plus name,
//! description and format. The dirty flag lives on the store, never on disk.

use serde::{Deserialize, Serialize};

/// Copy limit for any card that is not exempt via [`Card::is_unlimited`].
pub const MAX_COPIES: u32 = 4;

/// Exact deck size required for tournament play.
pub const TOURNAMENT_DECK_SIZE: u32 = 60;

/// The fixed supertype categories of the catalog.
///
/// Grouping and export always use the order returned by
/// [`Supertype::ordered`]: creatures, then support items, then resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Supertype {
    Creature,
    SupportItem,
    Resource,
}

impl Supertype {
    /// The canonical section order for grouped views and exports.
    pub fn ordered() -> [Supertype; 3] {
        [
            Supertype::Creature,
            Supertype::SupportItem,
            Supertype::Resource,
        ]
    }

    /// Section heading used in exported deck lists.
    pub fn section_name(&self) -> &'static str {
        match self {
            Supertype::Creature => "Creatures",
            Supertype::SupportItem => "Support Items",
            Supertype::Resource => "Resources",
        }
    }
}

/// Game format a deck is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckFormat {
    Standard,
    Expanded,
}

impl Default for DeckFormat {
    fn default() -> Self {
        Self::Standard
    }
}

/// A card summary as served by the remote catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Globally unique per source catalog (e.g. "bse1-42").
    pub id: String,
    pub name: String,
    pub supertype: Supertype,
    /// Optional secondary type tags.
    #[serde(default)]
    pub subtypes: Vec<String>,
    /// Identifier of the originating set.
    pub set_code: String,
    /// Collector number within the set. Not always numeric ("TG12").
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub image_small: Option<String>,
    #[serde(default)]
    pub image_large: Option<String>,
}

impl Card {
    /// Whether this card is exempt from the copy limit.
    ///
    /// Bulk resource cards can be run in any quantity; "Special" variants
    /// of resources count as regular limited cards.
    pub fn is_unlimited(&self) -> bool {
        self.supertype == Supertype::Resource && !self.name.contains("Special")
    }
}

/// One (card, quantity, position) record in a deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckCardEntry {
    pub card: Card,
    pub quantity: u32,
    pub position: usize,
}

/// The persistable deck state. Excludes the dirty flag by design.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSnapshot {
    #[serde(default)]
    pub entries: Vec<DeckCardEntry>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub format: DeckFormat,
}
