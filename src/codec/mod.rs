//! # Deck List Text Codec
//!
//! Lossy, human-readable serialization of a deck's entries into plain-text
//! deck lists, and a best-effort parser recovering entries from pasted text.
//!
//! Two external clients consume these lists; both carry the same four fields
//! per line (quantity, name, set code, collector number) and differ only in
//! separators. [`export::export_deck_list`] is byte-deterministic for a given
//! snapshot and dialect. [`import::parse_deck_list`] never aborts on a bad
//! line: malformed lines are reported with their 1-based line number and the
//! rest of the paste still goes through.
//!
//! The codec stops at [`ParsedListLine`]; matching parsed names against real
//! catalog cards is the caller's job (see [`crate::catalog::matcher`]).
//!
//! [`ParsedListLine`]: import::ParsedListLine

use serde::{Deserialize, Serialize};

pub mod export;
pub mod import;

/// The supported deck-list text dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// `4 Card Name SET 123`
    Classic,
    /// `4 Card Name (SET) 123`
    Arena,
}
