//! Best-effort resolution of parsed deck-list lines to real catalog cards.
//!
//! Each line is resolved independently: a lookup failure for one line is
//! recorded and the rest of the batch still runs. The match precedence is
//! exact name+set, then exact name, then the first search hit. This is a
//! heuristic tie-break with no uniqueness guarantee; changing the order
//! changes which printing gets selected on ambiguous input, so it is
//! preserved as-is.

use super::error::ApiError;
use super::http::HttpTransport;
use super::token::TokenProvider;
use super::types::CardQuery;
use crate::codec::import::ParsedListLine;
use crate::model::Card;

/// Card search seam for the matcher, so tests run without a network.
pub trait CardLookup {
    fn search_by_name(&self, name: &str) -> Result<Vec<Card>, ApiError>;
}

impl<T: HttpTransport, P: TokenProvider> CardLookup for super::client::CatalogClient<T, P> {
    fn search_by_name(&self, name: &str) -> Result<Vec<Card>, ApiError> {
        Ok(self.search_cards(&CardQuery::by_name(name))?.data)
    }
}

/// A resolved line, ready to be added to the deck.
#[derive(Debug, Clone)]
pub struct MatchedLine {
    pub card: Card,
    pub quantity: u32,
}

/// Cumulative outcome of resolving a batch of parsed lines.
#[derive(Debug, Default)]
pub struct MatchReport {
    pub matched: Vec<MatchedLine>,
    /// Lines that parsed fine but matched nothing in the catalog.
    pub unmatched: Vec<ParsedListLine>,
    /// Per-line lookup failures. These never abort the batch.
    pub errors: Vec<String>,
}

/// Resolve each parsed line against the catalog, one line at a time.
pub fn resolve_lines<L: CardLookup>(lookup: &L, lines: &[ParsedListLine]) -> MatchReport {
    let mut report = MatchReport::default();

    for line in lines {
        match lookup.search_by_name(&line.name) {
            Ok(hits) => match pick_best(&hits, line) {
                Some(card) => report.matched.push(MatchedLine {
                    card: card.clone(),
                    quantity: line.quantity,
                }),
                None => report.unmatched.push(line.clone()),
            },
            Err(e) => report.errors.push(format!("'{}': {}", line.name, e)),
        }
    }

    report
}

/// Exact name+set beats exact name beats first hit.
fn pick_best<'a>(hits: &'a [Card], line: &ParsedListLine) -> Option<&'a Card> {
    if let Some(set_code) = &line.set_code {
        if let Some(card) = hits
            .iter()
            .find(|c| c.name == line.name && c.set_code.eq_ignore_ascii_case(set_code))
        {
            return Some(card);
        }
    }
    if let Some(card) = hits.iter().find(|c| c.name == line.name) {
        return Some(card);
    }
    hits.first()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Supertype;

    fn card(id: &str, name: &str, set_code: &str) -> Card {
        Card {
            id: id.to_string(),
            name: name.to_string(),
            supertype: Supertype::Creature,
            subtypes: Vec::new(),
            set_code: set_code.to_string(),
            number: None,
            rarity: None,
            image_small: None,
            image_large: None,
        }
    }

    fn line(quantity: u32, name: &str, set_code: Option<&str>) -> ParsedListLine {
        ParsedListLine {
            quantity,
            name: name.to_string(),
            set_code: set_code.map(|s| s.to_string()),
            number: None,
        }
    }

    /// Lookup over a fixed card pool; names listed in `failing` error out.
    struct PoolLookup {
        pool: Vec<Card>,
        failing: Vec<String>,
    }

    impl CardLookup for PoolLookup {
        fn search_by_name(&self, name: &str) -> Result<Vec<Card>, ApiError> {
            if self.failing.iter().any(|f| f == name) {
                return Err(ApiError::Network {
                    detail: "timed out".to_string(),
                });
            }
            Ok(self
                .pool
                .iter()
                .filter(|c| c.name.contains(name))
                .cloned()
                .collect())
        }
    }

    #[test]
    fn test_exact_name_and_set_wins() {
        let lookup = PoolLookup {
            pool: vec![
                card("a-1", "Flamewing", "TWL"),
                card("b-1", "Flamewing", "BSE"),
            ],
            failing: Vec::new(),
        };
        let report = resolve_lines(&lookup, &[line(4, "Flamewing", Some("BSE"))]);
        assert_eq!(report.matched.len(), 1);
        assert_eq!(report.matched[0].card.id, "b-1");
        assert_eq!(report.matched[0].quantity, 4);
    }

    #[test]
    fn test_exact_name_beats_first_hit() {
        // "Flamewing" also substring-matches "Flamewing EX"; exact name
        // should win over the earlier fuzzy hit.
        let lookup = PoolLookup {
            pool: vec![
                card("a-1", "Flamewing EX", "TWL"),
                card("b-1", "Flamewing", "TWL"),
            ],
            failing: Vec::new(),
        };
        let report = resolve_lines(&lookup, &[line(2, "Flamewing", None)]);
        assert_eq!(report.matched[0].card.id, "b-1");
    }

    #[test]
    fn test_falls_back_to_first_hit() {
        let lookup = PoolLookup {
            pool: vec![card("a-1", "Flamewing EX", "TWL")],
            failing: Vec::new(),
        };
        let report = resolve_lines(&lookup, &[line(1, "Flamewing", None)]);
        assert_eq!(report.matched[0].card.id, "a-1");
    }

    #[test]
    fn test_unknown_set_falls_back_to_exact_name() {
        let lookup = PoolLookup {
            pool: vec![card("a-1", "Flamewing", "TWL")],
            failing: Vec::new(),
        };
        let report = resolve_lines(&lookup, &[line(1, "Flamewing", Some("XYZ"))]);
        assert_eq!(report.matched[0].card.id, "a-1");
    }

    #[test]
    fn test_no_hits_is_unmatched_not_error() {
        let lookup = PoolLookup {
            pool: Vec::new(),
            failing: Vec::new(),
        };
        let report = resolve_lines(&lookup, &[line(3, "Ghost Card", None)]);
        assert!(report.matched.is_empty());
        assert_eq!(report.unmatched.len(), 1);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_one_failing_lookup_does_not_abort_batch() {
        let lookup = PoolLookup {
            pool: vec![card("a-1", "Flamewing", "BSE"), card("b-1", "Stormtail", "BSE")],
            failing: vec!["Flamewing".to_string()],
        };
        let lines = vec![
            line(4, "Flamewing", None),
            line(2, "Stormtail", None),
            line(1, "Ghost Card", None),
        ];
        let report = resolve_lines(&lookup, &lines);
        assert_eq!(report.matched.len(), 1);
        assert_eq!(report.matched[0].card.name, "Stormtail");
        assert_eq!(report.unmatched.len(), 1);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("Flamewing"));
    }
}
