//! # Deck Validation
//!
//! A pure, read-only diagnostic pass over the deck entries. Issues are
//! advisory: nothing blocks on severity, the UI just lists them. Size
//! problems come first, then copy violations, then the starting-creature
//! rule.

use std::collections::BTreeMap;

use crate::model::{DeckCardEntry, MAX_COPIES, TOURNAMENT_DECK_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Issue {
    pub severity: Severity,
    pub message: String,
}

impl Issue {
    fn warning(message: String) -> Self {
        Self {
            severity: Severity::Warning,
            message,
        }
    }

    fn error(message: String) -> Self {
        Self {
            severity: Severity::Error,
            message,
        }
    }
}

/// Run all checks over the deck entries. An empty result means the deck is
/// tournament-ready as far as this pass can tell.
pub fn validate(entries: &[DeckCardEntry]) -> Vec<Issue> {
    let mut issues = Vec::new();

    let total: u32 = entries.iter().map(|e| e.quantity).sum();
    if total < TOURNAMENT_DECK_SIZE {
        let missing = TOURNAMENT_DECK_SIZE - total;
        issues.push(Issue::warning(format!(
            "Deck needs {} more card{} to reach {}",
            missing,
            plural(missing),
            TOURNAMENT_DECK_SIZE
        )));
    } else if total > TOURNAMENT_DECK_SIZE {
        let excess = total - TOURNAMENT_DECK_SIZE;
        issues.push(Issue::error(format!(
            "Deck has {} card{} over the {} maximum",
            excess,
            plural(excess),
            TOURNAMENT_DECK_SIZE
        )));
    }

    // Copies are counted per display name, not per id: the same card printed
    // in two sets still shares one copy budget. Unlimited cards are exempt.
    let mut copies_by_name: BTreeMap<&str, u32> = BTreeMap::new();
    for entry in entries {
        if entry.card.is_unlimited() {
            continue;
        }
        *copies_by_name.entry(entry.card.name.as_str()).or_default() += entry.quantity;
    }
    for (name, copies) in &copies_by_name {
        if *copies > MAX_COPIES {
            issues.push(Issue::error(format!(
                "Too many copies of {} ({} of {} allowed)",
                name, copies, MAX_COPIES
            )));
        }
    }

    if !has_starting_creature(entries) {
        issues.push(Issue::error(
            "Deck must contain at least one basic creature".to_string(),
        ));
    }

    issues
}

/// Whether the deck contains a creature that is legal to start from.
///
/// Always passes for now: the card summary does not carry evolution-stage
/// data, so base creatures cannot be told apart from their evolutions.
/// TODO: check the stage once the catalog exposes it on card summaries.
fn has_starting_creature(_entries: &[DeckCardEntry]) -> bool {
    true
}

fn plural(n: u32) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Card, Supertype};

    fn entry(id: &str, name: &str, supertype: Supertype, quantity: u32) -> DeckCardEntry {
        DeckCardEntry {
            card: Card {
                id: id.to_string(),
                name: name.to_string(),
                supertype,
                subtypes: Vec::new(),
                set_code: "BSE".to_string(),
                number: None,
                rarity: None,
                image_small: None,
                image_large: None,
            },
            quantity,
            position: 0,
        }
    }

    fn sixty_card_deck() -> Vec<DeckCardEntry> {
        vec![
            entry("c-1", "Flamewing", Supertype::Creature, 4),
            entry("s-1", "Research Lab", Supertype::SupportItem, 4),
            entry("r-1", "Water Resource", Supertype::Resource, 52),
        ]
    }

    #[test]
    fn test_exactly_sixty_clean_deck_has_no_issues() {
        assert!(validate(&sixty_card_deck()).is_empty());
    }

    #[test]
    fn test_fifty_nine_is_one_warning() {
        let mut deck = sixty_card_deck();
        deck[2].quantity = 51;
        let issues = validate(&deck);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(issues[0].message.contains("1 more card"));
    }

    #[test]
    fn test_sixty_one_is_one_error() {
        let mut deck = sixty_card_deck();
        deck[2].quantity = 53;
        let issues = validate(&deck);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert!(issues[0].message.contains("1 card over the 60 maximum"));
    }

    #[test]
    fn test_copies_aggregate_across_printings() {
        // Two printings, 3 + 2 copies: neither id alone breaks the cap, the
        // shared name does.
        let mut deck = sixty_card_deck();
        deck[0].quantity = 3;
        deck.push(entry("c-9", "Flamewing", Supertype::Creature, 2));
        deck[2].quantity = 51;

        let issues = validate(&deck);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert!(issues[0].message.contains("Flamewing"));
        assert!(issues[0].message.contains("5 of 4"));
    }

    #[test]
    fn test_unlimited_resources_exempt_from_copy_check() {
        // 52 copies of a plain resource is fine.
        let issues = validate(&sixty_card_deck());
        assert!(issues.is_empty());
    }

    #[test]
    fn test_special_resource_counts_toward_cap() {
        let mut deck = sixty_card_deck();
        deck[2].quantity = 47;
        deck.push(entry("r-9", "Special Dark Resource", Supertype::Resource, 5));

        let issues = validate(&deck);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("Special Dark Resource"));
    }

    #[test]
    fn test_size_issue_ordered_before_copy_issue() {
        let deck = vec![entry("c-1", "Flamewing", Supertype::Creature, 5)];
        let issues = validate(&deck);
        assert_eq!(issues.len(), 2);
        assert!(issues[0].message.contains("more card"));
        assert!(issues[1].message.contains("Too many copies"));
    }

    #[test]
    fn test_starting_creature_rule_is_permissive() {
        // Intentionally passes even with no creatures at all.
        let deck = vec![entry("r-1", "Water Resource", Supertype::Resource, 60)];
        assert!(validate(&deck).is_empty());
    }
}
