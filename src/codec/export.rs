//! Deck list export.

use crate::model::{DeckCardEntry, Supertype};

use super::Dialect;

/// Render deck entries as a plain-text deck list in the given dialect.
///
/// Cards are grouped by supertype in the fixed section order, in position
/// order within each group, so the same entries always produce byte-identical
/// output.
pub fn export_deck_list(entries: &[DeckCardEntry], dialect: Dialect) -> String {
    let mut ordered: Vec<&DeckCardEntry> = entries.iter().collect();
    ordered.sort_by_key(|e| e.position);

    let mut sections = Vec::new();
    for supertype in Supertype::ordered() {
        let group: Vec<&&DeckCardEntry> = ordered
            .iter()
            .filter(|e| e.card.supertype == supertype)
            .collect();
        if group.is_empty() {
            continue;
        }

        let count: u32 = group.iter().map(|e| e.quantity).sum();
        let mut lines = vec![format!("{}: {}", supertype.section_name(), count)];
        for entry in group {
            lines.push(format_line(entry, dialect));
        }
        sections.push(lines.join("\n"));
    }

    let total: u32 = entries.iter().map(|e| e.quantity).sum();
    sections.push(format!("Total Cards: {}", total));
    sections.join("\n\n")
}

fn format_line(entry: &DeckCardEntry, dialect: Dialect) -> String {
    let card = &entry.card;
    let mut line = match dialect {
        Dialect::Classic => format!("{} {} {}", entry.quantity, card.name, card.set_code),
        Dialect::Arena => format!("{} {} ({})", entry.quantity, card.name, card.set_code),
    };
    if let Some(number) = &card.number {
        line.push(' ');
        line.push_str(number);
    }
    line
}
