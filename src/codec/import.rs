//! Permissive line-oriented deck list parser.

/// One successfully decoded line of an imported deck list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedListLine {
    pub quantity: u32,
    pub name: String,
    pub set_code: Option<String>,
    pub number: Option<String>,
}

/// Outcome of parsing a pasted deck list.
#[derive(Debug, Default)]
pub struct ImportResult {
    pub cards: Vec<ParsedListLine>,
    /// One entry per unparseable line, carrying the 1-based line number
    /// and the offending text.
    pub errors: Vec<String>,
}

/// Parse arbitrary pasted text into deck-list lines.
///
/// Blank lines and section headers (`Creatures: 12`, `Total Cards: 60`) are
/// skipped. Every remaining line must start with an integer quantity; the
/// rest is tokenized from the right: an optional trailing collector number
/// preceded by a 2-4 uppercase-letter set code, or a trailing set code alone.
/// Whatever remains is the card name. A bad line is recorded and parsing
/// continues.
pub fn parse_deck_list(text: &str) -> ImportResult {
    let mut result = ImportResult::default();

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        if is_section_header(line) {
            continue;
        }

        let line_number = index + 1;
        match parse_line(line) {
            Some(parsed) => result.cards.push(parsed),
            None => result
                .errors
                .push(format!("line {}: could not parse '{}'", line_number, line)),
        }
    }

    result
}

/// A header names a section and a count (`Resources: 12`) and never starts
/// with a digit, which is what distinguishes it from a card line.
fn is_section_header(line: &str) -> bool {
    !line.starts_with(|c: char| c.is_ascii_digit()) && line.contains(':')
}

fn parse_line(line: &str) -> Option<ParsedListLine> {
    let mut tokens = line.split_whitespace();
    let quantity: u32 = tokens.next()?.parse().ok()?;
    if quantity == 0 {
        return None;
    }

    let rest: Vec<&str> = tokens.collect();
    if rest.is_empty() {
        return None;
    }

    let mut name_end = rest.len();
    let mut set_code = None;
    let mut number = None;

    // Scan from the right: `... SET 123`, then `... SET`, else name only.
    if rest.len() >= 3 && is_collector_number(rest[rest.len() - 1]) {
        if let Some(set) = as_set_code(rest[rest.len() - 2]) {
            number = Some(rest[rest.len() - 1].to_string());
            set_code = Some(set);
            name_end -= 2;
        }
    }
    if set_code.is_none() && rest.len() >= 2 {
        if let Some(set) = as_set_code(rest[rest.len() - 1]) {
            set_code = Some(set);
            name_end -= 1;
        }
    }

    Some(ParsedListLine {
        quantity,
        name: rest[..name_end].join(" "),
        set_code,
        number,
    })
}

fn is_collector_number(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

/// 2-4 uppercase ASCII letters, optionally parenthesized (Arena dialect).
fn as_set_code(token: &str) -> Option<String> {
    let stripped = token
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .unwrap_or(token);
    let valid = (2..=4).contains(&stripped.len())
        && stripped.chars().all(|c| c.is_ascii_uppercase());
    valid.then(|| stripped.to_string())
}
