use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::error::ParseError;

/// Footnote table rows: "** Body" or "Note 3 Body".
static FOOTNOTE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"^(\*+)\s+(.+)").unwrap(),
        Regex::new(r"^Note ([0-9]+)\s+(.+)").unwrap(),
    ]
});

/// Markers at the end of an extension cell.
pub static EXTENSION_NOTE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(\*+)$").unwrap(),
        Regex::new(r"(?i)\(see note ([0-9])\)$").unwrap(),
    ]
});

/// Markers at the end of an approval cell.
pub static APPROVAL_NOTE_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| vec![Regex::new(r"(?i)see note ([0-9])$").unwrap()]);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footnote {
    pub symbol: String,
    pub text: String,
}

/// Parse the text of one footnote table row.
pub fn parse_footnote(text: &str) -> Result<Footnote, ParseError> {
    let text = text.trim();
    FOOTNOTE_PATTERNS
        .iter()
        .find_map(|re| re.captures(text))
        .map(|caps| Footnote {
            symbol: caps[1].to_string(),
            text: caps[2].trim().to_string(),
        })
        .ok_or_else(|| ParseError::UnknownFootnote {
            text: text.to_string(),
        })
}

/// Symbol → body. A later footnote with the same symbol replaces the earlier.
#[derive(Debug, Clone, Default)]
pub struct FootnoteTable {
    bodies: HashMap<String, String>,
}

impl FootnoteTable {
    pub fn insert(&mut self, footnote: Footnote) {
        self.bodies.insert(footnote.symbol, footnote.text);
    }

    pub fn get(&self, symbol: &str) -> Option<&str> {
        self.bodies.get(symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl FromIterator<Footnote> for FootnoteTable {
    fn from_iter<I: IntoIterator<Item = Footnote>>(iter: I) -> Self {
        let mut table = FootnoteTable::default();
        for footnote in iter {
            table.insert(footnote);
        }
        table
    }
}

/// A cell whose trailing footnote marker was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteMatch {
    /// Cell text with the marker removed; `None` if nothing is left.
    pub remainder: Option<String>,
    pub note: String,
}

/// Look for a trailing footnote marker in `text`.
///
/// Only the first pattern that matches is considered. A marker pointing at a
/// symbol the footnote table doesn't define leaves the cell alone.
pub fn find_note(text: &str, patterns: &[Regex], footnotes: &FootnoteTable) -> Option<NoteMatch> {
    let caps = patterns.iter().find_map(|re| re.captures(text))?;
    let marker = caps.get(0)?;
    let symbol = &caps[1];

    let Some(note) = footnotes.get(symbol) else {
        warn!(symbol, text, "footnote marker has no matching footnote");
        return None;
    };

    let remainder = format!("{}{}", &text[..marker.start()], &text[marker.end()..]);
    let remainder = remainder.trim();
    Some(NoteMatch {
        remainder: (!remainder.is_empty()).then(|| remainder.to_string()),
        note: note.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> FootnoteTable {
        [
            Footnote {
                symbol: "*".into(),
                text: "Interim extension.".into(),
            },
            Footnote {
                symbol: "**".into(),
                text: "Second interim extension.".into(),
            },
            Footnote {
                symbol: "2".into(),
                text: "Another clarification".into(),
            },
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn asterisk_footnote() {
        assert_eq!(
            parse_footnote("* Some clarifying text").unwrap(),
            Footnote {
                symbol: "*".into(),
                text: "Some clarifying text".into()
            }
        );
    }

    #[test]
    fn numbered_footnote() {
        assert_eq!(
            parse_footnote("Note 2 Another clarification").unwrap(),
            Footnote {
                symbol: "2".into(),
                text: "Another clarification".into()
            }
        );
    }

    #[test]
    fn footnote_spanning_cells_keeps_first_line_of_body() {
        let parsed = parse_footnote("\n  **\n  Body in second cell  \n").unwrap();
        assert_eq!(parsed.symbol, "**");
        assert_eq!(parsed.text, "Body in second cell");
    }

    #[test]
    fn unrecognized_footnote_fails() {
        assert_eq!(
            parse_footnote("Footnote: something"),
            Err(ParseError::UnknownFootnote {
                text: "Footnote: something".into()
            })
        );
        assert!(parse_footnote("*NoSpace").is_err());
    }

    #[test]
    fn later_footnote_replaces_body() {
        let mut t = table();
        t.insert(Footnote {
            symbol: "*".into(),
            text: "Replaced.".into(),
        });
        assert_eq!(t.get("*"), Some("Replaced."));
        assert_eq!(t.get("**"), Some("Second interim extension."));
        assert_eq!(t.len(), 3);
        assert!(!t.is_empty());
        assert!(FootnoteTable::default().is_empty());
    }

    #[test]
    fn trailing_asterisks_resolve() {
        let m = find_note("483 days**", &EXTENSION_NOTE_PATTERNS, &table()).unwrap();
        assert_eq!(m.remainder.as_deref(), Some("483 days"));
        assert_eq!(m.note, "Second interim extension.");
    }

    #[test]
    fn see_note_parenthetical_resolves() {
        let m = find_note("1,000 days (See Note 2)", &EXTENSION_NOTE_PATTERNS, &table()).unwrap();
        assert_eq!(m.remainder.as_deref(), Some("1,000 days"));
        assert_eq!(m.note, "Another clarification");
    }

    #[test]
    fn marker_only_cell_becomes_empty() {
        let m = find_note("see note 2", &APPROVAL_NOTE_PATTERNS, &table()).unwrap();
        assert_eq!(m.remainder, None);
        assert_eq!(m.note, "Another clarification");
    }

    #[test]
    fn unknown_symbol_leaves_text_alone() {
        assert_eq!(find_note("5 years (see note 7)", &EXTENSION_NOTE_PATTERNS, &table()), None);
    }

    #[test]
    fn marker_must_be_trailing() {
        assert_eq!(find_note("* 483 days", &EXTENSION_NOTE_PATTERNS, &table()), None);
        assert_eq!(find_note("see note 2 later", &APPROVAL_NOTE_PATTERNS, &table()), None);
    }
}
