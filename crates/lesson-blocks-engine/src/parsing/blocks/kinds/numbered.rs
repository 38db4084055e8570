use std::sync::OnceLock;

use regex::Regex;

/// Ordered list item (`12. text`).
pub struct NumberedItem;

impl NumberedItem {
    fn marker() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        // ASCII digits only; `\d` would also accept other scripts' numerals.
        RE.get_or_init(|| Regex::new(r"^[0-9]+\.\s+").expect("Invalid numbered item regex"))
    }

    /// Returns the item text with numeral, dot and following whitespace removed.
    pub fn strip(line: &str) -> Option<&str> {
        Self::marker().find(line).map(|m| line[m.end()..].trim())
    }
}
