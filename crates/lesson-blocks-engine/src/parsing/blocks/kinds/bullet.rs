use std::sync::OnceLock;

use regex::Regex;

/// Unordered list item with its owned delimiter knowledge.
///
/// Source text may mark bullets with `-` or `*` and any amount of
/// indentation; after normalization every bullet starts with [`Self::PREFIX`].
pub struct BulletItem;

impl BulletItem {
    /// The canonical bullet prefix.
    pub const PREFIX: &'static str = "- ";

    fn loose_marker() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"^[-*]\s+").expect("Invalid bullet marker regex"))
    }

    /// Matches any accepted bullet marker (`-` or `*` followed by whitespace)
    /// and returns the content after it.
    pub fn strip_loose(trimmed: &str) -> Option<&str> {
        Self::loose_marker()
            .find(trimmed)
            .map(|m| &trimmed[m.end()..])
    }

    /// Matches only the canonical prefix and returns the trimmed item text.
    pub fn strip(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX).map(str::trim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_accepts_star_and_dash() {
        assert_eq!(BulletItem::strip_loose("* item"), Some("item"));
        assert_eq!(BulletItem::strip_loose("-   item"), Some("item"));
    }

    #[test]
    fn loose_requires_whitespace_after_marker() {
        assert_eq!(BulletItem::strip_loose("-item"), None);
        assert_eq!(BulletItem::strip_loose("**bold**"), None);
    }

    #[test]
    fn strict_only_accepts_canonical_prefix() {
        assert_eq!(BulletItem::strip("- item "), Some("item"));
        assert_eq!(BulletItem::strip("* item"), None);
        assert_eq!(BulletItem::strip("-item"), None);
    }
}
