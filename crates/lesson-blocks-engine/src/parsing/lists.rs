use super::{
    blocks::kinds::{BulletItem, NumberedItem},
    trim_line,
};

/// Rewrites every bullet line to the canonical `- ` prefix.
///
/// Works line by line and returns exactly one output line per input line:
/// - `-`/`*` bullets (any indentation) become `- content`
/// - numbered lines (`3. step`) are returned trimmed, numeral kept
/// - anything else is returned untouched, including its whitespace
pub fn normalize_lists<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .map(|line| normalize_line(line.as_ref()))
        .collect()
}

fn normalize_line(line: &str) -> String {
    let trimmed = trim_line(line);

    if let Some(content) = BulletItem::strip_loose(trimmed) {
        return format!("{}{content}", BulletItem::PREFIX);
    }

    if NumberedItem::strip(trimmed).is_some() {
        return trimmed.to_string();
    }

    line.to_string()
}
