use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::trim_line;

/// A line the detector believes is a section title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingCandidate {
    /// Nesting depth, 1 being the top level.
    pub level: u8,
    pub text: String,
}

impl HeadingCandidate {
    fn new(level: u8, text: &str) -> Self {
        Self {
            level,
            text: text.to_string(),
        }
    }
}

type Rule = fn(&str) -> Option<HeadingCandidate>;

/// Rules in precedence order. Each sees the trimmed line and nothing else.
const RULES: [Rule; 3] = [hash_marker, shouting_case, title_phrase];

/// Classifies a single line as a heading, looking at that line alone.
///
/// This is a heuristic: all-caps sentences and digit-only lines are reported
/// as headings too. Callers opt in through `ParseOptions::detect_headings`.
pub fn detect_heading(line: &str) -> Option<HeadingCandidate> {
    let trimmed = trim_line(line);
    RULES.iter().find_map(|rule| rule(trimmed))
}

fn hash_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(#{1,3})\s+").expect("Invalid heading marker regex"))
}

fn title_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z][A-Za-z ]{3,}$").expect("Invalid title regex"))
}

/// `# Title`, `## Title`, `### Title`.
fn hash_marker(line: &str) -> Option<HeadingCandidate> {
    let caps = hash_prefix().captures(line)?;
    let level = caps.get(1)?.len() as u8;
    let end = caps.get(0)?.end();
    Some(HeadingCandidate::new(level, line[end..].trim()))
}

/// Lines with nothing to uppercase and more than five characters.
fn shouting_case(line: &str) -> Option<HeadingCandidate> {
    (line.chars().count() > 5 && line.to_uppercase() == line)
        .then(|| HeadingCandidate::new(1, line))
}

/// Short capitalised phrases made of letters and spaces, no closing period.
fn title_phrase(line: &str) -> Option<HeadingCandidate> {
    (title_shape().is_match(line) && !line.ends_with('.')).then(|| HeadingCandidate::new(2, line))
}
