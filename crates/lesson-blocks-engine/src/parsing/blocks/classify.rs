use crate::parsing::{
    headings::{HeadingCandidate, detect_heading},
    trim_line,
};

use super::kinds::{Annotation, BulletItem, NumberedItem};

/// What a single normalized line contributes to the block sequence.
///
/// This is phase 1 of block parsing: each line is classified on its own,
/// without reference to the lines around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    Blank,
    Heading(HeadingCandidate),
    Bullet(&'a str),
    Numbered(&'a str),
    Annotation(Annotation, &'a str),
    Plain(&'a str),
}

/// Classifies lines for the block scanning phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct LessonLineClassifier {
    /// When false, heading-looking lines fall through to the later checks.
    pub detect_headings: bool,
}

impl LessonLineClassifier {
    pub fn new(detect_headings: bool) -> Self {
        Self { detect_headings }
    }

    /// Classifies a normalized line.
    ///
    /// Precedence: blank, heading (if enabled), bullet, numbered item,
    /// annotation marker, plain text.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let line = trim_line(line);

        if line.is_empty() {
            return LineClass::Blank;
        }

        if self.detect_headings
            && let Some(heading) = detect_heading(line)
        {
            return LineClass::Heading(heading);
        }

        if let Some(item) = BulletItem::strip(line) {
            return LineClass::Bullet(item);
        }

        if let Some(item) = NumberedItem::strip(line) {
            return LineClass::Numbered(item);
        }

        if let Some((kind, text)) = Annotation::detect(line) {
            return LineClass::Annotation(kind, text);
        }

        LineClass::Plain(line)
    }
}
