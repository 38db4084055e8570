pub mod blocks;
pub mod clean;
pub mod headings;
pub mod lists;
pub mod options;

#[cfg(test)]
mod tests;

use blocks::{Block, BlockBuilder, LessonLineClassifier};

pub use clean::clean_text;
pub use headings::{HeadingCandidate, detect_heading};
pub use lists::normalize_lists;
pub use options::ParseOptions;

/// Trims a line the way generated lessons expect: whitespace plus the
/// byte-order mark, which `str::trim` leaves in place.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Splits already-cleaned text into typed blocks.
///
/// Lines are list-normalized, classified one at a time and fed through the
/// block builder. Never fails: malformed input degrades into paragraphs.
/// Cleaning is not applied here; see [`parse_lesson`].
pub fn parse_blocks(text: &str, opts: &ParseOptions) -> Vec<Block> {
    let raw: Vec<&str> = text.split('\n').collect();
    let lines = normalize_lists(&raw);

    let classifier = LessonLineClassifier::new(opts.detect_headings);
    let mut builder = BlockBuilder::new();

    for line in &lines {
        let class = classifier.classify(line);
        log::trace!("{class:?}");
        builder.push(class);
    }

    let blocks = builder.finish();
    log::debug!(
        "parsed {} lines into {} blocks (detect_headings: {})",
        lines.len(),
        blocks.len(),
        opts.detect_headings
    );
    blocks
}

/// Cleans raw generated text and parses it: the full lesson pipeline.
pub fn parse_lesson(raw: &str, opts: &ParseOptions) -> Vec<Block> {
    parse_blocks(&clean_text(raw), opts)
}
