//! Turns loosely structured lesson text into typed content blocks.
//!
//! The pipeline is [`clean_text`] → [`parse_blocks`] (which normalizes list
//! markers and classifies each line) → [`render_html`]. [`parse_lesson`]
//! runs cleaning and parsing in one call.

pub mod io;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use io::*;
pub use parsing::{
    HeadingCandidate, ParseOptions, blocks::Block, clean_text, detect_heading, normalize_lists,
    parse_blocks, parse_lesson,
};
pub use render::{render_block, render_html};
