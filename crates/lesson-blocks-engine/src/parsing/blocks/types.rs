use serde::{Deserialize, Serialize};

/// One classified unit of lesson content, in source order.
///
/// Serializes as a record tagged by `type`, e.g.
/// `{"type":"bullet_list","items":["a","b"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A section title; `level` 1 is the outermost.
    Heading { level: u8, text: String },
    /// Consecutive plain lines joined with single spaces.
    Paragraph { text: String },
    /// Consecutive bullet items.
    BulletList { items: Vec<String> },
    /// Consecutive numbered items with their numerals removed.
    NumberList { items: Vec<String> },
    /// An `[IMAGE DESCRIPTION ...]` line, verbatim.
    ImageDescription { text: String },
    /// An `EXAMPLE:` line without its marker.
    Example { text: String },
    /// A `NOTE:` line without its marker.
    Note { text: String },
}

impl Block {
    /// Stable snake_case name of the variant, matching the serialized tag.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Paragraph { .. } => "paragraph",
            Block::BulletList { .. } => "bullet_list",
            Block::NumberList { .. } => "number_list",
            Block::ImageDescription { .. } => "image_description",
            Block::Example { .. } => "example",
            Block::Note { .. } => "note",
        }
    }
}
