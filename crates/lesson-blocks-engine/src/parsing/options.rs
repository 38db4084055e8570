use serde::{Deserialize, Serialize};

/// Switches for [`parse_blocks`](super::parse_blocks).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Run the heuristic heading detector. Off by default because it
    /// misfires on short all-caps sentences.
    pub detect_headings: bool,
}

impl ParseOptions {
    pub fn with_headings() -> Self {
        Self {
            detect_headings: true,
        }
    }
}
