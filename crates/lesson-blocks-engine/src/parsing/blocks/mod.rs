//! # Block Parsing
//!
//! Two-phase scanning of normalized lesson lines.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    (blank, heading, bullet, numbered item, annotation, plain) using only
//!    that line's own text
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` holds one open
//!    buffer (`Idle | Paragraph | BulletList | NumberList`) and emits `Block`s
//!    as lines close them
//!
//! ## Modules
//!
//! - **`types`**: the `Block` sum type handed to renderers
//! - **`kinds`**: list item and annotation types with owned delimiters
//! - **`classify`**: `LessonLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Blank lines never produce blocks
//! - Every non-blank line contributes to exactly one block
//! - Blocks appear in source order; a list directly followed by prose is
//!   emitted before that prose

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LessonLineClassifier, LineClass};
pub use types::Block;
