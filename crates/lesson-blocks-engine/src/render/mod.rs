//! # Rendering
//!
//! Turns parsed [`Block`](crate::parsing::blocks::Block)s into display markup.
//! All block text is escaped; class names are fixed per block kind so a
//! stylesheet can target them.

pub mod html;

pub use html::{render_block, render_html};
