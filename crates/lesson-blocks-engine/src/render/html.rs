use html_escape::encode_text;

use crate::parsing::blocks::Block;

pub const CONTAINER_CLASS: &str = "lesson-container";

/// Renders a lesson as one `div.lesson-container`, one block per line.
pub fn render_html(blocks: &[Block]) -> String {
    let mut out = format!("<div class=\"{CONTAINER_CLASS}\">\n");
    for block in blocks {
        out.push_str(&render_block(block));
        out.push('\n');
    }
    out.push_str("</div>");
    out
}

/// Renders a single block.
pub fn render_block(block: &Block) -> String {
    match block {
        Block::Heading { level, text } => {
            // Deeper levels keep their class but share the h3 tag.
            let tag = format!("h{}", (*level).clamp(1, 3));
            format!(
                "<{tag} class=\"r-heading r-h{level}\">{}</{tag}>",
                encode_text(text)
            )
        }
        Block::Paragraph { text } => format!("<p class=\"r-p\">{}</p>", encode_text(text)),
        Block::BulletList { items } => list("ul", "r-ul", items),
        Block::NumberList { items } => list("ol", "r-ol", items),
        Block::Example { text } => callout("r-example", "Example", text),
        Block::Note { text } => callout("r-note", "Note", text),
        Block::ImageDescription { text } => format!(
            "<div class=\"r-image-description\">{}</div>",
            encode_text(text)
        ),
    }
}

fn list(tag: &str, class: &str, items: &[String]) -> String {
    let body: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", encode_text(item)))
        .collect();
    format!("<{tag} class=\"{class}\">{body}</{tag}>")
}

fn callout(class: &str, title: &str, text: &str) -> String {
    format!(
        "<div class=\"{class}\"><div class=\"{class}-title\">{title}</div><div class=\"{class}-body\">{}</div></div>",
        encode_text(text)
    )
}
