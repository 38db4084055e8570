use std::sync::OnceLock;

use regex::Regex;

use super::{BYTE_ORDER_MARK, trim_line};

/// Glyphs that generated lessons use as decorative bullets. U+FE0E is the
/// text-presentation selector that trails `▪` in some model output.
const BULLET_GLYPHS: [char; 5] = ['•', '●', '▪', '\u{FE0E}', '◦'];

fn excess_newlines() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{3,}").expect("Invalid newline regex"))
}

fn bullet_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Horizontal whitespace only: a bullet never swallows the blank line above it.
    RE.get_or_init(|| {
        Regex::new(r"(?m)^[^\S\n]*[-*][^\S\n]+(.*?)[^\S\n]*$").expect("Invalid bullet regex")
    })
}

/// Strips decorative markup from raw lesson text.
///
/// Emphasis markers (`**`, `__`, `_`) are discarded rather than honoured,
/// carriage returns dropped, tabs turned into spaces, runs of blank lines
/// collapsed to one, and every bullet glyph rewritten to a canonical `- `
/// prefix. The result is trimmed.
///
/// Total: any input, including the empty string, yields a string.
pub fn clean_text(text: &str) -> String {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);

    let out = text
        .replace("**", "")
        .replace("__", "")
        .replace('_', "")
        .replace('\r', "")
        .replace('\t', " ");

    let out = excess_newlines().replace_all(&out, "\n\n");

    // Glyphs first so that `• item` becomes a dash line the next pass can canonicalise.
    let out = out.replace(BULLET_GLYPHS, "-");

    let out = bullet_line().replace_all(&out, "- $1");

    trim_line(&out).to_string()
}
