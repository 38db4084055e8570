// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_lesson_text(units: usize) -> String {
    let base = "**UNIT OVERVIEW**\r\n\r\nThis unit covers the water cycle.\nEvaporation moves water upward.\n\n• evaporation\n● condensation\n\t* precipitation\n\n1. observe\n2. record\n\nEXAMPLE: a puddle drying in the sun\nNOTE: use a thermometer\n[IMAGE DESCRIPTION: clouds over a lake]\n\n\n\n";
    base.repeat(units)
}

#[allow(dead_code)]
pub fn generate_prose(paragraphs: usize, lines_per_paragraph: usize) -> String {
    let mut content = String::new();
    for p in 0..paragraphs {
        for l in 0..lines_per_paragraph {
            content.push_str(&format!("Sentence {l} of paragraph {p} continues here.\n"));
        }
        content.push('\n');
    }
    content
}
