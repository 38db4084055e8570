use super::{classify::LineClass, kinds::Annotation, types::Block};

/// The block currently being accumulated. At most one is open at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum ScanState {
    #[default]
    Idle,
    Paragraph(Vec<String>),
    BulletList(Vec<String>),
    NumberList(Vec<String>),
}

impl ScanState {
    fn into_block(self) -> Option<Block> {
        match self {
            ScanState::Idle => None,
            ScanState::Paragraph(lines) => Some(Block::Paragraph {
                text: lines.join(" ").trim().to_string(),
            }),
            ScanState::BulletList(items) => Some(Block::BulletList { items }),
            ScanState::NumberList(items) => Some(Block::NumberList { items }),
        }
    }
}

/// Turns a stream of classified lines into blocks.
///
/// Single-line blocks (headings, annotations) are emitted immediately.
/// Paragraphs and lists are buffered until a line of another kind, a blank
/// line, or [`BlockBuilder::finish`] closes them.
#[derive(Debug, Default)]
pub struct BlockBuilder {
    state: ScanState,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: LineClass<'_>) {
        match line {
            LineClass::Blank => self.flush(),
            LineClass::Heading(h) => self.emit(Block::Heading {
                level: h.level,
                text: h.text,
            }),
            LineClass::Bullet(item) => self.extend_bullets(item),
            LineClass::Numbered(item) => self.extend_numbers(item),
            LineClass::Annotation(kind, text) => self.emit(annotation_block(kind, text)),
            LineClass::Plain(text) => self.extend_paragraph(text),
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush();
        self.out
    }

    fn emit(&mut self, block: Block) {
        self.flush();
        self.out.push(block);
    }

    fn flush(&mut self) {
        if let Some(block) = std::mem::take(&mut self.state).into_block() {
            self.out.push(block);
        }
    }

    fn extend_paragraph(&mut self, text: &str) {
        match &mut self.state {
            ScanState::Paragraph(lines) => lines.push(text.to_string()),
            _ => {
                self.flush();
                self.state = ScanState::Paragraph(vec![text.to_string()]);
            }
        }
    }

    fn extend_bullets(&mut self, item: &str) {
        match &mut self.state {
            ScanState::BulletList(items) => items.push(item.to_string()),
            _ => {
                self.flush();
                self.state = ScanState::BulletList(vec![item.to_string()]);
            }
        }
    }

    fn extend_numbers(&mut self, item: &str) {
        match &mut self.state {
            ScanState::NumberList(items) => items.push(item.to_string()),
            _ => {
                self.flush();
                self.state = ScanState::NumberList(vec![item.to_string()]);
            }
        }
    }
}

fn annotation_block(kind: Annotation, text: &str) -> Block {
    let text = text.to_string();
    match kind {
        Annotation::ImageDescription => Block::ImageDescription { text },
        Annotation::Example => Block::Example { text },
        Annotation::Note => Block::Note { text },
    }
}
