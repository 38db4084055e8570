/// Single-line annotations that generated lessons embed in their prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation {
    /// `[IMAGE DESCRIPTION: ...]`, carried through verbatim.
    ImageDescription,
    /// `EXAMPLE: ...`
    Example,
    /// `NOTE: ...`
    Note,
}

impl Annotation {
    /// Checked in this order; the first marker that prefixes the line wins.
    pub const ALL: [Annotation; 3] = [
        Annotation::ImageDescription,
        Annotation::Example,
        Annotation::Note,
    ];

    pub const fn marker(self) -> &'static str {
        match self {
            Annotation::ImageDescription => "[IMAGE DESCRIPTION",
            Annotation::Example => "EXAMPLE:",
            Annotation::Note => "NOTE:",
        }
    }

    /// Recognises an annotation line and returns its block text.
    ///
    /// Image descriptions keep the whole line; the other markers are
    /// stripped and the remainder trimmed.
    pub fn detect(line: &str) -> Option<(Annotation, &str)> {
        Self::ALL.into_iter().find_map(|kind| {
            let rest = line.strip_prefix(kind.marker())?;
            let text = match kind {
                Annotation::ImageDescription => line,
                Annotation::Example | Annotation::Note => rest.trim(),
            };
            Some((kind, text))
        })
    }
}
