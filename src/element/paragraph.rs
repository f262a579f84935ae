use serde::Serialize;

use super::Line;

/// A paragraph: an ordered sequence of lines joined with hard line breaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    lines: Vec<Line>,
}

impl Paragraph {
    /// Creates a paragraph from an ordered sequence of raw line strings.
    #[must_use]
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Line::new).collect(),
        }
    }

    /// Renders the paragraph.
    ///
    /// A stored line may itself contain embedded newlines, so each is first
    /// split into its constituent lines. Every segment is trimmed and blank
    /// segments are dropped; the survivors are joined with the hard-break
    /// sequence (two trailing spaces plus a newline), and a single trailing
    /// newline terminates the whole paragraph. No blank line ever appears
    /// inside the output; an all-blank paragraph renders as an empty line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = self
            .lines
            .iter()
            .flat_map(|line| line.text().lines())
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("  \n");
        out.push('\n');
        out
    }
}

/// Accumulates lines for a [`Paragraph`], then freezes into the immutable
/// value.
#[derive(Debug, Default)]
pub struct ParagraphBuilder {
    lines: Vec<Line>,
}

impl ParagraphBuilder {
    pub(crate) const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Appends a line of text.
    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(Line::new(text));
        self
    }

    /// Appends every line in the given sequence.
    pub fn lines<I>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Line::new));
        self
    }

    pub(crate) fn finish(self) -> Paragraph {
        Paragraph { lines: self.lines }
    }
}
