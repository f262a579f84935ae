use serde::Serialize;

/// A leaf element holding literal text.
///
/// The text is stored exactly as provided — it may contain embedded newlines
/// and indentation artifacts from literal block text. No sanitization happens
/// at this layer; each composite applies its own (a paragraph drops blank
/// lines, a heading collapses them, a document trims blank edges).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    text: String,
}

impl Line {
    /// Creates a line from raw text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The raw text of this line.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Renders the line: the stored text, verbatim.
    #[must_use]
    pub fn render(&self) -> String {
        self.text.clone()
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Line {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::Line;

    #[test]
    fn renders_verbatim() {
        assert_eq!(Line::new("  raw  text").render(), "  raw  text");
    }

    #[test]
    fn embedded_newlines_survive() {
        assert_eq!(Line::new("a\n\nb").render(), "a\n\nb");
    }
}
