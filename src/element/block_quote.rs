use serde::Serialize;

use super::{Element, Line};
use crate::render;

/// A block quote: nested content with every rendered line prefixed by `> `.
///
/// Children are joined by the same blank-line separation rule a
/// [`Document`](crate::Document) uses for its top-level elements, and the
/// prefix is applied to the final rendered text — so a quote containing
/// another quote double-prefixes correctly at any depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockQuote {
    elements: Vec<Element>,
}

impl BlockQuote {
    pub(crate) const fn from_elements(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Creates a quote of raw text. The text may span multiple lines; each
    /// line is prefixed, and blank lines become bare `>` markers.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            elements: vec![Element::Line(Line::new(text))],
        }
    }

    /// Renders the quote. The result carries no trailing newline.
    #[must_use]
    pub fn render(&self) -> String {
        let interior = render::join_blocks(self.elements.iter().map(Element::render));
        interior
            .lines()
            .map(|line| {
                if line.trim().is_empty() {
                    ">".to_string()
                } else {
                    format!("> {line}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
