//! The content model: every Markdown building block this crate can render.
//!
//! Each concrete block lives in its own submodule; [`Element`] is the
//! polymorphic unit a container holds. Containers own their children
//! exclusively and children never reference parents, so a content tree is a
//! plain acyclic value.

/// Block quotes.
pub mod block_quote;
pub use block_quote::BlockQuote;

/// ATX and Setext headings.
pub mod heading;
pub use heading::{Heading, HeadingLevel, InvalidHeadingLevel, UnderlineStyle, UnderlinedHeading};

/// Raw text lines.
pub mod line;
pub use line::Line;

/// Ordered and unordered lists and their items.
pub mod list;
pub use list::{BulletStyle, ItemBuilder, ListBuilder, ListItem, OrderedList, UnorderedList};

/// Paragraphs of hard-break-joined lines.
pub mod paragraph;
pub use paragraph::{Paragraph, ParagraphBuilder};

use serde::Serialize;

/// A single unit of Markdown content.
///
/// An element renders exactly itself, including any element-specific leading
/// blank-line convention, but never its separation from siblings — that is
/// the job of the container holding it (see [`crate::Document`]).
///
/// [`ListItem`] is deliberately not a variant: an item is only meaningful
/// inside a list, and keeping it out of this enum makes that nesting rule
/// unrepresentable rather than checked at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Element {
    /// A raw text line, stored verbatim.
    Line(Line),
    /// A paragraph of hard-break-joined lines.
    Paragraph(Paragraph),
    /// An ATX heading (`# Title`).
    Heading(Heading),
    /// A Setext heading (`Title` over `=====`).
    UnderlinedHeading(UnderlinedHeading),
    /// A horizontal rule (`---`).
    HorizontalRule,
    /// A `> `-prefixed quote of nested content.
    BlockQuote(BlockQuote),
    /// A numbered list.
    OrderedList(OrderedList),
    /// A bulleted list.
    UnorderedList(UnorderedList),
}

impl Element {
    /// Renders this element to its complete Markdown text.
    ///
    /// Rendering is pure and deterministic: the same tree always produces the
    /// same text.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Line(line) => line.render(),
            Self::Paragraph(paragraph) => paragraph.render(),
            Self::Heading(heading) => heading.render(),
            Self::UnderlinedHeading(heading) => heading.render(),
            Self::HorizontalRule => "\n---".to_string(),
            Self::BlockQuote(quote) => quote.render(),
            Self::OrderedList(list) => list.render(),
            Self::UnorderedList(list) => list.render(),
        }
    }

    /// Whether this element is block-level content.
    ///
    /// Inside a list item, block-level siblings are separated by a blank
    /// line while plain text lines are not.
    pub(crate) const fn is_block(&self) -> bool {
        !matches!(self, Self::Line(_))
    }
}

impl From<Line> for Element {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Paragraph> for Element {
    fn from(paragraph: Paragraph) -> Self {
        Self::Paragraph(paragraph)
    }
}

impl From<Heading> for Element {
    fn from(heading: Heading) -> Self {
        Self::Heading(heading)
    }
}

impl From<UnderlinedHeading> for Element {
    fn from(heading: UnderlinedHeading) -> Self {
        Self::UnderlinedHeading(heading)
    }
}

impl From<BlockQuote> for Element {
    fn from(quote: BlockQuote) -> Self {
        Self::BlockQuote(quote)
    }
}

impl From<OrderedList> for Element {
    fn from(list: OrderedList) -> Self {
        Self::OrderedList(list)
    }
}

impl From<UnorderedList> for Element {
    fn from(list: UnorderedList) -> Self {
        Self::UnorderedList(list)
    }
}

#[cfg(test)]
mod tests {
    use super::{Element, Line};

    #[test]
    fn horizontal_rule_is_fixed() {
        assert_eq!(Element::HorizontalRule.render(), "\n---");
    }

    #[test]
    fn lines_are_not_block_level() {
        assert!(!Element::from(Line::new("text")).is_block());
        assert!(Element::HorizontalRule.is_block());
    }
}
