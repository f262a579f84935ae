use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use serde::Serialize;

use crate::{
    element::{
        BlockQuote, BulletStyle, Element, Heading, HeadingLevel, Line, ListBuilder, OrderedList,
        Paragraph, ParagraphBuilder, UnderlineStyle, UnderlinedHeading, UnorderedList,
    },
    render,
};

/// A fully rendered Markdown document.
///
/// Built once via [`Document::build`] and immutable afterwards. The rendered
/// text is computed at build time: consecutive top-level elements are
/// separated by exactly one blank line, the text never starts with a blank
/// line, and it ends with a single terminating newline (`\n` line endings
/// throughout). An empty document renders as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    elements: Vec<Element>,
    content: String,
}

impl Document {
    /// Builds a document by running `configure` against a fresh
    /// [`BlockBuilder`], then rendering the accumulated elements.
    #[must_use]
    pub fn build(configure: impl FnOnce(&mut BlockBuilder)) -> Self {
        let mut builder = BlockBuilder::new();
        configure(&mut builder);
        Self::from_elements(builder.elements)
    }

    /// Builds a document directly from a sequence of elements.
    #[must_use]
    pub fn from_elements(elements: Vec<Element>) -> Self {
        let mut content = render::join_blocks(elements.iter().map(Element::render));
        if !content.is_empty() {
            content.push('\n');
        }
        tracing::debug!(
            elements = elements.len(),
            bytes = content.len(),
            "rendered document"
        );
        Self { elements, content }
    }

    /// The rendered Markdown text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The top-level elements, in insertion order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Whether the document holds no content at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Writes the rendered text to the given writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.content.as_bytes())
    }

    /// Writes the rendered text to a file path.
    ///
    /// Parent directories are created automatically if they don't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written to.
    pub fn save_to_path(&self, file_path: &Path) -> io::Result<()> {
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(file_path)?;
        let mut writer = BufWriter::new(file);
        self.write(&mut writer)?;
        writer.flush()
    }
}

/// Accumulates block elements in insertion order.
///
/// This is the container builder used at the document top level and inside
/// block quotes — the two places where any element kind may appear. More
/// restrictive containers ([`ParagraphBuilder`], [`ListBuilder`],
/// [`ItemBuilder`](crate::element::ItemBuilder)) expose only the child kinds
/// they support, so invalid nesting is unrepresentable.
#[derive(Debug, Default)]
pub struct BlockBuilder {
    elements: Vec<Element>,
}

impl BlockBuilder {
    pub(crate) const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Appends a raw text line, stored verbatim.
    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Element::Line(Line::new(text)))
    }

    /// Appends an ATX H1 heading.
    pub fn heading(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Element::Heading(Heading::new(text)))
    }

    /// Appends an ATX heading at the given level.
    pub fn heading_with(&mut self, text: impl Into<String>, level: HeadingLevel) -> &mut Self {
        self.push(Element::Heading(Heading::with_level(text, level)))
    }

    /// Appends a Setext H1 heading.
    pub fn underlined_heading(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Element::UnderlinedHeading(UnderlinedHeading::new(text)))
    }

    /// Appends a Setext heading with the given underline style.
    pub fn underlined_heading_with(
        &mut self,
        text: impl Into<String>,
        style: UnderlineStyle,
    ) -> &mut Self {
        self.push(Element::UnderlinedHeading(UnderlinedHeading::with_style(
            text, style,
        )))
    }

    /// Appends a horizontal rule.
    pub fn horizontal_rule(&mut self) -> &mut Self {
        self.push(Element::HorizontalRule)
    }

    /// Appends a paragraph built with the given closure.
    pub fn paragraph(&mut self, configure: impl FnOnce(&mut ParagraphBuilder)) -> &mut Self {
        let mut builder = ParagraphBuilder::new();
        configure(&mut builder);
        self.push(Element::Paragraph(builder.finish()))
    }

    /// Appends a paragraph from a sequence of raw lines.
    pub fn paragraph_lines<I>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.push(Element::Paragraph(Paragraph::from_lines(lines)))
    }

    /// Appends a block quote built with the given closure. The quote accepts
    /// the same child kinds as the document itself.
    pub fn block_quote(&mut self, configure: impl FnOnce(&mut Self)) -> &mut Self {
        let mut builder = Self::new();
        configure(&mut builder);
        self.push(Element::BlockQuote(BlockQuote::from_elements(
            builder.elements,
        )))
    }

    /// Appends a block quote of raw text.
    pub fn block_quote_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Element::BlockQuote(BlockQuote::from_text(text)))
    }

    /// Appends an ordered list built with the given closure.
    pub fn ordered_list(&mut self, configure: impl FnOnce(&mut ListBuilder)) -> &mut Self {
        let mut builder = ListBuilder::new();
        configure(&mut builder);
        self.push(Element::OrderedList(builder.finish_ordered()))
    }

    /// Appends an ordered list of single-line items.
    pub fn ordered_list_items<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.push(Element::OrderedList(OrderedList::from_items(items)))
    }

    /// Appends an unordered list (default bullet) built with the given
    /// closure.
    pub fn unordered_list(&mut self, configure: impl FnOnce(&mut ListBuilder)) -> &mut Self {
        self.unordered_list_with(BulletStyle::default(), configure)
    }

    /// Appends an unordered list with the given bullet style.
    pub fn unordered_list_with(
        &mut self,
        style: BulletStyle,
        configure: impl FnOnce(&mut ListBuilder),
    ) -> &mut Self {
        let mut builder = ListBuilder::new();
        configure(&mut builder);
        self.push(Element::UnorderedList(builder.finish_unordered(style)))
    }

    /// Appends an unordered list of single-line items with the default
    /// bullet.
    pub fn unordered_list_items<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.push(Element::UnorderedList(UnorderedList::from_items(items)))
    }

    /// Appends an unordered list of single-line items with the given bullet
    /// style.
    pub fn unordered_list_items_with<I>(&mut self, style: BulletStyle, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.push(Element::UnorderedList(UnorderedList::from_items_with(
            style, items,
        )))
    }

    /// Appends an already-built element.
    pub fn push(&mut self, element: Element) -> &mut Self {
        self.elements.push(element);
        self
    }
}
