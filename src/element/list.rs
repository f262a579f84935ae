use serde::Serialize;

use super::{Element, Line, Paragraph, ParagraphBuilder};
use crate::render;

/// The bullet character used by an [`UnorderedList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BulletStyle {
    /// `*`
    #[default]
    Asterisk,
    /// `+`
    Plus,
    /// `-`
    Hyphen,
}

impl BulletStyle {
    const fn tag(self) -> &'static str {
        match self {
            Self::Asterisk => "*",
            Self::Plus => "+",
            Self::Hyphen => "-",
        }
    }
}

/// A single list item: a container for nested content (lines, paragraphs,
/// sublists).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    elements: Vec<Element>,
}

impl ListItem {
    /// Creates an item holding a single line of text.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            elements: vec![Element::Line(Line::new(text))],
        }
    }

    /// Renders the item's content, without any list marker or indent.
    ///
    /// Children are joined in order: a single newline between plain text
    /// lines, a blank line wherever a block-level child (paragraph, sublist)
    /// adjoins a neighbor. The result carries no trailing newline.
    fn render(&self) -> String {
        let mut out = String::new();
        let mut previous_is_block = None;
        for element in &self.elements {
            let Some(rendered) = render::trim_blank_edges(&element.render()) else {
                continue;
            };
            if let Some(previous) = previous_is_block {
                out.push_str(if previous || element.is_block() {
                    "\n\n"
                } else {
                    "\n"
                });
            }
            out.push_str(&rendered);
            previous_is_block = Some(element.is_block());
        }
        out
    }
}

/// Renders a list's items under their markers.
///
/// Adjoining single-line items are tight (no blank line between them); a
/// blank line separates two neighbors whenever either of them spans multiple
/// rendered lines. The `marker` callback supplies the per-item marker from
/// its zero-based index.
fn render_items(items: &[ListItem], marker: impl Fn(usize) -> String) -> String {
    let rendered: Vec<String> = items.iter().map(ListItem::render).collect();
    let mut out = String::new();
    for (index, body) in rendered.iter().enumerate() {
        if index > 0 {
            let loose = rendered[index - 1].contains('\n') || body.contains('\n');
            out.push_str(if loose { "\n\n" } else { "\n" });
        }
        out.push_str(&render::hang(&marker(index), body));
    }
    out
}

/// A numbered list (`1.`, `2.`, …).
///
/// Marker width grows with the digit count, and continuation lines indent to
/// match, so item ten's content aligns under its own text just as item one's
/// does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderedList {
    items: Vec<ListItem>,
}

impl OrderedList {
    /// Creates a list of single-line items from the given text sequence.
    #[must_use]
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            items: items.into_iter().map(ListItem::text).collect(),
        }
    }

    /// Renders the list. The result carries no trailing newline.
    #[must_use]
    pub fn render(&self) -> String {
        render_items(&self.items, |index| format!("{}.", index + 1))
    }
}

/// A bulleted list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnorderedList {
    style: BulletStyle,
    items: Vec<ListItem>,
}

impl UnorderedList {
    /// Creates a list of single-line items with the default bullet (`*`).
    #[must_use]
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::from_items_with(BulletStyle::default(), items)
    }

    /// Creates a list of single-line items with the given bullet style.
    #[must_use]
    pub fn from_items_with<I>(style: BulletStyle, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            style,
            items: items.into_iter().map(ListItem::text).collect(),
        }
    }

    /// Renders the list. The result carries no trailing newline.
    #[must_use]
    pub fn render(&self) -> String {
        let tag = self.style.tag();
        render_items(&self.items, |_| tag.to_string())
    }
}

/// Accumulates [`ListItem`]s for an ordered or unordered list.
#[derive(Debug, Default)]
pub struct ListBuilder {
    items: Vec<ListItem>,
}

impl ListBuilder {
    pub(crate) const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends a single-line item.
    pub fn item(&mut self, text: impl Into<String>) -> &mut Self {
        self.items.push(ListItem::text(text));
        self
    }

    /// Appends an item with nested content (paragraphs, sublists, …).
    pub fn item_with(&mut self, configure: impl FnOnce(&mut ItemBuilder)) -> &mut Self {
        let mut builder = ItemBuilder::new();
        configure(&mut builder);
        self.items.push(builder.finish());
        self
    }

    pub(crate) fn finish_ordered(self) -> OrderedList {
        OrderedList { items: self.items }
    }

    pub(crate) fn finish_unordered(self, style: BulletStyle) -> UnorderedList {
        UnorderedList {
            style,
            items: self.items,
        }
    }
}

/// Accumulates nested content for a single [`ListItem`].
#[derive(Debug, Default)]
pub struct ItemBuilder {
    elements: Vec<Element>,
}

impl ItemBuilder {
    pub(crate) const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Appends a plain text line.
    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.elements.push(Element::Line(Line::new(text)));
        self
    }

    /// Appends a paragraph built with the given closure.
    pub fn paragraph(&mut self, configure: impl FnOnce(&mut ParagraphBuilder)) -> &mut Self {
        let mut builder = ParagraphBuilder::new();
        configure(&mut builder);
        self.elements.push(Element::Paragraph(builder.finish()));
        self
    }

    /// Appends a paragraph from a sequence of raw lines.
    pub fn paragraph_lines<I>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.elements
            .push(Element::Paragraph(Paragraph::from_lines(lines)));
        self
    }

    /// Appends a nested ordered list built with the given closure.
    pub fn ordered_list(&mut self, configure: impl FnOnce(&mut ListBuilder)) -> &mut Self {
        let mut builder = ListBuilder::new();
        configure(&mut builder);
        self.elements
            .push(Element::OrderedList(builder.finish_ordered()));
        self
    }

    /// Appends a nested ordered list of single-line items.
    pub fn ordered_list_items<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.elements
            .push(Element::OrderedList(OrderedList::from_items(items)));
        self
    }

    /// Appends a nested unordered list (default bullet) built with the given
    /// closure.
    pub fn unordered_list(&mut self, configure: impl FnOnce(&mut ListBuilder)) -> &mut Self {
        self.unordered_list_with(BulletStyle::default(), configure)
    }

    /// Appends a nested unordered list with the given bullet style.
    pub fn unordered_list_with(
        &mut self,
        style: BulletStyle,
        configure: impl FnOnce(&mut ListBuilder),
    ) -> &mut Self {
        let mut builder = ListBuilder::new();
        configure(&mut builder);
        self.elements
            .push(Element::UnorderedList(builder.finish_unordered(style)));
        self
    }

    /// Appends a nested unordered list of single-line items.
    pub fn unordered_list_items<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.elements
            .push(Element::UnorderedList(UnorderedList::from_items(items)));
        self
    }

    /// Appends a nested unordered list of single-line items with the given
    /// bullet style.
    pub fn unordered_list_items_with<I>(&mut self, style: BulletStyle, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.elements.push(Element::UnorderedList(
            UnorderedList::from_items_with(style, items),
        ));
        self
    }

    pub(crate) fn finish(self) -> ListItem {
        ListItem {
            elements: self.elements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BulletStyle, ItemBuilder, ListBuilder, OrderedList, UnorderedList};

    fn item_with(configure: impl FnOnce(&mut ItemBuilder)) -> super::ListItem {
        let mut builder = ItemBuilder::new();
        configure(&mut builder);
        builder.finish()
    }

    #[test]
    fn tight_list_has_no_blank_lines() {
        let list = UnorderedList::from_items(["A", "B"]);
        assert_eq!(list.render(), "*  A\n*  B");
    }

    #[test]
    fn bullet_style_controls_tag() {
        let list = UnorderedList::from_items_with(BulletStyle::Hyphen, ["A", "B"]);
        assert_eq!(list.render(), "-  A\n-  B");
    }

    #[test]
    fn ordered_markers_are_one_based() {
        let list = OrderedList::from_items(["first", "second"]);
        assert_eq!(list.render(), "1.  first\n2.  second");
    }

    #[test]
    fn empty_item_keeps_its_marker_and_numbering() {
        let list = OrderedList::from_items(["first", "", "third"]);
        assert_eq!(list.render(), "1.  first\n2.\n3.  third");
    }

    #[test]
    fn multiline_item_forces_blank_separators() {
        let mut builder = ListBuilder::new();
        builder
            .item_with(|item| {
                item.paragraph_lines(["First item", "Second line"]);
            })
            .item("Second item");
        let list = builder.finish_unordered(BulletStyle::default());
        assert_eq!(
            list.render(),
            "*  First item  \n   Second line\n\n*  Second item"
        );
    }

    #[test]
    fn single_line_run_stays_tight_after_loose_item() {
        let mut builder = ListBuilder::new();
        builder
            .item("A")
            .item_with(|item| {
                item.line("B").line("C");
            })
            .item("D")
            .item("E");
        let list = builder.finish_unordered(BulletStyle::default());
        // B/C span two lines, so blank lines surround that item; D and E are
        // both single-line and stay tight with each other.
        assert_eq!(list.render(), "*  A\n\n*  B\n   C\n\n*  D\n*  E");
    }

    #[test]
    fn ordered_continuation_indent_tracks_marker_width() {
        let mut builder = ListBuilder::new();
        for index in 1..=10 {
            builder.item_with(|item| {
                item.line(format!("item {index}")).line("continued");
            });
        }
        let list = builder.finish_ordered();
        let rendered = list.render();
        // Item 1's continuation sits under a 3-column marker, item 10's
        // under a 4-column marker; each aligns with its own first character.
        assert!(rendered.contains("1.  item 1\n    continued"));
        assert!(rendered.contains("10.  item 10\n     continued"));
    }

    #[test]
    fn nested_sublist_is_indented_under_item() {
        let mut builder = ListBuilder::new();
        builder.item_with(|item| {
            item.line("top").unordered_list_items(["x", "y"]);
        });
        let list = builder.finish_unordered(BulletStyle::default());
        assert_eq!(list.render(), "*  top\n\n   *  x\n   *  y");
    }

    #[test]
    fn item_paragraphs_are_separated_by_blank_lines() {
        let item = item_with(|item| {
            item.paragraph_lines(["one"]).paragraph_lines(["two"]);
        });
        assert_eq!(item.render(), "one\n\ntwo");
    }

    #[test]
    fn plain_lines_in_item_stay_adjacent() {
        let item = item_with(|item| {
            item.line("a").line("b");
        });
        assert_eq!(item.render(), "a\nb");
    }
}
