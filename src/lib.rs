//! Typed, composable Markdown document construction.
//!
//! Documents are built from typed building blocks rather than by
//! concatenating strings: containers accumulate children through builders,
//! freeze into immutable elements, and render bottom-up with correct
//! blank-line separation, indentation, and hard-break rules at any nesting
//! depth.
//!
//! ```
//! use mdbuilder::Document;
//!
//! let doc = Document::build(|doc| {
//!     doc.heading("Shopping")
//!         .unordered_list_items(["Apples", "Flour"]);
//! });
//!
//! assert_eq!(doc.content(), "# Shopping\n\n*  Apples\n*  Flour\n");
//! ```

/// The content model: elements and their builders.
pub mod element;
pub use element::{
    BlockQuote, BulletStyle, Element, Heading, HeadingLevel, InvalidHeadingLevel, ItemBuilder,
    Line, ListBuilder, ListItem, OrderedList, Paragraph, ParagraphBuilder, UnderlineStyle,
    UnderlinedHeading, UnorderedList,
};

mod document;
pub use document::{BlockBuilder, Document};

mod render;
