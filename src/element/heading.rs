use serde::Serialize;

/// The size of an ATX heading, `H1` through `H6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum HeadingLevel {
    /// `#`
    #[default]
    H1,
    /// `##`
    H2,
    /// `###`
    H3,
    /// `####`
    H4,
    /// `#####`
    H5,
    /// `######`
    H6,
}

impl HeadingLevel {
    /// The leading tag for this level.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::H1 => "#",
            Self::H2 => "##",
            Self::H3 => "###",
            Self::H4 => "####",
            Self::H5 => "#####",
            Self::H6 => "######",
        }
    }
}

/// The error returned when a numeric heading level is outside `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("heading level must be between 1 and 6, got {0}")]
pub struct InvalidHeadingLevel(u8);

impl TryFrom<u8> for HeadingLevel {
    type Error = InvalidHeadingLevel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::H1),
            2 => Ok(Self::H2),
            3 => Ok(Self::H3),
            4 => Ok(Self::H4),
            5 => Ok(Self::H5),
            6 => Ok(Self::H6),
            other => Err(InvalidHeadingLevel(other)),
        }
    }
}

/// The underline style of a Setext heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum UnderlineStyle {
    /// H1, underlined with `=`.
    #[default]
    H1,
    /// H2, underlined with `-`.
    H2,
}

impl UnderlineStyle {
    const fn marker(self) -> &'static str {
        match self {
            Self::H1 => "=",
            Self::H2 => "-",
        }
    }
}

/// Collapses heading text to a single line.
///
/// Blank lines are dropped and the remaining lines are trimmed and joined
/// with single spaces, so multi-line input and its single-line equivalent
/// render identically.
fn collapse(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// An ATX-style heading (`# Title`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    text: String,
    level: HeadingLevel,
}

impl Heading {
    /// Creates an H1 heading. Text may span multiple lines; it is collapsed
    /// to a single line when rendered.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_level(text, HeadingLevel::H1)
    }

    /// Creates a heading at the given level.
    #[must_use]
    pub fn with_level(text: impl Into<String>, level: HeadingLevel) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }

    /// Renders the heading: a leading blank line, the level tag, and the
    /// collapsed text. Separation from following content is the enclosing
    /// container's job.
    #[must_use]
    pub fn render(&self) -> String {
        format!("\n{} {}", self.level.tag(), collapse(&self.text))
    }
}

/// A Setext-style heading (`Title` over a `=` or `-` underline).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnderlinedHeading {
    text: String,
    style: UnderlineStyle,
}

impl UnderlinedHeading {
    /// Creates a Setext H1 heading.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_style(text, UnderlineStyle::H1)
    }

    /// Creates a Setext heading with the given underline style.
    #[must_use]
    pub fn with_style(text: impl Into<String>, style: UnderlineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Renders the heading: a leading blank line, the collapsed text, and an
    /// underline whose character count equals the collapsed text's character
    /// count exactly.
    #[must_use]
    pub fn render(&self) -> String {
        let text = collapse(&self.text);
        let underline = self.style.marker().repeat(text.chars().count());
        format!("\n{text}\n{underline}")
    }
}

#[cfg(test)]
mod tests {
    use super::{Heading, HeadingLevel, InvalidHeadingLevel, UnderlineStyle, UnderlinedHeading};

    #[test]
    fn renders_with_leading_blank_line() {
        assert_eq!(Heading::new("Title").render(), "\n# Title");
    }

    #[test]
    fn level_controls_tag() {
        let heading = Heading::with_level("Section", HeadingLevel::H3);
        assert_eq!(heading.render(), "\n### Section");
    }

    #[test]
    fn collapsing_is_idempotent() {
        let multi = Heading::new("A title\n\n  split over\nlines  ");
        let single = Heading::new("A title split over lines");
        assert_eq!(multi.render(), single.render());
    }

    #[test]
    fn underline_length_matches_collapsed_text() {
        let heading = UnderlinedHeading::new("Some\ntitle");
        assert_eq!(heading.render(), "\nSome title\n==========");
    }

    #[test]
    fn underline_counts_characters_not_bytes() {
        let heading = UnderlinedHeading::with_style("héllo", UnderlineStyle::H2);
        assert_eq!(heading.render(), "\nhéllo\n-----");
    }

    #[test]
    fn numeric_levels_convert() {
        assert_eq!(HeadingLevel::try_from(1), Ok(HeadingLevel::H1));
        assert_eq!(HeadingLevel::try_from(6), Ok(HeadingLevel::H6));
        assert_eq!(HeadingLevel::try_from(0), Err(InvalidHeadingLevel(0)));
        assert_eq!(HeadingLevel::try_from(7), Err(InvalidHeadingLevel(7)));
    }
}
