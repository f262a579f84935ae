//! Shared rendering algorithms used by every container element.
//!
//! Two rules live here because they must behave identically wherever siblings
//! are joined: the blank-line separation rule used by [`Document`] and
//! [`BlockQuote`] interiors, and the hanging-indent layout used by lists.
//!
//! [`Document`]: crate::Document
//! [`BlockQuote`]: crate::BlockQuote

/// Strips leading and trailing blank lines from a rendered block, preserving
/// interior blank lines and any trailing hard-break spaces on content lines.
///
/// Returns `None` if the block contains no content lines at all.
#[must_use]
pub fn trim_blank_edges(block: &str) -> Option<String> {
    let lines: Vec<&str> = block.lines().collect();
    let start = lines.iter().position(|line| !line.trim().is_empty())?;
    let end = lines.iter().rposition(|line| !line.trim().is_empty())?;
    Some(lines[start..=end].join("\n"))
}

/// Joins rendered sibling blocks with exactly one blank line between
/// consecutive blocks.
///
/// Each block is first trimmed of the leading/trailing blank lines its own
/// rendering convention may carry (a heading renders with a leading blank
/// line, a paragraph with a trailing newline), so separators are never
/// doubled. Blocks with no content are dropped entirely.
#[must_use]
pub fn join_blocks<I>(blocks: I) -> String
where
    I: IntoIterator<Item = String>,
{
    blocks
        .into_iter()
        .filter_map(|block| trim_blank_edges(&block))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Lays out a list item's rendered content under its marker.
///
/// The first line is prefixed with `marker` plus two spaces; every following
/// non-blank line is indented by the marker's width plus two so that
/// continuation text aligns under the first character of the item's own text.
/// Neither an empty first line nor a blank continuation line carries
/// trailing whitespace.
#[must_use]
pub fn hang(marker: &str, body: &str) -> String {
    let indent = " ".repeat(marker.chars().count() + 2);
    let mut lines = body.lines();
    let first = lines.next().unwrap_or_default();
    let mut out = if first.is_empty() {
        marker.to_string()
    } else {
        format!("{marker}  {first}")
    };
    for line in lines {
        out.push('\n');
        if !line.trim().is_empty() {
            out.push_str(&indent);
            out.push_str(line);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{hang, join_blocks, trim_blank_edges};

    #[test]
    fn trims_leading_and_trailing_blank_lines() {
        assert_eq!(trim_blank_edges("\n\na\nb\n\n"), Some("a\nb".to_string()));
    }

    #[test]
    fn preserves_interior_blank_lines() {
        assert_eq!(trim_blank_edges("a\n\nb"), Some("a\n\nb".to_string()));
    }

    #[test]
    fn preserves_hard_break_spaces() {
        assert_eq!(trim_blank_edges("a  \nb\n"), Some("a  \nb".to_string()));
    }

    #[test]
    fn blank_block_is_none() {
        assert_eq!(trim_blank_edges("\n  \n"), None);
        assert_eq!(trim_blank_edges(""), None);
    }

    #[test]
    fn joins_with_single_blank_line() {
        let blocks = vec!["\n# Title".to_string(), "body\n".to_string()];
        assert_eq!(join_blocks(blocks), "# Title\n\nbody");
    }

    #[test]
    fn drops_empty_blocks() {
        let blocks = vec!["a".to_string(), "\n".to_string(), "b".to_string()];
        assert_eq!(join_blocks(blocks), "a\n\nb");
    }

    #[test]
    fn hang_single_line() {
        assert_eq!(hang("*", "text"), "*  text");
        assert_eq!(hang("1.", "text"), "1.  text");
    }

    #[test]
    fn hang_indents_continuation_lines() {
        assert_eq!(hang("*", "a\nb"), "*  a\n   b");
        assert_eq!(hang("10.", "a\nb"), "10.  a\n     b");
    }

    #[test]
    fn hang_empty_body_is_a_bare_marker() {
        assert_eq!(hang("*", ""), "*");
        assert_eq!(hang("1.", ""), "1.");
    }

    #[test]
    fn hang_keeps_blank_lines_bare() {
        assert_eq!(hang("*", "a\n\nb"), "*  a\n\n   b");
    }
}
