//! Paragraph reflow.
//!
//! Re-wraps a paragraph's collected text (see [`crate::collect`]) to a
//! target line width: runs of spaces merge into one, lines break greedily
//! at the wrap column, hard-break markers turn back into their source form,
//! and continuation lines of list items are re-indented to the marker
//! width. Sentinel-protected whitespace never acts as a break opportunity
//! and is restored on the final output.
//!
//! Line budgets are measured in display cells (UAX #11), so CJK paragraphs
//! wrap at the same visual width as ASCII ones.

use std::sync::LazyLock;

use regex::Regex;
use unicode_width::UnicodeWidthChar;

use crate::collect::{
    BREAK_MARKER, FORCED_SOFT_BREAK, HARD_BREAK_BACKSLASH, HARD_BREAK_SPACES, InlineNode,
    SPECIAL_INDENT_MARKER, collect_paragraph, unprotect_whitespace,
};

/// Reflow error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReflowError {
    /// The wrap column was zero.
    InvalidWrapColumn,
}

impl std::fmt::Display for ReflowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReflowError::InvalidWrapColumn => write!(f, "Invalid wrap column: 0"),
        }
    }
}

impl std::error::Error for ReflowError {}

static NUMBERED_LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.$").expect("valid regex"));

/// Visual width of a word in cells (UAX #11).
///
/// Control characters (the whitespace sentinels) count as one cell, since
/// each stands for a single space or tab.
fn cell_width(word: &str) -> usize {
    word.chars()
        .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(1))
        .sum()
}

/// Whether a line may break before `word`.
///
/// Wrapping is suppressed when the word at line start would change the
/// markdown structure: a leading `>` would open a block quote, and bare
/// bullet or numbered-list markers would open a list item.
fn allow_wrap_before_word(word: &str) -> bool {
    if word.starts_with('>') {
        return false;
    }
    if word == "-" || word == "+" || word == "*" {
        return false;
    }
    if word.starts_with(|ch: char| ch.is_ascii_digit()) && NUMBERED_LIST_MARKER.is_match(word) {
        return false;
    }
    true
}

/// Wrap a paragraph's collected text to `wrap_column` cells.
///
/// - `indent` is the number of spaces emitted at the start of every
///   continuation line (the list-item marker width; `0` for a bare
///   paragraph).
/// - `first_line_indent` pre-seeds the first line's length budget without
///   emitting characters: the paragraph's leading whitespace and list
///   marker already exist in the source line before the text starts.
///
/// An empty paragraph yields an empty string. A single word wider than
/// `wrap_column` is placed on its own line, never split.
pub fn wrap_paragraph(
    text: &str,
    wrap_column: usize,
    indent: usize,
    first_line_indent: usize,
) -> Result<String, ReflowError> {
    if wrap_column == 0 {
        return Err(ReflowError::InvalidWrapColumn);
    }

    let mut out = String::with_capacity(text.len());
    let mut line_len = first_line_indent;
    let mut first_word = true;
    let mut special_first_line = false;
    let mut special_indent = 0usize;

    for word in text.split(' ').filter(|w| !w.is_empty()) {
        if let Some(rest) = word.strip_prefix(SPECIAL_INDENT_MARKER) {
            special_indent = rest.parse().unwrap_or(0);
            continue;
        }

        if word.starts_with(BREAK_MARKER) {
            // hard line break ("two spaces" or "backslash") or forced soft break
            out.push_str(match word {
                HARD_BREAK_SPACES => "  \n",
                HARD_BREAK_BACKSLASH => "\\\n",
                _ => "\n",
            });
            line_len = 0;
            first_word = true;
            special_first_line = word == FORCED_SOFT_BREAK;
            continue;
        }

        let width = cell_width(word);
        if !first_word
            && line_len > indent
            && line_len + 1 + width > wrap_column
            && allow_wrap_before_word(word)
        {
            // wrap
            out.push('\n');
            line_len = 0;
            first_word = true;
        } else if !first_word && line_len > indent {
            // add space before word
            out.push(' ');
            line_len += 1;
        }

        // indent
        if line_len == 0 {
            let mut indent_size = 0;
            if special_indent > 0 {
                if !special_first_line {
                    indent_size = special_indent;
                } else if indent == 0 {
                    indent_size = first_line_indent;
                }
            }

            for _ in 0..indent + indent_size {
                out.push(' ');
            }
            line_len = indent + indent_size;
        }

        // add word
        out.push_str(word);
        line_len += width;
        first_word = false;
        special_first_line = false;
    }

    Ok(unprotect_whitespace(&out))
}

/// Collect a paragraph's inline nodes and wrap the result.
pub fn format_paragraph(
    nodes: &[InlineNode],
    wrap_column: usize,
    indent: usize,
    first_line_indent: usize,
) -> Result<String, ReflowError> {
    wrap_paragraph(
        &collect_paragraph(nodes),
        wrap_column,
        indent,
        first_line_indent,
    )
}
