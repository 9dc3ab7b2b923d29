//! Paragraph text collection.
//!
//! Walks a paragraph's inline nodes and produces the single
//! marker-substituted string the reflow engine consumes:
//!
//! - tabs and embedded newlines in text nodes become single spaces
//! - soft line breaks become single spaces
//! - hard line breaks become a reserved marker word carrying the
//!   closing-marker variant used in the source (trailing double space vs
//!   trailing backslash)
//! - whitespace inside protected spans (raw inline HTML and other verbatim
//!   content) is swapped for reserved sentinel characters so the wrap
//!   algorithm never treats it as a word-break opportunity
//!
//! The sentinels are private-use control characters embedded directly in the
//! string; [`unprotect_whitespace`] reverses the substitution after
//! wrapping.

/// Sentinel substituted for a literal space inside a protected span.
pub const PROTECTED_SPACE: char = '\u{1}';
/// Sentinel substituted for a literal tab inside a protected span.
pub const PROTECTED_TAB: char = '\u{2}';

/// Prefix character of all line-break marker words.
pub const BREAK_MARKER: char = '\u{3}';
/// Marker word for a hard line break written as two trailing spaces.
pub const HARD_BREAK_SPACES: &str = "\u{3}";
/// Marker word for a hard line break written as a trailing backslash.
pub const HARD_BREAK_BACKSLASH: &str = "\u{3}\\";
/// Marker word forcing a soft line break at this point.
pub const FORCED_SOFT_BREAK: &str = "\u{3}s";

/// Prefix character of a special-indent marker word (`'\u{4}'` followed by a
/// decimal continuation-indent width).
pub const SPECIAL_INDENT_MARKER: char = '\u{4}';

/// One inline node of a paragraph, as reported by the markdown parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text characters.
    Text(String),
    /// A soft line break (wrap-flowed newline in the source).
    SoftBreak,
    /// A hard line break.
    HardBreak {
        /// `true` for the `\`-before-newline form, `false` for the
        /// two-trailing-spaces form.
        backslash: bool,
    },
    /// A delimited inline construct (emphasis, strong, strikethrough, inline
    /// code): opening marker, inline children, closing marker.
    Delimited {
        /// Opening delimiter run, e.g. `**`.
        opening: String,
        /// The children between the delimiters.
        children: Vec<InlineNode>,
        /// Closing delimiter run.
        closing: String,
    },
    /// Verbatim content that must not be re-spaced or wrapped internally
    /// (inline code spans, raw inline HTML, autolinks, ...).
    Protected(String),
}

/// Collect the formattable text of a single paragraph.
pub fn collect_paragraph(nodes: &[InlineNode]) -> String {
    let mut buf = String::new();
    append_nodes(&mut buf, nodes);
    buf
}

fn append_nodes(buf: &mut String, nodes: &[InlineNode]) {
    for node in nodes {
        match node {
            InlineNode::Text(text) => {
                buf.extend(text.chars().map(|ch| match ch {
                    '\t' | '\n' => ' ',
                    other => other,
                }));
            }
            InlineNode::SoftBreak => buf.push(' '),
            InlineNode::HardBreak { backslash } => {
                buf.push(' ');
                buf.push_str(if *backslash {
                    HARD_BREAK_BACKSLASH
                } else {
                    HARD_BREAK_SPACES
                });
                buf.push(' ');
            }
            InlineNode::Delimited {
                opening,
                children,
                closing,
            } => {
                buf.push_str(opening);
                append_nodes(buf, children);
                buf.push_str(closing);
            }
            InlineNode::Protected(text) => buf.push_str(&protect_whitespace(text)),
        }
    }
}

/// Substitute literal spaces and tabs with sentinel characters.
pub fn protect_whitespace(text: &str) -> String {
    text.replace(' ', &PROTECTED_SPACE.to_string())
        .replace('\t', &PROTECTED_TAB.to_string())
}

/// Reverse the sentinel substitution of [`protect_whitespace`].
pub fn unprotect_whitespace(text: &str) -> String {
    text.replace(PROTECTED_SPACE, " ").replace(PROTECTED_TAB, "\t")
}
