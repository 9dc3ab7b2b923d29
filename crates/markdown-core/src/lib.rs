#![warn(missing_docs)]
//! Markdown Core - Headless Markdown Editor Engine
//!
//! # Overview
//!
//! `markdown-core` is the text-range annotation and reflow engine of a
//! markdown editor. It does not parse markdown, evaluate spelling rules, or
//! render anything: an external parser supplies the syntax tree, an external
//! checker supplies problem ranges, and an external view layer consumes the
//! computed results. What lives here is the algorithmic core those
//! collaborators share:
//!
//! - **Style merging**: [`StylePartition`] merges the possibly-overlapping
//!   style ranges of a syntax-tree walk into a minimal ordered partition of
//!   non-overlapping runs, each tagged with its combined [`StyleSet`].
//! - **Annotation tracking**: [`AnnotationRange`] keeps previously computed
//!   spell/grammar ranges anchored to the correct characters as the user
//!   edits, without re-running analysis on every keystroke.
//! - **Paragraph reflow**: [`collect_paragraph`] + [`wrap_paragraph`]
//!   re-wrap a paragraph to a target width while protecting inline code,
//!   raw HTML, and hard line breaks from being split or re-spaced.
//! - **Minimal diffs**: [`minimal_replacement`] converts a full-text rewrite
//!   into the smallest character-level edit, so undo history and screen
//!   redraw see only what actually changed.
//!
//! All offsets are character (`char`) offsets from the start of the
//! document. Every component is synchronous, pure computation, safe to call
//! from a background worker thread.
//!
//! # Quick Start
//!
//! ```rust
//! use markdown_core::{StylePartition, StyleTag, TextRange};
//!
//! let mut partition = StylePartition::new(100);
//! partition.insert(TextRange::new(5, 10), StyleTag::H1).unwrap();
//! partition.insert(TextRange::new(8, 18), StyleTag::Emphasis).unwrap();
//!
//! let starts: Vec<usize> = partition.ranges().iter().map(|r| r.range.start).collect();
//! assert_eq!(starts, vec![5, 8, 10]);
//! ```
//!
//! Reflowing a paragraph and feeding the result back as a minimal edit:
//!
//! ```rust
//! use markdown_core::{minimal_replacement, wrap_paragraph};
//!
//! let original = "123 567 901 345 789 123 567 90";
//! let wrapped = wrap_paragraph(original, 10, 0, 0).unwrap();
//! assert_eq!(wrapped, "123 567\n901 345\n789 123\n567 90");
//!
//! let replacement = minimal_replacement(original, &wrapped).unwrap();
//! assert_eq!(replacement.apply_to(original), wrapped);
//! ```
//!
//! # Module Description
//!
//! - [`range`] - half-open character-offset ranges
//! - [`styles`] - style tags and the style-range partition
//! - [`annotations`] - edit-tracking annotation ranges
//! - [`delta`] - text edits and minimal replacements
//! - [`collect`] - paragraph text collection with protective sentinels
//! - [`reflow`] - greedy paragraph wrapping

pub mod annotations;
pub mod collect;
pub mod delta;
pub mod range;
pub mod reflow;
pub mod styles;

pub use annotations::{AnnotationRange, AnnotationSet};
pub use collect::{
    BREAK_MARKER, FORCED_SOFT_BREAK, HARD_BREAK_BACKSLASH, HARD_BREAK_SPACES, InlineNode,
    PROTECTED_SPACE, PROTECTED_TAB, SPECIAL_INDENT_MARKER, collect_paragraph, protect_whitespace,
    unprotect_whitespace,
};
pub use delta::{Replacement, TextEdit, minimal_replacement};
pub use range::TextRange;
pub use reflow::{ReflowError, format_paragraph, wrap_paragraph};
pub use styles::{PartitionError, StylePartition, StyleSet, StyleTag, StyledRange};
