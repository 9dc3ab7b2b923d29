//! Text edits and minimal replacements.
//!
//! [`TextEdit`] is the unit the annotation tracker consumes: one linear
//! mutation described by its position and the lengths of the removed and
//! inserted text. [`minimal_replacement`] turns a whole-string rewrite (for
//! example a reflowed paragraph) into the smallest contiguous replacement
//! that produces it, so downstream consumers (undo history, screen redraw,
//! annotation offsets) see only the characters that actually changed.
//!
//! All offsets and lengths are in character (`char`) counts.

/// A single linear text mutation: `removed` characters at `position` are
/// replaced by `inserted` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEdit {
    /// Character offset where the edit starts.
    pub position: usize,
    /// Number of inserted characters (may be zero).
    pub inserted: usize,
    /// Number of removed characters (may be zero).
    pub removed: usize,
}

impl TextEdit {
    /// Create a new edit record.
    pub fn new(position: usize, inserted: usize, removed: usize) -> Self {
        Self {
            position,
            inserted,
            removed,
        }
    }

    /// Exclusive end offset of the removed span in the pre-edit document.
    pub fn end(&self) -> usize {
        self.position.saturating_add(self.removed)
    }

    /// Check whether the edit inserts and removes nothing.
    pub fn is_noop(&self) -> bool {
        self.inserted == 0 && self.removed == 0
    }
}

/// The minimal contiguous replacement transforming one string into another.
///
/// `text` replaces the characters `[start, end)` of the original string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Inclusive start character offset in the original string.
    pub start: usize,
    /// Exclusive end character offset in the original string.
    pub end: usize,
    /// The replacement text for just that span.
    pub text: String,
}

impl Replacement {
    /// The edit record describing this replacement.
    pub fn as_edit(&self) -> TextEdit {
        TextEdit::new(self.start, self.text.chars().count(), self.end - self.start)
    }

    /// Apply the replacement to `original`, producing the candidate string.
    pub fn apply_to(&self, original: &str) -> String {
        let mut result = String::with_capacity(original.len() + self.text.len());
        let mut chars = original.chars();
        result.extend(chars.by_ref().take(self.start));
        result.push_str(&self.text);
        result.extend(chars.skip(self.end - self.start));
        result
    }
}

/// Compute the minimal replacement turning `original` into `candidate`.
///
/// Trims the longest common prefix, then the longest common suffix without
/// crossing the prefix, and returns the span in between. Returns `None` when
/// the strings are equal. Applying the returned replacement to `original`
/// always reproduces `candidate` exactly.
pub fn minimal_replacement(original: &str, candidate: &str) -> Option<Replacement> {
    let old: Vec<char> = original.chars().collect();
    let new: Vec<char> = candidate.chars().collect();

    // trim leading equal characters
    let mut start = 0;
    while start < old.len() && start < new.len() && old[start] == new[start] {
        start += 1;
    }

    // trim trailing equal characters, never crossing the prefix
    let mut old_end = old.len();
    let mut new_end = new.len();
    while old_end > start && new_end > start && old[old_end - 1] == new[new_end - 1] {
        old_end -= 1;
        new_end -= 1;
    }

    if start == old_end && start == new_end {
        return None;
    }

    Some(Replacement {
        start,
        end: old_end,
        text: new[start..new_end].iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_strings_produce_no_replacement() {
        assert_eq!(minimal_replacement("", ""), None);
        assert_eq!(minimal_replacement("abc", "abc"), None);
    }

    #[test]
    fn test_insertion_in_middle() {
        let replacement = minimal_replacement("hello world", "hello brave world").unwrap();
        assert_eq!(replacement.start, 6);
        assert_eq!(replacement.end, 6);
        assert_eq!(replacement.text, "brave ");
        assert_eq!(replacement.apply_to("hello world"), "hello brave world");
    }

    #[test]
    fn test_removal_at_end() {
        let replacement = minimal_replacement("hello world", "hello").unwrap();
        assert_eq!(replacement.start, 5);
        assert_eq!(replacement.end, 11);
        assert_eq!(replacement.text, "");
        assert_eq!(replacement.apply_to("hello world"), "hello");
    }

    #[test]
    fn test_replacement_as_edit() {
        let replacement = minimal_replacement("abcdef", "abXYdef").unwrap();
        let edit = replacement.as_edit();
        assert_eq!(edit.position, 2);
        assert_eq!(edit.removed, 1);
        assert_eq!(edit.inserted, 2);
        assert_eq!(edit.end(), 3);
    }

    #[test]
    fn test_multibyte_characters() {
        // offsets are chars, not bytes
        let replacement = minimal_replacement("aäc", "aöc").unwrap();
        assert_eq!(replacement.start, 1);
        assert_eq!(replacement.end, 2);
        assert_eq!(replacement.text, "ö");
        assert_eq!(replacement.apply_to("aäc"), "aöc");
    }
}
