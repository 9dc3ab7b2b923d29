//! Annotation ranges that ride along with text edits.
//!
//! Spell/grammar analysis runs deferred on a background worker, so its
//! problem ranges go stale the moment the user types. Instead of re-running
//! the analysis on every keystroke, each live [`AnnotationRange`] is
//! translated in place for every edit, which keeps existing underline
//! highlights anchored to the correct characters until a fresh analysis
//! result arrives.

use crate::delta::TextEdit;

/// A mutable annotation range `[from, to]` over character offsets.
///
/// Bounds are rewritten in place by [`apply_edit`](Self::apply_edit). Once an
/// edit has fully subsumed the range it becomes permanently invalid; the
/// owner must discard it on its next pass — it is never revalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationRange {
    from: usize,
    to: usize,
    valid: bool,
}

impl AnnotationRange {
    /// Create a new valid annotation range.
    pub fn new(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            valid: true,
        }
    }

    /// Start offset.
    pub fn from_pos(&self) -> usize {
        self.from
    }

    /// End offset.
    pub fn to_pos(&self) -> usize {
        self.to
    }

    /// Whether the range still corresponds to document content.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Translate the range's bounds for one text edit.
    ///
    /// Edits must be applied in the chronological order they were made to
    /// the document. Calls on an invalidated range are no-ops.
    pub fn apply_edit(&mut self, edit: &TextEdit) {
        if !self.valid {
            return;
        }
        if edit.position > self.to {
            // changed area is after this range
            return;
        }

        let TextEdit {
            position,
            inserted,
            removed,
        } = *edit;

        if position + removed <= self.from {
            // changed area is before this range
            self.from = self.from - removed + inserted;
            self.to = self.to - removed + inserted;
        } else if position >= self.from {
            // changed area starts within this range
            if position + removed <= self.to {
                // changed area is within this range
                self.to = self.to - removed + inserted;
            } else {
                // changed area starts within this range and ends after it
                // --> the new text does not belong to this range
                self.to = position;
            }
        } else if position + removed <= self.to {
            // changed area starts before this range and ends within it
            // --> the new text does not belong to this range
            self.from = position + inserted;
            self.to = self.to - removed + inserted;
        } else {
            // changed area fully replaces the range
            self.valid = false;
        }
    }
}

impl std::fmt::Display for AnnotationRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.valid {
            write!(f, "INVALID ")?;
        }
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// The annotation ranges of one analysis result.
///
/// The set owns the ranges produced by a single spell/grammar pass, fans
/// document edits out to all of them, and drops the ones an edit has
/// destroyed. When a newer analysis result arrives the whole set is
/// replaced.
#[derive(Debug, Default)]
pub struct AnnotationSet {
    ranges: Vec<AnnotationRange>,
}

impl AnnotationSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Replace all ranges with a fresh analysis result.
    pub fn replace(&mut self, ranges: Vec<AnnotationRange>) {
        self.ranges = ranges;
    }

    /// Translate every live range for one text edit.
    pub fn apply_edit(&mut self, edit: &TextEdit) {
        for range in &mut self.ranges {
            range.apply_edit(edit);
        }
    }

    /// Drop ranges that an edit has invalidated.
    pub fn retain_valid(&mut self) {
        self.ranges.retain(|r| r.is_valid());
    }

    /// Iterate over all ranges, including invalidated ones.
    pub fn iter(&self) -> impl Iterator<Item = &AnnotationRange> {
        self.ranges.iter()
    }

    /// Number of ranges in the set.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Remove all ranges.
    pub fn clear(&mut self) {
        self.ranges.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_after_range_is_noop() {
        let mut range = AnnotationRange::new(10, 20);
        range.apply_edit(&TextEdit::new(25, 3, 0));

        assert_eq!(range.from_pos(), 10);
        assert_eq!(range.to_pos(), 20);
        assert!(range.is_valid());
    }

    #[test]
    fn test_edit_before_range_shifts_both_bounds() {
        let mut range = AnnotationRange::new(10, 20);
        range.apply_edit(&TextEdit::new(2, 5, 3));

        assert_eq!(range.from_pos(), 12);
        assert_eq!(range.to_pos(), 22);
        assert!(range.is_valid());
    }

    #[test]
    fn test_enclosing_edit_invalidates_permanently() {
        let mut range = AnnotationRange::new(10, 20);
        range.apply_edit(&TextEdit::new(5, 25, 20));
        assert!(!range.is_valid());

        // further edits never resurrect the range
        range.apply_edit(&TextEdit::new(0, 3, 0));
        assert!(!range.is_valid());
    }

    #[test]
    fn test_display() {
        let mut range = AnnotationRange::new(3, 8);
        assert_eq!(range.to_string(), "3-8");

        range.apply_edit(&TextEdit::new(0, 0, 20));
        assert!(range.to_string().starts_with("INVALID "));
    }
}
