//! Half-open character-offset ranges.
//!
//! All offsets in this crate are counted in Unicode scalar values (`char`)
//! from the start of the document. `TextRange` is the value type shared by
//! the style partition, the annotation tracker, and the minimal replacer.

/// A half-open range `[start, end)` over character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextRange {
    /// Start offset (inclusive).
    pub start: usize,
    /// End offset (exclusive).
    pub end: usize,
}

impl TextRange {
    /// Create a new range with `[start, end)` offsets.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the range in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the range covers zero characters.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Check if the range contains a specific position.
    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Check if two ranges overlap.
    pub fn overlaps(&self, other: &TextRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Check if `other` starts exactly where `self` ends.
    ///
    /// Adjacent ranges share a boundary but no characters.
    pub fn is_adjacent(&self, other: &TextRange) -> bool {
        self.end == other.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let range = TextRange::new(10, 20);
        assert!(range.contains(10));
        assert!(range.contains(15));
        assert!(range.contains(19));
        assert!(!range.contains(20));
        assert!(!range.contains(9));
    }

    #[test]
    fn test_overlaps() {
        let a = TextRange::new(10, 20);
        let b = TextRange::new(15, 25);
        let c = TextRange::new(25, 30);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_adjacent_ranges_do_not_overlap() {
        let a = TextRange::new(10, 20);
        let b = TextRange::new(20, 30);

        assert!(a.is_adjacent(&b));
        assert!(!b.is_adjacent(&a));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_empty_range() {
        let range = TextRange::new(5, 5);
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
        assert!(!range.contains(5));
    }
}
