//! Style tags and the style-range partition.
//!
//! A markdown syntax-tree walk reports one styled range per visited node, in
//! document order, and ranges from nested nodes overlap freely (emphasis
//! inside a heading, code inside a link, ...). Renderers want the opposite
//! shape: an ordered sequence of non-overlapping runs, each tagged with the
//! full set of styles active over it. [`StylePartition`] performs that merge
//! incrementally, one insertion per node.

use crate::range::TextRange;

/// One visual style class, as produced by the markdown syntax-tree walk.
///
/// The set is closed; each tag maps to a fixed bit position in a
/// [`StyleSet`] mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum StyleTag {
    /// Level-1 heading.
    H1 = 0,
    /// Level-2 heading.
    H2,
    /// Level-3 heading.
    H3,
    /// Level-4 heading.
    H4,
    /// Level-5 heading.
    H5,
    /// Level-6 heading.
    H6,
    /// Strong emphasis (`**bold**`).
    Strong,
    /// Emphasis (`*italic*`).
    Emphasis,
    /// Strikethrough (`~~deleted~~`).
    Strikethrough,
    /// Link (inline, reference, autolink, or mail link).
    Link,
    /// Image (inline or reference).
    Image,
    /// Inline code span.
    Code,
    /// Hard line break.
    HardBreak,
    /// Fenced or indented code block.
    CodeBlock,
    /// Block quote.
    Blockquote,
    /// Bullet list.
    BulletList,
    /// Ordered list.
    OrderedList,
    /// List item.
    ListItem,
    /// List-item opening marker (`-`, `*`, `1.`).
    ListMarker,
    /// Raw HTML (block or inline).
    Html,
    /// Link reference definition.
    Reference,
}

impl StyleTag {
    /// All tags, in bit order.
    pub const ALL: [StyleTag; 21] = [
        StyleTag::H1,
        StyleTag::H2,
        StyleTag::H3,
        StyleTag::H4,
        StyleTag::H5,
        StyleTag::H6,
        StyleTag::Strong,
        StyleTag::Emphasis,
        StyleTag::Strikethrough,
        StyleTag::Link,
        StyleTag::Image,
        StyleTag::Code,
        StyleTag::HardBreak,
        StyleTag::CodeBlock,
        StyleTag::Blockquote,
        StyleTag::BulletList,
        StyleTag::OrderedList,
        StyleTag::ListItem,
        StyleTag::ListMarker,
        StyleTag::Html,
        StyleTag::Reference,
    ];

    /// The heading tag for a level in `1..=6`, if any.
    pub fn heading(level: usize) -> Option<StyleTag> {
        match level {
            1 => Some(StyleTag::H1),
            2 => Some(StyleTag::H2),
            3 => Some(StyleTag::H3),
            4 => Some(StyleTag::H4),
            5 => Some(StyleTag::H5),
            6 => Some(StyleTag::H6),
            _ => None,
        }
    }

    /// Bit mask with only this tag's bit set.
    pub const fn bit(self) -> u64 {
        1u64 << (self as u8)
    }
}

/// A set of [`StyleTag`]s, stored as a bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleSet(u64);

impl StyleSet {
    /// The empty set.
    pub const EMPTY: StyleSet = StyleSet(0);

    /// Create a set containing a single tag.
    pub const fn single(tag: StyleTag) -> Self {
        StyleSet(tag.bit())
    }

    /// Check whether the set contains no tags.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Check whether the set contains `tag`.
    pub fn contains(&self, tag: StyleTag) -> bool {
        self.0 & tag.bit() != 0
    }

    /// Add a tag to the set. Adding a present tag is a no-op.
    pub fn insert(&mut self, tag: StyleTag) {
        self.0 |= tag.bit();
    }

    /// Union of two sets.
    pub fn union(self, other: StyleSet) -> StyleSet {
        StyleSet(self.0 | other.0)
    }

    /// Number of tags in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate over the tags in the set, in bit order.
    pub fn iter(&self) -> impl Iterator<Item = StyleTag> + '_ {
        StyleTag::ALL
            .iter()
            .copied()
            .filter(move |tag| self.contains(*tag))
    }

    /// The raw bit mask.
    pub fn bits(&self) -> u64 {
        self.0
    }
}

impl From<StyleTag> for StyleSet {
    fn from(tag: StyleTag) -> Self {
        StyleSet::single(tag)
    }
}

impl FromIterator<StyleTag> for StyleSet {
    fn from_iter<I: IntoIterator<Item = StyleTag>>(iter: I) -> Self {
        let mut set = StyleSet::EMPTY;
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

/// A text range tagged with the combined set of styles active over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledRange {
    /// The covered range.
    pub range: TextRange,
    /// The styles active over the whole range.
    pub styles: StyleSet,
}

impl StyledRange {
    /// Create a new styled range.
    pub fn new(range: TextRange, styles: StyleSet) -> Self {
        Self { range, styles }
    }
}

/// Style partition error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionError {
    /// An inserted range had `start > end`.
    InvalidRange {
        /// Inclusive start character offset.
        start: usize,
        /// Exclusive end character offset.
        end: usize,
    },
}

impl std::fmt::Display for PartitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartitionError::InvalidRange { start, end } => {
                write!(f, "Invalid range: start {} > end {}", start, end)
            }
        }
    }
}

impl std::error::Error for PartitionError {}

/// An ordered partition of non-overlapping styled ranges.
///
/// Ranges are inserted one at a time as a syntax-tree walk visits nodes.
/// After every insertion the partition is sorted ascending by `start`,
/// pairwise disjoint, covers exactly the union of all inserted ranges, and
/// no entry carries an empty style set.
///
/// Adjacent entries that happen to carry equal style sets are **not**
/// coalesced: renderers key runs by structural boundaries, and the boundary
/// between, say, two consecutive heading nodes stays visible even when the
/// combined styling is identical.
pub struct StylePartition {
    /// Document length in characters. Inserted ranges are clamped to it.
    text_len: usize,
    /// The partition, sorted by start position and pairwise disjoint.
    ranges: Vec<StyledRange>,
}

impl StylePartition {
    /// Create an empty partition for a document of `text_len` characters.
    pub fn new(text_len: usize) -> Self {
        Self {
            text_len,
            ranges: Vec::new(),
        }
    }

    /// Insert one styled range, splitting existing entries as needed.
    ///
    /// A range extending past the document length is clamped and processing
    /// continues; the tree walk may lag behind fast edits, so this is a
    /// recoverable condition, not an error. A range with `start > end` is a
    /// caller bug and is rejected.
    pub fn insert(&mut self, range: TextRange, tag: StyleTag) -> Result<(), PartitionError> {
        if range.start > range.end {
            return Err(PartitionError::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }

        let start = range.start.min(self.text_len);
        let end = range.end.min(self.text_len);
        if start == end {
            return Ok(());
        }

        // Locate the slice of existing entries that overlap [start, end).
        // Entries are sorted and disjoint, so the slice is contiguous.
        let lo = self.ranges.partition_point(|r| r.range.end <= start);
        let hi = self.ranges.partition_point(|r| r.range.start < end);

        if lo == hi {
            // No overlap; the new range slots in between existing entries.
            self.ranges.insert(
                lo,
                StyledRange::new(TextRange::new(start, end), StyleSet::single(tag)),
            );
            return Ok(());
        }

        // Distinct boundary offsets of the affected region: the new range's
        // bounds plus the bounds of every overlapping entry.
        let mut bounds = Vec::with_capacity((hi - lo) * 2 + 2);
        bounds.push(start);
        bounds.push(end);
        for r in &self.ranges[lo..hi] {
            bounds.push(r.range.start);
            bounds.push(r.range.end);
        }
        bounds.sort_unstable();
        bounds.dedup();

        // Recompute the affected slice as maximal sub-ranges between
        // consecutive boundaries, dropping uncovered and zero-length pieces.
        let mut rebuilt = Vec::with_capacity(bounds.len());
        for pair in bounds.windows(2) {
            let (piece_start, piece_end) = (pair[0], pair[1]);
            if piece_start >= piece_end {
                continue;
            }

            let mut styles = StyleSet::EMPTY;
            for r in &self.ranges[lo..hi] {
                if r.range.start <= piece_start && piece_end <= r.range.end {
                    styles = styles.union(r.styles);
                }
            }
            if start <= piece_start && piece_end <= end {
                styles.insert(tag);
            }

            if !styles.is_empty() {
                rebuilt.push(StyledRange::new(
                    TextRange::new(piece_start, piece_end),
                    styles,
                ));
            }
        }

        self.ranges.splice(lo..hi, rebuilt);
        Ok(())
    }

    /// The finalized partition, sorted by start position.
    pub fn ranges(&self) -> &[StyledRange] {
        &self.ranges
    }

    /// Consume the partition and return its entries.
    pub fn into_ranges(self) -> Vec<StyledRange> {
        self.ranges
    }

    /// The combined style set at a specific position.
    ///
    /// Positions outside every inserted range report the empty set.
    pub fn styles_at(&self, pos: usize) -> StyleSet {
        let idx = self.ranges.partition_point(|r| r.range.end <= pos);
        match self.ranges.get(idx) {
            Some(r) if r.range.contains(pos) => r.styles,
            _ => StyleSet::EMPTY,
        }
    }

    /// Number of entries in the partition.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Check if the partition is empty.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Document length this partition clamps against.
    pub fn text_len(&self) -> usize {
        self.text_len
    }
}
