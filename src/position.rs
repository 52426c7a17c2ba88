// Chunk: docs/chunks/splice_core - Segmented byte buffer with zero-copy structural edits

//! Position cursor into the logical byte sequence.
//!
//! A position names a location as (segment index, offset within that
//! segment). Positions at a segment boundary are normalized to
//! `(next_segment, 0)`, never `(segment, segment_len)`. The logical end
//! of the buffer is the sentinel `(segment_count, 0)` - one past the last
//! segment, with no corresponding storage.

/// A (segment, offset) cursor into a splice's logical byte sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Position {
    /// Index into the segment table. Equal to the segment count for the
    /// one-past-end sentinel.
    pub segment: usize,
    /// Byte offset within that segment. Always 0 for the sentinel.
    pub offset: usize,
}

impl Position {
    pub fn new(segment: usize, offset: usize) -> Self {
        Self { segment, offset }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Compare by segment first, then by offset
        match self.segment.cmp(&other.segment) {
            std::cmp::Ordering::Equal => self.offset.cmp(&other.offset),
            ord => ord,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_by_segment_then_offset() {
        assert!(Position::new(0, 5) < Position::new(1, 0));
        assert!(Position::new(1, 0) < Position::new(1, 1));
        assert!(Position::new(2, 0) > Position::new(1, 9));
        assert_eq!(Position::new(1, 3), Position::new(1, 3));
    }

    #[test]
    fn test_min_max() {
        let a = Position::new(0, 2);
        let b = Position::new(1, 0);
        assert_eq!(a.min(b), a);
        assert_eq!(a.max(b), b);

        // Equal positions: min and max both yield that position
        let c = Position::new(1, 0);
        assert_eq!(b.min(c), b);
        assert_eq!(b.max(c), b);
    }
}
