// Chunk: docs/chunks/region_deletion - Region overlap algebra for range deletion

//! Region overlap algebra for range deletion.
//!
//! A deletion span is expressed as a region between two positions. Each
//! existing segment is classified against that span exactly once: kept
//! untouched, dropped entirely, or trimmed at one or both ends. The
//! classification is what lets `delete` touch only the segments the
//! range actually intersects.

use crate::position::Position;

/// A `[start, end]` span between two positions.
///
/// Valid (spans at least one byte) iff `start < end` under the
/// lexicographic position order. Used only as an intermediate value
/// while rebuilding the segment table during deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Region {
    pub start: Position,
    pub end: Position,
}

impl Region {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// The region covered by segment `segment` itself:
    /// `[(segment, 0), (segment + 1, 0)]` in normalized form.
    pub fn of_segment(segment: usize) -> Self {
        Self::new(Position::new(segment, 0), Position::new(segment + 1, 0))
    }

    /// Returns true if the region spans at least one byte.
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    /// Returns true if `position` lies within the region (both endpoints
    /// inclusive).
    #[cfg(test)]
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }

    /// Intersection of two regions, or None when they share no bytes.
    pub fn overlap(a: Region, b: Region) -> Option<Region> {
        let intersection = Region::new(a.start.max(b.start), a.end.min(b.end));
        intersection.is_valid().then_some(intersection)
    }
}

/// How a deletion region interacts with one segment.
///
/// Cut points are byte offsets within the segment. The resolver only
/// produces normalized positions, so a cut can never equal 0 (for head
/// retention) or the segment length (for tail retention) - trimmed
/// survivors are always non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SegmentAction {
    /// No overlap; the segment is re-inserted as-is.
    Keep,
    /// Overlap reaches the segment end; retain bytes `[0, cut)`.
    KeepHead { cut: usize },
    /// Overlap starts at the segment start; retain bytes `[cut, len)`.
    KeepTail { cut: usize },
    /// Overlap is strictly interior; retain `[0, cut_lo)` and
    /// `[cut_hi, len)` as two segments.
    DropMiddle { cut_lo: usize, cut_hi: usize },
    /// Overlap covers the whole segment.
    Drop,
}

/// Classifies segment `segment` against the deletion region.
///
/// Boundary-equal overlaps resolve through the endpoint equality checks,
/// preferring the most specific case: `Drop` over `KeepHead`/`KeepTail`,
/// those over `DropMiddle`.
pub(crate) fn classify(segment: usize, deletion: Region) -> SegmentAction {
    let own = Region::of_segment(segment);
    let overlap = match Region::overlap(own, deletion) {
        Some(region) => region,
        None => return SegmentAction::Keep,
    };

    match (overlap.start == own.start, overlap.end == own.end) {
        (true, true) => SegmentAction::Drop,
        (false, true) => SegmentAction::KeepHead {
            cut: overlap.start.offset,
        },
        (true, false) => SegmentAction::KeepTail {
            cut: overlap.end.offset,
        },
        (false, false) => SegmentAction::DropMiddle {
            cut_lo: overlap.start.offset,
            cut_hi: overlap.end.offset,
        },
    }
}
