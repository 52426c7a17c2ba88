// Chunk: docs/chunks/splice_core - Segmented byte buffer with zero-copy structural edits
// Chunk: docs/chunks/region_deletion - Region overlap algebra for range deletion

//! Splice is the main public API for segmented byte-sequence editing.
//!
//! It combines the segment table (ground truth for the logical sequence)
//! with a position resolver (global index to (segment, offset)) and the
//! region algebra (how a deletion span cuts each segment). Structural
//! edits rebuild the table; segment contents are never written through,
//! so append, prepend, insert and delete copy no payload bytes.

use bytes::Bytes;

use crate::error::SpliceError;
use crate::iter::ByteIter;
use crate::position::Position;
use crate::region::{classify, Region, SegmentAction};
use crate::segment::Segment;

/// A segmented, mutable byte sequence.
///
/// The splice maintains:
/// - An ordered table of byte segments; segment `i`'s bytes immediately
///   precede segment `i + 1`'s in the logical sequence
/// - A cached total length equal to the sum of segment lengths
///
/// Mutators edit the table, not segment contents: splitting a segment
/// for an insertion produces two zero-copy views into the same backing
/// bytes, and deletion trims segments by re-slicing them. Extraction
/// (`head`/`tail`/`middle`) deep-copies first, so extracted splices
/// share no byte storage with their source.
///
/// Not synchronized: concurrent access is the caller's problem, which in
/// safe Rust the `&mut self` receivers already enforce.
#[derive(Debug, Clone, Default)]
pub struct Splice {
    segments: Vec<Segment>,
    /// Cached total length; always the sum of segment lengths.
    len: usize,
}

/// How an in-range insertion position maps onto the segment table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InsertKind {
    /// Boundary between two existing segments; splice the data in.
    Between,
    /// Strictly inside a segment; split it around the data.
    Split,
    /// Neither. Unreachable given the fast paths in `insert`, reported
    /// rather than allowed to corrupt the table.
    Illegal,
}

impl Splice {
    /// Creates an empty splice.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            len: 0,
        }
    }

    /// Creates a splice holding `data` as its single initial segment.
    ///
    /// Empty input yields an empty splice; a zero-length segment is
    /// never stored.
    pub fn from_bytes(data: impl Into<Bytes>) -> Self {
        let mut splice = Self::new();
        splice.append(data);
        splice
    }

    // ==================== Accessors ====================

    /// Returns the total number of logical bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the splice holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of entries in the segment table.
    ///
    /// Structural, not logical: two splices with equal contents may have
    /// different segment counts depending on their edit history.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns the byte at logical index `index`.
    pub fn get(&self, index: usize) -> Result<u8, SpliceError> {
        if index >= self.len {
            return Err(SpliceError::OutOfRange {
                index,
                len: self.len,
            });
        }
        let position = self
            .resolve(index)
            .ok_or(SpliceError::InternalInconsistency { index })?;
        self.segments
            .get(position.segment)
            .and_then(|segment| segment.byte_at(position.offset))
            .ok_or(SpliceError::InternalInconsistency { index })
    }

    /// Returns a lazy forward iterator over `(index, byte)` pairs.
    pub fn iter(&self) -> ByteIter<'_> {
        ByteIter::new(self)
    }

    /// Materializes the whole logical sequence into one contiguous
    /// freshly allocated buffer. O(len).
    pub fn compact(&self) -> Vec<u8> {
        let mut flat = Vec::with_capacity(self.len);
        for segment in &self.segments {
            flat.extend_from_slice(segment.as_slice());
        }
        flat
    }

    /// Returns the first logical index whose byte equals `target`, in
    /// iteration order.
    pub fn find_byte(&self, target: u8) -> Option<usize> {
        self.iter()
            .find(|&(_, byte)| byte == target)
            .map(|(index, _)| index)
    }

    // ==================== Position resolution ====================

    /// Converts a global byte index into a (segment, offset) position.
    ///
    /// Walks the table accumulating a running offset. An index landing
    /// exactly on a segment boundary normalizes to `(next_segment, 0)` -
    /// the one-past-end sentinel when the boundary is the end of the
    /// buffer. Returns None only for `index > len`; callers validate
    /// ranges first and treat None for an in-range index as an internal
    /// inconsistency.
    fn resolve(&self, index: usize) -> Option<Position> {
        let mut cumulative = 0;
        for (segment, s) in self.segments.iter().enumerate() {
            let segment_end = cumulative + s.len();
            if index < segment_end {
                return Some(Position::new(segment, index - cumulative));
            }
            if index == segment_end {
                return Some(Position::new(segment + 1, 0));
            }
            cumulative = segment_end;
        }
        // Empty table: index 0 is the sentinel itself.
        (index == 0).then_some(Position::new(0, 0))
    }

    /// Classifies an insertion position against the table.
    fn insert_kind(&self, position: Position) -> InsertKind {
        if position.segment < self.segments.len() {
            if position.segment > 0 && position.offset == 0 {
                return InsertKind::Between;
            }
            if position.offset > 0 {
                return InsertKind::Split;
            }
        }
        InsertKind::Illegal
    }

    // ==================== Mutators ====================

    /// Appends `data` as a new final segment.
    ///
    /// O(1) relative to existing content; no payload bytes are copied.
    /// Empty input is a no-op.
    pub fn append(&mut self, data: impl Into<Bytes>) {
        let data = data.into();
        if data.is_empty() {
            return;
        }
        self.len += data.len();
        self.segments.push(Segment::new(data));
    }

    /// Prepends `data` as the new first segment. Empty input is a no-op.
    pub fn prepend(&mut self, data: impl Into<Bytes>) {
        let data = data.into();
        if data.is_empty() {
            return;
        }
        self.len += data.len();
        self.segments.insert(0, Segment::new(data));
    }

    /// Inserts `data` so its first byte lands at logical index `index`.
    ///
    /// `index == len` appends and `index == 0` prepends. Otherwise the
    /// index resolves either to a boundary between two segments (the
    /// data is spliced into the table) or strictly inside one segment
    /// (that segment is replaced by head view, data, tail view - the
    /// views are zero-copy slices of the original's backing bytes).
    pub fn insert(&mut self, data: impl Into<Bytes>, index: usize) -> Result<(), SpliceError> {
        let data = data.into();
        if index == self.len {
            self.append(data);
            return Ok(());
        }
        if index == 0 {
            self.prepend(data);
            return Ok(());
        }
        if index > self.len {
            return Err(SpliceError::OutOfRange {
                index,
                len: self.len,
            });
        }
        if data.is_empty() {
            return Ok(());
        }

        let position = self
            .resolve(index)
            .ok_or(SpliceError::InternalInconsistency { index })?;

        match self.insert_kind(position) {
            InsertKind::Between => {
                self.len += data.len();
                self.segments.insert(position.segment, Segment::new(data));
            }
            InsertKind::Split => {
                let current = &self.segments[position.segment];
                let head = current.head_view(position.offset);
                let tail = current.tail_view(position.offset);
                self.len += data.len();
                self.segments.splice(
                    position.segment..=position.segment,
                    [head, Segment::new(data), tail],
                );
            }
            InsertKind::Illegal => {
                return Err(SpliceError::IllegalInsertion { index });
            }
        }
        Ok(())
    }

    /// Deletes `length` bytes starting at logical index `index`.
    ///
    /// Resolves the span to a deletion region, classifies every segment
    /// against it, and assembles the survivors (zero, one, or two
    /// sub-views per original segment) into a fresh table preserving the
    /// original order. Only the segments the range intersects are
    /// touched. The table is swapped in whole, so a failed call leaves
    /// the splice unchanged.
    pub fn delete(&mut self, index: usize, length: usize) -> Result<(), SpliceError> {
        let end = index
            .checked_add(length)
            .filter(|&end| end <= self.len)
            .ok_or(SpliceError::OutOfRange {
                index,
                len: self.len,
            })?;
        if length == 0 {
            return Ok(());
        }

        let start_position = self
            .resolve(index)
            .ok_or(SpliceError::InternalInconsistency { index })?;
        // May be the one-past-end sentinel.
        let end_position = self
            .resolve(end)
            .ok_or(SpliceError::InternalInconsistency { index: end })?;
        let deletion = Region::new(start_position, end_position);

        // One extra slot: a DropMiddle turns one segment into two.
        let mut survivors = Vec::with_capacity(self.segments.len() + 1);
        let mut removed = 0;
        for (i, segment) in self.segments.iter().enumerate() {
            match classify(i, deletion) {
                SegmentAction::Keep => survivors.push(segment.clone()),
                SegmentAction::KeepHead { cut } => {
                    removed += segment.len() - cut;
                    survivors.push(segment.head_view(cut));
                }
                SegmentAction::KeepTail { cut } => {
                    removed += cut;
                    survivors.push(segment.tail_view(cut));
                }
                SegmentAction::DropMiddle { cut_lo, cut_hi } => {
                    removed += cut_hi - cut_lo;
                    survivors.push(segment.head_view(cut_lo));
                    survivors.push(segment.tail_view(cut_hi));
                }
                SegmentAction::Drop => removed += segment.len(),
            }
        }
        debug_assert_eq!(removed, length);

        self.segments = survivors;
        self.len -= removed;
        Ok(())
    }

    // ==================== Extraction ====================

    /// Returns a new splice holding the logical prefix `[0, index)`.
    ///
    /// The result shares no byte storage with `self`.
    pub fn head(&self, index: usize) -> Result<Splice, SpliceError> {
        if index > self.len {
            return Err(SpliceError::OutOfRange {
                index,
                len: self.len,
            });
        }
        let mut result = self.deep_clone();
        result.delete(index, self.len - index)?;
        Ok(result)
    }

    /// Returns a new splice holding the *last `length` bytes*.
    ///
    /// The argument is a length from the end, not a start offset - the
    /// asymmetry with `head` is deliberate and load-bearing for callers.
    /// The result shares no byte storage with `self`.
    pub fn tail(&self, length: usize) -> Result<Splice, SpliceError> {
        if length > self.len {
            return Err(SpliceError::OutOfRange {
                index: length,
                len: self.len,
            });
        }
        let mut result = self.deep_clone();
        result.delete(0, self.len - length)?;
        Ok(result)
    }

    /// Returns a new splice holding `length` bytes beginning at logical
    /// offset `start`.
    ///
    /// Deletes the leading prefix first, then everything after the first
    /// `length` bytes of what remains, so each index is valid against
    /// the shrinking intermediate. The result shares no byte storage
    /// with `self`.
    pub fn middle(&self, start: usize, length: usize) -> Result<Splice, SpliceError> {
        start
            .checked_add(length)
            .filter(|&end| end <= self.len)
            .ok_or(SpliceError::OutOfRange {
                index: start,
                len: self.len,
            })?;
        let mut result = self.deep_clone();
        result.delete(0, start)?;
        result.delete(length, result.len - length)?;
        Ok(result)
    }

    /// Deep copy: every segment's bytes land in a fresh exclusively
    /// owned allocation. This is what makes extraction results safe to
    /// hand to another owner.
    fn deep_clone(&self) -> Splice {
        Splice {
            segments: self.segments.iter().map(Segment::deep_copy).collect(),
            len: self.len,
        }
    }
}

// ==================== Trait impls ====================

/// Bytewise equality: lengths match and every corresponding byte
/// matches, via iteration. O(len).
impl PartialEq for Splice {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self
                .iter()
                .map(|(_, byte)| byte)
                .eq(other.iter().map(|(_, byte)| byte))
    }
}

impl Eq for Splice {}

/// Convenience comparison against flat byte buffers.
impl PartialEq<[u8]> for Splice {
    fn eq(&self, other: &[u8]) -> bool {
        self.len == other.len()
            && self
                .iter()
                .map(|(_, byte)| byte)
                .eq(other.iter().copied())
    }
}

impl PartialEq<&[u8]> for Splice {
    fn eq(&self, other: &&[u8]) -> bool {
        *self == **other
    }
}

/// Panicking positional read, for callers that have already proven the
/// index in range. Use [`Splice::get`] for the fallible form.
impl std::ops::Index<usize> for Splice {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        let position = self
            .resolve(index)
            .filter(|position| position.segment < self.segments.len())
            .unwrap_or_else(|| {
                panic!("index {} out of range for splice of length {}", index, self.len)
            });
        &self.segments[position.segment].as_slice()[position.offset]
    }
}

impl From<Bytes> for Splice {
    fn from(data: Bytes) -> Self {
        Self::from_bytes(data)
    }
}

impl From<Vec<u8>> for Splice {
    fn from(data: Vec<u8>) -> Self {
        Self::from_bytes(data)
    }
}

impl From<&[u8]> for Splice {
    fn from(data: &[u8]) -> Self {
        Self::from_bytes(Bytes::copy_from_slice(data))
    }
}

impl From<&str> for Splice {
    fn from(data: &str) -> Self {
        Self::from_bytes(Bytes::copy_from_slice(data.as_bytes()))
    }
}
