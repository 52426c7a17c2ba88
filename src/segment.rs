// Chunk: docs/chunks/splice_core - Segmented byte buffer with zero-copy structural edits

//! Segment: one contiguous byte range in a splice's table.
//!
//! Backed by `bytes::Bytes`, so a segment is either a shared zero-copy
//! view of a caller-supplied buffer (`head_view`/`tail_view` slice the
//! same backing allocation) or an exclusively owned allocation
//! (`deep_copy`). `Bytes` is immutable, which enforces the structural
//! rule that edits replace table entries and never write through a
//! segment's contents.

use bytes::Bytes;

/// One contiguous byte range owned or viewed by a splice.
///
/// Never empty: mutators drop zero-length input before a segment is
/// ever constructed.
#[derive(Debug, Clone)]
pub(crate) struct Segment {
    data: Bytes,
}

impl Segment {
    pub fn new(data: Bytes) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Returns the byte at `offset`, or None past the end.
    pub fn byte_at(&self, offset: usize) -> Option<u8> {
        self.data.get(offset).copied()
    }

    /// Zero-copy view of bytes `[0, at)`. No allocation; the view shares
    /// the backing buffer.
    pub fn head_view(&self, at: usize) -> Segment {
        Segment::new(self.data.slice(..at))
    }

    /// Zero-copy view of bytes `[at, len)`.
    pub fn tail_view(&self, at: usize) -> Segment {
        Segment::new(self.data.slice(at..))
    }

    /// Freshly allocated, exclusively owned copy of the bytes.
    ///
    /// This is the building block of extraction: a deep-copied segment
    /// shares no storage with the original or with any view of it.
    pub fn deep_copy(&self) -> Segment {
        Segment::new(Bytes::copy_from_slice(&self.data))
    }
}
