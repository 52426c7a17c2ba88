// Chunk: docs/chunks/byte_iteration - Indexed byte iteration and search

//! Lazy forward iteration over a splice's logical bytes.

use crate::splice::Splice;

/// A lazy, finite, forward iterator yielding `(index, byte)` pairs over
/// `[0, len)`.
///
/// Driven by repeated positional reads against an internal cursor; the
/// immutable borrow of the splice guarantees iteration never observes a
/// mutation. A fresh iterator always reproduces the same sequence.
#[derive(Debug)]
pub struct ByteIter<'a> {
    splice: &'a Splice,
    next_index: usize,
}

impl<'a> ByteIter<'a> {
    pub(crate) fn new(splice: &'a Splice) -> Self {
        Self {
            splice,
            next_index: 0,
        }
    }
}

impl Iterator for ByteIter<'_> {
    type Item = (usize, u8);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next_index;
        let byte = self.splice.get(index).ok()?;
        self.next_index += 1;
        Some((index, byte))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.splice.len().saturating_sub(self.next_index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ByteIter<'_> {}

// The cursor never moves past len, so an exhausted iterator stays
// exhausted.
impl std::iter::FusedIterator for ByteIter<'_> {}

impl<'a> IntoIterator for &'a Splice {
    type Item = (usize, u8);
    type IntoIter = ByteIter<'a>;

    fn into_iter(self) -> ByteIter<'a> {
        self.iter()
    }
}
