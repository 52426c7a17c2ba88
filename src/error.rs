// Chunk: docs/chunks/splice_core - Segmented byte buffer with zero-copy structural edits

//! Error taxonomy for the fallible splice operations.

use thiserror::Error;

/// Errors reported by the fallible `Splice` operations.
///
/// A failed operation never leaves the splice partially modified:
/// arguments are validated before any structural change, and `delete`
/// builds its replacement table before swapping it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpliceError {
    /// An index or range fell outside `[0, len]`. Never silently clamped.
    #[error("index {index} out of range for splice of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// An insertion resolved to a position that is neither a valid
    /// split point nor a between-segments boundary.
    ///
    /// Unreachable given the append/prepend fast paths in `insert`, but
    /// checked so a resolver bug cannot corrupt the segment table.
    #[error("no legal insertion at index {index}")]
    IllegalInsertion { index: usize },

    /// The position resolver found no position for an index that range
    /// validation had already accepted. Signals a broken length
    /// invariant; reported rather than recovered from.
    #[error("internal inconsistency: no position for in-range index {index}")]
    InternalInconsistency { index: usize },
}
