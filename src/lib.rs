// Chunk: docs/chunks/splice_core - Segmented byte buffer with zero-copy structural edits
// Chunk: docs/chunks/region_deletion - Region overlap algebra for range deletion
// Chunk: docs/chunks/byte_iteration - Indexed byte iteration and search

//! splice: a segmented, mutable byte-sequence buffer.
//!
//! This crate provides [`Splice`], a byte buffer stored as an ordered
//! table of segments. Structural edits (append, prepend, insert, delete)
//! rebuild the segment table instead of copying payload bytes, so
//! editing a large buffer costs O(segments), not O(bytes). It is a
//! low-level primitive for code that assembles or carves up byte
//! streams: framing, incremental message assembly, and similar.
//!
//! # Overview
//!
//! The main type is [`Splice`], which provides:
//! - `append`/`prepend`/`insert` that take ownership of caller-supplied
//!   byte segments without copying them
//! - Range deletion that trims only the segments the range intersects
//! - `head`/`tail`/`middle` extraction into independent, owned splices
//! - Positional reads, indexed iteration, equality, and byte search
//!
//! # Example
//!
//! ```
//! use splice::Splice;
//!
//! let mut buf = Splice::from_bytes(&b"abcghi"[..]);
//! buf.insert(&b"def"[..], 3).unwrap();
//! assert_eq!(buf.compact(), b"abcdefghi");
//! assert_eq!(buf.segment_count(), 3); // split produced two views + the insert
//!
//! buf.delete(3, 3).unwrap();
//! assert_eq!(buf.compact(), b"abcghi");
//!
//! // Extraction deep-copies: `mid` is independent of `buf`
//! let mid = buf.middle(2, 3).unwrap();
//! assert_eq!(mid.compact(), b"cgh");
//! ```
//!
//! # Aliasing and extraction
//!
//! Segments handed to a splice may share backing storage with the
//! caller's own `Bytes` handles, and splitting a segment produces two
//! views of one allocation. That sharing is safe because `bytes::Bytes`
//! is immutable. The extraction operations ([`Splice::head`],
//! [`Splice::tail`], [`Splice::middle`]) are the exception to sharing:
//! they deep-copy every segment first, so their results can be handed to
//! another owner with no storage in common with the source.
//!
//! # Errors
//!
//! Fallible operations return [`SpliceError`]; a failed call leaves the
//! splice exactly as it was. The `Index` operator is the panicking
//! convenience for positional reads that cannot fail.

mod error;
mod iter;
mod position;
mod region;
mod segment;
mod splice;

pub use error::SpliceError;
pub use iter::ByteIter;
pub use splice::Splice;
