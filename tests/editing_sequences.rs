// Chunk: docs/chunks/splice_core - Segmented byte buffer with zero-copy structural edits

//! Integration tests for realistic editing sequences.
//!
//! These tests drive the public API through multi-step edit patterns and
//! verify that the segment table, the cached length, and the compacted
//! content stay in sync throughout.

use splice::{Splice, SpliceError};

#[test]
fn test_assemble_message_from_frames() {
    // Frames arrive out of order; prepend the header last
    let mut message = Splice::new();
    message.append(&b"body-1 "[..]);
    message.append(&b"body-2"[..]);
    message.prepend(&b"HDR "[..]);

    assert_eq!(message.compact(), b"HDR body-1 body-2");
    assert_eq!(message.len(), 17);
    assert_eq!(message.segment_count(), 3);
}

#[test]
fn test_patch_in_the_middle_then_revert() {
    let mut buf = Splice::from_bytes(&b"fn main() {}"[..]);

    // Splice a body into the braces
    buf.insert(&b" println!(); "[..], 11).unwrap();
    assert_eq!(buf.compact(), b"fn main() { println!(); }");

    // Delete it again; content round-trips
    buf.delete(11, 13).unwrap();
    assert_eq!(buf.compact(), b"fn main() {}");
    assert_eq!(buf.len(), 12);
}

#[test]
fn test_head_tail_middle_of_foobarbaz() {
    let buf = Splice::from_bytes(&b"foobarbaz"[..]);

    assert_eq!(buf.head(6).unwrap().compact(), b"foobar");
    // tail takes the last n bytes, not the bytes after index n
    assert_eq!(buf.tail(6).unwrap().compact(), b"barbaz");
    // middle takes `length` bytes from `start`
    assert_eq!(buf.middle(2, 6).unwrap().compact(), b"obarba");

    // The source is never disturbed
    assert_eq!(buf.compact(), b"foobarbaz");
    assert_eq!(buf.segment_count(), 1);
}

#[test]
fn test_extractions_of_heavily_segmented_buffer() {
    let mut buf = Splice::new();
    for part in [&b"fo"[..], &b"ob"[..], &b"ar"[..], &b"ba"[..], &b"z"[..]] {
        buf.append(part);
    }
    assert_eq!(buf.segment_count(), 5);

    assert_eq!(buf.head(6).unwrap().compact(), b"foobar");
    assert_eq!(buf.tail(6).unwrap().compact(), b"barbaz");
    assert_eq!(buf.middle(2, 6).unwrap().compact(), b"obarba");
}

#[test]
fn test_extraction_isolation_both_directions() {
    let mut source = Splice::from_bytes(&b"foobarbaz"[..]);
    let head = source.head(3).unwrap();
    let tail = source.tail(3).unwrap();
    let mut middle = source.middle(3, 3).unwrap();

    // Mutate the source; extractions must not change
    source.delete(0, 9).unwrap();
    source.append(&b"overwritten"[..]);
    assert_eq!(head.compact(), b"foo");
    assert_eq!(tail.compact(), b"baz");
    assert_eq!(middle.compact(), b"bar");

    // Mutate an extraction; the (new) source must not change
    middle.delete(0, 3).unwrap();
    middle.append(&b"qux"[..]);
    assert_eq!(source.compact(), b"overwritten");
}

#[test]
fn test_delete_spanning_many_segments() {
    let mut buf = Splice::new();
    for part in [&b"aa"[..], &b"bb"[..], &b"cc"[..], &b"dd"[..]] {
        buf.append(part);
    }

    // Remove from inside the first segment to inside the last
    buf.delete(1, 6).unwrap();
    assert_eq!(buf.compact(), b"ad");
    assert_eq!(buf.len(), 2);
    assert_eq!(buf.segment_count(), 2);
}

#[test]
fn test_interleaved_inserts_and_deletes() {
    let mut buf = Splice::from_bytes(&b"acegi"[..]);
    buf.insert(&b"b"[..], 1).unwrap();
    buf.insert(&b"d"[..], 3).unwrap();
    buf.insert(&b"f"[..], 5).unwrap();
    buf.insert(&b"h"[..], 7).unwrap();
    assert_eq!(buf.compact(), b"abcdefghi");

    buf.delete(0, 3).unwrap();
    buf.delete(3, 3).unwrap();
    assert_eq!(buf.compact(), b"def");
    assert_eq!(buf.len(), 3);
}

#[test]
fn test_failed_operations_leave_state_intact() {
    let mut buf = Splice::from_bytes(&b"stable"[..]);

    assert_eq!(
        buf.insert(&b"x"[..], 7),
        Err(SpliceError::OutOfRange { index: 7, len: 6 })
    );
    assert_eq!(
        buf.delete(4, 5),
        Err(SpliceError::OutOfRange { index: 4, len: 6 })
    );
    assert!(buf.head(7).is_err());
    assert!(buf.tail(7).is_err());
    assert!(buf.middle(5, 2).is_err());

    assert_eq!(buf.compact(), b"stable");
    assert_eq!(buf.len(), 6);
    assert_eq!(buf.segment_count(), 1);
}

#[test]
fn test_iteration_matches_compacted_content() {
    let mut buf = Splice::new();
    buf.append(&b"foo"[..]);
    buf.append(&b"bar"[..]);
    buf.append(&b"baz"[..]);

    let flat = buf.compact();
    let mut count = 0;
    for (index, byte) in &buf {
        assert_eq!(byte, flat[index]);
        assert_eq!(index, count);
        count += 1;
    }
    assert_eq!(count, buf.len());
}

#[test]
fn test_search_across_segment_boundaries() {
    let mut buf = Splice::new();
    buf.append(&b"ab"[..]);
    buf.append(&b"cd"[..]);

    assert_eq!(buf.find_byte(b'c'), Some(2));
    assert_eq!(buf.find_byte(b'd'), Some(3));
    assert_eq!(buf.find_byte(b'z'), None);
}

#[test]
fn test_equality_is_content_based() {
    let mut fragmented = Splice::new();
    fragmented.append(&b"fo"[..]);
    fragmented.append(&b"ob"[..]);
    fragmented.append(&b"ar"[..]);

    let flat = Splice::from_bytes(&b"foobar"[..]);
    assert_eq!(fragmented, flat);
    assert_eq!(fragmented, &b"foobar"[..]);

    let mut different = flat.clone();
    different.delete(5, 1).unwrap();
    different.append(&b"z"[..]);
    assert_ne!(fragmented, different);
}
