//! Bounded buffer tests with widening sources and sinks
//!
//! Bulk input may be typed more narrowly than the buffer, bulk output more widely.

use std::collections::{BTreeSet, VecDeque};
use std::error::Error;
use std::io;
use std::iter;

use keel_core::{BoundedBuffer, BufferError, Capacity};

fn positive<N: Into<f64> + Copy>(n: &N) -> bool {
    (*n).into() > 0.0
}

#[test]
fn seven_into_five_keeps_five() {
    let mut buffer = BoundedBuffer::<i32>::new(5).unwrap();
    let source: Vec<i32> = (1..=7).collect();
    assert_eq!(buffer.insert_all(source.iter().copied()), 5);
    assert_eq!(buffer.len(), 5);
    assert!(buffer.is_full());
    // The source is only read.
    assert_eq!(source.len(), 7);
}

#[test]
fn drain_evens_leaves_odds_in_order() {
    let mut buffer = BoundedBuffer::<i32>::new(10).unwrap();
    buffer.insert_all([1, 2, 3, 4]);

    let mut moved: Vec<i32> = Vec::new();
    assert_eq!(buffer.drain_to(&mut moved, |x| x % 2 == 0), 2);
    assert_eq!(moved, vec![2, 4]);
    assert_eq!(buffer.remove(), Some(1));
    assert_eq!(buffer.remove(), Some(3));
    assert_eq!(buffer.remove(), None);
}

#[test]
fn narrow_sources_feed_a_wide_buffer() {
    let mut numbers = BoundedBuffer::<f64>::new(20).unwrap();
    assert_eq!(numbers.insert_all([1_i32, 2, 3]), 3);
    assert_eq!(numbers.insert_all([1.5_f32, 2.5]), 2);
    assert_eq!(numbers.insert_all([100_u16, 200]), 2);
    assert_eq!(
        numbers.iter().copied().collect::<Vec<_>>(),
        vec![1.0, 2.0, 3.0, 1.5, 2.5, 100.0, 200.0]
    );
}

#[test]
fn full_chain_narrow_to_wide_to_wider() {
    let mut buffer = BoundedBuffer::<i32>::new(10).unwrap();
    assert_eq!(buffer.insert_all([1_i16, 2, 3]), 3);

    let mut wide: VecDeque<i64> = VecDeque::new();
    assert_eq!(buffer.drain_to(&mut wide, |&x| x > 0), 3);
    assert_eq!(wide, VecDeque::from([1, 2, 3]));
    assert!(buffer.is_empty());
}

#[test]
fn generic_predicate_over_wider_family() {
    let mut buffer = BoundedBuffer::<i32>::new(10).unwrap();
    buffer.insert_all([-2, 1, 0, 3]);

    let mut kept: BTreeSet<i64> = BTreeSet::new();
    assert_eq!(buffer.drain_to(&mut kept, positive), 2);
    assert_eq!(kept.into_iter().collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![-2, 0]);
}

#[test]
fn errors_drain_into_boxed_trait_objects() {
    let mut failures = BoundedBuffer::<io::Error>::new(4).unwrap();
    failures.insert(io::Error::new(io::ErrorKind::NotFound, "missing"));
    failures.insert(io::Error::other("boom"));

    let mut boxed: Vec<Box<dyn Error>> = Vec::new();
    let moved = failures.drain_to(&mut boxed, |err| {
        err.kind() == io::ErrorKind::NotFound
    });
    assert_eq!(moved, 1);
    assert_eq!(boxed[0].to_string(), "missing");
    assert_eq!(failures.len(), 1);
}

#[test]
fn capacity_validation() {
    assert_eq!(
        BoundedBuffer::<u8>::new(0).unwrap_err(),
        BufferError::ZeroCapacity
    );
    let capacity = Capacity::new(2).unwrap();
    let mut buffer = BoundedBuffer::with_capacity(capacity);
    assert!(buffer.insert('a'));
    assert!(buffer.insert('b'));
    assert!(!buffer.insert('c'));
    assert_eq!(buffer.capacity(), 2);
    assert_eq!(buffer.remaining(), 0);
}

#[test]
fn mixed_batches_keep_global_fifo_order() {
    let mut labels = BoundedBuffer::<String>::new(6).unwrap();
    labels.insert_all(["a", "b"]);
    labels.insert_all(vec!['c'.to_string()]);
    labels.insert_all(["d", "e", "f", "g"]);

    let drained: Vec<String> = iter::from_fn(|| labels.remove()).collect();
    assert_eq!(drained, ["a", "b", "c", "d", "e", "f"]);
}
