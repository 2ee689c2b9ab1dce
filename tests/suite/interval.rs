//! Interval behaviour across value types

use std::collections::HashMap;

use keel_types::{Endpoint, Interval, IntervalError, cover, max};

fn iv(low: i32, high: i32) -> Interval<i32> {
    Interval::new(low, high).unwrap()
}

#[test]
fn endpoints_are_inclusive() {
    let range = iv(1, 10);
    assert!(range.contains(&1));
    assert!(range.contains(&10));
    assert!(!range.contains(&0));
    assert!(!range.contains(&11));
}

#[test]
fn touching_ranges_overlap_and_intersect_at_a_point() {
    let a = iv(1, 10);
    let b = iv(10, 20);
    assert!(a.overlaps(&b));
    assert_eq!(a.intersect(&b), Ok(Interval::point(10)));
}

#[test]
fn intersect_and_span_examples() {
    assert_eq!(iv(1, 10).intersect(&iv(5, 15)), Ok(iv(5, 10)));
    assert_eq!(
        iv(1, 5).intersect(&iv(10, 15)),
        Err(IntervalError::Disjoint)
    );
    assert_eq!(iv(1, 5).span(&iv(10, 15)), iv(1, 15));
}

#[test]
fn works_over_strings() {
    let range = Interval::new("apple".to_string(), "mango".to_string()).unwrap();
    assert!(range.contains(&"banana".to_string()));
    assert!(!range.contains(&"zucchini".to_string()));
    assert_eq!(range.clamp("aardvark".to_string()), "apple");

    let words = ["pear", "fig", "quince", "date"];
    assert_eq!(max(words), Ok("quince"));
    assert_eq!(cover(words).map(Interval::into_bounds), Ok(("date", "quince")));
}

#[test]
fn works_over_tuples() {
    // (hour, minute) pairs order lexicographically.
    let shift = Interval::new((9, 0), (17, 30)).unwrap();
    assert!(shift.contains(&(12, 45)));
    assert!(!shift.contains(&(17, 31)));
    assert_eq!(shift.clamp((6, 15)), (9, 0));
}

#[test]
fn absent_arguments_are_rejected() {
    assert_eq!(
        Interval::<i32>::from_bounds(None, None),
        Err(IntervalError::MissingBound(Endpoint::Low))
    );
    let range = iv(0, 3);
    assert!(!range.contains_opt(None));
    assert!(!range.overlaps_opt(None));
    assert_eq!(range.clamp_opt(None), Err(IntervalError::MissingValue));
}

#[test]
fn empty_collections_are_rejected() {
    let empty: Vec<i32> = Vec::new();
    assert_eq!(max(empty.clone()), Err(IntervalError::EmptyCollection));
    assert_eq!(cover(empty), Err(IntervalError::EmptyCollection));
}

#[test]
fn intervals_key_maps() {
    let mut labels = HashMap::new();
    labels.insert(iv(1, 5), "low");
    labels.insert(iv(1, 5), "still low");
    labels.insert(iv(6, 9), "high");
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[&iv(1, 5)], "still low");
}
