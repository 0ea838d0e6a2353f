use quarry::testing::{assert_all, assert_sequence_equal};
use quarry::*;
use std::cell::Cell;

#[test]
fn filter_keeps_matching_elements() {
    let out = vec![1, 2, 3, 4].filter(|n| *n > 1).to_list();
    assert_eq!(out, vec![2, 3, 4]);
}

#[test]
fn filter_does_no_work_until_iterated() {
    let calls = Cell::new(0usize);
    let source = vec![1, 2, 3];
    let filtered = (&source).filter(|n| {
        calls.set(calls.get() + 1);
        *n > 1
    });

    // Construction touches nothing.
    assert_eq!(calls.get(), 0);

    let out = filtered.to_list();
    assert_eq!(out, vec![2, 3]);
    assert_eq!(calls.get(), 3);

    // The predicate is re-evaluated independently on each iteration request.
    let again = filtered.to_list();
    assert_eq!(again, vec![2, 3]);
    assert_eq!(calls.get(), 6);
}

#[test]
fn filter_is_idempotent() {
    fn small(n: &i32) -> bool {
        *n < 3
    }

    let once = vec![1, 2, 3, 2, 1].filter(small).to_list();
    let twice = vec![1, 2, 3, 2, 1].filter(small).filter(small).to_list();
    assert_eq!(once, twice);
}

#[test]
fn filtered_chain_still_satisfies_predicate() {
    let evens = vec![5, 8, 12, 13, 20].filter(|n| n % 2 == 0);
    assert_all(&evens, |n| n % 2 == 0);
    assert_sequence_equal(&evens, &[8, 12, 20]);
}

#[derive(Debug, Clone, PartialEq)]
enum Shape {
    Circle(f64),
    Square(f64),
}

#[test]
fn of_type_extracts_one_variant_in_order() {
    let shapes = vec![
        Shape::Circle(1.0),
        Shape::Square(2.0),
        Shape::Circle(3.0),
    ];

    let radii = shapes
        .of_type(|s| match s {
            Shape::Circle(r) => Some(*r),
            Shape::Square(_) => None,
        })
        .to_list();

    assert_eq!(radii, vec![1.0, 3.0]);
}

#[test]
fn cast_converts_every_element() -> anyhow::Result<()> {
    let nums = vec![1i32, 2, 3];
    let longs = nums.cast(|n| i64::from(*n))?.to_list();
    assert_eq!(longs, vec![1i64, 2, 3]);
    Ok(())
}

#[test]
fn cast_fails_on_empty_source() {
    let nothing: Vec<i32> = Vec::new();
    let err = nothing.cast(|n| i64::from(*n)).map(|_| ()).unwrap_err();
    assert_eq!(err, QueryError::NoElements);
}
