use quarry::testing::assert_sequence_equal;
use quarry::*;

#[test]
fn distinct_keeps_first_occurrence_order() {
    let unique = vec![1, 2, 2, 3, 1].distinct();
    assert_sequence_equal(&unique, &[1, 2, 3]);
}

#[test]
fn distinct_never_yields_more_than_the_source() {
    let source = vec![5, 5, 5, 5];
    let unique = (&source).distinct();
    assert!(unique.count() <= source.count());
    assert_eq!(unique.count(), 1);
}

#[test]
fn distinct_forgets_prior_iterations() {
    let unique = vec![1, 2, 2, 3, 1].distinct();
    // A fresh tracking set per iteration request: the second pass sees the
    // same elements, not an already-populated set.
    assert_sequence_equal(&unique, &[1, 2, 3]);
    assert_sequence_equal(&unique, &[1, 2, 3]);
}

#[test]
fn concurrent_iterations_do_not_share_state() {
    let unique = vec![1, 1, 2].distinct();
    let mut a = unique.iterate();
    let mut b = unique.iterate();

    assert_eq!(a.next(), Some(1));
    // `b` has its own tracking set and still sees the 1.
    assert_eq!(b.next(), Some(1));
    assert_eq!(a.next(), Some(2));
    assert_eq!(b.next(), Some(2));
    assert_eq!(a.next(), None);
    assert_eq!(b.next(), None);
}

#[test]
fn distinct_over_strings() {
    let unique = vec!["a", "b", "a", "c", "b"].distinct();
    assert_sequence_equal(&unique, &["a", "b", "c"]);
}

#[test]
fn distinct_composes_with_other_stages() {
    let out = vec![4, 1, 4, 2, 2, 3]
        .distinct()
        .filter(|n| *n > 1)
        .to_list();
    assert_eq!(out, vec![4, 2, 3]);
}
