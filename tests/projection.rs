use quarry::testing::assert_sequence_equal;
use quarry::*;
use std::cell::Cell;

#[test]
fn select_preserves_source_order() {
    let doubled = vec![1, 2, 3].select(|n| n * 2).to_list();
    assert_eq!(doubled, vec![2, 4, 6]);
}

#[test]
fn select_changes_element_type() {
    let labels = vec![1, 2, 3].select(|n| format!("#{n}")).to_list();
    assert_eq!(
        labels,
        vec!["#1".to_string(), "#2".to_string(), "#3".to_string()]
    );
}

#[test]
fn select_buffers_at_iteration_start() {
    let calls = Cell::new(0usize);
    let source = vec![10, 20, 30];
    let projected = (&source).select(|n| {
        calls.set(calls.get() + 1);
        n / 10
    });

    // Declaring the projection runs nothing.
    assert_eq!(calls.get(), 0);

    // The full output is computed the moment iteration begins, reading the
    // source exactly once for this iterator.
    let mut iter = projected.iterate();
    assert_eq!(calls.get(), 3);
    assert_eq!(iter.next(), Some(1));
    assert_eq!(calls.get(), 3);
    drop(iter);

    // A second iterator re-reads the source once more.
    let _ = projected.iterate();
    assert_eq!(calls.get(), 6);
}

#[test]
fn select_many_flattens_in_source_order() {
    let words = vec!["ab".to_string(), "cd".to_string()];
    let chars = words
        .select_many(|w| w.chars().collect::<Vec<char>>())
        .to_list();
    assert_eq!(chars, vec!['a', 'b', 'c', 'd']);
}

#[test]
fn select_many_skips_empty_subsequences() {
    let nested = vec![vec![1, 2], vec![], vec![3]];
    let flat = nested.select_many(Clone::clone);
    assert_sequence_equal(&flat, &[1, 2, 3]);
}

#[test]
fn select_reiterates_independently() {
    let squares = vec![1, 2, 3].select(|n| n * n);
    assert_sequence_equal(&squares, &[1, 4, 9]);
    assert_sequence_equal(&squares, &[1, 4, 9]);
}
