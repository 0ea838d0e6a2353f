use quarry::testing::assert_sequence_equal;
use quarry::*;

#[test]
fn skip_discards_the_prefix() {
    let tail = vec![1, 2, 3, 4, 5].skip(2);
    assert_sequence_equal(&tail, &[3, 4, 5]);
}

#[test]
fn skip_past_the_end_is_empty() {
    let nothing = vec![1, 2].skip(10);
    assert_eq!(nothing.count(), 0);
}

#[test]
fn take_keeps_the_prefix() {
    let head = vec![1, 2, 3, 4, 5].take(3);
    assert_sequence_equal(&head, &[1, 2, 3]);
}

#[test]
fn take_zero_is_empty() {
    assert_eq!(vec![1, 2, 3].take(0).count(), 0);
}

#[test]
fn take_past_the_end_yields_everything() {
    let all = vec![1, 2].take(10);
    assert_sequence_equal(&all, &[1, 2]);
}

#[test]
fn skip_while_keeps_first_failing_element_and_rest() {
    // The predicate holds again for the final 1, but it is never reapplied
    // once it has gone false.
    let out = vec![1, 2, 3, 1].skip_while(|n| *n < 3);
    assert_sequence_equal(&out, &[3, 1]);
}

#[test]
fn skip_while_that_never_fails_is_empty() {
    assert_eq!(vec![1, 2, 3].skip_while(|_| true).count(), 0);
}

#[test]
fn take_while_stops_at_first_failure() {
    // The failing 3 is not yielded and neither is anything after it, even
    // though the predicate would hold again for the final 1.
    let out = vec![1, 2, 3, 1].take_while(|n| *n < 3);
    assert_sequence_equal(&out, &[1, 2]);
}

#[test]
fn take_while_that_never_fails_yields_everything() {
    let out = vec![1, 2, 3].take_while(|_| true);
    assert_sequence_equal(&out, &[1, 2, 3]);
}

#[test]
fn partition_stages_reiterate_independently() {
    let window = vec![1, 2, 3, 4, 5, 6].skip(1).take(3);
    assert_sequence_equal(&window, &[2, 3, 4]);
    assert_sequence_equal(&window, &[2, 3, 4]);
}
