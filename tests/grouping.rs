use quarry::testing::*;
use quarry::*;

#[derive(Debug, Clone, PartialEq)]
struct Order {
    customer: &'static str,
    total: i32,
}

fn orders() -> Vec<Order> {
    vec![
        Order { customer: "ada", total: 30 },
        Order { customer: "bob", total: 10 },
        Order { customer: "ada", total: 5 },
        Order { customer: "bob", total: 20 },
        Order { customer: "ada", total: 1 },
    ]
}

#[test]
fn group_by_partitions_by_key() {
    let groups = orders().group_by(|o| o.customer);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups["ada"].len(), 3);
    assert_eq!(groups["bob"].len(), 2);
}

#[test]
fn group_by_preserves_source_order_within_each_group() {
    let groups = orders().group_by(|o| o.customer);
    let ada_totals = groups["ada"].clone().select(|o| o.total);
    assert_sequence_equal(&ada_totals, &[30, 5, 1]);
    let bob_totals = groups["bob"].clone().select(|o| o.total);
    assert_sequence_equal(&bob_totals, &[10, 20]);
}

#[test]
fn group_by_every_element_lands_in_exactly_one_group() {
    let source = orders();
    let groups = source.group_by(|o| o.customer);
    let grouped: usize = groups.values().map(List::len).sum();
    assert_eq!(grouped, source.count());
}

#[test]
fn group_by_on_empty_yields_no_groups() {
    let groups = empty::<i32>().group_by(|n| n % 2);
    assert!(groups.is_empty());
}

#[test]
fn group_by_singleton_groups_for_unique_keys() {
    let values = vec![1, 2, 3];
    let groups = values.group_by(|n| *n);
    assert_eq!(groups.len(), 3);
    for value in values.iterate() {
        assert_eq!(groups[&value].to_list(), vec![value]);
    }
}

#[test]
fn group_by_computed_key() {
    let values = vec![1, 2, 3, 4, 5, 6];
    let groups = values.group_by(|n| n % 3);
    assert_sequence_equal(&groups[&0].to_list(), &[3, 6]);
    assert_sequence_equal(&groups[&1].to_list(), &[1, 4]);
    assert_sequence_equal(&groups[&2].to_list(), &[2, 5]);
}

#[test]
fn group_results_compose_with_further_queries() {
    let groups = orders().group_by(|o| o.customer);
    let big_spender = groups["ada"].sum_by(|o| o.total);
    assert_eq!(big_spender, 36);
}
