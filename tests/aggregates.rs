use quarry::*;

#[test]
fn aggregate_folds_left_to_right_from_first_element() -> anyhow::Result<()> {
    let concatenated = vec!["a".to_string(), "b".to_string(), "c".to_string()]
        .aggregate(|acc, s| acc + &s)?;
    assert_eq!(concatenated, "abc");

    let product = vec![1, 2, 3, 4].aggregate(|acc, n| acc * n)?;
    assert_eq!(product, 24);
    Ok(())
}

#[test]
fn aggregate_of_empty_fails() {
    let err = empty::<i32>().aggregate(|acc, n| acc + n).unwrap_err();
    assert_eq!(err, QueryError::NoElements);
}

#[test]
fn count_family_enumerates_fully() {
    let data = vec![1, 2, 3, 4, 5];
    assert_eq!(data.count(), 5);
    assert_eq!(data.long_count(), 5);
    assert_eq!(data.count_where(|n| n % 2 == 0), 2);
    assert_eq!(data.long_count_where(|n| *n > 1), 4);
    assert_eq!(empty::<i32>().count(), 0);
}

#[test]
fn any_and_all() {
    let data = vec![1, 2, 3];
    assert!(data.any());
    assert!(data.any_where(|n| *n == 2));
    assert!(!data.any_where(|n| *n > 10));
    assert!(data.all(|n| *n > 0));
    assert!(!data.all(|n| *n > 1));

    // An empty source is vacuously all, and never any.
    let nothing = empty::<i32>();
    assert!(!nothing.any());
    assert!(nothing.all(|n| *n > 100));
}

#[test]
fn sum_of_empty_is_zero() {
    assert_eq!(empty::<i32>().sum_by(|n| *n), 0i64);
    assert_eq!(empty::<f64>().sum_by(|v| *v), 0.0);
}

#[test]
fn sum_with_selector() {
    let words = vec!["alpha", "beta", "gamma"];
    let total_len: u64 = words.sum_by(|w| w.len() as u64);
    assert_eq!(total_len, 14);
}

#[test]
fn average_of_empty_fails() {
    let err = empty::<i32>().average_by(|n| *n).unwrap_err();
    assert_eq!(err, QueryError::NoElements);
}

// Integral sums accumulate in 64 bits, so summing values near the 32-bit
// limit cannot overflow.
macro_rules! sum_accumulates_wide {
    ($($ty:ty => $acc:ty),+ $(,)?) => {$( paste::paste! {
        #[test]
        fn [<sum_by_ $ty _accumulates_wide>]() {
            let values = vec![<$ty>::MAX, <$ty>::MAX, <$ty>::MAX];
            let sum: $acc = values.sum_by(|v| *v);
            assert_eq!(sum, <$acc>::from(<$ty>::MAX) * 3);
        }
    })+};
}

sum_accumulates_wide!(i32 => i64, u32 => u64);

macro_rules! average_divides_by_count {
    ($($ty:ty),+ $(,)?) => {$( paste::paste! {
        #[test]
        fn [<average_by_ $ty _divides_by_count>]() -> anyhow::Result<()> {
            let values: Vec<$ty> = vec![1 as $ty, 2 as $ty, 3 as $ty, 4 as $ty];
            let avg = values.average_by(|v| *v)?;
            assert_approx_eq!(avg, 2.5);
            Ok(())
        }
    })+};
}

average_divides_by_count!(i32, i64, u32, u64, f32, f64);

#[test]
fn average_of_ordered_float_elements() -> anyhow::Result<()> {
    let readings = vec![OrderedFloat(1.5f64), OrderedFloat(2.5)];
    let avg = readings.average_by(|r| *r)?;
    assert_approx_eq!(avg, 2.0);
    Ok(())
}

#[test]
fn min_and_max_by_extracted_key() -> anyhow::Result<()> {
    let words = vec!["pear", "fig", "banana", "kiwi"];
    assert_eq!(words.max_by_key(|w| w.len())?, "banana");
    assert_eq!(words.min_by_key(|w| w.len())?, "fig");
    Ok(())
}

#[test]
fn extremum_ties_keep_the_first_element_seen() -> anyhow::Result<()> {
    let pairs = vec![("a", 1), ("b", 2), ("c", 2), ("d", 1)];
    assert_eq!(pairs.max_by_key(|(_, n)| *n)?, ("b", 2));
    assert_eq!(pairs.min_by_key(|(_, n)| *n)?, ("a", 1));
    Ok(())
}

#[test]
fn extremum_of_empty_fails() {
    assert_eq!(
        empty::<i32>().max_by_key(|n| *n),
        Err(QueryError::NoElements)
    );
    assert_eq!(
        empty::<i32>().min_by_key(|n| *n),
        Err(QueryError::NoElements)
    );
}

#[test]
fn min_max_over_float_keys_via_ordered_float() -> anyhow::Result<()> {
    let readings = vec![2.5f64, 1.25, 3.75, 3.75];
    assert_eq!(readings.max_by_key(|r| OrderedFloat(*r))?, 3.75);
    assert_eq!(readings.min_by_key(|r| OrderedFloat(*r))?, 1.25);
    Ok(())
}
