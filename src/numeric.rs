//! The numeric capability behind [`sum_by`](crate::Query::sum_by) and
//! [`average_by`](crate::Query::average_by).
//!
//! All numeric aggregates share one algorithm, parameterized over this trait:
//! start from the representation's zero, accumulate one selected value per
//! element, and (for averages) divide by the element count. Each integral
//! representation accumulates in a 64-bit type so that summing a full range
//! of 32-bit values cannot overflow, and `f32` accumulates in `f64` for the
//! same headroom.

use ordered_float::OrderedFloat;

/// A value that can be summed and averaged by the query operators.
pub trait Numeric: Copy {
    /// The accumulator type, wide enough to sum any finite sequence of
    /// values that fits the declared element count.
    type Sum: Copy;

    /// The result type of an average over this representation.
    type Average;

    /// The additive identity of the accumulator.
    fn zero() -> Self::Sum;

    /// Fold one value into the running sum.
    fn accumulate(sum: Self::Sum, value: Self) -> Self::Sum;

    /// Divide a completed sum by the element count. Only called with
    /// `count > 0`.
    fn divide(sum: Self::Sum, count: u64) -> Self::Average;
}

macro_rules! numeric_integral {
    ($($ty:ty => $acc:ty),+ $(,)?) => {$(
        impl Numeric for $ty {
            type Sum = $acc;
            type Average = f64;

            fn zero() -> $acc {
                0
            }

            fn accumulate(sum: $acc, value: $ty) -> $acc {
                sum + <$acc>::from(value)
            }

            fn divide(sum: $acc, count: u64) -> f64 {
                sum as f64 / count as f64
            }
        }
    )+};
}

numeric_integral!(i32 => i64, i64 => i64, u32 => u64, u64 => u64);

macro_rules! numeric_float {
    ($($ty:ty),+ $(,)?) => {$(
        impl Numeric for $ty {
            type Sum = f64;
            type Average = f64;

            fn zero() -> f64 {
                0.0
            }

            fn accumulate(sum: f64, value: $ty) -> f64 {
                sum + f64::from(value)
            }

            fn divide(sum: f64, count: u64) -> f64 {
                sum / count as f64
            }
        }
    )+};
}

numeric_float!(f32, f64);

// Elements that store floats behind the total-order wrapper sum the same way
// the raw floats do.
macro_rules! numeric_ordered_float {
    ($($ty:ty),+ $(,)?) => {$(
        impl Numeric for OrderedFloat<$ty> {
            type Sum = f64;
            type Average = f64;

            fn zero() -> f64 {
                0.0
            }

            fn accumulate(sum: f64, value: OrderedFloat<$ty>) -> f64 {
                sum + f64::from(value.into_inner())
            }

            fn divide(sum: f64, count: u64) -> f64 {
                sum / count as f64
            }
        }
    )+};
}

numeric_ordered_float!(f32, f64);
