//! Whole-number magnitudes that a [`Unit`](crate::Unit) can scale.
//!
//! Tables only ever hold signed integers: fractions are the caller's problem, which keeps
//! rounding and truncation explicit. Internally every computation runs on `i128`, so any
//! implementor must fit in `i128` including the absolute value of its minimum.

use std::fmt::Debug;

/// Signed integer type counted in a domain's smallest unit.
pub trait Magnitude: Copy + Ord + Debug + Send + Sync + 'static {
    const ZERO: Self;

    fn to_i128(self) -> i128;

    /// Checked narrowing; `None` when `value` does not fit.
    fn from_i128(value: i128) -> Option<Self>;
}

macro_rules! impl_primitive_magnitude {
    ($($t:ty),* $(,)?) => {
        $(
            impl Magnitude for $t {
                const ZERO: Self = 0;

                fn to_i128(self) -> i128 {
                    self as i128
                }

                fn from_i128(value: i128) -> Option<Self> {
                    <$t>::try_from(value).ok()
                }
            }
        )*
    };
}

impl_primitive_magnitude!(i8, i16, i32, i64, isize);
