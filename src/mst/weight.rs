use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::Add;

use num_traits::{CheckedAdd, Zero};

/// Edge weight: a copyable numeric value with a total order.
///
/// Integers use their natural `Ord`. Floats use `total_cmp`, so NaN has a fixed
/// position in the order instead of breaking sorts.
pub trait Weight: Copy + Debug + PartialEq + Add<Output = Self> + Zero {
    /// Total order over weights.
    fn cmp_weight(&self, other: &Self) -> Ordering;

    /// `self + other`, or `None` if the sum does not fit in `Self`.
    ///
    /// Floats never overflow here: a sum past the finite range becomes infinite.
    fn checked_add_weight(&self, other: &Self) -> Option<Self>;

    /// `true` if `self` sorts strictly before `other`.
    #[inline]
    fn lighter_than(&self, other: &Self) -> bool {
        self.cmp_weight(other) == Ordering::Less
    }

    /// `true` if `self` and `other` occupy the same position in the order.
    #[inline]
    fn same_weight(&self, other: &Self) -> bool {
        self.cmp_weight(other) == Ordering::Equal
    }
}

macro_rules! impl_weight_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl Weight for $t {
                #[inline]
                fn cmp_weight(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                #[inline]
                fn checked_add_weight(&self, other: &Self) -> Option<Self> {
                    CheckedAdd::checked_add(self, other)
                }
            }
        )*
    };
}

macro_rules! impl_weight_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Weight for $t {
                #[inline]
                fn cmp_weight(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }

                #[inline]
                fn checked_add_weight(&self, other: &Self) -> Option<Self> {
                    Some(self + other)
                }
            }
        )*
    };
}

impl_weight_ord!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_weight_float!(f32, f64);

/// Sum of weights, folded left from zero. `None` if a partial sum overflows.
pub(crate) fn total<W: Weight>(weights: impl IntoIterator<Item = W>) -> Option<W> {
    weights
        .into_iter()
        .try_fold(W::zero(), |acc, w| acc.checked_add_weight(&w))
}

/// Largest weight under [`Weight::cmp_weight`], or `None` for an empty sequence.
pub(crate) fn max<W: Weight>(weights: impl IntoIterator<Item = W>) -> Option<W> {
    weights
        .into_iter()
        .max_by(|a, b| a.cmp_weight(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_order() {
        assert!(1i32.lighter_than(&2));
        assert!(!2i32.lighter_than(&2));
        assert!(7u64.same_weight(&7));
    }

    #[test]
    fn float_order_places_nan_last() {
        let mut ws = vec![f64::NAN, 2.0, -1.0, 0.5];
        ws.sort_by(|a, b| a.cmp_weight(b));
        assert_eq!(&ws[..3], &[-1.0, 0.5, 2.0]);
        assert!(ws[3].is_nan());
    }

    #[test]
    fn total_and_max() {
        assert_eq!(total([1, 2, 3]), Some(6));
        assert_eq!(total(Vec::<i32>::new()), Some(0));
        assert_eq!(max([3.0f32, 9.5, -2.0]), Some(9.5));
        assert_eq!(max(Vec::<u8>::new()), None);
    }

    #[test]
    fn total_detects_overflow() {
        assert_eq!(total([200u8, 55]), Some(255));
        assert_eq!(total([200u8, 100]), None);
        assert_eq!(total([-100i8, -29]), None);
        assert_eq!(total([i64::MAX, -1, 1]), Some(i64::MAX));
        assert_eq!(total([f32::MAX, f32::MAX]), Some(f32::INFINITY));
    }
}
