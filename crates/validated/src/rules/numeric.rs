//! Divisibility rules for primitive integers.

use crate::foundation::Rule;

/// Primitive integers that can be tested for divisibility.
pub trait Integer: Copy + PartialEq + Send + Sync + 'static {
    /// `true` when `self` is a multiple of `divisor`.
    ///
    /// Only zero is a multiple of zero. `MIN` is a multiple of `-1`.
    fn multiple_of(self, divisor: Self) -> bool;
}

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Integer for $ty {
                #[inline]
                fn multiple_of(self, divisor: Self) -> bool {
                    if divisor == 0 {
                        return self == 0;
                    }
                    // Only `MIN % -1` overflows, and that remainder is zero.
                    self.checked_rem(divisor).is_none_or(|rem| rem == 0)
                }
            }
        )*
    };
}

impl_integer!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);

/// Value is a multiple of `divisor`.
///
/// # Examples
///
/// ```
/// use validated::rules::is_multiple_of;
///
/// let rule = is_multiple_of(3);
/// assert!(rule.evaluate(&9));
/// assert!(rule.evaluate(&0));
/// assert!(!rule.evaluate(&7));
/// ```
#[must_use]
pub fn is_multiple_of<T: Integer>(divisor: T) -> Rule<T> {
    Rule::new("is_multiple_of", move |value: &T| value.multiple_of(divisor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_of_signed() {
        let rule = is_multiple_of(3);
        assert!(rule.evaluate(&-6));
        assert!(rule.evaluate(&3));
        assert!(!rule.evaluate(&1));
    }

    #[test]
    fn test_multiple_of_unsigned() {
        let rule = is_multiple_of::<u64>(5);
        assert!(rule.evaluate(&25));
        assert!(!rule.evaluate(&7));
    }

    #[test]
    fn test_zero_divisor() {
        let rule = is_multiple_of(0_i32);
        assert!(rule.evaluate(&0));
        assert!(!rule.evaluate(&5));
    }

    #[test]
    fn test_min_by_minus_one() {
        assert!(i32::MIN.multiple_of(-1));
        assert!(is_multiple_of(-1_i64).evaluate(&i64::MIN));
    }
}
