//! Ordering rules.

use std::ops::RangeBounds;

use crate::foundation::Rule;

// ============================================================================
// THRESHOLDS
// ============================================================================

/// Value is strictly less than `bound`.
///
/// # Examples
///
/// ```
/// use validated::rules::less;
///
/// let rule = less(10);
/// assert!(rule.evaluate(&9));
/// assert!(!rule.evaluate(&10)); // Not strictly less
/// ```
#[must_use]
pub fn less<T>(bound: T) -> Rule<T>
where
    T: PartialOrd + Send + Sync + 'static,
{
    Rule::new("less", move |value: &T| *value < bound)
}

/// Value is less than or equal to `bound`.
#[must_use]
pub fn less_or_equal<T>(bound: T) -> Rule<T>
where
    T: PartialOrd + Send + Sync + 'static,
{
    Rule::new("less_or_equal", move |value: &T| *value <= bound)
}

/// Value is strictly greater than `bound`.
#[must_use]
pub fn greater<T>(bound: T) -> Rule<T>
where
    T: PartialOrd + Send + Sync + 'static,
{
    Rule::new("greater", move |value: &T| *value > bound)
}

/// Value is greater than or equal to `bound`.
#[must_use]
pub fn greater_or_equal<T>(bound: T) -> Rule<T>
where
    T: PartialOrd + Send + Sync + 'static,
{
    Rule::new("greater_or_equal", move |value: &T| *value >= bound)
}

// ============================================================================
// RANGES
// ============================================================================

/// Value lies within `range`. Any range syntax works: `1..=10`, `..5`,
/// `0.0..1.0`.
///
/// # Examples
///
/// ```
/// use validated::rules::in_range;
///
/// let rule = in_range(18..=65);
/// assert!(rule.evaluate(&18));
/// assert!(rule.evaluate(&65));
/// assert!(!rule.evaluate(&66));
/// ```
#[must_use]
pub fn in_range<T, R>(range: R) -> Rule<T>
where
    T: PartialOrd + Send + Sync + 'static,
    R: RangeBounds<T> + Send + Sync + 'static,
{
    Rule::new("in_range", move |value: &T| range.contains(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_less() {
        let rule = less(10);
        assert!(rule.evaluate(&9));
        assert!(!rule.evaluate(&10));
        assert!(!rule.evaluate(&11));
    }

    #[test]
    fn test_less_or_equal() {
        let rule = less_or_equal(10);
        assert!(rule.evaluate(&10));
        assert!(!rule.evaluate(&11));
    }

    #[test]
    fn test_greater() {
        let rule = greater(5);
        assert!(rule.evaluate(&6));
        assert!(!rule.evaluate(&5));
    }

    #[test]
    fn test_greater_or_equal() {
        let rule = greater_or_equal(5);
        assert!(rule.evaluate(&5));
        assert!(!rule.evaluate(&4));
    }

    #[test]
    fn test_greater_float() {
        let rule = greater(0.0_f64);
        assert!(rule.evaluate(&0.001));
        assert!(!rule.evaluate(&0.0));
        assert!(!rule.evaluate(&f64::NAN));
    }

    #[test]
    fn test_string_ordering() {
        let rule = less(String::from("m"));
        assert!(rule.evaluate(&"apple".to_string()));
        assert!(!rule.evaluate(&"zebra".to_string()));
    }

    #[test]
    fn test_in_range_variants() {
        assert!(in_range(0..10).evaluate(&9));
        assert!(!in_range(0..10).evaluate(&10));
        assert!(in_range(..=0).evaluate(&-3));
        assert!(!in_range(5..).evaluate(&4));
    }
}
