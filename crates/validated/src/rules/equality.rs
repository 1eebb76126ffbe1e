//! Equality and membership rules.

use crate::foundation::Rule;

/// Value equals `expected`.
#[must_use]
pub fn equals<T>(expected: T) -> Rule<T>
where
    T: PartialEq + Send + Sync + 'static,
{
    Rule::new("equals", move |value: &T| *value == expected)
}

/// Value differs from `unexpected`.
#[must_use]
pub fn not_equals<T>(unexpected: T) -> Rule<T>
where
    T: PartialEq + Send + Sync + 'static,
{
    Rule::new("not_equals", move |value: &T| *value != unexpected)
}

/// Value is one of `allowed`. An empty set accepts nothing.
///
/// # Examples
///
/// ```
/// use validated::rules::one_of;
///
/// let rule = one_of(["red", "green", "blue"]);
/// assert!(rule.evaluate(&"green"));
/// assert!(!rule.evaluate(&"purple"));
/// ```
#[must_use]
pub fn one_of<T, I>(allowed: I) -> Rule<T>
where
    T: PartialEq + Send + Sync + 'static,
    I: IntoIterator<Item = T>,
{
    let allowed: Vec<T> = allowed.into_iter().collect();
    Rule::new("one_of", move |value: &T| allowed.contains(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equals() {
        let rule = equals(42);
        assert!(rule.evaluate(&42));
        assert!(!rule.evaluate(&41));
    }

    #[test]
    fn test_not_equals() {
        let rule = not_equals(String::from("admin"));
        assert!(rule.evaluate(&"alice".to_string()));
        assert!(!rule.evaluate(&"admin".to_string()));
    }

    #[test]
    fn test_one_of() {
        let rule = one_of([1, 2, 3]);
        assert!(rule.evaluate(&2));
        assert!(!rule.evaluate(&4));
    }

    #[test]
    fn test_one_of_empty() {
        let rule = one_of(Vec::<i32>::new());
        assert!(!rule.evaluate(&0));
    }
}
