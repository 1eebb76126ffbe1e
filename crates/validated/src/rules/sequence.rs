//! Element rules for sequences (`Vec<T>`, slices, arrays).

use crate::foundation::Rule;

/// Sequence contains at least one of `elements`.
///
/// An empty `elements` list accepts nothing.
///
/// # Examples
///
/// ```
/// use validated::rules::contains_any;
///
/// let rule = contains_any::<Vec<&str>, _, _>(["admin", "owner"]);
/// assert!(rule.evaluate(&vec!["viewer", "owner"]));
/// assert!(!rule.evaluate(&vec!["viewer"]));
/// ```
#[must_use]
pub fn contains_any<S, T, I>(elements: I) -> Rule<S>
where
    S: AsRef<[T]> + ?Sized + 'static,
    T: PartialEq + Send + Sync + 'static,
    I: IntoIterator<Item = T>,
{
    let elements: Vec<T> = elements.into_iter().collect();
    Rule::new("contains_any", move |value: &S| {
        let value = value.as_ref();
        elements.iter().any(|e| value.contains(e))
    })
}

/// Sequence contains every one of `elements`.
#[must_use]
pub fn contains_all<S, T, I>(elements: I) -> Rule<S>
where
    S: AsRef<[T]> + ?Sized + 'static,
    T: PartialEq + Send + Sync + 'static,
    I: IntoIterator<Item = T>,
{
    let elements: Vec<T> = elements.into_iter().collect();
    Rule::new("contains_all", move |value: &S| {
        let value = value.as_ref();
        elements.iter().all(|e| value.contains(e))
    })
}

/// Sequence begins with `elements`, in order.
#[must_use]
pub fn starts_with<S, T, I>(elements: I) -> Rule<S>
where
    S: AsRef<[T]> + ?Sized + 'static,
    T: PartialEq + Send + Sync + 'static,
    I: IntoIterator<Item = T>,
{
    let elements: Vec<T> = elements.into_iter().collect();
    Rule::new("starts_with", move |value: &S| {
        value.as_ref().starts_with(&elements)
    })
}
