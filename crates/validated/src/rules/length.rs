//! Emptiness and length rules.
//!
//! Work for any type implementing [`Length`]: strings, vectors, slices,
//! arrays, and the standard maps and sets.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::ops::RangeBounds;

use crate::foundation::Rule;

/// Types with a countable number of elements.
///
/// Strings count characters (Unicode scalar values), not bytes, so a
/// password rule of `length(8..)` means eight characters.
pub trait Length {
    /// Number of elements.
    fn length(&self) -> usize;

    /// `true` when there are no elements.
    fn is_empty(&self) -> bool {
        self.length() == 0
    }
}

impl Length for str {
    fn length(&self) -> usize {
        self.chars().count()
    }

    fn is_empty(&self) -> bool {
        self.chars().next().is_none()
    }
}

impl Length for String {
    fn length(&self) -> usize {
        self.as_str().length()
    }

    fn is_empty(&self) -> bool {
        self.chars().next().is_none()
    }
}

impl<T> Length for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Length for [T; N] {
    fn length(&self) -> usize {
        N
    }
}

impl<T: Length + ?Sized> Length for &T {
    fn length(&self) -> usize {
        (**self).length()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

impl<T: Length + ?Sized> Length for Box<T> {
    fn length(&self) -> usize {
        (**self).length()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

macro_rules! impl_length_via_len {
    ($($ty:ident<$($param:ident),+>),* $(,)?) => {
        $(
            impl<$($param),+> Length for $ty<$($param),+> {
                fn length(&self) -> usize {
                    self.len()
                }
            }
        )*
    };
}

impl_length_via_len!(
    Vec<T>,
    VecDeque<T>,
    HashSet<T, S>,
    BTreeSet<T>,
    HashMap<K, V, S>,
    BTreeMap<K, V>,
);

// ============================================================================
// FACTORIES
// ============================================================================

/// Value has no elements.
#[must_use]
pub fn is_empty<V: Length + ?Sized + 'static>() -> Rule<V> {
    Rule::new("is_empty", |value: &V| value.is_empty())
}

/// Value has at least one element.
#[must_use]
pub fn not_empty<V: Length + ?Sized + 'static>() -> Rule<V> {
    Rule::new("not_empty", |value: &V| !value.is_empty())
}

/// Element count lies within `range`.
///
/// # Examples
///
/// ```
/// use validated::rules::length;
///
/// let password = length::<String, _>(8..);
/// assert!(password.evaluate(&"correct horse".to_string()));
/// assert!(!password.evaluate(&"short".to_string()));
///
/// let tags = length::<Vec<&str>, _>(1..=3);
/// assert!(tags.evaluate(&vec!["a", "b"]));
/// assert!(!tags.evaluate(&vec![]));
/// ```
#[must_use]
pub fn length<V, R>(range: R) -> Rule<V>
where
    V: Length + ?Sized + 'static,
    R: RangeBounds<usize> + Send + Sync + 'static,
{
    Rule::new("length", move |value: &V| range.contains(&value.length()))
}
