//! Get/set pairs for presentation layers.
//!
//! A form field wants two things from its backing value: a way to read it
//! and a way to write it. [`Binding`] provides that pair over a borrowed
//! [`Validated`]; [`SharedBinding`] is the owned, cloneable variant built
//! from closures (see [`SharedValidated::binding`]).
//!
//! Writes through either binding are ordinary container writes: they
//! revalidate and notify observers.
//!
//! [`SharedValidated::binding`]: crate::SharedValidated::binding

use std::fmt;
use std::sync::Arc;

use crate::container::Validated;

/// A borrowed get/set view of a [`Validated`] container.
///
/// # Examples
///
/// ```rust
/// use validated::Validated;
/// use validated::rules::not_empty;
///
/// let mut name = Validated::with_rule(String::new(), not_empty());
/// let mut field = name.binding();
/// field.set("Ada".to_string());
/// assert_eq!(field.get(), "Ada");
/// assert!(name.is_valid());
/// ```
pub struct Binding<'a, V> {
    target: &'a mut Validated<V>,
}

impl<'a, V> Binding<'a, V> {
    pub(crate) fn new(target: &'a mut Validated<V>) -> Self {
        Self { target }
    }

    /// The current value.
    pub fn get(&self) -> &V {
        self.target.value()
    }

    /// Writes a new value through [`Validated::set`].
    pub fn set(&mut self, value: V) {
        self.target.set(value);
    }

    /// Verdict after the last write.
    pub fn is_valid(&self) -> bool {
        self.target.is_valid()
    }
}

impl<V: fmt::Debug> fmt::Debug for Binding<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("value", self.target.value())
            .field("is_valid", &self.target.is_valid())
            .finish()
    }
}

type Getter<V> = dyn Fn() -> V + Send + Sync;
type Setter<V> = dyn Fn(V) + Send + Sync;

/// An owned get/set pair.
///
/// Cloning is cheap; clones read and write the same source.
///
/// # Examples
///
/// ```rust
/// use validated::SharedValidated;
/// use validated::rules::length;
///
/// let password = SharedValidated::new(String::new(), [length::<String, _>(8..)]);
/// let field = password.binding();
///
/// field.set("correct horse".to_string());
/// assert_eq!(field.get(), "correct horse");
/// assert!(password.is_valid());
/// ```
pub struct SharedBinding<V> {
    get: Arc<Getter<V>>,
    set: Arc<Setter<V>>,
}

impl<V> SharedBinding<V> {
    /// Builds a binding from a getter and a setter.
    pub fn new<G, S>(get: G, set: S) -> Self
    where
        G: Fn() -> V + Send + Sync + 'static,
        S: Fn(V) + Send + Sync + 'static,
    {
        Self {
            get: Arc::new(get),
            set: Arc::new(set),
        }
    }

    /// Reads the current value.
    pub fn get(&self) -> V {
        (self.get)()
    }

    /// Writes a new value.
    pub fn set(&self, value: V) {
        (self.set)(value);
    }
}

impl<V> Clone for SharedBinding<V> {
    fn clone(&self) -> Self {
        Self {
            get: Arc::clone(&self.get),
            set: Arc::clone(&self.set),
        }
    }
}

impl<V> fmt::Debug for SharedBinding<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedBinding").finish_non_exhaustive()
    }
}
