//! A thread-safe handle to a [`Validated`] container.
//!
//! [`SharedValidated`] wraps the container in `Arc<Mutex<_>>`. Each
//! mutation holds the lock for the whole write-revalidate-notify sequence,
//! so a reader on another thread never sees a value paired with a verdict
//! computed for a different value.
//!
//! A panic inside [`SharedValidated::update`] still leaves the verdict
//! computed for the value that was written.
//!
//! Observers run while the lock is held. They receive a [`Snapshot`] and
//! must not call back into the same handle.
//!
//! [`Snapshot`]: crate::Snapshot

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::binding::SharedBinding;
use crate::config::ValidatedConfig;
use crate::container::{ObserverId, Snapshot, Validated};
use crate::error::ValidationFailed;
use crate::foundation::{Message, Rule};

/// Cloneable, thread-safe handle to a [`Validated`] container.
///
/// # Examples
///
/// ```rust
/// use std::thread;
///
/// use validated::SharedValidated;
/// use validated::rules::greater;
///
/// let counter = SharedValidated::new(0, [greater(0)]);
/// let writer = counter.clone();
/// thread::spawn(move || writer.set(3)).join().unwrap();
///
/// assert_eq!(counter.get(), 3);
/// assert!(counter.is_valid());
/// ```
pub struct SharedValidated<V> {
    inner: Arc<Mutex<Validated<V>>>,
}

impl<V> SharedValidated<V> {
    /// Creates a shared container and validates the initial value.
    pub fn new(value: V, rules: impl IntoIterator<Item = Rule<V>>) -> Self {
        Validated::new(value, rules).into()
    }

    /// Creates a shared container with an explicit configuration.
    pub fn with_config(
        value: V,
        rules: impl IntoIterator<Item = Rule<V>>,
        config: ValidatedConfig,
    ) -> Self {
        Validated::with_config(value, rules, config).into()
    }

    /// A clone of the current value.
    pub fn get(&self) -> V
    where
        V: Clone,
    {
        self.inner.lock().value().clone()
    }

    /// Runs `f` against the container under the lock.
    pub fn with<R>(&self, f: impl FnOnce(&Validated<V>) -> R) -> R {
        f(&self.inner.lock())
    }

    /// See [`Validated::set`].
    pub fn set(&self, value: V) {
        self.inner.lock().set(value);
    }

    /// See [`Validated::update`].
    pub fn update<R>(&self, f: impl FnOnce(&mut V) -> R) -> R {
        self.inner.lock().update(f)
    }

    /// See [`Validated::replace_rules`].
    pub fn replace_rules<F>(&self, transform: F, revalidate: bool)
    where
        F: FnOnce(Vec<Rule<V>>) -> Vec<Rule<V>>,
    {
        self.inner.lock().replace_rules(transform, revalidate);
    }

    /// See [`Validated::validate`].
    pub fn validate(&self) {
        self.inner.lock().validate();
    }

    /// See [`Validated::is_valid`].
    pub fn is_valid(&self) -> bool {
        self.inner.lock().is_valid()
    }

    /// Names of the failing rules.
    pub fn failed_names(&self) -> Vec<String> {
        self.inner
            .lock()
            .failed_names()
            .map(str::to_owned)
            .collect()
    }

    /// Message tokens of the failing rules.
    pub fn failed_messages(&self) -> Vec<Message> {
        self.inner.lock().failed_messages().cloned().collect()
    }

    /// A clone of the value if the container passes. See
    /// [`Validated::try_value`].
    pub fn try_get(&self) -> Result<V, ValidationFailed>
    where
        V: Clone,
    {
        self.inner.lock().try_value().cloned()
    }

    /// See [`Validated::subscribe`].
    pub fn subscribe<F>(&self, observer: F) -> ObserverId
    where
        F: FnMut(&Snapshot<'_, V>) + Send + 'static,
    {
        self.inner.lock().subscribe(observer)
    }

    /// See [`Validated::unsubscribe`].
    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        self.inner.lock().unsubscribe(id)
    }

    /// An owned get/set pair over this container.
    pub fn binding(&self) -> SharedBinding<V>
    where
        V: Clone + Send + 'static,
    {
        let read = self.clone();
        let write = self.clone();
        SharedBinding::new(move || read.get(), move |value| write.set(value))
    }
}

impl<V> Clone for SharedValidated<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> From<Validated<V>> for SharedValidated<V> {
    fn from(validated: Validated<V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(validated)),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for SharedValidated<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedValidated")
            .field(&*self.inner.lock())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::rules::{greater, is_multiple_of, less_or_equal};

    #[test]
    fn clones_share_state() {
        let a = SharedValidated::new(1, [greater(0)]);
        let b = a.clone();
        b.set(-1);
        assert!(!a.is_valid());
        assert_eq!(a.failed_names(), ["greater"]);
    }

    #[test]
    fn replace_rules_through_handle() {
        let shared = SharedValidated::new(6, [greater(10)]);
        shared.replace_rules(|_| vec![is_multiple_of(3)], false);
        assert!(!shared.is_valid());
        shared.validate();
        assert!(shared.is_valid());
        assert_eq!(shared.with(|v| v.rules().len()), 1);
    }

    #[test]
    fn concurrent_writers_keep_value_and_verdict_consistent() {
        let shared = SharedValidated::new(0_i64, [is_multiple_of(2)]);
        let mismatches = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let shared = shared.clone();
                let mismatches = Arc::clone(&mismatches);
                thread::spawn(move || {
                    for i in 0..500 {
                        shared.set(t * 1000 + i);
                        shared.with(|v| {
                            if v.is_valid() != (*v.value() % 2 == 0) {
                                mismatches.fetch_add(1, Ordering::SeqCst);
                            }
                        });
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(mismatches.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn panicking_update_on_other_thread_keeps_verdict_in_sync() {
        let shared = SharedValidated::new(5_i32, [greater(0)]);
        let writer = shared.clone();

        let joined = thread::spawn(move || {
            writer.update(|v| {
                *v = -5;
                assert!(*v > 0, "writer failed mid-update");
            });
        })
        .join();

        assert!(joined.is_err());
        assert_eq!(shared.get(), -5);
        assert_eq!(shared.is_valid(), shared.get() > 0);
        assert_eq!(shared.failed_names(), ["greater"]);
    }

    #[test]
    fn binding_writes_revalidate() {
        let shared = SharedValidated::new(0, [less_or_equal(10)]);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        shared.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let field = shared.binding();
        field.set(11);
        assert_eq!(field.get(), 11);
        assert!(!shared.is_valid());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn try_get_clones_valid_value() {
        let shared = SharedValidated::new(String::from("ok"), []);
        assert_eq!(shared.try_get(), Ok(String::from("ok")));
    }
}
