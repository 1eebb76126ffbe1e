//! The [`Validated`] container.
//!
//! A container owns one value and an ordered list of rules. Every write
//! re-runs all rules before the call returns, so `is_valid` and
//! `failed_rules` always describe the current value. Observers registered
//! with [`Validated::subscribe`] are notified once per logical mutation,
//! after the new state is fully computed.
//!
//! # Aggregation
//!
//! With the default [`Aggregation::LastRule`] policy, `is_valid` is the
//! verdict of the *last* rule while `failed_rules` lists every failure:
//!
//! ```rust
//! use validated::Validated;
//! use validated::rules::{greater, less_or_equal};
//!
//! let number = Validated::new(2, [greater(3), less_or_equal(10)]);
//! assert!(number.is_valid()); // last rule passes
//! assert_eq!(number.failed_names().collect::<Vec<_>>(), ["greater"]);
//! ```
//!
//! [`Aggregation::AllRules`] requires every rule to pass:
//!
//! ```rust
//! use validated::{Validated, ValidatedConfig};
//! use validated::rules::{greater, less_or_equal};
//!
//! let number = Validated::with_config(2, [greater(3), less_or_equal(10)], ValidatedConfig::strict());
//! assert!(!number.is_valid());
//! ```

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::binding::Binding;
use crate::config::{Aggregation, ValidatedConfig};
use crate::error::ValidationFailed;
use crate::foundation::{Message, Rule};

/// Callback shape stored by [`Validated::subscribe`].
pub type Observer<V> = dyn FnMut(&Snapshot<'_, V>) + Send;

/// Handle returned by [`Validated::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

/// What triggered a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Change {
    /// The value was written (`set`, `replace`, `update`, or a binding).
    Value,
    /// The rule list was replaced and re-evaluated.
    Rules,
    /// An explicit [`Validated::validate`] call.
    Revalidated,
}

/// The state handed to observers after a mutation.
#[derive(Debug)]
pub struct Snapshot<'a, V> {
    /// The current value.
    pub value: &'a V,
    /// The aggregate verdict.
    pub is_valid: bool,
    /// Rules that rejected the value, in evaluation order.
    pub failed: &'a [Rule<V>],
    /// What triggered this notification.
    pub change: Change,
}

/// A value together with the rules that judge it.
///
/// # Examples
///
/// ```rust
/// use validated::Validated;
/// use validated::rules::is_email;
///
/// let mut mail = Validated::with_rule("test@example.com".to_string(), is_email());
/// assert!(mail.is_valid());
///
/// mail.set("not-an-email".to_string());
/// assert!(!mail.is_valid());
/// assert_eq!(mail.failed_names().collect::<Vec<_>>(), ["is_email"]);
/// ```
pub struct Validated<V> {
    value: V,
    rules: Vec<Rule<V>>,
    is_valid: bool,
    failed: Vec<Rule<V>>,
    config: ValidatedConfig,
    observers: Vec<(ObserverId, Box<Observer<V>>)>,
    next_observer: u64,
}

impl<V> Validated<V> {
    /// Creates a container and validates the initial value.
    pub fn new(value: V, rules: impl IntoIterator<Item = Rule<V>>) -> Self {
        Self::with_config(value, rules, ValidatedConfig::default())
    }

    /// Creates a container judged by a single rule.
    pub fn with_rule(value: V, rule: Rule<V>) -> Self {
        Self::new(value, [rule])
    }

    /// Creates a container with an explicit configuration.
    pub fn with_config(
        value: V,
        rules: impl IntoIterator<Item = Rule<V>>,
        config: ValidatedConfig,
    ) -> Self {
        let mut this = Self {
            value,
            rules: rules.into_iter().collect(),
            is_valid: true,
            failed: Vec::new(),
            config,
            observers: Vec::new(),
            next_observer: 0,
        };
        this.revalidate();
        this
    }

    // ------------------------------------------------------------------
    // Value access
    // ------------------------------------------------------------------

    /// The current value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Replaces the value, revalidates, and notifies observers.
    pub fn set(&mut self, value: V) {
        self.value = value;
        self.commit(Change::Value);
    }

    /// Like [`set`](Self::set), returning the previous value.
    pub fn replace(&mut self, value: V) -> V {
        let previous = std::mem::replace(&mut self.value, value);
        self.commit(Change::Value);
        previous
    }

    /// Mutates the value in place. Counts as one write: one revalidation,
    /// one notification.
    ///
    /// If `f` panics, the partly written value is still revalidated and
    /// published before the panic resumes.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut V) -> R) -> R {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| f(&mut self.value)));
        self.commit(Change::Value);
        match outcome {
            Ok(result) => result,
            Err(payload) => panic::resume_unwind(payload),
        }
    }

    /// The value, if every recorded failure is absent and `is_valid` holds.
    ///
    /// Intended as a submit gate.
    pub fn try_value(&self) -> Result<&V, ValidationFailed> {
        if self.is_valid && self.failed.is_empty() {
            Ok(&self.value)
        } else {
            Err(ValidationFailed::from_rules(&self.failed))
        }
    }

    /// Consumes the container, returning the value.
    pub fn into_inner(self) -> V {
        self.value
    }

    /// A get/set pair for this container. Writes through the binding go
    /// through [`set`](Self::set).
    pub fn binding(&mut self) -> Binding<'_, V> {
        Binding::new(self)
    }

    // ------------------------------------------------------------------
    // Rules
    // ------------------------------------------------------------------

    /// The current rules, in evaluation order.
    pub fn rules(&self) -> &[Rule<V>] {
        &self.rules
    }

    /// Replaces the rule list with `transform(current_rules)`.
    ///
    /// With `revalidate == false` the verdict and failures stay as they
    /// were until the next write or [`validate`](Self::validate), and no
    /// observer is notified. Useful when a value write is about to follow.
    pub fn replace_rules<F>(&mut self, transform: F, revalidate: bool)
    where
        F: FnOnce(Vec<Rule<V>>) -> Vec<Rule<V>>,
    {
        self.rules = transform(self.rules.clone());
        tracing::debug!(rules = self.rules.len(), revalidate, "replaced rules");

        if revalidate {
            self.commit(Change::Rules);
        }
    }

    /// Re-runs every rule against the current value and notifies observers.
    ///
    /// Idempotent while value and rules are unchanged; needed after
    /// `replace_rules(_, false)` or when a rule depends on outside state
    /// such as the current time.
    pub fn validate(&mut self) {
        self.commit(Change::Revalidated);
    }

    // ------------------------------------------------------------------
    // Verdict
    // ------------------------------------------------------------------

    /// The aggregate verdict under the configured [`Aggregation`].
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Rules that rejected the current value, in evaluation order.
    pub fn failed_rules(&self) -> &[Rule<V>] {
        &self.failed
    }

    /// Names of the failing rules.
    pub fn failed_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.failed.iter().map(Rule::name)
    }

    /// Message tokens of the failing rules that carry one.
    pub fn failed_messages(&self) -> impl Iterator<Item = &Message> + '_ {
        self.failed.iter().filter_map(Rule::message)
    }

    /// The container's configuration.
    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------

    /// Registers a callback run after every mutation that revalidates.
    ///
    /// Observers run in registration order.
    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&Snapshot<'_, V>) + Send + 'static,
    {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer, _)| *observer != id);
        self.observers.len() != before
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn commit(&mut self, change: Change) {
        self.revalidate();
        self.publish(change);
    }

    fn revalidate(&mut self) {
        self.failed.clear();

        let mut last = true;
        let mut all = true;
        for rule in &self.rules {
            let verdict = judge(rule, &self.value);
            if !verdict {
                self.failed.push(rule.clone());
            }
            last = verdict;
            all &= verdict;
        }

        self.is_valid = match self.config.aggregation {
            Aggregation::LastRule => last,
            Aggregation::AllRules => all,
        };

        tracing::trace!(
            rules = self.rules.len(),
            failed = self.failed.len(),
            is_valid = self.is_valid,
            aggregation = %self.config.aggregation,
            "revalidated"
        );
    }

    fn publish(&mut self, change: Change) {
        if self.observers.is_empty() {
            return;
        }

        let snapshot = Snapshot {
            value: &self.value,
            is_valid: self.is_valid,
            failed: &self.failed,
            change,
        };
        for (_, observer) in &mut self.observers {
            observer(&snapshot);
        }
    }
}

/// Runs one rule. A panicking predicate counts as not satisfied, so the
/// remaining rules still run and the recorded state matches the value.
fn judge<V>(rule: &Rule<V>, value: &V) -> bool {
    panic::catch_unwind(AssertUnwindSafe(|| rule.evaluate(value))).unwrap_or_else(|_| {
        tracing::warn!(rule = rule.name(), "rule predicate panicked, treating as not satisfied");
        false
    })
}

impl<V: fmt::Debug> fmt::Debug for Validated<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validated")
            .field("value", &self.value)
            .field("is_valid", &self.is_valid)
            .field("failed", &self.failed_names().collect::<Vec<_>>())
            .field("rules", &self.rules.len())
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .finish()
    }
}
