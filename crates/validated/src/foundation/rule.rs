//! The [`Rule`] type: one validation condition stored as data.

use std::borrow::Cow;
use std::fmt;
use std::ops::{BitAnd, BitOr, Not};
use std::sync::Arc;

use super::Message;

/// The predicate shape stored inside a [`Rule`].
pub type Predicate<V> = dyn Fn(&V) -> bool + Send + Sync;

/// An immutable predicate over `V` plus an optional [`Message`].
///
/// A rule is data rather than control flow: it can be stored in a
/// container, enumerated, and reported back when it rejects a value.
/// Cloning is cheap; clones share the same predicate.
///
/// Every rule carries a `name` (`"is_empty"`, `"greater"`, ...) so failures
/// can be inspected without comparing closures.
///
/// # Examples
///
/// ```rust
/// use validated::foundation::Rule;
///
/// let even = Rule::new("even", |n: &i32| n % 2 == 0).with_message("number.even");
/// assert!(even.evaluate(&4));
/// assert!(!even.evaluate(&3));
/// assert_eq!(even.name(), "even");
/// assert_eq!(even.message().map(|m| m.as_str()), Some("number.even"));
/// ```
pub struct Rule<V: ?Sized> {
    name: Cow<'static, str>,
    message: Option<Message>,
    predicate: Arc<Predicate<V>>,
}

impl<V: ?Sized + 'static> Rule<V> {
    /// Creates a rule from a name and a total predicate.
    pub fn new<F>(name: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: Fn(&V) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            message: None,
            predicate: Arc::new(predicate),
        }
    }

    /// Creates a rule from a predicate that may fail.
    ///
    /// An `Err` from the predicate counts as "not satisfied", so one broken
    /// rule cannot keep the others from being reported.
    ///
    /// ```rust
    /// use validated::foundation::Rule;
    ///
    /// let port = Rule::try_new("port", |s: &String| s.parse::<u16>().map(|p| p >= 1024));
    /// assert!(port.evaluate(&"8080".to_string()));
    /// assert!(!port.evaluate(&"http".to_string()));
    /// ```
    pub fn try_new<F, E>(name: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: Fn(&V) -> Result<bool, E> + Send + Sync + 'static,
        E: fmt::Display,
    {
        let name = name.into();
        let rule = name.clone();
        Self::new(name, move |value: &V| match predicate(value) {
            Ok(verdict) => verdict,
            Err(error) => {
                tracing::debug!(rule = %rule, %error, "rule predicate failed, treating as not satisfied");
                false
            }
        })
    }

    /// Combines two rules with logical AND.
    pub fn and(self, other: Self) -> Self {
        let name = format!("{} && {}", self.name, other.name);
        let (lhs, rhs) = (self.predicate, other.predicate);
        Self::new(name, move |value: &V| lhs(value) && rhs(value))
    }

    /// Combines two rules with logical OR.
    pub fn or(self, other: Self) -> Self {
        let name = format!("{} || {}", self.name, other.name);
        let (lhs, rhs) = (self.predicate, other.predicate);
        Self::new(name, move |value: &V| lhs(value) || rhs(value))
    }
}

impl<V: ?Sized> Rule<V> {
    /// Attaches a message token, replacing any previous one.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Message>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Replaces the rule's name.
    #[must_use = "builder methods must be chained or built"]
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Evaluates the rule against a value.
    #[inline]
    pub fn evaluate(&self, value: &V) -> bool {
        (self.predicate)(value)
    }

    /// The rule's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rule's message token, if any.
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Returns `true` if both rules share the same predicate allocation.
    ///
    /// Clones of one rule compare equal; two independently built rules
    /// never do, even when they behave the same.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.predicate, &other.predicate)
    }
}

impl<T: 'static> Rule<Option<T>> {
    /// Builds a rule over `Option<T>` with one rule per arm.
    ///
    /// `present` judges the wrapped value; `absent` decides the `None` case.
    /// The present rule's message is kept.
    ///
    /// ```rust
    /// use validated::foundation::Rule;
    /// use validated::rules::{always, greater};
    ///
    /// let age = Rule::optional(greater(17), always());
    /// assert!(age.evaluate(&Some(30)));
    /// assert!(!age.evaluate(&Some(12)));
    /// assert!(age.evaluate(&None));
    /// ```
    pub fn optional(present: Rule<T>, absent: Rule<()>) -> Self {
        let name = format!("optional({})", present.name);
        let message = present.message.clone();
        let rule = Self::new(name, move |value: &Option<T>| match value {
            Some(inner) => present.evaluate(inner),
            None => absent.evaluate(&()),
        });
        Self { message, ..rule }
    }
}

impl<V: ?Sized> Clone for Rule<V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            message: self.message.clone(),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<V: ?Sized> fmt::Debug for Rule<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl<V: ?Sized + 'static> Not for Rule<V> {
    type Output = Self;

    /// Inverts the rule. The message is dropped.
    fn not(self) -> Self {
        let name = format!("!{}", self.name);
        let inner = self.predicate;
        Self::new(name, move |value: &V| !inner(value))
    }
}

impl<V: ?Sized + 'static> BitAnd for Rule<V> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.and(rhs)
    }
}

impl<V: ?Sized + 'static> BitOr for Rule<V> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.or(rhs)
    }
}
