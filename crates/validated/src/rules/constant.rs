//! Constant rules.

use crate::foundation::Rule;

/// A rule that ignores its input and always returns `verdict`.
#[must_use]
pub fn constant<V: ?Sized + 'static>(verdict: bool) -> Rule<V> {
    Rule::new("constant", move |_: &V| verdict)
}

/// A rule that accepts everything.
#[must_use]
pub fn always<V: ?Sized + 'static>() -> Rule<V> {
    constant(true).named("always")
}

/// A rule that rejects everything.
///
/// Also the default fallback when a pattern fails to compile and the
/// default verdict for an absent optional value.
#[must_use]
pub fn never<V: ?Sized + 'static>() -> Rule<V> {
    constant(false).named("never")
}
