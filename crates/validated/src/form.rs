//! Gating an action on several fields.
//!
//! A login form holds one container per field and enables its submit
//! button only when every field passes. [`Validatable`] abstracts over
//! [`Validated`] and [`SharedValidated`] so fields of different value
//! types can be checked together.
//!
//! ```rust
//! use validated::form::{all_valid, collect_messages};
//! use validated::rules::{is_email, length};
//! use validated::Validated;
//!
//! let mail = Validated::with_rule("user@example.com".to_string(), is_email());
//! let password = Validated::with_rule(
//!     "short".to_string(),
//!     length::<String, _>(8..).with_message("password.too_short"),
//! );
//!
//! assert!(!all_valid(&[&mail, &password]));
//! assert_eq!(collect_messages(&[&mail, &password])[0].as_str(), "password.too_short");
//! ```

use crate::container::Validated;
use crate::foundation::Message;
use crate::shared::SharedValidated;

/// Anything that exposes a validation verdict.
pub trait Validatable {
    /// Current verdict.
    fn is_valid(&self) -> bool;

    /// Message tokens of the currently failing rules.
    fn failed_messages(&self) -> Vec<Message>;
}

impl<V> Validatable for Validated<V> {
    fn is_valid(&self) -> bool {
        Validated::is_valid(self)
    }

    fn failed_messages(&self) -> Vec<Message> {
        Validated::failed_messages(self).cloned().collect()
    }
}

impl<V> Validatable for SharedValidated<V> {
    fn is_valid(&self) -> bool {
        SharedValidated::is_valid(self)
    }

    fn failed_messages(&self) -> Vec<Message> {
        SharedValidated::failed_messages(self)
    }
}

impl<T: Validatable + ?Sized> Validatable for &T {
    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }

    fn failed_messages(&self) -> Vec<Message> {
        (**self).failed_messages()
    }
}

/// `true` when every field is valid. An empty form is valid.
pub fn all_valid(fields: &[&dyn Validatable]) -> bool {
    fields.iter().all(Validatable::is_valid)
}

/// Failure messages of every field, in field order.
pub fn collect_messages(fields: &[&dyn Validatable]) -> Vec<Message> {
    fields
        .iter()
        .flat_map(Validatable::failed_messages)
        .collect()
}
