//! Built-in rule factories.
//!
//! Each factory is a plain generic function returning a [`Rule`]; the
//! bounds on the value type say which capability it needs (`PartialEq`,
//! `PartialOrd`, [`Length`], `AsRef<str>`, `AsRef<[T]>`, [`Integer`]).
//! Attach a message with [`Rule::with_message`].
//!
//! # Categories
//!
//! - **Constant**: `constant`, `always`, `never`
//! - **Equality**: `equals`, `not_equals`, `one_of`
//! - **Ordering**: `less`, `less_or_equal`, `greater`, `greater_or_equal`, `in_range`
//! - **Length**: `is_empty`, `not_empty`, `length`
//! - **Sequence**: `contains_any`, `contains_all`, `starts_with`
//! - **String**: `contains`, `has_prefix`, `has_suffix`, `pattern`, `is_email`, ...
//! - **Numeric**: `is_multiple_of`
//! - **Temporal** (feature `temporal`): `is_future`, `is_past_day`, `is_same_day`, ...
//!
//! # Examples
//!
//! ```rust
//! use validated::rules::*;
//!
//! let age = greater_or_equal(18).with_message("age.adult");
//! let password = length::<String, _>(8..).with_message("password.short");
//! let mail = !is_empty::<String>() & is_email();
//!
//! assert!(age.evaluate(&21));
//! assert!(!password.evaluate(&"hunter2".to_string()));
//! assert!(mail.evaluate(&"user@example.com".to_string()));
//! ```
//!
//! [`Rule`]: crate::foundation::Rule
//! [`Rule::with_message`]: crate::foundation::Rule::with_message

pub mod comparison;
pub mod constant;
pub mod equality;
pub mod length;
pub mod numeric;
pub mod sequence;
pub mod string;
#[cfg(feature = "temporal")]
pub mod temporal;

pub use comparison::{greater, greater_or_equal, in_range, less, less_or_equal};
pub use constant::{always, constant, never};
pub use equality::{equals, not_equals, one_of};
pub use length::{Length, is_empty, length, not_empty};
pub use numeric::{Integer, is_multiple_of};
pub use sequence::{contains_all, contains_any, starts_with};
pub use string::{
    contains, contains_ignore_case, has_prefix, has_suffix, is_email, matches, pattern,
    pattern_or, try_pattern,
};
#[cfg(feature = "temporal")]
pub use temporal::{
    Clock, FixedClock, SystemClock, is_future, is_future_at, is_future_day, is_future_day_at,
    is_now, is_now_at, is_past, is_past_at, is_past_day, is_past_day_at, is_same_day,
    is_same_day_at,
};
