//! # validated
//!
//! Reactive value validation: attach predicate [`Rule`]s to a tracked value,
//! re-run them on every write, and read back the aggregate validity and the
//! list of failing rules.
//!
//! ## Quick Start
//!
//! ```rust
//! use validated::prelude::*;
//!
//! let mut mail = Validated::new(String::new(), vec![!is_empty(), is_email()]);
//! assert!(!mail.is_valid());
//!
//! mail.set("user@example.com".to_string());
//! assert!(mail.is_valid());
//! assert!(mail.failed_rules().is_empty());
//! ```
//!
//! ## Building Blocks
//!
//! - [`Rule`](foundation::Rule): an immutable predicate plus an optional
//!   [`Message`](foundation::Message) token.
//! - [`rules`]: factories for common rules (ordering, length, string
//!   content, patterns, divisibility, dates).
//! - [`Validated`](container::Validated): the container that keeps
//!   `is_valid` / `failed_rules` consistent with its value and notifies
//!   observers once per mutation.
//! - [`SharedValidated`](shared::SharedValidated): a lock-guarded handle for
//!   environments with more than one writer.
//! - [`form`]: gate a submit action on several fields at once.

pub mod binding;
pub mod config;
pub mod container;
pub mod error;
pub mod form;
pub mod foundation;
pub mod prelude;
pub mod rules;
pub mod shared;

pub use config::{Aggregation, ValidatedConfig};
pub use container::{Change, ObserverId, Snapshot, Validated};
pub use error::{RuleError, ValidationFailed};
pub use foundation::{Message, Rule};
pub use shared::SharedValidated;
