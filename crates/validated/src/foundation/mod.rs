//! Core rule types.
//!
//! - [`Rule`]: a named, immutable predicate with an optional message.
//! - [`Message`]: the opaque display token a rule carries.
//!
//! Rules compose with `!`, `&` and `|`:
//!
//! ```rust
//! use validated::rules::{has_suffix, is_empty};
//!
//! let rule = !is_empty::<String>() & has_suffix(".com");
//! assert!(rule.evaluate(&"example.com".to_string()));
//! assert!(!rule.evaluate(&String::new()));
//! ```

pub mod message;
pub mod rule;

pub use message::Message;
pub use rule::{Predicate, Rule};
