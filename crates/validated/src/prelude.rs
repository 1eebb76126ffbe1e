//! Prelude module for convenient imports.
//!
//! `use validated::prelude::*;` brings in the container types, the rule
//! type and every built-in rule factory.
//!
//! # Examples
//!
//! ```rust
//! use validated::prelude::*;
//!
//! let mut password = Validated::with_rule(String::new(), length(8..));
//! password.set("correct horse".to_string());
//! assert!(password.is_valid());
//! ```

// ============================================================================
// FOUNDATION
// ============================================================================

pub use crate::foundation::{Message, Rule};

// ============================================================================
// CONTAINERS
// ============================================================================

pub use crate::binding::{Binding, SharedBinding};
pub use crate::config::{Aggregation, ValidatedConfig};
pub use crate::container::{Change, ObserverId, Snapshot, Validated};
pub use crate::error::{RuleError, ValidationFailed};
pub use crate::form::{Validatable, all_valid, collect_messages};
pub use crate::shared::SharedValidated;

// ============================================================================
// RULES
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::rules::*;
