//! Container configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a container folds individual rule verdicts into `is_valid`.
///
/// Both policies record every failing rule in `failed_rules`; they differ
/// only in the aggregate flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    /// `is_valid` is the verdict of the last rule evaluated.
    ///
    /// Earlier failures still show up in `failed_rules`. This is the
    /// compatibility behavior and the default.
    #[default]
    LastRule,
    /// `is_valid` is the logical AND of every rule.
    AllRules,
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LastRule => write!(f, "last-rule"),
            Self::AllRules => write!(f, "all-rules"),
        }
    }
}

/// Configuration for a [`Validated`](crate::Validated) container.
///
/// Deserializable so host applications can keep the policy in their own
/// config files:
///
/// ```rust
/// use validated::{Aggregation, ValidatedConfig};
///
/// let config: ValidatedConfig = serde_json::from_str(r#"{ "aggregation": "all_rules" }"#).unwrap();
/// assert_eq!(config.aggregation, Aggregation::AllRules);
///
/// let config: ValidatedConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(config, ValidatedConfig::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatedConfig {
    /// Verdict folding policy.
    pub aggregation: Aggregation,
}

impl ValidatedConfig {
    /// Creates the default configuration (`Aggregation::LastRule`).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            aggregation: Aggregation::LastRule,
        }
    }

    /// Configuration where every rule must pass.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            aggregation: Aggregation::AllRules,
        }
    }

    /// Sets the aggregation policy.
    #[must_use]
    pub const fn with_aggregation(mut self, aggregation: Aggregation) -> Self {
        self.aggregation = aggregation;
        self
    }
}
