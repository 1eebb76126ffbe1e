//! Error types.
//!
//! Normal validation never raises: a rule that rejects a value is recorded
//! in `failed_rules`. These errors only appear at the edges, when a caller
//! asks for them explicitly.

use crate::foundation::{Message, Rule};

/// A rule could not be built.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// The regular expression did not compile.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The rejected pattern text.
        pattern: String,
        /// The underlying parser error.
        #[source]
        source: regex::Error,
    },
}

impl RuleError {
    pub(crate) fn invalid_pattern(pattern: &str, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        }
    }
}

/// The tracked value was requested through a gate and is not valid.
///
/// Returned by [`Validated::try_value`](crate::Validated::try_value). Carries
/// the names and messages of the rules that rejected the value, in
/// evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("value rejected by {} rule(s): {}", .rules.len(), .rules.join(", "))]
pub struct ValidationFailed {
    /// Names of the failing rules.
    pub rules: Vec<String>,
    /// Message tokens of the failing rules that carry one.
    pub messages: Vec<Message>,
}

impl ValidationFailed {
    pub(crate) fn from_rules<V: ?Sized>(failed: &[Rule<V>]) -> Self {
        Self {
            rules: failed
                .iter()
                .map(|rule| rule.name().to_owned())
                .collect(),
            messages: failed.iter().filter_map(Rule::message).cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_pattern_display() {
        let pattern = String::from("(");
        let source = regex::Regex::new(&pattern).unwrap_err();
        let error = RuleError::invalid_pattern(&pattern, source);
        assert!(error.to_string().starts_with("invalid pattern `(`"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn validation_failed_lists_rules() {
        let failed = vec![
            Rule::new("is_empty", |s: &String| s.is_empty()).with_message("empty"),
            Rule::new("is_email", |_: &String| false),
        ];
        let error = ValidationFailed::from_rules(&failed);
        assert_eq!(error.to_string(), "value rejected by 2 rule(s): is_empty, is_email");
        assert_eq!(error.messages, vec![Message::from("empty")]);
    }
}
