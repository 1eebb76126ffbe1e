//! String content and pattern rules.
//!
//! All factories are generic over `S: AsRef<str>`, so the same rule works
//! for `String`, `&str`, `Cow<str>` and `str`.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::RuleError;
use crate::foundation::Rule;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

// ============================================================================
// SUBSTRINGS
// ============================================================================

/// String contains `needle`.
#[must_use]
pub fn contains<S>(needle: impl Into<String>) -> Rule<S>
where
    S: AsRef<str> + ?Sized + 'static,
{
    let needle = needle.into();
    Rule::new("contains", move |value: &S| value.as_ref().contains(&needle))
}

/// String contains `needle`, ignoring case.
///
/// # Examples
///
/// ```
/// use validated::rules::contains_ignore_case;
///
/// let rule = contains_ignore_case::<str>("Rust");
/// assert!(rule.evaluate("I like rust"));
/// assert!(!rule.evaluate("I like go"));
/// ```
#[must_use]
pub fn contains_ignore_case<S>(needle: impl Into<String>) -> Rule<S>
where
    S: AsRef<str> + ?Sized + 'static,
{
    let needle = needle.into().to_lowercase();
    Rule::new("contains_ignore_case", move |value: &S| {
        value.as_ref().to_lowercase().contains(&needle)
    })
}

/// String starts with `prefix`.
#[must_use]
pub fn has_prefix<S>(prefix: impl Into<String>) -> Rule<S>
where
    S: AsRef<str> + ?Sized + 'static,
{
    let prefix = prefix.into();
    Rule::new("has_prefix", move |value: &S| {
        value.as_ref().starts_with(&prefix)
    })
}

/// String ends with `suffix`.
#[must_use]
pub fn has_suffix<S>(suffix: impl Into<String>) -> Rule<S>
where
    S: AsRef<str> + ?Sized + 'static,
{
    let suffix = suffix.into();
    Rule::new("has_suffix", move |value: &S| value.as_ref().ends_with(&suffix))
}

// ============================================================================
// PATTERNS
// ============================================================================

/// String contains a match of a compiled regular expression.
///
/// The match is unanchored; use `^...$` in the pattern to require a full
/// match.
#[must_use]
pub fn matches<S>(regex: Regex) -> Rule<S>
where
    S: AsRef<str> + ?Sized + 'static,
{
    Rule::new("pattern", move |value: &S| regex.is_match(value.as_ref()))
}

/// Compiles `pattern` into a rule, reporting a bad pattern to the caller.
pub fn try_pattern<S>(pattern: &str) -> Result<Rule<S>, RuleError>
where
    S: AsRef<str> + ?Sized + 'static,
{
    Regex::new(pattern)
        .map(matches)
        .map_err(|source| RuleError::invalid_pattern(pattern, source))
}

/// Compiles `pattern` into a rule; a bad pattern yields a rule that
/// rejects every value.
///
/// # Examples
///
/// ```
/// use validated::rules::pattern;
///
/// let zip = pattern::<str>(r"^\d{5}$");
/// assert!(zip.evaluate("12345"));
/// assert!(!zip.evaluate("1234"));
///
/// let broken = pattern::<str>("(unclosed");
/// assert!(!broken.evaluate("anything"));
/// ```
#[must_use]
pub fn pattern<S>(pattern: &str) -> Rule<S>
where
    S: AsRef<str> + ?Sized + 'static,
{
    pattern_or(pattern, super::never())
}

/// Compiles `pattern` into a rule; a bad pattern yields a rule that
/// answers with `fallback` for every value.
#[must_use]
pub fn pattern_or<S>(pattern: &str, fallback: Rule<()>) -> Rule<S>
where
    S: AsRef<str> + ?Sized + 'static,
{
    match try_pattern(pattern) {
        Ok(rule) => rule,
        Err(error) => {
            tracing::warn!(%error, fallback = fallback.name(), "substituting fallback rule for invalid pattern");
            Rule::new("pattern", move |_: &S| fallback.evaluate(&()))
        }
    }
}

/// String is a plausible mail address.
///
/// # Examples
///
/// ```
/// use validated::rules::is_email;
///
/// let rule = is_email::<str>();
/// assert!(rule.evaluate("user@example.com"));
/// assert!(!rule.evaluate("not-an-email"));
/// ```
#[must_use]
pub fn is_email<S>() -> Rule<S>
where
    S: AsRef<str> + ?Sized + 'static,
{
    Rule::new("is_email", |value: &S| EMAIL_REGEX.is_match(value.as_ref()))
}
