//! Opaque message tokens attached to rules.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A display token carried by a [`Rule`](super::Rule).
///
/// The core never interprets it. A UI layer typically treats it as a
/// localization key and looks up the text shown next to a failing field.
///
/// Uses `Cow<'static, str>` so the common case of a static key does not
/// allocate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Message(Cow<'static, str>);

impl Message {
    /// Creates a message token.
    pub fn new(token: impl Into<Cow<'static, str>>) -> Self {
        Self(token.into())
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extracts the underlying token.
    #[must_use]
    pub fn into_inner(self) -> Cow<'static, str> {
        self.0
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Message {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Message {
    fn from(token: &'static str) -> Self {
        Self(Cow::Borrowed(token))
    }
}

impl From<String> for Message {
    fn from(token: String) -> Self {
        Self(Cow::Owned(token))
    }
}

impl From<Cow<'static, str>> for Message {
    fn from(token: Cow<'static, str>) -> Self {
        Self(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_token_is_borrowed() {
        let msg = Message::from("mail.invalid");
        assert!(matches!(msg.into_inner(), Cow::Borrowed("mail.invalid")));
    }

    #[test]
    fn display_is_the_raw_token() {
        let msg = Message::new(format!("password.min_{}", 8));
        assert_eq!(msg.to_string(), "password.min_8");
        assert_eq!(msg.as_str(), "password.min_8");
    }

    #[test]
    fn serializes_as_plain_string() {
        let msg = Message::from("required");
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, "\"required\"");

        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }
}
