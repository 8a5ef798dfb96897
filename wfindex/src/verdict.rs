//! Validation verdicts.

use std::collections::BTreeMap;

use serde::Serialize;

/// Outcome of a structural validation.
///
/// Holds at most one message per path: rejecting the same path twice keeps
/// only the later message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct ValidationVerdict {
    /// Whether every rule passed.
    pub valid: bool,
    /// Diagnostic per offending path.
    pub messages: BTreeMap<String, String>,
}

impl ValidationVerdict {
    /// A passing verdict with no messages.
    #[must_use]
    pub fn valid() -> Self {
        Self {
            valid: true,
            messages: BTreeMap::new(),
        }
    }

    /// A failing verdict with one message.
    #[must_use]
    pub fn invalid(path: impl Into<String>, message: impl Into<String>) -> Self {
        let mut verdict = Self::valid();
        verdict.reject(path, message);
        verdict
    }

    /// Mark the verdict invalid and record `message` for `path`, replacing any
    /// earlier message for that path.
    pub fn reject(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.messages.insert(path.into(), message.into());
    }

    /// Fold another verdict into this one.
    pub fn merge(&mut self, other: Self) {
        self.valid &= other.valid;
        self.messages.extend(other.messages);
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    #[must_use]
    pub fn message(&self, path: &str) -> Option<&str> {
        self.messages.get(path).map(String::as_str)
    }
}

impl Default for ValidationVerdict {
    fn default() -> Self {
        Self::valid()
    }
}
