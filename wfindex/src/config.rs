//! Startup configuration for the language registry.

use serde::{Deserialize, Serialize};

/// Selects which built-in languages a host enables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[non_exhaustive]
pub struct RegistryConfig {
    /// Short names of the languages to enable, in detection order.
    /// Empty means every built-in language.
    pub enabled: Vec<String>,
}

impl RegistryConfig {
    /// Enable exactly these languages.
    #[must_use]
    pub fn with_enabled<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: languages.into_iter().map(Into::into).collect(),
        }
    }
}
