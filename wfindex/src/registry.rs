//! Explicit language registry.
//!
//! Hosts build a registry once at startup from a [`RegistryConfig`] and then
//! look languages up by short name or by initial path.

use tracing::debug;

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::language::{LanguagePolicy, WorkflowLanguage, snakemake, swl};

/// Short names of the languages shipped with this crate, in detection order.
pub const BUILTIN_LANGUAGES: &[&str] = &[snakemake::SHORT_NAME, swl::SHORT_NAME];

/// Build the built-in policy registered under `short_name` (case-insensitive).
///
/// # Errors
///
/// Returns [`RegistryError::UnknownLanguage`] if no built-in language has that name.
pub fn builtin_policy(short_name: &str) -> Result<LanguagePolicy, RegistryError> {
    if short_name.eq_ignore_ascii_case(snakemake::SHORT_NAME) {
        Ok(snakemake::policy()?)
    } else if short_name.eq_ignore_ascii_case(swl::SHORT_NAME) {
        Ok(swl::policy()?)
    } else {
        Err(RegistryError::UnknownLanguage(short_name.to_owned()))
    }
}

/// The set of languages a host has enabled.
#[derive(Default)]
pub struct LanguageRegistry {
    languages: Vec<Box<dyn WorkflowLanguage>>,
}

impl LanguageRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in language.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in policy fails to build.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_config(&RegistryConfig::default())
    }

    /// A registry holding the languages `config` enables.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownLanguage`] for a name that is not built in and
    /// [`RegistryError::DuplicateLanguage`] if a name is listed twice.
    pub fn from_config(config: &RegistryConfig) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        if config.enabled.is_empty() {
            for name in BUILTIN_LANGUAGES {
                registry.register(Box::new(builtin_policy(name)?))?;
            }
        } else {
            for name in &config.enabled {
                registry.register(Box::new(builtin_policy(name)?))?;
            }
        }
        debug!(languages = ?registry.short_names(), "Language registry ready");
        Ok(registry)
    }

    /// Add a language. Short names are unique, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateLanguage`] if the name is taken.
    pub fn register(&mut self, language: Box<dyn WorkflowLanguage>) -> Result<(), RegistryError> {
        if self.find(language.short_name()).is_some() {
            return Err(RegistryError::DuplicateLanguage(
                language.short_name().to_owned(),
            ));
        }
        self.languages.push(language);
        Ok(())
    }

    /// Look a language up by short name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownLanguage`] if it is not enabled.
    pub fn get(&self, short_name: &str) -> Result<&dyn WorkflowLanguage, RegistryError> {
        self.find(short_name)
            .ok_or_else(|| RegistryError::UnknownLanguage(short_name.to_owned()))
    }

    /// The first enabled language whose initial-path pattern matches.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NoMatchingLanguage`] if none matches.
    pub fn detect(&self, initial_path: &str) -> Result<&dyn WorkflowLanguage, RegistryError> {
        self.iter()
            .find(|language| language.matches_initial_path(initial_path))
            .ok_or_else(|| RegistryError::NoMatchingLanguage(initial_path.to_owned()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn WorkflowLanguage> {
        self.languages
            .iter()
            .map(|language| language.as_ref() as &dyn WorkflowLanguage)
    }

    #[must_use]
    pub fn short_names(&self) -> Vec<&str> {
        self.iter().map(WorkflowLanguage::short_name).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    fn find(&self, short_name: &str) -> Option<&dyn WorkflowLanguage> {
        self.iter()
            .find(|language| language.short_name().eq_ignore_ascii_case(short_name))
    }
}
