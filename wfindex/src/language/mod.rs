//! Workflow languages.
//!
//! [`WorkflowLanguage`] is the contract every supported description language
//! satisfies. The built-in languages are all [`LanguagePolicy`] values: one
//! generic implementation driven by data (a path pattern, an indexing rule,
//! a list of set rules and a metadata rule). Adding a language means adding a
//! policy, not another code path.

pub mod rules;
pub mod snakemake;
pub mod swl;

use regex::Regex;
use tracing::info;

use crate::error::IndexError;
use crate::index::{FileIndex, FileRecord, FileRole};
use crate::metadata::{MetadataRule, WorkflowMetadata};
use crate::reader::FileReader;
use crate::verdict::ValidationVerdict;

pub use rules::{IndexingRule, SetRule};

/// Discovery and structural validation for one workflow description language.
///
/// Every call is a pure function of its arguments plus what the reader
/// returns; implementations hold no per-call state.
pub trait WorkflowLanguage: Send + Sync {
    /// Short identifier, e.g. `SMK`.
    fn short_name(&self) -> &str;

    /// Human-readable name.
    fn long_name(&self) -> &str;

    /// Whether `initial_path` looks like a primary descriptor of this language.
    fn matches_initial_path(&self, initial_path: &str) -> bool;

    /// Discover every file that belongs to the workflow rooted at `initial_path`.
    ///
    /// The returned index always holds `initial_path` with `contents` unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if a file the descriptor explicitly requires
    /// cannot be read, or if a discovered file exists but the reader fails on it.
    fn index_workflow_files(
        &self,
        initial_path: &str,
        contents: &str,
        reader: &dyn FileReader,
    ) -> Result<FileIndex, IndexError>;

    /// Check the discovered file set. Never fails; problems are reported in the verdict.
    fn validate_workflow_set(
        &self,
        initial_path: &str,
        contents: &str,
        index: &FileIndex,
    ) -> ValidationVerdict;

    /// Check the test parameter files of the set.
    fn validate_test_parameter_set(&self, index: &FileIndex) -> ValidationVerdict;

    /// Extract author/description metadata from the descriptor.
    fn parse_metadata(
        &self,
        initial_path: &str,
        contents: &str,
        index: &FileIndex,
    ) -> WorkflowMetadata;
}

/// A language described entirely by data.
#[derive(Debug, Clone)]
pub struct LanguagePolicy {
    short_name: &'static str,
    long_name: &'static str,
    initial_path_pattern: Regex,
    primary_version: Option<&'static str>,
    indexing: IndexingRule,
    set_rules: Vec<SetRule>,
    metadata: MetadataRule,
}

impl LanguagePolicy {
    /// Build a policy with no set rules and space-separated metadata.
    ///
    /// `initial_path_pattern` must match a whole path; anchor it with `^...$`.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial_path_pattern` is not a valid regex.
    pub fn new(
        short_name: &'static str,
        long_name: &'static str,
        initial_path_pattern: &str,
        indexing: IndexingRule,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            short_name,
            long_name,
            initial_path_pattern: Regex::new(initial_path_pattern)?,
            primary_version: None,
            indexing,
            set_rules: Vec::new(),
            metadata: MetadataRule::SpaceSeparated,
        })
    }

    #[must_use]
    pub fn with_set_rule(mut self, rule: SetRule) -> Self {
        self.set_rules.push(rule);
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, rule: MetadataRule) -> Self {
        self.metadata = rule;
        self
    }

    /// Version hint recorded on the primary descriptor.
    #[must_use]
    pub fn with_primary_version(mut self, version: &'static str) -> Self {
        self.primary_version = Some(version);
        self
    }
}

impl WorkflowLanguage for LanguagePolicy {
    fn short_name(&self) -> &str {
        self.short_name
    }

    fn long_name(&self) -> &str {
        self.long_name
    }

    fn matches_initial_path(&self, initial_path: &str) -> bool {
        self.initial_path_pattern.is_match(initial_path)
    }

    fn index_workflow_files(
        &self,
        initial_path: &str,
        contents: &str,
        reader: &dyn FileReader,
    ) -> Result<FileIndex, IndexError> {
        let mut primary = FileRecord::new(initial_path, contents, FileRole::PrimaryDescriptor);
        if let Some(version) = self.primary_version {
            primary = primary.with_declared_version(version);
        }

        let mut index = FileIndex::new();
        index.add(primary);
        self.indexing
            .apply(initial_path, contents, reader, &mut index)?;

        info!(
            language = self.short_name,
            initial_path,
            files = index.len(),
            "Indexed workflow files"
        );
        Ok(index)
    }

    fn validate_workflow_set(
        &self,
        initial_path: &str,
        contents: &str,
        index: &FileIndex,
    ) -> ValidationVerdict {
        let mut verdict = ValidationVerdict::valid();
        for rule in &self.set_rules {
            rule.check(initial_path, contents, index, &mut verdict);
        }
        verdict
    }

    fn validate_test_parameter_set(&self, _index: &FileIndex) -> ValidationVerdict {
        // No rules for test parameter files yet.
        ValidationVerdict::valid()
    }

    fn parse_metadata(
        &self,
        _initial_path: &str,
        contents: &str,
        _index: &FileIndex,
    ) -> WorkflowMetadata {
        self.metadata.extract(contents)
    }
}
