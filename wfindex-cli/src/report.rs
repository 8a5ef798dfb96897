//! Report types printed by the CLI.

use serde::Serialize;
use wfindex::{FileIndex, FileRole, ValidationVerdict, WorkflowMetadata};

/// Files discovered for one workflow.
#[derive(Debug, Serialize)]
pub struct IndexReport<'a> {
    pub language: &'a str,
    pub initial_path: &'a str,
    pub files: &'a FileIndex,
}

impl IndexReport<'_> {
    /// Number of files of a given role.
    #[must_use]
    pub fn count(&self, role: FileRole) -> usize {
        self.files.with_role(role).count()
    }
}

/// Result of validating a workflow.
///
/// `valid` holds only if both the workflow set and the test parameter set passed.
#[derive(Debug, Serialize)]
pub struct ValidationReport<'a> {
    pub language: &'a str,
    pub initial_path: &'a str,
    pub files_indexed: usize,
    pub valid: bool,
    pub workflow_set: ValidationVerdict,
    pub test_parameter_set: ValidationVerdict,
}

impl<'a> ValidationReport<'a> {
    #[must_use]
    pub fn new(
        language: &'a str,
        initial_path: &'a str,
        files_indexed: usize,
        workflow_set: ValidationVerdict,
        test_parameter_set: ValidationVerdict,
    ) -> Self {
        Self {
            language,
            initial_path,
            files_indexed,
            valid: workflow_set.valid && test_parameter_set.valid,
            workflow_set,
            test_parameter_set,
        }
    }
}

/// Descriptive metadata for one workflow.
#[derive(Debug, Serialize)]
pub struct MetadataReport<'a> {
    pub language: &'a str,
    pub initial_path: &'a str,
    #[serde(flatten)]
    pub metadata: WorkflowMetadata,
}

/// One enabled language.
#[derive(Debug, Serialize)]
pub struct LanguageEntry<'a> {
    pub short_name: &'a str,
    pub long_name: &'a str,
}
