//! # wfindex
//!
//! Workflow file discovery and structural validation.
//!
//! Given the path of a workflow's primary descriptor, its text, and a
//! [`FileReader`] over the repository that holds it, a [`WorkflowLanguage`]
//! discovers every file that conventionally belongs to the workflow and checks
//! that the discovered set has the shape the language expects.
//!
//! The reader is the only way this crate touches files. It is expected to be
//! backed by something slow or rate-limited, so discovery lists directories and
//! reads only what the listings return.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wfindex::{FileReader, LanguageRegistry, ReadError};
//!
//! struct Repo;
//!
//! impl FileReader for Repo {
//!     fn read_file(&self, path: &str) -> Result<String, ReadError> {
//!         Err(ReadError::NotFound { path: path.to_owned() })
//!     }
//!     fn list_files(&self, _directory: &str) -> Option<Vec<String>> {
//!         None
//!     }
//! }
//!
//! let registry = LanguageRegistry::builtin().unwrap();
//! let language = registry.detect("/workflow/Snakefile").unwrap();
//! let index = language
//!     .index_workflow_files("/workflow/Snakefile", "rule all:", &Repo)
//!     .unwrap();
//! let verdict = language.validate_workflow_set("/workflow/Snakefile", "rule all:", &index);
//! println!("{} files, valid: {}", index.len(), verdict.valid);
//! ```

mod config;
pub mod convention;
mod error;
mod index;
pub mod language;
mod lines;
mod metadata;
pub mod path;
mod reader;
mod registry;
pub mod scanner;
mod verdict;

#[cfg(test)]
mod test_support;

pub use config::RegistryConfig;
pub use error::{IndexError, ReadError, RegistryError};
pub use index::{FileIndex, FileRecord, FileRole};
pub use language::{IndexingRule, LanguagePolicy, SetRule, WorkflowLanguage};
pub use metadata::{MetadataRule, WorkflowMetadata};
pub use reader::FileReader;
pub use registry::{BUILTIN_LANGUAGES, LanguageRegistry, builtin_policy};
pub use verdict::ValidationVerdict;
