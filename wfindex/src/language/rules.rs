//! Indexing and validation rules a language policy is assembled from.

use tracing::warn;

use crate::convention::{ScanStep, run_steps};
use crate::error::IndexError;
use crate::index::{FileIndex, FileRecord, FileRole};
use crate::lines::descriptor_lines;
use crate::path;
use crate::reader::FileReader;
use crate::verdict::ValidationVerdict;

/// Diagnostic recorded against the descriptor for a line with no known keyword.
pub const UNKNOWN_KEYWORD_MESSAGE: &str = "unknown keyword";

/// How the files of a workflow are discovered.
#[derive(Debug, Clone, Copy)]
pub enum IndexingRule {
    /// Every descriptor line starting with `keyword` names a file to pull in.
    ImportDirectives { keyword: &'static str },
    /// Walk a folder-convention table.
    FolderConvention(&'static [ScanStep]),
}

impl IndexingRule {
    pub(crate) fn apply(
        self,
        initial_path: &str,
        contents: &str,
        reader: &dyn FileReader,
        index: &mut FileIndex,
    ) -> Result<(), IndexError> {
        match self {
            Self::ImportDirectives { keyword } => index_imports(keyword, contents, reader, index),
            Self::FolderConvention(steps) => run_steps(steps, initial_path, reader, index),
        }
    }
}

/// Read every file named by an import directive in `contents`.
///
/// The target is the second whitespace-separated token of the line. Imported
/// files are not scanned for further imports.
fn index_imports(
    keyword: &str,
    contents: &str,
    reader: &dyn FileReader,
    index: &mut FileIndex,
) -> Result<(), IndexError> {
    for line in descriptor_lines(contents) {
        if !line.starts_with(keyword) {
            continue;
        }
        let Some(target) = line.split_whitespace().nth(1) else {
            warn!(line, "Import directive without a target, skipping");
            continue;
        };
        if index.contains(target) {
            continue;
        }
        let content = reader
            .read_file(target)
            .map_err(|source| IndexError::Import {
                path: target.to_owned(),
                source,
            })?;
        index.add(FileRecord::new(target, content, FileRole::ImportedDescriptor));
    }
    Ok(())
}

/// One structural check over a workflow set.
#[derive(Debug, Clone, Copy)]
pub enum SetRule {
    /// Every descriptor line must start with one of these keywords.
    LineKeywords(&'static [&'static str]),
    /// The initial path must equal one of these forms, ignoring case.
    PathShape {
        canonical: &'static [&'static str],
        message: &'static str,
    },
    /// This file must be present at the repository root.
    MarkerFile {
        name: &'static str,
        message: &'static str,
    },
}

impl SetRule {
    pub(crate) fn check(
        self,
        initial_path: &str,
        contents: &str,
        index: &FileIndex,
        verdict: &mut ValidationVerdict,
    ) {
        match self {
            Self::LineKeywords(keywords) => {
                for line in descriptor_lines(contents) {
                    if !keywords.iter().any(|keyword| line.starts_with(*keyword)) {
                        verdict.reject(initial_path, UNKNOWN_KEYWORD_MESSAGE);
                    }
                }
            }
            Self::PathShape { canonical, message } => {
                if !canonical
                    .iter()
                    .any(|form| form.eq_ignore_ascii_case(initial_path))
                {
                    verdict.reject(initial_path, message);
                }
            }
            Self::MarkerFile { name, message } => {
                let rooted = path::rooted(name);
                if !index.contains(name) && !index.contains(&rooted) {
                    verdict.reject(rooted, message);
                }
            }
        }
    }
}
