//! The file access capability consumed by indexing.
//!
//! Implementations model a possibly remote and rate-limited content source
//! (a hosted git repository, an archive, a local checkout). Indexing always
//! lists a directory first and only reads names the listing returned; it never
//! probes candidate filenames.

use crate::error::ReadError;

/// Read/list access to a workflow repository.
///
/// Paths are `/`-separated and rooted at the repository root, e.g.
/// `/workflow/rules/align.smk`. The root directory itself is `/`.
pub trait FileReader {
    /// Read a file in full.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::NotFound`] if the file does not exist, or another
    /// [`ReadError`] if the source fails to serve it.
    fn read_file(&self, path: &str) -> Result<String, ReadError>;

    /// List the file names directly inside `directory`.
    ///
    /// Returns `None` when the directory does not exist. Must not fail for a
    /// missing directory.
    fn list_files(&self, directory: &str) -> Option<Vec<String>>;
}
