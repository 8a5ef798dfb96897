//! In-memory `FileReader` for unit tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use crate::error::ReadError;
use crate::path;
use crate::reader::FileReader;

/// A fake repository: files by rooted path, plus explicit directory listings.
///
/// Listings are kept separate from files so tests can model sources that list
/// names they cannot serve (sub-directories) or hide directories entirely.
#[derive(Default)]
pub struct MemoryReader {
    files: BTreeMap<String, String>,
    listings: BTreeMap<String, Vec<String>>,
    unavailable: BTreeSet<String>,
    pub listed: RefCell<Vec<String>>,
    pub read: RefCell<Vec<String>>,
}

impl MemoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_owned(), content.to_owned());
        self
    }

    /// A path the source knows about but refuses to serve.
    pub fn unavailable(mut self, path: &str) -> Self {
        self.unavailable.insert(path.to_owned());
        self
    }

    pub fn listing(mut self, directory: &str, names: &[&str]) -> Self {
        self.listings.insert(
            path::rooted(directory),
            names.iter().map(ToString::to_string).collect(),
        );
        self
    }
}

impl FileReader for MemoryReader {
    fn read_file(&self, path: &str) -> Result<String, ReadError> {
        self.read.borrow_mut().push(path.to_owned());
        if self.unavailable.contains(path) {
            return Err(ReadError::Unavailable {
                path: path.to_owned(),
                message: "rate limit exceeded".to_owned(),
            });
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| ReadError::NotFound {
                path: path.to_owned(),
            })
    }

    fn list_files(&self, directory: &str) -> Option<Vec<String>> {
        self.listed.borrow_mut().push(directory.to_owned());
        self.listings.get(directory).cloned()
    }
}
