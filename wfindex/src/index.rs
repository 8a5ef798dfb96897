//! The file index produced by one discovery call.

use std::collections::BTreeMap;

use serde::Serialize;

/// How a file participates in the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileRole {
    /// The entry point whose path started discovery.
    PrimaryDescriptor,
    /// Pulled in by an import directive or by the folder convention.
    ImportedDescriptor,
    /// A test parameter file.
    TestParameterFile,
    /// Anything else.
    Other,
}

/// One discovered file. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    path: String,
    content: String,
    role: FileRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    declared_version: Option<String>,
}

impl FileRecord {
    #[must_use]
    pub fn new(path: impl Into<String>, content: impl Into<String>, role: FileRole) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            role,
            declared_version: None,
        }
    }

    /// Attach a language-version hint.
    #[must_use]
    pub fn with_declared_version(mut self, version: impl Into<String>) -> Self {
        self.declared_version = Some(version.into());
        self
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw file text, exactly as the reader returned it.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn role(&self) -> FileRole {
        self.role
    }

    #[must_use]
    pub fn declared_version(&self) -> Option<&str> {
        self.declared_version.as_deref()
    }
}

/// Files discovered for one workflow, keyed by path.
///
/// Created fresh per indexing call; the first record added under a path wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FileIndex {
    files: BTreeMap<String, FileRecord>,
}

impl FileIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `record` unless its path is already indexed.
    ///
    /// Returns `true` if the record was added.
    pub fn add(&mut self, record: FileRecord) -> bool {
        if self.files.contains_key(record.path()) {
            return false;
        }
        self.files.insert(record.path.clone(), record);
        true
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&FileRecord> {
        self.files.get(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Indexed paths in lexical order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileRecord> {
        self.files.values()
    }

    /// Records with the given role.
    pub fn with_role(&self, role: FileRole) -> impl Iterator<Item = &FileRecord> {
        self.files.values().filter(move |record| record.role == role)
    }
}

impl FromIterator<FileRecord> for FileIndex {
    fn from_iter<I: IntoIterator<Item = FileRecord>>(iter: I) -> Self {
        let mut index = Self::new();
        for record in iter {
            index.add(record);
        }
        index
    }
}

impl<'a> IntoIterator for &'a FileIndex {
    type Item = &'a FileRecord;
    type IntoIter = std::collections::btree_map::Values<'a, String, FileRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.values()
    }
}
