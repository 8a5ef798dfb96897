//! `FileReader` over a repository checked out on local disk.
//!
//! Properties enforced here:
//! - Repository paths containing `..` never resolve (no escaping the root)
//! - Listings contain regular files only; sub-directories and symlinks are skipped
//! - Bounded reads: a file larger than `max_file_size` is refused, not truncated
//! - Content must be UTF-8

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use tracing::{trace, warn};
use walkdir::WalkDir;
use wfindex::{FileReader, ReadError};

/// Default per-file size limit: 10 MB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10_485_760;

/// Serves repository paths (`/workflow/Snakefile`) from a directory on disk.
#[derive(Debug, Clone)]
pub struct LocalFileReader {
    root: PathBuf,
    max_file_size: u64,
}

impl LocalFileReader {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    #[must_use]
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a repository path onto the checkout. `None` if it would leave the root.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let mut resolved = self.root.clone();
        for part in path.split('/') {
            match part {
                "" | "." => {}
                ".." => return None,
                part => resolved.push(part),
            }
        }
        Some(resolved)
    }
}

impl FileReader for LocalFileReader {
    fn read_file(&self, path: &str) -> Result<String, ReadError> {
        let not_found = || ReadError::NotFound {
            path: path.to_owned(),
        };
        let full = self.resolve(path).ok_or_else(not_found)?;

        let file = match File::open(&full) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(not_found()),
            Err(e) => {
                return Err(ReadError::Io {
                    path: path.to_owned(),
                    source: e,
                });
            }
        };

        // Read at most max_file_size + 1 bytes to detect oversized files
        let mut buffer = Vec::new();
        file.take(self.max_file_size + 1)
            .read_to_end(&mut buffer)
            .map_err(|e| ReadError::Io {
                path: path.to_owned(),
                source: e,
            })?;

        if buffer.len() as u64 > self.max_file_size {
            return Err(ReadError::Unavailable {
                path: path.to_owned(),
                message: format!("File exceeds maximum size of {} bytes", self.max_file_size),
            });
        }

        trace!(path, bytes = buffer.len(), "Read file");
        String::from_utf8(buffer).map_err(|_| ReadError::Unavailable {
            path: path.to_owned(),
            message: "File is not valid UTF-8".to_owned(),
        })
    }

    fn list_files(&self, directory: &str) -> Option<Vec<String>> {
        let dir = self.resolve(directory)?;
        if !dir.is_dir() {
            return None;
        }

        let mut names = Vec::new();
        for entry_result in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
        {
            let entry = match entry_result {
                Ok(e) => e,
                Err(walk_err) => {
                    warn!(directory, error = %walk_err, "Directory listing error");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_owned());
            } else {
                warn!(directory, name = ?entry.file_name(), "Skipping non UTF-8 file name");
            }
        }
        names.sort();
        Some(names)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn checkout() -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("workflow/rules")).unwrap();
        fs::write(tmp.path().join("README.md"), "# readme").unwrap();
        fs::write(tmp.path().join("workflow/Snakefile"), "rule all:").unwrap();
        fs::write(tmp.path().join("workflow/rules/align.smk"), "rule align:").unwrap();
        tmp
    }

    #[test]
    fn test_read_rooted_path() {
        let tmp = checkout();
        let reader = LocalFileReader::new(tmp.path());
        assert_eq!(reader.read_file("/workflow/Snakefile").unwrap(), "rule all:");
        assert_eq!(reader.read_file("workflow//Snakefile").unwrap(), "rule all:");
    }

    #[test]
    fn test_read_missing_is_not_found() {
        let tmp = checkout();
        let reader = LocalFileReader::new(tmp.path());
        assert!(reader.read_file("/nope.txt").unwrap_err().is_not_found());
    }

    #[test]
    fn test_parent_components_never_resolve() {
        let tmp = checkout();
        let reader = LocalFileReader::new(tmp.path().join("workflow"));
        assert!(reader.read_file("/../README.md").unwrap_err().is_not_found());
        assert_eq!(reader.list_files("/.."), None);
    }

    #[test]
    fn test_read_oversized_file_refused() {
        let tmp = checkout();
        let reader = LocalFileReader::new(tmp.path()).with_max_file_size(3);
        let err = reader.read_file("/README.md").unwrap_err();
        assert!(matches!(err, ReadError::Unavailable { .. }));
        assert!(err.to_string().contains("maximum size"));
    }

    #[test]
    fn test_read_non_utf8_refused() {
        let tmp = checkout();
        fs::write(tmp.path().join("blob.bin"), [0xff, 0xfe, 0x00]).unwrap();
        let reader = LocalFileReader::new(tmp.path());
        let err = reader.read_file("/blob.bin").unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn test_list_files_only() {
        let tmp = checkout();
        let reader = LocalFileReader::new(tmp.path());
        assert_eq!(reader.list_files("/").unwrap(), vec!["README.md"]);
        assert_eq!(reader.list_files("/workflow").unwrap(), vec!["Snakefile"]);
        assert_eq!(reader.list_files("/workflow/rules").unwrap(), vec!["align.smk"]);
    }

    #[test]
    fn test_list_missing_directory_is_none() {
        let tmp = checkout();
        let reader = LocalFileReader::new(tmp.path());
        assert_eq!(reader.list_files("/config"), None);
        assert_eq!(reader.list_files("/README.md"), None);
    }
}
