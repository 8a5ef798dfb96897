//! Folder conventions as data.
//!
//! A convention is an ordered table of [`ScanStep`]s. [`run_steps`] walks the
//! table once: each step lists one directory, then every listed name is read
//! and added to the index. A step may be gated on an earlier step having
//! discovered a particular path, which lets a convention look deeper only when
//! the expected entry point is really there.

use std::collections::BTreeSet;

use tracing::{debug, trace, warn};

use crate::error::IndexError;
use crate::index::{FileIndex, FileRecord, FileRole};
use crate::path;
use crate::reader::FileReader;
use crate::scanner::scan;

/// Directory a step's subfolder is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanBase {
    /// The repository root `/`.
    RepositoryRoot,
    /// The directory holding the primary descriptor.
    DescriptorDirectory,
}

/// When a step runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanCondition {
    Always,
    /// Only if an earlier step discovered this rooted path.
    Discovered(&'static str),
}

/// One entry of a folder convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanStep {
    pub base: ScanBase,
    pub subfolder: Option<&'static str>,
    pub condition: ScanCondition,
}

impl ScanStep {
    /// Scan the repository root itself.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            base: ScanBase::RepositoryRoot,
            subfolder: None,
            condition: ScanCondition::Always,
        }
    }

    /// Scan `subfolder` under the repository root.
    #[must_use]
    pub const fn folder(subfolder: &'static str) -> Self {
        Self {
            base: ScanBase::RepositoryRoot,
            subfolder: Some(subfolder),
            condition: ScanCondition::Always,
        }
    }

    /// Scan `subfolder` next to the primary descriptor.
    #[must_use]
    pub const fn sibling(subfolder: &'static str) -> Self {
        Self {
            base: ScanBase::DescriptorDirectory,
            subfolder: Some(subfolder),
            condition: ScanCondition::Always,
        }
    }

    /// Gate this step on `path` having been discovered earlier.
    #[must_use]
    pub const fn when_discovered(mut self, path: &'static str) -> Self {
        self.condition = ScanCondition::Discovered(path);
        self
    }

    fn resolve_base(self, initial_path: &str) -> &str {
        match self.base {
            ScanBase::RepositoryRoot => "",
            ScanBase::DescriptorDirectory => path::derive_base(initial_path),
        }
    }
}

/// Run every step of `steps` in order, adding what they find to `index`.
///
/// Listed entries the reader reports as not found (sub-directories, vanished
/// files) are skipped. Paths already in the index are not read again.
///
/// # Errors
///
/// Returns [`IndexError::Read`] if a listed entry exists but cannot be read,
/// for example when the source is rate-limited.
pub fn run_steps(
    steps: &[ScanStep],
    initial_path: &str,
    reader: &dyn FileReader,
    index: &mut FileIndex,
) -> Result<(), IndexError> {
    let mut discovered: BTreeSet<String> = BTreeSet::new();

    for step in steps {
        if let ScanCondition::Discovered(required) = step.condition
            && !discovered.contains(required)
        {
            debug!(
                subfolder = step.subfolder.unwrap_or("/"),
                required, "Skipping scan step, required path was not discovered"
            );
            continue;
        }

        let base = step.resolve_base(initial_path);
        for relative in scan(base, step.subfolder, reader) {
            let key = path::join(base, Some(&relative));
            discovered.insert(key.clone());
            if index.contains(&key) {
                continue;
            }
            match reader.read_file(&key) {
                Ok(content) => {
                    trace!(path = %key, bytes = content.len(), "Indexed file");
                    index.add(FileRecord::new(key, content, FileRole::ImportedDescriptor));
                }
                Err(e) if e.is_not_found() => {
                    warn!(path = %key, "Skipping listed entry that is not a readable file");
                }
                Err(source) => return Err(IndexError::Read { path: key, source }),
            }
        }
    }
    Ok(())
}
