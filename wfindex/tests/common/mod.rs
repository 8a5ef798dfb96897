//! Shared fixtures for integration tests.

use std::cell::RefCell;
use std::collections::BTreeMap;

use wfindex::{FileReader, ReadError};

/// In-memory repository. Directory listings are explicit so a test controls
/// exactly which directories exist.
#[derive(Default)]
pub struct MemoryRepo {
    files: BTreeMap<String, String>,
    listings: BTreeMap<String, Vec<String>>,
    pub listed: RefCell<Vec<String>>,
}

impl MemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_owned(), content.to_owned());
        self
    }

    pub fn listing(mut self, directory: &str, names: &[&str]) -> Self {
        self.listings.insert(
            directory.to_owned(),
            names.iter().map(ToString::to_string).collect(),
        );
        self
    }
}

impl FileReader for MemoryRepo {
    fn read_file(&self, path: &str) -> Result<String, ReadError> {
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

/// The snakemake-hello-world layout: a Snakefile in `workflow/` plus root files.
pub fn hello_world_repo(with_catalog: bool) -> MemoryRepo {
    let mut root = vec!["README.md", "LICENSE"];
    if with_catalog {
        root.push(".snakemake-workflow-catalog.yml");
    }
    MemoryRepo::new()
        .listing("/", &root)
        .listing("/workflow", &["Snakefile", "rules"])
        .file("/README.md", "# snakemake-hello-world")
        .file("/LICENSE", "MIT License")
        .file(
            "/.snakemake-workflow-catalog.yml",
            "usage:\n  mandatory-flags:\n    desc: none\n",
        )
        .file("/workflow/Snakefile", HELLO_SNAKEFILE)
}

pub const HELLO_SNAKEFILE: &str = "rule all:\n    input: \"hello.txt\"\n";
