//! Single-directory scanning.

use std::collections::BTreeSet;

use tracing::debug;

use crate::path;
use crate::reader::FileReader;

/// List one directory and return the names it holds as relative paths.
///
/// The directory listed is `base` joined with `subfolder`. Returned paths are
/// `subfolder/name` when a subfolder is given, `name` otherwise, normalized and
/// de-duplicated. An absent or empty listing yields an empty set.
#[must_use]
pub fn scan(base: &str, subfolder: Option<&str>, reader: &dyn FileReader) -> BTreeSet<String> {
    let directory = path::join(base, subfolder);
    let Some(names) = reader.list_files(&directory) else {
        debug!(%directory, "Directory absent, nothing to scan");
        return BTreeSet::new();
    };

    let found: BTreeSet<String> = names
        .iter()
        .filter(|name| !name.is_empty())
        .map(|name| match subfolder {
            Some(folder) => path::relative(&format!("{folder}/{name}")),
            None => path::relative(name),
        })
        .collect();

    debug!(%directory, listed = names.len(), found = found.len(), "Scanned directory");
    found
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::test_support::MemoryReader;

    #[test]
    fn test_scan_root_without_subfolder() {
        let reader = MemoryReader::new().listing("/", &["README.md", "LICENSE"]);
        let found = scan("", None, &reader);
        assert_eq!(
            found.into_iter().collect::<Vec<_>>(),
            vec!["LICENSE", "README.md"]
        );
        assert_eq!(reader.listed.borrow().as_slice(), ["/"]);
    }

    #[test]
    fn test_scan_prefixes_subfolder() {
        let reader = MemoryReader::new().listing("/workflow/rules", &["align.smk", "trim.smk"]);
        let found = scan("", Some("workflow/rules"), &reader);
        assert!(found.contains("workflow/rules/align.smk"));
        assert!(found.contains("workflow/rules/trim.smk"));
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_scan_relative_to_base() {
        let reader = MemoryReader::new().listing("/workflow/envs", &["star.yaml"]);
        let found = scan("/workflow", Some("envs"), &reader);
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["envs/star.yaml"]);
    }

    #[test]
    fn test_scan_absent_directory_is_empty() {
        let reader = MemoryReader::new();
        assert!(scan("", Some("config"), &reader).is_empty());
        assert_eq!(reader.listed.borrow().as_slice(), ["/config"]);
    }

    #[test]
    fn test_scan_empty_listing_is_empty() {
        let reader = MemoryReader::new().listing("/resources", &[]);
        assert!(scan("", Some("resources"), &reader).is_empty());
    }

    #[test]
    fn test_scan_deduplicates_and_normalizes() {
        let reader = MemoryReader::new().listing("/config", &["config.yaml", "config.yaml", ""]);
        let found = scan("", Some("/config/"), &reader);
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["config/config.yaml"]);
    }

    #[test]
    fn test_scan_is_stable_when_repeated() {
        let reader = MemoryReader::new().listing("/workflow", &["Snakefile", "rules"]);
        let first = scan("", Some("workflow"), &reader);
        let second = scan("", Some("workflow"), &reader);
        assert_eq!(first, second);
    }
}
