//! SWL, a minimal line-oriented workflow language.
//!
//! Every line of a descriptor starts with a keyword. `import <file>` pulls
//! another file into the workflow; `author` and `description` carry metadata.

use crate::language::{IndexingRule, LanguagePolicy, SetRule};
use crate::metadata::MetadataRule;

pub const SHORT_NAME: &str = "SWL";
pub const LONG_NAME: &str = "Silly workflow language";
pub const INITIAL_PATH_PATTERN: &str = r"^/.*\.swl$";

pub const IMPORT_KEYWORD: &str = "import";

/// Leading keywords a descriptor line may start with.
pub const KEYWORDS: &[&str] = &[IMPORT_KEYWORD, "author", "description"];

/// # Errors
///
/// Returns an error if the built-in path pattern fails to compile.
pub fn policy() -> Result<LanguagePolicy, regex::Error> {
    Ok(LanguagePolicy::new(
        SHORT_NAME,
        LONG_NAME,
        INITIAL_PATH_PATTERN,
        IndexingRule::ImportDirectives {
            keyword: IMPORT_KEYWORD,
        },
    )?
    .with_set_rule(SetRule::LineKeywords(KEYWORDS))
    .with_metadata(MetadataRule::SpaceSeparated))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::index::{FileIndex, FileRole};
    use crate::language::WorkflowLanguage;
    use crate::language::rules::UNKNOWN_KEYWORD_MESSAGE;
    use crate::test_support::MemoryReader;

    const DESCRIPTOR: &str = "import foo.swl\nauthor Ann\ndescription X";

    #[test]
    fn test_initial_path_pattern() {
        let swl = policy().unwrap();
        assert!(swl.matches_initial_path("/main.swl"));
        assert!(swl.matches_initial_path("/nested/dir/main.swl"));
        assert!(!swl.matches_initial_path("main.swl"));
        assert!(!swl.matches_initial_path("/main.swl.bak"));
        assert!(!swl.matches_initial_path("/workflow/Snakefile"));
    }

    #[test]
    fn test_index_contains_primary_and_import() {
        let swl = policy().unwrap();
        let reader = MemoryReader::new().file("foo.swl", "description imported");
        let index = swl
            .index_workflow_files("/main.swl", DESCRIPTOR, &reader)
            .unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("/main.swl").unwrap().content(), DESCRIPTOR);
        assert_eq!(
            index.get("/main.swl").unwrap().role(),
            FileRole::PrimaryDescriptor
        );
        assert_eq!(
            index.get("foo.swl").unwrap().content(),
            "description imported"
        );
        assert!(reader.listed.borrow().is_empty());
    }

    #[test]
    fn test_validate_accepts_keyword_lines() {
        let swl = policy().unwrap();
        let verdict = swl.validate_workflow_set("/main.swl", DESCRIPTOR, &FileIndex::new());
        assert!(verdict.is_valid());
        assert!(verdict.messages.is_empty());
    }

    #[test]
    fn test_validate_rejects_unknown_keyword() {
        let swl = policy().unwrap();
        let verdict = swl.validate_workflow_set(
            "/main.swl",
            "import foo.swl\nexecute foo\nrun bar",
            &FileIndex::new(),
        );
        assert!(!verdict.is_valid());
        assert_eq!(verdict.message("/main.swl"), Some(UNKNOWN_KEYWORD_MESSAGE));
    }

    #[test]
    fn test_metadata() {
        let swl = policy().unwrap();
        let metadata = swl.parse_metadata("/main.swl", DESCRIPTOR, &FileIndex::new());
        assert_eq!(metadata.author.as_deref(), Some("Ann"));
        assert_eq!(metadata.description.as_deref(), Some("X"));
    }
}
