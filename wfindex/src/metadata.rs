//! Author/description metadata read from descriptor lines.

use serde::Serialize;

use crate::lines::descriptor_lines;

const AUTHOR_KEYWORD: &str = "author";
const DESCRIPTION_KEYWORD: &str = "description";

/// Descriptive metadata of a workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkflowMetadata {
    pub author: Option<String>,
    pub description: Option<String>,
}

/// How the value is separated from its keyword on a metadata line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataRule {
    /// `author Ann`: the second space-separated token, as written.
    SpaceSeparated,
    /// `author: Ann`: the second colon-separated token, trimmed.
    ColonSeparated,
}

impl MetadataRule {
    /// Scan `contents` line by line; later lines overwrite earlier ones.
    #[must_use]
    pub fn extract(self, contents: &str) -> WorkflowMetadata {
        let mut metadata = WorkflowMetadata::default();
        for line in descriptor_lines(contents) {
            if line.starts_with(AUTHOR_KEYWORD)
                && let Some(value) = self.value(line)
            {
                metadata.author = Some(value);
            }
            if line.starts_with(DESCRIPTION_KEYWORD)
                && let Some(value) = self.value(line)
            {
                metadata.description = Some(value);
            }
        }
        metadata
    }

    fn value(self, line: &str) -> Option<String> {
        match self {
            Self::SpaceSeparated => line.split(' ').nth(1).map(ToOwned::to_owned),
            Self::ColonSeparated => line.split(':').nth(1).map(|v| v.trim().to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_separated() {
        let metadata =
            MetadataRule::SpaceSeparated.extract("import foo.swl\nauthor Ann\ndescription X");
        assert_eq!(metadata.author.as_deref(), Some("Ann"));
        assert_eq!(metadata.description.as_deref(), Some("X"));
    }

    #[test]
    fn test_space_separated_keeps_only_second_token() {
        let metadata = MetadataRule::SpaceSeparated.extract("description A small workflow");
        assert_eq!(metadata.description.as_deref(), Some("A"));
    }

    #[test]
    fn test_colon_separated_trims() {
        let metadata = MetadataRule::ColonSeparated
            .extract("# header\nauthor:  Jane Doe \ndescription: RNA-seq pipeline\nrule all:");
        assert_eq!(metadata.author.as_deref(), Some("Jane Doe"));
        assert_eq!(metadata.description.as_deref(), Some("RNA-seq pipeline"));
    }

    #[test]
    fn test_missing_value_leaves_field_unset() {
        let metadata = MetadataRule::ColonSeparated.extract("author\ndescription");
        assert_eq!(metadata, WorkflowMetadata::default());
    }

    #[test]
    fn test_later_lines_win() {
        let metadata = MetadataRule::SpaceSeparated.extract("author Ann\nauthor Bob");
        assert_eq!(metadata.author.as_deref(), Some("Bob"));
    }

    #[test]
    fn test_crlf_and_trailing_blank_lines() {
        let metadata = MetadataRule::SpaceSeparated.extract("author Ann\r\ndescription X\r\n\r\n");
        assert_eq!(metadata.author.as_deref(), Some("Ann"));
        assert_eq!(metadata.description.as_deref(), Some("X"));
        assert_eq!(MetadataRule::ColonSeparated.extract(""), WorkflowMetadata::default());
    }
}
