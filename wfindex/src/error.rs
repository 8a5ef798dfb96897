//! Error types for workflow discovery.

use thiserror::Error;

/// A failure reported by a [`FileReader`](crate::FileReader) for a single file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReadError {
    /// The file does not exist in the tree behind the reader.
    #[error("File not found: {path}")]
    NotFound {
        /// Path as requested by the caller.
        path: String,
    },

    /// The file exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path as requested by the caller.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The backing source refused or could not serve the request (rate limit, outage, ...).
    #[error("Source unavailable for {path}: {message}")]
    Unavailable {
        /// Path as requested by the caller.
        path: String,
        /// Human-readable description from the source.
        message: String,
    },
}

impl ReadError {
    /// The path that failed to read.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::NotFound { path } | Self::Io { path, .. } | Self::Unavailable { path, .. } => {
                path
            }
        }
    }

    /// Whether this failure means the file does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Errors that abort an indexing call.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IndexError {
    /// A file named by an import directive could not be read.
    #[error("Imported file '{path}' could not be read: {source}")]
    Import {
        /// Import target exactly as written in the descriptor.
        path: String,
        /// Failure reported by the reader.
        #[source]
        source: ReadError,
    },

    /// A file listed by a folder scan exists but could not be read.
    #[error("Listed file '{path}' could not be read: {source}")]
    Read {
        /// Rooted index key of the listed file.
        path: String,
        /// Failure reported by the reader.
        #[source]
        source: ReadError,
    },
}

/// Errors raised while building or querying a [`LanguageRegistry`](crate::LanguageRegistry).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// No language with this short name is known.
    #[error("Unknown workflow language '{0}'")]
    UnknownLanguage(String),

    /// No enabled language recognizes the initial path.
    #[error("No enabled workflow language recognizes initial path '{0}'")]
    NoMatchingLanguage(String),

    /// Two languages were registered under the same short name.
    #[error("Workflow language '{0}' is already registered")]
    DuplicateLanguage(String),

    /// A language's initial-path pattern failed to compile.
    #[error("Invalid initial path pattern: {0}")]
    Pattern(#[from] regex::Error),
}
