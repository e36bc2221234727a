//! Error types for content store operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ContentError.
pub type Result<T> = std::result::Result<T, ContentError>;

/// Errors that can occur while reading and resolving content documents.
///
/// Absence of content is never an error: lookups return `Option`/empty
/// collections. These variants cover genuine failures such as unreadable
/// files or unparseable metadata, most of which are logged and skipped at
/// the listing level rather than propagated.
#[derive(Error, Debug)]
pub enum ContentError {
    /// Failed to read a document file.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        /// The file that could not be read.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// Front-matter block failed to parse as YAML.
    #[error("failed to parse YAML front-matter: {message}")]
    Frontmatter {
        /// YAML parser diagnostic.
        message: String,
    },

    /// Front-matter parsed but does not match the expected record shape.
    #[error("invalid metadata in '{path}': {message}")]
    Metadata {
        /// The document whose metadata is malformed.
        path: PathBuf,
        /// Deserializer diagnostic.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContentError {
    /// Create a FileRead error.
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a Metadata error.
    pub fn metadata(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Metadata {
            path: path.into(),
            message: message.into(),
        }
    }
}
