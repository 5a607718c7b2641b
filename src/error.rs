//! Error types for jarview

use thiserror::Error;

/// Result type alias for viewer operations
pub type Result<T> = std::result::Result<T, JarViewError>;

/// Viewer error types
#[derive(Error, Debug)]
pub enum JarViewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("No archive is open")]
    NoArchive,

    #[error("Entry not found: {path}")]
    EntryNotFound {
        path: String,
        /// Similar entries offered as alternatives
        suggestions: Vec<String>,
    },

    #[error("Entry is a directory: {0}")]
    IsDirectory(String),

    #[error("{0}")]
    Message(String),
}
