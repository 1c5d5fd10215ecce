//! Initial tree loading errors

use std::path::PathBuf;

/// Errors that can occur while building a tree from seed data.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed data is not valid JSON or does not match the node layout.
    #[error("invalid seed data: {0}")]
    Json(#[from] serde_json::Error),

    /// A file entry declared children.
    #[error("file '{0}' cannot have children")]
    FileWithChildren(String),

    /// An entry had an empty or whitespace-only name.
    #[error("node names must not be empty")]
    EmptyName,
}
