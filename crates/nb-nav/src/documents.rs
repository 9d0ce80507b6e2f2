//! Document collaborator interface.
//!
//! The navigation tree stores only document paths. Titles and heading
//! outlines come from a [`Documents`] implementation that knows where the
//! sources live.

use std::path::PathBuf;

use nb_config::DocumentReference;
use serde::{Deserialize, Serialize};

/// Resolved document data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// Page title.
    pub title: String,
    /// Heading outline below the title (H2 and deeper), nested by level.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,
}

/// Heading in a document outline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Heading level (2-6).
    pub level: u8,
    /// Heading text.
    pub title: String,
    /// Anchor slug, unique within the document.
    pub slug: String,
    /// Nested headings of deeper levels.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Header>,
}

/// Document collaborator error.
///
/// A missing document is not an error; resolvers return `Ok(None)` for it.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Reading the document source failed.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Source file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Reference cannot name a document source.
    #[error("Invalid document path: {0}")]
    InvalidPath(String),
}

/// Resolves document references to titles and heading outlines.
pub trait Documents: Send + Sync {
    /// Resolve a reference.
    ///
    /// Returns `Ok(None)` when no document exists for the path.
    ///
    /// # Errors
    ///
    /// Returns an error when the document exists but cannot be read, or the
    /// path can never name a document.
    fn resolve(&self, doc: &DocumentReference) -> Result<Option<DocumentInfo>, DocumentError>;
}
