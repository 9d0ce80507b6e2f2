//! In-memory document collaborator for tests.

use std::collections::HashMap;

use nb_config::DocumentReference;

use crate::documents::{DocumentError, DocumentInfo, Documents, Header};

/// Mock document set.
///
/// # Example
///
/// ```ignore
/// use nb_nav::MockDocuments;
///
/// let docs = MockDocuments::new()
///     .with_document("/kernel/sync/wait.md", "Wait Queues")
///     .with_unreadable("/kernel/ipc/eventfd.md");
/// ```
#[derive(Debug, Default)]
pub struct MockDocuments {
    documents: HashMap<String, DocumentInfo>,
    unreadable: Vec<String>,
}

impl MockDocuments {
    /// Create an empty mock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document without headings.
    #[must_use]
    pub fn with_document(self, path: impl Into<String>, title: impl Into<String>) -> Self {
        self.with_headers(path, title, Vec::new())
    }

    /// Add a document with a heading outline.
    #[must_use]
    pub fn with_headers(
        mut self,
        path: impl Into<String>,
        title: impl Into<String>,
        headers: Vec<Header>,
    ) -> Self {
        self.documents.insert(
            path.into(),
            DocumentInfo {
                title: title.into(),
                headers,
            },
        );
        self
    }

    /// Make resolving `path` fail with an I/O error.
    #[must_use]
    pub fn with_unreadable(mut self, path: impl Into<String>) -> Self {
        self.unreadable.push(path.into());
        self
    }
}

impl Documents for MockDocuments {
    fn resolve(&self, doc: &DocumentReference) -> Result<Option<DocumentInfo>, DocumentError> {
        if self.unreadable.iter().any(|p| p == doc.as_str()) {
            return Err(DocumentError::Io {
                path: doc.as_str().into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "mock"),
            });
        }
        Ok(self.documents.get(doc.as_str()).cloned())
    }
}
