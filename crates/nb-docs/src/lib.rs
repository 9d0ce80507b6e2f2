//! Filesystem document collaborator for Notebook.
//!
//! [`FsDocuments`] resolves document references against a source directory
//! and reads titles and heading outlines from the Markdown files.
//!
//! # Path Mapping
//!
//! References are relative to the source directory; a leading `/` is ignored:
//! - `/kernel/sync/wait.md` → `<source>/kernel/sync/wait.md`
//! - `/kernel/` → `<source>/kernel/README.md`, then `<source>/kernel/index.md`
//! - `/kernel/sync/wait` → `<source>/kernel/sync/wait.md`
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use nb_docs::FsDocuments;
//! use nb_nav::{check_references, validate};
//!
//! let docs = FsDocuments::new(PathBuf::from("docs"));
//! let report = validate(&config).merge(check_references(&config, &docs));
//! ```

mod outline;

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use nb_config::DocumentReference;
use nb_nav::{DocumentError, DocumentInfo, Documents};

use crate::outline::extract_outline;

/// Landing page file names tried for directory references, in order.
const INDEX_FILES: [&str; 2] = ["README.md", "index.md"];

/// Document collaborator backed by a directory of Markdown files.
#[derive(Debug, Clone)]
pub struct FsDocuments {
    source_dir: PathBuf,
}

impl FsDocuments {
    /// Create a collaborator rooted at `source_dir`.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// Source directory documents are resolved against.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Candidate source files for a reference, in lookup order.
    fn candidates(&self, doc: &DocumentReference) -> Result<Vec<PathBuf>, DocumentError> {
        let path = doc.as_str();
        let relative = Path::new(path.trim_start_matches('/'));

        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if path.is_empty() || path.contains("://") || escapes {
            return Err(DocumentError::InvalidPath(path.to_owned()));
        }

        let base = self.source_dir.join(relative);
        let candidates = if path.ends_with('/') || relative.as_os_str().is_empty() {
            INDEX_FILES.iter().map(|name| base.join(name)).collect()
        } else if relative.extension().is_some() {
            vec![base]
        } else {
            vec![base.with_extension("md")]
        };
        Ok(candidates)
    }
}

impl Documents for FsDocuments {
    fn resolve(&self, doc: &DocumentReference) -> Result<Option<DocumentInfo>, DocumentError> {
        for file in self.candidates(doc)? {
            let content = match std::fs::read_to_string(&file) {
                Ok(content) => content,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(source) => return Err(DocumentError::Io { path: file, source }),
            };

            let outline = extract_outline(&content);
            let title = outline
                .title
                .unwrap_or_else(|| derive_title_from_filename(&file));
            tracing::debug!(path = %doc, file = %file.display(), "Resolved document");
            return Ok(Some(DocumentInfo {
                title,
                headers: outline.headers,
            }));
        }
        Ok(None)
    }
}

/// Generate a title from a file path's filename.
///
/// Landing pages take the name of their directory.
fn derive_title_from_filename(file: &Path) -> String {
    let is_index = file
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| INDEX_FILES.iter().any(|i| i.eq_ignore_ascii_case(n)));
    let named = if is_index {
        file.parent().unwrap_or(file)
    } else {
        file
    };
    named
        .file_stem()
        .map(|s| titlecase_from_slug(&s.to_string_lossy()))
        .unwrap_or_default()
}

/// Convert a slug (kebab-case or `snake_case`) to title case.
fn titlecase_from_slug(slug: &str) -> String {
    let mut result = String::with_capacity(slug.len());
    for word in slug.split(['-', '_', ' ']).filter(|w| !w.is_empty()) {
        if !result.is_empty() {
            result.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_docs() -> (tempfile::TempDir, FsDocuments) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("kernel/trace")).unwrap();
        std::fs::create_dir_all(root.join("kernel/sync")).unwrap();
        std::fs::write(
            root.join("kernel/trace/ftrace.md"),
            "# ftrace\n\n## events\n\n1. list all avaiable events\n\n## function\n",
        )
        .unwrap();
        std::fs::write(root.join("kernel/sync/wait_queue.md"), "No heading here.\n").unwrap();
        std::fs::write(root.join("kernel/README.md"), "Kernel notes.\n").unwrap();
        let docs = FsDocuments::new(root.to_path_buf());
        (dir, docs)
    }

    fn resolve(docs: &FsDocuments, path: &str) -> Option<DocumentInfo> {
        docs.resolve(&DocumentReference::new(path)).unwrap()
    }

    #[test]
    fn test_resolve_markdown_file() {
        let (_dir, docs) = create_docs();

        let info = resolve(&docs, "/kernel/trace/ftrace.md").unwrap();

        assert_eq!(info.title, "ftrace");
        let headers: Vec<_> = info.headers.iter().map(|h| h.slug.as_str()).collect();
        assert_eq!(headers, vec!["events", "function"]);
    }

    #[test]
    fn test_resolve_without_leading_slash() {
        let (_dir, docs) = create_docs();

        assert!(resolve(&docs, "kernel/trace/ftrace.md").is_some());
    }

    #[test]
    fn test_resolve_without_extension() {
        let (_dir, docs) = create_docs();

        assert_eq!(resolve(&docs, "/kernel/trace/ftrace").unwrap().title, "ftrace");
    }

    #[test]
    fn test_resolve_title_falls_back_to_filename() {
        let (_dir, docs) = create_docs();

        let info = resolve(&docs, "/kernel/sync/wait_queue.md").unwrap();

        assert_eq!(info.title, "Wait Queue");
        assert!(info.headers.is_empty());
    }

    #[test]
    fn test_resolve_directory_uses_readme() {
        let (_dir, docs) = create_docs();

        let info = resolve(&docs, "/kernel/").unwrap();

        assert_eq!(info.title, "Kernel");
    }

    #[test]
    fn test_resolve_missing_returns_none() {
        let (_dir, docs) = create_docs();

        assert_eq!(resolve(&docs, "/kernel/ipc/eventfd.md"), None);
        assert_eq!(resolve(&docs, "/kernel/sync/"), None);
    }

    #[test]
    fn test_resolve_rejects_parent_components() {
        let (_dir, docs) = create_docs();

        let err = docs
            .resolve(&DocumentReference::new("/../secret.md"))
            .unwrap_err();

        assert!(matches!(err, DocumentError::InvalidPath(_)));
    }

    #[test]
    fn test_resolve_rejects_external_links() {
        let (_dir, docs) = create_docs();

        let err = docs
            .resolve(&DocumentReference::new("https://www.kernel.org/"))
            .unwrap_err();

        assert!(matches!(err, DocumentError::InvalidPath(_)));
    }

    #[test]
    fn test_titlecase_from_slug() {
        assert_eq!(titlecase_from_slug("tick_broadcast"), "Tick Broadcast");
        assert_eq!(titlecase_from_slug("time-in-linux"), "Time In Linux");
        assert_eq!(titlecase_from_slug("vfio"), "Vfio");
    }
}
