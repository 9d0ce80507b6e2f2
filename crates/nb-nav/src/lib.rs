//! Navigation queries for Notebook.
//!
//! Read-only operations over a loaded [`SiteConfig`](nb_config::SiteConfig):
//!
//! - [`validate`] checks the tree invariants and returns an advisory report
//! - [`flatten`] iterates documents in authored, depth-first order
//! - [`find`] returns the breadcrumb of enclosing section labels
//! - [`neighbours`] gives previous/next pages for a document
//! - [`route`] maps a document reference to the URL it is served at
//! - [`sidebar`] builds the serializable tree a renderer draws
//!
//! Titles and heading outlines come from a [`Documents`] collaborator. A
//! [`MockDocuments`] implementation is available behind the `mock` feature.
//!
//! # Example
//!
//! ```
//! use nb_config::{SiteConfig, SourceFormat};
//! use nb_nav::{find, flatten, validate};
//!
//! let yaml = r"
//! themeConfig:
//!   sidebar:
//!     - text: Kernel
//!       children:
//!         - a/b.md
//!         - text: Memory
//!           children: [a/c.md]
//! ";
//! let config = SiteConfig::from_str_with(yaml, SourceFormat::Yaml).unwrap();
//!
//! let pages: Vec<_> = flatten(&config).map(|doc| doc.as_str()).collect();
//! assert_eq!(pages, ["a/b.md", "a/c.md"]);
//! assert_eq!(find(&config, "a/c.md"), Some(vec!["Kernel", "Memory"]));
//! assert!(validate(&config).is_empty());
//! ```

mod documents;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod route;
mod sidebar;
mod traverse;
mod validate;

pub use documents::{DocumentError, DocumentInfo, Documents, Header};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockDocuments;
pub use route::route;
pub use sidebar::{NavItem, sidebar};
pub use traverse::{PageLinks, Pages, find, flatten, neighbours};
pub use validate::{
    Finding, Strictness, ValidationError, ValidationReport, check_references, validate,
};
