//! Advisory validation of the navigation tree.
//!
//! [`validate`] never fails and never mutates the configuration. It collects
//! [`Finding`]s into a [`ValidationReport`]; the caller decides whether they
//! block a build via [`ValidationReport::check`].

use std::collections::{HashMap, HashSet};
use std::fmt;

use nb_config::{DocumentReference, NavEntry, NavSection, SiteConfig};
use serde::Serialize;

use crate::documents::Documents;
use crate::traverse::flatten;

/// Single validation finding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Finding {
    /// Path referenced more than once. Reported once per path.
    #[serde(rename_all = "camelCase")]
    DuplicatePath {
        /// Duplicated path.
        path: DocumentReference,
        /// Number of times the path occurs.
        occurrences: usize,
        /// Section labels enclosing the first occurrence.
        first_under: Vec<String>,
    },
    /// Section with an empty or whitespace-only label.
    EmptySectionLabel {
        /// Child indices from the sidebar root to the section.
        position: Vec<usize>,
    },
    /// Base path that does not start and end with `/`.
    InvalidBase {
        /// Configured base.
        base: String,
    },
    /// Document reference the document collaborator could not resolve.
    UnresolvedReference {
        /// Unresolved path.
        path: DocumentReference,
        /// Collaborator error, if resolution failed rather than found nothing.
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicatePath {
                path,
                occurrences,
                first_under,
            } => write!(
                f,
                "Duplicate document path {path} appears {occurrences} times (first under {})",
                first_under.join(" > ")
            ),
            Self::EmptySectionLabel { position } => {
                write!(f, "Empty section label at {}", format_position(position))
            }
            Self::InvalidBase { base } => {
                write!(f, "Base path {base:?} must start and end with '/'")
            }
            Self::UnresolvedReference { path, reason } => match reason {
                Some(reason) => write!(f, "Unresolved document {path}: {reason}"),
                None => write!(f, "Unresolved document {path}"),
            },
        }
    }
}

/// Format child indices as `sidebar[0].children[2]`.
fn format_position(position: &[usize]) -> String {
    let mut out = String::from("sidebar");
    for (depth, idx) in position.iter().enumerate() {
        if depth > 0 {
            out.push_str(".children");
        }
        out.push_str(&format!("[{idx}]"));
    }
    out
}

/// How findings affect the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strictness {
    /// Report findings as warnings and continue.
    #[default]
    Warn,
    /// Any finding fails the check.
    Strict,
}

/// Error returned by [`ValidationReport::check`] in strict mode.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Report contained findings.
    #[error("Navigation validation failed with {count} finding(s)")]
    Failed {
        /// Number of findings.
        count: usize,
    },
}

/// Findings collected by [`validate`].
///
/// Order: base findings, then empty labels in depth-first order, then
/// duplicate paths in order of first occurrence, then anything merged later.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    findings: Vec<Finding>,
}

impl ValidationReport {
    /// All findings.
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// True when nothing was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Append findings from another source, such as [`check_references`].
    #[must_use]
    pub fn merge(mut self, findings: impl IntoIterator<Item = Finding>) -> Self {
        self.findings.extend(findings);
        self
    }

    /// Log findings as warnings and apply the strictness policy.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Failed` under [`Strictness::Strict`] when the
    /// report is not empty.
    pub fn check(&self, strictness: Strictness) -> Result<(), ValidationError> {
        for finding in &self.findings {
            tracing::warn!("{finding}");
        }
        if strictness == Strictness::Strict && !self.is_empty() {
            return Err(ValidationError::Failed {
                count: self.findings.len(),
            });
        }
        Ok(())
    }
}

/// Check the configuration against the navigation invariants.
#[must_use]
pub fn validate(config: &SiteConfig) -> ValidationReport {
    let mut findings = Vec::new();

    if let Some(base) = &config.base
        && !(base.starts_with('/') && base.ends_with('/'))
    {
        findings.push(Finding::InvalidBase { base: base.clone() });
    }

    let mut collector = Collector::default();
    for (idx, section) in config.sidebar().iter().enumerate() {
        collector.position.push(idx);
        collector.section(section);
        collector.position.pop();
    }

    findings.extend(collector.empty_labels);
    findings.extend(
        collector
            .paths
            .into_iter()
            .filter(|usage| usage.occurrences > 1)
            .map(|usage| Finding::DuplicatePath {
                path: usage.doc.clone(),
                occurrences: usage.occurrences,
                first_under: usage.first_under,
            }),
    );

    tracing::debug!(findings = findings.len(), "Validated navigation tree");
    ValidationReport { findings }
}

/// Resolve every distinct path through the document collaborator.
///
/// Produces one `UnresolvedReference` per path that resolves to nothing or
/// fails to resolve.
pub fn check_references(config: &SiteConfig, docs: &dyn Documents) -> Vec<Finding> {
    let mut seen = HashSet::new();
    let mut findings = Vec::new();

    for doc in flatten(config) {
        if !seen.insert(doc) {
            continue;
        }
        let reason = match docs.resolve(doc) {
            Ok(Some(_)) => continue,
            Ok(None) => None,
            Err(e) => Some(e.to_string()),
        };
        tracing::debug!(path = %doc, "Unresolved document reference");
        findings.push(Finding::UnresolvedReference {
            path: doc.clone(),
            reason,
        });
    }

    findings
}

/// Occurrences of one path.
struct PathUsage<'a> {
    doc: &'a DocumentReference,
    occurrences: usize,
    first_under: Vec<String>,
}

/// Depth-first walk state for [`validate`].
#[derive(Default)]
struct Collector<'a> {
    trail: Vec<&'a str>,
    position: Vec<usize>,
    index: HashMap<&'a str, usize>,
    paths: Vec<PathUsage<'a>>,
    empty_labels: Vec<Finding>,
}

impl<'a> Collector<'a> {
    fn section(&mut self, section: &'a NavSection) {
        if section.text.trim().is_empty() {
            self.empty_labels.push(Finding::EmptySectionLabel {
                position: self.position.clone(),
            });
        }

        self.trail.push(&section.text);
        for (idx, entry) in section.children.iter().enumerate() {
            match entry {
                NavEntry::Document(doc) => self.document(doc),
                NavEntry::Section(child) => {
                    self.position.push(idx);
                    self.section(child);
                    self.position.pop();
                }
            }
        }
        self.trail.pop();
    }

    fn document(&mut self, doc: &'a DocumentReference) {
        if let Some(&i) = self.index.get(doc.as_str()) {
            self.paths[i].occurrences += 1;
            return;
        }
        self.index.insert(doc.as_str(), self.paths.len());
        self.paths.push(PathUsage {
            doc,
            occurrences: 1,
            first_under: self.trail.iter().map(|&label| label.to_owned()).collect(),
        });
    }
}
