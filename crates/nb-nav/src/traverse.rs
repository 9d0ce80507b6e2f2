//! Read-only traversal of the sidebar forest.
//!
//! All queries are depth-first and left-to-right, matching the authored
//! nesting. Sections never appear as pages themselves.

use std::ops::ControlFlow;
use std::slice;

use nb_config::{DocumentReference, NavEntry, NavSection, SiteConfig};
use serde::Serialize;

/// Lazy iterator over every document in the forest.
///
/// Created by [`flatten`]. Duplicate paths are yielded at each occurrence.
#[derive(Clone, Debug)]
pub struct Pages<'a> {
    roots: slice::Iter<'a, NavSection>,
    stack: Vec<slice::Iter<'a, NavEntry>>,
}

impl<'a> Iterator for Pages<'a> {
    type Item = &'a DocumentReference;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(top) = self.stack.last_mut() else {
                let section = self.roots.next()?;
                self.stack.push(section.children.iter());
                continue;
            };
            match top.next() {
                Some(NavEntry::Document(doc)) => return Some(doc),
                Some(NavEntry::Section(section)) => self.stack.push(section.children.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl std::iter::FusedIterator for Pages<'_> {}

/// Iterate over every document reference in authored order.
///
/// Call again to restart.
#[must_use]
pub fn flatten(config: &SiteConfig) -> Pages<'_> {
    Pages {
        roots: config.sidebar().iter(),
        stack: Vec::new(),
    }
}

/// Section labels enclosing `path`, outermost first.
///
/// Matching is exact: a trailing slash or an empty path never matches. With
/// duplicate paths the first occurrence wins.
#[must_use]
pub fn find<'a>(config: &'a SiteConfig, path: &str) -> Option<Vec<&'a str>> {
    let found = walk(config.sidebar(), |trail, doc| {
        if doc.as_str() == path {
            ControlFlow::Break(trail.to_vec())
        } else {
            ControlFlow::Continue(())
        }
    });
    match found {
        ControlFlow::Break(trail) => Some(trail),
        ControlFlow::Continue(()) => None,
    }
}

/// Previous and next pages around a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageLinks<'a> {
    /// Page before this one in flattened order.
    pub prev: Option<&'a DocumentReference>,
    /// Page after this one in flattened order.
    pub next: Option<&'a DocumentReference>,
}

/// Previous/next links for `path`, or `None` if the path is not in the tree.
#[must_use]
pub fn neighbours<'a>(config: &'a SiteConfig, path: &str) -> Option<PageLinks<'a>> {
    let mut pages = flatten(config);
    let mut prev = None;
    while let Some(doc) = pages.next() {
        if doc.as_str() == path {
            return Some(PageLinks {
                prev,
                next: pages.next(),
            });
        }
        prev = Some(doc);
    }
    None
}

/// Visit every document with the labels of its enclosing sections.
///
/// Stops at the first `Break`.
pub(crate) fn walk<'a, B, F>(sections: &'a [NavSection], mut visit: F) -> ControlFlow<B>
where
    F: FnMut(&[&'a str], &'a DocumentReference) -> ControlFlow<B>,
{
    let mut trail = Vec::new();
    for section in sections {
        walk_section(section, &mut trail, &mut visit)?;
    }
    ControlFlow::Continue(())
}

fn walk_section<'a, B, F>(
    section: &'a NavSection,
    trail: &mut Vec<&'a str>,
    visit: &mut F,
) -> ControlFlow<B>
where
    F: FnMut(&[&'a str], &'a DocumentReference) -> ControlFlow<B>,
{
    trail.push(&section.text);
    for entry in &section.children {
        match entry {
            NavEntry::Document(doc) => visit(trail.as_slice(), doc)?,
            NavEntry::Section(child) => walk_section(child, trail, visit)?,
        }
    }
    trail.pop();
    ControlFlow::Continue(())
}
