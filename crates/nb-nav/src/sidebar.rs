//! Sidebar items for the renderer.
//!
//! Turns the configured forest into a serializable [`NavItem`] tree with
//! links and titles filled in. Page headings are attached below each page
//! link down to `sidebarDepth` levels.

use nb_config::{NavEntry, NavSection, SiteConfig};
use serde::Serialize;

use crate::documents::{Documents, Header};
use crate::route::route;

/// Navigation item with children for UI tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display text.
    pub text: String,
    /// Link target. `None` for section groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Whether a group can be collapsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsible: Option<bool>,
    /// Child navigation items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

/// Build the sidebar tree.
///
/// Pages the collaborator cannot resolve are shown with their path as text
/// and without headings.
#[must_use]
pub fn sidebar(config: &SiteConfig, docs: &dyn Documents) -> Vec<NavItem> {
    let builder = Builder {
        base: config.base(),
        depth: if config.theme_config.disable_all_headers {
            0
        } else {
            config.theme_config.sidebar_depth
        },
        docs,
    };
    config
        .sidebar()
        .iter()
        .map(|section| builder.section(section))
        .collect()
}

struct Builder<'a> {
    base: &'a str,
    depth: u32,
    docs: &'a dyn Documents,
}

impl Builder<'_> {
    fn section(&self, section: &NavSection) -> NavItem {
        NavItem {
            text: section.text.clone(),
            link: None,
            collapsible: section.collapsible,
            children: section
                .children
                .iter()
                .map(|entry| self.entry(entry))
                .collect(),
        }
    }

    fn entry(&self, entry: &NavEntry) -> NavItem {
        let doc = match entry {
            NavEntry::Section(section) => return self.section(section),
            NavEntry::Document(doc) => doc,
        };

        let link = route(self.base, doc);
        let info = match self.docs.resolve(doc) {
            Ok(info) => info,
            Err(e) => {
                tracing::warn!(path = %doc, error = %e, "Failed to resolve document");
                None
            }
        };

        match info {
            Some(info) => NavItem {
                text: info.title,
                children: header_items(&info.headers, &link, self.depth),
                link: Some(link),
                collapsible: None,
            },
            None => NavItem {
                text: doc.to_string(),
                link: Some(link),
                collapsible: None,
                children: Vec::new(),
            },
        }
    }
}

/// Heading links down to `depth` levels.
fn header_items(headers: &[Header], page_link: &str, depth: u32) -> Vec<NavItem> {
    if depth == 0 {
        return Vec::new();
    }
    headers
        .iter()
        .map(|header| NavItem {
            text: header.title.clone(),
            link: Some(format!("{page_link}#{}", header.slug)),
            collapsible: None,
            children: header_items(&header.children, page_link, depth - 1),
        })
        .collect()
}
