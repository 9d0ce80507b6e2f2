//! Navigation tree data model.
//!
//! The sidebar is a forest of [`NavSection`]s. Each section holds an ordered
//! list of [`NavEntry`] values, which are either document leaves or nested
//! sections. Entry order is the display order; nothing here sorts.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Default number of heading levels shown under a page in the sidebar.
pub const DEFAULT_SIDEBAR_DEPTH: u32 = 2;

/// Top-level site configuration.
///
/// Every key is optional. An empty source produces a site without navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Site description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// URL prefix the site is served under (e.g. `/notes/`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// Presentation plugins enabled for the renderer, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,
    /// Theme settings, including the sidebar forest.
    pub theme_config: ThemeConfig,
}

impl SiteConfig {
    /// URL base path, `/` when unset.
    #[must_use]
    pub fn base(&self) -> &str {
        self.base.as_deref().unwrap_or("/")
    }

    /// Top-level sidebar sections.
    #[must_use]
    pub fn sidebar(&self) -> &[NavSection] {
        &self.theme_config.sidebar
    }
}

/// Theme settings consumed by the renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Sidebar forest.
    pub sidebar: Vec<NavSection>,
    /// Heading levels shown under each page link.
    pub sidebar_depth: u32,
    /// Hide page headings from the sidebar entirely.
    pub disable_all_headers: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            sidebar: Vec::new(),
            sidebar_depth: DEFAULT_SIDEBAR_DEPTH,
            disable_all_headers: false,
        }
    }
}

/// Titled group of navigation entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavSection {
    /// Label shown in navigation. Missing or `null` labels load as empty.
    #[serde(deserialize_with = "deserialize_label")]
    pub text: String,
    /// Renderer hint: whether the group can be collapsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsible: Option<bool>,
    /// Entries in display order.
    pub children: Vec<NavEntry>,
}

impl NavSection {
    /// Create a section with the given label and children.
    #[must_use]
    pub fn new(text: impl Into<String>, children: Vec<NavEntry>) -> Self {
        Self {
            text: text.into(),
            collapsible: None,
            children,
        }
    }
}

fn deserialize_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Node of the navigation tree.
///
/// In source form a bare string is a document and a map is a section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavEntry {
    /// Leaf pointing at a document.
    Document(DocumentReference),
    /// Nested group.
    Section(NavSection),
}

impl NavEntry {
    /// Create a document leaf.
    #[must_use]
    pub fn document(path: impl Into<String>) -> Self {
        Self::Document(DocumentReference::new(path))
    }
}

impl From<&str> for NavEntry {
    fn from(path: &str) -> Self {
        Self::document(path)
    }
}

impl From<NavSection> for NavEntry {
    fn from(section: NavSection) -> Self {
        Self::Section(section)
    }
}

impl<'de> Deserialize<'de> for NavEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NavEntryVisitor)
    }
}

/// Decides the entry variant from the source shape, once, at load time.
struct NavEntryVisitor;

impl<'de> Visitor<'de> for NavEntryVisitor {
    type Value = NavEntry;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a document path or a section with `text` and `children`")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(NavEntry::document(value))
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(NavEntry::document(value))
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        NavSection::deserialize(de::value::MapAccessDeserializer::new(map)).map(NavEntry::Section)
    }
}

/// Path of a document source, e.g. `/kernel/sync/wait.md`.
///
/// Title and headings are not stored here; a document collaborator resolves them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentReference(String);

impl DocumentReference {
    /// Create a reference from a path string.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Path as written in the configuration.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DocumentReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_site_config_has_no_navigation() {
        let config = SiteConfig::default();

        assert!(config.sidebar().is_empty());
        assert_eq!(config.base(), "/");
        assert_eq!(config.theme_config.sidebar_depth, DEFAULT_SIDEBAR_DEPTH);
        assert!(!config.theme_config.disable_all_headers);
    }

    #[test]
    fn test_base_returns_configured_value() {
        let config = SiteConfig {
            base: Some("/notes/".to_owned()),
            ..Default::default()
        };

        assert_eq!(config.base(), "/notes/");
    }

    #[test]
    fn test_entry_string_is_document() {
        let entry: NavEntry = serde_json::from_str(r#""/kernel/ipc/eventfd.md""#).unwrap();

        assert_eq!(entry, NavEntry::document("/kernel/ipc/eventfd.md"));
    }

    #[test]
    fn test_entry_map_is_section() {
        let entry: NavEntry =
            serde_json::from_str(r#"{"text": "Sync", "children": ["/kernel/sync/wait.md"]}"#)
                .unwrap();

        assert_eq!(
            entry,
            NavEntry::Section(NavSection::new(
                "Sync",
                vec!["/kernel/sync/wait.md".into()]
            ))
        );
    }

    #[test]
    fn test_entry_number_is_rejected() {
        let err = serde_json::from_str::<NavEntry>("42").unwrap_err();

        assert!(err.to_string().contains("document path or a section"));
    }

    #[test]
    fn test_section_missing_fields_default() {
        let section: NavSection = serde_json::from_str("{}").unwrap();

        assert_eq!(section.text, "");
        assert!(section.children.is_empty());
        assert!(section.collapsible.is_none());
    }

    #[test]
    fn test_section_null_text_loads_as_empty() {
        let section: NavSection = serde_json::from_str(r#"{"text": null}"#).unwrap();

        assert_eq!(section.text, "");
    }

    #[test]
    fn test_section_ignores_unknown_keys() {
        let section: NavSection =
            serde_json::from_str(r#"{"text": "IPC", "link": "/ipc/", "children": []}"#).unwrap();

        assert_eq!(section, NavSection::new("IPC", Vec::new()));
    }

    #[test]
    fn test_entry_serializes_document_as_string() {
        let json = serde_json::to_value(NavEntry::document("a/b.md")).unwrap();

        assert_eq!(json, serde_json::json!("a/b.md"));
    }

    #[test]
    fn test_section_serialization_skips_unset_collapsible() {
        let json = serde_json::to_value(NavSection::new("Kernel", vec!["a.md".into()])).unwrap();

        assert_eq!(json, serde_json::json!({"text": "Kernel", "children": ["a.md"]}));
    }

    #[test]
    fn test_document_reference_display() {
        let doc = DocumentReference::new("/kernel/time/tick_broadcast.md");

        assert_eq!(doc.to_string(), "/kernel/time/tick_broadcast.md");
        assert_eq!(doc.as_str(), "/kernel/time/tick_broadcast.md");
    }
}
