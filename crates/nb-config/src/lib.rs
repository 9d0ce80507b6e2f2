//! Site configuration for Notebook.
//!
//! Loads the declarative site configuration (title, base path, plugins and
//! the sidebar forest) from TOML, YAML or JSON into an immutable
//! [`SiteConfig`], and writes it back in canonical form.
//!
//! The variant of every navigation entry is decided once, while loading: a
//! bare string becomes a [`NavEntry::Document`], a map becomes a
//! [`NavEntry::Section`]. Anything else fails with [`ConfigError::Malformed`]
//! and no partial tree is returned.
//!
//! ## Environment Variable Expansion
//!
//! `title`, `description` and `base` support `${VAR}` and `${VAR:-default}`
//! when loaded from a file.
//!
//! ## Discovery
//!
//! [`SiteConfig::discover`] searches a directory and its parents for
//! `notebook.toml`, `notebook.yaml`, `notebook.yml` or `notebook.json`.

mod expand;
mod model;

use std::fmt;
use std::path::{Path, PathBuf};

pub use model::{
    DEFAULT_SIDEBAR_DEPTH, DocumentReference, NavEntry, NavSection, SiteConfig, ThemeConfig,
};

/// Configuration filenames searched by discovery, in priority order.
const CONFIG_FILENAMES: [&str; 4] = [
    "notebook.toml",
    "notebook.yaml",
    "notebook.yml",
    "notebook.json",
];

/// Declarative syntax of a configuration source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceFormat {
    /// TOML document.
    Toml,
    /// YAML document.
    Yaml,
    /// JSON document.
    Json,
}

impl SourceFormat {
    /// Pick the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
            Self::Json => "JSON",
        };
        f.write_str(name)
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Extension does not name a supported format.
    #[error("Unsupported configuration format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Source does not have the site configuration shape.
    #[error("Malformed {format} configuration: {message}")]
    Malformed {
        /// Syntax the source was parsed as.
        format: SourceFormat,
        /// Parser message, naming the offending field or position.
        message: String,
    },
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field (e.g. "base").
        field: String,
        /// Error message (e.g. "${`NOTES_BASE`} not set").
        message: String,
    },
    /// Configuration could not be written in the requested format.
    #[error("Failed to serialize {format} configuration: {message}")]
    Serialize {
        /// Target syntax.
        format: SourceFormat,
        /// Serializer message.
        message: String,
    },
}

impl SiteConfig {
    /// Load configuration from a file.
    ///
    /// The format follows the file extension. The file is read completely
    /// and closed before parsing starts.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the file is missing, `UnsupportedFormat` for an
    /// unknown extension, `Malformed` if the content has the wrong shape and
    /// `EnvVar` if a referenced variable is unset.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let format = SourceFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;

        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_str_with(&content, format)?;
        config.expand_env_vars()?;

        tracing::debug!(
            path = %path.display(),
            %format,
            sections = config.sidebar().len(),
            "Loaded site configuration"
        );
        Ok(config)
    }

    /// Search `start` and its parents for a configuration file.
    #[must_use]
    pub fn discover(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in CONFIG_FILENAMES {
                let candidate = current.join(name);
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Parse configuration from in-memory source.
    ///
    /// Blank sources produce the default configuration. No environment
    /// expansion happens here.
    ///
    /// # Errors
    ///
    /// Returns `Malformed` if the content has the wrong shape.
    pub fn from_str_with(content: &str, format: SourceFormat) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let malformed = |message: String| ConfigError::Malformed { format, message };
        match format {
            SourceFormat::Toml => toml::from_str(content).map_err(|e| malformed(e.to_string())),
            SourceFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| malformed(e.to_string()))
            }
            SourceFormat::Json => {
                serde_json::from_str(content).map_err(|e| malformed(e.to_string()))
            }
        }
    }

    /// Write the configuration in canonical form.
    ///
    /// Documents are written as bare strings, sections as maps, and unset
    /// optional fields are omitted.
    ///
    /// # Errors
    ///
    /// Returns `Serialize` if the target serializer rejects the value.
    pub fn to_string_as(&self, format: SourceFormat) -> Result<String, ConfigError> {
        let failed = |message: String| ConfigError::Serialize { format, message };
        match format {
            SourceFormat::Toml => toml::to_string_pretty(self).map_err(|e| failed(e.to_string())),
            SourceFormat::Yaml => serde_yaml::to_string(self).map_err(|e| failed(e.to_string())),
            SourceFormat::Json => {
                serde_json::to_string_pretty(self).map_err(|e| failed(e.to_string()))
            }
        }
    }

    /// Expand environment variable references in metadata strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_field(&mut self.title, "title")?;
        expand::expand_field(&mut self.description, "description")?;
        expand::expand_field(&mut self.base, "base")?;
        Ok(())
    }
}
