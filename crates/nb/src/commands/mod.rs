//! CLI command implementations.

pub(crate) mod breadcrumbs;
pub(crate) mod check;
pub(crate) mod pages;
pub(crate) mod sidebar;

use std::path::{Path, PathBuf};

use clap::Args;
use nb_config::SiteConfig;
use nb_docs::FsDocuments;

use crate::error::CliError;

pub(crate) use breadcrumbs::BreadcrumbsArgs;
pub(crate) use check::CheckArgs;
pub(crate) use pages::PagesArgs;
pub(crate) use sidebar::SidebarArgs;

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover notebook.toml).
    #[arg(short, long, env = "NB_CONFIG")]
    config: Option<PathBuf>,

    /// Documentation source directory (default: directory of the config file).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,
}

/// Loaded configuration with its document collaborator.
pub(crate) struct Site {
    pub config: SiteConfig,
    pub docs: FsDocuments,
}

impl SiteArgs {
    /// Load the configuration and set up document resolution.
    pub(crate) fn load(&self) -> Result<Site, CliError> {
        let cwd = std::env::current_dir()?;
        let config_path = self
            .config
            .clone()
            .or_else(|| SiteConfig::discover(&cwd));

        let config = match &config_path {
            Some(path) => SiteConfig::load(path)?,
            None => {
                tracing::info!(
                    dir = %cwd.display(),
                    "No configuration file found, using defaults"
                );
                SiteConfig::default()
            }
        };

        let source_dir =
            resolve_source_dir(self.source_dir.as_deref(), config_path.as_deref(), &cwd);
        tracing::info!(source_dir = %source_dir.display(), "Resolving documents");

        Ok(Site {
            config,
            docs: FsDocuments::new(source_dir),
        })
    }
}

/// Pick the source directory: explicit flag, then config file directory, then `cwd`.
fn resolve_source_dir(
    explicit: Option<&Path>,
    config_path: Option<&Path>,
    cwd: &Path,
) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    config_path
        .and_then(Path::parent)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map_or_else(|| cwd.to_path_buf(), Path::to_path_buf)
}

/// Write `notebook.json` into `dir` and point the shared options at it.
#[cfg(test)]
fn site_in(dir: &Path, config: &str) -> SiteArgs {
    let path = dir.join("notebook.json");
    std::fs::write(&path, config).unwrap();
    SiteArgs {
        config: Some(path),
        source_dir: None,
    }
}
