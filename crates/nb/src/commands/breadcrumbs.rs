//! `nb breadcrumbs` command implementation.

use clap::Args;
use nb_config::SiteConfig;
use nb_nav::{find, neighbours, route};

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the breadcrumbs command.
#[derive(Args)]
pub(crate) struct BreadcrumbsArgs {
    /// Document path as written in the sidebar (e.g. /kernel/sync/wait.md).
    path: String,

    #[command(flatten)]
    site: SiteArgs,
}

impl BreadcrumbsArgs {
    /// Print the section chain and previous/next pages for a document.
    ///
    /// # Errors
    ///
    /// Returns `NotInNavigation` if the path is not in the sidebar.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.site.load()?;

        for line in breadcrumb_lines(&site.config, &self.path)? {
            output.data(&line);
        }
        Ok(())
    }
}

/// Section chain joined by ` > `, then `prev`/`next` routes when present.
fn breadcrumb_lines(config: &SiteConfig, path: &str) -> Result<Vec<String>, CliError> {
    let trail = find(config, path)
        .ok_or_else(|| CliError::NotInNavigation(path.to_owned()))?;
    let mut lines = vec![trail.join(" > ")];

    if let Some(links) = neighbours(config, path) {
        let base = config.base();
        if let Some(prev) = links.prev {
            lines.push(format!("prev\t{}", route(base, prev)));
        }
        if let Some(next) = links.next {
            lines.push(format!("next\t{}", route(base, next)));
        }
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use nb_config::SourceFormat;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::site_in;

    const KERNEL: &str = r#"{"themeConfig": {"sidebar": [
        {"text": "Kernel", "children": [
            "a/b.md",
            {"text": "Memory", "children": ["a/c.md", "a/d.md"]}
        ]}
    ]}}"#;

    #[test]
    fn test_breadcrumb_lines_with_neighbours() {
        let config = SiteConfig::from_str_with(KERNEL, SourceFormat::Json).unwrap();

        let lines = breadcrumb_lines(&config, "a/c.md").unwrap();

        assert_eq!(
            lines,
            vec![
                "Kernel > Memory".to_owned(),
                "prev\t/a/b.html".to_owned(),
                "next\t/a/d.html".to_owned(),
            ]
        );
    }

    #[test]
    fn test_breadcrumb_lines_first_page_has_no_prev() {
        let config = SiteConfig::from_str_with(KERNEL, SourceFormat::Json).unwrap();

        let lines = breadcrumb_lines(&config, "a/b.md").unwrap();

        assert_eq!(lines, vec!["Kernel".to_owned(), "next\t/a/c.html".to_owned()]);
    }

    #[test]
    fn test_execute_absent_path_is_not_in_navigation() {
        let dir = tempfile::tempdir().unwrap();
        let args = BreadcrumbsArgs {
            path: "a/missing.md".to_owned(),
            site: site_in(dir.path(), KERNEL),
        };

        let result = args.execute();

        assert!(
            matches!(&result, Err(CliError::NotInNavigation(path)) if path == "a/missing.md"),
            "Expected CliError::NotInNavigation, got {result:?}"
        );
    }
}
