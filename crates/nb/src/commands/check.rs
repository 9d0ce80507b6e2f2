//! `nb check` command implementation.

use clap::Args;
use nb_nav::{Strictness, ValidationReport, check_references, flatten, validate};

use super::{Site, SiteArgs};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Treat any finding as an error.
    #[arg(long)]
    strict: bool,

    /// Skip checking that referenced documents exist.
    #[arg(long)]
    no_resolve: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is malformed, or in strict mode
    /// if validation reports findings.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.site.load()?;
        let report = self.report(&site);

        let pages = flatten(&site.config).count();
        output.info(&format!(
            "Checked {} section(s), {pages} page(s)",
            site.config.sidebar().len()
        ));

        for finding in report.findings() {
            output.warning(&format!("warning: {finding}"));
        }

        report.check(self.strictness())?;

        if report.is_empty() {
            output.success("Navigation is valid");
        } else {
            output.warning(&format!(
                "Navigation loaded with {} warning(s)",
                report.findings().len()
            ));
        }
        Ok(())
    }

    fn report(&self, site: &Site) -> ValidationReport {
        let report = validate(&site.config);
        if self.no_resolve {
            report
        } else {
            report.merge(check_references(&site.config, &site.docs))
        }
    }

    fn strictness(&self) -> Strictness {
        if self.strict {
            Strictness::Strict
        } else {
            Strictness::Warn
        }
    }
}

#[cfg(test)]
mod tests {
    use nb_nav::Finding;

    use super::*;
    use crate::commands::site_in;

    const DUPLICATE: &str = r#"{"themeConfig": {"sidebar": [
        {"text": "Kernel", "children": ["x.md", "x.md"]}
    ]}}"#;

    const MISSING: &str = r#"{"themeConfig": {"sidebar": [
        {"text": "Kernel", "children": ["present.md", "missing.md"]}
    ]}}"#;

    fn check_args(site: SiteArgs, strict: bool, no_resolve: bool) -> CheckArgs {
        CheckArgs {
            site,
            strict,
            no_resolve,
        }
    }

    #[test]
    fn test_strict_fails_on_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("x.md"), "# X\n").unwrap();
        let args = check_args(site_in(dir.path(), DUPLICATE), true, false);

        let result = args.execute();

        assert!(
            matches!(result, Err(CliError::Validation(_))),
            "Expected CliError::Validation, got {result:?}"
        );
    }

    #[test]
    fn test_warn_mode_passes_with_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("x.md"), "# X\n").unwrap();
        let args = check_args(site_in(dir.path(), DUPLICATE), false, false);

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_missing_document_fails_strict() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("present.md"), "# Present\n").unwrap();
        let args = check_args(site_in(dir.path(), MISSING), true, false);

        let site = args.site.load().unwrap();
        let report = args.report(&site);
        assert_eq!(report.findings().len(), 1);
        assert!(matches!(
            &report.findings()[0],
            Finding::UnresolvedReference { path, .. } if path.as_str() == "missing.md"
        ));

        assert!(matches!(args.execute(), Err(CliError::Validation(_))));
    }

    #[test]
    fn test_no_resolve_skips_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        let args = check_args(site_in(dir.path(), MISSING), true, true);

        let site = args.site.load().unwrap();
        assert!(args.report(&site).is_empty());

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_malformed_config_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let site = site_in(dir.path(), r#"{"themeConfig": {"sidebar": [42]}}"#);
        let args = check_args(site, false, false);

        assert!(matches!(args.execute(), Err(CliError::Config(_))));
    }
}
