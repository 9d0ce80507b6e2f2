//! `nb pages` command implementation.

use clap::Args;
use nb_config::SiteConfig;
use nb_nav::{flatten, route};

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the pages command.
#[derive(Args)]
pub(crate) struct PagesArgs {
    #[command(flatten)]
    site: SiteArgs,
}

impl PagesArgs {
    /// Print every page in navigation order as `route<TAB>path`.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.site.load()?;

        for line in page_lines(&site.config) {
            output.data(&line);
        }
        Ok(())
    }
}

fn page_lines(config: &SiteConfig) -> Vec<String> {
    let base = config.base();
    flatten(config)
        .map(|doc| format!("{}\t{doc}", route(base, doc)))
        .collect()
}
