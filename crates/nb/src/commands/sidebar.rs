//! `nb sidebar` command implementation.

use clap::Args;
use nb_nav::sidebar;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    #[command(flatten)]
    site: SiteArgs,
}

impl SidebarArgs {
    /// Print the resolved sidebar tree as JSON.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.site.load()?;

        let items = sidebar(&site.config, &site.docs);
        output.data(&serde_json::to_string_pretty(&items)?);
        Ok(())
    }
}
