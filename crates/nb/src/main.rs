//! Notebook CLI - navigation tooling for the documentation site.
//!
//! Provides commands for:
//! - `check`: Load and validate the sidebar configuration
//! - `pages`: List pages in navigation order with their routes
//! - `breadcrumbs`: Show the section chain and previous/next pages for a document
//! - `sidebar`: Print the resolved sidebar tree as JSON

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BreadcrumbsArgs, CheckArgs, PagesArgs, SidebarArgs};
use output::Output;

/// Notebook - documentation navigation tooling.
#[derive(Parser)]
#[command(name = "nb", version, about)]
struct Cli {
    /// Enable verbose output (info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate the navigation configuration.
    Check(CheckArgs),
    /// List pages in navigation order.
    Pages(PagesArgs),
    /// Show breadcrumbs and previous/next pages for a document.
    Breadcrumbs(BreadcrumbsArgs),
    /// Print the sidebar tree as JSON.
    Sidebar(SidebarArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG.
    // Findings are printed by the commands themselves.
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Pages(args) => args.execute(),
        Commands::Breadcrumbs(args) => args.execute(),
        Commands::Sidebar(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
