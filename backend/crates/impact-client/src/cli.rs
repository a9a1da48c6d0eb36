use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "impact")]
#[command(about = "Submit and list impact projects")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// API base URL (defaults to client.api_base_url from config)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Print the rendered HTML page instead of terminal text
    #[arg(long, global = true)]
    pub(crate) html: bool,

    /// Log request and flow diagnostics to stderr
    #[arg(long, short, global = true)]
    pub(crate) verbose: bool,
}
