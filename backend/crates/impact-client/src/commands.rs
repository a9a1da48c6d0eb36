use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Submit a new project, then show the refreshed list
    Submit {
        /// Project name
        #[arg(long)]
        name: String,
        /// Project status (Planned, Ongoing or Completed)
        #[arg(long)]
        status: String,
    },

    /// List all projects
    List,
}
