//! impact - Impact Project Tracker CLI
//!
//! Submits projects to and lists projects from the tracker API.
//!
//! # Examples
//!
//! ```bash
//! # List all projects
//! impact list
//!
//! # Submit a project, then print the refreshed page as HTML
//! impact submit --name "River Cleanup" --status Planned --html
//! ```

mod cli;
mod commands;

use crate::{cli::Cli, commands::Commands};

use impact_client::{Client, Controller, HtmlView, ProjectForm, ProjectView, TerminalView};
use impact_config::logger::{LogTarget, dispatch};
use impact_config::{Config, ConfigErrorResult};

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // --verbose logs to stderr; otherwise only a configured log file receives logs
    let (level, log_file) = if cli.verbose {
        (LevelFilter::Debug, None)
    } else {
        match config.log_file_path() {
            Ok(Some(path)) => (*config.logging.level, Some(path)),
            Ok(None) => (LevelFilter::Off, None),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    };

    // Stdout belongs to command output, so console diagnostics go to stderr
    let initialized = dispatch(
        level,
        log_file.as_deref(),
        config.logging.colored,
        LogTarget::Stderr,
    )
    .map_err(|e| e.to_string())
    .and_then(|dispatch| dispatch.apply().map_err(|e| e.to_string()));
    if let Err(e) = initialized {
        eprintln!("Error initializing logger: {}", e);
        return ExitCode::FAILURE;
    }

    let base_url = cli
        .server
        .unwrap_or_else(|| config.client.api_base_url.clone());
    let client = Client::new(&base_url);
    let dismiss = config.client.notice_dismiss();

    let succeeded = if cli.html {
        let view = Arc::new(HtmlView::new());
        let succeeded = run(client, Arc::clone(&view), dismiss, cli.command).await;
        println!("{}", view.render_page());
        succeeded
    } else {
        run(client, Arc::new(TerminalView::stdio()), dismiss, cli.command).await
    };

    if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn load_config() -> ConfigErrorResult<Config> {
    let config = Config::load()?;
    config.validate()?;
    Ok(config)
}

/// Run one command through the controller; true when the flow succeeded.
async fn run<V: ProjectView>(
    client: Client,
    view: Arc<V>,
    dismiss: Duration,
    command: Commands,
) -> bool {
    let controller = Controller::new(client, view, dismiss);

    let result = match command {
        Commands::Submit { name, status } => {
            controller.submit(&ProjectForm::new(name, status)).await
        }
        Commands::List => controller.list().await.map(|_| ()),
    };

    result.is_ok()
}
