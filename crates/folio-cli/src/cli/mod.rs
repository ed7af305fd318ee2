//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use folio_core::config::{self, Config};

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Terminal client for a portfolio/blog platform")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Backend base URL (overrides config file and FOLIO_BASE_URL)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Check backend reachability, endpoint by endpoint
    Status,
    /// Configuration helpers
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Subcommand)]
enum ConfigAction {
    /// Print the config file path
    Path,
    /// Save the backend base URL to the config file
    SetUrl {
        #[arg(value_name = "URL")]
        url: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Held for the process lifetime so buffered log lines are flushed.
    let _log_guard = crate::logging::init();

    // The config subcommands must work even when the stored config is
    // broken, so the file is only loaded and resolved where a backend is
    // actually needed.
    match cli.command {
        Some(Commands::Config {
            action: ConfigAction::Path,
        }) => {
            println!("{}", config::paths::config_path().display());
            Ok(())
        }
        Some(Commands::Config {
            action: ConfigAction::SetUrl { url },
        }) => {
            Config::save_base_url(&url)?;
            println!("Saved base_url = {url}");
            Ok(())
        }
        Some(Commands::Status) => {
            let config = Config::load()?;
            let base_url = config.resolve_base_url(cli.base_url.as_deref())?;
            runtime()?.block_on(commands::status::run(&base_url))
        }
        None => {
            let config = Config::load()?;
            let base_url = config.resolve_base_url(cli.base_url.as_deref())?;
            runtime()?.block_on(folio_tui::run(config, &base_url))
        }
    }
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}
