//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use meridian_core::{config, logging};

mod commands;

#[derive(Parser)]
#[command(name = "meridian")]
#[command(version)]
#[command(about = "Meridian Advisory client portal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the backend base address from config
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Open the portal at this path (e.g. /contact)
    #[arg(long, value_name = "PATH")]
    open: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let mut config = config::Config::load().context("load config")?;
    if let Some(base) = cli.base_url {
        config.base_url = base;
    }

    // default to the portal
    let Some(command) = cli.command else {
        let _log_guard = logging::init().context("initialize logging")?;
        tracing::info!(base_url = %config.base_url, "starting portal");
        return commands::portal::run(&config, cli.open.as_deref()).await;
    };

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
