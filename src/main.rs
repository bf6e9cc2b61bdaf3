#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;

mod backup;
mod cli;
mod config;
mod utils;

use backup::BackupInitializer;
use cli::Cli;
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Validated only after flag overrides.
    let mut config = Config::load(cli.config.as_deref()).context("failed to load config")?;
    cli.apply_to(&mut config);
    config.validate().context("invalid config")?;

    utils::logging::init_tracing(&config.logging);

    let initializer =
        BackupInitializer::from_config(&config.backup).context("invalid table list")?;
    initializer
        .initialize()
        .context("failed to prepare backup directory")?;

    Ok(())
}
