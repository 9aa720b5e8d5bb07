//! latebind - Entry Point

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use latebind::cli::{Cli, execute};
use latebind::infrastructure::config::ConfigLoader;
use latebind::infrastructure::logging::init_logging;
use latebind::infrastructure::Composition;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("Loading configuration")?;
    init_logging(&config.logging)?;

    let composition = Composition::from_config(&config);
    let output = execute(&cli.command, &composition).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
