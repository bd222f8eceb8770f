use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use mandelbrot_explorer::{ExplorerConfig, PixelsPresenterFactory, RunGuiCommand, logging};

/// Explore the Mandelbrot set in a window.
#[derive(Debug, Parser)]
#[command(name = "gui", version, about)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long, default_value = "mandelbrot_explorer.toml")]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ExplorerConfig::load_from(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    logging::init_tracing(&config.logging.filter);

    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), config);

    command.execute()
}
