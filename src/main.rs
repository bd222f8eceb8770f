use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use mandelbrot_explorer::{
    CliRenderController, ColourSchemeKind, Complex, ExplorerConfig, ExportFormat, FrameSize,
    ImageFileExporter, ViewportState, logging,
};

/// Render a view of the Mandelbrot set to an image file.
#[derive(Debug, Parser)]
#[command(name = "mandelbrot_explorer", version, about)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long, default_value = "mandelbrot_explorer.toml")]
    config: PathBuf,

    #[arg(long, default_value_t = -0.5, allow_negative_numbers = true)]
    center_real: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    center_imag: f64,

    /// Number of ×2.5 click-zooms applied at the center.
    #[arg(long, default_value_t = 0)]
    zooms: u32,

    /// Iteration budget, clamped to 50..=1000 in steps of 25.
    #[arg(long, default_value_t = 150)]
    iterations: u32,

    /// classical, monochrome, ember, azure, amethyst or sage.
    #[arg(long, default_value_t = ColourSchemeKind::default())]
    scheme: ColourSchemeKind,

    /// Canvas width; defaults to the configured width.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height; defaults to the configured height.
    #[arg(long)]
    height: Option<u32>,

    /// Explicit output file. Defaults to the dated export name inside the
    /// configured export directory.
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// png or ppm; defaults to the configured format.
    #[arg(long)]
    format: Option<ExportFormat>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ExplorerConfig::load_from(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    logging::init_tracing(&config.logging.filter);

    let size = FrameSize::new(
        cli.width.unwrap_or(config.canvas.width),
        cli.height.unwrap_or(config.canvas.height),
    )
    .context("invalid canvas size")?;

    let mut viewport = ViewportState::new(
        Complex::new(cli.center_real, cli.center_imag),
        cli.iterations,
        cli.scheme,
    );
    for _ in 0..cli.zooms {
        viewport.zoom_in();
    }

    let format = cli.format.unwrap_or(config.export.format);
    let mut controller = CliRenderController::new(ImageFileExporter::new(format));

    let duration = controller.render(viewport, size);
    info!(?duration, "render complete");

    let readout = viewport.readout();
    println!(
        "Center: {}, {}  Zoom: {}  Iterations: {}",
        readout.center_real,
        readout.center_imag,
        readout.magnification,
        viewport.max_iterations()
    );

    let path = match cli.output {
        Some(path) => {
            controller
                .write(&path)
                .with_context(|| format!("writing {}", path.display()))?;
            path
        }
        None => controller
            .export_to(&config.export.directory)
            .context("exporting frame")?,
    };

    println!("Saved to {}", path.display());
    Ok(())
}
