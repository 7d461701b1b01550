use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use convlab::assets::AssetLoader;
use convlab::models::{parse_kernel, validate_resolution, AppConfig};
use convlab::services::{collect_frame_paths, frame_period, load_image, run_live, LiveProcessor};
use pixel_conv::{extract_grid_region, grid_to_csv, BorderMode, DisplayMode, PresetTable};

#[derive(Parser)]
#[command(name = "convlab")]
#[command(about = "3x3 convolution lab - sample images into pixel grids and filter them")]
struct Cli {
    /// Config file (overrides CONFIG_FILE and the embedded default)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Kernel selection shared by `convolve` and `live`
#[derive(Args)]
struct KernelArgs {
    /// Preset id (see `convlab presets`)
    #[arg(short, long, conflicts_with = "kernel")]
    preset: Option<String>,

    /// Custom kernel: nine weights in row-major order, e.g. "0,-1,0,-1,5,-1,0,-1,0"
    #[arg(short, long, allow_hyphen_values = true)]
    kernel: Option<String>,

    /// Divisor for --kernel (defaults to the weight sum, or 1 when it is 0)
    #[arg(short, long, requires = "kernel")]
    divisor: Option<f32>,

    /// Target grid width (height follows the aspect ratio)
    #[arg(short, long)]
    resolution: Option<u32>,

    /// Border handling: clamp or pass-through
    #[arg(short, long)]
    border: Option<BorderMode>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available kernel presets
    Presets,
    /// Sample an image, convolve it and print the grid as CSV
    Convolve {
        /// Input image (PNG or JPEG)
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        selection: KernelArgs,

        /// Cell format: rgb, hex or gray
        #[arg(short, long)]
        mode: Option<DisplayMode>,

        /// Write CSV to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print a square region of an image at native resolution
    Inspect {
        /// Input image (PNG or JPEG)
        #[arg(short, long)]
        input: PathBuf,

        /// Left edge of the region
        #[arg(short, long)]
        x: u32,

        /// Top edge of the region
        #[arg(short, long)]
        y: u32,

        /// Region edge length in pixels
        #[arg(short, long, default_value_t = 9)]
        size: u32,

        /// Cell format: rgb, hex or gray
        #[arg(short, long)]
        mode: Option<DisplayMode>,
    },
    /// Replay images as a frame stream through the live processor
    Live {
        /// Input image, or a directory of images played in name order
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        selection: KernelArgs,

        /// Frames per second
        #[arg(long, default_value_t = 10.0)]
        fps: f32,

        /// Number of ticks to run (default: one pass over the inputs)
        #[arg(long)]
        frames: Option<usize>,

        /// Also print each filtered grid as CSV in this format
        #[arg(short, long)]
        mode: Option<DisplayMode>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let loader = AssetLoader::from_env(cli.config);

    match cli.command {
        Some(Commands::Presets) => {
            init_tracing("convlab=warn");
            run_presets_command(&loader)
        }
        Some(Commands::Convolve {
            input,
            selection,
            mode,
            output,
        }) => {
            init_tracing("convlab=warn");
            run_convolve_command(&loader, &input, &selection, mode, output.as_deref())
        }
        Some(Commands::Inspect {
            input,
            x,
            y,
            size,
            mode,
        }) => {
            init_tracing("convlab=warn");
            run_inspect_command(&loader, &input, x, y, size, mode)
        }
        Some(Commands::Live {
            input,
            selection,
            fps,
            frames,
            mode,
        }) => {
            init_tracing("convlab=info");
            run_live_command(&loader, &input, &selection, fps, frames, mode).await
        }
        None => {
            run_status_command(&loader);
            Ok(())
        }
    }
}

/// Log to stderr so CSV on stdout stays clean
fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Load config and the preset table built from it
fn load_config(loader: &AssetLoader) -> anyhow::Result<(AppConfig, Arc<PresetTable>)> {
    let config = AppConfig::load_from_assets(loader);
    let presets = config
        .preset_table()
        .context("Invalid preset in configuration")?;
    Ok((config, Arc::new(presets)))
}

/// Build a processor from config, then apply command line overrides
fn build_processor(
    config: &AppConfig,
    presets: Arc<PresetTable>,
    args: &KernelArgs,
) -> anyhow::Result<LiveProcessor> {
    let resolution = validate_resolution(args.resolution.unwrap_or(config.resolution))?;
    let mut processor = LiveProcessor::new(presets, resolution)?;

    let border = match args.border {
        Some(border) => border,
        None => config.border_mode()?,
    };
    processor.set_border(border);

    if let Some(ref weights) = args.kernel {
        processor.set_kernel(parse_kernel(weights, args.divisor)?);
    } else {
        let id = args.preset.as_deref().unwrap_or(&config.default_preset);
        processor.select_preset(id)?;
    }

    tracing::info!(
        resolution,
        border = %processor.border(),
        preset = processor.preset_id().unwrap_or("custom"),
        "Processor ready"
    );
    Ok(processor)
}

fn display_mode(config: &AppConfig, requested: Option<DisplayMode>) -> anyhow::Result<DisplayMode> {
    match requested {
        Some(mode) => Ok(mode),
        None => Ok(config.display_mode()?),
    }
}

fn run_presets_command(loader: &AssetLoader) -> anyhow::Result<()> {
    let (_, presets) = load_config(loader)?;

    for preset in presets.iter() {
        println!("{:<16} {} (divisor {})", preset.id, preset.name, preset.kernel.divisor());
        if !preset.description.is_empty() {
            println!("{:<16} {}", "", preset.description);
        }
        if !preset.formula.is_empty() {
            println!("{:<16} {}", "", preset.formula);
        }
        for row in preset.kernel.weights() {
            println!("{:<16} [{:>5} {:>5} {:>5}]", "", row[0], row[1], row[2]);
        }
    }
    Ok(())
}

fn run_convolve_command(
    loader: &AssetLoader,
    input: &Path,
    args: &KernelArgs,
    mode: Option<DisplayMode>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let (config, presets) = load_config(loader)?;
    let mode = display_mode(&config, mode)?;
    let processor = build_processor(&config, presets, args)?;

    let image = load_image(input)?;
    let frame = processor
        .process_frame(&image)
        .with_context(|| format!("{} has no pixels", input.display()))?;
    let csv = frame.to_csv(mode);

    match output {
        Some(path) => {
            fs::write(path, format!("{csv}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "Wrote {}x{} grid to {}",
                frame.filtered.width(),
                frame.filtered.height(),
                path.display()
            );
        }
        None => println!("{csv}"),
    }
    Ok(())
}

fn run_inspect_command(
    loader: &AssetLoader,
    input: &Path,
    x: u32,
    y: u32,
    size: u32,
    mode: Option<DisplayMode>,
) -> anyhow::Result<()> {
    let (config, _) = load_config(loader)?;
    let mode = display_mode(&config, mode)?;

    let image = load_image(input)?;
    let region = extract_grid_region(&image, x, y, size)
        .with_context(|| format!("Cannot extract a region from {}", input.display()))?;
    tracing::info!(x, y, size = region.width(), "Extracted region");

    println!("{}", grid_to_csv(&region, mode));
    Ok(())
}

async fn run_live_command(
    loader: &AssetLoader,
    input: &Path,
    args: &KernelArgs,
    fps: f32,
    frames: Option<usize>,
    mode: Option<DisplayMode>,
) -> anyhow::Result<()> {
    let (config, presets) = load_config(loader)?;
    let processor = build_processor(&config, presets, args)?;
    let period = frame_period(fps)?;

    let images = collect_frame_paths(input)?
        .iter()
        .map(|path| load_image(path))
        .collect::<Result<Vec<_>, _>>()?;
    let ticks = frames.unwrap_or(images.len());
    tracing::info!(inputs = images.len(), ticks, fps, "Starting live session");

    let stats = run_live(&processor, &images, period, ticks, |tick, frame| {
        if let Some(mode) = mode {
            println!("# frame {tick}");
            println!("{}", frame.to_csv(mode));
        }
    })
    .await;

    if stats.processed == 0 && ticks > 0 {
        anyhow::bail!("No frames could be processed");
    }
    Ok(())
}

/// Print version, configuration and available commands
fn run_status_command(loader: &AssetLoader) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Header
    println!("convlab v{VERSION} - 3x3 convolution lab");
    println!("Sample images into pixel grids and filter them with kernels\n");

    // Environment variables section
    let config_file = std::env::var("CONFIG_FILE").ok();
    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    // Configuration section
    println!("\nConfiguration:");
    println!("  Source:     {}", loader.config_source());

    let config = AppConfig::load_from_assets(loader);
    println!("  Resolution: {}", config.resolution);
    println!("  Mode:       {}", config.mode);
    println!("  Border:     {}", config.border);
    println!("  Preset:     {}", config.default_preset);
    match config.preset_table() {
        Ok(table) => println!("  Presets:    {} ({})", table.len(), table.ids().collect::<Vec<_>>().join(", ")),
        Err(e) => println!("  Presets:    invalid ({e})"),
    }
    if let Err(e) = config.validate() {
        println!("  Warning:    {e}");
    }

    // Commands section
    println!("\nCommands:");
    println!("  convlab presets    List kernel presets");
    println!("  convlab convolve   Sample and convolve an image, print CSV");
    println!("  convlab inspect    Print a native-resolution region as CSV");
    println!("  convlab live       Replay images through the live processor");
    println!("\nRun 'convlab --help' for more details.");
}
