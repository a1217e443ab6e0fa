//! tint - color conversion table on the command line
//!
//! Lists the conversion table and runs conversions on literal pixels.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tint_color::XyzScale;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "tint")]
#[command(author, version, about = "BGR/RGB/XYZ/LUV/GRAY/CMY conversions")]
#[command(long_about = "
Runs the tint conversion table on pixels given on the command line.

Examples:
  tint list                               # Show every conversion and its stages
  tint pixel BGR2LUV 0,0,0 255,255,255    # Convert two BGR pixels to LUV
  tint pixel rgb2gray 128,64,32
  tint pixel XYZ2LUV 41.24,21.27,1.93     # XYZ in percent scale
  tint pixel XYZ2LUV 0.41,0.21,0.02 --scale unit
  tint pixel CMY2BGR 0.2,0.4,0.6
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug logging; RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// List every conversion with its source, target and stages
    #[command(visible_alias = "ls")]
    List,

    /// Convert literal pixels
    #[command(visible_alias = "p")]
    Pixel(PixelArgs),
}

#[derive(Args)]
struct PixelArgs {
    /// Conversion name, e.g. BGR2LUV (case-insensitive)
    conversion: String,

    /// Pixels as comma-separated triples, e.g. 255,128,0
    #[arg(required = true, allow_hyphen_values = true)]
    pixels: Vec<String>,

    /// Scale of XYZ input
    #[arg(long, value_enum, default_value = "percent")]
    scale: ScaleArg,
}

/// Scale of XYZ values given on the command line.
#[derive(Copy, Clone, Debug, ValueEnum)]
enum ScaleArg {
    /// White has Y = 100
    Percent,
    /// White has Y = 1
    Unit,
}

impl From<ScaleArg> for XyzScale {
    fn from(arg: ScaleArg) -> Self {
        match arg {
            ScaleArg::Percent => XyzScale::Percent,
            ScaleArg::Unit => XyzScale::Unit,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::List => commands::list::run(cli.verbose),
        Commands::Pixel(args) => commands::pixel::run(args, cli.verbose),
    }
}
