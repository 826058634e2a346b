use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Stratospheric variability diagnostics for 360-day GCM output.
#[derive(Parser)]
#[command(
    name = "strato",
    version,
    about = "QBO, SSW and jet-latitude diagnostics for 360-day GCM output"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Detect sudden stratospheric warmings and strong vortex events.
    Ssw(SswArgs),
    /// Compute QBO period and amplitude metrics.
    Qbo(QboArgs),
    /// Summarise eddy-driven jet latitude.
    Jet(JetArgs),
}

/// Arguments shared by every subcommand.
#[derive(clap::Args)]
pub struct CommonArgs {
    /// Path to TOML configuration file; defaults apply if it does not exist.
    #[arg(short, long, default_value = "strato.toml")]
    pub config: PathBuf,

    /// Override input NetCDF path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write the JSON report here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `ssw` subcommand.
#[derive(clap::Args)]
pub struct SswArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Pressure level label (e.g. `10hPa`) or model-level index.
    #[arg(short, long)]
    pub level: Option<String>,

    /// Latitude in degrees north; the nearest grid latitude is used.
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Process season rows in parallel.
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for the `qbo` subcommand.
#[derive(clap::Args)]
pub struct QboArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Latitude in degrees north; the nearest grid latitude is used.
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,
}

/// Arguments for the `jet` subcommand.
#[derive(clap::Args)]
pub struct JetArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// First model level of the averaging range.
    #[arg(long)]
    pub level_start: Option<usize>,

    /// Model level one past the end of the averaging range.
    #[arg(long)]
    pub level_end: Option<usize>,
}
