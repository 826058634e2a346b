//! Shared input resolution and JSON report output.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use strato_io::{ReaderConfig, ZonalWind, read_zonal_wind};
use tracing::info;

use crate::cli::CommonArgs;
use crate::config::IoToml;

/// Input path from the command line, falling back to `[io].input`.
pub fn input_path<'a>(args: &'a CommonArgs, io: &'a IoToml) -> Result<&'a Path> {
    args.input
        .as_deref()
        .or(io.input.as_deref())
        .ok_or_else(|| anyhow!("no input path: set [io].input in config or use --input"))
}

/// Output path from the command line, falling back to `[io].output`.
pub fn output_path(args: &CommonArgs, io: &IoToml) -> Option<PathBuf> {
    args.output.clone().or_else(|| io.output.clone())
}

/// Reads the zonal-mean wind, attaching the path to any failure.
pub fn load_wind(path: &Path, reader: &ReaderConfig) -> Result<ZonalWind> {
    info!(path = %path.display(), "reading zonal wind");
    read_zonal_wind(path, reader)
        .with_context(|| format!("failed to read NetCDF: {}", path.display()))
}

/// Grid index nearest to `degrees`.
pub fn latitude_index(wind: &ZonalWind, degrees: f64) -> Result<usize> {
    wind.nearest_lat(degrees)
        .ok_or_else(|| anyhow!("no grid latitude near {degrees}"))
}

/// Serialises `report` as pretty JSON to `output`, or stdout if `None`.
pub fn write_json<T: Serialize>(report: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("failed to serialise report")?;
    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
