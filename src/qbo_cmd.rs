//! QBO command: transition-time, low-pass amplitude and spectral period.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use strato_filter::deseasonalize;
use strato_io::ZonalWind;
use strato_qbo::{
    SpectralPeak, TransitionMetrics, amplitude_dd_with, spectral_peak, transition_metrics,
};

use crate::cli::QboArgs;
use crate::config;
use crate::convert;
use crate::report;

#[derive(Debug, Serialize)]
struct LevelAmplitude {
    level: String,
    index: usize,
    amplitude: f64,
}

#[derive(Debug, Serialize)]
struct QboReport {
    input: String,
    latitude: f64,
    deseasonalized: bool,
    tt_level: String,
    transition: TransitionMetrics,
    dd_amplitude: Vec<LevelAmplitude>,
    fft_level: String,
    fft: SpectralPeak,
}

/// Model-level index and wind at `label`, optionally with the mean annual
/// cycle removed.
fn level_series(
    wind: &ZonalWind,
    label: &str,
    lat_idx: usize,
    deseason: bool,
) -> Result<(usize, Vec<f64>)> {
    let level = convert::parse_level(label)?;
    let values = wind
        .series(level, lat_idx)
        .with_context(|| format!("no wind at level {label}"))?;
    if !deseason {
        return Ok((level, values));
    }
    // Day 0 is January 1 of year 0.
    let days: Vec<i64> = wind.dates().iter().map(|d| d.serial() - 31).collect();
    Ok((level, deseasonalize(&values, &days)?))
}

/// Run the QBO metrics.
pub fn run(args: QboArgs) -> Result<()> {
    let _cmd = info_span!("qbo").entered();
    let config = config::load(&args.common.config)?;
    let qbo = &config.qbo;

    let input = report::input_path(&args.common, &config.io)?;
    let reader_cfg = convert::build_reader_config(&config.io)?;
    let tt_cfg = convert::build_transition_config(qbo)?;
    let lp_cfg = convert::build_lowpass_config(qbo)?;

    let wind = report::load_wind(input, &reader_cfg)?;
    let lat_idx = report::latitude_index(&wind, args.lat.unwrap_or(qbo.lat))?;
    let latitude = wind.lat()[lat_idx];
    info!(latitude, n_days = wind.n_time(), "computing QBO metrics");

    let (_, tt_series) = level_series(&wind, &qbo.tt_level, lat_idx, qbo.deseasonalize)?;
    let transition = transition_metrics(&tt_series, &tt_cfg)
        .with_context(|| format!("transition-time metrics failed at {}", qbo.tt_level))?;

    let dd_amplitude = qbo
        .dd_levels
        .iter()
        .map(|label| -> Result<LevelAmplitude> {
            let (index, values) = level_series(&wind, label, lat_idx, qbo.deseasonalize)?;
            let amplitude = amplitude_dd_with(&values, &lp_cfg)
                .with_context(|| format!("low-pass amplitude failed at {label}"))?;
            Ok(LevelAmplitude {
                level: label.clone(),
                index,
                amplitude,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let (_, fft_series) = level_series(&wind, &qbo.fft_level, lat_idx, qbo.deseasonalize)?;
    let fft = spectral_peak(&fft_series)
        .with_context(|| format!("spectral period failed at {}", qbo.fft_level))?;

    let report = QboReport {
        input: input.display().to_string(),
        latitude,
        deseasonalized: qbo.deseasonalize,
        tt_level: qbo.tt_level.clone(),
        transition,
        dd_amplitude,
        fft_level: qbo.fft_level.clone(),
        fft,
    };
    report::write_json(&report, report::output_path(&args.common, &config.io).as_deref())
}
