//! SSW command: detect warmings and strong-vortex events at one grid point.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use strato_ssw::{DailySeries, DetectionResult, Event, SeasonSkip, detect_ssws};

use crate::cli::SswArgs;
use crate::config;
use crate::convert;
use crate::report;

/// One event as written to the report.
#[derive(Debug, Serialize)]
struct EventRecord {
    season: usize,
    season_year: i32,
    day: usize,
    serial: i64,
    date: String,
}

impl From<&Event> for EventRecord {
    fn from(e: &Event) -> Self {
        Self {
            season: e.season,
            season_year: e.season_year,
            day: e.day,
            serial: e.serial,
            date: e.date().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SswReport {
    input: String,
    level: usize,
    latitude: f64,
    n_seasons: usize,
    insufficient_data: bool,
    n_processed: usize,
    n_ssw: usize,
    n_spv: usize,
    ssw_frequency: Option<f64>,
    ssw: Vec<EventRecord>,
    spv: Vec<EventRecord>,
    skipped: Vec<SeasonSkip>,
}

impl SswReport {
    fn new(input: String, level: usize, latitude: f64, result: &DetectionResult) -> Self {
        let frequency = result.ssw_frequency();
        Self {
            input,
            level,
            latitude,
            n_seasons: result.n_seasons(),
            insufficient_data: result.is_insufficient(),
            n_processed: result.n_processed(),
            n_ssw: result.ssw().len(),
            n_spv: result.spv().len(),
            ssw_frequency: frequency.is_finite().then_some(frequency),
            ssw: result.ssw().iter().map(EventRecord::from).collect(),
            spv: result.spv().iter().map(EventRecord::from).collect(),
            skipped: result.skipped().to_vec(),
        }
    }
}

/// Run SSW and SPV detection.
pub fn run(args: SswArgs) -> Result<()> {
    let _cmd = info_span!("ssw").entered();
    let config = config::load(&args.common.config)?;

    let input = report::input_path(&args.common, &config.io)?;
    let reader_cfg = convert::build_reader_config(&config.io)?;
    let mut ssw_cfg = convert::build_ssw_config(&config.ssw)?;
    if args.parallel {
        ssw_cfg = ssw_cfg.with_parallel(true);
    }

    let wind = report::load_wind(input, &reader_cfg)?;
    let level = convert::parse_level(args.level.as_deref().unwrap_or(&config.ssw.level))?;
    let lat_idx = report::latitude_index(&wind, args.lat.unwrap_or(config.ssw.lat))?;
    let latitude = wind.lat()[lat_idx];
    let values = wind.series(level, lat_idx)?;
    info!(level, latitude, n_days = values.len(), "extracted wind series");

    let series = DailySeries::new(wind.dates().to_vec(), values)
        .context("wind series is not a contiguous daily record")?;
    let result = detect_ssws(&series, &ssw_cfg).context("SSW detection failed")?;

    let report = SswReport::new(input.display().to_string(), level, latitude, &result);
    report::write_json(&report, report::output_path(&args.common, &config.io).as_deref())
}
