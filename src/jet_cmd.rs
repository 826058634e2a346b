//! Jet command: hemispheric jet latitude and its climatology.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span, warn};

use strato_jet::{JetSummary, jet_latitudes, level_mean, seasonal_summaries};

use crate::cli::JetArgs;
use crate::config;
use crate::convert;
use crate::report;

#[derive(Debug, Serialize)]
struct SeasonSummary {
    season: &'static str,
    north: JetSummary,
    south: JetSummary,
}

#[derive(Debug, Serialize)]
struct JetReport {
    input: String,
    level_start: usize,
    level_end: usize,
    n_days: usize,
    north: JetSummary,
    south: JetSummary,
    seasons: Vec<SeasonSummary>,
}

/// Run the jet-latitude diagnostic.
pub fn run(args: JetArgs) -> Result<()> {
    let _cmd = info_span!("jet").entered();
    let config = config::load(&args.common.config)?;

    let input = report::input_path(&args.common, &config.io)?;
    let reader_cfg = convert::build_reader_config(&config.io)?;
    let levels = convert::build_level_range(&config.jet, args.level_start, args.level_end)?;

    let wind = report::load_wind(input, &reader_cfg)?;
    let u = level_mean(wind.field(), levels.clone())
        .with_context(|| format!("cannot average levels {}..{}", levels.start, levels.end))?;
    let jets = jet_latitudes(u.view(), wind.lat()).context("jet latitude search failed")?;
    info!(n_days = jets.north.len(), "jet latitudes computed");

    let seasons = if config.jet.per_season {
        // Seasonal subsets are indexed from January 1.
        match wind.dates().iter().position(|d| d.day_of_year() == 0) {
            Some(offset) => seasonal_summaries(&jets.north[offset..])
                .into_iter()
                .zip(seasonal_summaries(&jets.south[offset..]))
                .map(|((season, north), (_, south))| SeasonSummary {
                    season: season.label(),
                    north,
                    south,
                })
                .collect(),
            None => {
                warn!("series never reaches January 1, skipping seasonal summaries");
                Vec::new()
            }
        }
    } else {
        Vec::new()
    };

    let report = JetReport {
        input: input.display().to_string(),
        level_start: levels.start,
        level_end: levels.end,
        n_days: jets.north.len(),
        north: JetSummary::from_series(&jets.north),
        south: JetSummary::from_series(&jets.south),
        seasons,
    };
    report::write_json(&report, report::output_path(&args.common, &config.io).as_deref())
}
