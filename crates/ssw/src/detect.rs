//! Sudden stratospheric warming and strong polar vortex detection.

use std::fmt;

use rayon::prelude::*;
use serde::Serialize;
use strato_calendar::Date360;
use tracing::{debug, info, warn};

use crate::config::SswConfig;
use crate::error::SswError;
use crate::runs::runs_where;
use crate::series::DailySeries;
use crate::split::{SeasonMatrix, split_by_doy};

/// Fewest season rows that leave an interior season to analyse.
pub const MIN_SEASON_ROWS: usize = 3;

/// Why a season produced no events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No westerly spell long enough to mark vortex formation.
    NoVortexFormation,
    /// No long westerly spell followed by easterlies.
    NoFinalWarming,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoVortexFormation => f.write_str("no vortex formation"),
            Self::NoFinalWarming => f.write_str("no final warming"),
        }
    }
}

/// A season row that was not analysed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonSkip {
    /// Row index in the season matrix.
    pub season: usize,
    /// Season year of the row.
    pub season_year: i32,
    /// Why the row was skipped.
    pub reason: SkipReason,
}

/// Start and end of the part of a season in which SSWs can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonBounds {
    /// Column of the first long westerly spell.
    pub vortex_formation: usize,
    /// Column of the easterly spell that ends the season.
    pub final_warming: usize,
}

/// A detected SSW or SPV onset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Event {
    /// Row index in the season matrix.
    pub season: usize,
    /// Season year of the row.
    pub season_year: i32,
    /// Column within the row (day of season minus one).
    pub day: usize,
    /// Serial day of the onset.
    pub serial: i64,
}

impl Event {
    /// Calendar date of the onset.
    pub fn date(&self) -> Date360 {
        Date360::from_serial(self.serial)
    }
}

/// Events found in one season row, as column indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowEvents {
    /// The season limits used for the row.
    pub bounds: SeasonBounds,
    /// Columns at which an SSW starts.
    pub ssw: Vec<usize>,
    /// Columns at which a strong-vortex episode starts.
    pub spv: Vec<usize>,
}

/// Outcome of a detection pass over a whole series.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResult {
    ssw: Vec<Event>,
    spv: Vec<Event>,
    skipped: Vec<SeasonSkip>,
    bounds: Vec<(usize, SeasonBounds)>,
    n_seasons: usize,
}

impl DetectionResult {
    fn empty(n_seasons: usize) -> Self {
        Self {
            ssw: Vec::new(),
            spv: Vec::new(),
            skipped: Vec::new(),
            bounds: Vec::new(),
            n_seasons,
        }
    }

    /// SSW onsets, by season then day.
    pub fn ssw(&self) -> &[Event] {
        &self.ssw
    }

    /// SPV onsets, by season then day.
    pub fn spv(&self) -> &[Event] {
        &self.spv
    }

    /// Interior seasons that were skipped.
    pub fn skipped(&self) -> &[SeasonSkip] {
        &self.skipped
    }

    /// `(season, bounds)` of every analysed season.
    pub fn bounds(&self) -> &[(usize, SeasonBounds)] {
        &self.bounds
    }

    /// Number of season rows in the split, including the padded boundary rows.
    pub fn n_seasons(&self) -> usize {
        self.n_seasons
    }

    /// Whether the split had too few rows to hold any interior season.
    ///
    /// Such a result carries no events, skips or bounds.
    pub fn is_insufficient(&self) -> bool {
        self.n_seasons < MIN_SEASON_ROWS
    }

    /// Number of interior seasons that were analysed.
    pub fn n_processed(&self) -> usize {
        self.bounds.len()
    }

    /// Mean number of SSWs per analysed season; NaN if none was analysed.
    pub fn ssw_frequency(&self) -> f64 {
        if self.bounds.is_empty() {
            return f64::NAN;
        }
        self.ssw.len() as f64 / self.bounds.len() as f64
    }
}

/// Finds SSW and SPV events in one season row.
///
/// The row is split into easterly (`< ssw_threshold`) and westerly
/// (`>= ssw_threshold`) runs; NaN belongs to neither. The vortex forms at the
/// first westerly run of at least `init_westerlies` days. The final warming is
/// the easterly run that follows the last westerly run of at least
/// `final_easterlies` days.
///
/// Each easterly run that separates two westerly runs is an SSW candidate
/// with onset `start_n`, previous westerly onset `prev_p` and recovery
/// `start_p`. It counts if it lies strictly between vortex formation and
/// final warming, starts at least `min_separation` days after `prev_p`, and
/// the recovery leaves at least `min_separation` days before the final
/// warming.
///
/// Each weak run (`<= spv_threshold`) followed directly by a strong run
/// (`> spv_threshold`) is an SPV candidate at the strong-run start `start_p`.
/// It counts if the vortex has formed by `start_p` and the weak run lasted
/// at least `min_separation` days.
///
/// # Errors
///
/// Returns the [`SkipReason`] when vortex formation or final warming cannot
/// be located.
pub fn row_to_events(row: &[f64], config: &SswConfig) -> Result<RowEvents, SkipReason> {
    let threshold = config.ssw_threshold();
    let easterly = runs_where(row, |v| v < threshold);
    let westerly = runs_where(row, |v| v >= threshold);

    let formed = westerly
        .first_at_least(config.init_westerlies())
        .ok_or(SkipReason::NoVortexFormation)?;
    let last_long = westerly
        .last_at_least(config.final_easterlies())
        .ok_or(SkipReason::NoFinalWarming)?;
    let final_run = easterly
        .iter()
        .find(|r| r.start >= last_long.end())
        .ok_or(SkipReason::NoFinalWarming)?;
    let bounds = SeasonBounds {
        vortex_formation: formed.start,
        final_warming: final_run.start,
    };

    let min_sep = config.min_separation();
    let ssw = westerly
        .runs()
        .windows(2)
        .filter_map(|pair| {
            let (prev, next) = (pair[0], pair[1]);
            let reversal = easterly.starting_at(prev.end())?;
            (reversal.start < next.start).then_some((prev.start, reversal.start, next.start))
        })
        .filter(|&(prev_p, start_n, start_p)| {
            start_n > bounds.vortex_formation
                && start_n < bounds.final_warming
                && start_n >= prev_p + min_sep
                && bounds.final_warming >= start_p + min_sep
        })
        .map(|(_, start_n, _)| start_n)
        .collect();

    let spv_threshold = config.spv_threshold();
    let weak = runs_where(row, |v| v <= spv_threshold);
    let strong = runs_where(row, |v| v > spv_threshold);
    let spv = weak
        .iter()
        .filter_map(|w| strong.starting_at(w.end()).map(|s| (w.start, s.start)))
        .filter(|&(start_n, start_p)| {
            start_p >= bounds.vortex_formation && start_p >= start_n + min_sep
        })
        .map(|(_, start_p)| start_p)
        .collect();

    Ok(RowEvents { bounds, ssw, spv })
}

/// Detects SSW and SPV events in a daily wind series.
///
/// The series is split into season rows with the configured anchor; the
/// first and last rows are padded and never analysed. A split with fewer
/// than [`MIN_SEASON_ROWS`] rows yields an empty result for which
/// [`DetectionResult::is_insufficient`] holds.
///
/// # Errors
///
/// Returns [`SswError::InvalidConfig`] if `config` fails validation.
pub fn detect_ssws(series: &DailySeries, config: &SswConfig) -> Result<DetectionResult, SswError> {
    let matrix = split_by_doy(series, config.anchor());
    detect_in_matrix(&matrix, config)
}

/// [`detect_ssws`] on an already split series.
///
/// # Errors
///
/// Same as [`detect_ssws`].
pub fn detect_in_matrix(
    matrix: &SeasonMatrix,
    config: &SswConfig,
) -> Result<DetectionResult, SswError> {
    config.validate()?;
    let n_seasons = matrix.n_rows();
    if n_seasons < MIN_SEASON_ROWS {
        warn!(n_seasons, "too few season rows, no interior season to analyse");
        return Ok(DetectionResult::empty(n_seasons));
    }

    let interior = 1..n_seasons - 1;
    let outcomes: Vec<Result<RowEvents, SkipReason>> = if config.parallel() {
        interior
            .clone()
            .into_par_iter()
            .map(|r| row_to_events(matrix.row(r), config))
            .collect()
    } else {
        interior
            .clone()
            .map(|r| row_to_events(matrix.row(r), config))
            .collect()
    };

    let mut result = DetectionResult::empty(n_seasons);
    for (season, outcome) in interior.zip(outcomes) {
        let season_year = matrix.season_year(season);
        let events = match outcome {
            Ok(events) => events,
            Err(reason) => {
                warn!(season, season_year, %reason, "skipping season");
                result.skipped.push(SeasonSkip {
                    season,
                    season_year,
                    reason,
                });
                continue;
            }
        };
        debug!(
            season,
            season_year,
            vortex_formation = events.bounds.vortex_formation,
            final_warming = events.bounds.final_warming,
            n_ssw = events.ssw.len(),
            n_spv = events.spv.len(),
            "season analysed"
        );
        let to_event = |day: usize| Event {
            season,
            season_year,
            day,
            serial: matrix.serial(season, day),
        };
        result.ssw.extend(events.ssw.iter().map(|&d| to_event(d)));
        result.spv.extend(events.spv.iter().map(|&d| to_event(d)));
        result.bounds.push((season, events.bounds));
    }

    info!(
        n_seasons,
        n_processed = result.n_processed(),
        n_skipped = result.skipped.len(),
        n_ssw = result.ssw.len(),
        n_spv = result.spv.len(),
        "SSW detection complete"
    );
    Ok(result)
}
