//! Climatological summaries of a jet-latitude series.

use serde::Serialize;
use strato_calendar::{Season, SeasonalIndices};
use strato_stats::{mean, population_sd, population_variance};

/// Mean, variance and standard deviation of jet latitude.
///
/// Variance and standard deviation use the population (N) denominator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JetSummary {
    /// Mean latitude (degrees).
    pub mean: f64,
    /// Variance (degrees squared).
    pub variance: f64,
    /// Standard deviation (degrees).
    pub sd: f64,
}

impl JetSummary {
    /// Summarises a latitude series; all fields are NaN when it is empty.
    pub fn from_series(latitudes: &[f64]) -> Self {
        Self {
            mean: mean(latitudes),
            variance: population_variance(latitudes),
            sd: population_sd(latitudes),
        }
    }
}

/// Summaries of the days falling in each meteorological season.
///
/// The series is assumed to start on January 1.
pub fn seasonal_summaries(latitudes: &[f64]) -> Vec<(Season, JetSummary)> {
    let indices = SeasonalIndices::new(latitudes.len());
    Season::ALL
        .iter()
        .map(|&season| {
            let subset: Vec<f64> = indices.get(season).iter().map(|&i| latitudes[i]).collect();
            (season, JetSummary::from_series(&subset))
        })
        .collect()
}
