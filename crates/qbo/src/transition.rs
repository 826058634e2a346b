//! Transition-time (TT) period and amplitude.

use serde::Serialize;
use strato_filter::smooth;
use strato_stats::{covariance_matrix, mean, population_variance};
use tracing::{debug, info};

use crate::error::QboError;

const DAYS_PER_MONTH: f64 = 30.0;

/// Configuration for the transition-time method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    smooth_months: usize,
}

impl Default for TransitionConfig {
    /// Five-month running mean.
    fn default() -> Self {
        Self { smooth_months: 5 }
    }
}

impl TransitionConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the running-mean width in months.
    pub fn with_smooth_months(mut self, months: usize) -> Self {
        self.smooth_months = months;
        self
    }

    /// Returns the running-mean width in months.
    pub fn smooth_months(&self) -> usize {
        self.smooth_months
    }
}

/// Summary of QBO cycles delimited by easterly-to-westerly transitions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionMetrics {
    /// Day indices at which the smoothed wind turns westerly.
    pub transitions: Vec<usize>,
    /// Length of each complete cycle in months.
    pub periods: Vec<f64>,
    /// Half the peak-to-peak smoothed wind within each cycle.
    pub amplitudes: Vec<f64>,
    /// Mean cycle length in months.
    pub mean_period: f64,
    /// Mean cycle amplitude.
    pub mean_amplitude: f64,
    /// Population variance of the cycle lengths.
    pub var_period: f64,
    /// Population variance of the cycle amplitudes.
    pub var_amplitude: f64,
    /// Sample covariance matrix of (period, amplitude); `None` with a
    /// single cycle.
    pub covariance: Option<[[f64; 2]; 2]>,
}

/// Day indices `it >= 1` where `s[it] >= 0` and `s[it - 1] <= 0`.
pub fn transition_times(smoothed: &[f64]) -> Vec<usize> {
    smoothed
        .windows(2)
        .enumerate()
        .filter(|(_, w)| w[1] >= 0.0 && w[0] <= 0.0)
        .map(|(i, _)| i + 1)
        .collect()
}

/// Computes QBO period and amplitude statistics with the transition-time
/// method.
///
/// The series is smoothed with a centered running mean, each transition to
/// westerlies starts a new cycle, and the cycles between consecutive
/// transitions are measured.
///
/// # Errors
///
/// - [`QboError::EmptySeries`] / [`QboError::NonFiniteData`] for unusable input.
/// - [`QboError::TooFewTransitions`] if fewer than two transitions are found.
/// - [`QboError::Filter`] if the smoothing window is zero.
pub fn transition_metrics(
    u: &[f64],
    config: &TransitionConfig,
) -> Result<TransitionMetrics, QboError> {
    if u.is_empty() {
        return Err(QboError::EmptySeries);
    }
    if u.iter().any(|v| !v.is_finite()) {
        return Err(QboError::NonFiniteData);
    }

    let smoothed = smooth(u, config.smooth_months)?;
    let transitions = transition_times(&smoothed);
    debug!(?transitions, "QBO transition times");
    if transitions.len() < 2 {
        return Err(QboError::TooFewTransitions {
            found: transitions.len(),
        });
    }

    let (periods, amplitudes): (Vec<f64>, Vec<f64>) = transitions
        .windows(2)
        .map(|w| {
            let cycle = &smoothed[w[0]..w[1]];
            let max = cycle.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let min = cycle.iter().copied().fold(f64::INFINITY, f64::min);
            ((w[1] - w[0]) as f64 / DAYS_PER_MONTH, 0.5 * (max - min))
        })
        .unzip();

    let metrics = TransitionMetrics {
        mean_period: mean(&periods),
        mean_amplitude: mean(&amplitudes),
        var_period: population_variance(&periods),
        var_amplitude: population_variance(&amplitudes),
        covariance: covariance_matrix(&periods, &amplitudes),
        transitions,
        periods,
        amplitudes,
    };
    info!(
        n_cycles = metrics.periods.len(),
        mean_period = metrics.mean_period,
        mean_amplitude = metrics.mean_amplitude,
        "QBO transition-time metrics"
    );
    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_include_touching_zero() {
        let s = [-1.0, 0.0, 1.0, -1.0, 2.0];
        // it=1: 0>=0 && -1<=0; it=2: 1>=0 && 0<=0; it=4.
        assert_eq!(transition_times(&s), vec![1, 2, 4]);
    }

    #[test]
    fn no_transitions_in_constant_westerlies() {
        assert!(transition_times(&[3.0; 10]).is_empty());
    }

    #[test]
    fn empty_and_non_finite() {
        let cfg = TransitionConfig::default();
        assert_eq!(transition_metrics(&[], &cfg).unwrap_err(), QboError::EmptySeries);
        assert_eq!(
            transition_metrics(&[1.0, f64::NAN], &cfg).unwrap_err(),
            QboError::NonFiniteData
        );
    }

    #[test]
    fn constant_series_has_no_cycles() {
        let err = transition_metrics(&[5.0; 400], &TransitionConfig::default()).unwrap_err();
        assert_eq!(err, QboError::TooFewTransitions { found: 0 });
    }

    #[test]
    fn default_config() {
        assert_eq!(TransitionConfig::new().smooth_months(), 5);
    }
}
