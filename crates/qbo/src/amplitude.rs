//! Butterworth-filtered (DD) amplitude.

use std::f64::consts::SQRT_2;

use strato_filter::LowPassConfig;
use strato_stats::population_sd;
use tracing::debug;

use crate::error::QboError;

/// QBO amplitude as `sqrt(2)` times the standard deviation of the
/// low-passed wind, using the default 9th-order filter with a 4-month cutoff.
///
/// # Errors
///
/// See [`amplitude_dd_with`].
pub fn amplitude_dd(u: &[f64]) -> Result<f64, QboError> {
    amplitude_dd_with(u, &LowPassConfig::default())
}

/// [`amplitude_dd`] with an explicit low-pass configuration.
///
/// # Errors
///
/// Returns [`QboError::EmptySeries`] or [`QboError::NonFiniteData`] for
/// unusable input and [`QboError::Filter`] for an invalid filter design.
pub fn amplitude_dd_with(u: &[f64], config: &LowPassConfig) -> Result<f64, QboError> {
    if u.is_empty() {
        return Err(QboError::EmptySeries);
    }
    if u.iter().any(|v| !v.is_finite()) {
        return Err(QboError::NonFiniteData);
    }
    let filtered = config.design()?.apply(u);
    let amplitude = SQRT_2 * population_sd(&filtered);
    debug!(amplitude, order = config.order(), "QBO DD amplitude");
    Ok(amplitude)
}
