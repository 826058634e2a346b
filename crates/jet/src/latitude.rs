//! Jet latitude as the latitude of maximum zonal-mean wind.

use std::ops::Range;

use ndarray::{Array2, ArrayView2, ArrayView3, Axis, s};
use strato_stats::argmax;
use tracing::debug;

use crate::error::JetError;

/// Daily jet latitudes in each hemisphere.
#[derive(Debug, Clone, PartialEq)]
pub struct JetLatitudes {
    /// Northern-hemisphere jet latitude per time step.
    pub north: Vec<f64>,
    /// Southern-hemisphere jet latitude per time step.
    pub south: Vec<f64>,
}

/// Averages a `[time][level][lat]` field over `levels`.
///
/// The 200 hPa jet is conventionally taken from model levels 27..29 and the
/// 850 hPa eddy-driven jet from 36..39.
///
/// # Errors
///
/// Returns [`JetError::InvalidLevelRange`] if `levels` is empty or runs past
/// the level axis.
pub fn level_mean(u: ArrayView3<'_, f64>, levels: Range<usize>) -> Result<Array2<f64>, JetError> {
    let n_levels = u.len_of(Axis(1));
    if levels.is_empty() || levels.end > n_levels {
        return Err(JetError::InvalidLevelRange {
            start: levels.start,
            end: levels.end,
            n_levels,
        });
    }
    let slab = u.slice(s![.., levels.clone(), ..]);
    slab.mean_axis(Axis(1)).ok_or(JetError::InvalidLevelRange {
        start: levels.start,
        end: levels.end,
        n_levels,
    })
}

/// Finds the jet latitude in each hemisphere for every time step.
///
/// `u` is `[time][lat]` with latitudes ordered south to north. The northern
/// jet is the latitude of the wind maximum over indices `n_lat / 2..`; the
/// southern jet is the maximum over `..n_lat / 2`. Ties go to the first
/// (southernmost) latitude and NaN winds are ignored.
///
/// # Errors
///
/// - [`JetError::LatitudeMismatch`] if `lat` does not match the latitude axis.
/// - [`JetError::TooFewLatitudes`] for fewer than two latitudes.
/// - [`JetError::NoMaximum`] if a hemisphere is all NaN at some time step.
pub fn jet_latitudes(u: ArrayView2<'_, f64>, lat: &[f64]) -> Result<JetLatitudes, JetError> {
    let n_lat = u.len_of(Axis(1));
    if n_lat != lat.len() {
        return Err(JetError::LatitudeMismatch {
            wind: n_lat,
            lat: lat.len(),
        });
    }
    if n_lat < 2 {
        return Err(JetError::TooFewLatitudes { n_lat });
    }
    let half = n_lat / 2;

    let mut north = Vec::with_capacity(u.nrows());
    let mut south = Vec::with_capacity(u.nrows());
    for (time, profile) in u.outer_iter().enumerate() {
        let profile = profile.to_vec();
        let nh = argmax(&profile[half..]).ok_or(JetError::NoMaximum { time })?;
        let sh = argmax(&profile[..half]).ok_or(JetError::NoMaximum { time })?;
        north.push(lat[half + nh]);
        south.push(lat[sh]);
    }
    debug!(n_time = north.len(), n_lat, "jet latitudes");
    Ok(JetLatitudes { north, south })
}
