//! Centered running mean with reflective boundaries.

use crate::error::FilterError;

/// Days per model month.
const DAYS_PER_MONTH: usize = 30;

/// Smooths a daily series with an `n_months * 30`-day centered running mean.
///
/// Five months is the conventional window for QBO transition detection.
///
/// # Errors
///
/// See [`running_mean`].
pub fn smooth(u: &[f64], n_months: usize) -> Result<Vec<f64>, FilterError> {
    running_mean(u, n_months * DAYS_PER_MONTH)
}

/// Centered running mean of width `window`.
///
/// The window for output `i` covers input `[i - window/2, i + (window-1)/2]`.
/// Positions outside the series are mirrored about the half-sample edge
/// (`d c b a | a b c d | d c b a`), so every output averages exactly
/// `window` values.
///
/// # Errors
///
/// Returns [`FilterError::EmptyInput`] for an empty series and
/// [`FilterError::ZeroWindow`] if `window` is zero.
pub fn running_mean(u: &[f64], window: usize) -> Result<Vec<f64>, FilterError> {
    if u.is_empty() {
        return Err(FilterError::EmptyInput);
    }
    if window == 0 {
        return Err(FilterError::ZeroWindow);
    }
    let n = u.len() as isize;
    let left = (window / 2) as isize;
    let right = ((window - 1) / 2) as isize;
    let at = |j: isize| u[reflect(j, n)];

    let mut sum: f64 = (-left..=right).map(at).sum();
    let mut out = Vec::with_capacity(u.len());
    out.push(sum / window as f64);
    for i in 1..n {
        sum += at(i + right) - at(i - left - 1);
        out.push(sum / window as f64);
    }
    Ok(out)
}

/// Maps any index onto `0..n` by half-sample symmetric reflection.
fn reflect(j: isize, n: isize) -> usize {
    let period = 2 * n;
    let m = j.rem_euclid(period);
    if m < n { m as usize } else { (period - 1 - m) as usize }
}
