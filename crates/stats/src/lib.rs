//! Statistical helper functions for the strato metric crates.
//!
//! Population statistics (`N` denominator) match what the metric
//! definitions call "variance" and "standard deviation"; the sample
//! versions (`N - 1`) are used for covariance matrices.

/// Arithmetic mean of a slice. Returns NaN if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population variance (N denominator). Returns NaN if empty.
pub fn population_variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / data.len() as f64
}

/// Population standard deviation (N denominator). Returns NaN if empty.
pub fn population_sd(data: &[f64]) -> f64 {
    population_variance(data).sqrt()
}

/// Sample variance with N-1 denominator.
/// Returns NaN if fewer than 2 elements.
pub fn sample_variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return f64::NAN;
    }
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / (n as f64 - 1.0)
}

/// 2x2 sample covariance matrix (N-1 denominator) of two equal-length series.
///
/// Returns `None` if the lengths differ or fewer than 2 pairs are given.
pub fn covariance_matrix(x: &[f64], y: &[f64]) -> Option<[[f64; 2]; 2]> {
    let n = x.len();
    if n != y.len() || n < 2 {
        return None;
    }
    let mx = mean(x);
    let my = mean(y);
    let denom = n as f64 - 1.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    let mut sxy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mx;
        let dy = yi - my;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }
    let cxy = sxy / denom;
    Some([[sxx / denom, cxy], [cxy, syy / denom]])
}

/// Index of the first maximum, ignoring NaN. Returns `None` if there is no
/// finite or infinite value to compare.
pub fn argmax(data: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in data.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}
