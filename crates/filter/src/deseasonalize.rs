//! Removal of the mean annual cycle.

use tracing::debug;

use crate::error::FilterError;

const DAYS_PER_YEAR: i64 = 360;
const DAYS_PER_MONTH: i64 = 30;

/// Subtracts the climatological mean of each calendar month.
///
/// `time` holds a day counter aligned to the 360-day year (day 0 is
/// January 1); day `t` belongs to month `(t mod 360) / 30`. Every value has the
/// mean of all values sharing its month removed, so the output has zero mean
/// within each month. NaN values propagate into their month's mean.
///
/// # Errors
///
/// Returns [`FilterError::EmptyInput`] for an empty series and
/// [`FilterError::LengthMismatch`] if `values` and `time` differ in length.
pub fn deseasonalize(values: &[f64], time: &[i64]) -> Result<Vec<f64>, FilterError> {
    if values.len() != time.len() {
        return Err(FilterError::LengthMismatch {
            values: values.len(),
            times: time.len(),
        });
    }
    if values.is_empty() {
        return Err(FilterError::EmptyInput);
    }

    let month_of = |t: i64| (t.rem_euclid(DAYS_PER_YEAR) / DAYS_PER_MONTH) as usize;

    let mut sums = [0.0_f64; 12];
    let mut counts = [0_usize; 12];
    for (&v, &t) in values.iter().zip(time) {
        let m = month_of(t);
        sums[m] += v;
        counts[m] += 1;
    }
    let means: Vec<f64> = sums
        .iter()
        .zip(&counts)
        .map(|(&s, &c)| if c == 0 { 0.0 } else { s / c as f64 })
        .collect();
    debug!(n = values.len(), "removed monthly climatology");

    Ok(values
        .iter()
        .zip(time)
        .map(|(&v, &t)| v - means[month_of(t)])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn pure_annual_cycle_is_removed() {
        let time: Vec<i64> = (0..720).collect();
        let values: Vec<f64> = time.iter().map(|&t| ((t % 360) / 30) as f64).collect();
        for v in deseasonalize(&values, &time).unwrap() {
            assert_relative_eq!(v, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn anomalies_survive() {
        // Two years of a flat month, second year 2 higher: anomalies are -1 and +1.
        let time: Vec<i64> = vec![0, 1, 360, 361];
        let values = vec![5.0, 5.0, 7.0, 7.0];
        let out = deseasonalize(&values, &time).unwrap();
        assert_eq!(out, vec![-1.0, -1.0, 1.0, 1.0]);
    }

    #[test]
    fn negative_times_wrap() {
        // -1 is day 359 of the previous year, month 11.
        let out = deseasonalize(&[4.0, 2.0], &[-1, 359]).unwrap();
        assert_eq!(out, vec![1.0, -1.0]);
    }

    #[test]
    fn errors() {
        assert_eq!(
            deseasonalize(&[1.0], &[0, 1]).unwrap_err(),
            FilterError::LengthMismatch { values: 1, times: 2 }
        );
        assert_eq!(deseasonalize(&[], &[]).unwrap_err(), FilterError::EmptyInput);
    }
}
