//! Spectral (FFT) QBO period.

use rustfft::FftPlanner;
use rustfft::num_complex::Complex;
use serde::Serialize;
use strato_stats::mean;
use tracing::debug;

use crate::error::QboError;

/// Sample spacing in months (one day).
const SAMPLE_SPACING_MONTHS: f64 = 1.0 / 30.0;

/// The dominant positive-frequency component of a wind series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpectralPeak {
    /// Frequency in cycles per month.
    pub frequency: f64,
    /// Period in months.
    pub period: f64,
    /// Squared magnitude of the FFT at the peak.
    pub power: f64,
}

/// Period in months of the strongest oscillation in `u`.
///
/// # Errors
///
/// See [`spectral_peak`].
pub fn period_fft(u: &[f64]) -> Result<f64, QboError> {
    spectral_peak(u).map(|peak| peak.period)
}

/// Locates the power-spectrum peak of a daily series.
///
/// The series is demeaned and zero-padded with `n` zeros on each side to
/// refine the frequency grid. Only strictly positive frequencies compete for
/// the peak; ties go to the lowest frequency.
///
/// # Errors
///
/// Returns [`QboError::EmptySeries`] or [`QboError::NonFiniteData`] for
/// unusable input and [`QboError::FlatSpectrum`] if no positive frequency
/// carries power.
pub fn spectral_peak(u: &[f64]) -> Result<SpectralPeak, QboError> {
    if u.is_empty() {
        return Err(QboError::EmptySeries);
    }
    if u.iter().any(|v| !v.is_finite()) {
        return Err(QboError::NonFiniteData);
    }

    let n = u.len();
    let m = mean(u);
    let npad = 3 * n;
    let mut buffer = vec![Complex::new(0.0, 0.0); npad];
    for (slot, &v) in buffer[n..2 * n].iter_mut().zip(u) {
        *slot = Complex::new(v - m, 0.0);
    }

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(npad);
    fft.process(&mut buffer);

    let mut best: Option<(usize, f64)> = None;
    for (k, c) in buffer.iter().enumerate().take((npad - 1) / 2 + 1).skip(1) {
        let power = c.norm_sqr();
        if best.is_none_or(|(_, p)| power > p) {
            best = Some((k, power));
        }
    }
    let (k, power) = match best {
        Some((k, power)) if power > 0.0 => (k, power),
        _ => return Err(QboError::FlatSpectrum),
    };

    let frequency = k as f64 / (npad as f64 * SAMPLE_SPACING_MONTHS);
    let peak = SpectralPeak {
        frequency,
        period: 1.0 / frequency,
        power,
    };
    debug!(bin = k, period = peak.period, "QBO spectral peak");
    Ok(peak)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_series_is_flat() {
        assert_eq!(spectral_peak(&[4.0; 64]).unwrap_err(), QboError::FlatSpectrum);
    }

    #[test]
    fn single_sample_is_flat() {
        assert_eq!(spectral_peak(&[1.0]).unwrap_err(), QboError::FlatSpectrum);
    }

    #[test]
    fn non_finite() {
        assert_eq!(period_fft(&[1.0, f64::INFINITY]).unwrap_err(), QboError::NonFiniteData);
    }
}
