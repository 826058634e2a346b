//! Butterworth low-pass filtering in second-order sections.
//!
//! The analog prototype poles are mapped to the z-plane with the bilinear
//! transform and grouped into conjugate-pair biquads (plus one first-order
//! section for odd orders). Filtering runs the cascade causally from a zero
//! initial state.

use std::f64::consts::PI;

use num_complex::Complex64;
use tracing::debug;

use crate::error::FilterError;

/// A single second-order section.
///
/// Transfer function: H(z) = (b0 + b1*z^-1 + b2*z^-2) / (1 + a1*z^-1 + a2*z^-2)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Biquad {
    b: [f64; 3],
    a: [f64; 2],
}

impl Biquad {
    /// Creates a section from numerator `[b0, b1, b2]` and denominator
    /// `[a1, a2]` (a0 normalized to 1).
    pub fn new(b: [f64; 3], a: [f64; 2]) -> Self {
        Self { b, a }
    }

    /// Numerator coefficients.
    pub fn numerator(&self) -> &[f64; 3] {
        &self.b
    }

    /// Denominator coefficients `[a1, a2]`.
    pub fn denominator(&self) -> &[f64; 2] {
        &self.a
    }

    /// Whether both poles lie inside the unit circle.
    pub fn is_stable(&self) -> bool {
        self.a[1].abs() < 1.0 && self.a[0].abs() < 1.0 + self.a[1]
    }

    /// Filters `x` in place, Direct Form II Transposed.
    fn run(&self, x: &mut [f64]) {
        let mut s = [0.0_f64; 2];
        for v in x.iter_mut() {
            let input = *v;
            let output = self.b[0] * input + s[0];
            s[0] = self.b[1] * input - self.a[0] * output + s[1];
            s[1] = self.b[2] * input - self.a[1] * output;
            *v = output;
        }
    }
}

/// A cascade of second-order sections.
#[derive(Debug, Clone, PartialEq)]
pub struct SosFilter {
    sections: Vec<Biquad>,
}

impl SosFilter {
    /// Designs a digital Butterworth low-pass filter.
    ///
    /// `wn` is the cutoff as a fraction of the Nyquist frequency, in (0, 1).
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidDesign`] if `order` is zero or `wn` is
    /// outside (0, 1).
    pub fn butterworth_lowpass(order: usize, wn: f64) -> Result<Self, FilterError> {
        if order == 0 {
            return Err(FilterError::InvalidDesign("order must be >= 1".into()));
        }
        if !(wn > 0.0 && wn < 1.0) {
            return Err(FilterError::InvalidDesign(format!(
                "cutoff must be in (0, 1) of Nyquist, got {wn}"
            )));
        }

        // Bilinear transform with two samples per unit time: s = k (1 - z^-1) / (1 + z^-1).
        let k = 2.0;
        let wc = k * (PI * wn / 2.0).tan();

        let mut sections = Vec::with_capacity(order.div_ceil(2));
        for i in 0..order / 2 {
            let theta = PI * (2 * i + order + 1) as f64 / (2 * order) as f64;
            let pole = Complex64::from_polar(wc, theta);
            sections.push(lowpass_pair(pole, k));
        }
        if order % 2 == 1 {
            sections.push(lowpass_real(-wc, k));
        }
        debug!(order, wn, n_sections = sections.len(), "designed Butterworth low-pass");
        Ok(Self { sections })
    }

    /// The second-order sections in cascade order.
    pub fn sections(&self) -> &[Biquad] {
        &self.sections
    }

    /// Filters a series causally from a zero initial state.
    pub fn apply(&self, x: &[f64]) -> Vec<f64> {
        let mut out = x.to_vec();
        for section in &self.sections {
            section.run(&mut out);
        }
        out
    }
}

/// Configuration for the QBO low-pass filter.
///
/// Defaults: 9th order with a cutoff of 1/120 of Nyquist (`n_months = 4`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowPassConfig {
    order: usize,
    n_months: usize,
}

impl Default for LowPassConfig {
    fn default() -> Self {
        Self {
            order: 9,
            n_months: 4,
        }
    }
}

impl LowPassConfig {
    /// Sets the filter order.
    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    /// Sets the cutoff in months; the normalized cutoff is `1 / (n_months * 30)`.
    pub fn with_n_months(mut self, n_months: usize) -> Self {
        self.n_months = n_months;
        self
    }

    /// Returns the filter order.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the cutoff in months.
    pub fn n_months(&self) -> usize {
        self.n_months
    }

    /// Builds the filter this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidDesign`] for a zero order or zero months.
    pub fn design(&self) -> Result<SosFilter, FilterError> {
        if self.n_months == 0 {
            return Err(FilterError::InvalidDesign("n_months must be >= 1".into()));
        }
        SosFilter::butterworth_lowpass(self.order, 1.0 / (self.n_months * 30) as f64)
    }
}

/// Removes high-frequency variability with the default 9th-order
/// Butterworth low-pass and an `n_months` cutoff.
///
/// # Errors
///
/// Returns [`FilterError::EmptyInput`] for an empty series, or
/// [`FilterError::InvalidDesign`] if `n_months` is zero.
pub fn lp_filter(u: &[f64], n_months: usize) -> Result<Vec<f64>, FilterError> {
    if u.is_empty() {
        return Err(FilterError::EmptyInput);
    }
    let filter = LowPassConfig::default().with_n_months(n_months).design()?;
    Ok(filter.apply(u))
}

/// Bilinear transform of H(s) = |p|^2 / (s^2 - 2 Re(p) s + |p|^2).
fn lowpass_pair(p: Complex64, k: f64) -> Biquad {
    let mag_sq = p.norm_sqr();
    let k2 = k * k;
    let d = k2 - 2.0 * k * p.re + mag_sq;
    Biquad::new(
        [mag_sq / d, 2.0 * mag_sq / d, mag_sq / d],
        [2.0 * (mag_sq - k2) / d, (k2 + 2.0 * k * p.re + mag_sq) / d],
    )
}

/// Bilinear transform of H(s) = -p / (s - p) for a real pole `p`.
fn lowpass_real(p: f64, k: f64) -> Biquad {
    let alpha = k - p;
    Biquad::new([-p / alpha, -p / alpha, 0.0], [-(k + p) / alpha, 0.0])
}
