//! # strato-qbo
//!
//! Reductions of an equatorial zonal-mean zonal-wind series to summary
//! metrics of the Quasi-Biennial Oscillation.
//!
//! | Method | Function | Typical level |
//! |--------|----------|---------------|
//! | Transition time | [`transition_metrics`] | 10 hPa |
//! | Butterworth amplitude | [`amplitude_dd`] | 20 and 77 hPa |
//! | Spectral peak | [`period_fft`] | 27 hPa |
//!
//! All periods are reported in 30-day months.
//!
//! ## Quick Start
//!
//! ```ignore
//! use strato_qbo::{TransitionConfig, transition_metrics, amplitude_dd, period_fft};
//!
//! let tt = transition_metrics(&u10, &TransitionConfig::default())?;
//! println!("period {:.1} months, amplitude {:.1} m/s", tt.mean_period, tt.mean_amplitude);
//! let amp = amplitude_dd(&u20)?;
//! let period = period_fft(&u27)?;
//! ```

mod amplitude;
mod error;
mod period;
mod transition;

pub use amplitude::{amplitude_dd, amplitude_dd_with};
pub use error::QboError;
pub use period::{SpectralPeak, period_fft, spectral_peak};
pub use transition::{TransitionConfig, TransitionMetrics, transition_metrics, transition_times};
