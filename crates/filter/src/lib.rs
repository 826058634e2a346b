//! # strato-filter
//!
//! Filters applied to daily zonal-wind series before the QBO reductions.
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`smooth`] | centered running mean over `n_months * 30` days |
//! | [`lp_filter`] | 9th-order Butterworth low-pass, second-order sections |
//! | [`deseasonalize`] | subtract the mean of each 30-day calendar month |
//!
//! ## Quick Start
//!
//! ```ignore
//! use strato_filter::{smooth, lp_filter};
//!
//! let smoothed = smooth(&u, 5)?;
//! let filtered = lp_filter(&u, 4)?;
//! ```

mod butterworth;
mod deseasonalize;
mod error;
mod smooth;

pub use butterworth::{Biquad, LowPassConfig, SosFilter, lp_filter};
pub use deseasonalize::deseasonalize;
pub use error::FilterError;
pub use smooth::{running_mean, smooth};
