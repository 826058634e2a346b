//! # strato-jet
//!
//! Jet latitude diagnostics: the latitude of the zonal-mean zonal-wind
//! maximum in each hemisphere, and its mean, variance and standard deviation
//! overall or per season.
//!
//! ## Quick Start
//!
//! ```ignore
//! use strato_jet::{JetSummary, jet_latitudes, level_mean};
//!
//! let u200 = level_mean(u_zonal.view(), 27..29)?;
//! let jets = jet_latitudes(u200.view(), &lat)?;
//! let nh = JetSummary::from_series(&jets.north);
//! ```

mod error;
mod latitude;
mod summary;

pub use error::JetError;
pub use latitude::{JetLatitudes, jet_latitudes, level_mean};
pub use summary::{JetSummary, seasonal_summaries};
