//! # strato-ssw
//!
//! Sudden stratospheric warming (SSW) and strong polar vortex (SPV)
//! detection from a daily zonal-mean zonal-wind series, typically 10 hPa at
//! 60°N, on the 360-day model calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["DailySeries"] -->|"split_by_doy()"| B["SeasonMatrix [season][day]"]
//!     B -->|"row r"| C["runs_where() easterly / westerly"]
//!     C --> D["row_to_events()"]
//!     D -->|"Ok"| E["SSW / SPV Events"]
//!     D -->|"Err"| F["SeasonSkip"]
//!     E --> G["DetectionResult"]
//!     F --> G
//! ```
//!
//! Seasons run from the day after the anchor (July 1 by default) to the next
//! anchor day, so each boreal winter falls inside one row. The first and
//! last rows are padded and excluded from detection. Interior rows are
//! independent and can be processed in parallel.
//!
//! ## Quick Start
//!
//! ```ignore
//! use strato_calendar::year360_sequence;
//! use strato_ssw::{DailySeries, SswConfig, detect_ssws};
//!
//! let series = DailySeries::new(year360_sequence(40, 2000), u10_60n)?;
//! let result = detect_ssws(&series, &SswConfig::default())?;
//! for event in result.ssw() {
//!     println!("SSW on {}", event.date());
//! }
//! println!("{:.2} SSWs per winter", result.ssw_frequency());
//! ```

mod config;
mod detect;
mod error;
mod runs;
mod series;
mod split;

pub use config::SswConfig;
pub use detect::{
    DetectionResult, Event, MIN_SEASON_ROWS, RowEvents, SeasonBounds, SeasonSkip, SkipReason,
    detect_in_matrix, detect_ssws, row_to_events,
};
pub use error::SswError;
pub use runs::{Run, RunSet, consecutive_runs, runs_where};
pub use series::DailySeries;
pub use split::{SeasonMatrix, split_by_doy};
