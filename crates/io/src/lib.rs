//! # strato-io
//!
//! Read zonal wind from MiMA-style NetCDF history files into a zonal-mean
//! `[time][level][lat]` field with 360-day calendar dates.
//!
//! ```mermaid
//! graph LR
//!     A["ucomp (time, pfull, lat, lon)"] -->|"read_zonal_wind()"| B["ZonalWind"]
//!     C["time units + calendar"] -->|"360-day dates"| B
//!     B -->|"series(level, lat)"| D["Vec of f64"]
//! ```

mod error;
mod levels;
mod netcdf_read;
mod reader;

pub use error::IoError;
pub use levels::{MIMA_LEVELS, mima_level_index};
pub use reader::{ReaderConfig, ZonalWind, read_zonal_wind};
