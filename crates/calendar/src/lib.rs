//! # strato-calendar
//!
//! Pure date arithmetic for the 360-day model calendar (twelve 30-day months,
//! no leap mechanics).
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Date360 (y, m, d)"] -->|".serial()"| B["serial day"]
//!     B -->|"Date360::from_serial()"| A
//!     C["NaN-padded serials"] -->|"serial_to_dates()"| A
//!     A -->|"SeasonAnchor::locate()"| D["(season year, day of season)"]
//!     E["n_years, start_year"] -->|"year360_sequence()"| F["Vec of Date360"]
//!     G["n_days"] -->|"SeasonalIndices::new()"| H["DJF / MAM / JJA / SON"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use strato_calendar::{Date360, SeasonAnchor, year360_sequence};
//!
//! let date = Date360::new(2000, 1, 1).unwrap();
//! assert_eq!(date.serial(), 2000 * 360 + 30 + 1);
//! assert_eq!(Date360::from_serial(date.serial()), date);
//!
//! let dates = year360_sequence(10, 2000);
//! assert_eq!(dates.len(), 3600);
//!
//! // Jan 1 2001 belongs to the winter season that started in July 2000.
//! let anchor = SeasonAnchor::default();
//! let (year, _day) = anchor.locate(Date360::new(2001, 1, 1).unwrap());
//! assert_eq!(year, 2000);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | `Date360` and serial-day conversions |
//! | `sequence` | Date sequence generation |
//! | `season` | Anchor-shifted season years |
//! | `seasons` | DJF/MAM/JJA/SON index selection |
//! | `error` | Error types |

mod date;
mod error;
mod season;
mod seasons;
mod sequence;

pub use date::{DAYS_PER_MONTH, DAYS_PER_YEAR, Date360, serial_to_dates, years_of};
pub use error::CalendarError;
pub use season::SeasonAnchor;
pub use seasons::{Season, SeasonalIndices};
pub use sequence::{date_sequence, year360_sequence};
