//! Error types for the strato-ssw crate.

use strato_calendar::CalendarError;

/// Error type for all fallible operations in the strato-ssw crate.
///
/// These are whole-computation failures. Seasons that lack a vortex
/// formation or final warming are not errors; they are reported as
/// [`SeasonSkip`](crate::SeasonSkip) entries in the detection result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SswError {
    /// Propagated from calendar validation.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Returned when dates and values differ in length.
    #[error("length mismatch: {dates} dates but {values} values")]
    LengthMismatch {
        /// Number of dates.
        dates: usize,
        /// Number of values.
        values: usize,
    },

    /// Returned when the series holds no samples.
    #[error("series is empty")]
    EmptySeries,

    /// Returned when two neighbouring dates are not consecutive days.
    #[error("series is not contiguous at index {index}: {found} follows {previous}")]
    NonContiguousSeries {
        /// Index of the offending date.
        index: usize,
        /// Serial day of the preceding date.
        previous: i64,
        /// Serial day found at `index`.
        found: i64,
    },

    /// Returned when a detector configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
