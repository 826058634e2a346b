//! Error types for the strato-calendar crate.

/// Error type for all fallible operations in the strato-calendar crate.
///
/// Dates outside the nominal month/day ranges of the 360-day calendar are
/// rejected rather than silently wrapped.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number is outside the valid range 1..=30.
    #[error("invalid day: {day} (must be 1..=30)")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
    },
}
