//! Error types for the strato-filter crate.

/// Error type for all fallible operations in the strato-filter crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FilterError {
    /// Returned when the input series is empty.
    #[error("input series is empty")]
    EmptyInput,

    /// Returned when a running-mean window of zero days is requested.
    #[error("window must be at least 1 day")]
    ZeroWindow,

    /// Returned when two parallel inputs differ in length.
    #[error("length mismatch: {values} values but {times} time steps")]
    LengthMismatch {
        /// Number of data values.
        values: usize,
        /// Number of time values.
        times: usize,
    },

    /// Returned when a filter design parameter is out of range.
    #[error("invalid filter design: {0}")]
    InvalidDesign(String),
}
