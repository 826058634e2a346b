//! Error types for the strato-jet crate.

/// Error type for all fallible operations in the strato-jet crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JetError {
    /// Returned when the wind field and latitude vector disagree.
    #[error("latitude mismatch: wind has {wind} latitudes, coordinate has {lat}")]
    LatitudeMismatch {
        /// Latitude count in the wind field.
        wind: usize,
        /// Length of the latitude vector.
        lat: usize,
    },

    /// Returned when there are too few latitudes to form two hemispheres.
    #[error("need at least 2 latitudes, got {n_lat}")]
    TooFewLatitudes {
        /// Number of latitudes provided.
        n_lat: usize,
    },

    /// Returned when a hemisphere holds no finite wind at some time step.
    #[error("no finite wind in hemisphere at time step {time}")]
    NoMaximum {
        /// Offending time index.
        time: usize,
    },

    /// Returned when a level range selects no levels.
    #[error("level range {start}..{end} is empty or exceeds {n_levels} levels")]
    InvalidLevelRange {
        /// First level of the range.
        start: usize,
        /// One past the last level of the range.
        end: usize,
        /// Number of levels available.
        n_levels: usize,
    },
}
