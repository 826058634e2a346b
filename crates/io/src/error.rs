//! Error types for strato-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the strato-io crate.
///
/// Covers missing files and variables, NetCDF library failures, unexpected
/// shapes, and time axes that cannot be mapped onto the 360-day calendar.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the NetCDF library.
    #[error("netcdf error: {reason}")]
    Netcdf {
        /// Description of the underlying NetCDF failure.
        reason: String,
    },

    /// Wraps an error originating from the strato-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },

    /// Returned when a required variable is not present in a file.
    #[error("variable '{name}' not found in {}", path.display())]
    MissingVariable {
        /// Name of the missing variable.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a variable or dimension has an unexpected size.
    #[error("dimension '{name}' mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Name of the dimension.
        name: String,
        /// Expected size.
        expected: usize,
        /// Actual size.
        got: usize,
    },

    /// Returned when a time value cannot be parsed or is out of range.
    #[error("invalid time: {reason}")]
    InvalidTime {
        /// Description of the time parsing issue.
        reason: String,
    },

    /// Returned when the time axis is not on a 360-day calendar.
    #[error("unsupported calendar '{calendar}': only 360-day calendars are supported")]
    UnsupportedCalendar {
        /// Calendar attribute found on the time variable.
        calendar: String,
    },

    /// Returned when a level or latitude index is outside the field.
    #[error("{axis} index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Axis name (`level` or `lat`).
        axis: &'static str,
        /// Requested index.
        index: usize,
        /// Axis length.
        len: usize,
    },

    /// Returned when a reader configuration value is unusable.
    #[error("invalid reader configuration: {0}")]
    InvalidConfig(String),
}

impl From<netcdf::Error> for IoError {
    fn from(e: netcdf::Error) -> Self {
        IoError::Netcdf {
            reason: e.to_string(),
        }
    }
}

impl From<strato_calendar::CalendarError> for IoError {
    fn from(e: strato_calendar::CalendarError) -> Self {
        IoError::Calendar {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.nc"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.nc");
    }

    #[test]
    fn display_missing_variable() {
        let err = IoError::MissingVariable {
            name: "ucomp".to_string(),
            path: PathBuf::from("/data/atmos_daily.nc"),
        };
        assert_eq!(
            err.to_string(),
            "variable 'ucomp' not found in /data/atmos_daily.nc"
        );
    }

    #[test]
    fn display_unsupported_calendar() {
        let err = IoError::UnsupportedCalendar {
            calendar: "noleap".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported calendar 'noleap': only 360-day calendars are supported"
        );
    }

    #[test]
    fn display_index_out_of_range() {
        let err = IoError::IndexOutOfRange {
            axis: "level",
            index: 40,
            len: 40,
        };
        assert_eq!(err.to_string(), "level index 40 out of range for length 40");
    }

    #[test]
    fn from_netcdf_error() {
        let nc_err = netcdf::Error::Str("test nc error".to_string());
        let err: IoError = nc_err.into();
        assert!(matches!(err, IoError::Netcdf { .. }));
        assert!(err.to_string().contains("test nc error"));
    }

    #[test]
    fn from_calendar_error() {
        let cal_err = strato_calendar::CalendarError::InvalidDay { day: 31 };
        let err: IoError = cal_err.into();
        assert!(matches!(err, IoError::Calendar { .. }));
        assert!(err.to_string().contains("calendar error"));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}
