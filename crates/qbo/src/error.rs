//! Error types for the strato-qbo crate.

use strato_filter::FilterError;

/// Error type for all fallible operations in the strato-qbo crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QboError {
    /// Returned when the smoothed series crosses from easterly to westerly
    /// fewer than twice, so no complete cycle exists.
    #[error("too few QBO transitions: found {found}, need at least 2")]
    TooFewTransitions {
        /// Number of transitions detected.
        found: usize,
    },

    /// Returned when the power spectrum has no positive-frequency energy.
    #[error("power spectrum is flat; no dominant period")]
    FlatSpectrum,

    /// Returned when the input series is empty.
    #[error("input series is empty")]
    EmptySeries,

    /// Returned when the input contains NaN or infinite values.
    #[error("input contains non-finite values")]
    NonFiniteData,

    /// Propagated from the filtering stage.
    #[error(transparent)]
    Filter(#[from] FilterError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_too_few_transitions() {
        let err = QboError::TooFewTransitions { found: 1 };
        assert_eq!(err.to_string(), "too few QBO transitions: found 1, need at least 2");
    }

    #[test]
    fn error_from_filter() {
        let err: QboError = FilterError::ZeroWindow.into();
        assert_eq!(err.to_string(), "window must be at least 1 day");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<QboError>();
    }
}
