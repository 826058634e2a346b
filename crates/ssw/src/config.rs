//! Detector configuration.

use strato_calendar::SeasonAnchor;

use crate::error::SswError;

/// Thresholds and separation rules for SSW and SPV detection.
///
/// Defaults follow the standard 10 hPa, 60°N definition: reversal below
/// 0 m/s, strong vortex above 48 m/s, 20 days between events, 10-day
/// westerly spells to mark vortex formation and to bound the final warming,
/// seasons split on July 1.
///
/// # Example
///
/// ```
/// use strato_ssw::SswConfig;
///
/// let config = SswConfig::new()
///     .with_spv_threshold(45.0)
///     .with_parallel(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SswConfig {
    ssw_threshold: f64,
    spv_threshold: f64,
    min_separation: usize,
    init_westerlies: usize,
    final_easterlies: usize,
    anchor: SeasonAnchor,
    parallel: bool,
}

impl Default for SswConfig {
    fn default() -> Self {
        Self {
            ssw_threshold: 0.0,
            spv_threshold: 48.0,
            min_separation: 20,
            init_westerlies: 10,
            final_easterlies: 10,
            anchor: SeasonAnchor::default(),
            parallel: false,
        }
    }
}

impl SswConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the wind below which the flow counts as easterly.
    pub fn with_ssw_threshold(mut self, threshold: f64) -> Self {
        self.ssw_threshold = threshold;
        self
    }

    /// Sets the wind above which the vortex counts as strong.
    pub fn with_spv_threshold(mut self, threshold: f64) -> Self {
        self.spv_threshold = threshold;
        self
    }

    /// Sets the minimum number of days between related transitions.
    pub fn with_min_separation(mut self, days: usize) -> Self {
        self.min_separation = days;
        self
    }

    /// Sets the westerly spell length that marks vortex formation.
    pub fn with_init_westerlies(mut self, days: usize) -> Self {
        self.init_westerlies = days;
        self
    }

    /// Sets the westerly spell length whose last occurrence precedes the
    /// final warming.
    pub fn with_final_easterlies(mut self, days: usize) -> Self {
        self.final_easterlies = days;
        self
    }

    /// Sets the day on which season years start.
    pub fn with_anchor(mut self, anchor: SeasonAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Processes season rows on the rayon thread pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns the SSW wind threshold (m/s).
    pub fn ssw_threshold(&self) -> f64 {
        self.ssw_threshold
    }

    /// Returns the SPV wind threshold (m/s).
    pub fn spv_threshold(&self) -> f64 {
        self.spv_threshold
    }

    /// Returns the minimum separation in days.
    pub fn min_separation(&self) -> usize {
        self.min_separation
    }

    /// Returns the vortex-formation spell length in days.
    pub fn init_westerlies(&self) -> usize {
        self.init_westerlies
    }

    /// Returns the westerly spell length that bounds the final warming.
    pub fn final_easterlies(&self) -> usize {
        self.final_easterlies
    }

    /// Returns the season anchor.
    pub fn anchor(&self) -> SeasonAnchor {
        self.anchor
    }

    /// Returns whether rows are processed in parallel.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SswError::InvalidConfig`] if a threshold is not finite, the
    /// SPV threshold does not exceed the SSW threshold, or a day count is
    /// zero.
    pub fn validate(&self) -> Result<(), SswError> {
        if !self.ssw_threshold.is_finite() || !self.spv_threshold.is_finite() {
            return Err(SswError::InvalidConfig(format!(
                "thresholds must be finite, got ssw={} spv={}",
                self.ssw_threshold, self.spv_threshold
            )));
        }
        if self.spv_threshold <= self.ssw_threshold {
            return Err(SswError::InvalidConfig(format!(
                "spv_threshold ({}) must exceed ssw_threshold ({})",
                self.spv_threshold, self.ssw_threshold
            )));
        }
        if self.min_separation == 0 {
            return Err(SswError::InvalidConfig("min_separation must be >= 1".into()));
        }
        if self.init_westerlies == 0 || self.final_easterlies == 0 {
            return Err(SswError::InvalidConfig(
                "init_westerlies and final_easterlies must be >= 1".into(),
            ));
        }
        Ok(())
    }
}
