//! Contiguous daily series on the 360-day calendar.

use strato_calendar::{Date360, date_sequence};

use crate::error::SswError;

/// A daily series: one value per consecutive calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySeries {
    dates: Vec<Date360>,
    values: Vec<f64>,
}

impl DailySeries {
    /// Pairs `dates` with `values`, checking that the dates advance by
    /// exactly one day at every step.
    ///
    /// # Errors
    ///
    /// - [`SswError::LengthMismatch`] if the lengths differ.
    /// - [`SswError::EmptySeries`] if there are no samples.
    /// - [`SswError::NonContiguousSeries`] on a gap or duplicate day.
    pub fn new(dates: Vec<Date360>, values: Vec<f64>) -> Result<Self, SswError> {
        if dates.len() != values.len() {
            return Err(SswError::LengthMismatch {
                dates: dates.len(),
                values: values.len(),
            });
        }
        if dates.is_empty() {
            return Err(SswError::EmptySeries);
        }
        for (i, pair) in dates.windows(2).enumerate() {
            let (previous, found) = (pair[0].serial(), pair[1].serial());
            if found != previous + 1 {
                return Err(SswError::NonContiguousSeries {
                    index: i + 1,
                    previous,
                    found,
                });
            }
        }
        Ok(Self { dates, values })
    }

    /// Builds a series whose first value falls on `start`.
    ///
    /// # Errors
    ///
    /// Returns [`SswError::EmptySeries`] if `values` is empty.
    pub fn starting_at(start: Date360, values: Vec<f64>) -> Result<Self, SswError> {
        let dates = date_sequence(start, values.len());
        Self::new(dates, values)
    }

    /// Calendar dates, one per value.
    pub fn dates(&self) -> &[Date360] {
        &self.dates
    }

    /// Daily values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of days.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed series.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// First date.
    pub fn first_date(&self) -> Date360 {
        self.dates[0]
    }

    /// Last date.
    pub fn last_date(&self) -> Date360 {
        self.dates[self.dates.len() - 1]
    }
}
