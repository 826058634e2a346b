//! Anchor-shifted season years.

use crate::date::{DAYS_PER_MONTH, DAYS_PER_YEAR, Date360};
use crate::error::CalendarError;

/// Calendar day on which a "season year" starts.
///
/// Splitting years on a summer anchor (July 1 by default) keeps each boreal
/// winter inside a single season year: January 2001 belongs to the season
/// that started in July 2000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeasonAnchor {
    month: u8,
    day: u8,
}

impl Default for SeasonAnchor {
    /// July 1.
    fn default() -> Self {
        Self { month: 7, day: 1 }
    }
}

impl SeasonAnchor {
    /// Creates an anchor from a month and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the month or day is outside the 360-day
    /// calendar ranges.
    pub fn new(month: u8, day: u8) -> Result<Self, CalendarError> {
        Date360::new(0, month, day)?;
        Ok(Self { month, day })
    }

    /// Returns the anchor month.
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the anchor day.
    pub fn day(self) -> u8 {
        self.day
    }

    /// Serial day of the anchor in `year`.
    pub fn serial_in(self, year: i32) -> i64 {
        i64::from(year) * i64::from(DAYS_PER_YEAR)
            + i64::from(self.month) * i64::from(DAYS_PER_MONTH)
            + i64::from(self.day)
    }

    /// Returns `(season_year, day_of_season)` for a date.
    ///
    /// `day_of_season` is 1-based in 1..=360. Dates whose offset from the
    /// anchor of their own calendar year is below 1 (the anchor day itself
    /// and everything before it) belong to the previous season year, so the
    /// anchor day is day 360 of the season that it closes.
    pub fn locate(self, date: Date360) -> (i32, u16) {
        let since = date.serial() - self.serial_in(date.year());
        if since < 1 {
            (date.year() - 1, (since + i64::from(DAYS_PER_YEAR)) as u16)
        } else {
            (date.year(), since as u16)
        }
    }

    /// Serial day of `day_of_season` (1-based) within `season_year`.
    pub fn serial_of(self, season_year: i32, day_of_season: u16) -> i64 {
        self.serial_in(season_year) + i64::from(day_of_season)
    }
}
