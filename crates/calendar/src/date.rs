//! Dates in the 360-day calendar and their serial-day encoding.

use std::fmt;

use crate::error::CalendarError;

/// Number of days in every month.
pub const DAYS_PER_MONTH: u8 = 30;

/// Number of days in every year.
pub const DAYS_PER_YEAR: u16 = 360;

/// Serial day that NaN entries of a serial-day array decode from.
const SENTINEL_SERIAL: i64 = -1000;

/// A date in the 360-day calendar.
///
/// The serial-day encoding is `year * 360 + month * 30 + day`, so
/// 0000-01-01 is serial day 31 and consecutive dates differ by exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date360 {
    year: i32,
    month: u8,
    day: u8,
}

impl PartialOrd for Date360 {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date360 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl fmt::Display for Date360 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Date360 {
    /// Date that NaN serial days decode to in [`serial_to_dates`]: (-3, 2, 20).
    pub const SENTINEL: Self = Self {
        year: -3,
        month: 2,
        day: 20,
    };

    /// Creates a new `Date360` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12 and
    /// [`CalendarError::InvalidDay`] if `day` is not in 1..=30.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        if !(1..=DAYS_PER_MONTH).contains(&day) {
            return Err(CalendarError::InvalidDay { day });
        }
        Ok(Self { year, month, day })
    }

    /// Decodes a serial day into a date.
    ///
    /// Month and day zero never occur: the last day of a month rolls back
    /// from "day 0 of the next month", and December from "month 0 of the
    /// next year".
    pub fn from_serial(serial: i64) -> Self {
        // Days elapsed since 0000-01-01.
        let elapsed = serial - 31;
        let year = elapsed.div_euclid(i64::from(DAYS_PER_YEAR));
        let in_year = elapsed.rem_euclid(i64::from(DAYS_PER_YEAR));
        let per_month = i64::from(DAYS_PER_MONTH);
        Self {
            year: year as i32,
            month: (in_year / per_month + 1) as u8,
            day: (in_year % per_month + 1) as u8,
        }
    }

    /// Returns the serial day `year * 360 + month * 30 + day`.
    pub fn serial(self) -> i64 {
        i64::from(self.year) * i64::from(DAYS_PER_YEAR)
            + i64::from(self.month) * i64::from(DAYS_PER_MONTH)
            + i64::from(self.day)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=30).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the 0-based day of the year (0..=359).
    pub fn day_of_year(self) -> u16 {
        u16::from(self.month - 1) * u16::from(DAYS_PER_MONTH) + u16::from(self.day - 1)
    }

    /// Returns the next calendar day.
    pub fn next(self) -> Self {
        Self::from_serial(self.serial() + 1)
    }
}

/// Decodes a batch of serial days stored as floats.
///
/// NaN entries (padding produced when splitting a series into seasons) map
/// to [`Date360::SENTINEL`] instead of failing. Finite values are truncated
/// toward negative infinity.
pub fn serial_to_dates(serials: &[f64]) -> Vec<Date360> {
    serials
        .iter()
        .map(|&s| {
            if s.is_nan() {
                Date360::from_serial(SENTINEL_SERIAL)
            } else {
                Date360::from_serial(s.floor() as i64)
            }
        })
        .collect()
}

/// Extracts the year of every date.
pub fn years_of(dates: &[Date360]) -> Vec<i32> {
    dates.iter().map(|d| d.year()).collect()
}
