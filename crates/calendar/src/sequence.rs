//! Date sequence generation for the 360-day calendar.

use crate::date::{DAYS_PER_YEAR, Date360};

/// Generates `n_days` consecutive dates starting at `start`.
///
/// Month and year boundaries are handled by [`Date360::next`].
pub fn date_sequence(start: Date360, n_days: usize) -> Vec<Date360> {
    let mut dates = Vec::with_capacity(n_days);
    if n_days == 0 {
        return dates;
    }
    dates.push(start);
    let mut current = start;
    for _ in 1..n_days {
        current = current.next();
        dates.push(current);
    }
    dates
}

/// Generates `n_years` whole years of dates starting on January 1 of
/// `start_year`.
///
/// The result holds `360 * n_years` dates: months 1..=12, each with days
/// 1..=30.
///
/// # Example
///
/// ```ignore
/// let dates = year360_sequence(2, 2000);
/// assert_eq!(dates.len(), 720);
/// assert_eq!(dates[360], Date360::new(2001, 1, 1).unwrap());
/// ```
pub fn year360_sequence(n_years: usize, start_year: i32) -> Vec<Date360> {
    let start = Date360::new(start_year, 1, 1).expect("January 1 is always valid");
    date_sequence(start, n_years * usize::from(DAYS_PER_YEAR))
}
