//! Rearranging a daily series into one row per season year.

use strato_calendar::{DAYS_PER_YEAR, Date360, SeasonAnchor};
use tracing::debug;

use crate::series::DailySeries;

const ROW_LEN: usize = DAYS_PER_YEAR as usize;

/// A daily series laid out as `[season][day of season]`.
///
/// Row `r` holds season year `first_year + r`; column `i` holds day of
/// season `i + 1`, so a row runs from the day after the anchor through the
/// next anchor day. Days the source series does not cover are NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonMatrix {
    anchor: SeasonAnchor,
    first_year: i32,
    data: Vec<f64>,
}

impl SeasonMatrix {
    /// Number of season rows.
    pub fn n_rows(&self) -> usize {
        self.data.len() / ROW_LEN
    }

    /// The 360 values of row `r`.
    ///
    /// # Panics
    ///
    /// Panics if `r >= n_rows()`.
    pub fn row(&self, r: usize) -> &[f64] {
        &self.data[r * ROW_LEN..(r + 1) * ROW_LEN]
    }

    /// Iterates over rows in season order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(ROW_LEN)
    }

    /// Season year of row `r`.
    pub fn season_year(&self, r: usize) -> i32 {
        self.first_year + r as i32
    }

    /// Season years of all rows, ascending and contiguous.
    pub fn years(&self) -> Vec<i32> {
        (0..self.n_rows()).map(|r| self.season_year(r)).collect()
    }

    /// Serial day of cell `(r, i)`.
    pub fn serial(&self, r: usize, i: usize) -> i64 {
        self.anchor.serial_of(self.season_year(r), i as u16 + 1)
    }

    /// Calendar date of cell `(r, i)`.
    pub fn date(&self, r: usize, i: usize) -> Date360 {
        Date360::from_serial(self.serial(r, i))
    }

    /// The anchor that delimits the rows.
    pub fn anchor(&self) -> SeasonAnchor {
        self.anchor
    }

    /// Number of cells that came from the source series.
    pub fn filled(&self) -> usize {
        self.data.iter().filter(|v| !v.is_nan()).count()
    }
}

/// Splits a daily series into season rows delimited by `anchor`.
///
/// Each date is attributed to the season year returned by
/// [`SeasonAnchor::locate`]. The first row is padded before the first sample
/// and the last row after the last sample so every row spans exactly 360
/// days. The row count is `last season year - first season year + 1`; for
/// series covering whole calendar years that is the number of calendar
/// years plus one.
pub fn split_by_doy(series: &DailySeries, anchor: SeasonAnchor) -> SeasonMatrix {
    let (first_year, first_day) = anchor.locate(series.first_date());
    let (last_year, last_day) = anchor.locate(series.last_date());
    let n_rows = (last_year - first_year + 1) as usize;

    let lead = usize::from(first_day) - 1;
    let trail = ROW_LEN - usize::from(last_day);

    let mut data = Vec::with_capacity(n_rows * ROW_LEN);
    data.resize(lead, f64::NAN);
    data.extend_from_slice(series.values());
    data.resize(data.len() + trail, f64::NAN);
    debug_assert_eq!(data.len(), n_rows * ROW_LEN);

    debug!(
        first_year,
        last_year,
        n_rows,
        lead,
        trail,
        "split series into season rows"
    );
    SeasonMatrix {
        anchor,
        first_year,
        data,
    }
}
