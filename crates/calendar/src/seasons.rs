//! Meteorological season index selection.

use crate::date::DAYS_PER_YEAR;

/// The four three-month meteorological seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// December, January, February.
    Djf,
    /// March, April, May.
    Mam,
    /// June, July, August.
    Jja,
    /// September, October, November.
    Son,
}

impl Season {
    /// All seasons in calendar order starting with DJF.
    pub const ALL: [Season; 4] = [Season::Djf, Season::Mam, Season::Jja, Season::Son];

    /// Season of a 0-based day of the year (0..=359).
    pub fn of_day_of_year(day: u16) -> Self {
        match day % DAYS_PER_YEAR {
            60..150 => Season::Mam,
            150..240 => Season::Jja,
            240..330 => Season::Son,
            _ => Season::Djf,
        }
    }

    /// Upper-case three-letter label.
    pub fn label(self) -> &'static str {
        match self {
            Season::Djf => "DJF",
            Season::Mam => "MAM",
            Season::Jja => "JJA",
            Season::Son => "SON",
        }
    }
}

/// Indices of a daily series falling in each season.
///
/// The series is assumed to start on January 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonalIndices {
    djf: Vec<usize>,
    mam: Vec<usize>,
    jja: Vec<usize>,
    son: Vec<usize>,
}

impl SeasonalIndices {
    /// Partitions `0..n_days` by season.
    pub fn new(n_days: usize) -> Self {
        let mut out = Self {
            djf: Vec::new(),
            mam: Vec::new(),
            jja: Vec::new(),
            son: Vec::new(),
        };
        for i in 0..n_days {
            let day = (i % usize::from(DAYS_PER_YEAR)) as u16;
            match Season::of_day_of_year(day) {
                Season::Djf => out.djf.push(i),
                Season::Mam => out.mam.push(i),
                Season::Jja => out.jja.push(i),
                Season::Son => out.son.push(i),
            }
        }
        out
    }

    /// Indices belonging to `season`, ascending.
    pub fn get(&self, season: Season) -> &[usize] {
        match season {
            Season::Djf => &self.djf,
            Season::Mam => &self.mam,
            Season::Jja => &self.jja,
            Season::Son => &self.son,
        }
    }
}
