//! Maximal runs of consecutive day indices.

use serde::Serialize;

/// A maximal block of consecutive indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Run {
    /// Number of indices in the run (at least 1).
    pub length: usize,
    /// First index of the run.
    pub start: usize,
}

impl Run {
    /// Index one past the end of the run.
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Runs of one predicate over a season row, ordered by start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSet {
    runs: Vec<Run>,
}

impl RunSet {
    /// The runs in ascending start order.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Number of runs.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Whether the predicate never holds.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Iterates over the runs.
    pub fn iter(&self) -> std::slice::Iter<'_, Run> {
        self.runs.iter()
    }

    /// The run that begins exactly at `index`, if any.
    pub fn starting_at(&self, index: usize) -> Option<&Run> {
        self.runs
            .binary_search_by_key(&index, |r| r.start)
            .ok()
            .map(|i| &self.runs[i])
    }

    /// The first run at least `min_len` long.
    pub fn first_at_least(&self, min_len: usize) -> Option<&Run> {
        self.runs.iter().find(|r| r.length >= min_len)
    }

    /// The last run at least `min_len` long.
    pub fn last_at_least(&self, min_len: usize) -> Option<&Run> {
        self.runs.iter().rev().find(|r| r.length >= min_len)
    }
}

impl<'a> IntoIterator for &'a RunSet {
    type Item = &'a Run;
    type IntoIter = std::slice::Iter<'a, Run>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}

/// Groups ascending, unique indices into maximal runs.
///
/// A run breaks wherever two neighbours differ by anything other than 1.
pub fn consecutive_runs(indices: &[usize]) -> RunSet {
    let mut runs: Vec<Run> = Vec::new();
    for &idx in indices {
        match runs.last_mut() {
            Some(run) if run.end() == idx => run.length += 1,
            _ => runs.push(Run {
                length: 1,
                start: idx,
            }),
        }
    }
    RunSet { runs }
}

/// Runs of the indices of `row` whose values satisfy `pred`.
pub fn runs_where(row: &[f64], pred: impl Fn(f64) -> bool) -> RunSet {
    let indices: Vec<usize> = row
        .iter()
        .enumerate()
        .filter(|&(_, &v)| pred(v))
        .map(|(i, _)| i)
        .collect();
    consecutive_runs(&indices)
}
