//! `CalorieReport` — per-stride totals and the human-readable summary.

use std::collections::BTreeMap;
use std::fmt;

use crate::ModelTotals;

/// Stride → totals for one batch, ordered by increasing stride.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CalorieReport {
    by_stride: BTreeMap<usize, ModelTotals>,
}

impl CalorieReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) the totals for `totals.stride`.
    pub fn insert(&mut self, totals: ModelTotals) {
        self.by_stride.insert(totals.stride, totals);
    }

    pub fn get(&self, stride: usize) -> Option<&ModelTotals> {
        self.by_stride.get(&stride)
    }

    pub fn len(&self) -> usize {
        self.by_stride.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_stride.is_empty()
    }

    /// Strides in increasing order.
    pub fn strides(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_stride.keys().copied()
    }

    /// Totals in increasing stride order.
    pub fn iter(&self) -> impl Iterator<Item = &ModelTotals> {
        self.by_stride.values()
    }

    /// One line per stride, increasing, totals rounded to whole kilocalories:
    ///
    /// ```text
    /// Estimated calories burned at original intervals: Pandolf 555 kcal, Ludlow-Weyand 312 kcal
    /// Estimated calories burned downsampled to every 2 points: Pandolf 550 kcal, Ludlow-Weyand 310 kcal
    /// ```
    pub fn summary(&self) -> String {
        let mut s = String::new();
        for t in self.iter() {
            s.push_str(&summary_line(t));
            s.push('\n');
        }
        s
    }
}

fn summary_line(t: &ModelTotals) -> String {
    let head = if t.stride == 1 {
        "Estimated calories burned at original intervals".to_owned()
    } else {
        format!("Estimated calories burned downsampled to every {} points", t.stride)
    };
    format!(
        "{head}: Pandolf {} kcal, Ludlow-Weyand {} kcal",
        t.pandolf_rounded(),
        t.ludlow_weyand_rounded()
    )
}

impl fmt::Display for CalorieReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

impl<'a> IntoIterator for &'a CalorieReport {
    type Item = &'a ModelTotals;
    type IntoIter = std::collections::btree_map::Values<'a, usize, ModelTotals>;

    fn into_iter(self) -> Self::IntoIter {
        self.by_stride.values()
    }
}
