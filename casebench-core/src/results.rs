//! Measurement records and the result table handed to presentation layers

use crate::types::CaseCategory;
use serde::Serialize;
use std::fmt;

/// One timed outcome for a (size, category, algorithm) triple
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Measurement {
    /// Element count of the generated input
    pub size: usize,
    /// Input-shape category
    pub category: CaseCategory,
    /// Registry name of the measured algorithm
    pub algorithm: String,
    /// Elapsed wall-clock time of the single invocation
    pub elapsed_nanos: u64,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} n={} {}: {} ns",
            self.algorithm, self.size, self.category, self.elapsed_nanos
        )
    }
}

/// Insertion-ordered collection of measurements from one benchmark run
///
/// Lives for the duration of one run and is then handed to an external
/// presentation layer (report, serialized table, chart).
#[derive(Debug, Default, Clone, Serialize)]
pub struct ResultTable {
    measurements: Vec<Measurement>,
}

impl ResultTable {
    /// An empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one measurement
    pub fn push(&mut self, measurement: Measurement) {
        self.measurements.push(measurement);
    }

    /// All measurements in insertion order
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Iterate measurements in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Measurement> {
        self.measurements.iter()
    }

    /// Measurements of one category, in sweep order
    pub fn series(&self, category: CaseCategory) -> impl Iterator<Item = &Measurement> {
        self.measurements
            .iter()
            .filter(move |m| m.category == category)
    }

    /// Number of measurements
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    /// Whether the table holds no measurements
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// Check the table's ordering invariants
    ///
    /// Measurements must be grouped by non-decreasing size with the fixed
    /// category rotation inside each size, and no (size, category) pair may
    /// repeat.
    pub fn validate(&self) -> Result<(), String> {
        for pair in self.measurements.windows(2) {
            if pair[1].size < pair[0].size {
                return Err(format!(
                    "size {} appears after size {}",
                    pair[1].size, pair[0].size
                ));
            }
        }

        let mut seen = std::collections::HashSet::new();
        for m in &self.measurements {
            if !seen.insert((m.size, m.category)) {
                return Err(format!(
                    "duplicate measurement for size {} / {}",
                    m.size, m.category
                ));
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a Measurement;
    type IntoIter = std::slice::Iter<'a, Measurement>;

    fn into_iter(self) -> Self::IntoIter {
        self.measurements.iter()
    }
}
