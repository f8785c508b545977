//! Output formatting module

use anyhow::Result;
use casebench_core::{CaseCategory, Measurement};
use serde::Serialize;

/// One rendered table row: a measured timing or a theoretical estimate
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    /// Input size of the row
    pub size: usize,
    /// Input-shape category
    pub category: CaseCategory,
    /// Algorithm the row belongs to
    pub algorithm: String,
    /// Measured nanoseconds (benchmark runs)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_nanos: Option<u64>,
    /// Dimensionless operation-count estimate (theoretical curves)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_ops: Option<f64>,
}

impl ReportRow {
    /// Row for one measured timing
    pub fn measured(measurement: &Measurement) -> Self {
        Self {
            size: measurement.size,
            category: measurement.category,
            algorithm: measurement.algorithm.clone(),
            elapsed_nanos: Some(measurement.elapsed_nanos),
            estimated_ops: None,
        }
    }

    /// Row for one theoretical estimate
    pub fn estimated(size: usize, category: CaseCategory, algorithm: &str, ops: f64) -> Self {
        Self {
            size,
            category,
            algorithm: algorithm.to_string(),
            elapsed_nanos: None,
            estimated_ops: Some(ops),
        }
    }

    /// The row's value rendered for text-style output
    pub fn value_cell(&self) -> String {
        match (self.elapsed_nanos, self.estimated_ops) {
            (Some(nanos), _) => format!("{nanos} ns"),
            (None, Some(ops)) => format!("{ops:.0} ops"),
            (None, None) => "-".to_string(),
        }
    }
}

/// Trait for report formatters
pub trait ReportFormatter {
    /// Start a report for one algorithm
    fn begin(&mut self, algorithm: &str) -> Result<()>;

    /// Format and output a single row
    fn record(&mut self, row: &ReportRow) -> Result<()>;

    /// Finalize output (e.g. close the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
