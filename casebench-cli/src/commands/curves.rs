//! Curves command implementation

use super::OutputFormat;
use crate::output::ReportRow;
use anyhow::Result;
use casebench_core::{theory, CaseCategory};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the curves command
#[derive(Debug, Args)]
pub struct CurvesArgs {
    /// Algorithm whose theoretical curves to print
    #[arg(short, long, value_name = "NAME", required = true)]
    pub algorithm: String,

    /// Input sizes, ascending (comma separated)
    #[arg(
        short,
        long,
        value_name = "N",
        value_delimiter = ',',
        default_values_t = [100usize, 1000, 5000, 10000, 50000]
    )]
    pub sizes: Vec<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CurvesArgs {
    /// Execute the curves command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.quiet, self.verbose);

        let operation = super::resolve_operation(&self.algorithm)?;
        log::info!("Rendering theoretical curves for {}", operation.name());

        let mut formatter = super::formatter_for(self.format, self.output.as_deref())?;
        formatter.begin(operation.name())?;
        for &size in &self.sizes {
            for category in CaseCategory::ALL {
                let ops = theory::operation_count(operation.complexity(category), size);
                formatter.record(&ReportRow::estimated(
                    size,
                    category,
                    operation.name(),
                    ops,
                ))?;
            }
        }
        formatter.finish()?;

        Ok(())
    }
}
