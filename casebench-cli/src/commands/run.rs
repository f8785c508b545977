//! Run command implementation

use super::OutputFormat;
use crate::error::CliError;
use crate::output::ReportRow;
use anyhow::Result;
use casebench_core::{BenchError, BenchmarkRunner};
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

/// Arguments for the run command
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Algorithm to benchmark (see `casebench list algorithms`)
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

    /// Seed for the input shuffler (default: OS entropy)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

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

impl RunArgs {
    /// Execute the run command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.quiet, self.verbose);

        log::info!("Benchmarking {} over {} sizes", self.algorithm, self.sizes.len());
        log::debug!("Arguments: {:?}", self);

        let operation = super::resolve_operation(&self.algorithm)?;

        let rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };

        let mut runner = BenchmarkRunner::new(rng);
        let table = runner
            .run(&self.sizes, operation.as_ref())
            .map_err(|e| match e {
                BenchError::Sweep { reason } => anyhow::Error::new(CliError::InvalidSweep(reason)),
                other => anyhow::Error::new(other),
            })?;
        log::info!("Collected {} measurements", table.len());

        let mut formatter = super::formatter_for(self.format, self.output.as_deref())?;
        formatter.begin(operation.name())?;
        for measurement in &table {
            formatter.record(&ReportRow::measured(measurement))?;
        }
        formatter.finish()?;

        Ok(())
    }
}
