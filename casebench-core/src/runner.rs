//! Benchmark orchestration: generate, time, collect

use crate::error::{BenchError, Result};
use crate::generator::InputGenerator;
use crate::plugins::Operation;
use crate::results::{Measurement, ResultTable};
use crate::timer;
use crate::types::CaseCategory;
use rand::Rng;
use std::hint::black_box;

/// Drives one benchmark run over a sweep of input sizes
///
/// Execution is fully sequential: one workload is generated, timed through a
/// single plugin invocation, and dropped before the next begins, so no two
/// timed regions ever overlap.
pub struct BenchmarkRunner<R: Rng> {
    generator: InputGenerator<R>,
}

impl<R: Rng> BenchmarkRunner<R> {
    /// Create a runner drawing input randomness from `rng`
    pub fn new(rng: R) -> Self {
        Self {
            generator: InputGenerator::new(rng),
        }
    }

    /// Measure `operation` once per (size, category) combination
    ///
    /// Sizes must be strictly increasing and positive. Any failure aborts
    /// the sweep; no partial table is returned.
    pub fn run(&mut self, sizes: &[usize], operation: &dyn Operation) -> Result<ResultTable> {
        validate_sweep(sizes)?;

        let mut table = ResultTable::new();
        for &size in sizes {
            for category in CaseCategory::ALL {
                let mut workload =
                    self.generator
                        .generate(size, category, operation.input_kind())?;
                let (outcome, elapsed_nanos) = timer::measure(|| operation.run(&mut workload))?;
                black_box(outcome);
                drop(workload);

                table.push(Measurement {
                    size,
                    category,
                    algorithm: operation.name().to_string(),
                    elapsed_nanos,
                });
            }
        }
        Ok(table)
    }
}

fn validate_sweep(sizes: &[usize]) -> Result<()> {
    if sizes.is_empty() {
        return Err(BenchError::Sweep {
            reason: "no input sizes configured".to_string(),
        });
    }
    if sizes.contains(&0) {
        return Err(BenchError::InvalidSize);
    }
    if sizes.windows(2).any(|pair| pair[1] <= pair[0]) {
        return Err(BenchError::Sweep {
            reason: "sizes must be strictly increasing".to_string(),
        });
    }
    Ok(())
}
