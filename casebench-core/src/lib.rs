//! Empirical benchmark harness for classic algorithms
//!
//! Measures the wall-clock cost of a pluggable operation across an
//! input-size sweep and three input-shape categories (best, worst, average),
//! producing an ordered table of nanosecond measurements for an external
//! presentation layer. The harness itself has no display, persistence, or
//! GUI dependency.

#![warn(missing_docs)]

pub mod error;
pub mod generator;
pub mod plugins;
pub mod results;
pub mod runner;
pub mod theory;
pub mod timer;
pub mod types;
pub mod workload;

pub use error::{BenchError, Result};
pub use generator::InputGenerator;
pub use plugins::Operation;
pub use results::{Measurement, ResultTable};
pub use runner::BenchmarkRunner;
pub use types::{CaseCategory, Complexity, InputKind};
pub use workload::{LinkedSequence, SearchProbe, Workload};
