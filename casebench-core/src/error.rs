//! Error types for the benchmark harness

use std::collections::TryReserveError;
use thiserror::Error;

/// Errors that abort a benchmark sweep
///
/// Every variant is fatal to the measurement being attempted: the runner
/// never retries and never substitutes a sentinel value.
#[derive(Error, Debug)]
pub enum BenchError {
    /// A non-positive input size was requested
    #[error("input size must be positive")]
    InvalidSize,

    /// Input construction failed to allocate backing storage
    #[error("input allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    /// The elapsed time could not be represented in nanoseconds
    #[error("elapsed time of {seconds} s exceeds the nanosecond range")]
    Timer {
        /// Whole seconds of the unrepresentable duration
        seconds: u64,
    },

    /// The configured size sweep is malformed
    #[error("invalid size sweep: {reason}")]
    Sweep {
        /// Why the sweep was rejected
        reason: String,
    },
}

/// Result type for harness operations
pub type Result<T> = std::result::Result<T, BenchError>;
