//! Monotonic wall-clock timing of a single invocation

use crate::error::{BenchError, Result};
use std::time::Instant;

/// Time one invocation of `f` at nanosecond resolution
///
/// Readings come from [`Instant`], a monotonic source that system clock
/// adjustments cannot skew. The closure's value is returned alongside the
/// elapsed nanoseconds so the caller can keep the operation's outcome. A
/// panic inside `f` unwinds through and no measurement is produced.
pub fn measure<T>(f: impl FnOnce() -> T) -> Result<(T, u64)> {
    let start = Instant::now();
    let outcome = f();
    let elapsed = start.elapsed();

    let nanos = u64::try_from(elapsed.as_nanos()).map_err(|_| BenchError::Timer {
        seconds: elapsed.as_secs(),
    })?;
    Ok((outcome, nanos))
}
