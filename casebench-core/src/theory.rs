//! Theoretical operation-count estimates for comparison overlays
//!
//! These dimensionless curves are what a presentation layer plots next to
//! the measured timings; they play no part in the timing core.

use crate::plugins::Operation;
use crate::types::{CaseCategory, Complexity};

/// Estimated operation count for a complexity class at input size `n`
pub fn operation_count(complexity: Complexity, n: usize) -> f64 {
    let n = n as f64;
    match complexity {
        Complexity::Constant => 1.0,
        Complexity::Logarithmic => n.max(1.0).log2(),
        Complexity::Linear => n,
        Complexity::Linearithmic => n * n.max(1.0).log2(),
        Complexity::Quadratic => n * n,
    }
}

/// Per-size estimates for one operation under one category
pub fn curve(operation: &dyn Operation, category: CaseCategory, sizes: &[usize]) -> Vec<f64> {
    let complexity = operation.complexity(category);
    sizes
        .iter()
        .map(|&n| operation_count(complexity, n))
        .collect()
}
