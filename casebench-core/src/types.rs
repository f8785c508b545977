//! Shared value types for the benchmark harness

use serde::Serialize;
use std::fmt;

/// Input-shape category relative to an algorithm's sensitivity to ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseCategory {
    /// The shape the algorithm handles fastest (e.g. already sorted)
    Best,
    /// The shape that forces the algorithm's slowest behavior
    Worst,
    /// A uniform random permutation
    Average,
}

impl CaseCategory {
    /// All categories in the fixed order a sweep visits them
    pub const ALL: [CaseCategory; 3] = [
        CaseCategory::Best,
        CaseCategory::Worst,
        CaseCategory::Average,
    ];
}

impl fmt::Display for CaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseCategory::Best => write!(f, "best"),
            CaseCategory::Worst => write!(f, "worst"),
            CaseCategory::Average => write!(f, "average"),
        }
    }
}

/// Structural type of generated input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Flat sequence of values, sorted in place
    Sequence,
    /// Insertion order for building a binary search tree
    Insertions,
    /// Linked sequence plus a search key
    Linked,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Sequence => write!(f, "sequence"),
            InputKind::Insertions => write!(f, "insertions"),
            InputKind::Linked => write!(f, "linked"),
        }
    }
}

/// Asymptotic complexity class of one algorithm under one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// O(1)
    Constant,
    /// O(log n)
    Logarithmic,
    /// O(n)
    Linear,
    /// O(n log n)
    Linearithmic,
    /// O(n^2)
    Quadratic,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Complexity::Constant => write!(f, "O(1)"),
            Complexity::Logarithmic => write!(f, "O(log n)"),
            Complexity::Linear => write!(f, "O(n)"),
            Complexity::Linearithmic => write!(f, "O(n log n)"),
            Complexity::Quadratic => write!(f, "O(n^2)"),
        }
    }
}
