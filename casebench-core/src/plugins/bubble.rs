//! Bubble sort with early exit

use super::Operation;
use crate::types::{CaseCategory, Complexity, InputKind};
use crate::workload::Workload;

/// Adjacent-swap sort that stops after the first swap-free pass
pub struct BubbleSort;

/// Sort `values` in place, returning the number of passes executed
///
/// A pass with no swaps proves the remainder is ordered, so an already
/// sorted input finishes after exactly one pass.
pub fn bubble_sort(values: &mut [u64]) -> usize {
    let n = values.len();
    let mut passes = 0;
    for i in 0..n.saturating_sub(1) {
        passes += 1;
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    passes
}

impl Operation for BubbleSort {
    fn name(&self) -> &'static str {
        "bubble-sort"
    }

    fn input_kind(&self) -> InputKind {
        InputKind::Sequence
    }

    fn complexity(&self, category: CaseCategory) -> Complexity {
        match category {
            CaseCategory::Best => Complexity::Linear,
            CaseCategory::Worst | CaseCategory::Average => Complexity::Quadratic,
        }
    }

    fn run(&self, workload: &mut Workload) -> Option<bool> {
        match workload {
            Workload::Sequence(values) => {
                bubble_sort(values);
                None
            }
            other => unreachable!("bubble-sort generated a {} workload", other.kind()),
        }
    }
}
