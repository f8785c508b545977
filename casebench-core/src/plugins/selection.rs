//! Selection sort

use super::Operation;
use crate::types::{CaseCategory, Complexity, InputKind};
use crate::workload::Workload;

/// Scan-for-minimum sort; quadratic regardless of initial order
pub struct SelectionSort;

/// Sort `values` in place by repeatedly swapping the minimum forward
pub fn selection_sort(values: &mut [u64]) {
    let n = values.len();
    for i in 0..n {
        let mut min = i;
        for j in i + 1..n {
            if values[j] < values[min] {
                min = j;
            }
        }
        if min != i {
            values.swap(i, min);
        }
    }
}

impl Operation for SelectionSort {
    fn name(&self) -> &'static str {
        "selection-sort"
    }

    fn input_kind(&self) -> InputKind {
        InputKind::Sequence
    }

    fn complexity(&self, _category: CaseCategory) -> Complexity {
        Complexity::Quadratic
    }

    fn run(&self, workload: &mut Workload) -> Option<bool> {
        match workload {
            Workload::Sequence(values) => {
                selection_sort(values);
                None
            }
            other => unreachable!("selection-sort generated a {} workload", other.kind()),
        }
    }
}
