//! Merge sort

use super::Operation;
use crate::types::{CaseCategory, Complexity, InputKind};
use crate::workload::Workload;

/// Stable divide-and-conquer sort; linearithmic in every category
pub struct MergeSort;

/// Sort `values` in place via recursive splitting
pub fn merge_sort(values: &mut [u64]) {
    if values.len() <= 1 {
        return;
    }
    let mid = values.len() / 2;
    merge_sort(&mut values[..mid]);
    merge_sort(&mut values[mid..]);
    merge(values, mid);
}

/// Merge the two sorted halves split at `mid`, buffering both halves
///
/// `<=` keeps equal elements in left-half order, so the sort is stable.
fn merge(values: &mut [u64], mid: usize) {
    let left = values[..mid].to_vec();
    let right = values[mid..].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = 0;
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            values[k] = left[i];
            i += 1;
        } else {
            values[k] = right[j];
            j += 1;
        }
        k += 1;
    }
    while i < left.len() {
        values[k] = left[i];
        i += 1;
        k += 1;
    }
    while j < right.len() {
        values[k] = right[j];
        j += 1;
        k += 1;
    }
}

impl Operation for MergeSort {
    fn name(&self) -> &'static str {
        "merge-sort"
    }

    fn input_kind(&self) -> InputKind {
        InputKind::Sequence
    }

    fn complexity(&self, _category: CaseCategory) -> Complexity {
        Complexity::Linearithmic
    }

    fn run(&self, workload: &mut Workload) -> Option<bool> {
        match workload {
            Workload::Sequence(values) => {
                merge_sort(values);
                None
            }
            other => unreachable!("merge-sort generated a {} workload", other.kind()),
        }
    }
}
