//! Sorted-linked-list search

use super::Operation;
use crate::types::{CaseCategory, Complexity, InputKind};
use crate::workload::Workload;

/// Early-exit linear scan over a linked sequence
///
/// The scan stops as soon as a stored value exceeds the key, so a head hit
/// costs one probe and an absent key costs a full traversal.
pub struct LinkedSearch;

impl Operation for LinkedSearch {
    fn name(&self) -> &'static str {
        "linked-search"
    }

    fn input_kind(&self) -> InputKind {
        InputKind::Linked
    }

    fn complexity(&self, category: CaseCategory) -> Complexity {
        match category {
            CaseCategory::Best => Complexity::Constant,
            CaseCategory::Worst | CaseCategory::Average => Complexity::Linear,
        }
    }

    fn run(&self, workload: &mut Workload) -> Option<bool> {
        match workload {
            Workload::Linked { list, key } => Some(list.search(*key).found),
            other => unreachable!("linked-search generated a {} workload", other.kind()),
        }
    }
}
