//! Pluggable operations and their registry
//!
//! Each algorithm implements [`Operation`] and is registered by name, so the
//! caller selects a plugin at configuration time instead of wiring a
//! function pointer per program.

use crate::types::{CaseCategory, Complexity, InputKind};
use crate::workload::Workload;

pub mod bst;
pub mod bubble;
pub mod linked;
pub mod merge;
pub mod selection;

pub use bst::BstInsert;
pub use bubble::BubbleSort;
pub use linked::LinkedSearch;
pub use merge::MergeSort;
pub use selection::SelectionSort;

/// A pluggable unit of work applied to one generated workload
///
/// Implementations trust the generator's contract: the workload matches
/// [`Operation::input_kind`] and is never empty.
pub trait Operation {
    /// Registry name of the algorithm
    fn name(&self) -> &'static str;

    /// The workload shape this operation consumes
    fn input_kind(&self) -> InputKind;

    /// Theoretical complexity class under one category
    fn complexity(&self, category: CaseCategory) -> Complexity;

    /// Execute once against the workload
    ///
    /// Sorts and tree builds mutate in place and return `None`; searches
    /// return `Some(found)`. The flag is irrelevant to timing.
    fn run(&self, workload: &mut Workload) -> Option<bool>;
}

/// Every registered operation, in presentation order
pub fn all() -> Vec<Box<dyn Operation>> {
    vec![
        Box::new(BstInsert),
        Box::new(BubbleSort),
        Box::new(MergeSort),
        Box::new(SelectionSort),
        Box::new(LinkedSearch),
    ]
}

/// Look an operation up by its registry name
pub fn by_name(name: &str) -> Option<Box<dyn Operation>> {
    all().into_iter().find(|op| op.name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_holds_five_uniquely_named_operations() {
        let ops = all();
        assert_eq!(ops.len(), 5);
        let mut names: Vec<_> = ops.iter().map(|op| op.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn lookup_by_name_round_trips() {
        for op in all() {
            let found = by_name(op.name()).expect("registered name resolves");
            assert_eq!(found.name(), op.name());
            assert_eq!(found.input_kind(), op.input_kind());
        }
        assert!(by_name("quick-sort").is_none());
    }
}
