//! Input generation for each (size, category, kind) combination

use crate::error::{BenchError, Result};
use crate::types::{CaseCategory, InputKind};
use crate::workload::{LinkedSequence, Workload};
use rand::seq::SliceRandom;
use rand::Rng;

/// Produces a fresh input instance per benchmark measurement
///
/// The random source is owned by the caller and threaded in at construction,
/// so tests can substitute a fixed-seed generator and reproduce the Average
/// category exactly.
pub struct InputGenerator<R: Rng> {
    rng: R,
}

impl<R: Rng> InputGenerator<R> {
    /// Create a generator drawing randomness from `rng`
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate one workload of exactly `size` elements
    ///
    /// Values are always the contiguous range `0..size`, so the three
    /// categories of one size are permutations of a single multiset.
    pub fn generate(
        &mut self,
        size: usize,
        category: CaseCategory,
        kind: InputKind,
    ) -> Result<Workload> {
        if size == 0 {
            return Err(BenchError::InvalidSize);
        }

        match kind {
            InputKind::Sequence => Ok(Workload::Sequence(self.sequence(size, category)?)),
            InputKind::Insertions => Ok(Workload::Insertions(self.insertions(size, category)?)),
            InputKind::Linked => {
                let values = self.sequence(size, category)?;
                let key = match category {
                    // the head value is always present
                    CaseCategory::Best => 0,
                    // one past the range, never present
                    CaseCategory::Worst => size as u64,
                    // the median of the stored range
                    CaseCategory::Average => (size / 2) as u64,
                };
                Ok(Workload::Linked {
                    list: LinkedSequence::from_values(values),
                    key,
                })
            }
        }
    }

    /// Ordered-sensitivity shapes: ascending, descending, shuffled
    fn sequence(&mut self, size: usize, category: CaseCategory) -> Result<Vec<u64>> {
        let mut values = ascending(size)?;
        match category {
            CaseCategory::Best => {}
            CaseCategory::Worst => values.reverse(),
            CaseCategory::Average => values.shuffle(&mut self.rng),
        }
        Ok(values)
    }

    /// BST insertion orders: only ascending insertion degenerates the tree,
    /// so Worst is sorted and both Best and Average are shuffled
    fn insertions(&mut self, size: usize, category: CaseCategory) -> Result<Vec<u64>> {
        let mut values = ascending(size)?;
        match category {
            CaseCategory::Worst => {}
            CaseCategory::Best | CaseCategory::Average => values.shuffle(&mut self.rng),
        }
        Ok(values)
    }
}

/// Allocate and fill `0..size`, surfacing allocation failure as an error
fn ascending(size: usize) -> Result<Vec<u64>> {
    let mut values = Vec::new();
    values.try_reserve_exact(size)?;
    values.extend(0..size as u64);
    Ok(values)
}
