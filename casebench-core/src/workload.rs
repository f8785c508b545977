//! Generated input structures owned by a single timed invocation

use crate::types::InputKind;

/// One benchmark input, generated fresh per (size, category) pair
///
/// A workload is exclusively owned by the invocation being timed and is
/// dropped immediately after the measurement is taken.
#[derive(Debug)]
pub enum Workload {
    /// Flat sequence for in-place sorts
    Sequence(Vec<u64>),
    /// Insertion order for building a binary search tree
    Insertions(Vec<u64>),
    /// Linked sequence plus the key to search for
    Linked {
        /// The linked nodes, shaped per category
        list: LinkedSequence,
        /// Search target chosen per category
        key: u64,
    },
}

impl Workload {
    /// The structural kind of this workload
    pub fn kind(&self) -> InputKind {
        match self {
            Workload::Sequence(_) => InputKind::Sequence,
            Workload::Insertions(_) => InputKind::Insertions,
            Workload::Linked { .. } => InputKind::Linked,
        }
    }

    /// Number of elements held by this workload
    pub fn len(&self) -> usize {
        match self {
            Workload::Sequence(values) | Workload::Insertions(values) => values.len(),
            Workload::Linked { list, .. } => list.len(),
        }
    }

    /// Whether the workload holds no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Outcome of one early-exit scan over a [`LinkedSequence`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchProbe {
    /// Whether the key was found before the scan stopped
    pub found: bool,
    /// How many nodes the scan examined
    pub examined: usize,
}

struct Node {
    value: u64,
    next: Option<Box<Node>>,
}

/// Singly linked sequence of values
///
/// Built once by the generator, scanned by the search operation. Teardown is
/// iterative so a chain of n boxed nodes never recurses n deep in `Drop`.
pub struct LinkedSequence {
    head: Option<Box<Node>>,
    len: usize,
}

impl LinkedSequence {
    /// Build a sequence whose node order matches the iterator order
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = u64>,
        I::IntoIter: DoubleEndedIterator,
    {
        let mut head = None;
        let mut len = 0;
        for value in values.into_iter().rev() {
            head = Some(Box::new(Node { value, next: head }));
            len += 1;
        }
        Self { head, len }
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the sequence holds no nodes
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Scan for `key`, stopping early once a stored value exceeds it
    ///
    /// Correct only on an ascending sequence; on any other order the early
    /// exit may stop before a present key is reached.
    pub fn search(&self, key: u64) -> SearchProbe {
        let mut examined = 0;
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            examined += 1;
            if node.value == key {
                return SearchProbe {
                    found: true,
                    examined,
                };
            }
            if node.value > key {
                break;
            }
            cursor = node.next.as_deref();
        }
        SearchProbe {
            found: false,
            examined,
        }
    }

    /// Values in node order
    pub fn values(&self) -> Vec<u64> {
        let mut out = Vec::with_capacity(self.len);
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            out.push(node.value);
            cursor = node.next.as_deref();
        }
        out
    }
}

impl Drop for LinkedSequence {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl std::fmt::Debug for LinkedSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkedSequence")
            .field("len", &self.len)
            .finish()
    }
}
