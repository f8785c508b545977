//! Binary-search-tree insertion

use super::Operation;
use crate::types::{CaseCategory, Complexity, InputKind};
use crate::workload::Workload;

/// Builds a BST by inserting every element of the generated order
///
/// A shuffled order yields a near-balanced tree only in expectation; the
/// ascending Worst order degenerates the tree into a chain with O(n)
/// insertion depth.
pub struct BstInsert;

struct TreeNode {
    value: u64,
    left: Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
}

/// Unbalanced binary search tree over `u64` values
///
/// Insertion and teardown are iterative: the Worst-case chain is as deep as
/// the input is long, and recursing that deep would exhaust the stack.
pub struct Bst {
    root: Option<Box<TreeNode>>,
    len: usize,
}

impl Bst {
    /// An empty tree
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Insert `value`, descending left on smaller and right otherwise
    pub fn insert(&mut self, value: u64) {
        self.len += 1;
        let mut cursor = &mut self.root;
        while let Some(node) = cursor {
            if value < node.value {
                cursor = &mut node.left;
            } else {
                cursor = &mut node.right;
            }
        }
        *cursor = Some(Box::new(TreeNode {
            value,
            left: None,
            right: None,
        }));
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Longest root-to-leaf node count
    pub fn height(&self) -> usize {
        // iterative level-order walk; recursion would mirror the chain depth
        let mut height = 0;
        let mut level: Vec<&TreeNode> = self.root.as_deref().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|node| [node.left.as_deref(), node.right.as_deref()])
                .flatten()
                .collect();
        }
        height
    }
}

impl Default for Bst {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Bst {
    fn drop(&mut self) {
        let mut pending: Vec<Box<TreeNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Build a tree from the insertion order, returning it for inspection
pub fn build_tree(order: &[u64]) -> Bst {
    let mut tree = Bst::new();
    for &value in order {
        tree.insert(value);
    }
    tree
}

impl Operation for BstInsert {
    fn name(&self) -> &'static str {
        "bst-insert"
    }

    fn input_kind(&self) -> InputKind {
        InputKind::Insertions
    }

    fn complexity(&self, category: CaseCategory) -> Complexity {
        match category {
            CaseCategory::Best | CaseCategory::Average => Complexity::Logarithmic,
            CaseCategory::Worst => Complexity::Linear,
        }
    }

    fn run(&self, workload: &mut Workload) -> Option<bool> {
        match workload {
            Workload::Insertions(order) => {
                build_tree(order);
                None
            }
            other => unreachable!("bst-insert generated a {} workload", other.kind()),
        }
    }
}
