//! Recursive binary-tree allocation benchmark.
//!
//! Builds and discards full binary trees of varying depth, accumulating a
//! checksum per depth level. Each temporary tree is owned exclusively by its
//! root and dropped whole before the next one is built, so the allocator is
//! exercised with a full build/teardown cycle per iteration.

use crate::KernelError;
use std::io::Write;
use tracing::debug;

/// Depth of the shallowest temporary trees in the depth loop.
const MIN_DEPTH: i32 = 4;

/// A binary node owning both subtrees exclusively.
///
/// A node is a leaf iff both children are absent; leaves always carry
/// `item = 0`. No sharing or cycles are possible: dropping a node releases
/// its entire subtree.
pub struct TreeNode {
    item: i32,
    left: Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
}

impl TreeNode {
    fn leaf() -> Self {
        TreeNode {
            item: 0,
            left: None,
            right: None,
        }
    }

    fn branch(item: i32, left: TreeNode, right: TreeNode) -> Self {
        TreeNode {
            item,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    /// Checksum of the subtree rooted here.
    ///
    /// Leaves return `item`; interior nodes return
    /// `item + left.check() - right.check()`. The asymmetric sign is part of
    /// the output contract and must not be "symmetrized".
    pub fn check(&self) -> i32 {
        match (&self.left, &self.right) {
            (None, None) => self.item,
            (Some(left), Some(right)) => self.item + left.check() - right.check(),
            _ => unreachable!("a node has either zero or two children"),
        }
    }
}

/// Build a full binary tree of the given depth.
///
/// A depth of zero (or less) yields a single leaf; otherwise the node carries
/// `item = depth` and two independent subtrees of `depth - 1`.
pub fn make_tree(depth: i32) -> TreeNode {
    if depth <= 0 {
        return TreeNode::leaf();
    }
    TreeNode::branch(depth, make_tree(depth - 1), make_tree(depth - 1))
}

/// Run the tree benchmark driver, writing one report line per step.
pub fn run(n: u32, out: &mut impl Write) -> Result<(), KernelError> {
    let n = n as i32;
    let max_depth = (MIN_DEPTH + 2).max(n);
    debug!(min_depth = MIN_DEPTH, max_depth, "tree benchmark");

    // Stretch tree: one level deeper than anything else, checked and
    // discarded immediately.
    let stretch_depth = max_depth + 1;
    let stretch_tree = make_tree(stretch_depth);
    writeln!(
        out,
        "stretch tree of depth {}\t check: {}",
        stretch_depth,
        stretch_tree.check()
    )?;
    drop(stretch_tree);

    // Long-lived tree: retained until after the depth loop.
    let long_lived_tree = make_tree(max_depth);

    for depth in (MIN_DEPTH..=max_depth).step_by(2) {
        let iterations = 1 << (max_depth - depth + MIN_DEPTH);
        let mut check = 0;

        for _ in 0..iterations {
            let temp_tree = make_tree(depth);
            check += temp_tree.check();
        }

        writeln!(
            out,
            "{}\t trees of depth {}\t check: {}",
            iterations, depth, check
        )?;
    }

    writeln!(
        out,
        "long lived tree of depth {}\t check: {}",
        max_depth,
        long_lived_tree.check()
    )?;

    Ok(())
}
