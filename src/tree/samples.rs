//! Small hand-built trees used by the CLI and the test suite.

use super::TreeNode;
use crate::search::Value;

/// Leaf values of [`sixteen_leaves`], left to right.
pub const SIXTEEN_LEAF_VALUES: [Value; 16] = [3, 4, 2, 1, 7, 8, 9, 10, 2, 11, 1, 12, 14, 9, 13, 16];

/// Three-ply tree with labelled nodes.
///
/// ```text
///              A
///        B           C
///     D     E     F     G
///   -1 8  -3 -1  2 1  -3 4
/// ```
///
/// With the maximizer at `A` the value is 2, realized by `A -> C -> F -> f1`.
pub fn textbook() -> TreeNode {
    let pair = |name: &str, values: [Value; 2]| {
        let lower = name.to_lowercase();
        TreeNode::branch(vec![
            TreeNode::leaf(values[0]).with_id(format!("{lower}1")),
            TreeNode::leaf(values[1]).with_id(format!("{lower}2")),
        ])
        .with_id(name)
    };

    TreeNode::branch(vec![
        TreeNode::branch(vec![pair("D", [-1, 8]), pair("E", [-3, -1])]).with_id("B"),
        TreeNode::branch(vec![pair("F", [2, 1]), pair("G", [-3, 4])]).with_id("C"),
    ])
    .with_id("A")
}

/// Balanced four-ply binary tree over [`SIXTEEN_LEAF_VALUES`].
///
/// Nodes are labelled by position (`root`, `root.0`, `root.0.1`, ...). With
/// the maximizer at the root the value is 3; alpha-beta needs only 7 of the
/// 16 leaves to prove it.
pub fn sixteen_leaves() -> TreeNode {
    TreeNode::from_leaves(&SIXTEEN_LEAF_VALUES)
        .unwrap_or_else(|| TreeNode::leaf(0))
        .with_positional_ids("root")
}
