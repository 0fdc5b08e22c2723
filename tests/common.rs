//! Common test utilities for the gametree test suite.
//!
//! This module provides seeded random tree generation used across multiple
//! tests.

#![allow(dead_code)]

use gametree::{TreeNode, Value};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Deterministic RNG for a test case
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Build a random tree of at most `max_depth` levels below the root.
///
/// Interior nodes get between 1 and `max_branching` children; roughly one
/// node in five below the root stops early as a leaf, so leaves sit at mixed
/// depths. Leaf values fall in `-20..=20`, leaving plenty of ties. Every node
/// carries a positional id (`root`, `root.0`, `root.0.1`, ...).
pub fn random_tree(rng: &mut StdRng, max_depth: usize, max_branching: usize) -> TreeNode {
    build(rng, max_depth, max_branching, true).with_positional_ids("root")
}

fn build(rng: &mut StdRng, depth: usize, max_branching: usize, is_root: bool) -> TreeNode {
    let stop_early = !is_root && rng.random_bool(0.2);
    if depth == 0 || stop_early {
        return TreeNode::leaf(random_value(rng));
    }

    let width = rng.random_range(1..=max_branching);
    let children = (0..width)
        .map(|_| build(rng, depth - 1, max_branching, false))
        .collect();
    TreeNode::branch(children).with_value(random_value(rng))
}

fn random_value(rng: &mut StdRng) -> Value {
    rng.random_range(-20..=20)
}
