//! Adversarial search over trees that can be expanded one ply at a time.
//!
//! The engine never needs a materialized tree. Anything implementing
//! [`GameNode`] can be searched: an explicit [`TreeNode`](crate::tree::TreeNode)
//! hands out references to its children, while a tic-tac-toe
//! [`GameState`](crate::tictactoe::GameState) generates successor states on
//! demand from its legal actions.
//!
//! All searches share the same conventions:
//!
//! - A node is evaluated as a leaf when `depth == 0` or it is terminal.
//! - Only a strict improvement replaces the running best child, so among
//!   equal-valued children the first in move order wins.
//! - The returned path lists the moves from the searched node down to the leaf
//!   that realizes the value. A leaf yields an empty path.
//!
//! # Examples
//!
//! ```
//! use gametree::search::{self, NEG_INFINITY, POS_INFINITY};
//! use gametree::tree::TreeNode;
//!
//! let root = TreeNode::branch(vec![
//!     TreeNode::branch(vec![TreeNode::leaf(3), TreeNode::leaf(5)]),
//!     TreeNode::branch(vec![TreeNode::leaf(2), TreeNode::leaf(9)]),
//! ]);
//!
//! let plain = search::minimax(&&root, 2, true).unwrap();
//! let pruned = search::alpha_beta(&&root, 2, true, NEG_INFINITY, POS_INFINITY).unwrap();
//! assert_eq!(plain, 3);
//! assert_eq!(plain, pruned);
//! ```

pub mod alpha_beta;
pub mod minimax;

use serde::{Deserialize, Serialize};

pub use alpha_beta::{NEG_INFINITY, POS_INFINITY, alpha_beta, alpha_beta_path};
pub use minimax::{minimax, minimax_path};

/// Numeric payoff, always from the maximizer's point of view.
pub type Value = i32;

/// A position the search engine can evaluate and expand.
///
/// Implementors only describe one ply at a time; the engine drives the
/// recursion and decides which successors are generated at all. Under
/// alpha-beta, successors after a cutoff are never passed to [`play`].
///
/// [`play`]: GameNode::play
pub trait GameNode: Sized {
    /// Label of the edge leading to a successor (a child reference, an action).
    type Move: Clone;

    /// Error raised while producing a successor.
    type Error;

    /// Whether the node has no successors to explore.
    fn is_terminal(&self) -> bool;

    /// Payoff used when the node is evaluated as a leaf.
    fn value(&self) -> Value;

    /// Successor moves in the order the search should visit them.
    fn moves(&self) -> Vec<Self::Move>;

    /// Produce the successor reached by `mv`, leaving `self` untouched.
    fn play(&self, mv: &Self::Move) -> Result<Self, Self::Error>;
}

/// Backed-up value of a node together with the line that realizes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult<M> {
    pub value: Value,
    pub path: Vec<M>,
}

impl<M> SearchResult<M> {
    /// Result for a node evaluated as a leaf
    pub fn leaf(value: Value) -> Self {
        Self {
            value,
            path: Vec::new(),
        }
    }

    /// The first move of the principal line, if the node was expanded
    pub fn best_move(&self) -> Option<&M> {
        self.path.first()
    }

    /// Prefix the path with the move that led to this result.
    fn prepend(mut self, mv: M) -> Self {
        self.path.insert(0, mv);
        self
    }

    /// Convert every move of the path, keeping the value.
    pub fn map_path<T>(self, f: impl FnMut(M) -> T) -> SearchResult<T> {
        SearchResult {
            value: self.value,
            path: self.path.into_iter().map(f).collect(),
        }
    }
}

/// Counters collected while a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Every node entered, leaves included
    pub nodes: u64,
    /// Nodes whose value was read directly
    pub leaves: u64,
    /// Times alpha-beta stopped iterating a node's remaining moves
    pub cutoffs: u64,
}

/// Runs searches and records [`SearchStats`] across them.
///
/// The free functions in this module create a fresh `Searcher` per call.
/// Use one directly when the amount of work done matters, e.g. to confirm
/// that pruning skipped part of the tree.
#[derive(Debug, Default)]
pub struct Searcher {
    stats: SearchStats,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics accumulated by every search run so far.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Reset the counters to zero.
    pub fn reset(&mut self) {
        self.stats = SearchStats::default();
    }

    fn enter(&mut self) {
        self.stats.nodes += 1;
    }

    fn evaluate_leaf<N: GameNode>(&mut self, node: &N) -> Value {
        self.stats.leaves += 1;
        node.value()
    }
}

fn is_leaf<N: GameNode>(node: &N, depth: usize) -> bool {
    depth == 0 || node.is_terminal()
}

/// Strict improvement test shared by every variant.
fn improves(candidate: Value, incumbent: Value, maximizing: bool) -> bool {
    if maximizing {
        candidate > incumbent
    } else {
        candidate < incumbent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn improvement_is_strict() {
        assert!(improves(2, 1, true));
        assert!(!improves(1, 1, true));
        assert!(improves(0, 1, false));
        assert!(!improves(1, 1, false));
    }

    #[test]
    fn prepend_builds_path_front_to_back() {
        let result = SearchResult::leaf(4).prepend('c').prepend('b').prepend('a');
        assert_eq!(result.path, vec!['a', 'b', 'c']);
        assert_eq!(result.best_move(), Some(&'a'));
        assert_eq!(result.value, 4);
    }

    #[test]
    fn map_path_keeps_value() {
        let mapped = SearchResult {
            value: -1,
            path: vec![1, 2],
        }
        .map_path(|step| step * 10);
        assert_eq!(mapped.value, -1);
        assert_eq!(mapped.path, vec![10, 20]);
    }
}
