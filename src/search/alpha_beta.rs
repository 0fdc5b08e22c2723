//! Minimax with alpha-beta pruning.
//!
//! `alpha` is the best value the maximizer can already guarantee on the way to
//! a node, `beta` the best the minimizer can guarantee. As soon as
//! `beta <= alpha` the remaining successors of a node cannot influence the
//! result and are skipped without being generated.

use log::{debug, trace};

use super::{GameNode, SearchResult, Searcher, Value, improves, is_leaf};

/// Lower bound of the initial search window.
pub const NEG_INFINITY: Value = Value::MIN;

/// Upper bound of the initial search window.
pub const POS_INFINITY: Value = Value::MAX;

/// Alpha-beta value of `root` within the window `(alpha, beta)`.
///
/// Called with [`NEG_INFINITY`] and [`POS_INFINITY`] the result equals
/// [`minimax`](super::minimax) on the same arguments.
pub fn alpha_beta<N: GameNode>(
    root: &N,
    depth: usize,
    maximizing: bool,
    alpha: Value,
    beta: Value,
) -> Result<Value, N::Error> {
    Searcher::new().alpha_beta(root, depth, maximizing, alpha, beta)
}

/// Alpha-beta value of `root` together with the line of moves realizing it.
pub fn alpha_beta_path<N: GameNode>(
    root: &N,
    depth: usize,
    maximizing: bool,
    alpha: Value,
    beta: Value,
) -> Result<SearchResult<N::Move>, N::Error> {
    Searcher::new().alpha_beta_path(root, depth, maximizing, alpha, beta)
}

impl Searcher {
    /// See [`alpha_beta`](super::alpha_beta).
    pub fn alpha_beta<N: GameNode>(
        &mut self,
        root: &N,
        depth: usize,
        maximizing: bool,
        alpha: Value,
        beta: Value,
    ) -> Result<Value, N::Error> {
        let value = self.alpha_beta_value(root, depth, maximizing, alpha, beta)?;
        debug!(
            "alpha_beta(depth={depth}, maximizing={maximizing}) = {value} after {} nodes, {} cutoffs",
            self.stats.nodes, self.stats.cutoffs
        );
        Ok(value)
    }

    /// See [`alpha_beta_path`](super::alpha_beta_path).
    pub fn alpha_beta_path<N: GameNode>(
        &mut self,
        root: &N,
        depth: usize,
        maximizing: bool,
        alpha: Value,
        beta: Value,
    ) -> Result<SearchResult<N::Move>, N::Error> {
        let result = self.alpha_beta_line(root, depth, maximizing, alpha, beta)?;
        debug!(
            "alpha_beta_path(depth={depth}, maximizing={maximizing}) = {} over {} plies after {} nodes, {} cutoffs",
            result.value,
            result.path.len(),
            self.stats.nodes,
            self.stats.cutoffs
        );
        Ok(result)
    }

    fn alpha_beta_value<N: GameNode>(
        &mut self,
        node: &N,
        depth: usize,
        maximizing: bool,
        mut alpha: Value,
        mut beta: Value,
    ) -> Result<Value, N::Error> {
        self.enter();
        if is_leaf(node, depth) {
            return Ok(self.evaluate_leaf(node));
        }

        let mut best: Option<Value> = None;
        for mv in node.moves() {
            let child = node.play(&mv)?;
            let score = self.alpha_beta_value(&child, depth - 1, !maximizing, alpha, beta)?;
            if best.is_none_or(|incumbent| improves(score, incumbent, maximizing)) {
                best = Some(score);
            }
            if self.tighten(&mut alpha, &mut beta, score, maximizing) {
                break;
            }
        }

        Ok(best.unwrap_or_else(|| self.evaluate_leaf(node)))
    }

    fn alpha_beta_line<N: GameNode>(
        &mut self,
        node: &N,
        depth: usize,
        maximizing: bool,
        mut alpha: Value,
        mut beta: Value,
    ) -> Result<SearchResult<N::Move>, N::Error> {
        self.enter();
        if is_leaf(node, depth) {
            return Ok(SearchResult::leaf(self.evaluate_leaf(node)));
        }

        let mut best: Option<SearchResult<N::Move>> = None;
        for mv in node.moves() {
            let child = node.play(&mv)?;
            let line = self.alpha_beta_line(&child, depth - 1, !maximizing, alpha, beta)?;
            let score = line.value;
            if best
                .as_ref()
                .is_none_or(|incumbent| improves(score, incumbent.value, maximizing))
            {
                best = Some(line.prepend(mv));
            }
            if self.tighten(&mut alpha, &mut beta, score, maximizing) {
                break;
            }
        }

        match best {
            Some(result) => Ok(result),
            None => Ok(SearchResult::leaf(self.evaluate_leaf(node))),
        }
    }

    /// Fold a child's score into the window; true when the node can be cut off.
    fn tighten(
        &mut self,
        alpha: &mut Value,
        beta: &mut Value,
        score: Value,
        maximizing: bool,
    ) -> bool {
        if maximizing {
            *alpha = (*alpha).max(score);
        } else {
            *beta = (*beta).min(score);
        }

        if *beta <= *alpha {
            self.stats.cutoffs += 1;
            trace!("cutoff at alpha={alpha}, beta={beta}");
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{search::minimax, tree::TreeNode};

    fn full<N: GameNode>(root: &N, depth: usize, maximizing: bool) -> Result<Value, N::Error> {
        alpha_beta(root, depth, maximizing, NEG_INFINITY, POS_INFINITY)
    }

    #[test]
    fn matches_minimax_on_small_tree() {
        let root = TreeNode::branch(vec![
            TreeNode::branch(vec![TreeNode::leaf(3), TreeNode::leaf(12), TreeNode::leaf(8)]),
            TreeNode::branch(vec![TreeNode::leaf(2), TreeNode::leaf(4), TreeNode::leaf(6)]),
            TreeNode::branch(vec![TreeNode::leaf(14), TreeNode::leaf(5), TreeNode::leaf(2)]),
        ]);
        for maximizing in [true, false] {
            for depth in 0..=3 {
                assert_eq!(
                    full(&&root, depth, maximizing).unwrap(),
                    minimax(&&root, depth, maximizing).unwrap(),
                    "depth={depth}, maximizing={maximizing}"
                );
            }
        }
    }

    #[test]
    fn prunes_after_refutation() {
        // After the first min node backs up 3, the second min node is refuted
        // by its first leaf (2 <= 3) and its remaining leaves are skipped. The
        // third only falls to 2 on its last leaf, so nothing is left to skip.
        let root = TreeNode::branch(vec![
            TreeNode::branch(vec![TreeNode::leaf(3), TreeNode::leaf(12), TreeNode::leaf(8)]),
            TreeNode::branch(vec![TreeNode::leaf(2), TreeNode::leaf(4), TreeNode::leaf(6)]),
            TreeNode::branch(vec![TreeNode::leaf(14), TreeNode::leaf(5), TreeNode::leaf(2)]),
        ]);
        let mut searcher = Searcher::new();
        let value = searcher
            .alpha_beta(&&root, 2, true, NEG_INFINITY, POS_INFINITY)
            .unwrap();
        assert_eq!(value, 3);

        let stats = searcher.stats();
        assert_eq!(stats.leaves, 7);
        assert_eq!(stats.cutoffs, 2);
    }

    #[test]
    fn narrow_window_cuts_at_root() {
        let root = TreeNode::branch(vec![TreeNode::leaf(10), TreeNode::leaf(20)]);
        let mut searcher = Searcher::new();
        let value = searcher.alpha_beta(&&root, 1, true, 0, 5).unwrap();
        assert_eq!(value, 10);
        assert_eq!(searcher.stats().leaves, 1);
    }

    #[test]
    fn path_uses_strict_improvement() {
        let root = TreeNode::branch(vec![
            TreeNode::leaf(1).with_id("a"),
            TreeNode::leaf(4).with_id("b"),
            TreeNode::leaf(4).with_id("c"),
        ]);
        let result = alpha_beta_path(&&root, 1, true, NEG_INFINITY, POS_INFINITY).unwrap();
        assert_eq!(result.value, 4);
        let ids: Vec<_> = result
            .path
            .iter()
            .filter_map(|node| node.identifier.as_ref().map(|id| id.as_str()))
            .collect();
        assert_eq!(ids, vec!["b"]);
    }
}
