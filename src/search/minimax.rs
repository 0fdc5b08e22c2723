//! Plain minimax, exploring every successor.

use log::debug;

use super::{GameNode, SearchResult, Searcher, Value, improves, is_leaf};

/// Minimax value of `root` searched `depth` plies deep.
///
/// `maximizing` says whose turn it is at `root`; sides alternate every ply.
pub fn minimax<N: GameNode>(root: &N, depth: usize, maximizing: bool) -> Result<Value, N::Error> {
    Searcher::new().minimax(root, depth, maximizing)
}

/// Minimax value of `root` together with the line of moves realizing it.
pub fn minimax_path<N: GameNode>(
    root: &N,
    depth: usize,
    maximizing: bool,
) -> Result<SearchResult<N::Move>, N::Error> {
    Searcher::new().minimax_path(root, depth, maximizing)
}

impl Searcher {
    /// See [`minimax`](super::minimax).
    pub fn minimax<N: GameNode>(
        &mut self,
        root: &N,
        depth: usize,
        maximizing: bool,
    ) -> Result<Value, N::Error> {
        let value = self.minimax_value(root, depth, maximizing)?;
        debug!(
            "minimax(depth={depth}, maximizing={maximizing}) = {value} after {} nodes",
            self.stats.nodes
        );
        Ok(value)
    }

    /// See [`minimax_path`](super::minimax_path).
    pub fn minimax_path<N: GameNode>(
        &mut self,
        root: &N,
        depth: usize,
        maximizing: bool,
    ) -> Result<SearchResult<N::Move>, N::Error> {
        let result = self.minimax_line(root, depth, maximizing)?;
        debug!(
            "minimax_path(depth={depth}, maximizing={maximizing}) = {} over {} plies after {} nodes",
            result.value,
            result.path.len(),
            self.stats.nodes
        );
        Ok(result)
    }

    fn minimax_value<N: GameNode>(
        &mut self,
        node: &N,
        depth: usize,
        maximizing: bool,
    ) -> Result<Value, N::Error> {
        self.enter();
        if is_leaf(node, depth) {
            return Ok(self.evaluate_leaf(node));
        }

        let mut best: Option<Value> = None;
        for mv in node.moves() {
            let child = node.play(&mv)?;
            let score = self.minimax_value(&child, depth - 1, !maximizing)?;
            if best.is_none_or(|incumbent| improves(score, incumbent, maximizing)) {
                best = Some(score);
            }
        }

        Ok(best.unwrap_or_else(|| self.evaluate_leaf(node)))
    }

    fn minimax_line<N: GameNode>(
        &mut self,
        node: &N,
        depth: usize,
        maximizing: bool,
    ) -> Result<SearchResult<N::Move>, N::Error> {
        self.enter();
        if is_leaf(node, depth) {
            return Ok(SearchResult::leaf(self.evaluate_leaf(node)));
        }

        let mut best: Option<SearchResult<N::Move>> = None;
        for mv in node.moves() {
            let child = node.play(&mv)?;
            let line = self.minimax_line(&child, depth - 1, !maximizing)?;
            if best
                .as_ref()
                .is_none_or(|incumbent| improves(line.value, incumbent.value, maximizing))
            {
                best = Some(line.prepend(mv));
            }
        }

        match best {
            Some(result) => Ok(result),
            None => Ok(SearchResult::leaf(self.evaluate_leaf(node))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeNode;

    fn two_ply() -> TreeNode {
        TreeNode::branch(vec![
            TreeNode::branch(vec![TreeNode::leaf(3), TreeNode::leaf(12), TreeNode::leaf(8)]),
            TreeNode::branch(vec![TreeNode::leaf(2), TreeNode::leaf(4), TreeNode::leaf(6)]),
            TreeNode::branch(vec![TreeNode::leaf(14), TreeNode::leaf(5), TreeNode::leaf(2)]),
        ])
    }

    #[test]
    fn backs_up_min_of_max() {
        let root = two_ply();
        assert_eq!(minimax(&&root, 2, true).unwrap(), 3);
        assert_eq!(minimax(&&root, 2, false).unwrap(), 6);
    }

    #[test]
    fn depth_zero_reads_node_value() {
        let root = two_ply();
        assert_eq!(minimax(&&root, 0, true).unwrap(), root.value);
    }

    #[test]
    fn depth_one_treats_children_as_leaves() {
        let root = TreeNode::branch(vec![
            TreeNode::branch(vec![TreeNode::leaf(100)]).with_value(1),
            TreeNode::branch(vec![TreeNode::leaf(-100)]).with_value(7),
        ]);
        assert_eq!(minimax(&&root, 1, true).unwrap(), 7);
        assert_eq!(minimax(&&root, 2, true).unwrap(), 100);
    }

    #[test]
    fn ties_keep_first_child() {
        let root = TreeNode::branch(vec![
            TreeNode::leaf(5).with_id("first"),
            TreeNode::leaf(5).with_id("second"),
        ]);
        let result = minimax_path(&&root, 1, true).unwrap();
        let chosen = result.best_move().and_then(|node| node.identifier.clone());
        assert_eq!(chosen.as_ref().map(|id| id.as_str()), Some("first"));

        let result = minimax_path(&&root, 1, false).unwrap();
        let chosen = result.best_move().and_then(|node| node.identifier.clone());
        assert_eq!(chosen.as_ref().map(|id| id.as_str()), Some("first"));
    }

    #[test]
    fn counts_every_node_without_pruning() {
        let root = two_ply();
        let mut searcher = Searcher::new();
        searcher.minimax(&&root, 2, true).unwrap();
        let stats = searcher.stats();
        assert_eq!(stats.nodes, 13);
        assert_eq!(stats.leaves, 9);
        assert_eq!(stats.cutoffs, 0);
    }
}
