//! Explicit game trees built up front and searched in place.
//!
//! A [`TreeNode`] owns its children, so every tree is finite and acyclic by
//! construction. Values are only read from leaves: nodes without children, or
//! nodes reached when the depth budget runs out.
//!
//! Paths reported by the search helpers on [`TreeNode`] are root-inclusive:
//! the searched node's identifier comes first and the leaf's identifier last.
//! Nodes without an identifier are left out of the path.

pub mod samples;

use std::{collections::HashSet, convert::Infallible, fmt, fs, path::Path};

use serde::{Deserialize, Serialize};

pub use crate::identifiers::NodeId;
use crate::{
    config::Algorithm,
    search::{
        self, GameNode, NEG_INFINITY, POS_INFINITY, SearchResult, SearchStats, Searcher, Value,
    },
};

/// A node of an explicit game tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    #[serde(default, rename = "id", skip_serializing_if = "Option::is_none")]
    pub identifier: Option<NodeId>,
    #[serde(default)]
    pub value: Value,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create an unlabelled leaf.
    pub fn leaf(value: Value) -> Self {
        Self {
            identifier: None,
            value,
            children: Vec::new(),
        }
    }

    /// Create an unlabelled interior node; its own value defaults to 0.
    pub fn branch(children: Vec<TreeNode>) -> Self {
        Self {
            identifier: None,
            value: 0,
            children,
        }
    }

    /// Set the identifier used when reporting paths.
    pub fn with_id(mut self, id: impl Into<NodeId>) -> Self {
        self.identifier = Some(id.into());
        self
    }

    /// Set the value read when this node is evaluated as a leaf.
    pub fn with_value(mut self, value: Value) -> Self {
        self.value = value;
        self
    }

    /// Build a balanced binary tree whose leaves carry `values` left to right.
    ///
    /// Returns `None` for an empty slice. With an odd number of values the
    /// left subtree receives the extra leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use gametree::tree::TreeNode;
    ///
    /// let tree = TreeNode::from_leaves(&[3, 5, 2, 9]).unwrap();
    /// assert_eq!(tree.depth(), 2);
    /// assert_eq!(tree.minimax(2, true), 3);
    /// ```
    pub fn from_leaves(values: &[Value]) -> Option<Self> {
        match values {
            [] => None,
            [value] => Some(Self::leaf(*value)),
            _ => {
                let (left, right) = values.split_at(values.len().div_ceil(2));
                Some(Self::branch(vec![
                    Self::from_leaves(left)?,
                    Self::from_leaves(right)?,
                ]))
            }
        }
    }

    /// Give every unlabelled node an identifier derived from its position.
    ///
    /// The root receives `prefix`, its children `prefix.0`, `prefix.1`, and so
    /// on. Existing identifiers are kept and their children are numbered below
    /// them.
    pub fn with_positional_ids(mut self, prefix: &str) -> Self {
        self.assign_positional_ids(prefix);
        self
    }

    fn assign_positional_ids(&mut self, prefix: &str) {
        let own = self
            .identifier
            .get_or_insert_with(|| NodeId::new(prefix))
            .as_str()
            .to_string();
        for (index, child) in self.children.iter_mut().enumerate() {
            child.assign_positional_ids(&format!("{own}.{index}"));
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of plies from this node down to its deepest leaf.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Number of nodes without children.
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(TreeNode::leaf_count).sum()
        }
    }

    /// Look up a node by identifier, depth first.
    pub fn find(&self, id: &str) -> Option<&TreeNode> {
        if self.identifier.as_ref().is_some_and(|own| own.as_str() == id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Check that no identifier is used twice.
    pub fn validate(&self) -> crate::Result<()> {
        fn visit<'a>(node: &'a TreeNode, seen: &mut HashSet<&'a str>) -> crate::Result<()> {
            if let Some(id) = &node.identifier
                && !seen.insert(id.as_str())
            {
                return Err(crate::Error::DuplicateIdentifier { id: id.clone() });
            }
            node.children.iter().try_for_each(|child| visit(child, seen))
        }

        visit(self, &mut HashSet::new())
    }

    /// Minimax value searched `depth` plies deep.
    pub fn minimax(&self, depth: usize, maximizing: bool) -> Value {
        settled(search::minimax(&self, depth, maximizing))
    }

    /// Minimax value and the root-inclusive path of identifiers realizing it.
    pub fn minimax_path(&self, depth: usize, maximizing: bool) -> SearchResult<NodeId> {
        self.root_inclusive(settled(search::minimax_path(&self, depth, maximizing)))
    }

    /// Alpha-beta value over the full window; always equal to [`minimax`](Self::minimax).
    pub fn alpha_beta(&self, depth: usize, maximizing: bool) -> Value {
        settled(search::alpha_beta(
            &self,
            depth,
            maximizing,
            NEG_INFINITY,
            POS_INFINITY,
        ))
    }

    /// Alpha-beta value and the root-inclusive path of identifiers realizing it.
    pub fn alpha_beta_path(&self, depth: usize, maximizing: bool) -> SearchResult<NodeId> {
        self.root_inclusive(settled(search::alpha_beta_path(
            &self,
            depth,
            maximizing,
            NEG_INFINITY,
            POS_INFINITY,
        )))
    }

    /// Run the chosen algorithm and report how much of the tree it visited.
    pub fn search(
        &self,
        algorithm: Algorithm,
        depth: usize,
        maximizing: bool,
    ) -> (SearchResult<NodeId>, SearchStats) {
        let mut searcher = Searcher::new();
        let result = match algorithm {
            Algorithm::Minimax => searcher.minimax_path(&self, depth, maximizing),
            Algorithm::AlphaBeta => {
                searcher.alpha_beta_path(&self, depth, maximizing, NEG_INFINITY, POS_INFINITY)
            }
        };
        (self.root_inclusive(settled(result)), searcher.stats())
    }

    fn root_inclusive(&self, result: SearchResult<&TreeNode>) -> SearchResult<NodeId> {
        let SearchResult { value, path } = result;
        let path = std::iter::once(self)
            .chain(path)
            .filter_map(|node| node.identifier.clone())
            .collect();
        SearchResult { value, path }
    }

    /// Parse a tree from JSON and validate its identifiers.
    ///
    /// Nodes are objects with optional `id`, `value` and `children` fields.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON is malformed or an identifier repeats.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let tree: TreeNode = serde_json::from_str(json)?;
        tree.validate()?;
        Ok(tree)
    }

    /// Read and validate a tree stored as JSON.
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| crate::Error::io(format!("read tree file {}", path.display()), e))?;
        Self::from_json_str(&json)
    }

    /// Write the tree as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> crate::Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .map_err(|e| crate::Error::io(format!("write tree file {}", path.display()), e))
    }

    fn write_outline(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let label = self.identifier.as_ref().map_or("*", NodeId::as_str);
        if self.is_leaf() {
            writeln!(f, "{:indent$}{label} = {}", "", self.value)?;
        } else {
            writeln!(f, "{:indent$}{label}", "")?;
        }
        for child in &self.children {
            child.write_outline(f, indent + 2)?;
        }
        Ok(())
    }
}

/// Renders an indented outline, one node per line, leaves with their values.
impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_outline(f, 0)
    }
}

impl<'a> GameNode for &'a TreeNode {
    type Move = &'a TreeNode;
    type Error = Infallible;

    fn is_terminal(&self) -> bool {
        self.children.is_empty()
    }

    fn value(&self) -> Value {
        (**self).value
    }

    fn moves(&self) -> Vec<&'a TreeNode> {
        let node: &'a TreeNode = *self;
        node.children.iter().collect()
    }

    fn play(&self, mv: &&'a TreeNode) -> Result<&'a TreeNode, Infallible> {
        Ok(*mv)
    }
}

fn settled<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
