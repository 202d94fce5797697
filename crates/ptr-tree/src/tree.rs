//! Immutable documentation tree arena.
//!
//! Nodes are stored in a flat `Vec<Node>` with parent/children relationships
//! tracked by indices. This provides:
//! - O(1) full-path lookups via the `path_index` `HashMap`
//! - O(d) ancestor walks where d is the node depth
//!
//! The tree is constructed once by [`TreeBuilder`](crate::TreeBuilder) and is
//! read-only thereafter; its lifetime equals the application's lifetime.

use std::collections::HashMap;

use crate::node::{Node, NodeId};

/// Immutable arena of documentation nodes.
///
/// The root is a distinguished directory with an empty segment, always
/// present and always at index 0. Full routable paths are precomputed at
/// build time as the `/`-joined segments from the root (exclusive of the
/// root's empty segment), so path computation and route lookup stay
/// inverse-consistent by construction.
#[derive(Debug)]
pub struct DocTree {
    nodes: Vec<Node>,
    children: Vec<Vec<NodeId>>,
    parents: Vec<Option<NodeId>>,
    full_paths: Vec<String>,
    path_index: HashMap<String, NodeId>,
}

impl DocTree {
    /// Assemble a tree from builder output.
    ///
    /// Invariants (sibling uniqueness, segment validity) are enforced by
    /// [`TreeBuilder::build`](crate::TreeBuilder::build) before this runs.
    pub(crate) fn new(
        nodes: Vec<Node>,
        children: Vec<Vec<NodeId>>,
        parents: Vec<Option<NodeId>>,
        full_paths: Vec<String>,
    ) -> Self {
        let path_index = full_paths
            .iter()
            .enumerate()
            .map(|(i, path)| (path.clone(), NodeId(i)))
            .collect();

        Self {
            nodes,
            children,
            parents,
            full_paths,
            path_index,
        }
    }

    /// The root directory.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Node data for an identifier.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Children of a node, in declaration order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.children[id.0]
    }

    /// Parent of a node, `None` for the root.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents[id.0]
    }

    /// Full routable path of a node.
    ///
    /// The `/`-joined segments from root to the node, exclusive of the
    /// root's empty segment. Empty string for the root itself.
    #[must_use]
    pub fn full_path(&self, id: NodeId) -> &str {
        &self.full_paths[id.0]
    }

    /// Node for a full routable path, O(1).
    ///
    /// Inverse of [`full_path`](Self::full_path): for every node `n`,
    /// `lookup(full_path(n)) == Some(n)`.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<NodeId> {
        self.path_index.get(path).copied()
    }

    /// Ancestors of a node, root-first, excluding the node itself.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut current = self.parents[id.0];
        while let Some(parent) = current {
            chain.push(parent);
            current = self.parents[parent.0];
        }
        chain.reverse();
        chain
    }

    /// All node identifiers in arena order (root first).
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Number of nodes, including the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the tree holds only the root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }
}
