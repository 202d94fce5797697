//! Route-to-node resolution.
//!
//! Walks the documentation tree from the root, consuming one normalized
//! segment per level. Resolution is synchronous and total given a
//! well-formed tree: it either matches a node or fails terminally with
//! [`ResolveError::NotFound`]. There is no retry or recovery semantic.

use ptr_tree::{DocTree, NodeId};

use crate::route::normalize;

/// Error raised when a route matches no node.
///
/// Terminal: surfaced to the UI as the not-found view, never retried.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// No node in the tree matches the requested route.
    #[error("No documentation node matches route '{route}'")]
    NotFound {
        /// The route as requested, before normalization.
        route: String,
    },
}

/// Successful route match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved {
    /// The matched node.
    pub node: NodeId,
    /// Ancestors of the matched node, root-first, excluding the node.
    pub ancestors: Vec<NodeId>,
    /// In-page scroll directive when the route carried an anchor segment.
    ///
    /// Handled by the rendering layer; the resolver only records it.
    pub anchor: Option<String>,
}

/// Resolve a route against the tree.
///
/// The empty route resolves to the root directory. A trailing segment that
/// names an anchor of the matched page resolves to that page with the
/// anchor recorded as a scroll directive; anchors are never resolution
/// targets of their own.
///
/// # Errors
///
/// Returns [`ResolveError::NotFound`] when no child matches at some level,
/// or when segments remain after reaching a node with no matching child.
pub fn resolve(tree: &DocTree, route: &str) -> Result<Resolved, ResolveError> {
    let segments = normalize(route);

    let mut current = tree.root();
    let mut ancestors = Vec::new();

    for (consumed, segment) in segments.iter().enumerate() {
        let child = tree
            .children(current)
            .iter()
            .copied()
            .find(|&id| tree.get(id).segment == *segment);

        match child {
            Some(child) => {
                ancestors.push(current);
                current = child;
            }
            None => {
                let node = tree.get(current);
                let last = consumed + 1 == segments.len();
                if last && node.is_page() && node.anchor(segment).is_some() {
                    return Ok(Resolved {
                        node: current,
                        ancestors,
                        anchor: Some(segment.clone()),
                    });
                }
                return Err(ResolveError::NotFound {
                    route: route.to_owned(),
                });
            }
        }
    }

    Ok(Resolved {
        node: current,
        ancestors,
        anchor: None,
    })
}
