//! Navigation projections for UI presentation.
//!
//! The sidebar projection and breadcrumbs are read-only views over the
//! tree; both preserve declaration order exactly as authored.

use ptr_tree::{DocTree, NodeId};
use serde::Serialize;

use crate::resolver::resolve;
use crate::route::normalize;

/// Sidebar navigation item with children for the UI tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarItem {
    /// Display label.
    pub label: String,
    /// Link target path.
    pub path: String,
    /// True if the node binds a renderable component.
    ///
    /// False marks a placeholder section, which the chrome styles as
    /// not-yet-documented rather than hiding.
    pub has_content: bool,
    /// Child navigation items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SidebarItem>,
}

/// Breadcrumb navigation item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    /// Display label.
    pub label: String,
    /// Link target path (empty string for the root).
    pub path: String,
}

/// Build the sidebar navigation structure.
///
/// Projects the root's subtree into renderable items: directories and pages
/// in declaration order, anchors excluded (they are in-page concerns).
/// Placeholder nodes are projected with `has_content == false`, never
/// filtered out.
#[must_use]
pub fn sidebar_projection(tree: &DocTree) -> Vec<SidebarItem> {
    tree.children(tree.root())
        .iter()
        .map(|&id| build_item(tree, id))
        .collect()
}

fn build_item(tree: &DocTree, id: NodeId) -> SidebarItem {
    let node = tree.get(id);
    SidebarItem {
        label: node.label.clone(),
        path: tree.full_path(id).to_owned(),
        has_content: node.component.is_some(),
        children: tree
            .children(id)
            .iter()
            .map(|&child| build_item(tree, child))
            .collect(),
    }
}

/// Build breadcrumbs for a route.
///
/// Returns breadcrumbs starting with "Home" for non-root routes, followed
/// by ancestor nodes. The matched node itself is not included. Unknown
/// routes yield the minimal Home crumb so the UI keeps some navigation
/// even on the not-found view.
#[must_use]
pub fn breadcrumbs(tree: &DocTree, route: &str) -> Vec<Breadcrumb> {
    if normalize(route).is_empty() {
        return Vec::new();
    }

    match resolve(tree, route) {
        Ok(resolved) => ancestor_breadcrumbs(tree, resolved.node, &resolved.ancestors),
        Err(_) => vec![home_crumb()],
    }
}

/// Breadcrumbs for an already-resolved node.
///
/// Home represents the root, so the root is excluded from the ancestor
/// crumbs; the node itself is excluded as well.
pub(crate) fn ancestor_breadcrumbs(
    tree: &DocTree,
    node: NodeId,
    ancestors: &[NodeId],
) -> Vec<Breadcrumb> {
    if node == tree.root() {
        return Vec::new();
    }

    let mut crumbs = vec![home_crumb()];
    crumbs.extend(
        ancestors
            .iter()
            .filter(|&&id| id != tree.root())
            .map(|&id| Breadcrumb {
                label: tree.get(id).label.clone(),
                path: tree.full_path(id).to_owned(),
            }),
    );
    crumbs
}

fn home_crumb() -> Breadcrumb {
    Breadcrumb {
        label: "Home".to_owned(),
        path: String::new(),
    }
}
