//! Node types for the documentation tree.

/// Identifier of a node within a [`DocTree`](crate::DocTree) arena.
///
/// Stable for the lifetime of the tree. The root is always `NodeId` 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Arena index of this node.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Routable node variants.
///
/// Anchors are not a variant here: they are in-page scroll targets owned by
/// a [`Node`] of kind `Page` and are never independently routable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NodeKind {
    /// Composite node holding further directories and pages.
    Directory,
    /// Leaf node bound to renderable content; may own anchors.
    Page,
}

/// Reference to an externally registered renderable component.
///
/// The tree never interprets the component; it only carries the key under
/// which the renderable was registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ComponentRef(&'static str);

impl ComponentRef {
    /// Registration key of the referenced component.
    #[must_use]
    pub fn key(self) -> &'static str {
        self.0
    }
}

impl From<&'static str> for ComponentRef {
    fn from(key: &'static str) -> Self {
        Self(key)
    }
}

/// Named in-page scroll target.
///
/// Anchors carry no component and no children. Their segment is unique
/// within the owning page.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Anchor {
    /// Display label.
    pub label: String,
    /// URL fragment segment, unique within the owning page.
    pub segment: String,
}

/// A routable entry in the documentation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    /// Display label.
    pub label: String,
    /// URL path segment, unique among siblings. Empty only for the root.
    pub segment: String,
    /// Bound renderable, if the node is documented.
    ///
    /// `None` marks a placeholder node ("not yet documented"), which is a
    /// valid state rather than an error.
    pub component: Option<ComponentRef>,
    /// Directory or page.
    pub kind: NodeKind,
    /// In-page anchors. Non-empty only for pages.
    pub anchors: Vec<Anchor>,
}

impl Node {
    /// True if this node is a directory.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// True if this node is a page.
    #[must_use]
    pub fn is_page(&self) -> bool {
        self.kind == NodeKind::Page
    }

    /// Look up an anchor of this node by segment.
    #[must_use]
    pub fn anchor(&self, segment: &str) -> Option<&Anchor> {
        self.anchors.iter().find(|a| a.segment == segment)
    }
}
