//! Declarative construction of the documentation tree.
//!
//! The builder mirrors the shape of the site's navigation literal: nested
//! [`DirectoryDef`] and [`PageDef`] values with [`AnchorDef`] leaves, composed
//! once at startup and turned into an immutable [`DocTree`] by
//! [`TreeBuilder::build`]. The type shapes make invalid nesting
//! unrepresentable: directories accept only directories and pages, pages
//! accept only anchors, anchors accept nothing.

use std::collections::HashSet;

use crate::node::{Anchor, ComponentRef, Node, NodeId, NodeKind};
use crate::tree::DocTree;

/// Error raised while validating the declared tree.
///
/// Construction is the only fallible point; once a tree builds, lookups and
/// traversal are total.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// Two siblings declare the same path segment.
    #[error("Duplicate path segment '{segment}' under '{parent_path}'")]
    DuplicateSegment {
        /// Full path of the parent directory (empty for the root).
        parent_path: String,
        /// The colliding segment.
        segment: String,
    },
    /// Two anchors of one page declare the same segment.
    #[error("Duplicate anchor '{segment}' in page '{page_path}'")]
    DuplicateAnchor {
        /// Full path of the owning page.
        page_path: String,
        /// The colliding anchor segment.
        segment: String,
    },
    /// A declared segment is empty or contains a path separator.
    #[error("Invalid path segment '{segment}'")]
    InvalidSegment {
        /// The offending segment.
        segment: String,
    },
}

/// Declared in-page anchor.
#[derive(Clone, Debug)]
pub struct AnchorDef {
    label: String,
    segment: String,
}

impl AnchorDef {
    /// Declare an anchor with a display label and fragment segment.
    #[must_use]
    pub fn new(label: impl Into<String>, segment: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            segment: segment.into(),
        }
    }
}

/// Declared page: routable leaf, optional component, anchor children.
#[derive(Clone, Debug)]
pub struct PageDef {
    label: String,
    segment: String,
    component: Option<ComponentRef>,
    anchors: Vec<AnchorDef>,
}

impl PageDef {
    /// Declare a page with a display label and path segment.
    #[must_use]
    pub fn new(label: impl Into<String>, segment: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            segment: segment.into(),
            component: None,
            anchors: Vec::new(),
        }
    }

    /// Bind a renderable component by registration key.
    #[must_use]
    pub fn component(mut self, key: &'static str) -> Self {
        self.component = Some(ComponentRef::from(key));
        self
    }

    /// Append an in-page anchor.
    #[must_use]
    pub fn anchor(mut self, label: impl Into<String>, segment: impl Into<String>) -> Self {
        self.anchors.push(AnchorDef::new(label, segment));
        self
    }
}

/// Declared directory: routable composite, optional landing component.
#[derive(Clone, Debug)]
pub struct DirectoryDef {
    label: String,
    segment: String,
    component: Option<ComponentRef>,
    children: Vec<ChildDef>,
}

impl DirectoryDef {
    /// Declare a directory with a display label and path segment.
    #[must_use]
    pub fn new(label: impl Into<String>, segment: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            segment: segment.into(),
            component: None,
            children: Vec::new(),
        }
    }

    /// Bind a landing-page component by registration key.
    #[must_use]
    pub fn component(mut self, key: &'static str) -> Self {
        self.component = Some(ComponentRef::from(key));
        self
    }

    /// Append a child directory or page.
    #[must_use]
    pub fn child(mut self, child: impl Into<ChildDef>) -> Self {
        self.children.push(child.into());
        self
    }
}

/// Valid child of a directory.
#[derive(Clone, Debug)]
pub enum ChildDef {
    /// Nested directory.
    Directory(DirectoryDef),
    /// Page leaf.
    Page(PageDef),
}

impl From<DirectoryDef> for ChildDef {
    fn from(def: DirectoryDef) -> Self {
        Self::Directory(def)
    }
}

impl From<PageDef> for ChildDef {
    fn from(def: PageDef) -> Self {
        Self::Page(def)
    }
}

/// Builder for the whole documentation tree.
///
/// Holds the root directory's label, landing component, and top-level
/// children. The root's path segment is synthesized as the empty string and
/// is not expressible through the builder.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    label: Option<String>,
    component: Option<ComponentRef>,
    children: Vec<ChildDef>,
}

impl TreeBuilder {
    /// Start an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root's display label (defaults to "Home").
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Bind the root landing component by registration key.
    #[must_use]
    pub fn component(mut self, key: &'static str) -> Self {
        self.component = Some(ComponentRef::from(key));
        self
    }

    /// Append a top-level directory or page.
    #[must_use]
    pub fn child(mut self, child: impl Into<ChildDef>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Validate the declaration and build the immutable [`DocTree`].
    ///
    /// # Errors
    ///
    /// Returns [`TreeError`] when a segment is invalid or siblings (or a
    /// page's anchors) collide.
    pub fn build(self) -> Result<DocTree, TreeError> {
        let mut arena = Arena::default();

        let root = arena.push(
            Node {
                label: self.label.unwrap_or_else(|| "Home".to_owned()),
                segment: String::new(),
                component: self.component,
                kind: NodeKind::Directory,
                anchors: Vec::new(),
            },
            None,
            String::new(),
        );

        insert_children(&mut arena, root, self.children)?;

        Ok(DocTree::new(
            arena.nodes,
            arena.children,
            arena.parents,
            arena.full_paths,
        ))
    }
}

/// Mutable arena state while the tree is being assembled.
#[derive(Default)]
struct Arena {
    nodes: Vec<Node>,
    children: Vec<Vec<NodeId>>,
    parents: Vec<Option<NodeId>>,
    full_paths: Vec<String>,
}

impl Arena {
    fn push(&mut self, node: Node, parent: Option<NodeId>, full_path: String) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.children.push(Vec::new());
        self.parents.push(parent);
        self.full_paths.push(full_path);
        if let Some(parent) = parent {
            self.children[parent.index()].push(id);
        }
        id
    }
}

/// Insert a directory's declared children, validating sibling uniqueness.
fn insert_children(
    arena: &mut Arena,
    parent: NodeId,
    defs: Vec<ChildDef>,
) -> Result<(), TreeError> {
    let parent_path = arena.full_paths[parent.index()].clone();
    let mut seen: HashSet<String> = HashSet::new();

    for def in defs {
        match def {
            ChildDef::Directory(dir) => {
                let path = join_segment(&parent_path, &dir.segment);
                check_sibling(&mut seen, &parent_path, &dir.segment)?;
                let id = arena.push(
                    Node {
                        label: dir.label,
                        segment: dir.segment,
                        component: dir.component,
                        kind: NodeKind::Directory,
                        anchors: Vec::new(),
                    },
                    Some(parent),
                    path,
                );
                insert_children(arena, id, dir.children)?;
            }
            ChildDef::Page(page) => {
                let path = join_segment(&parent_path, &page.segment);
                check_sibling(&mut seen, &parent_path, &page.segment)?;
                let anchors = collect_anchors(&path, page.anchors)?;
                arena.push(
                    Node {
                        label: page.label,
                        segment: page.segment,
                        component: page.component,
                        kind: NodeKind::Page,
                        anchors,
                    },
                    Some(parent),
                    path,
                );
            }
        }
    }

    Ok(())
}

/// Validate a page's anchors and convert them to node data.
fn collect_anchors(page_path: &str, defs: Vec<AnchorDef>) -> Result<Vec<Anchor>, TreeError> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut anchors = Vec::with_capacity(defs.len());

    for def in defs {
        validate_segment(&def.segment)?;
        if !seen.insert(def.segment.clone()) {
            return Err(TreeError::DuplicateAnchor {
                page_path: page_path.to_owned(),
                segment: def.segment,
            });
        }
        anchors.push(Anchor {
            label: def.label,
            segment: def.segment,
        });
    }

    Ok(anchors)
}

/// Validate a routable segment and record it in the sibling set.
fn check_sibling(
    seen: &mut HashSet<String>,
    parent_path: &str,
    segment: &str,
) -> Result<(), TreeError> {
    validate_segment(segment)?;
    if !seen.insert(segment.to_owned()) {
        return Err(TreeError::DuplicateSegment {
            parent_path: parent_path.to_owned(),
            segment: segment.to_owned(),
        });
    }
    Ok(())
}

/// A segment must be non-empty and must not contain a path separator.
fn validate_segment(segment: &str) -> Result<(), TreeError> {
    if segment.is_empty() || segment.contains('/') {
        return Err(TreeError::InvalidSegment {
            segment: segment.to_owned(),
        });
    }
    Ok(())
}

fn join_segment(parent_path: &str, segment: &str) -> String {
    if parent_path.is_empty() {
        segment.to_owned()
    } else {
        format!("{parent_path}/{segment}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_empty_tree() {
        let tree = TreeBuilder::new().build().unwrap();

        assert_eq!(tree.get(tree.root()).label, "Home");
        assert_eq!(tree.get(tree.root()).segment, "");
    }

    #[test]
    fn test_build_with_custom_root_label_and_component() {
        let tree = TreeBuilder::new()
            .label("Panther docs")
            .component("index")
            .build()
            .unwrap();

        let root = tree.get(tree.root());
        assert_eq!(root.label, "Panther docs");
        assert_eq!(root.component.unwrap().key(), "index");
    }

    #[test]
    fn test_build_nested_structure() {
        let tree = TreeBuilder::new()
            .child(
                DirectoryDef::new("Components", "components").child(
                    DirectoryDef::new("Maps", "maps")
                        .child(PageDef::new("Map", "map").component("map")),
                ),
            )
            .build()
            .unwrap();

        let map = tree.lookup("components/maps/map").unwrap();
        assert!(tree.get(map).is_page());
        assert_eq!(tree.get(map).component.unwrap().key(), "map");
    }

    #[test]
    fn test_page_anchors_preserved_in_order() {
        let tree = TreeBuilder::new()
            .child(
                PageDef::new("Buttons", "buttons")
                    .anchor("Props", "props")
                    .anchor("Levels", "levels")
                    .anchor("Sizes", "sizes"),
            )
            .build()
            .unwrap();

        let buttons = tree.lookup("buttons").unwrap();
        let segments: Vec<_> = tree
            .get(buttons)
            .anchors
            .iter()
            .map(|a| a.segment.as_str())
            .collect();

        assert_eq!(segments, ["props", "levels", "sizes"]);
    }

    #[test]
    fn test_duplicate_sibling_segment_rejected() {
        let result = TreeBuilder::new()
            .child(
                DirectoryDef::new("Controls", "controls")
                    .child(PageDef::new("Areas", "areas"))
                    .child(PageDef::new("Areas again", "areas")),
            )
            .build();

        match result {
            Err(TreeError::DuplicateSegment {
                parent_path,
                segment,
            }) => {
                assert_eq!(parent_path, "controls");
                assert_eq!(segment, "areas");
            }
            other => panic!("expected DuplicateSegment, got {other:?}"),
        }
    }

    #[test]
    fn test_same_segment_under_different_parents_allowed() {
        // The original site declares "controls" both under components and
        // under components/maps; only siblings must be distinct.
        let tree = TreeBuilder::new()
            .child(
                DirectoryDef::new("Components", "components")
                    .child(DirectoryDef::new("Maps", "maps").child(DirectoryDef::new(
                        "Controls",
                        "controls",
                    )))
                    .child(DirectoryDef::new("Controls", "controls")),
            )
            .build()
            .unwrap();

        assert!(tree.lookup("components/controls").is_some());
        assert!(tree.lookup("components/maps/controls").is_some());
    }

    #[test]
    fn test_duplicate_anchor_rejected() {
        let result = TreeBuilder::new()
            .child(
                PageDef::new("Style", "style")
                    .anchor("Fill styling", "fill")
                    .anchor("Fill again", "fill"),
            )
            .build();

        match result {
            Err(TreeError::DuplicateAnchor { page_path, segment }) => {
                assert_eq!(page_path, "style");
                assert_eq!(segment, "fill");
            }
            other => panic!("expected DuplicateAnchor, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_segment_rejected() {
        let result = TreeBuilder::new()
            .child(PageDef::new("Broken", ""))
            .build();

        assert!(matches!(result, Err(TreeError::InvalidSegment { .. })));
    }

    #[test]
    fn test_segment_with_separator_rejected() {
        let result = TreeBuilder::new()
            .child(DirectoryDef::new("Broken", "a/b"))
            .build();

        match result {
            Err(TreeError::InvalidSegment { segment }) => assert_eq!(segment, "a/b"),
            other => panic!("expected InvalidSegment, got {other:?}"),
        }
    }

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = TreeBuilder::new()
            .child(PageDef::new("A", "dup"))
            .child(PageDef::new("B", "dup"))
            .build()
            .unwrap_err();

        assert_eq!(err.to_string(), "Duplicate path segment 'dup' under ''");
    }
}
