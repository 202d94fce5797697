//! Documentation tree model for Panther docs.
//!
//! This crate provides:
//! - [`DocTree`]: Immutable arena of documentation nodes with path lookups
//! - [`TreeBuilder`]: Declarative construction of the tree at startup
//!
//! The tree is built once, validated, and never mutated afterwards. All
//! accessors take `&self`; concurrent readers need no locking.
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), ptr_tree::TreeError> {
//! use ptr_tree::{DirectoryDef, PageDef, TreeBuilder};
//!
//! let tree = TreeBuilder::new()
//!     .child(
//!         DirectoryDef::new("Architecture", "architecture")
//!             .child(PageDef::new("Layers", "layers").component("layers")),
//!     )
//!     .build()?;
//!
//! let layers = tree.lookup("architecture/layers").unwrap();
//! assert_eq!(tree.full_path(layers), "architecture/layers");
//! # Ok(())
//! # }
//! ```

mod builder;
mod node;
mod tree;

pub use builder::{AnchorDef, ChildDef, DirectoryDef, PageDef, TreeBuilder, TreeError};
pub use node::{Anchor, ComponentRef, Node, NodeId, NodeKind};
pub use tree::DocTree;
