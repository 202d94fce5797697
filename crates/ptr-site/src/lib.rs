//! Route resolution and navigation projection for Panther docs.
//!
//! This crate provides:
//! - [`Site`]: Unified facade over the documentation tree, component
//!   registry, and rendering
//! - [`resolve`]: Route-to-node resolution with anchor scroll directives
//! - [`sidebar_projection`]: Navigation tree building for UI presentation
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//! use ptr_site::{ComponentRegistry, RenderContext, Renderable, Site, SiteConfig};
//! use ptr_tree::{DirectoryDef, PageDef, TreeBuilder};
//!
//! struct LayersDoc;
//!
//! impl Renderable for LayersDoc {
//!     fn render(&self, _ctx: &RenderContext<'_>) -> String {
//!         "<h1>Layers</h1>".to_owned()
//!     }
//! }
//!
//! let tree = TreeBuilder::new()
//!     .child(
//!         DirectoryDef::new("Architecture", "architecture")
//!             .child(PageDef::new("Layers", "layers").component("layers")),
//!     )
//!     .build()?;
//!
//! let mut registry = ComponentRegistry::new();
//! registry.register("layers", Arc::new(LayersDoc));
//!
//! let site = Site::new(tree, registry, SiteConfig::default())?;
//!
//! // Navigation for the UI chrome
//! let sidebar = site.sidebar();
//!
//! // Render a page
//! let result = site.render("architecture/layers")?;
//! assert_eq!(result.title, "Layers | Panther docs");
//! # Ok(())
//! # }
//! ```

mod nav;
mod registry;
mod resolver;
mod route;
mod site;
mod util;

pub use nav::{Breadcrumb, SidebarItem, breadcrumbs, sidebar_projection};
pub use registry::{ComponentRegistry, RenderContext, Renderable};
pub use resolver::{ResolveError, Resolved, resolve};
pub use route::normalize;
pub use site::{PageContent, PageRenderResult, ResolvedView, Site, SiteConfig, SiteError};
pub use util::escape_html;
