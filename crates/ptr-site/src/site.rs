//! Unified site facade.
//!
//! [`Site`] pairs the immutable documentation tree with the component
//! registry and produces everything the UI chrome consumes: resolved
//! views, rendered pages, the sidebar, and breadcrumbs.
//!
//! # Thread Safety
//!
//! The tree and registry are immutable after construction, so `Site` is
//! freely shareable across threads with no locking. Resolution completes
//! synchronously; rapid navigation never races because there is no shared
//! mutable state.

use std::fmt;
use std::sync::Arc;

use ptr_tree::{Anchor, DocTree, NodeId};
use serde::Serialize;

use crate::nav::{self, Breadcrumb, SidebarItem};
use crate::registry::{ComponentRegistry, RenderContext, Renderable};
use crate::resolver::{self, ResolveError};
use crate::util::escape_html;

/// Configuration for [`Site`].
#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Site title, used verbatim for the root page.
    pub title: String,
    /// Page title template; `%s` is replaced by the page label.
    pub title_template: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Panther docs".to_owned(),
            title_template: "%s | Panther docs".to_owned(),
        }
    }
}

/// Error raised while assembling a site.
///
/// Component resolvability is checked up front so that navigation never
/// discovers a dangling reference at render time.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// A node references a component key the registry cannot resolve.
    #[error("Node '{path}' references unregistered component '{component}'")]
    UnknownComponent {
        /// Full path of the offending node.
        path: String,
        /// The unresolvable component key.
        component: &'static str,
    },
}

/// Content bound to a resolved node.
pub enum PageContent {
    /// The node's registered renderable.
    Component(Arc<dyn Renderable>),
    /// No component bound: the documented "not yet documented" state.
    Placeholder,
}

impl PageContent {
    /// True for the placeholder state.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

impl fmt::Debug for PageContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Component(_) => f.write_str("Component(..)"),
            Self::Placeholder => f.write_str("Placeholder"),
        }
    }
}

/// Result of resolving a route, with everything needed to render it.
#[derive(Debug)]
pub struct ResolvedView {
    /// The matched node.
    pub node: NodeId,
    /// Ancestors of the matched node, root-first, excluding the node.
    pub ancestors: Vec<NodeId>,
    /// In-page scroll directive from an anchor-suffixed route.
    pub anchor: Option<String>,
    /// The node's renderable content, or the placeholder marker.
    pub content: PageContent,
}

/// Result of rendering a page.
#[derive(Clone, Debug, Serialize)]
pub struct PageRenderResult {
    /// Rendered HTML content.
    pub html: String,
    /// Document title produced through the configured title template.
    pub title: String,
    /// True if the page rendered as a placeholder.
    pub placeholder: bool,
    /// In-page scroll directive from an anchor-suffixed route.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    /// Anchors of the rendered page, in declaration order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub anchors: Vec<Anchor>,
    /// Breadcrumb navigation items.
    pub breadcrumbs: Vec<Breadcrumb>,
}

/// Documentation site: tree, components, and rendering.
pub struct Site {
    tree: DocTree,
    registry: ComponentRegistry,
    config: SiteConfig,
}

impl std::fmt::Debug for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Site")
            .field("nodes", &self.tree.len())
            .field("components", &self.registry.len())
            .field("config", &self.config)
            .finish()
    }
}

impl Site {
    /// Assemble a site from a built tree and a populated registry.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::UnknownComponent`] if any node references a
    /// component key the registry cannot resolve. Every bound component
    /// must be resolvable before first navigation.
    pub fn new(
        tree: DocTree,
        registry: ComponentRegistry,
        config: SiteConfig,
    ) -> Result<Self, SiteError> {
        for id in tree.nodes() {
            if let Some(component) = tree.get(id).component
                && !registry.contains(component.key())
            {
                return Err(SiteError::UnknownComponent {
                    path: tree.full_path(id).to_owned(),
                    component: component.key(),
                });
            }
        }

        tracing::debug!(
            nodes = tree.len(),
            components = registry.len(),
            "Site assembled"
        );

        Ok(Self {
            tree,
            registry,
            config,
        })
    }

    /// The underlying documentation tree.
    #[must_use]
    pub fn tree(&self) -> &DocTree {
        &self.tree
    }

    /// The site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Resolve a route to a renderable view.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] for routes matching no node.
    pub fn resolve(&self, route: &str) -> Result<ResolvedView, ResolveError> {
        let resolved = resolver::resolve(&self.tree, route)?;
        let node = self.tree.get(resolved.node);

        let content = node
            .component
            .and_then(|component| self.registry.get(component.key()))
            .map_or(PageContent::Placeholder, PageContent::Component);

        tracing::debug!(
            route = %route,
            path = %self.tree.full_path(resolved.node),
            placeholder = content.is_placeholder(),
            "Resolved route"
        );

        Ok(ResolvedView {
            node: resolved.node,
            ancestors: resolved.ancestors,
            anchor: resolved.anchor,
            content,
        })
    }

    /// Build the sidebar navigation structure.
    #[must_use]
    pub fn sidebar(&self) -> Vec<SidebarItem> {
        nav::sidebar_projection(&self.tree)
    }

    /// Build breadcrumbs for a route.
    #[must_use]
    pub fn breadcrumbs(&self, route: &str) -> Vec<Breadcrumb> {
        nav::breadcrumbs(&self.tree, route)
    }

    /// Resolve and render a page.
    ///
    /// Placeholder nodes render as a stub document rather than failing;
    /// only unmatched routes error.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] for routes matching no node.
    pub fn render(&self, route: &str) -> Result<PageRenderResult, ResolveError> {
        let view = self.resolve(route)?;
        let node = self.tree.get(view.node);
        let path = self.tree.full_path(view.node);
        let breadcrumbs = nav::ancestor_breadcrumbs(&self.tree, view.node, &view.ancestors);

        let ctx = RenderContext {
            label: &node.label,
            path,
            anchors: &node.anchors,
            breadcrumbs: &breadcrumbs,
        };

        let (html, placeholder) = match &view.content {
            PageContent::Component(component) => (component.render(&ctx), false),
            PageContent::Placeholder => (placeholder_html(&node.label), true),
        };

        Ok(PageRenderResult {
            html,
            title: self.page_title(view.node),
            placeholder,
            anchor: view.anchor,
            anchors: node.anchors.clone(),
            breadcrumbs,
        })
    }

    /// Document title for a node: the plain site title for the root, the
    /// template with the node's label everywhere else.
    fn page_title(&self, id: NodeId) -> String {
        if id == self.tree.root() {
            self.config.title.clone()
        } else {
            self.config
                .title_template
                .replace("%s", &self.tree.get(id).label)
        }
    }
}

fn placeholder_html(label: &str) -> String {
    format!(
        "<h1>{}</h1>\n<p class=\"ptr-docs-placeholder\">This section is not documented yet.</p>\n",
        escape_html(label)
    )
}
