//! Registry of renderable components.
//!
//! The documentation tree carries only component keys; the registry maps
//! them to externally supplied renderables. Registration happens once at
//! startup, before the site is assembled, and every key referenced by the
//! tree must be resolvable at that point.

use std::collections::HashMap;
use std::sync::Arc;

use ptr_tree::Anchor;

use crate::nav::Breadcrumb;

/// Context handed to a renderable when its node is rendered.
///
/// Everything a component may need arrives here explicitly; renderables
/// never reach into ambient global state. Components are free to ignore
/// any of it.
pub struct RenderContext<'a> {
    /// Display label of the resolved node.
    pub label: &'a str,
    /// Full routable path of the resolved node.
    pub path: &'a str,
    /// Anchors of the resolved node, in declaration order.
    pub anchors: &'a [Anchor],
    /// Ancestor breadcrumbs of the resolved node.
    pub breadcrumbs: &'a [Breadcrumb],
}

/// A thing that can be rendered for a documentation node.
///
/// The only contract the tree needs from collaborators; the core does not
/// interpret the component's internals.
pub trait Renderable: Send + Sync {
    /// Produce the HTML body for the resolved node.
    fn render(&self, ctx: &RenderContext<'_>) -> String;
}

/// Registry mapping component keys to renderables.
#[derive(Default)]
pub struct ComponentRegistry {
    components: HashMap<&'static str, Arc<dyn Renderable>>,
}

impl ComponentRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a renderable under a key.
    ///
    /// Re-registering a key keeps the latest renderable and logs the
    /// collision.
    pub fn register(&mut self, key: &'static str, component: Arc<dyn Renderable>) {
        if self.components.insert(key, component).is_some() {
            tracing::warn!(
                key = %key,
                "Component registration collision: keeping the latest registration"
            );
        }
    }

    /// Builder-style [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, key: &'static str, component: Arc<dyn Renderable>) -> Self {
        self.register(key, component);
        self
    }

    /// Look up a renderable by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Arc<dyn Renderable>> {
        self.components.get(key).map(Arc::clone)
    }

    /// True if a key is registered.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.components.contains_key(key)
    }

    /// Number of registered components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// True if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
