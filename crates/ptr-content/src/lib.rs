//! Documentation content tree for the Panther docs site.
//!
//! This crate declares the site's navigation tree (directories, pages, and
//! in-page anchors), registers the renderable documentation bodies, and
//! assembles the ready-to-serve [`Site`].
//!
//! Pages without a registered body are placeholders: they resolve and
//! render as "not yet documented" stubs, and the sidebar marks them so the
//! chrome can style them accordingly.
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use ptr_config::Config;
//! use ptr_content::docs_site;
//!
//! let site = docs_site(&Config::default())?;
//!
//! let result = site.render("architecture/systemDataTypes/layers")?;
//! assert_eq!(result.title, "Layers | Panther docs");
//! # Ok(())
//! # }
//! ```

mod pages;
mod tree;

use ptr_config::Config;
use ptr_site::{Site, SiteConfig, SiteError};
use ptr_tree::TreeError;

pub use pages::component_registry;
pub use tree::docs_tree;

/// Error raised while assembling the documentation site.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The declared tree failed validation.
    #[error(transparent)]
    Tree(#[from] TreeError),
    /// The tree references a component the registry cannot resolve.
    #[error(transparent)]
    Site(#[from] SiteError),
}

/// Assemble the Panther documentation site.
///
/// Builds the declared tree, pairs it with the component registry, and
/// applies the site presentation settings from `config`.
///
/// # Errors
///
/// Returns [`ContentError`] when the declaration is inconsistent; with the
/// shipped tree and registry this only happens if an edit breaks them.
pub fn docs_site(config: &Config) -> Result<Site, ContentError> {
    let tree = docs_tree()?;
    let site_config = SiteConfig {
        title: config.site.title.clone(),
        title_template: config.site.title_template.clone(),
    };

    let site = Site::new(tree, component_registry(), site_config)?;

    tracing::debug!(
        nodes = site.tree().len(),
        title = %site.config().title,
        "Panther docs site assembled"
    );

    Ok(site)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docs_site_assembles_with_defaults() {
        let site = docs_site(&Config::default()).unwrap();

        assert!(site.tree().len() > 50);
        assert_eq!(site.config().title, "Panther docs");
    }
}
