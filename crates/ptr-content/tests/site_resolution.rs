//! End-to-end resolution and navigation over the real documentation tree.

use ptr_config::Config;
use ptr_content::{component_registry, docs_site, docs_tree};
use ptr_site::{ResolveError, Site, SiteConfig, resolve};
use pretty_assertions::assert_eq;

fn site() -> Site {
    docs_site(&Config::default()).unwrap()
}

#[test]
fn resolve_round_trips_every_node() {
    let site = site();
    let tree = site.tree();

    for id in tree.nodes() {
        let view = site.resolve(tree.full_path(id)).unwrap();
        assert_eq!(view.node, id, "round trip failed for {}", tree.full_path(id));
        assert_eq!(view.ancestors, tree.ancestors(id));
        assert!(view.anchor.is_none());
    }
}

#[test]
fn sibling_segments_are_pairwise_distinct() {
    let tree = docs_tree().unwrap();

    for id in tree.nodes() {
        let mut seen = std::collections::HashSet::new();
        for &child in tree.children(id) {
            assert!(
                seen.insert(tree.get(child).segment.as_str()),
                "duplicate segment under {}",
                tree.full_path(id)
            );
        }
    }
}

#[test]
fn empty_route_resolves_to_root_landing() {
    let site = site();

    let view = site.resolve("").unwrap();

    assert_eq!(view.node, site.tree().root());
    assert!(view.ancestors.is_empty());
    assert!(!view.content.is_placeholder());
}

#[test]
fn unknown_route_is_not_found() {
    let site = site();

    let err = site.resolve("nonexistent").unwrap_err();

    assert!(matches!(err, ResolveError::NotFound { .. }));
}

#[test]
fn layers_page_path_and_ancestors() {
    let site = site();
    let tree = site.tree();

    let layers = tree.lookup("architecture/systemDataTypes/layers").unwrap();
    assert_eq!(tree.full_path(layers), "architecture/systemDataTypes/layers");

    let view = site.resolve("architecture/systemDataTypes/layers").unwrap();
    let labels: Vec<_> = view
        .ancestors
        .iter()
        .map(|&id| tree.get(id).label.as_str())
        .collect();

    assert_eq!(labels, ["Panther docs", "Architecture", "System data types"]);
}

#[test]
fn sidebar_preserves_authored_order() {
    let site = site();

    let sidebar = site.sidebar();

    let top: Vec<_> = sidebar.iter().map(|item| item.label.as_str()).collect();
    assert_eq!(
        top,
        ["Architecture", "Design", "Components", "Code", "Panther 2"]
    );

    // "Colours" follows "Typography" as authored, against alphabetic order.
    let design = &sidebar[1];
    let children: Vec<_> = design.children.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(children, ["Typography", "Colours"]);
}

#[test]
fn placeholder_pages_resolve_with_has_content_false() {
    let site = site();

    let view = site.resolve("components/atoms/icon").unwrap();
    assert!(view.content.is_placeholder());

    let sidebar = site.sidebar();
    let components = sidebar.iter().find(|i| i.label == "Components").unwrap();
    let atoms = components
        .children
        .iter()
        .find(|i| i.label == "Atoms")
        .unwrap();
    let icon = atoms.children.iter().find(|i| i.label == "Icon").unwrap();

    assert!(!icon.has_content);

    let buttons = atoms.children.iter().find(|i| i.label == "Buttons").unwrap();
    assert!(buttons.has_content);
}

#[test]
fn anchor_route_resolves_to_enclosing_page() {
    let site = site();

    let view = site
        .resolve("components/visualizations/cartesianCharts/lineChart/props")
        .unwrap();

    assert_eq!(
        site.tree().full_path(view.node),
        "components/visualizations/cartesianCharts/lineChart"
    );
    assert_eq!(view.anchor.as_deref(), Some("props"));
}

#[test]
fn unknown_anchor_segment_is_not_found() {
    let site = site();

    let err = site
        .resolve("components/visualizations/cartesianCharts/lineChart/bogus")
        .unwrap_err();

    assert!(matches!(err, ResolveError::NotFound { .. }));
}

#[test]
fn trailing_slash_is_insignificant() {
    let site = site();

    let view = site.resolve("design/typography/").unwrap();

    assert_eq!(site.tree().full_path(view.node), "design/typography");
}

#[test]
fn render_produces_templated_title_and_sections() {
    let site = site();

    let result = site
        .render("components/visualizations/cartesianCharts/lineChart")
        .unwrap();

    assert_eq!(result.title, "Line chart | Panther docs");
    assert!(!result.placeholder);
    assert!(result.html.contains("<h2 id=\"props\">Props</h2>"));
    assert!(result.html.contains("<h2 id=\"withoutPoints\">Lines without points</h2>"));

    let crumbs: Vec<_> = result
        .breadcrumbs
        .iter()
        .map(|c| c.label.as_str())
        .collect();
    assert_eq!(
        crumbs,
        ["Home", "Components", "Visualizations", "Cartesian charts"]
    );
}

#[test]
fn render_placeholder_page_is_marked() {
    let site = site();

    let result = site.render("panther2").unwrap();

    assert!(result.placeholder);
    assert!(result.html.contains("not documented yet"));
    assert_eq!(result.title, "Panther 2 | Panther docs");
}

#[test]
fn render_root_uses_site_title() {
    let site = site();

    let result = site.render("").unwrap();

    assert_eq!(result.title, "Panther docs");
    assert!(result.breadcrumbs.is_empty());
}

#[test]
fn custom_config_flows_into_titles() {
    let mut config = Config::default();
    config.site.title = "Panther".to_owned();
    config.site.title_template = "%s :: Panther".to_owned();

    let site = docs_site(&config).unwrap();
    let result = site.render("design").unwrap();

    assert_eq!(result.title, "Design :: Panther");
}

#[test]
fn raw_tree_resolution_matches_site_resolution() {
    let tree = docs_tree().unwrap();

    let resolved = resolve(&tree, "components/maps/presentational/reactLeaflet").unwrap();

    assert_eq!(
        tree.full_path(resolved.node),
        "components/maps/presentational/reactLeaflet"
    );
}

#[test]
fn every_bound_component_is_registered() {
    let tree = docs_tree().unwrap();
    let registry = component_registry();

    for id in tree.nodes() {
        if let Some(component) = tree.get(id).component {
            assert!(
                registry.contains(component.key()),
                "unregistered component {} at {}",
                component.key(),
                tree.full_path(id)
            );
        }
    }

    // The pairing is what Site::new enforces; assembling must succeed.
    assert!(Site::new(tree, registry, SiteConfig::default()).is_ok());
}

#[test]
fn sidebar_serializes_for_the_chrome() {
    let site = site();

    let json = serde_json::to_value(site.sidebar()).unwrap();

    assert_eq!(json[0]["label"], "Architecture");
    assert_eq!(json[0]["path"], "architecture");
    assert!(json[0]["children"].is_array());
}
