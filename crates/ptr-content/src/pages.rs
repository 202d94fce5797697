//! Documentation bodies and their registry.
//!
//! Two body shapes cover the documented pages: [`StaticDoc`] for pages
//! whose content is a fixed fragment (data-contract pages with example
//! payloads), and [`SectionedDoc`] for component galleries whose sections
//! mirror the page's declared anchors.

use std::sync::Arc;

use ptr_site::{ComponentRegistry, RenderContext, Renderable, escape_html};

/// Component registration keys referenced by the tree declaration.
pub(crate) mod keys {
    pub(crate) const INDEX: &str = "index";
    pub(crate) const STYLE: &str = "style";
    pub(crate) const LAYERS: &str = "layers";
    pub(crate) const MAP_VIEW: &str = "map-view";
    pub(crate) const MAP_VIEW_LIMITS: &str = "map-view-limits";
    pub(crate) const DESIGN: &str = "design";
    pub(crate) const TYPOGRAPHY: &str = "typography";
    pub(crate) const MAP: &str = "map";
    pub(crate) const MAP_SET: &str = "map-set";
    pub(crate) const MAP_WRAPPER: &str = "map-wrapper";
    pub(crate) const MAP_PRESENTATIONAL: &str = "map-presentational";
    pub(crate) const WORLD_WIND_MAP: &str = "world-wind-map";
    pub(crate) const WORLD_WIND_VECTOR_LAYER: &str = "world-wind-vector-layer";
    pub(crate) const REACT_LEAFLET_MAP: &str = "react-leaflet-map";
    pub(crate) const LEAFLET_VECTOR_LAYER: &str = "leaflet-vector-layer";
    pub(crate) const LEAFLET_DIAGRAM_LAYER: &str = "leaflet-diagram-layer";
    pub(crate) const LEAFLET_INDEXED_VECTOR_LAYER: &str = "leaflet-indexed-vector-layer";
    pub(crate) const MAP_CONTROLS: &str = "map-controls";
    pub(crate) const CARTESIAN_CHARTS: &str = "cartesian-charts";
    pub(crate) const LINE_CHART: &str = "line-chart";
    pub(crate) const COLUMN_CHART: &str = "column-chart";
    pub(crate) const SCATTER_CHART: &str = "scatter-chart";
    pub(crate) const ASTER_CHART: &str = "aster-chart";
    pub(crate) const SANKEY_CHART: &str = "sankey-chart";
    pub(crate) const BUTTONS: &str = "buttons";
    pub(crate) const FORMS: &str = "forms";
    pub(crate) const ITEM_SELECT: &str = "item-select";
    pub(crate) const HOVER_HANDLER: &str = "hover-handler";
}

/// Landing page for the docs root.
struct Landing;

impl Renderable for Landing {
    fn render(&self, ctx: &RenderContext<'_>) -> String {
        format!(
            "<h1>{}</h1>\n<p>Documentation and example gallery for the Panther \
             mapping and data-visualization components: maps, charts, form \
             atoms, and the data contracts they consume.</p>\n",
            escape_html(ctx.label)
        )
    }
}

/// Documentation body with a fixed HTML fragment under the page heading.
struct StaticDoc {
    body: &'static str,
}

impl Renderable for StaticDoc {
    fn render(&self, ctx: &RenderContext<'_>) -> String {
        format!("<h1>{}</h1>\n{}", escape_html(ctx.label), self.body)
    }
}

/// Documentation body whose sections mirror the page's declared anchors.
///
/// Each anchor becomes an `h2` with the anchor segment as its element id,
/// which is what the in-page scroll directive targets.
struct SectionedDoc {
    intro: &'static str,
}

impl Renderable for SectionedDoc {
    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let mut html = format!(
            "<h1>{}</h1>\n<p>{}</p>\n",
            escape_html(ctx.label),
            self.intro
        );
        for anchor in ctx.anchors {
            html.push_str(&format!(
                "<h2 id=\"{}\">{}</h2>\n",
                escape_html(&anchor.segment),
                escape_html(&anchor.label)
            ));
        }
        html
    }
}

const LAYERS_BODY: &str = r#"<p>Layer definitions supplied to presentational map components. The full format contains everything needed to display the final layer on the map; connected components may also accept it directly.</p>
<h2 id="wms">WMS</h2>
<pre><code class="language-javascript">{
    key: "example_wms_layer",
    type: "wms",
    opacity: 0.7,

    options: {
        url: "http://panther.gisat.cz/geoserver/geonode/wms?",
        params: {
            layers: "",
            styles: ""
        }
    }
}</code></pre>
<h2 id="wmts">WMTS</h2>
<pre><code class="language-javascript">{
    key: "example_wmts_layer",
    type: "wmts",
    opacity: 0.7,

    options: {
        urls: ["http://panther.gisat.cz/geoserver/gwc/service/wmts"]
    }
}</code></pre>
<h2 id="vector">Vector</h2>
<pre><code class="language-javascript">{
    key: "example_vector_layer",
    type: "vector",
    opacity: 0.7,

    options: {
        features: [],
        style: {},
        selectable: true
    }
}</code></pre>
"#;

const MAP_VIEW_BODY: &str = r#"<p>The map view describes what a map component looks at, independent of the rendering engine. Engine wrappers translate it to their native camera or viewport model.</p>
<pre><code class="language-javascript">{
    center: {
        lat: 50.35,
        lon: 15.79
    },
    boxRange: 100000,
    tilt: 0,
    roll: 0,
    heading: 0
}</code></pre>
"#;

const MAP_VIEW_LIMITS_BODY: &str = r#"<p>Optional bounds on the map view. A map component clamps incoming view changes to these limits instead of rejecting them.</p>
<pre><code class="language-javascript">{
    boxRangeRange: [1000, 1000000]
}</code></pre>
"#;

/// Build the registry of documentation bodies.
///
/// Every component key referenced by the tree declaration is registered
/// here; site assembly verifies the pairing.
#[must_use]
pub fn component_registry() -> ComponentRegistry {
    ComponentRegistry::new()
        .with(keys::INDEX, Arc::new(Landing))
        .with(
            keys::STYLE,
            Arc::new(SectionedDoc {
                intro: "Style definitions describe how vector features are drawn: \
                        fills, outlines, symbols, and rules driven by attribute \
                        values, intervals, and scales.",
            }),
        )
        .with(keys::LAYERS, Arc::new(StaticDoc { body: LAYERS_BODY }))
        .with(keys::MAP_VIEW, Arc::new(StaticDoc { body: MAP_VIEW_BODY }))
        .with(
            keys::MAP_VIEW_LIMITS,
            Arc::new(StaticDoc {
                body: MAP_VIEW_LIMITS_BODY,
            }),
        )
        .with(
            keys::DESIGN,
            Arc::new(StaticDoc {
                body: "<p>Visual language of the Panther applications: typography \
                       and colours.</p>\n",
            }),
        )
        .with(
            keys::TYPOGRAPHY,
            Arc::new(StaticDoc {
                body: "<p>Heading scale, body text, and code samples as used across \
                       the documentation and applications.</p>\n",
            }),
        )
        .with(
            keys::MAP,
            Arc::new(StaticDoc {
                body: "<p>The single-map component. Pass a layer list and a map \
                       view; the active engine wrapper does the drawing.</p>\n",
            }),
        )
        .with(
            keys::MAP_SET,
            Arc::new(StaticDoc {
                body: "<p>A synchronized set of maps sharing a view. Individual \
                       maps may unlock specific view attributes.</p>\n",
            }),
        )
        .with(
            keys::MAP_WRAPPER,
            Arc::new(StaticDoc {
                body: "<p>Chrome around a map: title, attribution, and tools \
                       placement.</p>\n",
            }),
        )
        .with(
            keys::MAP_PRESENTATIONAL,
            Arc::new(StaticDoc {
                body: "<p>Engine-specific presentational map components. Each \
                       accepts the same layer and view contracts.</p>\n",
            }),
        )
        .with(
            keys::WORLD_WIND_MAP,
            Arc::new(StaticDoc {
                body: "<p>WebWorldWind globe wrapper.</p>\n",
            }),
        )
        .with(
            keys::WORLD_WIND_VECTOR_LAYER,
            Arc::new(StaticDoc {
                body: "<p>Vector layer rendering on the WebWorldWind globe.</p>\n",
            }),
        )
        .with(
            keys::REACT_LEAFLET_MAP,
            Arc::new(StaticDoc {
                body: "<p>Leaflet map wrapper.</p>\n",
            }),
        )
        .with(
            keys::LEAFLET_VECTOR_LAYER,
            Arc::new(SectionedDoc {
                intro: "Vector layer rendering in the Leaflet wrapper for polygon, \
                        point, and line features.",
            }),
        )
        .with(
            keys::LEAFLET_DIAGRAM_LAYER,
            Arc::new(StaticDoc {
                body: "<p>Diagram layer: proportional symbols drawn over polygon \
                       centroids.</p>\n",
            }),
        )
        .with(
            keys::LEAFLET_INDEXED_VECTOR_LAYER,
            Arc::new(StaticDoc {
                body: "<p>Vector layer backed by a spatial index for large feature \
                       collections.</p>\n",
            }),
        )
        .with(
            keys::MAP_CONTROLS,
            Arc::new(StaticDoc {
                body: "<p>Zoom and view controls for map components.</p>\n",
            }),
        )
        .with(
            keys::CARTESIAN_CHARTS,
            Arc::new(StaticDoc {
                body: "<p>Shared contracts of the cartesian charts: data series \
                       shape, axes options, and sizing.</p>\n",
            }),
        )
        .with(
            keys::LINE_CHART,
            Arc::new(SectionedDoc {
                intro: "A line chart displays information as a series of data \
                        points connected by straight line segments. Use it to show \
                        progress of an attribute in time.",
            }),
        )
        .with(
            keys::COLUMN_CHART,
            Arc::new(SectionedDoc {
                intro: "A column chart compares values of one attribute across \
                        areas or categories.",
            }),
        )
        .with(
            keys::SCATTER_CHART,
            Arc::new(SectionedDoc {
                intro: "A scatter chart plots two attributes against each other to \
                        expose correlation.",
            }),
        )
        .with(
            keys::ASTER_CHART,
            Arc::new(SectionedDoc {
                intro: "An aster chart arranges value slices radially around a \
                        center summary.",
            }),
        )
        .with(
            keys::SANKEY_CHART,
            Arc::new(StaticDoc {
                body: "<p>A sankey chart visualizes flows between categories.</p>\n",
            }),
        )
        .with(
            keys::BUTTONS,
            Arc::new(SectionedDoc {
                intro: "Button atom in its levels and sizes.",
            }),
        )
        .with(
            keys::FORMS,
            Arc::new(StaticDoc {
                body: "<p>Form atoms: inputs, selects, and field layout.</p>\n",
            }),
        )
        .with(
            keys::ITEM_SELECT,
            Arc::new(StaticDoc {
                body: "<p>ItemSelect atom for picking one item from a list.</p>\n",
            }),
        )
        .with(
            keys::HOVER_HANDLER,
            Arc::new(StaticDoc {
                body: "<p>HoverHandler propagates hover state between charts and \
                       maps showing the same data.</p>\n",
            }),
        )
}
