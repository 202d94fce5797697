//! The Panther docs navigation tree.
//!
//! Structure, labels, segments, and anchor lists are declared here exactly
//! as the site presents them. Pages that bind a component key render the
//! registered documentation body; the rest are placeholders awaiting
//! content.

use ptr_tree::{DirectoryDef, DocTree, PageDef, TreeBuilder, TreeError};

use crate::pages::keys;

/// Build the documentation tree.
///
/// # Errors
///
/// Returns [`TreeError`] if the declaration is inconsistent (duplicate
/// sibling segments or anchors); the shipped declaration builds cleanly.
pub fn docs_tree() -> Result<DocTree, TreeError> {
    TreeBuilder::new()
        .label("Panther docs")
        .component(keys::INDEX)
        .child(architecture())
        .child(design())
        .child(components())
        .child(code())
        .child(PageDef::new("Panther 2", "panther2"))
        .build()
}

fn architecture() -> DirectoryDef {
    DirectoryDef::new("Architecture", "architecture")
        .child(PageDef::new("Applications", "applications"))
        .child(
            DirectoryDef::new("Store data types", "storeDataTypes")
                .child(
                    DirectoryDef::new("Common data types", "common").child(
                        PageDef::new("Style", "style")
                            .component(keys::STYLE)
                            .anchor("Without style", "without-style")
                            .anchor("Fill styling", "fill")
                            .anchor("Outline styling", "outline")
                            .anchor("Hovered & selected", "hovered-selected")
                            .anchor("Attribute values", "values")
                            .anchor("Intervals", "intervals")
                            .anchor("Scales", "scales")
                            .anchor("Transformations", "transformations")
                            .anchor("Symbols", "symbols")
                            .anchor("Diagrams", "diagrams"),
                    ),
                )
                .child(PageDef::new("Specific data types", "specific")),
        )
        .child(
            DirectoryDef::new("System data types", "systemDataTypes")
                .child(PageDef::new("Layers", "layers").component(keys::LAYERS))
                .child(PageDef::new("Map view", "mapView").component(keys::MAP_VIEW))
                .child(
                    PageDef::new("Map view limits", "mapViewLimits")
                        .component(keys::MAP_VIEW_LIMITS),
                ),
        )
}

fn design() -> DirectoryDef {
    DirectoryDef::new("Design", "design")
        .component(keys::DESIGN)
        .child(PageDef::new("Typography", "typography").component(keys::TYPOGRAPHY))
        .child(PageDef::new("Colours", "colours"))
}

fn components() -> DirectoryDef {
    DirectoryDef::new("Components", "components")
        .child(maps())
        .child(visualizations())
        .child(atoms())
        .child(interface_elements())
        .child(controls())
        .child(common_features())
}

fn maps() -> DirectoryDef {
    DirectoryDef::new("Maps", "maps")
        .child(PageDef::new("Map", "map").component(keys::MAP))
        .child(PageDef::new("Map set", "mapSet").component(keys::MAP_SET))
        .child(PageDef::new("Map wrapper", "mapWrapper").component(keys::MAP_WRAPPER))
        .child(
            DirectoryDef::new("Presentational", "presentational")
                .component(keys::MAP_PRESENTATIONAL)
                .child(
                    DirectoryDef::new("WebWorldWind", "webWorldWind")
                        .component(keys::WORLD_WIND_MAP)
                        .child(
                            PageDef::new("Vector layer", "vectorLayer")
                                .component(keys::WORLD_WIND_VECTOR_LAYER),
                        ),
                )
                .child(
                    DirectoryDef::new("ReactLeafletMap", "reactLeaflet")
                        .component(keys::REACT_LEAFLET_MAP)
                        .child(
                            PageDef::new("Vector layer", "vectorLayer")
                                .component(keys::LEAFLET_VECTOR_LAYER)
                                .anchor("Props", "props")
                                .anchor("Polygons", "polygons")
                                .anchor("Points", "points")
                                .anchor("Lines", "lines")
                                .anchor("Mixed", "mixed"),
                        )
                        .child(
                            PageDef::new("Diagram layer", "diagramLayer")
                                .component(keys::LEAFLET_DIAGRAM_LAYER),
                        )
                        .child(
                            PageDef::new("Indexed Vector layer", "indexedVectorLayer")
                                .component(keys::LEAFLET_INDEXED_VECTOR_LAYER),
                        ),
                ),
        )
        .child(
            DirectoryDef::new("Controls", "controls").child(
                PageDef::new("Map controls", "mapControls").component(keys::MAP_CONTROLS),
            ),
        )
}

fn visualizations() -> DirectoryDef {
    DirectoryDef::new("Visualizations", "visualizations")
        .child(
            DirectoryDef::new("Cartesian charts", "cartesianCharts")
                .component(keys::CARTESIAN_CHARTS)
                .child(
                    PageDef::new("Line chart", "lineChart")
                        .component(keys::LINE_CHART)
                        .anchor("Props", "props")
                        .anchor("Data structure", "dataStructure")
                        .anchor("Basic settings", "basicSettings")
                        .anchor("Lines without points", "withoutPoints")
                        .anchor("Graying and aggregation", "graying"),
                )
                .child(
                    PageDef::new("Column chart", "columnChart")
                        .component(keys::COLUMN_CHART)
                        .anchor("Props", "props")
                        .anchor("Data structure", "dataStructure")
                        .anchor("Basic settings", "basicSettings")
                        .anchor("Serial data handling", "serialData")
                        .anchor("Custom bar colors", "barColors")
                        .anchor("Aggregation", "aggregation")
                        .anchor("Diverging", "diverging")
                        .anchor("Stacked", "stacked"),
                )
                .child(
                    PageDef::new("Scatter chart", "scatterChart")
                        .component(keys::SCATTER_CHART)
                        .anchor("Props", "props")
                        .anchor("Data structure", "dataStructure")
                        .anchor("Basic settings", "basicSettings")
                        .anchor("Point radius", "pointRadius")
                        .anchor("Serial data handling", "serialData")
                        .anchor("Custom symbols", "symbols"),
                ),
        )
        .child(
            PageDef::new("Aster chart", "asterChart")
                .component(keys::ASTER_CHART)
                .anchor("Props", "props")
                .anchor("Data structure", "dataStructure")
                .anchor("Basic settings", "basicSettings")
                .anchor("Relative values", "relativeValues")
                .anchor("Dimensions", "dimensions")
                .anchor("Forced min & max", "forceMinMax")
                .anchor("Grid", "grid")
                .anchor("Radials & legend", "radials")
                .anchor("Custom hover value", "customHover"),
        )
        // Anchors to be declared once the Sankey page gains sections.
        .child(PageDef::new("Sankey chart", "sankesChart").component(keys::SANKEY_CHART))
}

fn atoms() -> DirectoryDef {
    DirectoryDef::new("Atoms", "atoms")
        .child(
            PageDef::new("Buttons", "buttons")
                .component(keys::BUTTONS)
                .anchor("Props", "props")
                .anchor("Levels", "levels")
                .anchor("Sizes", "sizes"),
        )
        .child(PageDef::new("Forms", "forms").component(keys::FORMS))
        .child(PageDef::new("ItemSelect", "itemSelect").component(keys::ITEM_SELECT))
        .child(PageDef::new("Icon", "icon"))
        .child(PageDef::new("Loader", "loader"))
        .child(PageDef::new("EditableText", "editableText"))
        .child(PageDef::new("Utilities ???", "utilities"))
}

fn interface_elements() -> DirectoryDef {
    DirectoryDef::new("Interface elements", "interfaceElements")
        .child(
            PageDef::new("Panther select", "pantherSelect")
                .anchor("Usage", "usage")
                .anchor("Extending", "extending"),
        )
        .child(PageDef::new("Adjustable columns", "adjustableColumns"))
        .child(PageDef::new("ScreenAnimator", "screenAnimator"))
}

fn controls() -> DirectoryDef {
    DirectoryDef::new("Controls", "controls")
        .child(
            DirectoryDef::new("Timeline", "timeline")
                .child(PageDef::new("Map Timeline", "mapTimeline")),
        )
        .child(PageDef::new("Areas", "areas"))
        .child(PageDef::new("Layers", "layers"))
        .child(PageDef::new("User & login overlay", "user"))
        .child(PageDef::new("Share ???", "share"))
}

fn common_features() -> DirectoryDef {
    DirectoryDef::new("Common features", "commonFeatures")
        .child(PageDef::new("AppContainer", "appContainer"))
        .child(PageDef::new("HoverHandler", "hoverHandler").component(keys::HOVER_HANDLER))
        .child(PageDef::new("WindowsContainer", "windowsContainer"))
}

fn code() -> DirectoryDef {
    DirectoryDef::new("Code", "code")
        .child(PageDef::new("Using data in applications ??", "usingData"))
        .child(PageDef::new("API", "api"))
}
