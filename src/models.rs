pub use statemap_common::{
    CanvasFit, CityMarker, ContentView, DragGesture, Eligibility, Feature, HoverState,
    ImageMarker, LabelPlacement, LoadError, LonLat, Phase, RegionRecord, Selection, TextMarker,
    University, Viewport,
};

/// A topology feature ready to draw: projected outline plus the data the
/// label layer needs.
#[derive(Clone, PartialEq, Debug)]
pub struct MapFeature {
    pub id: String,
    pub key: String,
    pub path: String,
    pub label: Option<LabelPlacement>,
}
