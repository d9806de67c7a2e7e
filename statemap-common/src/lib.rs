use serde::{Deserialize, Serialize};

pub mod content;
pub mod eligibility;
pub mod geo;
pub mod labels;
pub mod paths;
pub mod projection;
pub mod selection;
pub mod topology;
pub mod viewport;

pub use content::{ContentView, LoadError};
pub use eligibility::{Eligibility, CONTENT_STATES};
pub use labels::{label_offset, place_label, LabelPlacement, LABEL_OFFSETS};
pub use paths::{content_path, content_viewer_src, normalize_asset_path};
pub use projection::AlbersUsa;
pub use selection::{HoverState, Phase, Selection};
pub use topology::{Feature, Geometry, Topology, TopologyError};
pub use viewport::{CanvasFit, DragGesture, Viewport};

/// A `[longitude, latitude]` pair in degrees.
pub type LonLat = [f64; 2];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RegionRecord {
    /// Two-letter postal code, e.g. `AL`.
    pub id: String,
    /// FIPS code matching the topology feature id, e.g. `01`.
    pub val: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct University {
    pub name: String,
    pub lon: f64,
    pub lat: f64,
    #[serde(default = "default_colour")]
    pub colour: String,
    #[serde(default)]
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CityMarker {
    pub name: String,
    pub lon: f64,
    pub lat: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextMarker {
    pub name: String,
    pub lon: f64,
    pub lat: f64,
}

/// Shared shape of the logo and icon fixtures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageMarker {
    pub logo: String,
    pub lon: f64,
    pub lat: f64,
}

fn default_colour() -> String {
    "black".to_string()
}

impl University {
    pub fn coordinates(&self) -> LonLat {
        [self.lon, self.lat]
    }

    pub fn lines(&self) -> Vec<&str> {
        self.name.split('\n').collect()
    }
}

impl CityMarker {
    pub fn coordinates(&self) -> LonLat {
        [self.lon, self.lat]
    }
}

impl TextMarker {
    pub fn coordinates(&self) -> LonLat {
        [self.lon, self.lat]
    }

    pub fn lines(&self) -> Vec<&str> {
        self.name.split('\n').collect()
    }
}

impl ImageMarker {
    pub fn coordinates(&self) -> LonLat {
        [self.lon, self.lat]
    }
}
