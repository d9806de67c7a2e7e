use crate::error::AppError;
use crate::models::{CityMarker, ImageMarker, RegionRecord, TextMarker, University};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use tracing::{error, info};

const ALL_STATES: &str = include_str!("../assets/data/allstates.json");
const UNIVERSITIES: &str = include_str!("../assets/data/universities.json");
const TEXT: &str = include_str!("../assets/data/text.json");
const CITIES: &str = include_str!("../assets/data/cities.json");
const LOGOS: &str = include_str!("../assets/data/logos.json");
const ICONS: &str = include_str!("../assets/data/icons.json");

/// Every static fixture the map draws from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fixtures {
    pub regions: Vec<RegionRecord>,
    pub universities: Vec<University>,
    pub text: Vec<TextMarker>,
    pub cities: Vec<CityMarker>,
    pub logos: Vec<ImageMarker>,
    pub icons: Vec<ImageMarker>,
}

pub fn parse_fixture<T: DeserializeOwned>(name: &'static str, json: &str) -> Result<Vec<T>, AppError> {
    serde_json::from_str(json).map_err(|source| AppError::Fixture { name, source })
}

/// A broken fixture is logged and treated as empty so the rest of the map
/// still renders.
fn load_or_empty<T: DeserializeOwned>(name: &'static str, json: &str) -> Vec<T> {
    parse_fixture(name, json).unwrap_or_else(|e| {
        error!("{}", e);
        Vec::new()
    })
}

impl Fixtures {
    pub fn load() -> Self {
        let fixtures = Self {
            regions: load_or_empty("allstates", ALL_STATES),
            universities: load_or_empty("universities", UNIVERSITIES),
            text: load_or_empty("text", TEXT),
            cities: load_or_empty("cities", CITIES),
            logos: load_or_empty("logos", LOGOS),
            icons: load_or_empty("icons", ICONS),
        };
        info!(
            "Loaded fixtures: {} regions, {} universities, {} cities, {} labels, {} logos, {} icons",
            fixtures.regions.len(),
            fixtures.universities.len(),
            fixtures.cities.len(),
            fixtures.text.len(),
            fixtures.logos.len(),
            fixtures.icons.len()
        );
        fixtures
    }

    pub fn region_by_val(&self, val: &str) -> Option<&RegionRecord> {
        self.regions.iter().find(|r| r.val == val)
    }
}

pub static FIXTURES: Lazy<Fixtures> = Lazy::new(Fixtures::load);

pub fn fixtures() -> &'static Fixtures {
    &FIXTURES
}
