use once_cell::sync::Lazy;

pub const DEFAULT_TOPOLOGY_URL: &str = "https://cdn.jsdelivr.net/npm/us-atlas@3/states-10m.json";
pub const TOPOLOGY_OBJECT: &str = "states";

const PUBLIC_URL_VAR: &str = "STATEMAP_PUBLIC_URL";
const TOPOLOGY_URL_VAR: &str = "STATEMAP_TOPOLOGY_URL";

const MAP_WIDTH: f64 = 800.0;
const MAP_HEIGHT: f64 = 600.0;
const MAP_SCALE: f64 = 1250.0;

#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    /// Prefix for static assets (logos, icons, PDFs). Empty when served
    /// from the site root.
    pub public_url: String,
    pub topology_url: String,
    pub width: f64,
    pub height: f64,
    pub scale: f64,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            public_url: String::new(),
            topology_url: DEFAULT_TOPOLOGY_URL.to_string(),
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            scale: MAP_SCALE,
        }
    }
}

impl MapSettings {
    /// The process environment first, falling back to values baked in at
    /// build time (the only source on web).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            std::env::var(key).ok().or_else(|| match key {
                PUBLIC_URL_VAR => option_env!("STATEMAP_PUBLIC_URL").map(str::to_string),
                TOPOLOGY_URL_VAR => option_env!("STATEMAP_TOPOLOGY_URL").map(str::to_string),
                _ => None,
            })
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(url) = lookup(PUBLIC_URL_VAR) {
            settings.public_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(url) = lookup(TOPOLOGY_URL_VAR).filter(|u| !u.trim().is_empty()) {
            settings.topology_url = url.trim().to_string();
        }
        settings
    }

    /// `public_url` joined with a root-relative asset path.
    pub fn asset_url(&self, path: &str) -> String {
        format!("{}{}", self.public_url, path)
    }
}

pub static SETTINGS: Lazy<MapSettings> = Lazy::new(|| {
    let settings = MapSettings::from_env();
    tracing::info!(
        "Map settings: public_url={:?} topology={}",
        settings.public_url,
        settings.topology_url
    );
    settings
});

pub fn settings() -> &'static MapSettings {
    &SETTINGS
}
