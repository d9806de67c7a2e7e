use crate::config::{MapSettings, TOPOLOGY_OBJECT};
use crate::data::Fixtures;
use crate::error::AppError;
use crate::models::{Feature, MapFeature};
use statemap_common::{geo, place_label, AlbersUsa, Topology};
use tracing::{info, warn};

pub async fn fetch_features(url: &str) -> Result<Vec<Feature>, AppError> {
    let res = reqwest::get(url).await?;

    if !res.status().is_success() {
        return Err(AppError::Http {
            status: res.status(),
            url: url.to_string(),
        });
    }

    let topology: Topology = res.json().await?;
    let features = topology.features(TOPOLOGY_OBJECT)?;
    info!("Loaded {} region features from {}", features.len(), url);
    Ok(features)
}

pub fn projection_for(settings: &MapSettings) -> AlbersUsa {
    AlbersUsa::for_canvas(settings.width, settings.height, settings.scale)
}

/// Project every feature and decide its label. Features whose outline falls
/// outside the projection are kept so their ids still resolve; they just
/// draw nothing.
pub fn build_map_features(
    features: &[Feature],
    fixtures: &Fixtures,
    projection: &AlbersUsa,
) -> Vec<MapFeature> {
    features
        .iter()
        .enumerate()
        .map(|(i, feature)| {
            let record = fixtures.region_by_val(&feature.id);
            if record.is_none() {
                warn!(
                    "No region record for feature {:?} ({})",
                    feature.id,
                    feature.name.as_deref().unwrap_or("unnamed")
                );
            }
            let label = geo::centroid(&feature.geometry).and_then(|c| place_label(record, c));

            MapFeature {
                id: feature.id.clone(),
                key: format!("geo-{}-{}", i, feature.id),
                path: projection.path(&feature.geometry),
                label,
            }
        })
        .collect()
}
