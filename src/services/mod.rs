pub mod browser;
pub mod topology;

use crate::error::AppError;
use crate::models::Feature;
use async_trait::async_trait;

/// Source of the region outlines.
#[async_trait(?Send)]
pub trait TopologyService: Clone + PartialEq + 'static {
    async fn load_features(&self) -> Result<Vec<Feature>, AppError>;
}

#[derive(Clone, PartialEq)]
pub struct ProductionTopologyService {
    pub url: String,
}

impl ProductionTopologyService {
    pub fn from_settings() -> Self {
        Self {
            url: crate::config::settings().topology_url.clone(),
        }
    }
}

#[async_trait(?Send)]
impl TopologyService for ProductionTopologyService {
    async fn load_features(&self) -> Result<Vec<Feature>, AppError> {
        topology::fetch_features(&self.url).await
    }
}
