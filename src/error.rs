use reqwest::StatusCode;
use statemap_common::TopologyError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} fetching {url}")]
    Http { status: StatusCode, url: String },

    #[error("Topology error: {0}")]
    Topology(#[from] TopologyError),

    #[error("Fixture {name} is invalid: {source}")]
    Fixture {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Content probe failed: {0}")]
    Probe(String),
}

impl AppError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::Network(_) => "Check your internet connection.".to_string(),
            AppError::Http { status, .. } => match *status {
                StatusCode::NOT_FOUND => "The map data could not be found.".to_string(),
                StatusCode::TOO_MANY_REQUESTS => "Too many requests. Please try again later.".to_string(),
                _ => format!("Server error ({})", status),
            },
            AppError::Topology(_) => "The map data is damaged.".to_string(),
            _ => self.to_string(),
        }
    }
}
