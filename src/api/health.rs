//! Health and usage metrics endpoints

use crate::client::BlockfrostApi;
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Backend health as reported by `health`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub is_healthy: bool,
}

impl BlockfrostApi {
    /// Backend health status
    pub async fn health(&self) -> Result<Health> {
        self.get("health").await
    }

    /// Current backend time, UNIX milliseconds
    pub async fn health_clock<T: DeserializeOwned>(&self) -> Result<T> {
        self.get("health/clock").await
    }

    /// Usage metrics of the project over the last 30 days
    pub async fn metrics<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        self.get("metrics").await
    }

    /// Usage metrics per endpoint over the last 30 days
    pub async fn metrics_endpoints<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        self.get("metrics/endpoints").await
    }
}
