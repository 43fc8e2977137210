//! Pools endpoints

use crate::client::BlockfrostApi;
use crate::error::Result;
use crate::http::path_segment;
use crate::pagination::PaginationOptions;
use crate::types::Page;
use serde::de::DeserializeOwned;

impl BlockfrostApi {
    /// Registered stake pool ids.
    pub async fn pools<T: DeserializeOwned>(
        &self,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page("pools", pagination).await
    }

    pub async fn pools_all<T: DeserializeOwned>(
        &self,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all("pools", options).await
    }

    /// Registered stake pools with additional information.
    pub async fn pools_extended<T: DeserializeOwned>(
        &self,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page("pools/extended", pagination).await
    }

    pub async fn pools_extended_all<T: DeserializeOwned>(
        &self,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all("pools/extended", options).await
    }

    /// Retired stake pools.
    pub async fn pools_retired<T: DeserializeOwned>(
        &self,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page("pools/retired", pagination).await
    }

    pub async fn pools_retired_all<T: DeserializeOwned>(
        &self,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all("pools/retired", options).await
    }

    /// Stake pools announced to retire in the future.
    pub async fn pools_retiring<T: DeserializeOwned>(
        &self,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page("pools/retiring", pagination).await
    }

    pub async fn pools_retiring_all<T: DeserializeOwned>(
        &self,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all("pools/retiring", options).await
    }

    /// Information about a specific stake pool.
    pub async fn pools_by_id<T: DeserializeOwned>(&self, pool_id: &str) -> Result<T> {
        self.get(format!("pools/{}", path_segment(pool_id))).await
    }

    /// History of a specific stake pool.
    pub async fn pools_by_id_history<T: DeserializeOwned>(
        &self,
        pool_id: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("pools/{}/history", path_segment(pool_id)), pagination)
            .await
    }

    pub async fn pools_by_id_history_all<T: DeserializeOwned>(
        &self,
        pool_id: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all(format!("pools/{}/history", path_segment(pool_id)), options).await
    }

    /// Metadata of a specific stake pool.
    pub async fn pools_metadata<T: DeserializeOwned>(&self, pool_id: &str) -> Result<T> {
        self.get(format!("pools/{}/metadata", path_segment(pool_id))).await
    }

    /// Relays of a specific stake pool.
    pub async fn pools_by_id_relays<T: DeserializeOwned>(&self, pool_id: &str) -> Result<T> {
        self.get(format!("pools/{}/relays", path_segment(pool_id))).await
    }

    /// Current delegators of a specific stake pool.
    pub async fn pools_by_id_delegators<T: DeserializeOwned>(
        &self,
        pool_id: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("pools/{}/delegators", path_segment(pool_id)), pagination)
            .await
    }

    pub async fn pools_by_id_delegators_all<T: DeserializeOwned>(
        &self,
        pool_id: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all(format!("pools/{}/delegators", path_segment(pool_id)), options)
            .await
    }

    /// Block hashes minted by a specific stake pool.
    pub async fn pools_by_id_blocks<T: DeserializeOwned>(
        &self,
        pool_id: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("pools/{}/blocks", path_segment(pool_id)), pagination)
            .await
    }

    pub async fn pools_by_id_blocks_all<T: DeserializeOwned>(
        &self,
        pool_id: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all(format!("pools/{}/blocks", path_segment(pool_id)), options).await
    }

    /// Certificate updates of a specific stake pool.
    pub async fn pools_by_id_updates<T: DeserializeOwned>(
        &self,
        pool_id: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("pools/{}/updates", path_segment(pool_id)), pagination)
            .await
    }

    pub async fn pools_by_id_updates_all<T: DeserializeOwned>(
        &self,
        pool_id: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all(format!("pools/{}/updates", path_segment(pool_id)), options).await
    }
}
