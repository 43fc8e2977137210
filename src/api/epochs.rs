//! Epochs endpoints

use crate::client::BlockfrostApi;
use crate::error::Result;
use crate::http::path_segment;
use crate::pagination::PaginationOptions;
use crate::types::Page;
use serde::de::DeserializeOwned;

impl BlockfrostApi {
    /// The current epoch.
    pub async fn epochs_latest<T: DeserializeOwned>(&self) -> Result<T> {
        self.get("epochs/latest").await
    }

    /// Protocol parameters of the current epoch.
    pub async fn epochs_latest_parameters<T: DeserializeOwned>(&self) -> Result<T> {
        self.get("epochs/latest/parameters").await
    }

    /// Content of a specific epoch.
    pub async fn epochs<T: DeserializeOwned>(&self, number: u32) -> Result<T> {
        self.get(format!("epochs/{number}")).await
    }

    /// Epochs following a specific epoch.
    pub async fn epochs_next<T: DeserializeOwned>(
        &self,
        number: u32,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("epochs/{number}/next"), pagination)
            .await
    }

    /// Epochs preceding a specific epoch.
    pub async fn epochs_previous<T: DeserializeOwned>(
        &self,
        number: u32,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("epochs/{number}/previous"), pagination)
            .await
    }

    /// Active stake distribution of a specific epoch.
    pub async fn epochs_stakes<T: DeserializeOwned>(
        &self,
        number: u32,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("epochs/{number}/stakes"), pagination)
            .await
    }

    pub async fn epochs_stakes_all<T: DeserializeOwned>(
        &self,
        number: u32,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all(format!("epochs/{number}/stakes"), options).await
    }

    /// Active stake distribution of a specific epoch for a specific pool.
    pub async fn epochs_stakes_by_pool<T: DeserializeOwned>(
        &self,
        number: u32,
        pool_id: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("epochs/{number}/stakes/{}", path_segment(pool_id)), pagination)
            .await
    }

    pub async fn epochs_stakes_by_pool_all<T: DeserializeOwned>(
        &self,
        number: u32,
        pool_id: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all(format!("epochs/{number}/stakes/{}", path_segment(pool_id)), options)
            .await
    }

    /// Block hashes of a specific epoch.
    pub async fn epochs_blocks<T: DeserializeOwned>(
        &self,
        number: u32,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("epochs/{number}/blocks"), pagination)
            .await
    }

    pub async fn epochs_blocks_all<T: DeserializeOwned>(
        &self,
        number: u32,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all(format!("epochs/{number}/blocks"), options).await
    }

    /// Block hashes of a specific epoch minted by a specific pool.
    pub async fn epochs_blocks_by_pool<T: DeserializeOwned>(
        &self,
        number: u32,
        pool_id: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("epochs/{number}/blocks/{}", path_segment(pool_id)), pagination)
            .await
    }

    pub async fn epochs_blocks_by_pool_all<T: DeserializeOwned>(
        &self,
        number: u32,
        pool_id: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all(format!("epochs/{number}/blocks/{}", path_segment(pool_id)), options)
            .await
    }

    /// Protocol parameters of a specific epoch.
    pub async fn epochs_parameters<T: DeserializeOwned>(&self, number: u32) -> Result<T> {
        self.get(format!("epochs/{number}/parameters")).await
    }
}
