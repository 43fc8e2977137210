//! Blocks endpoints
//!
//! Blocks are identified either by hash or by height, passed as a string.

use crate::client::BlockfrostApi;
use crate::error::Result;
use crate::http::path_segment;
use crate::pagination::PaginationOptions;
use crate::types::Page;
use serde::de::DeserializeOwned;

impl BlockfrostApi {
    /// The latest block available to the backends.
    pub async fn blocks_latest<T: DeserializeOwned>(&self) -> Result<T> {
        self.get("blocks/latest").await
    }

    /// Transaction hashes of the latest block.
    pub async fn blocks_latest_txs<T: DeserializeOwned>(
        &self,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page("blocks/latest/txs", pagination).await
    }

    pub async fn blocks_latest_txs_all<T: DeserializeOwned>(
        &self,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all("blocks/latest/txs", options).await
    }

    /// Content of a specific block.
    pub async fn blocks<T: DeserializeOwned>(&self, hash_or_number: &str) -> Result<T> {
        self.get(format!("blocks/{}", path_segment(hash_or_number))).await
    }

    /// Blocks following a specific block.
    pub async fn blocks_next<T: DeserializeOwned>(
        &self,
        hash_or_number: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("blocks/{}/next", path_segment(hash_or_number)), pagination)
            .await
    }

    /// Blocks preceding a specific block.
    pub async fn blocks_previous<T: DeserializeOwned>(
        &self,
        hash_or_number: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("blocks/{}/previous", path_segment(hash_or_number)), pagination)
            .await
    }

    /// Transaction hashes within a specific block.
    pub async fn blocks_txs<T: DeserializeOwned>(
        &self,
        hash_or_number: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("blocks/{}/txs", path_segment(hash_or_number)), pagination)
            .await
    }

    pub async fn blocks_txs_all<T: DeserializeOwned>(
        &self,
        hash_or_number: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all(format!("blocks/{}/txs", path_segment(hash_or_number)), options)
            .await
    }

    /// Addresses affected in a specific block.
    pub async fn blocks_addresses<T: DeserializeOwned>(
        &self,
        hash_or_number: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("blocks/{}/addresses", path_segment(hash_or_number)), pagination)
            .await
    }

    pub async fn blocks_addresses_all<T: DeserializeOwned>(
        &self,
        hash_or_number: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all(format!("blocks/{}/addresses", path_segment(hash_or_number)), options)
            .await
    }

    /// Block in a specific slot.
    pub async fn blocks_slot<T: DeserializeOwned>(&self, slot: u64) -> Result<T> {
        self.get(format!("blocks/slot/{slot}")).await
    }

    /// Block in a specific slot of a specific epoch.
    pub async fn blocks_epoch_slot<T: DeserializeOwned>(&self, epoch: u32, slot: u64) -> Result<T> {
        self.get(format!("blocks/epoch/{epoch}/slot/{slot}")).await
    }
}
