//! Assets endpoints

use crate::client::BlockfrostApi;
use crate::error::Result;
use crate::http::path_segment;
use crate::pagination::PaginationOptions;
use crate::types::Page;
use serde::de::DeserializeOwned;

impl BlockfrostApi {
    /// List of assets.
    pub async fn assets<T: DeserializeOwned>(
        &self,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page("assets", pagination).await
    }

    pub async fn assets_all<T: DeserializeOwned>(
        &self,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all("assets", options).await
    }

    /// Information about a specific asset.
    ///
    /// `asset` is the concatenation of the policy id and hex-encoded asset name.
    pub async fn assets_by_id<T: DeserializeOwned>(&self, asset: &str) -> Result<T> {
        self.get(format!("assets/{}", path_segment(asset))).await
    }

    /// Mint and burn history of a specific asset.
    pub async fn assets_history<T: DeserializeOwned>(
        &self,
        asset: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("assets/{}/history", path_segment(asset)), pagination)
            .await
    }

    pub async fn assets_history_all<T: DeserializeOwned>(
        &self,
        asset: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all(format!("assets/{}/history", path_segment(asset)), options).await
    }

    /// Transactions of a specific asset.
    pub async fn assets_transactions<T: DeserializeOwned>(
        &self,
        asset: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("assets/{}/transactions", path_segment(asset)), pagination)
            .await
    }

    pub async fn assets_transactions_all<T: DeserializeOwned>(
        &self,
        asset: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all(format!("assets/{}/transactions", path_segment(asset)), options)
            .await
    }

    /// Addresses holding a specific asset.
    pub async fn assets_addresses<T: DeserializeOwned>(
        &self,
        asset: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("assets/{}/addresses", path_segment(asset)), pagination)
            .await
    }

    pub async fn assets_addresses_all<T: DeserializeOwned>(
        &self,
        asset: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all(format!("assets/{}/addresses", path_segment(asset)), options)
            .await
    }

    /// Assets minted under a specific policy.
    pub async fn assets_policy_by_id<T: DeserializeOwned>(
        &self,
        policy_id: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("assets/policy/{}", path_segment(policy_id)), pagination)
            .await
    }

    pub async fn assets_policy_by_id_all<T: DeserializeOwned>(
        &self,
        policy_id: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all(format!("assets/policy/{}", path_segment(policy_id)), options)
            .await
    }
}
