//! Scripts endpoints

use crate::client::BlockfrostApi;
use crate::error::Result;
use crate::http::path_segment;
use crate::pagination::PaginationOptions;
use crate::types::Page;
use serde::de::DeserializeOwned;

impl BlockfrostApi {
    /// List of scripts.
    pub async fn scripts<T: DeserializeOwned>(
        &self,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page("scripts", pagination).await
    }

    pub async fn scripts_all<T: DeserializeOwned>(
        &self,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all("scripts", options).await
    }

    /// Information about a specific script.
    pub async fn scripts_by_hash<T: DeserializeOwned>(&self, script_hash: &str) -> Result<T> {
        self.get(format!("scripts/{}", path_segment(script_hash))).await
    }

    /// JSON representation of a timelock script.
    pub async fn scripts_json<T: DeserializeOwned>(&self, script_hash: &str) -> Result<T> {
        self.get(format!("scripts/{}/json", path_segment(script_hash))).await
    }

    /// CBOR representation of a Plutus script.
    pub async fn scripts_cbor<T: DeserializeOwned>(&self, script_hash: &str) -> Result<T> {
        self.get(format!("scripts/{}/cbor", path_segment(script_hash))).await
    }

    /// Redeemers of a specific script.
    pub async fn scripts_redeemers<T: DeserializeOwned>(
        &self,
        script_hash: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("scripts/{}/redeemers", path_segment(script_hash)), pagination)
            .await
    }

    pub async fn scripts_redeemers_all<T: DeserializeOwned>(
        &self,
        script_hash: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all(format!("scripts/{}/redeemers", path_segment(script_hash)), options)
            .await
    }

    /// Value of a datum by its hash.
    pub async fn scripts_datum<T: DeserializeOwned>(&self, datum_hash: &str) -> Result<T> {
        self.get(format!("scripts/datum/{}", path_segment(datum_hash))).await
    }

    /// CBOR serialized datum by its hash.
    pub async fn scripts_datum_cbor<T: DeserializeOwned>(&self, datum_hash: &str) -> Result<T> {
        self.get(format!("scripts/datum/{}/cbor", path_segment(datum_hash))).await
    }
}
