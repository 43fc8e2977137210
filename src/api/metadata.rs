//! Transaction metadata endpoints

use crate::client::BlockfrostApi;
use crate::error::Result;
use crate::http::path_segment;
use crate::pagination::PaginationOptions;
use crate::types::Page;
use serde::de::DeserializeOwned;

impl BlockfrostApi {
    /// Metadata labels in use.
    pub async fn metadata_txs_labels<T: DeserializeOwned>(
        &self,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page("metadata/txs/labels", pagination).await
    }

    pub async fn metadata_txs_labels_all<T: DeserializeOwned>(
        &self,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all("metadata/txs/labels", options).await
    }

    /// Transaction metadata under a specific label, as JSON.
    pub async fn metadata_txs_label<T: DeserializeOwned>(
        &self,
        label: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("metadata/txs/labels/{}", path_segment(label)), pagination)
            .await
    }

    pub async fn metadata_txs_label_all<T: DeserializeOwned>(
        &self,
        label: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all(format!("metadata/txs/labels/{}", path_segment(label)), options)
            .await
    }

    /// Transaction metadata under a specific label, as CBOR.
    pub async fn metadata_txs_label_cbor<T: DeserializeOwned>(
        &self,
        label: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("metadata/txs/labels/{}/cbor", path_segment(label)), pagination)
            .await
    }

    pub async fn metadata_txs_label_cbor_all<T: DeserializeOwned>(
        &self,
        label: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all(format!("metadata/txs/labels/{}/cbor", path_segment(label)), options)
            .await
    }
}
