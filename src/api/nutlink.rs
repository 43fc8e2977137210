//! Nut.link oracle endpoints

use crate::client::BlockfrostApi;
use crate::error::Result;
use crate::http::path_segment;
use crate::pagination::PaginationOptions;
use crate::types::Page;
use serde::de::DeserializeOwned;

impl BlockfrostApi {
    /// Metadata registered by an oracle address.
    pub async fn nutlink<T: DeserializeOwned>(&self, address: &str) -> Result<T> {
        self.get(format!("nutlink/{}", path_segment(address))).await
    }

    /// Tickers published by an oracle address.
    pub async fn nutlink_address_tickers<T: DeserializeOwned>(
        &self,
        address: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("nutlink/{}/tickers", path_segment(address)), pagination)
            .await
    }

    pub async fn nutlink_address_tickers_all<T: DeserializeOwned>(
        &self,
        address: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all(format!("nutlink/{}/tickers", path_segment(address)), options)
            .await
    }

    /// Records of a specific ticker published by an oracle address.
    pub async fn nutlink_address_ticker<T: DeserializeOwned>(
        &self,
        address: &str,
        ticker: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        let path = format!(
            "nutlink/{}/tickers/{}",
            path_segment(address),
            path_segment(ticker)
        );
        self.get_page(path, pagination).await
    }

    pub async fn nutlink_address_ticker_all<T: DeserializeOwned>(
        &self,
        address: &str,
        ticker: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        let path = format!(
            "nutlink/{}/tickers/{}",
            path_segment(address),
            path_segment(ticker)
        );
        self.get_all(path, options).await
    }

    /// Records of a specific ticker across all oracles.
    pub async fn nutlink_ticker<T: DeserializeOwned>(
        &self,
        ticker: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("nutlink/tickers/{}", path_segment(ticker)), pagination)
            .await
    }

    pub async fn nutlink_ticker_all<T: DeserializeOwned>(
        &self,
        ticker: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all(format!("nutlink/tickers/{}", path_segment(ticker)), options)
            .await
    }
}
