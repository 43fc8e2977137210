//! Addresses endpoints

use crate::client::BlockfrostApi;
use crate::error::Result;
use crate::http::{path_segment, RequestSpec, Transport};
use crate::pagination::{self, PaginationOptions};
use crate::types::Page;
use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Block range filter for address transactions.
///
/// Bounds are `<block height>` or `<block height>:<tx index>`, inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockRange {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl BlockRange {
    fn apply(&self, spec: RequestSpec) -> RequestSpec {
        spec.query_opt("from", self.from.as_deref())
            .query_opt("to", self.to.as_deref())
    }
}

/// Answers a 404 with an empty page.
///
/// The UTxO endpoints report an address without UTxOs as not found. Applied
/// per page, so a 404 after the first page ends the walk and keeps the items
/// already fetched.
struct EmptyOnNotFound<'a>(&'a dyn Transport);

#[async_trait]
impl<'a> Transport for EmptyOnNotFound<'a> {
    async fn send(&self, request: RequestSpec) -> Result<Bytes> {
        match self.0.send(request).await {
            Err(e) if e.is_not_found() => {
                debug!("Not found, treated as an empty page: {}", e);
                Ok(Bytes::from_static(b"[]"))
            }
            other => other,
        }
    }
}

impl BlockfrostApi {
    /// Information about a specific address.
    pub async fn addresses<T: DeserializeOwned>(&self, address: &str) -> Result<T> {
        self.get(format!("addresses/{}", path_segment(address))).await
    }

    /// Information about a specific address, including multi-asset details.
    pub async fn addresses_extended<T: DeserializeOwned>(&self, address: &str) -> Result<T> {
        self.get(format!("addresses/{}/extended", path_segment(address))).await
    }

    /// Summed details about all transactions of an address.
    pub async fn addresses_total<T: DeserializeOwned>(&self, address: &str) -> Result<T> {
        self.get(format!("addresses/{}/total", path_segment(address))).await
    }

    /// Transactions of an address, optionally restricted to a block range.
    pub async fn addresses_transactions<T: DeserializeOwned>(
        &self,
        address: &str,
        pagination: Option<&PaginationOptions>,
        range: Option<&BlockRange>,
    ) -> Result<Page<T>> {
        let resource =
            RequestSpec::get(format!("addresses/{}/transactions", path_segment(address)));
        let resource = match range {
            Some(range) => range.apply(resource),
            None => resource,
        };
        self.fetch_page(resource, pagination).await
    }

    pub async fn addresses_transactions_all<T: DeserializeOwned>(
        &self,
        address: &str,
        options: Option<&PaginationOptions>,
        range: Option<&BlockRange>,
    ) -> Result<Vec<T>> {
        let resource =
            RequestSpec::get(format!("addresses/{}/transactions", path_segment(address)));
        let resource = match range {
            Some(range) => range.apply(resource),
            None => resource,
        };
        self.fetch_all(resource, options).await
    }

    /// Current UTxOs of an address.
    ///
    /// An address that has never been used returns an empty list rather
    /// than a not-found error.
    pub async fn addresses_utxos<T: DeserializeOwned>(
        &self,
        address: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        let resource = RequestSpec::get(format!("addresses/{}/utxos", path_segment(address)));
        self.utxo_page(&resource, pagination).await
    }

    pub async fn addresses_utxos_all<T: DeserializeOwned>(
        &self,
        address: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        let resource = RequestSpec::get(format!("addresses/{}/utxos", path_segment(address)));
        self.utxo_all(&resource, options).await
    }

    /// UTxOs of an address containing a specific asset.
    pub async fn addresses_utxos_asset<T: DeserializeOwned>(
        &self,
        address: &str,
        asset: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        let resource = RequestSpec::get(format!(
            "addresses/{}/utxos/{}",
            path_segment(address),
            path_segment(asset)
        ));
        self.utxo_page(&resource, pagination).await
    }

    pub async fn addresses_utxos_asset_all<T: DeserializeOwned>(
        &self,
        address: &str,
        asset: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        let resource = RequestSpec::get(format!(
            "addresses/{}/utxos/{}",
            path_segment(address),
            path_segment(asset)
        ));
        self.utxo_all(&resource, options).await
    }

    async fn utxo_page<T: DeserializeOwned>(
        &self,
        resource: &RequestSpec,
        options: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        let transport = EmptyOnNotFound(self.transport().as_ref());
        let options = PaginationOptions::or_default(options);
        pagination::fetch_page(&transport, resource, &options).await
    }

    async fn utxo_all<T: DeserializeOwned>(
        &self,
        resource: &RequestSpec,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        let transport = EmptyOnNotFound(self.transport().as_ref());
        let options = PaginationOptions::or_default(options);
        pagination::collect_all(&transport, resource, &options).await
    }
}
