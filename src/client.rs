//! Blockfrost API client
//!
//! `BlockfrostApi` owns the shared transport and exposes every endpoint as
//! a method, grouped by resource in the `api` module. The generic `get`,
//! `get_page`, `get_all` and `paginate` methods reach any path the typed
//! adapters do not cover.

use crate::config::{ClientConfig, ValidatedConfig};
use crate::error::Result;
use crate::http::{fetch_json, HttpTransport, RequestSpec, Transport};
use crate::pagination::{self, PaginationOptions};
use crate::types::Page;
use futures::stream::BoxStream;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Client for the Cardano REST API
#[derive(Clone)]
pub struct BlockfrostApi {
    transport: Arc<dyn Transport>,
    config: Option<Arc<ValidatedConfig>>,
}

impl BlockfrostApi {
    /// Create a client from a configuration.
    ///
    /// Fails with a configuration error when the configuration is invalid.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let config = config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self {
            transport: Arc::new(transport),
            config: Some(Arc::new(config)),
        })
    }

    /// Create a client from `BLOCKFROST_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Create a client over an arbitrary transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            config: None,
        }
    }

    /// The transport all requests go through
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Validated configuration, absent for custom transports
    pub fn config(&self) -> Option<&ValidatedConfig> {
        self.config.as_deref()
    }

    /// Send an arbitrary request and decode the JSON response
    pub async fn send<T: DeserializeOwned>(&self, request: RequestSpec) -> Result<T> {
        fetch_json(self.transport.as_ref(), request).await
    }

    /// GET a single resource
    pub async fn get<T: DeserializeOwned>(&self, path: impl Into<String>) -> Result<T> {
        self.send(RequestSpec::get(path)).await
    }

    /// GET one page of a collection
    pub async fn get_page<T: DeserializeOwned>(
        &self,
        path: impl Into<String>,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.fetch_page(RequestSpec::get(path), pagination).await
    }

    /// GET every page of a collection
    pub async fn get_all<T: DeserializeOwned>(
        &self,
        path: impl Into<String>,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.fetch_all(RequestSpec::get(path), options).await
    }

    /// One page of the collection described by `resource`
    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        resource: RequestSpec,
        options: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        let options = PaginationOptions::or_default(options);
        pagination::fetch_page(self.transport.as_ref(), &resource, &options).await
    }

    /// Every page of the collection described by `resource`
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        resource: RequestSpec,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        let options = PaginationOptions::or_default(options);
        pagination::collect_all(self.transport.as_ref(), &resource, &options).await
    }

    /// Lazily walk every page of a collection
    pub fn paginate<T>(
        &self,
        path: impl Into<String>,
        options: Option<&PaginationOptions>,
    ) -> BoxStream<'static, Result<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        pagination::paginate(
            Arc::clone(&self.transport),
            RequestSpec::get(path),
            PaginationOptions::or_default(options),
        )
    }

    /// Root endpoint, points back to the documentation
    pub async fn root<T: DeserializeOwned>(&self) -> Result<T> {
        self.get("").await
    }
}

impl std::fmt::Debug for BlockfrostApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockfrostApi")
            .field("api_url", &self.config.as_ref().map(|c| c.api_url()))
            .finish_non_exhaustive()
    }
}
