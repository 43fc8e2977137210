//! IPFS client
//!
//! Talks to the IPFS API through the same transport and error translation
//! as the Cardano client. Only the base URL differs.

use crate::config::{ClientConfig, ValidatedConfig};
use crate::error::Result;
use crate::http::{fetch_json, path_segment, FormPart, HttpTransport, RequestSpec, Transport};
use crate::pagination::{self, PaginationOptions};
use crate::types::Page;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Multipart field the file is uploaded under
const FILE_FIELD: &str = "file";

/// Client for the IPFS API
#[derive(Clone)]
pub struct BlockfrostIpfs {
    transport: Arc<dyn Transport>,
}

impl BlockfrostIpfs {
    /// Create a client from a configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let config = config.validate()?;
        Self::from_validated(&config)
    }

    /// Create a client from an already validated configuration
    pub fn from_validated(config: &ValidatedConfig) -> Result<Self> {
        Ok(Self {
            transport: Arc::new(HttpTransport::ipfs(config)?),
        })
    }

    /// Create a client over an arbitrary transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Add a file to IPFS.
    ///
    /// The object still has to be pinned to survive garbage collection.
    pub async fn add<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> Result<T> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map_or_else(|| FILE_FIELD.to_string(), |n| n.to_string_lossy().into_owned());
        self.add_bytes(name, data).await
    }

    /// Add in-memory content to IPFS under the given file name
    pub async fn add_bytes<T: DeserializeOwned>(
        &self,
        file_name: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) -> Result<T> {
        let part = FormPart::file(FILE_FIELD, file_name, data.into());
        debug!(
            "Adding {:?} to IPFS ({} bytes)",
            part.file_name,
            part.data.len()
        );
        let request = RequestSpec::post("ipfs/add").multipart(vec![part]);
        fetch_json(self.transport.as_ref(), request).await
    }

    /// Retrieve an object through the IPFS gateway, returned undecoded
    pub async fn gateway(&self, path: &str) -> Result<Bytes> {
        let request = RequestSpec::get("ipfs/gateway").query("path", path);
        self.transport.send(request).await
    }

    /// Pin an object
    pub async fn pin<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = RequestSpec::post(format!("ipfs/pin/add/{}", pin_path(path)));
        fetch_json(self.transport.as_ref(), request).await
    }

    /// One page of pinned objects
    pub async fn list<T: DeserializeOwned>(
        &self,
        options: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        let options = PaginationOptions::or_default(options);
        pagination::fetch_page(
            self.transport.as_ref(),
            &RequestSpec::get("ipfs/pin/list"),
            &options,
        )
        .await
    }

    /// Every pinned object
    pub async fn list_all<T: DeserializeOwned>(
        &self,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        let options = PaginationOptions::or_default(options);
        pagination::collect_all(
            self.transport.as_ref(),
            &RequestSpec::get("ipfs/pin/list"),
            &options,
        )
        .await
    }

    /// Details about a pinned object
    pub async fn list_by_path<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = RequestSpec::get(format!("ipfs/pin/list/{}", pin_path(path)));
        fetch_json(self.transport.as_ref(), request).await
    }

    /// Remove a pin
    pub async fn pin_remove<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = RequestSpec::post(format!("ipfs/pin/remove/{}", pin_path(path)));
        fetch_json(self.transport.as_ref(), request).await
    }
}

/// Encode each segment of an IPFS path, keeping the separators
fn pin_path(path: &str) -> String {
    path.split('/').map(path_segment).collect::<Vec<_>>().join("/")
}

impl std::fmt::Debug for BlockfrostIpfs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockfrostIpfs").finish_non_exhaustive()
    }
}
