//! Ledger and network endpoints

use crate::client::BlockfrostApi;
use crate::error::Result;
use serde::de::DeserializeOwned;

impl BlockfrostApi {
    /// Blockchain genesis parameters
    pub async fn genesis<T: DeserializeOwned>(&self) -> Result<T> {
        self.get("genesis").await
    }

    /// Supply and stake of the network
    pub async fn network<T: DeserializeOwned>(&self) -> Result<T> {
        self.get("network").await
    }

    /// Era boundaries and parameters
    pub async fn network_eras<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        self.get("network/eras").await
    }
}
