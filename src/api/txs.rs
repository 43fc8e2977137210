//! Transactions endpoints

use crate::client::BlockfrostApi;
use crate::error::{Error, Result};
use crate::http::{path_segment, RequestSpec};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Path transactions are submitted to
const TX_SUBMIT_PATH: &str = "tx/submit";

impl BlockfrostApi {
    /// Content of a specific transaction.
    pub async fn txs<T: DeserializeOwned>(&self, hash: &str) -> Result<T> {
        self.get(format!("txs/{}", path_segment(hash))).await
    }

    /// Inputs and outputs of a specific transaction.
    pub async fn txs_utxos<T: DeserializeOwned>(&self, hash: &str) -> Result<T> {
        self.get(format!("txs/{}/utxos", path_segment(hash))).await
    }

    /// Stake address certificates of a specific transaction.
    pub async fn txs_stakes<T: DeserializeOwned>(&self, hash: &str) -> Result<Vec<T>> {
        self.get(format!("txs/{}/stakes", path_segment(hash))).await
    }

    /// Delegation certificates of a specific transaction.
    pub async fn txs_delegations<T: DeserializeOwned>(&self, hash: &str) -> Result<Vec<T>> {
        self.get(format!("txs/{}/delegations", path_segment(hash))).await
    }

    /// Withdrawals of a specific transaction.
    pub async fn txs_withdrawals<T: DeserializeOwned>(&self, hash: &str) -> Result<Vec<T>> {
        self.get(format!("txs/{}/withdrawals", path_segment(hash))).await
    }

    /// Move instantaneous rewards of a specific transaction.
    pub async fn txs_mirs<T: DeserializeOwned>(&self, hash: &str) -> Result<Vec<T>> {
        self.get(format!("txs/{}/mirs", path_segment(hash))).await
    }

    /// Stake pool registration and update certificates of a specific transaction.
    pub async fn txs_pool_updates<T: DeserializeOwned>(&self, hash: &str) -> Result<Vec<T>> {
        self.get(format!("txs/{}/pool_updates", path_segment(hash))).await
    }

    /// Stake pool retirement certificates of a specific transaction.
    pub async fn txs_pool_retires<T: DeserializeOwned>(&self, hash: &str) -> Result<Vec<T>> {
        self.get(format!("txs/{}/pool_retires", path_segment(hash))).await
    }

    /// Metadata of a specific transaction.
    pub async fn txs_metadata<T: DeserializeOwned>(&self, hash: &str) -> Result<Vec<T>> {
        self.get(format!("txs/{}/metadata", path_segment(hash))).await
    }

    /// Metadata of a specific transaction, CBOR encoded.
    pub async fn txs_metadata_cbor<T: DeserializeOwned>(&self, hash: &str) -> Result<Vec<T>> {
        self.get(format!("txs/{}/metadata/cbor", path_segment(hash))).await
    }

    /// Redeemers of a specific transaction.
    pub async fn txs_redeemers<T: DeserializeOwned>(&self, hash: &str) -> Result<Vec<T>> {
        self.get(format!("txs/{}/redeemers", path_segment(hash))).await
    }

    /// Submit a CBOR serialized transaction.
    ///
    /// Returns the hash of the submitted transaction. Submissions rejected
    /// by the node come back as an API error with status 400.
    pub async fn tx_submit(&self, transaction: impl Into<Vec<u8>>) -> Result<String> {
        let transaction = transaction.into();
        debug!("Submitting transaction of {} bytes", transaction.len());
        self.send(RequestSpec::post(TX_SUBMIT_PATH).cbor(transaction))
            .await
    }

    /// Submit a transaction given as hex encoded CBOR
    pub async fn tx_submit_hex(&self, transaction: &str) -> Result<String> {
        let bytes = hex::decode(transaction.trim())
            .map_err(|e| Error::invalid_argument("transaction", e.to_string()))?;
        self.tx_submit(bytes).await
    }
}

