//! Accounts endpoints

use crate::client::BlockfrostApi;
use crate::error::Result;
use crate::http::path_segment;
use crate::pagination::PaginationOptions;
use crate::types::Page;
use serde::de::DeserializeOwned;

impl BlockfrostApi {
    /// Obtain information about a specific stake account.
    ///
    /// `stake_address` is a Bech32 stake address.
    pub async fn accounts<T: DeserializeOwned>(&self, stake_address: &str) -> Result<T> {
        self.get(format!("accounts/{}", path_segment(stake_address))).await
    }

    /// Delegation history of a specific account.
    pub async fn accounts_delegations<T: DeserializeOwned>(
        &self,
        stake_address: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("accounts/{}/delegations", path_segment(stake_address)), pagination)
            .await
    }

    /// Whole delegation history of a specific account.
    pub async fn accounts_delegations_all<T: DeserializeOwned>(
        &self,
        stake_address: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all(format!("accounts/{}/delegations", path_segment(stake_address)), options)
            .await
    }

    /// Registrations and deregistrations of a specific account.
    pub async fn accounts_registrations<T: DeserializeOwned>(
        &self,
        stake_address: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("accounts/{}/registrations", path_segment(stake_address)), pagination)
            .await
    }

    pub async fn accounts_registrations_all<T: DeserializeOwned>(
        &self,
        stake_address: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all(format!("accounts/{}/registrations", path_segment(stake_address)), options)
            .await
    }

    /// Reward history of a specific account.
    pub async fn accounts_rewards<T: DeserializeOwned>(
        &self,
        stake_address: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("accounts/{}/rewards", path_segment(stake_address)), pagination)
            .await
    }

    pub async fn accounts_rewards_all<T: DeserializeOwned>(
        &self,
        stake_address: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all(format!("accounts/{}/rewards", path_segment(stake_address)), options)
            .await
    }

    /// Active stake history of a specific account.
    pub async fn accounts_history<T: DeserializeOwned>(
        &self,
        stake_address: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("accounts/{}/history", path_segment(stake_address)), pagination)
            .await
    }

    pub async fn accounts_history_all<T: DeserializeOwned>(
        &self,
        stake_address: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all(format!("accounts/{}/history", path_segment(stake_address)), options)
            .await
    }

    /// Withdrawals of a specific account.
    pub async fn accounts_withdrawals<T: DeserializeOwned>(
        &self,
        stake_address: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("accounts/{}/withdrawals", path_segment(stake_address)), pagination)
            .await
    }

    pub async fn accounts_withdrawals_all<T: DeserializeOwned>(
        &self,
        stake_address: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all(format!("accounts/{}/withdrawals", path_segment(stake_address)), options)
            .await
    }

    /// MIRs (move instantaneous rewards) of a specific account.
    pub async fn accounts_mirs<T: DeserializeOwned>(
        &self,
        stake_address: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("accounts/{}/mirs", path_segment(stake_address)), pagination)
            .await
    }

    pub async fn accounts_mirs_all<T: DeserializeOwned>(
        &self,
        stake_address: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all(format!("accounts/{}/mirs", path_segment(stake_address)), options)
            .await
    }

    /// Addresses associated with a specific account.
    pub async fn accounts_addresses<T: DeserializeOwned>(
        &self,
        stake_address: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("accounts/{}/addresses", path_segment(stake_address)), pagination)
            .await
    }

    pub async fn accounts_addresses_all<T: DeserializeOwned>(
        &self,
        stake_address: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all(format!("accounts/{}/addresses", path_segment(stake_address)), options)
            .await
    }

    /// Assets held across all addresses of a specific account.
    pub async fn accounts_addresses_assets<T: DeserializeOwned>(
        &self,
        stake_address: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(
            format!("accounts/{}/addresses/assets", path_segment(stake_address)),
            pagination,
        )
        .await
    }

    pub async fn accounts_addresses_assets_all<T: DeserializeOwned>(
        &self,
        stake_address: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all(format!("accounts/{}/addresses/assets", path_segment(stake_address)), options)
            .await
    }

    /// Summed details about all addresses of a specific account.
    pub async fn accounts_addresses_total<T: DeserializeOwned>(
        &self,
        stake_address: &str,
    ) -> Result<T> {
        self.get(format!("accounts/{}/addresses/total", path_segment(stake_address)))
            .await
    }

    /// UTxOs of all addresses of a specific account.
    pub async fn accounts_utxos<T: DeserializeOwned>(
        &self,
        stake_address: &str,
        pagination: Option<&PaginationOptions>,
    ) -> Result<Page<T>> {
        self.get_page(format!("accounts/{}/utxos", path_segment(stake_address)), pagination)
            .await
    }

    pub async fn accounts_utxos_all<T: DeserializeOwned>(
        &self,
        stake_address: &str,
        options: Option<&PaginationOptions>,
    ) -> Result<Vec<T>> {
        self.get_all(format!("accounts/{}/utxos", path_segment(stake_address)), options)
            .await
    }
}
