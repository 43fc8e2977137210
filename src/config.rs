//! Client configuration
//!
//! A `ClientConfig` is assembled by the caller (builder, environment or
//! YAML file) and validated exactly once into a `ValidatedConfig`, which is
//! immutable and shared by reference between the transport and every
//! endpoint adapter.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Base URL of the hosted IPFS API
pub const IPFS_API_URL: &str = "https://ipfs.blockfrost.io/api";

/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Default number of additional attempts after a network failure
pub const DEFAULT_RETRY_COUNT: u32 = 3;

/// Default API version
pub const DEFAULT_API_VERSION: u32 = 0;

// ============================================================================
// Network
// ============================================================================

/// Cardano network served by the hosted API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
    Preview,
    Preprod,
}

impl Network {
    /// All known networks
    pub const ALL: [Network; 4] = [
        Network::Mainnet,
        Network::Testnet,
        Network::Preview,
        Network::Preprod,
    ];

    /// Lowercase network name, also used as project id prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Preview => "preview",
            Network::Preprod => "preprod",
        }
    }

    /// Unversioned API base URL for this network
    pub fn base_url(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://cardano-mainnet.blockfrost.io/api",
            Network::Testnet => "https://cardano-testnet.blockfrost.io/api",
            Network::Preview => "https://cardano-preview.blockfrost.io/api",
            Network::Preprod => "https://cardano-preprod.blockfrost.io/api",
        }
    }

    /// Derive the network from a project id such as `preprodAbC123`
    pub fn from_project_id(project_id: &str) -> Option<Network> {
        Self::ALL
            .into_iter()
            .find(|n| project_id.starts_with(n.as_str()))
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "preview" => Ok(Network::Preview),
            "preprod" => Ok(Network::Preprod),
            other => Err(Error::invalid_value(
                "network",
                format!("unknown network '{other}', expected one of mainnet, testnet, preview, preprod"),
            )),
        }
    }
}

// ============================================================================
// ClientConfig
// ============================================================================

/// Unvalidated client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Project id sent in the `project_id` header
    pub project_id: Option<String>,
    /// Explicit network; derived from the project id when unset
    pub network: Option<Network>,
    /// Legacy switch equivalent to `network = testnet`
    pub is_testnet: bool,
    /// API version appended to the base URL as `v{version}`
    pub version: u32,
    /// Fully custom backend URL, used verbatim
    pub custom_backend: Option<String>,
    /// User agent string
    pub user_agent: String,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Additional attempts after a network failure
    pub retry_count: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            network: None,
            is_testnet: false,
            version: DEFAULT_API_VERSION,
            custom_backend: None,
            user_agent: default_user_agent(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            retry_count: DEFAULT_RETRY_COUNT,
        }
    }
}

/// `<crate name>@<crate version>`
pub fn default_user_agent() -> String {
    format!("{}@{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    /// Create a config for the given project id
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            ..Self::default()
        }
    }

    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Load configuration from `BLOCKFROST_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.project_id = lookup("BLOCKFROST_PROJECT_ID").filter(|v| !v.is_empty());
        config.custom_backend = lookup("BLOCKFROST_CUSTOM_BACKEND").filter(|v| !v.is_empty());

        if let Some(network) = lookup("BLOCKFROST_NETWORK") {
            config.network = Some(network.parse()?);
        }
        if let Some(version) = lookup("BLOCKFROST_API_VERSION") {
            config.version = parse_number("BLOCKFROST_API_VERSION", &version)?;
        }
        if let Some(timeout) = lookup("BLOCKFROST_REQUEST_TIMEOUT_MS") {
            config.request_timeout =
                Duration::from_millis(parse_number("BLOCKFROST_REQUEST_TIMEOUT_MS", &timeout)?);
        }
        if let Some(retries) = lookup("BLOCKFROST_RETRY_COUNT") {
            config.retry_count = parse_number("BLOCKFROST_RETRY_COUNT", &retries)?;
        }

        Ok(config)
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(yaml)?;
        Ok(file.into())
    }

    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Validate the configuration.
    ///
    /// A rejected configuration never produces a usable client.
    pub fn validate(&self) -> Result<ValidatedConfig> {
        let project_id = self
            .project_id
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from);

        let custom_backend = match self.custom_backend.as_deref() {
            Some(raw) => Some(parse_backend(raw)?),
            None => None,
        };

        if project_id.is_none() && custom_backend.is_none() {
            return Err(Error::missing_field("project_id"));
        }

        let network = match (self.network, self.is_testnet) {
            (Some(network), true) if network != Network::Testnet => {
                return Err(Error::invalid_value(
                    "is_testnet",
                    format!("conflicts with network '{network}'"),
                ));
            }
            (Some(network), _) => network,
            (None, true) => Network::Testnet,
            (None, false) => project_id
                .as_deref()
                .and_then(Network::from_project_id)
                .unwrap_or_default(),
        };

        if self.user_agent.trim().is_empty() {
            return Err(Error::invalid_value("user_agent", "must not be empty"));
        }

        if self.request_timeout.is_zero() {
            return Err(Error::invalid_value("request_timeout", "must be positive"));
        }

        Ok(ValidatedConfig {
            project_id,
            network,
            version: self.version,
            custom_backend,
            user_agent: self.user_agent.clone(),
            request_timeout: self.request_timeout,
            retry_count: self.retry_count,
        })
    }
}

fn parse_number<N: FromStr>(field: &str, value: &str) -> Result<N> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::invalid_value(field, format!("'{value}' is not a valid number")))
}

fn parse_backend(raw: &str) -> Result<String> {
    let url = Url::parse(raw)
        .map_err(|e| Error::invalid_value("custom_backend", format!("{raw}: {e}")))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::invalid_value(
            "custom_backend",
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    Ok(raw.to_string())
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the project id
    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.config.project_id = Some(project_id.into());
        self
    }

    /// Set the network
    pub fn network(mut self, network: Network) -> Self {
        self.config.network = Some(network);
        self
    }

    /// Use the legacy testnet switch
    pub fn testnet(mut self, is_testnet: bool) -> Self {
        self.config.is_testnet = is_testnet;
        self
    }

    /// Set the API version
    pub fn version(mut self, version: u32) -> Self {
        self.config.version = version;
        self
    }

    /// Use a custom backend instead of the hosted API
    pub fn custom_backend(mut self, url: impl Into<String>) -> Self {
        self.config.custom_backend = Some(url.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set the request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Set how many times a network failure is retried
    pub fn retry_count(mut self, retries: u32) -> Self {
        self.config.retry_count = retries;
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

// ============================================================================
// ValidatedConfig
// ============================================================================

/// Configuration that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    pub project_id: Option<String>,
    pub network: Network,
    pub version: u32,
    pub custom_backend: Option<String>,
    pub user_agent: String,
    pub request_timeout: Duration,
    pub retry_count: u32,
}

impl ValidatedConfig {
    /// Base URL for the Cardano API
    pub fn api_url(&self) -> String {
        match &self.custom_backend {
            Some(backend) => backend.clone(),
            None => format!("{}/v{}", self.network.base_url(), self.version),
        }
    }

    /// Base URL for the IPFS API
    pub fn ipfs_url(&self) -> String {
        match &self.custom_backend {
            Some(backend) => backend.clone(),
            None => format!("{IPFS_API_URL}/v{}", self.version),
        }
    }
}

// ============================================================================
// YAML file
// ============================================================================

/// On-disk representation of the client configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub network: Option<Network>,
    #[serde(default)]
    pub is_testnet: bool,
    #[serde(default)]
    pub version: Option<u32>,
    #[serde(default)]
    pub custom_backend: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
    #[serde(default)]
    pub retry_count: Option<u32>,
}

impl From<ConfigFile> for ClientConfig {
    fn from(file: ConfigFile) -> Self {
        let defaults = ClientConfig::default();
        Self {
            project_id: file.project_id,
            network: file.network,
            is_testnet: file.is_testnet,
            version: file.version.unwrap_or(defaults.version),
            custom_backend: file.custom_backend,
            user_agent: file.user_agent.unwrap_or(defaults.user_agent),
            request_timeout: file
                .request_timeout_ms
                .map_or(defaults.request_timeout, Duration::from_millis),
            retry_count: file.retry_count.unwrap_or(defaults.retry_count),
        }
    }
}
