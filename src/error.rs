//! Error types for the Blockfrost SDK
//!
//! Every public operation returns `Result<T, Error>`. The variants form a
//! closed taxonomy: network failures (no response), API failures (non-2xx
//! response), parse failures (2xx with an unexpected body) and
//! configuration failures (rejected at construction time).

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Error returned by the Blockfrost servers for a non-2xx response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// HTTP status code of the response
    pub status_code: u16,
    /// Short error name, e.g. "Not Found"
    pub error: String,
    /// Human readable description supplied by the server
    pub message: String,
    /// Requested URL
    pub url: String,
    /// Raw response body when it was valid JSON
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

/// Error envelope sent by the API: `{status_code, error, message}`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<String>,
    message: Option<String>,
}

impl ApiError {
    /// Translate a non-2xx response into an `ApiError`.
    ///
    /// Never fails: when the error envelope is missing or unparsable the
    /// canonical reason phrase and the raw body text are used instead.
    pub fn from_response(status: u16, url: impl Into<String>, body: &[u8]) -> Self {
        let reason = StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown Error")
            .to_string();

        let json = serde_json::from_slice::<serde_json::Value>(body).ok();
        let envelope = json
            .as_ref()
            .filter(|v| v.is_object())
            .and_then(|v| serde_json::from_value::<ErrorEnvelope>(v.clone()).ok());

        let (error, message) = match envelope {
            Some(ErrorEnvelope { error, message }) if error.is_some() || message.is_some() => {
                let error = error.unwrap_or_else(|| reason.clone());
                let message = message.unwrap_or_else(|| error.clone());
                (error, message)
            }
            _ => {
                let text = String::from_utf8_lossy(body).trim().to_string();
                let message = if text.is_empty() { reason.clone() } else { text };
                (reason, message)
            }
        };

        Self {
            status_code: status,
            error,
            message,
            url: url.into(),
            body: json,
        }
    }

    /// Status code carried inside the error envelope
    fn envelope_status(&self) -> Option<u16> {
        self.body
            .as_ref()
            .and_then(|b| b.get("status_code"))
            .and_then(serde_json::Value::as_u64)
            .and_then(|s| u16::try_from(s).ok())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.status_code, self.error, self.message)?;
        if let Some(status) = self.envelope_status() {
            if status != self.status_code {
                write!(f, " (server reported {status})")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// The main error type for the Blockfrost SDK
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },

    #[error("Request to {url} timed out after {timeout_ms}ms")]
    Timeout { url: String, timeout_ms: u64 },

    #[error("API error: {0}")]
    Api(ApiError),

    #[error("Malformed response from {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Invalid argument '{name}': {message}")]
    InvalidArgument { name: String, message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Self::Api(err)
    }
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Translate a reqwest failure that produced no HTTP response
    pub fn from_transport(err: &reqwest::Error, url: &str, timeout: Duration) -> Self {
        if err.is_timeout() {
            return Self::Timeout {
                url: url.to_string(),
                timeout_ms: timeout.as_millis() as u64,
            };
        }
        Self::network(url, err.to_string())
    }

    /// HTTP status code of the failure, `0` when no response was received
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Api(api) => api.status_code,
            _ => 0,
        }
    }

    /// The server-side error, if this failure carried an HTTP response
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(api) => Some(api),
            _ => None,
        }
    }

    /// 404
    pub fn is_not_found(&self) -> bool {
        self.status_code() == 404
    }

    /// 402, the daily request quota is exhausted
    pub fn is_quota_exceeded(&self) -> bool {
        self.status_code() == 402
    }

    /// 403
    pub fn is_forbidden(&self) -> bool {
        self.status_code() == 403
    }

    /// 429
    pub fn is_rate_limited(&self) -> bool {
        self.status_code() == 429
    }

    /// 5xx
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code())
    }

    /// No response was received
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network { .. } | Error::Timeout { .. })
    }

    /// Check if this error is retryable.
    ///
    /// Only failures without a response are retried; API and parse
    /// failures surface on first occurrence.
    pub fn is_retryable(&self) -> bool {
        self.is_network()
    }
}

/// Result type alias for the Blockfrost SDK
pub type Result<T> = std::result::Result<T, Error>;
