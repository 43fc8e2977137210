//! HTTP transport
//!
//! The transport is the single funnel every endpoint goes through:
//! - Prefixes the configured base URL and attaches credentials
//! - Encodes query, JSON, CBOR and multipart bodies
//! - Retries failures that produced no response, without delay
//! - Translates non-2xx responses into `ApiError`

use super::request::{Body, RequestSpec};
use crate::config::ValidatedConfig;
use crate::error::{ApiError, Error, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Header carrying the project id
pub const PROJECT_ID_HEADER: &str = "project_id";

/// Executes a single request and returns the raw body of a 2xx response
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request.
    ///
    /// Non-2xx responses are returned as `Error::Api`; failures without a
    /// response as `Error::Network` or `Error::Timeout`.
    async fn send(&self, request: RequestSpec) -> Result<Bytes>;
}

/// Transport backed by reqwest
pub struct HttpTransport {
    client: Client,
    base_url: String,
    project_id: Option<String>,
    timeout: Duration,
    retry_count: u32,
}

impl HttpTransport {
    /// Create a transport for the Cardano API
    pub fn new(config: &ValidatedConfig) -> Result<Self> {
        Self::with_base_url(config.api_url(), config)
    }

    /// Create a transport for the IPFS API
    pub fn ipfs(config: &ValidatedConfig) -> Result<Self> {
        Self::with_base_url(config.ipfs_url(), config)
    }

    /// Create a transport against an explicit base URL
    pub fn with_base_url(base_url: impl Into<String>, config: &ValidatedConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            project_id: config.project_id.clone(),
            timeout: config.request_timeout,
            retry_count: config.retry_count,
        })
    }

    /// Base URL every request path is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build full URL from path
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            return base.to_string();
        }
        format!("{base}/{path}")
    }

    fn build_request(&self, url: &str, request: &RequestSpec) -> RequestBuilder {
        let mut req = self.client.request(request.method.into(), url);

        if let Some(project_id) = &self.project_id {
            req = req.header(PROJECT_ID_HEADER, project_id.as_str());
        }

        for (key, value) in &request.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if !request.query.is_empty() {
            req = req.query(&request.query);
        }

        // Multipart forms are consumed on send, so the body is rebuilt for
        // every attempt.
        match &request.body {
            Body::Empty => req,
            Body::Json(body) => req.json(body),
            Body::Cbor(bytes) => req
                .header(reqwest::header::CONTENT_TYPE, "application/cbor")
                .body(bytes.clone()),
            Body::Multipart(parts) => {
                let form = parts.iter().fold(Form::new(), |form, part| {
                    let mut file = Part::bytes(part.data.clone());
                    if let Some(name) = &part.file_name {
                        file = file.file_name(name.clone());
                    }
                    form.part(part.name.clone(), file)
                });
                req.multipart(form)
            }
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: RequestSpec) -> Result<Bytes> {
        let url = self.build_url(&request.path);
        let mut attempt = 0;

        loop {
            debug!(
                "{} {} (attempt {}/{})",
                request.method,
                url,
                attempt + 1,
                self.retry_count + 1
            );

            let failure = match self.build_request(&url, &request).send().await {
                Ok(response) => {
                    let status = response.status();
                    match response.bytes().await {
                        Ok(body) if status.is_success() => return Ok(body),
                        Ok(body) => {
                            let err = ApiError::from_response(status.as_u16(), &url, &body);
                            debug!("{} {} failed: {}", request.method, url, err);
                            return Err(err.into());
                        }
                        Err(e) => Error::from_transport(&e, &url, self.timeout),
                    }
                }
                Err(e) => Error::from_transport(&e, &url, self.timeout),
            };

            if attempt >= self.retry_count {
                return Err(failure);
            }

            warn!(
                "Request to {} failed without response, attempt {}/{}: {}",
                url,
                attempt + 1,
                self.retry_count + 1,
                failure
            );
            attempt += 1;
        }
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("has_project_id", &self.project_id.is_some())
            .field("timeout", &self.timeout)
            .field("retry_count", &self.retry_count)
            .finish_non_exhaustive()
    }
}

/// Send a request and decode its JSON body
pub async fn fetch_json<T: DeserializeOwned>(
    transport: &dyn Transport,
    request: RequestSpec,
) -> Result<T> {
    let path = request.path.clone();
    let body = transport.send(request).await?;
    decode_json(&path, &body)
}

/// Decode a JSON body, reporting a mismatch as a parse error
pub fn decode_json<T: DeserializeOwned>(path: &str, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| {
        error!(
            "Failed to parse response for {}: {} (body: {})",
            path,
            e,
            body_preview(body)
        );
        Error::parse(path, e.to_string())
    })
}

/// Longest body excerpt written to the log
const BODY_PREVIEW_LEN: usize = 256;

/// Leading part of a body for log lines
pub(crate) fn body_preview(body: &[u8]) -> String {
    if body.len() <= BODY_PREVIEW_LEN {
        return String::from_utf8_lossy(body).into_owned();
    }
    format!(
        "{}... ({} bytes)",
        String::from_utf8_lossy(&body[..BODY_PREVIEW_LEN]),
        body.len()
    )
}
