//! Request description
//!
//! A `RequestSpec` is an immutable value built fresh for every call. It
//! carries everything the transport needs except the base URL and the
//! credentials, which come from the shared configuration.

use crate::types::{JsonValue, Method};
use std::collections::BTreeMap;
use url::form_urlencoded;

/// One named part of a multipart form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
    /// Form field name
    pub name: String,
    /// File name announced for the part
    pub file_name: Option<String>,
    /// Part contents
    pub data: Vec<u8>,
}

impl FormPart {
    /// Create a file part
    pub fn file(name: impl Into<String>, file_name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            file_name: Some(file_name.into()),
            data,
        }
    }
}

/// Request body
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Body {
    #[default]
    Empty,
    /// Serialized as `application/json`
    Json(JsonValue),
    /// Raw bytes sent as `application/cbor`
    Cbor(Vec<u8>),
    /// `multipart/form-data`
    Multipart(Vec<FormPart>),
}

/// Description of a single HTTP request relative to the API base URL
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestSpec {
    /// HTTP method
    pub method: Method,
    /// Path relative to the base URL
    pub path: String,
    /// Query parameters
    pub query: BTreeMap<String, String>,
    /// Request headers
    pub headers: BTreeMap<String, String>,
    /// Request body
    pub body: Body,
}

impl RequestSpec {
    /// Create a request
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            ..Self::default()
        }
    }

    /// Create a GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Create a POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.insert(key.into(), value.to_string());
        self
    }

    /// Add a query parameter when a value is present
    #[must_use]
    pub fn query_opt(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: JsonValue) -> Self {
        self.body = Body::Json(body);
        self
    }

    /// Set CBOR body
    #[must_use]
    pub fn cbor(mut self, bytes: Vec<u8>) -> Self {
        self.body = Body::Cbor(bytes);
        self
    }

    /// Set multipart body
    #[must_use]
    pub fn multipart(mut self, parts: Vec<FormPart>) -> Self {
        self.body = Body::Multipart(parts);
        self
    }
}

/// Percent-encode a caller-supplied value for use as a single path segment
///
/// A `+` in the form encoding can only stand for a space, since a literal
/// plus is written as `%2B`.
pub fn path_segment(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
