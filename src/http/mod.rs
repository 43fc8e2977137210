//! HTTP module
//!
//! Provides the request description and the transport every endpoint
//! funnels through.
//!
//! # Features
//!
//! - **Request specs**: Immutable, comparable descriptions of a call
//! - **Automatic Retries**: Network failures are retried without delay
//! - **Error translation**: Non-2xx responses become typed `ApiError`s
//! - **Bodies**: JSON, CBOR and multipart forms

mod request;
mod transport;

pub use request::{path_segment, Body, FormPart, RequestSpec};
pub use transport::{decode_json, fetch_json, HttpTransport, Transport, PROJECT_ID_HEADER};

#[cfg(test)]
pub(crate) mod testing;
