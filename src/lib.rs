// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]

//! # Blockfrost SDK
//!
//! Async client for the Blockfrost Cardano and IPFS REST APIs.
//!
//! ## Features
//!
//! - **Typed errors**: every non-2xx response becomes an [`ApiError`] with
//!   status, error name, message and URL
//! - **Retries**: failures without a response are retried immediately,
//!   API errors never are
//! - **Auto-pagination**: `*_all` methods fetch pages in concurrent batches
//!   and stop at the first short page
//! - **Pluggable transport**: any [`Transport`] can stand in for HTTP
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use blockfrost_sdk::{BlockfrostApi, ClientConfig, PaginationOptions, Result};
//! use serde_json::Value;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let api = BlockfrostApi::new(ClientConfig::new("mainnetYourProjectId"))?;
//!
//!     // Single resource
//!     let latest: Value = api.blocks_latest().await?;
//!
//!     // Every page of a collection
//!     let options = PaginationOptions::new().batch_size(5);
//!     let pools: Vec<String> = api.pools_all(Some(&options)).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │        BlockfrostApi / BlockfrostIpfs (api, ipfs)        │
//! └──────────────────────────────────────────────────────────┘
//!                 │                          │
//! ┌───────────────┴──────────┐  ┌────────────┴───────────────┐
//! │ Pagination               │  │ Transport                  │
//! │ page/count/order cursor  │─▶│ base URL + project_id      │
//! │ batched auto-paginator   │  │ retry without response     │
//! └──────────────────────────┘  │ non-2xx → ApiError         │
//!                               └────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types and response translation
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// Request description and HTTP transport
pub mod http;

/// Page-number pagination
pub mod pagination;

/// Cardano API client
pub mod client;

/// Endpoint adapters
pub mod api;

/// IPFS API client
pub mod ipfs;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{ApiError, Error, Result};
pub use types::*;

// Re-export commonly used types
pub use api::{BlockRange, Health};
pub use client::BlockfrostApi;
pub use config::{ClientConfig, Network, ValidatedConfig};
pub use http::{HttpTransport, RequestSpec, Transport};
pub use ipfs::BlockfrostIpfs;
pub use pagination::{Order, PaginationOptions};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
