//! Endpoint adapters
//!
//! Each submodule adds the endpoints of one API resource to
//! [`BlockfrostApi`](crate::BlockfrostApi). Adapters only build the path and
//! pick the response shape; payload types are chosen by the caller, any
//! `DeserializeOwned` type works, `serde_json::Value` included.
//!
//! Paginated endpoints take `Option<&PaginationOptions>` and have an `_all`
//! counterpart that walks every page.

mod accounts;
mod addresses;
mod assets;
mod blocks;
mod epochs;
mod health;
mod ledger;
mod metadata;
mod nutlink;
mod pools;
mod scripts;
mod txs;

pub use addresses::BlockRange;
pub use health::Health;

#[cfg(test)]
mod tests;
