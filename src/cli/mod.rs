//! CLI module
//!
//! Command-line front end over the API and IPFS clients.
//!
//! # Commands
//!
//! - `get` - GET a single resource or page
//! - `all` - Fetch every page of a collection
//! - `health` - Check backend health
//! - `ipfs` - Add, fetch, pin, list and remove IPFS objects

mod commands;
mod logging;
mod runner;

pub use commands::{Cli, Commands, IpfsCommands};
pub use logging::log_filter;
pub use runner::Runner;

#[cfg(test)]
mod tests;
