//! CLI commands and argument parsing

use crate::config::Network;
use crate::pagination::{Order, DEFAULT_BATCH_SIZE, MAX_PAGE_SIZE};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Query the Blockfrost Cardano and IPFS APIs
#[derive(Parser, Debug)]
#[command(name = "blockfrost-sdk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project id, also selects the network
    #[arg(short, long, global = true, env = "BLOCKFROST_PROJECT_ID", hide_env_values = true)]
    pub project_id: Option<String>,

    /// Network, overrides the one derived from the project id
    #[arg(short, long, global = true)]
    pub network: Option<Network>,

    /// Custom backend URL, used verbatim
    #[arg(long, global = true)]
    pub custom_backend: Option<String>,

    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// GET a single resource or page
    Get {
        /// Path relative to the API URL, e.g. `blocks/latest`
        path: String,

        /// Page number
        #[arg(long)]
        page: Option<u32>,

        /// Items per page
        #[arg(long)]
        count: Option<u32>,

        /// Item order
        #[arg(long)]
        order: Option<Order>,
    },

    /// Fetch every page of a collection
    All {
        /// Path relative to the API URL, e.g. `pools`
        path: String,

        /// Items per page
        #[arg(long, default_value_t = MAX_PAGE_SIZE)]
        count: u32,

        /// Item order
        #[arg(long, default_value = "asc")]
        order: Order,

        /// Pages requested concurrently
        #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
        batch_size: u32,
    },

    /// Check backend health
    Health,

    /// IPFS operations
    Ipfs {
        #[command(subcommand)]
        command: IpfsCommands,
    },
}

/// IPFS subcommands
#[derive(Subcommand, Debug)]
pub enum IpfsCommands {
    /// Add a file
    Add {
        /// File to upload
        file: PathBuf,
    },

    /// Fetch an object through the gateway
    Gateway {
        /// IPFS path
        path: String,

        /// Write the object to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Pin an object
    Pin {
        /// IPFS path
        path: String,
    },

    /// List pinned objects, or show a single pin
    List {
        /// IPFS path of a single pin
        path: Option<String>,

        /// Fetch every page
        #[arg(long)]
        all: bool,
    },

    /// Remove a pin
    Remove {
        /// IPFS path
        path: String,
    },
}
