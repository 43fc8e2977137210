//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, IpfsCommands};
use crate::client::BlockfrostApi;
use crate::config::ClientConfig;
use crate::http::RequestSpec;
use crate::ipfs::BlockfrostIpfs;
use crate::pagination::{Order, PaginationOptions};
use crate::types::JsonValue;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Get {
                path,
                page,
                count,
                order,
            } => self.get(path, *page, *count, *order).await,
            Commands::All {
                path,
                count,
                order,
                batch_size,
            } => self.all(path, *count, *order, *batch_size).await,
            Commands::Health => self.health().await,
            Commands::Ipfs { command } => self.ipfs(command).await,
        }
    }

    /// Resolve the client configuration.
    ///
    /// The YAML file (or the `BLOCKFROST_*` environment when no file is
    /// given) is the base; command-line flags override it.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)
                .with_context(|| format!("Failed to load config file {}", path.display()))?,
            None => ClientConfig::from_env().context("Invalid BLOCKFROST_* environment")?,
        };

        if let Some(project_id) = &self.cli.project_id {
            config.project_id = Some(project_id.clone());
        }
        if let Some(network) = self.cli.network {
            config.network = Some(network);
        }
        if let Some(backend) = &self.cli.custom_backend {
            config.custom_backend = Some(backend.clone());
        }

        Ok(config)
    }

    fn api(&self) -> Result<BlockfrostApi> {
        let api = BlockfrostApi::new(self.client_config()?).context("Invalid client configuration")?;
        debug!("Using {:?}", api);
        Ok(api)
    }

    fn ipfs_client(&self) -> Result<BlockfrostIpfs> {
        BlockfrostIpfs::new(self.client_config()?).context("Invalid client configuration")
    }

    /// GET a single resource, with page parameters when given
    async fn get(
        &self,
        path: &str,
        page: Option<u32>,
        count: Option<u32>,
        order: Option<Order>,
    ) -> Result<()> {
        let api = self.api()?;
        let request = RequestSpec::get(path)
            .query_opt("page", page)
            .query_opt("count", count)
            .query_opt("order", order);

        let value: JsonValue = api
            .send(request)
            .await
            .with_context(|| format!("GET {path} failed"))?;
        self.output(&value)
    }

    /// Fetch every page of a collection
    async fn all(&self, path: &str, count: u32, order: Order, batch_size: u32) -> Result<()> {
        let options = PaginationOptions::new()
            .count(count)
            .order(order)
            .batch_size(batch_size);
        options.validate()?;

        let api = self.api()?;
        let items: Vec<JsonValue> = api
            .get_all(path, Some(&options))
            .await
            .with_context(|| format!("Fetching all pages of {path} failed"))?;

        info!("Fetched {} items from {}", items.len(), path);
        self.output(&items)
    }

    async fn health(&self) -> Result<()> {
        let health = self.api()?.health().await.context("Health check failed")?;
        self.output(&health)
    }

    async fn ipfs(&self, command: &IpfsCommands) -> Result<()> {
        let ipfs = self.ipfs_client()?;

        match command {
            IpfsCommands::Add { file } => {
                let added: JsonValue = ipfs
                    .add(file)
                    .await
                    .with_context(|| format!("Failed to add {}", file.display()))?;
                self.output(&added)
            }
            IpfsCommands::Gateway { path, output } => {
                let bytes = ipfs
                    .gateway(path)
                    .await
                    .with_context(|| format!("Failed to fetch {path}"))?;
                match output {
                    Some(file) => write_file(file, &bytes).await,
                    None => {
                        let mut stdout = std::io::stdout().lock();
                        stdout.write_all(&bytes)?;
                        stdout.flush()?;
                        Ok(())
                    }
                }
            }
            IpfsCommands::Pin { path } => {
                let pinned: JsonValue = ipfs
                    .pin(path)
                    .await
                    .with_context(|| format!("Failed to pin {path}"))?;
                self.output(&pinned)
            }
            IpfsCommands::List { path: Some(path), .. } => {
                let pin: JsonValue = ipfs
                    .list_by_path(path)
                    .await
                    .with_context(|| format!("Failed to look up pin {path}"))?;
                self.output(&pin)
            }
            IpfsCommands::List { path: None, all } => {
                let pins = if *all {
                    ipfs.list_all::<JsonValue>(None).await
                } else {
                    ipfs.list::<JsonValue>(None).await
                };
                let pins = pins.context("Failed to list pins")?;
                self.output(&pins)
            }
            IpfsCommands::Remove { path } => {
                let removed: JsonValue = ipfs
                    .pin_remove(path)
                    .await
                    .with_context(|| format!("Failed to remove pin {path}"))?;
                self.output(&removed)
            }
        }
    }

    /// Print a value as pretty JSON
    fn output<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

async fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    tokio::fs::write(path, bytes)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
