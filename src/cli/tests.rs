//! Tests for argument parsing and configuration resolution

use super::*;
use crate::config::Network;
use crate::pagination::Order;
use clap::Parser;
use std::io::Write;
use tracing_subscriber::filter::LevelFilter;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("blockfrost-sdk").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_parse_get_with_page_flags() {
    let cli = parse(&[
        "--project-id",
        "mainnetAbc",
        "get",
        "pools",
        "--page",
        "2",
        "--order",
        "desc",
    ]);

    assert_eq!(cli.project_id.as_deref(), Some("mainnetAbc"));
    match cli.command {
        Commands::Get {
            path,
            page,
            count,
            order,
        } => {
            assert_eq!(path, "pools");
            assert_eq!(page, Some(2));
            assert_eq!(count, None);
            assert_eq!(order, Some(Order::Desc));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_all_defaults() {
    let cli = parse(&["all", "epochs/300/stakes", "--network", "preprod"]);

    assert_eq!(cli.network, Some(Network::Preprod));
    match cli.command {
        Commands::All {
            path,
            count,
            order,
            batch_size,
        } => {
            assert_eq!(path, "epochs/300/stakes");
            assert_eq!(count, 100);
            assert_eq!(order, Order::Asc);
            assert_eq!(batch_size, 10);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_ipfs_subcommands() {
    let cli = parse(&["ipfs", "gateway", "QmHash", "--output", "out.bin"]);
    assert!(matches!(
        cli.command,
        Commands::Ipfs {
            command: IpfsCommands::Gateway { ref path, output: Some(_) }
        } if path == "QmHash"
    ));

    let cli = parse(&["ipfs", "list", "--all"]);
    assert!(matches!(
        cli.command,
        Commands::Ipfs {
            command: IpfsCommands::List { path: None, all: true }
        }
    ));
}

#[test]
fn test_parse_rejects_unknown_order() {
    let result = Cli::try_parse_from(["blockfrost-sdk", "all", "pools", "--order", "sideways"]);
    assert!(result.is_err());
}

#[test]
fn test_flags_override_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "project_id: previewFromFile\nretry_count: 7\ncustom_backend: http://localhost:3000"
    )
    .unwrap();
    let config_path = file.path().to_str().unwrap();

    let cli = parse(&["--config", config_path, "health"]);
    let config = Runner::new(cli).client_config().unwrap();
    assert_eq!(config.project_id.as_deref(), Some("previewFromFile"));
    assert_eq!(config.retry_count, 7);
    assert_eq!(config.custom_backend.as_deref(), Some("http://localhost:3000"));

    let cli = parse(&[
        "--config",
        config_path,
        "--project-id",
        "mainnetFromFlag",
        "--network",
        "mainnet",
        "health",
    ]);
    let config = Runner::new(cli).client_config().unwrap();
    assert_eq!(config.project_id.as_deref(), Some("mainnetFromFlag"));
    assert_eq!(config.network, Some(Network::Mainnet));
    assert_eq!(config.retry_count, 7);
}

#[test]
fn test_missing_config_file() {
    let cli = parse(&["--config", "/no/such/config.yaml", "health"]);
    let err = Runner::new(cli).client_config().unwrap_err();
    assert!(err.to_string().contains("/no/such/config.yaml"));
}

#[test]
fn test_log_filter_defaults_from_verbosity() {
    use super::logging::filter_from;

    assert_eq!(filter_from(None, false).max_level_hint(), Some(LevelFilter::WARN));
    assert_eq!(filter_from(None, true).max_level_hint(), Some(LevelFilter::DEBUG));
    assert_eq!(filter_from(Some(" "), true).max_level_hint(), Some(LevelFilter::DEBUG));
}

#[test]
fn test_log_filter_prefers_rust_log() {
    use super::logging::filter_from;

    assert_eq!(filter_from(Some("info"), true).max_level_hint(), Some(LevelFilter::INFO));
    assert_eq!(filter_from(Some("trace"), false).max_level_hint(), Some(LevelFilter::TRACE));
    assert_eq!(
        filter_from(Some("blockfrost_sdk=error"), true).max_level_hint(),
        Some(LevelFilter::ERROR)
    );
}
