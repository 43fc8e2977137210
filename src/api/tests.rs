//! Tests for the endpoint adapters

use crate::client::BlockfrostApi;
use crate::config::ClientConfig;
use crate::error::{ApiError, Error};
use crate::http::testing::FnTransport;
use crate::http::RequestSpec;
use crate::pagination::{Order, PaginationOptions};
use crate::types::{JsonValue, Method};
use bytes::Bytes;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_bytes, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{BlockRange, Health};

fn api_over(transport: &Arc<FnTransport>) -> BlockfrostApi {
    BlockfrostApi::with_transport(transport.clone())
}

fn echo_transport() -> Arc<FnTransport> {
    Arc::new(FnTransport::new(|_| Ok(Bytes::from_static(b"[]"))))
}

fn api_for(server: &MockServer) -> BlockfrostApi {
    let config = ClientConfig::builder()
        .project_id("mainnetTest")
        .custom_backend(server.uri())
        .request_timeout(Duration::from_secs(2))
        .build();
    BlockfrostApi::new(config).unwrap()
}

fn last_request(transport: &FnTransport) -> RequestSpec {
    transport.requests().pop().unwrap()
}

#[tokio::test]
async fn test_caller_values_are_single_segments() {
    let transport = echo_transport();
    let api = api_over(&transport);

    let _: JsonValue = api.accounts("stake/x?y").await.unwrap();
    let _: Vec<JsonValue> = api
        .addresses_utxos_asset_all("addr 1", "policy#name", None)
        .await
        .unwrap();
    let _: JsonValue = api.blocks_epoch_slot(300, 42).await.unwrap();

    let paths: Vec<String> = transport.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        vec![
            "accounts/stake%2Fx%3Fy",
            "addresses/addr%201/utxos/policy%23name",
            "blocks/epoch/300/slot/42",
        ]
    );
}

#[tokio::test]
async fn test_single_resource_paths() {
    let transport = Arc::new(FnTransport::new(|_| Ok(Bytes::from_static(b"{}"))));
    let api = api_over(&transport);

    let _: JsonValue = api.accounts("stake1u9").await.unwrap();
    let _: JsonValue = api.addresses_extended("addr1q").await.unwrap();
    let _: JsonValue = api.assets_by_id("policyname").await.unwrap();
    let _: JsonValue = api.blocks_epoch_slot(300, 42).await.unwrap();
    let _: JsonValue = api.epochs_latest_parameters().await.unwrap();
    let _: JsonValue = api.pools_metadata("pool1x").await.unwrap();
    let _: JsonValue = api.scripts_datum_cbor("d4").await.unwrap();
    let _: JsonValue = api.txs_utxos("abc").await.unwrap();
    let _: JsonValue = api.nutlink("addr1o").await.unwrap();
    let _: JsonValue = api.genesis().await.unwrap();
    let _: JsonValue = api.root().await.unwrap();

    let paths: Vec<String> = transport.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        vec![
            "accounts/stake1u9",
            "addresses/addr1q/extended",
            "assets/policyname",
            "blocks/epoch/300/slot/42",
            "epochs/latest/parameters",
            "pools/pool1x/metadata",
            "scripts/datum/d4/cbor",
            "txs/abc/utxos",
            "nutlink/addr1o",
            "genesis",
            "",
        ]
    );
    assert!(transport.requests().iter().all(|r| r.method == Method::GET));
}

#[tokio::test]
async fn test_paged_adapter_forwards_options() {
    let transport = echo_transport();
    let api = api_over(&transport);
    let options = PaginationOptions::default().page(3).count(25).order(Order::Desc);

    let page: Vec<JsonValue> = api
        .pools_by_id_delegators("pool1x", Some(&options))
        .await
        .unwrap();
    assert!(page.is_empty());

    let request = last_request(&transport);
    assert_eq!(request.path, "pools/pool1x/delegators");
    assert_eq!(request.query.get("page").unwrap(), "3");
    assert_eq!(request.query.get("count").unwrap(), "25");
    assert_eq!(request.query.get("order").unwrap(), "desc");
}

#[tokio::test]
async fn test_paged_adapter_defaults() {
    let transport = echo_transport();
    let api = api_over(&transport);

    let _: Vec<JsonValue> = api.metadata_txs_labels(None).await.unwrap();

    let request = last_request(&transport);
    assert_eq!(request.query.get("page").unwrap(), "1");
    assert_eq!(request.query.get("count").unwrap(), "100");
    assert_eq!(request.query.get("order").unwrap(), "asc");
}

#[tokio::test]
async fn test_all_adapter_walks_pages() {
    let transport = Arc::new(FnTransport::collection(230));
    let api = api_over(&transport);

    let items: Vec<u32> = api.assets_policy_by_id_all("policy", None).await.unwrap();

    assert_eq!(items, (0..230).collect::<Vec<_>>());
    assert!(transport
        .requests()
        .iter()
        .all(|r| r.path == "assets/policy/policy"));
    // pages 1..=10 are requested as one batch, only 1..=3 exist
    assert_eq!(transport.pages(), (1..=10).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_address_transactions_range() {
    let transport = echo_transport();
    let api = api_over(&transport);
    let range = BlockRange {
        from: Some("8929261".into()),
        to: Some("9999269:10".into()),
    };

    let _: Vec<JsonValue> = api
        .addresses_transactions("addr1q", None, Some(&range))
        .await
        .unwrap();

    let request = last_request(&transport);
    assert_eq!(request.path, "addresses/addr1q/transactions");
    assert_eq!(request.query.get("from").unwrap(), "8929261");
    assert_eq!(request.query.get("to").unwrap(), "9999269:10");

    let _: Vec<JsonValue> = api
        .addresses_transactions("addr1q", None, None)
        .await
        .unwrap();
    let request = last_request(&transport);
    assert!(!request.query.contains_key("from"));
    assert!(!request.query.contains_key("to"));
}

#[tokio::test]
async fn test_address_transactions_all_keeps_range_on_every_page() {
    let transport = Arc::new(FnTransport::collection(15));
    let api = api_over(&transport);
    let range = BlockRange {
        from: Some("100".into()),
        to: None,
    };
    let options = PaginationOptions::default().count(10).batch_size(1);

    let items: Vec<u32> = api
        .addresses_transactions_all("addr1q", Some(&options), Some(&range))
        .await
        .unwrap();

    assert_eq!(items.len(), 15);
    assert_eq!(transport.pages(), vec![1, 2]);
    assert!(transport
        .requests()
        .iter()
        .all(|r| r.query.get("from").map(String::as_str) == Some("100")));
}

#[tokio::test]
async fn test_address_utxos_not_found_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/addresses/addr1unused/utxos"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status_code": 404,
            "error": "Not Found",
            "message": "The requested component has not been found."
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);

    let page: Vec<JsonValue> = assert_ok!(api.addresses_utxos("addr1unused", None).await);
    assert!(page.is_empty());

    let all: Vec<JsonValue> = assert_ok!(api.addresses_utxos_all("addr1unused", None).await);
    assert!(all.is_empty());
}

fn full_page_then_not_found(req: &RequestSpec) -> crate::Result<Bytes> {
    match req.query["page"].as_str() {
        "1" => Ok(Bytes::from(serde_json::to_vec(&(0..100).collect::<Vec<u32>>()).unwrap())),
        _ => Err(ApiError::from_response(404, "https://x/addresses/addr1q/utxos", b"").into()),
    }
}

#[tokio::test]
async fn test_address_utxos_all_keeps_pages_before_not_found() {
    let transport = Arc::new(FnTransport::new(full_page_then_not_found));
    let api = api_over(&transport);
    let options = PaginationOptions::default().batch_size(1);

    let items: Vec<u32> = assert_ok!(api.addresses_utxos_all("addr1q", Some(&options)).await);

    assert_eq!(items, (0..100).collect::<Vec<_>>());
    assert_eq!(transport.pages(), vec![1, 2]);
}

#[tokio::test]
async fn test_address_utxos_asset_all_not_found_mid_batch() {
    let transport = Arc::new(FnTransport::new(full_page_then_not_found));
    let api = api_over(&transport);

    let items: Vec<u32> = assert_ok!(
        api.addresses_utxos_asset_all("addr1q", "policyasset", None)
            .await
    );

    assert_eq!(items.len(), 100);
    assert!(transport
        .requests()
        .iter()
        .all(|r| r.path == "addresses/addr1q/utxos/policyasset"));
}

#[tokio::test]
async fn test_address_utxos_other_errors_propagate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/addresses/addr1x/utxos"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "status_code": 403,
            "error": "Forbidden",
            "message": "Invalid project token."
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);

    let err = assert_err!(api.addresses_utxos::<JsonValue>("addr1x", None).await);
    assert!(err.is_forbidden());
}

#[tokio::test]
async fn test_account_not_found_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/accounts/stake1missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status_code": 404,
            "error": "Not Found",
            "message": "The requested component has not been found."
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);

    let err = api.accounts::<JsonValue>("stake1missing").await.unwrap_err();
    let api_error = err.as_api_error().unwrap();
    assert_eq!(api_error.status_code, 404);
    assert_eq!(api_error.error, "Not Found");
    assert!(api_error.url.ends_with("/accounts/stake1missing"));
}

#[tokio::test]
async fn test_tx_submit_posts_cbor() {
    let server = MockServer::start().await;
    let tx = vec![0x84, 0xa4, 0x00, 0x81];
    Mock::given(method("POST"))
        .and(path("/tx/submit"))
        .and(header("content-type", "application/cbor"))
        .and(header("project_id", "mainnetTest"))
        .and(body_bytes(tx.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("f6a3b1c0")))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);

    let hash = api.tx_submit(tx).await.unwrap();
    assert_eq!(hash, "f6a3b1c0");
}

#[tokio::test]
async fn test_tx_submit_hex() {
    let transport = Arc::new(FnTransport::new(|_| Ok(Bytes::from_static(b"\"abcd\""))));
    let api = api_over(&transport);

    let hash = api.tx_submit_hex(" 84a400 ").await.unwrap();
    assert_eq!(hash, "abcd");

    let request = last_request(&transport);
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "tx/submit");
    assert_eq!(request.body, crate::http::Body::Cbor(vec![0x84, 0xa4, 0x00]));
}

#[tokio::test]
async fn test_tx_submit_hex_rejects_invalid_input() {
    let transport = echo_transport();
    let api = api_over(&transport);

    let err = api.tx_submit_hex("not hex").await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { ref name, .. } if name == "transaction"));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_tx_submit_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tx/submit"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status_code": 400,
            "error": "Bad Request",
            "message": "\"transaction submit error ShelleyTxValidationError\""
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);

    let err = api.tx_submit(vec![0u8; 4]).await.unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_health() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "is_healthy": true })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/health/clock"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "server_time": 1603400958947u64 })))
        .mount(&server)
        .await;

    let api = api_for(&server);

    assert_eq!(api.health().await.unwrap(), Health { is_healthy: true });
    let clock: JsonValue = api.health_clock().await.unwrap();
    assert_eq!(clock["server_time"], 1603400958947u64);
}

#[tokio::test]
async fn test_blocks_latest_txs_all_against_server() {
    let server = MockServer::start().await;
    let first: Vec<String> = (0..100).map(|i| format!("tx{i}")).collect();
    Mock::given(method("GET"))
        .and(path("/blocks/latest/txs"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&first))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/blocks/latest/txs"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["tx100"])))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let options = PaginationOptions::default().batch_size(1);

    let hashes: Vec<String> = api.blocks_latest_txs_all(Some(&options)).await.unwrap();
    assert_eq!(hashes.len(), 101);
    assert_eq!(hashes.last().unwrap(), "tx100");
}
