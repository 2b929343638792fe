// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use alloy::providers::{Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use fhevm_client::{ClientConfig, ClientError, FhevmClient};
use fhevm_config::NetworkConfig;
use fhevm_test_helpers::MockEngineFactory;
use std::sync::Arc;

fn test_network() -> NetworkConfig {
    NetworkConfig::new(11155111, "https://example")
        .unwrap()
        .with_gateway_url("https://gw")
        .unwrap()
}

fn client_with_factory(factory: Arc<MockEngineFactory>) -> FhevmClient {
    FhevmClient::new(ClientConfig {
        network: test_network(),
        provider: None,
        signer: None,
        engine_factory: factory,
    })
}

#[tokio::test]
async fn starts_uninitialized_and_becomes_ready() {
    let client = client_with_factory(Arc::new(MockEngineFactory::new()));

    assert!(!client.is_ready().await);
    client.initialize().await.unwrap();
    assert!(client.is_ready().await);
}

#[tokio::test]
async fn initialize_is_idempotent() {
    let factory = Arc::new(MockEngineFactory::new());
    let client = client_with_factory(factory.clone());

    client.initialize().await.unwrap();
    client.initialize().await.unwrap();

    // The engine is created exactly once per successful initialization.
    assert_eq!(factory.created(), 1);
}

#[tokio::test]
async fn failed_initialization_is_retriable() {
    let factory = Arc::new(MockEngineFactory::failing(1));
    let client = client_with_factory(factory.clone());

    let err = client.initialize().await.unwrap_err();
    assert!(matches!(err, ClientError::Initialization(_)));
    assert!(!client.is_ready().await);

    // Nothing persisted an errored state; a retry succeeds.
    client.initialize().await.unwrap();
    assert!(client.is_ready().await);
    assert_eq!(factory.created(), 1);
}

#[tokio::test]
async fn provider_swap_does_not_touch_readiness() {
    let client = client_with_factory(Arc::new(MockEngineFactory::new()));
    client.initialize().await.unwrap();

    let provider = ProviderBuilder::new()
        .connect_http("http://127.0.0.1:8545".parse().unwrap())
        .erased();
    let signer = PrivateKeySigner::random();
    let signer_address = signer.address();
    client.update_provider(provider, Some(signer)).await;

    assert!(client.is_ready().await);
    assert_eq!(client.get_address().await.unwrap(), signer_address);
}

#[tokio::test]
async fn get_address_requires_a_signer() {
    let client = client_with_factory(Arc::new(MockEngineFactory::new()));

    let err = client.get_address().await.unwrap_err();
    assert!(matches!(err, ClientError::NoSigner));
}
