// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use alloy::primitives::{address, U256};
use alloy::signers::local::PrivateKeySigner;
use fhevm_client::{ClientConfig, FhevmClient};
use fhevm_config::NetworkConfig;
use fhevm_encryption::InputValue;
use fhevm_engine::EncryptionType;
use alloy::providers::{Provider, ProviderBuilder};
use fhevm_evm::encrypted_call_args;
use fhevm_test_helpers::{type_tag, GatewayResponse, MockEngineFactory, StubGateway};
use std::sync::Arc;

async fn ready_client() -> FhevmClient {
    let network = NetworkConfig::new(11155111, "https://example")
        .unwrap()
        .with_gateway_url("https://gw")
        .unwrap();

    let client = FhevmClient::new(ClientConfig {
        network,
        provider: None,
        signer: None,
        engine_factory: Arc::new(MockEngineFactory::new()),
    });
    client.initialize().await.unwrap();
    client
}

#[tokio::test]
async fn encrypts_a_single_value_after_initialization() {
    let client = ready_client().await;

    let ciphertext = client
        .encryption()
        .encrypt_value(42u32, EncryptionType::Uint32)
        .await
        .unwrap();

    assert!(!ciphertext.is_empty());
}

#[tokio::test]
async fn encrypts_a_mixed_batch_in_declaration_order() {
    let client = ready_client().await;
    let contract = address!("0000000000000000000000000000000000000c0d");
    let user = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

    let encrypted = client
        .encryption()
        .encrypt_inputs(
            contract,
            user,
            &[
                InputValue::new(100u32, EncryptionType::Uint32),
                InputValue::new(true, EncryptionType::Bool),
            ],
        )
        .await
        .unwrap();

    assert_eq!(encrypted.handles.len(), 2);
    assert_eq!(encrypted.handles[0][1], type_tag(EncryptionType::Uint32));
    assert_eq!(encrypted.handles[1][1], type_tag(EncryptionType::Bool));

    // The batch feeds straight into an encrypted contract call: proof
    // first, handles in produced order.
    let args = encrypted_call_args(&encrypted);
    assert_eq!(args.len(), 3);
}

#[tokio::test]
async fn decrypts_a_batch_through_the_gateway_with_zero_substitution() {
    let gateway = StubGateway::spawn(|body| {
        if body["handle"] == "2" {
            GatewayResponse::error(500, "unavailable")
        } else {
            GatewayResponse::decrypted("55")
        }
    })
    .await;

    let network = NetworkConfig::new(11155111, "https://example")
        .unwrap()
        .with_gateway_url(&gateway.url())
        .unwrap();
    let client = FhevmClient::new(ClientConfig {
        network,
        provider: None,
        signer: Some(PrivateKeySigner::random()),
        engine_factory: Arc::new(MockEngineFactory::new()),
    });
    client.initialize().await.unwrap();

    let contract = address!("339EcE85B9E11a3A3AA557582784a15d7F82AAf2");
    let values = client
        .decryption()
        .batch_decrypt(contract, &[U256::from(1u64), U256::from(2u64)], None)
        .await;

    assert_eq!(values, vec![U256::from(55u64), U256::ZERO]);
}

#[tokio::test]
async fn services_share_the_connection_swap() {
    let client = ready_client().await;
    let contract = address!("339EcE85B9E11a3A3AA557582784a15d7F82AAf2");
    let abi = alloy::json_abi::JsonAbi::parse(["function getValue() view returns (uint256)"])
        .unwrap();

    // No provider yet: contract binding construction fails.
    assert!(client.contracts().get_contract(contract, &abi).await.is_err());

    let provider = ProviderBuilder::new()
        .connect_http("http://127.0.0.1:8545".parse().unwrap())
        .erased();
    client.update_provider(provider, None).await;

    assert!(client.contracts().get_contract(contract, &abi).await.is_ok());
}
