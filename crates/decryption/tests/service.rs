// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use alloy::primitives::{address, U256};
use alloy::signers::local::PrivateKeySigner;
use fhevm_config::NetworkConfig;
use fhevm_decryption::{DecryptionError, DecryptionService};
use fhevm_evm::ChainConnection;
use fhevm_test_helpers::{GatewayResponse, StubGateway};

const CONTRACT: alloy::primitives::Address = address!("339EcE85B9E11a3A3AA557582784a15d7F82AAf2");

fn service_with_gateway(
    gateway_url: &str,
    signer: Option<PrivateKeySigner>,
) -> DecryptionService {
    let network = NetworkConfig::new(11155111, "https://rpc.example.org")
        .unwrap()
        .with_gateway_url(gateway_url)
        .unwrap();
    DecryptionService::new(&network, ChainConnection::new(None, signer))
}

#[tokio::test]
async fn user_decrypt_round_trips_through_the_gateway() {
    let gateway = StubGateway::spawn(|_| GatewayResponse::decrypted("12345")).await;
    let signer = PrivateKeySigner::random();
    let signer_address = signer.address();
    let service = service_with_gateway(&gateway.url(), Some(signer));

    let value = service
        .user_decrypt(CONTRACT, U256::from(42u64), None)
        .await
        .unwrap();
    assert_eq!(value, U256::from(12345u64));

    let requests = gateway.requests();
    assert_eq!(requests.len(), 1);
    let body = requests[0].as_object().unwrap();
    assert_eq!(body["contractAddress"], CONTRACT.to_string());
    assert_eq!(body["handle"], "42");
    assert_eq!(body["userAddress"], signer_address.to_string());
    let signature = body["signature"].as_str().unwrap();
    assert!(signature.starts_with("0x"));
    assert_eq!(signature.len(), 2 + 65 * 2);
}

#[tokio::test]
async fn public_decrypt_omits_user_and_signature() {
    let gateway = StubGateway::spawn(|_| GatewayResponse::decrypted("7")).await;
    let service = service_with_gateway(&gateway.url(), None);

    let value = service
        .public_decrypt(CONTRACT, U256::from(9u64))
        .await
        .unwrap();
    assert_eq!(value, U256::from(7u64));

    let body = gateway.requests()[0].as_object().unwrap().clone();
    assert!(!body.contains_key("userAddress"));
    assert!(!body.contains_key("signature"));
}

#[tokio::test]
async fn user_decrypt_without_signer_makes_no_network_call() {
    let gateway = StubGateway::spawn(|_| GatewayResponse::decrypted("1")).await;
    let service = service_with_gateway(&gateway.url(), None);

    let err = service
        .user_decrypt(CONTRACT, U256::from(1u64), None)
        .await
        .unwrap_err();

    assert!(matches!(err, DecryptionError::NoSigner));
    assert!(gateway.requests().is_empty());
}

#[tokio::test]
async fn missing_gateway_configuration_fails_fast() {
    let network = NetworkConfig::new(11155111, "https://rpc.example.org").unwrap();
    let service = DecryptionService::new(
        &network,
        ChainConnection::new(None, Some(PrivateKeySigner::random())),
    );

    let err = service
        .user_decrypt(CONTRACT, U256::from(1u64), None)
        .await
        .unwrap_err();
    assert!(matches!(err, DecryptionError::GatewayNotConfigured));

    let err = service
        .public_decrypt(CONTRACT, U256::from(1u64))
        .await
        .unwrap_err();
    assert!(matches!(err, DecryptionError::GatewayNotConfigured));
}

#[tokio::test]
async fn gateway_failures_carry_the_status() {
    let gateway = StubGateway::spawn(|_| GatewayResponse::error(403, "not authorized")).await;
    let service = service_with_gateway(&gateway.url(), Some(PrivateKeySigner::random()));

    let err = service
        .user_decrypt(CONTRACT, U256::from(5u64), None)
        .await
        .unwrap_err();
    assert!(matches!(err, DecryptionError::Gateway { status: 403, .. }));
}

#[tokio::test]
async fn batch_decrypt_substitutes_zero_for_failures() {
    let gateway = StubGateway::spawn(|body| {
        if body["handle"] == "2" {
            GatewayResponse::error(500, "decryption oracle unavailable")
        } else {
            GatewayResponse::decrypted("111")
        }
    })
    .await;
    let service = service_with_gateway(&gateway.url(), Some(PrivateKeySigner::random()));

    let handles = [U256::from(1u64), U256::from(2u64)];
    let values = service.batch_decrypt(CONTRACT, &handles, None).await;

    assert_eq!(values, vec![U256::from(111u64), U256::ZERO]);
}

#[tokio::test]
async fn batch_decrypt_preserves_input_order() {
    let gateway = StubGateway::spawn(|body| {
        // Echo each handle back as its decrypted value.
        let handle = body["handle"].as_str().unwrap().to_string();
        GatewayResponse::decrypted(&handle)
    })
    .await;
    let service = service_with_gateway(&gateway.url(), Some(PrivateKeySigner::random()));

    let handles: Vec<U256> = (1u64..=9).map(U256::from).collect();
    let values = service.batch_decrypt(CONTRACT, &handles, None).await;
    assert_eq!(values, handles);
}
