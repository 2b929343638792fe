// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{ClientConfig, ClientError, FhevmClient};
use fhevm_config::NetworkConfig;
use fhevm_engine::EngineFactory;
use std::sync::Arc;

/// Construct a client and initialize it in one step.
pub async fn create_client(config: ClientConfig) -> Result<FhevmClient, ClientError> {
    let client = FhevmClient::new(config);
    client.initialize().await?;
    Ok(client)
}

/// Shorthand for the common offline-construction case: no provider or
/// signer yet, just a network and an engine.
pub async fn init_client(
    chain_id: u64,
    rpc_url: &str,
    gateway_url: Option<&str>,
    engine_factory: Arc<dyn EngineFactory>,
) -> Result<FhevmClient, ClientError> {
    let mut network = NetworkConfig::new(chain_id, rpc_url)?;
    if let Some(gateway_url) = gateway_url {
        network = network.with_gateway_url(gateway_url)?;
    }

    create_client(ClientConfig {
        network,
        provider: None,
        signer: None,
        engine_factory,
    })
    .await
}
