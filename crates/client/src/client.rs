// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::ClientError;
use alloy::primitives::Address;
use alloy::providers::DynProvider;
use alloy::signers::local::PrivateKeySigner;
use fhevm_config::NetworkConfig;
use fhevm_decryption::DecryptionService;
use fhevm_encryption::EncryptionService;
use fhevm_engine::{EngineConfig, EngineFactory, SharedEngine};
use fhevm_evm::{ChainConnection, ContractService};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// Everything a client needs at construction. Provider and signer may both
/// be absent (a browser wallet connecting later); the engine factory is the
/// injected source of the encryption primitive.
pub struct ClientConfig {
    pub network: NetworkConfig,
    pub provider: Option<DynProvider>,
    pub signer: Option<PrivateKeySigner>,
    pub engine_factory: Arc<dyn EngineFactory>,
}

/// Framework-agnostic FHEVM client. Construct, `initialize()` once, then
/// reach the services through the accessors.
pub struct FhevmClient {
    network: NetworkConfig,
    connection: ChainConnection,
    engine: SharedEngine,
    engine_factory: Arc<dyn EngineFactory>,
    init_lock: Mutex<()>,
    encryption: EncryptionService,
    decryption: DecryptionService,
    contracts: ContractService,
}

impl FhevmClient {
    pub fn new(config: ClientConfig) -> Self {
        let connection = ChainConnection::new(config.provider, config.signer);
        let engine = SharedEngine::new();
        Self {
            encryption: EncryptionService::new(engine.clone()),
            decryption: DecryptionService::new(&config.network, connection.clone()),
            contracts: ContractService::new(connection.clone()),
            network: config.network,
            connection,
            engine,
            engine_factory: config.engine_factory,
            init_lock: Mutex::new(()),
        }
    }

    /// Bring up the encryption engine. Idempotent: once ready, later calls
    /// return immediately without touching the factory. A failure leaves the
    /// client uninitialized and may simply be retried.
    pub async fn initialize(&self) -> Result<(), ClientError> {
        let _guard = self.init_lock.lock().await;
        if self.engine.is_ready().await {
            return Ok(());
        }

        let engine_config = EngineConfig {
            chain_id: self.network.chain_id(),
            network_url: self.network.rpc_url().to_string(),
            gateway_url: self.network.gateway_url().map(|url| url.to_string()),
            acl_address: self.network.acl_address(),
            kms_signer_address: self.network.kms_signer_address(),
        };
        let engine = self.engine_factory.create_engine(&engine_config).await?;
        self.engine.set(engine).await;

        info!(chain_id = self.network.chain_id(), "FHEVM client initialized");
        Ok(())
    }

    pub async fn is_ready(&self) -> bool {
        self.engine.is_ready().await
    }

    /// Swap the ledger capabilities, e.g. when a wallet connects. Engine
    /// readiness is untouched: encryption and decryption keep working
    /// independent of ledger connectivity.
    pub async fn update_provider(&self, provider: DynProvider, signer: Option<PrivateKeySigner>) {
        self.connection.update(provider, signer).await;
    }

    /// Address of the connected signer.
    pub async fn get_address(&self) -> Result<Address, ClientError> {
        self.connection
            .signer_address()
            .await
            .ok_or(ClientError::NoSigner)
    }

    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }

    pub fn encryption(&self) -> &EncryptionService {
        &self.encryption
    }

    pub fn decryption(&self) -> &DecryptionService {
        &self.decryption
    }

    pub fn contracts(&self) -> &ContractService {
        &self.contracts
    }
}
