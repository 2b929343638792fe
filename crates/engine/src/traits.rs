// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{EncryptedInput, EncryptionType, EngineError};
use alloy::primitives::{Address, Bytes, U256};
use async_trait::async_trait;
use std::sync::Arc;

/// Parameters handed to an [`EngineFactory`] when the client initializes.
/// Derived from the network configuration; the engine decides what it needs.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub chain_id: u64,
    pub network_url: String,
    pub gateway_url: Option<String>,
    pub acl_address: Option<Address>,
    pub kms_signer_address: Option<Address>,
}

/// The single-value and batch entry points of the encryption primitive.
#[async_trait]
pub trait EncryptionEngine: Send + Sync {
    /// Encrypt one numeric value under the given type tag.
    async fn encrypt(
        &self,
        value: U256,
        encryption_type: EncryptionType,
    ) -> Result<Bytes, EngineError>;

    /// Open a fresh input builder scoped to the (contract, user) pair. The
    /// proof produced on finalize is bound to exactly that pair.
    fn create_encrypted_input(
        &self,
        contract_address: Address,
        user_address: Address,
    ) -> Box<dyn EncryptedInputBuilder>;
}

/// Accumulates typed values and finalizes them into handles plus one proof.
/// Values are encrypted in insertion order; the handle sequence of the
/// result matches it position for position.
#[async_trait]
pub trait EncryptedInputBuilder: Send {
    fn add_u8(&mut self, value: u8);
    fn add_u16(&mut self, value: u16);
    fn add_u32(&mut self, value: u32);
    fn add_u64(&mut self, value: u64);
    fn add_u128(&mut self, value: u128);
    fn add_bool(&mut self, value: bool);
    fn add_address(&mut self, value: Address);

    /// Consume the builder, producing the batch.
    async fn encrypt(self: Box<Self>) -> Result<EncryptedInput, EngineError>;
}

/// Obtains a concrete engine for a network. Injected at client construction
/// so the core never decides how an engine is loaded.
#[async_trait]
pub trait EngineFactory: Send + Sync {
    async fn create_engine(
        &self,
        config: &EngineConfig,
    ) -> Result<Arc<dyn EncryptionEngine>, EngineError>;
}
