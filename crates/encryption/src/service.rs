// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{convert, EncryptionError};
use alloy::primitives::{Address, Bytes};
use fhevm_engine::{
    EncryptedInput, EncryptedInputBuilder, EncryptionEngine, EncryptionType, PlaintextValue,
    SharedEngine,
};
use std::sync::Arc;
use tracing::debug;

/// One (value, type) pair destined for an encrypted input batch.
#[derive(Clone, Copy, Debug)]
pub struct InputValue {
    pub value: PlaintextValue,
    pub encryption_type: EncryptionType,
}

impl InputValue {
    pub fn new(value: impl Into<PlaintextValue>, encryption_type: EncryptionType) -> Self {
        Self {
            value: value.into(),
            encryption_type,
        }
    }
}

/// Turns typed plaintext into ciphertext through the shared engine handle.
#[derive(Clone)]
pub struct EncryptionService {
    engine: SharedEngine,
}

impl EncryptionService {
    pub fn new(engine: SharedEngine) -> Self {
        Self { engine }
    }

    async fn engine(&self) -> Result<Arc<dyn EncryptionEngine>, EncryptionError> {
        self.engine.get().await.ok_or(EncryptionError::NotInitialized)
    }

    /// Encrypt a single value under the given type tag.
    pub async fn encrypt_value(
        &self,
        value: impl Into<PlaintextValue>,
        encryption_type: EncryptionType,
    ) -> Result<Bytes, EncryptionError> {
        let engine = self.engine().await?;
        let numeric = convert::to_numeric(&value.into(), encryption_type)?;
        Ok(engine.encrypt(numeric, encryption_type).await?)
    }

    /// Open an input builder scoped to the (contract, user) pair.
    pub async fn create_encrypted_input(
        &self,
        contract_address: Address,
        user_address: Address,
    ) -> Result<Box<dyn EncryptedInputBuilder>, EncryptionError> {
        let engine = self.engine().await?;
        Ok(engine.create_encrypted_input(contract_address, user_address))
    }

    /// Encrypt several values into a single batch. Inputs are added in the
    /// caller's order; the handle sequence of the result matches it, which
    /// is what binds the batch to the receiving method's parameter order.
    pub async fn encrypt_inputs(
        &self,
        contract_address: Address,
        user_address: Address,
        inputs: &[InputValue],
    ) -> Result<EncryptedInput, EncryptionError> {
        let mut builder = self
            .create_encrypted_input(contract_address, user_address)
            .await?;

        for input in inputs {
            convert::add_to_builder(builder.as_mut(), &input.value, input.encryption_type)?;
        }

        let encrypted = builder.encrypt().await?;
        debug!(
            contract = %contract_address,
            values = inputs.len(),
            "encrypted input batch finalized"
        );
        Ok(encrypted)
    }
}
