// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use alloy::primitives::{Address, Bytes, U256};
use async_trait::async_trait;
use fhevm_engine::{
    EncryptedInput, EncryptedInputBuilder, EncryptionEngine, EncryptionType, EngineConfig,
    EngineError, EngineFactory,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Stable one-byte tag per encryption type, embedded in mock ciphertexts so
/// tests can tell which accessor produced which handle.
pub fn type_tag(ty: EncryptionType) -> u8 {
    match ty {
        EncryptionType::Uint8 => 1,
        EncryptionType::Uint16 => 2,
        EncryptionType::Uint32 => 3,
        EncryptionType::Uint64 => 4,
        EncryptionType::Uint128 => 5,
        EncryptionType::Bool => 6,
        EncryptionType::Address => 7,
    }
}

fn mock_ciphertext(index: u8, ty: EncryptionType, value: U256) -> Bytes {
    let mut out = [0u8; 32];
    out[0] = index;
    out[1] = type_tag(ty);
    out[2..].copy_from_slice(&value.to_be_bytes::<32>()[2..]);
    Bytes::from(out.to_vec())
}

/// Deterministic stand-in for the encryption engine. Records every call so
/// tests can assert on ordering and arguments.
#[derive(Default)]
pub struct MockEngine {
    calls: Mutex<Vec<(U256, EncryptionType)>>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every (value, type) pair `encrypt` has been called with, in order.
    pub fn encrypt_calls(&self) -> Vec<(U256, EncryptionType)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl EncryptionEngine for MockEngine {
    async fn encrypt(
        &self,
        value: U256,
        encryption_type: EncryptionType,
    ) -> Result<Bytes, EngineError> {
        self.calls.lock().unwrap().push((value, encryption_type));
        Ok(mock_ciphertext(0, encryption_type, value))
    }

    fn create_encrypted_input(
        &self,
        contract_address: Address,
        user_address: Address,
    ) -> Box<dyn EncryptedInputBuilder> {
        Box::new(MockBuilder {
            contract_address,
            user_address,
            adds: Vec::new(),
        })
    }
}

struct MockBuilder {
    contract_address: Address,
    user_address: Address,
    adds: Vec<(EncryptionType, U256)>,
}

#[async_trait]
impl EncryptedInputBuilder for MockBuilder {
    fn add_u8(&mut self, value: u8) {
        self.adds.push((EncryptionType::Uint8, U256::from(value)));
    }

    fn add_u16(&mut self, value: u16) {
        self.adds.push((EncryptionType::Uint16, U256::from(value)));
    }

    fn add_u32(&mut self, value: u32) {
        self.adds.push((EncryptionType::Uint32, U256::from(value)));
    }

    fn add_u64(&mut self, value: u64) {
        self.adds.push((EncryptionType::Uint64, U256::from(value)));
    }

    fn add_u128(&mut self, value: u128) {
        self.adds.push((EncryptionType::Uint128, U256::from(value)));
    }

    fn add_bool(&mut self, value: bool) {
        self.adds.push((EncryptionType::Bool, U256::from(value as u8)));
    }

    fn add_address(&mut self, value: Address) {
        self.adds.push((
            EncryptionType::Address,
            U256::from_be_slice(value.as_slice()),
        ));
    }

    async fn encrypt(self: Box<Self>) -> Result<EncryptedInput, EngineError> {
        let handles = self
            .adds
            .iter()
            .enumerate()
            .map(|(i, (ty, value))| mock_ciphertext(i as u8, *ty, *value))
            .collect();

        // The proof carries the (contract, user) pair it was created for,
        // so tests can check the batch is bound to exactly that pair.
        let mut proof = Vec::with_capacity(40);
        proof.extend_from_slice(self.contract_address.as_slice());
        proof.extend_from_slice(self.user_address.as_slice());

        Ok(EncryptedInput {
            handles,
            input_proof: Bytes::from(proof),
        })
    }
}

/// Factory returning [`MockEngine`]s, optionally failing a scripted number
/// of times first so lifecycle retries can be exercised.
#[derive(Default)]
pub struct MockEngineFactory {
    failures_remaining: AtomicUsize,
    created: AtomicUsize,
}

impl MockEngineFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(times: usize) -> Self {
        Self {
            failures_remaining: AtomicUsize::new(times),
            created: AtomicUsize::new(0),
        }
    }

    /// How many engines this factory has successfully produced.
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EngineFactory for MockEngineFactory {
    async fn create_engine(
        &self,
        _config: &EngineConfig,
    ) -> Result<Arc<dyn EncryptionEngine>, EngineError> {
        if self
            .failures_remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return Err(EngineError::Initialization(
                "mock engine unavailable".to_string(),
            ));
        }
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(MockEngine::new()))
    }
}
