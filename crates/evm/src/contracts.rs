// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{events, ChainConnection, ContractError, EventSubscription};
use alloy::{
    contract::{ContractInstance, Interface},
    dyn_abi::DynSolValue,
    json_abi::JsonAbi,
    network::EthereumWallet,
    primitives::{Address, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::{BlockNumberOrTag, Filter, Log, TransactionReceipt},
};
use fhevm_engine::EncryptedInput;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Optional transaction parameters merged into a write call.
#[derive(Clone, Debug, Default)]
pub struct CallOptions {
    pub gas_limit: Option<u64>,
    pub value: Option<U256>,
    pub nonce: Option<u64>,
}

/// A cached association between a contract address and a callable handle.
/// Built with the signer when one is present, the read-only provider
/// otherwise; never mutated in place — a signer swap requires a cache clear
/// so stale bindings keep serving in-flight calls consistently.
#[derive(Debug)]
pub struct ContractBinding {
    address: Address,
    write_capable: bool,
    contract: ContractInstance<DynProvider>,
}

impl ContractBinding {
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn write_capable(&self) -> bool {
        self.write_capable
    }

    pub fn contract(&self) -> &ContractInstance<DynProvider> {
        &self.contract
    }
}

/// Reassemble an encrypted input batch into call arguments. The proof is
/// always the first positional argument, handles follow in their produced
/// order; the receiving contract method signature depends on exactly this
/// layout.
pub fn encrypted_call_args(input: &EncryptedInput) -> Vec<DynSolValue> {
    let mut args = Vec::with_capacity(input.handles.len() + 1);
    args.push(DynSolValue::Bytes(input.input_proof.to_vec()));
    args.extend(
        input
            .handles
            .iter()
            .map(|handle| DynSolValue::Bytes(handle.to_vec())),
    );
    args
}

/// Binds addresses to callable contract handles and dispatches reads,
/// writes, and encrypted writes.
#[derive(Clone, Default)]
pub struct ContractService {
    connection: ChainConnection,
    bindings: Arc<RwLock<HashMap<String, Arc<ContractBinding>>>>,
}

impl ContractService {
    pub fn new(connection: ChainConnection) -> Self {
        Self {
            connection,
            bindings: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Return the cached binding for the address, constructing one on first
    /// access. The cache key is the lowercase hex address, so differently
    /// cased spellings of one address share a binding.
    pub async fn get_contract(
        &self,
        address: Address,
        abi: &JsonAbi,
    ) -> Result<Arc<ContractBinding>, ContractError> {
        let key = format!("{address:#x}");

        if let Some(binding) = self.bindings.read().await.get(&key) {
            return Ok(binding.clone());
        }

        let provider = self
            .connection
            .provider()
            .await
            .ok_or(ContractError::NoConnection)?;
        let signer = self.connection.signer().await;

        let mut bindings = self.bindings.write().await;
        // A concurrent caller may have built the binding while we waited.
        if let Some(binding) = bindings.get(&key) {
            return Ok(binding.clone());
        }

        let write_capable = signer.is_some();
        let executor = match signer {
            Some(signer) => ProviderBuilder::new()
                .wallet(EthereumWallet::from(signer))
                .connect_provider(provider)
                .erased(),
            None => provider,
        };

        let binding = Arc::new(ContractBinding {
            address,
            write_capable,
            contract: ContractInstance::new(address, executor, Interface::new(abi.clone())),
        });
        bindings.insert(key, binding.clone());
        Ok(binding)
    }

    /// Invoke a non-mutating method. The decoded values are returned as-is;
    /// no shape validation happens at this layer.
    pub async fn read(
        &self,
        address: Address,
        abi: &JsonAbi,
        method: &str,
        args: &[DynSolValue],
    ) -> Result<Vec<DynSolValue>, ContractError> {
        let binding = self.get_contract(address, abi).await?;
        Ok(binding.contract.function(method, args)?.call().await?)
    }

    /// Invoke a mutating method and wait for the transaction to be included.
    pub async fn write(
        &self,
        address: Address,
        abi: &JsonAbi,
        method: &str,
        args: &[DynSolValue],
        options: CallOptions,
    ) -> Result<TransactionReceipt, ContractError> {
        let binding = self.get_contract(address, abi).await?;
        let mut call = binding.contract.function(method, args)?;
        if let Some(gas_limit) = options.gas_limit {
            call = call.gas(gas_limit);
        }
        if let Some(value) = options.value {
            call = call.value(value);
        }
        if let Some(nonce) = options.nonce {
            call = call.nonce(nonce);
        }
        let receipt = call.send().await?.get_receipt().await?;
        Ok(receipt)
    }

    /// Invoke a mutating method whose arguments are an encrypted input
    /// batch, assembled as `[proof, handle_0 .. handle_n-1]`.
    pub async fn call_with_encryption(
        &self,
        address: Address,
        abi: &JsonAbi,
        method: &str,
        encrypted_input: &EncryptedInput,
        options: CallOptions,
    ) -> Result<TransactionReceipt, ContractError> {
        let args = encrypted_call_args(encrypted_input);
        self.write(address, abi, method, &args, options).await
    }

    /// Subscribe to an event by name. The returned subscription detaches
    /// exactly this callback when unsubscribed; the underlying provider must
    /// support log subscriptions (a websocket endpoint).
    pub async fn on_event<F>(
        &self,
        address: Address,
        abi: &JsonAbi,
        event_name: &str,
        callback: F,
    ) -> Result<EventSubscription, ContractError>
    where
        F: Fn(Log) + Send + Sync + 'static,
    {
        let binding = self.get_contract(address, abi).await?;
        let selector = events::event_selector(abi, event_name)?;
        let filter = Filter::new()
            .address(address)
            .event_signature(selector)
            .from_block(BlockNumberOrTag::Latest);
        events::subscribe(binding.contract.provider().clone(), filter, callback).await
    }

    /// Query historical logs for an event over the inclusive block range,
    /// defaulting to genesis through the latest block.
    pub async fn get_past_events(
        &self,
        address: Address,
        abi: &JsonAbi,
        event_name: &str,
        from_block: Option<u64>,
        to_block: Option<u64>,
    ) -> Result<Vec<Log>, ContractError> {
        let binding = self.get_contract(address, abi).await?;
        let selector = events::event_selector(abi, event_name)?;
        let filter = Filter::new()
            .address(address)
            .event_signature(selector)
            .from_block(from_block.unwrap_or(0))
            .to_block(
                to_block
                    .map(BlockNumberOrTag::Number)
                    .unwrap_or(BlockNumberOrTag::Latest),
            );
        Ok(binding.contract.provider().get_logs(&filter).await?)
    }

    /// Drop every cached binding. Needed after a signer swap so bindings can
    /// be rebuilt with the upgraded capability.
    pub async fn clear_cache(&self) {
        self.bindings.write().await.clear();
    }
}
