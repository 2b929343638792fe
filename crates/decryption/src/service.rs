// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{auth, DecryptRequest, DecryptionError, GatewayClient};
use alloy::primitives::{Address, U256};
use fhevm_config::NetworkConfig;
use fhevm_evm::ChainConnection;
use futures::stream::{self, StreamExt};
use tracing::warn;

/// Independent decrypt requests resolved in flight at once during a batch.
/// Result order stays positional regardless of completion order.
const MAX_CONCURRENT_DECRYPTS: usize = 4;

/// Recovers plaintext behind ciphertext handles, signing per-user
/// authorizations where confidentiality requires them.
#[derive(Clone)]
pub struct DecryptionService {
    chain_id: u64,
    gateway: Option<GatewayClient>,
    connection: ChainConnection,
}

impl DecryptionService {
    pub fn new(network: &NetworkConfig, connection: ChainConnection) -> Self {
        Self {
            chain_id: network.chain_id(),
            gateway: network.gateway_url().cloned().map(GatewayClient::new),
            connection,
        }
    }

    fn gateway(&self) -> Result<&GatewayClient, DecryptionError> {
        self.gateway
            .as_ref()
            .ok_or(DecryptionError::GatewayNotConfigured)
    }

    /// Decrypt a user-owned value. Builds and signs the typed-data
    /// authorization with the connection's signer, then round-trips it
    /// through the gateway. `user_address` defaults to the signer's own
    /// address.
    pub async fn user_decrypt(
        &self,
        contract_address: Address,
        handle: U256,
        user_address: Option<Address>,
    ) -> Result<U256, DecryptionError> {
        let signer = self
            .connection
            .signer()
            .await
            .ok_or(DecryptionError::NoSigner)?;
        let user = user_address.unwrap_or_else(|| signer.address());

        let signature =
            auth::sign_decrypt_authorization(&signer, self.chain_id, contract_address, handle, user)
                .await?;

        self.gateway()?
            .decrypt(&DecryptRequest::authorized(
                contract_address,
                handle,
                user,
                signature,
            ))
            .await
    }

    /// Decrypt a value whose confidentiality is already waived. No signer
    /// involved; the gateway request carries neither user nor signature.
    pub async fn public_decrypt(
        &self,
        contract_address: Address,
        handle: U256,
    ) -> Result<U256, DecryptionError> {
        self.gateway()?
            .decrypt(&DecryptRequest::public(contract_address, handle))
            .await
    }

    /// Decrypt several handles, preserving input order in the result. A
    /// handle that fails to decrypt is logged and substituted with zero
    /// rather than failing the batch; callers that must distinguish zero
    /// from failure should call [`Self::user_decrypt`] per handle.
    pub async fn batch_decrypt(
        &self,
        contract_address: Address,
        handles: &[U256],
        user_address: Option<Address>,
    ) -> Vec<U256> {
        stream::iter(handles.iter().copied().map(|handle| async move {
            match self.user_decrypt(contract_address, handle, user_address).await {
                Ok(value) => value,
                Err(err) => {
                    warn!(%handle, %err, "failed to decrypt handle, substituting zero");
                    U256::ZERO
                }
            }
        }))
        .buffered(MAX_CONCURRENT_DECRYPTS)
        .collect()
        .await
    }
}
