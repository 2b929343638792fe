// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use alloy::primitives::Address;
use alloy::providers::DynProvider;
use alloy::signers::local::PrivateKeySigner;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The swappable ledger capability pair: a read-only provider and an
/// optional signer. Services hold clones of this handle, so swapping the
/// pair (a wallet connecting after startup) is visible everywhere without
/// touching engine readiness or rebuilding services.
#[derive(Clone, Default)]
pub struct ChainConnection {
    provider: Arc<RwLock<Option<DynProvider>>>,
    signer: Arc<RwLock<Option<PrivateKeySigner>>>,
}

impl ChainConnection {
    pub fn new(provider: Option<DynProvider>, signer: Option<PrivateKeySigner>) -> Self {
        Self {
            provider: Arc::new(RwLock::new(provider)),
            signer: Arc::new(RwLock::new(signer)),
        }
    }

    /// Replace both capabilities. Passing `None` for the signer clears it,
    /// matching a wallet disconnect.
    pub async fn update(&self, provider: DynProvider, signer: Option<PrivateKeySigner>) {
        *self.provider.write().await = Some(provider);
        *self.signer.write().await = signer;
    }

    pub async fn provider(&self) -> Option<DynProvider> {
        self.provider.read().await.clone()
    }

    pub async fn signer(&self) -> Option<PrivateKeySigner> {
        self.signer.read().await.clone()
    }

    pub async fn signer_address(&self) -> Option<Address> {
        self.signer.read().await.as_ref().map(|s| s.address())
    }

    pub async fn has_signer(&self) -> bool {
        self.signer.read().await.is_some()
    }
}
