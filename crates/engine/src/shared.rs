// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::EncryptionEngine;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Cloneable handle to the engine slot shared between the client and the
/// encryption service. Empty until the client initializes; populated exactly
/// once per successful initialization and never cleared afterwards.
#[derive(Clone, Default)]
pub struct SharedEngine {
    inner: Arc<RwLock<Option<Arc<dyn EncryptionEngine>>>>,
}

impl SharedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self) -> Option<Arc<dyn EncryptionEngine>> {
        self.inner.read().await.clone()
    }

    pub async fn set(&self, engine: Arc<dyn EncryptionEngine>) {
        *self.inner.write().await = Some(engine);
    }

    pub async fn is_ready(&self) -> bool {
        self.inner.read().await.is_some()
    }
}
