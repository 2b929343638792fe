// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! The orchestrating client: owns the network configuration, the ledger
//! connection, and the engine lifecycle, and exposes the three services as
//! one façade. The client is a plain owned value; applications construct it
//! at their composition root and pass it where it is needed — there is no
//! process-wide instance.

mod client;
mod helpers;

use fhevm_config::ConfigError;
use fhevm_engine::EngineError;
use thiserror::Error as ThisError;

pub use client::{ClientConfig, FhevmClient};
pub use helpers::{create_client, init_client};

#[derive(ThisError, Debug)]
pub enum ClientError {
    #[error("No signer available")]
    NoSigner,
    #[error("Failed to initialize FHEVM engine: {0}")]
    Initialization(#[from] EngineError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
