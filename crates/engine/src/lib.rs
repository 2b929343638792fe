// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! The encryption-engine boundary of the SDK.
//!
//! The homomorphic-encryption primitive itself is an external collaborator.
//! This crate defines the traits the rest of the SDK programs against and
//! the factory that the client uses to obtain an engine during
//! initialization, so that a concrete engine is an explicit dependency
//! supplied at construction rather than something the core loads itself.

mod shared;
mod traits;
mod types;

use thiserror::Error as ThisError;

pub use shared::SharedEngine;
pub use traits::{EncryptedInputBuilder, EncryptionEngine, EngineConfig, EngineFactory};
pub use types::{EncryptedInput, EncryptionType, PlaintextValue, UnsupportedType};

#[derive(ThisError, Debug)]
pub enum EngineError {
    #[error("Engine initialization failed: {0}")]
    Initialization(String),
    #[error("Encryption failed: {0}")]
    Encryption(String),
    #[error("Input proof generation failed: {0}")]
    Proof(String),
}
