// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod convert;
mod service;

use alloy::primitives::U256;
use fhevm_engine::{EncryptionType, EngineError, UnsupportedType};
use thiserror::Error as ThisError;

pub use service::{EncryptionService, InputValue};

#[derive(ThisError, Debug)]
pub enum EncryptionError {
    #[error("Engine not initialized. Call initialize() first")]
    NotInitialized,
    #[error(transparent)]
    UnsupportedType(#[from] UnsupportedType),
    #[error("Value {value} does not fit in {encryption_type}")]
    ValueOutOfRange {
        encryption_type: EncryptionType,
        value: U256,
    },
    #[error("Cannot encrypt a {got} value as {expected}")]
    TypeMismatch {
        expected: EncryptionType,
        got: &'static str,
    },
    #[error(transparent)]
    Engine(#[from] EngineError),
}
