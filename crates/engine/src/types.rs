// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use alloy::primitives::{Address, Bytes, U256};
use std::fmt;
use std::str::FromStr;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
#[error("Unsupported encryption type: {0}")]
pub struct UnsupportedType(pub String);

/// The encrypted value types the FHEVM coprocessor understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EncryptionType {
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uint128,
    Bool,
    Address,
}

impl EncryptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EncryptionType::Uint8 => "uint8",
            EncryptionType::Uint16 => "uint16",
            EncryptionType::Uint32 => "uint32",
            EncryptionType::Uint64 => "uint64",
            EncryptionType::Uint128 => "uint128",
            EncryptionType::Bool => "bool",
            EncryptionType::Address => "address",
        }
    }

    /// Width of the plaintext domain in bits.
    pub fn bit_width(&self) -> u32 {
        match self {
            EncryptionType::Uint8 => 8,
            EncryptionType::Uint16 => 16,
            EncryptionType::Uint32 => 32,
            EncryptionType::Uint64 => 64,
            EncryptionType::Uint128 => 128,
            EncryptionType::Bool => 1,
            EncryptionType::Address => 160,
        }
    }
}

impl fmt::Display for EncryptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncryptionType {
    type Err = UnsupportedType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uint8" => Ok(EncryptionType::Uint8),
            "uint16" => Ok(EncryptionType::Uint16),
            "uint32" => Ok(EncryptionType::Uint32),
            "uint64" => Ok(EncryptionType::Uint64),
            "uint128" => Ok(EncryptionType::Uint128),
            "bool" => Ok(EncryptionType::Bool),
            "address" => Ok(EncryptionType::Address),
            other => Err(UnsupportedType(other.to_string())),
        }
    }
}

/// A plaintext value prior to encryption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaintextValue {
    Uint(U256),
    Bool(bool),
    Address(Address),
}

impl From<bool> for PlaintextValue {
    fn from(value: bool) -> Self {
        PlaintextValue::Bool(value)
    }
}

impl From<Address> for PlaintextValue {
    fn from(value: Address) -> Self {
        PlaintextValue::Address(value)
    }
}

impl From<U256> for PlaintextValue {
    fn from(value: U256) -> Self {
        PlaintextValue::Uint(value)
    }
}

macro_rules! impl_from_uint {
    ($($t:ty),*) => {
        $(impl From<$t> for PlaintextValue {
            fn from(value: $t) -> Self {
                PlaintextValue::Uint(U256::from(value))
            }
        })*
    };
}

impl_from_uint!(u8, u16, u32, u64, u128);

/// One finalized multi-value encryption batch: one opaque handle per input
/// value, in the order the values were added, plus a single proof covering
/// the whole batch. The proof is bound to the (contract, user) pair the
/// builder was created for and cannot be replayed under a different pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptedInput {
    pub handles: Vec<Bytes>,
    pub input_proof: Bytes,
}

impl EncryptedInput {
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names_round_trip() {
        for ty in [
            EncryptionType::Uint8,
            EncryptionType::Uint16,
            EncryptionType::Uint32,
            EncryptionType::Uint64,
            EncryptionType::Uint128,
            EncryptionType::Bool,
            EncryptionType::Address,
        ] {
            assert_eq!(ty.as_str().parse::<EncryptionType>().unwrap(), ty);
        }
    }

    #[test]
    fn unknown_type_name_is_rejected() {
        let err = "uint256".parse::<EncryptionType>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported encryption type: uint256");
    }
}
