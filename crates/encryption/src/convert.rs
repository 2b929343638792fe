// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::EncryptionError;
use alloy::primitives::U256;
use fhevm_engine::{EncryptedInputBuilder, EncryptionType, PlaintextValue};

fn type_name(value: &PlaintextValue) -> &'static str {
    match value {
        PlaintextValue::Uint(_) => "uint",
        PlaintextValue::Bool(_) => "bool",
        PlaintextValue::Address(_) => "address",
    }
}

/// Convert a plaintext value to the numeric representation the engine
/// expects for the given type tag. Booleans map onto {0, 1}; addresses are
/// their 160-bit integer value; unsigned integers are checked against the
/// type's bit width so the engine never sees an out-of-range value.
pub fn to_numeric(value: &PlaintextValue, ty: EncryptionType) -> Result<U256, EncryptionError> {
    match ty {
        EncryptionType::Bool => match value {
            PlaintextValue::Bool(b) => Ok(U256::from(*b as u8)),
            // Non-zero coerces to one, mirroring JS truthiness in the wire
            // protocol this type tag comes from.
            PlaintextValue::Uint(v) => Ok(U256::from(!v.is_zero() as u8)),
            PlaintextValue::Address(_) => Err(EncryptionError::TypeMismatch {
                expected: ty,
                got: type_name(value),
            }),
        },
        EncryptionType::Address => match value {
            PlaintextValue::Address(a) => Ok(U256::from_be_slice(a.as_slice())),
            _ => Err(EncryptionError::TypeMismatch {
                expected: ty,
                got: type_name(value),
            }),
        },
        EncryptionType::Uint8
        | EncryptionType::Uint16
        | EncryptionType::Uint32
        | EncryptionType::Uint64
        | EncryptionType::Uint128 => {
            let numeric = match value {
                PlaintextValue::Uint(v) => *v,
                PlaintextValue::Bool(b) => U256::from(*b as u8),
                PlaintextValue::Address(_) => {
                    return Err(EncryptionError::TypeMismatch {
                        expected: ty,
                        got: type_name(value),
                    })
                }
            };
            if numeric.bit_len() > ty.bit_width() as usize {
                return Err(EncryptionError::ValueOutOfRange {
                    encryption_type: ty,
                    value: numeric,
                });
            }
            Ok(numeric)
        }
    }
}

/// Feed one typed value into an input builder through the accessor matching
/// its type tag.
pub fn add_to_builder(
    builder: &mut dyn EncryptedInputBuilder,
    value: &PlaintextValue,
    ty: EncryptionType,
) -> Result<(), EncryptionError> {
    match ty {
        EncryptionType::Address => match value {
            PlaintextValue::Address(a) => builder.add_address(*a),
            _ => {
                return Err(EncryptionError::TypeMismatch {
                    expected: ty,
                    got: type_name(value),
                })
            }
        },
        EncryptionType::Bool => {
            let numeric = to_numeric(value, ty)?;
            builder.add_bool(numeric == U256::from(1u8));
        }
        EncryptionType::Uint8 => builder.add_u8(to_numeric(value, ty)?.to::<u8>()),
        EncryptionType::Uint16 => builder.add_u16(to_numeric(value, ty)?.to::<u16>()),
        EncryptionType::Uint32 => builder.add_u32(to_numeric(value, ty)?.to::<u32>()),
        EncryptionType::Uint64 => builder.add_u64(to_numeric(value, ty)?.to::<u64>()),
        EncryptionType::Uint128 => builder.add_u128(to_numeric(value, ty)?.to::<u128>()),
    }
    Ok(())
}
