// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

#[cfg(feature = "client")]
pub use fhevm_client as client;

#[cfg(any(feature = "client", feature = "decryption"))]
pub use fhevm_config as config;

#[cfg(feature = "encryption")]
pub use fhevm_encryption as encryption;

#[cfg(feature = "decryption")]
pub use fhevm_decryption as decryption;

#[cfg(any(feature = "client", feature = "encryption", feature = "evm"))]
pub use fhevm_engine as engine;

#[cfg(feature = "evm")]
pub use fhevm_evm as evm;
