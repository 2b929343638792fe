// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::DecryptionError;
use alloy::{
    hex,
    primitives::{Address, U256},
    signers::{local::PrivateKeySigner, Signer},
    sol,
    sol_types::{Eip712Domain, SolStruct},
};
use std::borrow::Cow;

/// Domain under which decryption authorizations are signed. Shared with the
/// gateway's verifier; changing either constant invalidates every signature.
pub const DECRYPT_DOMAIN_NAME: &str = "FHEVMDecryption";
pub const DECRYPT_DOMAIN_VERSION: &str = "1";

sol! {
    /// Typed-data payload binding one user to one ciphertext handle.
    struct Decrypt {
        uint256 handle;
        address user;
    }
}

fn decrypt_domain(chain_id: u64, verifying_contract: Address) -> Eip712Domain {
    Eip712Domain {
        name: Some(Cow::Borrowed(DECRYPT_DOMAIN_NAME)),
        version: Some(Cow::Borrowed(DECRYPT_DOMAIN_VERSION)),
        chain_id: Some(U256::from(chain_id)),
        verifying_contract: Some(verifying_contract),
        salt: None,
    }
}

/// Sign the authorization binding `user` to `handle` under the decryption
/// domain scoped to the chain and contract. Returns the 65-byte signature
/// hex-encoded with a 0x prefix, the form the gateway expects.
pub async fn sign_decrypt_authorization(
    signer: &PrivateKeySigner,
    chain_id: u64,
    contract_address: Address,
    handle: U256,
    user: Address,
) -> Result<String, DecryptionError> {
    let domain = decrypt_domain(chain_id, contract_address);
    let message = Decrypt { handle, user };
    let signing_hash = message.eip712_signing_hash(&domain);
    let signature = signer.sign_hash(&signing_hash).await?;
    Ok(hex::encode_prefixed(signature.as_bytes()))
}
