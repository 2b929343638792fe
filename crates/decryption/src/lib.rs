// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod auth;
mod gateway;
mod service;

use thiserror::Error as ThisError;

pub use auth::{sign_decrypt_authorization, DECRYPT_DOMAIN_NAME, DECRYPT_DOMAIN_VERSION};
pub use gateway::{parse_decrypted_value, DecryptRequest, GatewayClient};
pub use service::DecryptionService;

#[derive(ThisError, Debug)]
pub enum DecryptionError {
    #[error("Signer not available for decryption")]
    NoSigner,
    #[error("Gateway URL not configured")]
    GatewayNotConfigured,
    #[error("Gateway error: status {status}: {message}")]
    Gateway { status: u16, message: String },
    #[error("Malformed gateway response: {0}")]
    MalformedResponse(String),
    #[error("Failed to create decrypt signature: {0}")]
    Signature(#[from] alloy::signers::Error),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
