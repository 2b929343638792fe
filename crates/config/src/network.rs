// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;
use url::Url;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Invalid {field} scheme '{scheme}'. Expected: {expected}")]
    InvalidScheme {
        field: &'static str,
        scheme: String,
        expected: &'static str,
    },
    #[error("URL for {0} must contain a host")]
    MissingHost(&'static str),
    #[error("Invalid {field} address: {source}")]
    InvalidAddress {
        field: &'static str,
        source: alloy::hex::FromHexError,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RpcScheme {
    Http,
    Https,
    Ws,
    Wss,
}

impl RpcScheme {
    pub fn is_websocket(&self) -> bool {
        matches!(self, RpcScheme::Ws | RpcScheme::Wss)
    }

    pub fn is_secure(&self) -> bool {
        matches!(self, RpcScheme::Https | RpcScheme::Wss)
    }
}

fn parse_rpc_url(raw: &str, field: &'static str) -> Result<(Url, RpcScheme), ConfigError> {
    let url = Url::parse(raw)?;
    let scheme = match url.scheme() {
        "http" => RpcScheme::Http,
        "https" => RpcScheme::Https,
        "ws" => RpcScheme::Ws,
        "wss" => RpcScheme::Wss,
        other => {
            return Err(ConfigError::InvalidScheme {
                field,
                scheme: other.to_string(),
                expected: "http://, https://, ws://, wss://",
            })
        }
    };
    if url.host_str().is_none() {
        return Err(ConfigError::MissingHost(field));
    }
    Ok((url, scheme))
}

fn parse_http_url(raw: &str, field: &'static str) -> Result<Url, ConfigError> {
    let (url, scheme) = parse_rpc_url(raw, field)?;
    if scheme.is_websocket() {
        return Err(ConfigError::InvalidScheme {
            field,
            scheme: url.scheme().to_string(),
            expected: "http://, https://",
        });
    }
    Ok(url)
}

fn parse_address(raw: &str, field: &'static str) -> Result<Address, ConfigError> {
    raw.parse()
        .map_err(|source| ConfigError::InvalidAddress { field, source })
}

/// Network parameters for a single FHEVM deployment.
///
/// Supplied once at client construction and never mutated afterwards. The
/// core performs no environment or file based configuration parsing; the
/// surrounding application decides where these values come from.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkConfig {
    chain_id: u64,
    rpc_url: Url,
    gateway_url: Option<Url>,
    acl_address: Option<Address>,
    kms_signer_address: Option<Address>,
}

impl NetworkConfig {
    /// Validates the RPC endpoint and constructs a minimal configuration.
    pub fn new(chain_id: u64, rpc_url: &str) -> Result<Self, ConfigError> {
        let (rpc_url, _) = parse_rpc_url(rpc_url, "rpc_url")?;
        Ok(Self {
            chain_id,
            rpc_url,
            gateway_url: None,
            acl_address: None,
            kms_signer_address: None,
        })
    }

    /// Sets the decryption gateway endpoint. Must be http(s); the gateway
    /// is a plain JSON-over-POST collaborator.
    pub fn with_gateway_url(mut self, gateway_url: &str) -> Result<Self, ConfigError> {
        self.gateway_url = Some(parse_http_url(gateway_url, "gateway_url")?);
        Ok(self)
    }

    pub fn with_acl_address(mut self, address: &str) -> Result<Self, ConfigError> {
        self.acl_address = Some(parse_address(address, "acl_address")?);
        Ok(self)
    }

    pub fn with_kms_signer_address(mut self, address: &str) -> Result<Self, ConfigError> {
        self.kms_signer_address = Some(parse_address(address, "kms_signer_address")?);
        Ok(self)
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    pub fn rpc_scheme(&self) -> RpcScheme {
        // Safe: validated in new() against the four accepted schemes
        match self.rpc_url.scheme() {
            "http" => RpcScheme::Http,
            "https" => RpcScheme::Https,
            "ws" => RpcScheme::Ws,
            _ => RpcScheme::Wss,
        }
    }

    pub fn gateway_url(&self) -> Option<&Url> {
        self.gateway_url.as_ref()
    }

    pub fn acl_address(&self) -> Option<Address> {
        self.acl_address
    }

    pub fn kms_signer_address(&self) -> Option<Address> {
        self.kms_signer_address
    }
}
