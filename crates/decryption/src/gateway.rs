// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::DecryptionError;
use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use url::Url;

/// Body of a gateway decrypt call. User address and signature are present
/// only for authorized (private-value) requests; public decrypts omit them
/// entirely rather than sending nulls.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DecryptRequest {
    contract_address: String,
    handle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    signature: Option<String>,
}

impl DecryptRequest {
    pub fn public(contract_address: Address, handle: U256) -> Self {
        Self {
            contract_address: contract_address.to_string(),
            handle: handle.to_string(),
            user_address: None,
            signature: None,
        }
    }

    pub fn authorized(
        contract_address: Address,
        handle: U256,
        user: Address,
        signature: String,
    ) -> Self {
        Self {
            contract_address: contract_address.to_string(),
            handle: handle.to_string(),
            user_address: Some(user.to_string()),
            signature: Some(signature),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DecryptResponse {
    decrypted_value: String,
}

/// Parse the gateway's `decryptedValue` field, which arrives as a decimal
/// string or a 0x-prefixed hex string depending on the gateway build.
pub fn parse_decrypted_value(raw: &str) -> Result<U256, DecryptionError> {
    let parsed = match raw.strip_prefix("0x") {
        Some(hex_digits) => U256::from_str_radix(hex_digits, 16),
        None => U256::from_str_radix(raw, 10),
    };
    parsed.map_err(|e| {
        DecryptionError::MalformedResponse(format!("invalid decryptedValue '{raw}': {e}"))
    })
}

/// Thin HTTP client for the decryption gateway.
#[derive(Clone)]
pub struct GatewayClient {
    base_url: Url,
    http: reqwest::Client,
}

impl GatewayClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub async fn decrypt(&self, request: &DecryptRequest) -> Result<U256, DecryptionError> {
        let endpoint = format!("{}/decrypt", self.base_url.as_str().trim_end_matches('/'));
        let response = self.http.post(&endpoint).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DecryptionError::Gateway {
                status: status.as_u16(),
                message,
            });
        }

        let body: DecryptResponse = response
            .json()
            .await
            .map_err(|e| DecryptionError::MalformedResponse(e.to_string()))?;
        parse_decrypted_value(&body.decrypted_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_and_hex_values() {
        assert_eq!(parse_decrypted_value("12345").unwrap(), U256::from(12345u64));
        assert_eq!(parse_decrypted_value("0xff").unwrap(), U256::from(255u64));
        assert_eq!(parse_decrypted_value("0").unwrap(), U256::ZERO);
        assert!(parse_decrypted_value("not-a-number").is_err());
    }

    #[test]
    fn public_request_serializes_without_user_fields() {
        let request = DecryptRequest::public(Address::ZERO, U256::from(9u64));
        let json = serde_json::to_value(&request).unwrap();
        let object = json.as_object().unwrap();
        assert!(object.contains_key("contractAddress"));
        assert_eq!(object["handle"], "9");
        assert!(!object.contains_key("userAddress"));
        assert!(!object.contains_key("signature"));
    }
}
