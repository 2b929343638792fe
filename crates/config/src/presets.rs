// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Ready-made configurations for well-known networks. Plain constructors;
//! applications own the returned value.

use crate::NetworkConfig;

pub fn sepolia() -> NetworkConfig {
    NetworkConfig::new(11155111, "https://eth-sepolia.g.alchemy.com/v2/")
        .and_then(|c| c.with_gateway_url("https://gateway.fhevm.io"))
        .expect("static sepolia configuration is valid")
}

pub fn mainnet() -> NetworkConfig {
    NetworkConfig::new(1, "https://eth-mainnet.g.alchemy.com/v2/")
        .and_then(|c| c.with_gateway_url("https://gateway.fhevm.io"))
        .expect("static mainnet configuration is valid")
}

pub fn local() -> NetworkConfig {
    NetworkConfig::new(31337, "http://127.0.0.1:8545").expect("static local configuration is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_construct() {
        assert_eq!(sepolia().chain_id(), 11155111);
        assert_eq!(mainnet().chain_id(), 1);
        assert!(local().gateway_url().is_none());
    }
}
