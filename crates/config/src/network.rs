//! Per-network deployment parameters for the bank contract.
//!
//! The bank is deployed once per network; the session client only ever
//! talks to one deployment at a time.

use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};

/// Network the session runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    Testnet,
    Local,
}

/// Deployment parameters for one network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankConfig {
    /// Chain ID
    pub chain_id: u64,
    /// Deployed bank contract address
    pub bank: Address,
    /// Decimal precision of the asset's base unit
    pub decimals: u8,
    /// Block time in seconds
    pub block_time_secs: u64,
}

impl BankConfig {
    /// Sepolia testnet deployment.
    pub const fn sepolia() -> Self {
        Self {
            chain_id: 11_155_111,
            bank: address!("0x730Ba94c6078919ee3D06C97b1952dFC7A2FCF67"),
            decimals: 18,
            block_time_secs: 12,
        }
    }

    /// Local hardhat deployment (deterministic first-deploy address).
    pub const fn local() -> Self {
        Self {
            chain_id: 31_337,
            bank: address!("0x5FbDB2315678afecb367f032d93F642f64180aa3"),
            decimals: 18,
            block_time_secs: 1,
        }
    }

    /// Create configuration from network type.
    pub const fn from_network_type(network_type: NetworkType) -> Self {
        match network_type {
            NetworkType::Testnet => Self::sepolia(),
            NetworkType::Local => Self::local(),
        }
    }
}

/// Builder for custom deployments (e.g. a freshly deployed bank address).
#[derive(Debug, Clone)]
pub struct BankConfigBuilder {
    config: BankConfig,
}

impl BankConfigBuilder {
    /// Start with testnet defaults.
    pub const fn testnet() -> Self {
        Self { config: BankConfig::sepolia() }
    }

    /// Start with local defaults.
    pub const fn local() -> Self {
        Self { config: BankConfig::local() }
    }

    /// Start with the named network's defaults.
    pub const fn from_network_type(network_type: NetworkType) -> Self {
        Self { config: BankConfig::from_network_type(network_type) }
    }

    /// Override the deployed bank contract address.
    pub const fn bank(mut self, address: Address) -> Self {
        self.config.bank = address;
        self
    }

    /// Override the asset precision.
    pub const fn decimals(mut self, decimals: u8) -> Self {
        self.config.decimals = decimals;
        self
    }

    /// Build the deployment configuration.
    pub const fn build(self) -> BankConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testnet_config() {
        let config = BankConfig::sepolia();
        assert_eq!(config.chain_id, 11_155_111);
        assert_eq!(config.decimals, 18);
    }

    #[test]
    fn local_config() {
        let config = BankConfig::local();
        assert_eq!(config.chain_id, 31_337);
        assert_eq!(config.bank, address!("0x5FbDB2315678afecb367f032d93F642f64180aa3"));
    }

    #[test]
    fn custom_config_builder() {
        let custom_bank = address!("1111111111111111111111111111111111111111");

        let config = BankConfigBuilder::testnet().bank(custom_bank).build();

        assert_eq!(config.bank, custom_bank);
        assert_eq!(config.chain_id, BankConfig::sepolia().chain_id);
    }

    #[test]
    fn network_type_selects_deployment() {
        assert_eq!(
            BankConfig::from_network_type(NetworkType::Local).bank,
            BankConfig::local().bank
        );
        assert_eq!(
            BankConfig::from_network_type(NetworkType::Testnet).bank,
            BankConfig::sepolia().bank
        );
    }
}
