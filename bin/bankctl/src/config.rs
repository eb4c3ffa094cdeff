use alloy_primitives::Address;
use config::{BankConfig, BankConfigBuilder, NetworkType};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level bankctl configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// RPC endpoint url
    pub rpc_url: String,

    /// Which network's bank deployment to talk to
    pub network: NetworkType,

    /// Override for the deployed bank contract address
    #[serde(default)]
    pub bank_address: Option<Address>,

    /// Wallet bridge URL (used when no private key is supplied)
    #[serde(default)]
    pub wallet_url: Option<String>,

    /// Port for the Prometheus exporter in watch mode
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;

        Ok(config)
    }

    /// Deployment parameters for the configured network, with overrides
    /// applied.
    pub fn bank_config(&self) -> BankConfig {
        match self.bank_address {
            Some(address) => BankConfigBuilder::from_network_type(self.network)
                .bank(address)
                .build(),
            None => BankConfig::from_network_type(self.network),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_toml() {
        let config: Config = toml::from_str(
            r#"
            rpc_url = "http://localhost:8545"
            network = "local"
            "#,
        )
        .unwrap();

        assert_eq!(config.network, NetworkType::Local);
        assert!(config.bank_address.is_none());
        assert!(config.wallet_url.is_none());
    }

    #[test]
    fn network_selects_deployment() {
        let config: Config = toml::from_str(
            r#"
            rpc_url = "https://sepolia.example.org"
            network = "testnet"
            "#,
        )
        .unwrap();

        assert_eq!(config.bank_config().chain_id, 11_155_111);
    }

    #[test]
    fn bank_address_override_applies() {
        let config: Config = toml::from_str(
            r#"
            rpc_url = "http://localhost:8545"
            network = "local"
            bank_address = "0x0000000000000000000000000000000000000007"
            "#,
        )
        .unwrap();

        let mut expected = [0u8; 20];
        expected[19] = 7;
        assert_eq!(config.bank_config().bank, Address::from(expected));
    }
}
