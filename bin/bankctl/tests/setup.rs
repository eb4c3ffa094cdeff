//! Common test setup utilities shared across integration tests.
#![allow(dead_code)] // used in ignored live-network tests

use alloy_provider::Provider;
use bankctl::config::Config;
use serde::Deserialize;
use wallet::Wallet;

/// Local configuration with private key (git-ignored file)
#[derive(Debug, Deserialize)]
struct LocalConfig {
    private_key: String,
}

/// Load test configuration. Panics if not found or invalid.
pub fn load_test_config() -> Config {
    Config::from_file("tests/test-config.toml").expect("Failed to load tests/test-config.toml.")
}

/// Load private key for signing transactions.
///
/// Tries multiple sources in order:
/// 1. PRIVATE_KEY environment variable
/// 2. tests/test-config.local.toml file (git-ignored)
///
/// Returns None if no private key is found.
pub fn load_private_key() -> Option<String> {
    if let Ok(pk) = std::env::var("PRIVATE_KEY") {
        return Some(pk);
    }

    let local_config_path = "tests/test-config.local.toml";
    if let Ok(contents) = std::fs::read_to_string(local_config_path) {
        if let Ok(config) = toml::from_str::<LocalConfig>(&contents) {
            return Some(config.private_key);
        }
    }

    None
}

/// Provider against the configured RPC endpoint.
pub async fn setup_provider(url: &str) -> impl Provider + Clone {
    wallet::create_provider(url)
        .await
        .expect("Failed to create provider")
}

/// Wallet from the configured private key.
///
/// # Panics
/// Panics if no private key is found or if the private key is invalid.
pub fn setup_wallet(chain_id: u64) -> Wallet {
    let private_key = load_private_key().expect(
        "Private key required for transaction signing.\n\
         Set PRIVATE_KEY environment variable or create tests/test-config.local.toml",
    );

    Wallet::local(&private_key, chain_id).expect("Invalid private key format")
}
