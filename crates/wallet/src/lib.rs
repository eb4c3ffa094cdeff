//! Wallet boundary: RPC provider construction and transaction signing.
//!
//! Signing capability comes from one of two sources: a local private key, or
//! an external wallet bridge that holds the key and gates every request
//! behind its own user's approval. Both produce EIP-2718 encoded bytes ready
//! for `send_raw_transaction`.

mod bridge;

use alloy_consensus::TxEnvelope;
use alloy_network::{eip2718::Encodable2718, EthereumWallet, TransactionBuilder};
use alloy_primitives::{Address, Bytes};
use alloy_provider::{Provider, ProviderBuilder};
use alloy_rpc_types::TransactionRequest;
use alloy_signer_local::PrivateKeySigner;
pub use bridge::WalletBridge;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalletError {
    /// No signing capability is configured or reachable
    #[error("wallet not found: {0}")]
    NotFound(String),

    /// The wallet's user declined an account-access or signature prompt
    #[error("rejected by wallet user: {0}")]
    Rejected(String),

    /// Error parsing or validating URLs
    #[error("invalid RPC URL: {0}")]
    InvalidUrl(String),

    /// Error with private key
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// HTTP-level failure talking to the wallet bridge
    #[error("wallet bridge request failed: {0}")]
    Http(String),

    /// JSON-RPC error from the wallet bridge other than a user rejection
    #[error("wallet bridge returned error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Failure while producing the signed transaction bytes
    #[error("signing failed: {0}")]
    Signing(String),
}

/// Convenience function to create an ethereum rpc provider from url.
pub async fn create_provider(rpc_url: &str) -> Result<impl Provider + Clone, WalletError> {
    let url = rpc_url
        .parse()
        .map_err(|e| WalletError::InvalidUrl(format!("{}", e)))?;
    let provider = ProviderBuilder::new().connect_http(url);

    Ok(provider)
}

/// Where the session's signing capability comes from.
#[derive(Debug, Clone)]
pub enum WalletSource {
    /// Hex-encoded private key; signing happens in-process
    PrivateKey(String),
    /// Base URL of a wallet bridge holding the key
    Bridge(String),
}

impl WalletSource {
    /// Pick a source from the places a key can be configured.
    ///
    /// A private key wins over a bridge URL. With neither present there is
    /// no wallet at all and initialization stops here.
    pub fn resolve(
        private_key: Option<String>,
        bridge_url: Option<String>,
    ) -> Result<Self, WalletError> {
        match (private_key, bridge_url) {
            (Some(key), _) => Ok(Self::PrivateKey(key)),
            (None, Some(url)) => Ok(Self::Bridge(url)),
            (None, None) => Err(WalletError::NotFound(
                "no private key or wallet bridge URL configured".to_string(),
            )),
        }
    }
}

/// A connected wallet: a resolved account address plus signing capability.
pub struct Wallet {
    kind: WalletKind,
    address: Address,
    chain_id: u64,
}

enum WalletKind {
    Local(EthereumWallet),
    Bridge(WalletBridge),
}

impl Wallet {
    /// Connect a wallet from the given source.
    ///
    /// For a bridge this requests account access, which the bridge's user
    /// may decline.
    pub async fn connect(source: WalletSource, chain_id: u64) -> Result<Self, WalletError> {
        match source {
            WalletSource::PrivateKey(key) => Self::local(&key, chain_id),
            WalletSource::Bridge(url) => Self::bridge(url, chain_id).await,
        }
    }

    /// Wallet backed by an in-process private key.
    pub fn local(private_key: &str, chain_id: u64) -> Result<Self, WalletError> {
        let signer: PrivateKeySigner = private_key
            .parse()
            .map_err(|e| WalletError::InvalidPrivateKey(format!("{}", e)))?;
        let address = signer.address();

        Ok(Self {
            kind: WalletKind::Local(EthereumWallet::from(signer)),
            address,
            chain_id,
        })
    }

    /// Wallet backed by an external bridge.
    ///
    /// Issues `eth_requestAccounts` and binds the session to the first
    /// account the bridge exposes.
    pub async fn bridge(url: impl Into<String>, chain_id: u64) -> Result<Self, WalletError> {
        let bridge = WalletBridge::new(url);
        let accounts = bridge.request_accounts().await?;
        let address = *accounts.first().ok_or_else(|| {
            WalletError::NotFound("wallet bridge exposed no accounts".to_string())
        })?;

        Ok(Self {
            kind: WalletKind::Bridge(bridge),
            address,
            chain_id,
        })
    }

    /// Returns the wallet's account address.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Returns the chain ID.
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Sign a fully filled transaction request, returning raw EIP-2718 bytes.
    ///
    /// The bridge variant suspends until the bridge's user approves or
    /// rejects the signature prompt; there is no timeout on that approval.
    pub async fn sign_transaction(&self, tx: TransactionRequest) -> Result<Bytes, WalletError> {
        match &self.kind {
            WalletKind::Local(local) => {
                let envelope: TxEnvelope = tx
                    .build(local)
                    .await
                    .map_err(|e| WalletError::Signing(format!("{}", e)))?;

                let mut encoded = Vec::new();
                envelope.encode_2718(&mut encoded);
                Ok(Bytes::from(encoded))
            }
            WalletKind::Bridge(bridge) => bridge.sign_transaction(tx).await,
        }
    }
}

/// Fill missing transaction fields using the provider.
///
/// A call that would revert fails here during gas estimation, with the
/// chain's revert reason attached to the error.
pub async fn fill_transaction<P>(
    mut tx: TransactionRequest,
    provider: &P,
    from: Address,
    chain_id: u64,
) -> eyre::Result<TransactionRequest>
where
    P: Provider,
{
    // Set from address
    if tx.from.is_none() {
        tx.from = Some(from);
    }

    // Set chain_id
    if tx.chain_id.is_none() {
        tx.chain_id = Some(chain_id);
    }

    // Get nonce if not set
    if tx.nonce.is_none() {
        let nonce = provider.get_transaction_count(from).await?;
        tx.nonce = Some(nonce);
    }

    // Get fee parameters if not set (EIP-1559) - do this before gas estimation
    // since gas estimation may need fee info
    if tx.max_fee_per_gas.is_none() || tx.max_priority_fee_per_gas.is_none() {
        let fee_estimate = provider.estimate_eip1559_fees().await?;
        if tx.max_fee_per_gas.is_none() {
            tx.max_fee_per_gas = Some(fee_estimate.max_fee_per_gas);
        }
        if tx.max_priority_fee_per_gas.is_none() {
            tx.max_priority_fee_per_gas = Some(fee_estimate.max_priority_fee_per_gas);
        }
    }

    // Estimate gas if not set
    if tx.gas.is_none() {
        let gas_estimate = provider.estimate_gas(tx.clone()).await?;
        // Add 20% buffer for safety
        tx.gas = Some(gas_estimate + gas_estimate / 5);
    }

    Ok(tx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    // First Anvil dev key; nothing is ever signed with it in these tests.
    const TEST_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[tokio::test]
    async fn test_invalid_url() {
        let result = create_provider("not a url").await;
        assert!(result.is_err());
    }

    #[test]
    fn invalid_private_key_is_rejected() {
        let result = Wallet::local("zz", 1);
        assert!(matches!(result, Err(WalletError::InvalidPrivateKey(_))));
    }

    #[test]
    fn local_wallet_derives_address() {
        let wallet = Wallet::local(TEST_KEY, 31_337).unwrap();
        assert_eq!(wallet.address(), address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"));
        assert_eq!(wallet.chain_id(), 31_337);
    }

    #[test]
    fn source_resolution_prefers_private_key() {
        let source = WalletSource::resolve(
            Some(TEST_KEY.to_string()),
            Some("http://localhost:9060".to_string()),
        )
        .unwrap();
        assert!(matches!(source, WalletSource::PrivateKey(_)));
    }

    #[test]
    fn missing_wallet_is_not_found() {
        let result = WalletSource::resolve(None, None);
        assert!(matches!(result, Err(WalletError::NotFound(_))));
    }
}
