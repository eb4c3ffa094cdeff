//! Wallet bridge client: an external wallet reached over HTTP JSON-RPC.
//!
//! The bridge plays the role of the user's wallet application. It holds the
//! signing key, and every account-access or signature request may sit until
//! its user approves or rejects it. Rejections carry the EIP-1193
//! `userRejectedRequest` code, which is what gets inspected here; error
//! message text is never matched on.

use crate::WalletError;
use alloy_primitives::{Address, Bytes};
use alloy_rpc_types::TransactionRequest;
use serde::{Deserialize, Serialize};

/// EIP-1193 `userRejectedRequest` error code.
const USER_REJECTED_CODE: i64 = 4001;

/// Client for a wallet bridge service.
///
/// # Example
///
/// ```ignore
/// let bridge = WalletBridge::new("http://localhost:9060");
/// let accounts = bridge.request_accounts().await?;
/// let signed_tx = bridge.sign_transaction(tx_request).await?;
/// provider.send_raw_transaction(&signed_tx).await?;
/// ```
#[derive(Debug, Clone)]
pub struct WalletBridge {
    client: reqwest::Client,
    url: String,
}

impl WalletBridge {
    /// Creates a new bridge client.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Creates a new bridge client with a custom HTTP client.
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Request account access from the bridge's user.
    ///
    /// Suspends until the user answers the access prompt. A declined prompt
    /// is [`WalletError::Rejected`].
    pub async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        self.call("eth_requestAccounts", Vec::<serde_json::Value>::new())
            .await
    }

    /// Signs a transaction via the bridge.
    ///
    /// Returns the signed transaction as raw bytes, ready to be broadcast
    /// via `send_raw_transaction`. Suspends until the bridge's user answers
    /// the signature prompt.
    pub async fn sign_transaction(&self, tx: TransactionRequest) -> Result<Bytes, WalletError> {
        let signed: SignedTransaction = self.call("eth_signTransaction", [tx]).await?;
        signed
            .raw
            .parse()
            .map_err(|e| WalletError::Signing(format!("{}", e)))
    }

    async fn call<P, R>(&self, method: &'static str, params: P) -> Result<R, WalletError>
    where
        P: Serialize,
        R: for<'de> Deserialize<'de>,
    {
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id: 1,
        };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    WalletError::NotFound(format!("wallet bridge unreachable: {}", e))
                } else {
                    WalletError::Http(format!("{}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".to_string());
            return Err(WalletError::Http(format!("bridge returned {status}: {body}")));
        }

        let rpc_response: JsonRpcResponse<R> = response
            .json()
            .await
            .map_err(|e| WalletError::Http(format!("{}", e)))?;

        match rpc_response.result {
            Some(result) => Ok(result),
            None => {
                let error = rpc_response.error.unwrap_or(JsonRpcError {
                    code: -1,
                    message: "unknown error".to_string(),
                });
                Err(classify_rpc_error(error))
            }
        }
    }
}

fn classify_rpc_error(error: JsonRpcError) -> WalletError {
    if error.code == USER_REJECTED_CODE {
        WalletError::Rejected(error.message)
    } else {
        WalletError::Rpc {
            code: error.code,
            message: error.message,
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonRpcRequest<T> {
    jsonrpc: &'static str,
    method: &'static str,
    params: T,
    id: u32,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse<T> {
    result: Option<T>,
    error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

/// Response from eth_signTransaction containing the signed transaction.
#[derive(Debug, Deserialize)]
struct SignedTransaction {
    /// The signed transaction as hex-encoded RLP.
    raw: String,
}
