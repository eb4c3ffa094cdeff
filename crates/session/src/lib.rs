//! Contract session client for the deployed decentralised bank.
//!
//! A [`Session`] binds a connected wallet, an RPC provider and the deployed
//! contract address, and exposes the bank operations: account creation,
//! deposit, withdraw, transfer and balance query. Amounts are validated and
//! converted to base units before anything is submitted, and every
//! state-changing call is explicit two-phase: submission first, inclusion
//! second.

mod call;
mod client;

use alloy_primitives::{Address, U256};
use amount::AmountError;
use thiserror::Error;
use wallet::WalletError;

pub use call::{CallKind, Confirmation, PendingCall};
pub use client::Session;

/// Errors surfaced by session operations.
///
/// Validation failures (`InvalidAmount`, `InvalidAddress`) are produced
/// locally before any network call. Everything else is classified at the
/// wallet/contract boundary; nothing propagates unclassified.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No wallet is available for this session
    #[error("wallet not found: {0}")]
    WalletNotFound(String),

    /// The wallet's user declined a signature or account-access prompt
    #[error("rejected by wallet user: {0}")]
    UserRejected(String),

    /// The entered amount failed validation; nothing was submitted
    #[error("invalid amount {input:?}: {source}")]
    InvalidAmount {
        input: String,
        #[source]
        source: AmountError,
    },

    /// The recipient address failed validation; nothing was submitted
    #[error("invalid recipient address {input:?}: {detail}")]
    InvalidAddress { input: String, detail: String },

    /// A state-changing call was rejected, carrying the chain's revert
    /// reason when one was provided
    #[error("transaction failed: {0}")]
    TransactionFailed(String),

    /// A balance query failed; callers treat this as non-fatal
    #[error("balance query failed: {0}")]
    BalanceQueryFailed(String),

    /// The account-existence probe failed for a reason other than the
    /// account simply not being registered
    #[error("account lookup failed: {0}")]
    UnknownQuery(String),
}

impl From<WalletError> for SessionError {
    fn from(err: WalletError) -> Self {
        match err {
            WalletError::Rejected(detail) => Self::UserRejected(detail),
            WalletError::NotFound(detail) => Self::WalletNotFound(detail),
            other => Self::TransactionFailed(other.to_string()),
        }
    }
}

/// Whether the connected address has a registered bank account.
///
/// `NotRegistered` is an expected condition for new users, distinct from a
/// query failure: callers prompt for account creation rather than showing a
/// blocking error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountStatus {
    /// Account exists; current stored balance attached
    Registered { balance: Balance },
    /// No account registered for this address yet
    NotRegistered,
}

/// A stored bank balance in integer base units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balance {
    /// The account the balance belongs to
    pub account: Address,
    /// Stored balance in base units
    pub base_units: U256,
}

impl Balance {
    pub const fn new(account: Address, base_units: U256) -> Self {
        Self { account, base_units }
    }

    /// Balance converted to decimal display units.
    pub fn display(&self, decimals: u8) -> String {
        amount::format_amount(self.base_units, decimals)
            .unwrap_or_else(|_| self.base_units.to_string())
    }
}
