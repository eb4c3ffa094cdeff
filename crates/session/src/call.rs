//! Lifecycle of a submitted state-changing call.
//!
//! Each call instance moves Idle → Submitted → Confirmed | Reverted. The
//! terminal states are final for that instance; re-running an operation
//! creates a new instance. Submission and inclusion are separate phases so
//! callers can layer their own timeout or cancellation over the unbounded
//! inclusion wait.

use crate::SessionError;
use alloy_network::Ethereum;
use alloy_primitives::{TxHash, U256};
use alloy_provider::PendingTransactionBuilder;
use std::fmt;
use tracing::debug;

/// Which bank operation a call instance belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    CreateAccount,
    Deposit,
    Withdraw,
    Transfer,
}

impl fmt::Display for CallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateAccount => f.write_str("create-account"),
            Self::Deposit => f.write_str("deposit"),
            Self::Withdraw => f.write_str("withdraw"),
            Self::Transfer => f.write_str("transfer"),
        }
    }
}

/// A call that has been accepted by the network and awaits inclusion.
#[derive(Debug)]
#[must_use = "a submitted call resolves only once inclusion is awaited"]
pub struct PendingCall {
    kind: CallKind,
    tx_hash: TxHash,
    pending: PendingTransactionBuilder<Ethereum>,
}

impl PendingCall {
    pub(crate) const fn new(
        kind: CallKind,
        tx_hash: TxHash,
        pending: PendingTransactionBuilder<Ethereum>,
    ) -> Self {
        Self {
            kind,
            tx_hash,
            pending,
        }
    }

    /// The operation this call instance belongs to.
    pub const fn kind(&self) -> CallKind {
        self.kind
    }

    /// Hash of the submitted transaction.
    pub const fn tx_hash(&self) -> TxHash {
        self.tx_hash
    }

    /// Await inclusion (one confirmation).
    ///
    /// A receipt with failed status resolves to `TransactionFailed`; the
    /// receipt itself carries no reason string, so the detail names the
    /// call and transaction hash. The wait is unbounded.
    pub async fn confirmed(self) -> Result<Confirmation, SessionError> {
        let receipt = self
            .pending
            .get_receipt()
            .await
            .map_err(|e| SessionError::TransactionFailed(e.to_string()))?;

        if !receipt.status() {
            return Err(SessionError::TransactionFailed(format!(
                "{} reverted on chain (tx {})",
                self.kind, receipt.transaction_hash
            )));
        }

        debug!(
            tx_hash = %receipt.transaction_hash,
            block_number = receipt.block_number,
            gas_used = receipt.gas_used,
            call = %self.kind,
            "Call confirmed"
        );

        Ok(Confirmation {
            tx_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            gas_used: Some(U256::from(receipt.gas_used)),
        })
    }
}

/// Result of a confirmed call.
pub struct Confirmation {
    /// Transaction hash
    pub tx_hash: TxHash,
    /// Block number where transaction was included
    pub block_number: Option<u64>,
    /// Gas used
    pub gas_used: Option<U256>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_kinds_display_as_operation_names() {
        assert_eq!(CallKind::CreateAccount.to_string(), "create-account");
        assert_eq!(CallKind::Deposit.to_string(), "deposit");
        assert_eq!(CallKind::Withdraw.to_string(), "withdraw");
        assert_eq!(CallKind::Transfer.to_string(), "transfer");
    }
}
