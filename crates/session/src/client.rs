use crate::{
    call::{CallKind, PendingCall},
    AccountStatus, Balance, SessionError,
};
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use binding::bank::IDecentralisedBank;
use config::BankConfig;
use tracing::debug;
use wallet::{fill_transaction, Wallet};

/// A live session against the deployed bank contract.
///
/// Holds the connected wallet, the provider and the resolved contract
/// address. Written once at construction and only read by operations, so
/// the session stays usable across operation failures. Only a missing
/// wallet prevents a session from existing at all.
pub struct Session<P> {
    provider: P,
    wallet: Wallet,
    bank: Address,
    chain_id: u64,
    decimals: u8,
}

impl<P> Session<P>
where
    P: Provider + Clone,
{
    /// Bind a session to the deployed bank contract.
    pub const fn new(provider: P, wallet: Wallet, config: &BankConfig) -> Self {
        Self {
            provider,
            wallet,
            bank: config.bank,
            chain_id: config.chain_id,
            decimals: config.decimals,
        }
    }

    /// Address of the connected wallet.
    pub const fn wallet_address(&self) -> Address {
        self.wallet.address()
    }

    /// Asset precision used for amount conversion.
    pub const fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Probe whether the connected address has a registered account.
    ///
    /// Uses the contract's `accountExists` query directly; error text is
    /// never inspected to infer a missing account.
    pub async fn account_status(&self) -> Result<AccountStatus, SessionError> {
        let bank = IDecentralisedBank::new(self.bank, &self.provider);

        let exists = bank
            .accountExists(self.wallet.address())
            .call()
            .await
            .map_err(|e| SessionError::UnknownQuery(e.to_string()))?;

        if !exists {
            return Ok(AccountStatus::NotRegistered);
        }

        let balance = bank
            .getAccountBalance(self.wallet.address())
            .call()
            .await
            .map_err(|e| SessionError::UnknownQuery(e.to_string()))?;

        Ok(AccountStatus::Registered {
            balance: Balance::new(self.wallet.address(), balance),
        })
    }

    /// Register an account for the connected address.
    ///
    /// Registering twice reverts inside the contract and surfaces as
    /// `TransactionFailed` with the revert reason.
    pub async fn create_account(&self) -> Result<PendingCall, SessionError> {
        let bank = IDecentralisedBank::new(self.bank, &self.provider);
        let call = bank.CreateAccount();
        self.submit(CallKind::CreateAccount, call.into_transaction_request())
            .await
    }

    /// Deposit a display-unit amount into the caller's account.
    ///
    /// The amount travels as transferred value on the call.
    pub async fn deposit(&self, amount: &str) -> Result<PendingCall, SessionError> {
        let value = self.convert_amount(amount)?;
        let bank = IDecentralisedBank::new(self.bank, &self.provider);
        let call = bank.Deposit().value(value);
        self.submit(CallKind::Deposit, call.into_transaction_request())
            .await
    }

    /// Withdraw a display-unit amount from the caller's stored balance.
    ///
    /// The amount travels as the call argument, not as transferred value.
    /// Insufficient stored balance is enforced inside the contract and
    /// observed here as `TransactionFailed` with the revert reason.
    pub async fn withdraw(&self, amount: &str) -> Result<PendingCall, SessionError> {
        let value = self.convert_amount(amount)?;
        let bank = IDecentralisedBank::new(self.bank, &self.provider);
        let call = bank.withdraw(value);
        self.submit(CallKind::Withdraw, call.into_transaction_request())
            .await
    }

    /// Transfer a display-unit amount to another registered account.
    ///
    /// The recipient is validated before the amount; either failure means
    /// nothing is submitted.
    pub async fn transfer(
        &self,
        recipient: &str,
        amount: &str,
    ) -> Result<PendingCall, SessionError> {
        let to = recipient
            .parse::<Address>()
            .map_err(|e| SessionError::InvalidAddress {
                input: recipient.to_string(),
                detail: e.to_string(),
            })?;
        let value = self.convert_amount(amount)?;
        let bank = IDecentralisedBank::new(self.bank, &self.provider);
        let call = bank.transfer(to, value);
        self.submit(CallKind::Transfer, call.into_transaction_request())
            .await
    }

    /// Query the stored balance of `account`.
    pub async fn balance_of(&self, account: Address) -> Result<Balance, SessionError> {
        let balance = IDecentralisedBank::new(self.bank, &self.provider)
            .getAccountBalance(account)
            .call()
            .await
            .map_err(|e| SessionError::BalanceQueryFailed(e.to_string()))?;

        Ok(Balance::new(account, balance))
    }

    fn convert_amount(&self, input: &str) -> Result<U256, SessionError> {
        amount::parse_amount(input, self.decimals).map_err(|source| SessionError::InvalidAmount {
            input: input.to_string(),
            source,
        })
    }

    /// Fill, sign and broadcast a state-changing call.
    ///
    /// Submission can fail immediately: the wallet user may reject the
    /// signature prompt, and a call that would revert fails during gas
    /// estimation with the chain's revert reason attached.
    async fn submit(
        &self,
        kind: CallKind,
        tx: TransactionRequest,
    ) -> Result<PendingCall, SessionError> {
        let tx = fill_transaction(tx, &self.provider, self.wallet.address(), self.chain_id)
            .await
            .map_err(|e| SessionError::TransactionFailed(e.to_string()))?;

        let raw = self.wallet.sign_transaction(tx).await?;

        let pending = self
            .provider
            .send_raw_transaction(&raw)
            .await
            .map_err(|e| SessionError::TransactionFailed(e.to_string()))?;

        let tx_hash = *pending.tx_hash();
        debug!(call = %kind, %tx_hash, "Call submitted");

        Ok(PendingCall::new(kind, tx_hash, pending))
    }
}
