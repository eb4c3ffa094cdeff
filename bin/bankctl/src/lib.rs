pub mod config;
pub mod metrics;

use alloy_provider::Provider;
use session::{AccountStatus, Confirmation, PendingCall, Session};
use tracing::{info, warn};

/// Log the submitted call, then await inclusion and log the outcome.
pub async fn finalize_call(call: PendingCall) -> eyre::Result<Confirmation> {
    info!(call = %call.kind(), tx_hash = %call.tx_hash(), "Submitted, awaiting confirmation");

    let confirmation = call.confirmed().await?;

    info!(
        tx_hash = %confirmation.tx_hash,
        block_number = ?confirmation.block_number,
        gas_used = ?confirmation.gas_used,
        "Confirmed"
    );

    Ok(confirmation)
}

/// Report whether the connected address has a registered account.
///
/// An unregistered account and a failed probe are both soft here: the
/// session stays usable (for `create-account` in particular), so both only
/// log.
pub async fn report_account_status<P>(session: &Session<P>)
where
    P: Provider + Clone,
{
    match session.account_status().await {
        Ok(AccountStatus::Registered { balance }) => {
            info!(
                address = %session.wallet_address(),
                balance = %balance.display(session.decimals()),
                "Bank account registered"
            );
        }
        Ok(AccountStatus::NotRegistered) => {
            warn!(
                address = %session.wallet_address(),
                "No bank account registered for this address. Run `bankctl create-account` to open one."
            );
        }
        Err(e) => {
            warn!(error = %e, "Could not determine account status");
        }
    }
}
