//! Live state-changing operations against the configured bank deployment.
//!
//! These tests submit real transactions and spend funds on the configured
//! network; they are opt-in only. Run with:
//! ```bash
//! cargo test --package bankctl --test ops -- --ignored
//! ```

#[path = "setup.rs"]
mod setup;

use amount::parse_amount;
use session::{AccountStatus, Session, SessionError};
use setup::{load_test_config, setup_provider, setup_wallet};

#[tokio::test]
#[ignore = "submits real transactions - requires a funded key and tests/test-config.toml"]
async fn deposit_reflects_in_stored_balance() {
    let config = load_test_config();
    let bank = config.bank_config();

    let provider = setup_provider(&config.rpc_url).await;
    let wallet = setup_wallet(bank.chain_id);
    let owner = wallet.address();
    let session = Session::new(provider, wallet, &bank);

    // A fresh address needs an account before it can deposit.
    let status = session.account_status().await.expect("status probe failed");
    if matches!(status, AccountStatus::NotRegistered) {
        let call = session
            .create_account()
            .await
            .expect("create-account submission failed");
        call.confirmed()
            .await
            .expect("create-account confirmation failed");
    }

    let before = session.balance_of(owner).await.expect("balance query failed");

    let call = session.deposit("1.5").await.expect("deposit submission failed");
    let confirmation = call.confirmed().await.expect("deposit confirmation failed");
    assert!(
        confirmation.block_number.is_some(),
        "Transaction should be included in a block"
    );

    let after = session.balance_of(owner).await.expect("balance query failed");
    let expected = parse_amount("1.5", bank.decimals).expect("valid amount");
    assert_eq!(after.base_units - before.base_units, expected);
}

#[tokio::test]
#[ignore = "submits real transactions - requires a funded key and tests/test-config.toml"]
async fn oversized_withdraw_surfaces_revert_reason() {
    let config = load_test_config();
    let bank = config.bank_config();

    let provider = setup_provider(&config.rpc_url).await;
    let wallet = setup_wallet(bank.chain_id);
    let session = Session::new(provider, wallet, &bank);

    // Far beyond any balance the test account holds. The contract enforces
    // the stored-balance check; it can reject at gas estimation or on chain.
    let result = match session.withdraw("1000000").await {
        Err(e) => Err(e),
        Ok(call) => call.confirmed().await.map(|_| ()),
    };

    match result {
        Err(SessionError::TransactionFailed(reason)) => {
            println!("Revert reason: {reason}");
        }
        other => panic!("expected TransactionFailed, got {other:?}"),
    }
}

#[tokio::test]
#[ignore = "submits real transactions - requires a funded key and tests/test-config.toml"]
async fn duplicate_create_account_fails() {
    let config = load_test_config();
    let bank = config.bank_config();

    let provider = setup_provider(&config.rpc_url).await;
    let wallet = setup_wallet(bank.chain_id);
    let session = Session::new(provider, wallet, &bank);

    // Ensure the account exists first.
    if matches!(
        session.account_status().await.expect("status probe failed"),
        AccountStatus::NotRegistered
    ) {
        let call = session
            .create_account()
            .await
            .expect("create-account submission failed");
        call.confirmed()
            .await
            .expect("create-account confirmation failed");
    }

    // A second registration must be rejected by the contract.
    let result = match session.create_account().await {
        Err(e) => Err(e),
        Ok(call) => call.confirmed().await.map(|_| ()),
    };

    assert!(
        matches!(result, Err(SessionError::TransactionFailed(_))),
        "expected TransactionFailed, got {result:?}"
    );
}
