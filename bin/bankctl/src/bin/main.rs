//! CLI session client for the deployed decentralised bank contract.
//!
//! Each subcommand maps to one bank operation. Startup mirrors the session
//! initialisation sequence: connect the wallet, bind the session to the
//! deployed contract, then probe whether the connected address already has
//! a registered account.

use alloy_primitives::Address;
use bankctl::{
    config::Config,
    finalize_call,
    metrics::{install_prometheus_exporter, Metrics},
    report_account_status,
};
use clap::{Parser, Subcommand};
use session::Session;
use std::time::Duration;
use tokio::time;
use tracing::{error, info};
use wallet::{Wallet, WalletSource};

#[derive(Parser)]
#[command(name = "bankctl")]
#[command(about = "Session client for the deployed decentralised bank contract")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Private key for signing transactions (hex string, with or without 0x prefix)
    #[arg(short = 'k', long, env = "PRIVATE_KEY")]
    private_key: Option<String>,

    /// Wallet bridge URL, used when no private key is supplied
    #[arg(long)]
    wallet_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report whether the connected address has a registered account
    Status,

    /// Register a bank account for the connected address
    CreateAccount,

    /// Deposit an amount (display units, e.g. "1.5") into the account
    Deposit { amount: String },

    /// Withdraw an amount (display units) from the stored balance
    Withdraw { amount: String },

    /// Transfer an amount (display units) to another registered account
    Transfer { to: String, amount: String },

    /// Query the stored balance of an address (defaults to the wallet's)
    Balance { address: Option<Address> },

    /// Poll the account balance on an interval, exporting metrics
    Watch {
        /// Seconds between polls
        #[arg(long, default_value_t = 30)]
        interval_secs: u64,
    },
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_file(&cli.config)?;
    let bank = config.bank_config();

    info!("Loaded config:");
    info!("  RPC URL: {}", config.rpc_url);
    info!("  Network: {:?}", config.network);
    info!("  Bank contract: {}", bank.bank);

    let provider = wallet::create_provider(&config.rpc_url).await?;

    let source = WalletSource::resolve(
        cli.private_key,
        cli.wallet_url.or_else(|| config.wallet_url.clone()),
    )?;
    let wallet = Wallet::connect(source, bank.chain_id).await?;
    info!(address = %wallet.address(), "Wallet connected");

    let session = Session::new(provider, wallet, &bank);

    match cli.command {
        Command::Status => {
            report_account_status(&session).await;
        }
        Command::CreateAccount => {
            report_account_status(&session).await;
            let call = session.create_account().await?;
            finalize_call(call).await?;
            info!("Account created");
        }
        Command::Deposit { amount } => {
            report_account_status(&session).await;
            let call = session.deposit(&amount).await?;
            finalize_call(call).await?;
            info!(%amount, "Deposit confirmed");
        }
        Command::Withdraw { amount } => {
            report_account_status(&session).await;
            let call = session.withdraw(&amount).await?;
            finalize_call(call).await?;
            info!(%amount, "Withdrawal confirmed");
        }
        Command::Transfer { to, amount } => {
            report_account_status(&session).await;
            let call = session.transfer(&to, &amount).await?;
            finalize_call(call).await?;
            info!(%to, %amount, "Transfer confirmed");
        }
        Command::Balance { address } => {
            let account = address.unwrap_or_else(|| session.wallet_address());
            let balance = session.balance_of(account).await?;
            info!(
                %account,
                balance = %balance.display(session.decimals()),
                "Stored balance"
            );
        }
        Command::Watch { interval_secs } => {
            if let Some(port) = config.metrics_port {
                install_prometheus_exporter(port)?;
                info!(port, "Prometheus exporter listening");
            }
            let metrics = Metrics::new();
            let owner = session.wallet_address();

            info!(interval_secs, "Starting balance watch loop...");
            let mut interval = time::interval(Duration::from_secs(interval_secs));

            loop {
                interval.tick().await;

                match session.balance_of(owner).await {
                    Ok(balance) => {
                        metrics.record_poll(true);
                        metrics.set_account_balance(
                            u128::try_from(balance.base_units).unwrap_or(u128::MAX),
                        );
                        info!(balance = %balance.display(session.decimals()), "Stored balance");
                    }
                    Err(e) => {
                        metrics.record_poll(false);
                        error!(error = %e, "Balance poll failed");
                    }
                }
            }
        }
    }

    Ok(())
}
