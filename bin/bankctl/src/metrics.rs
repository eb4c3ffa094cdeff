//! Prometheus metrics for the balance watch loop.

use metrics::{counter, describe_counter, describe_gauge, gauge};

/// Aggregated metrics for watch mode.
///
/// Metric descriptions are registered with the global registry on creation.
#[derive(Debug, Clone)]
pub struct Metrics {
    _private: (),
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics instance and register all metric descriptions.
    pub fn new() -> Self {
        Self::register_descriptions();
        Self { _private: () }
    }

    fn register_descriptions() {
        describe_counter!(
            "bankctl_balance_polls_total",
            "Total number of balance polls issued by watch mode"
        );
        describe_counter!(
            "bankctl_balance_poll_failures_total",
            "Total number of failed balance polls"
        );
        describe_gauge!(
            "bankctl_account_balance_wei",
            "Last observed stored account balance in wei"
        );
    }

    /// Record a completed poll.
    pub fn record_poll(&self, success: bool) {
        counter!("bankctl_balance_polls_total").increment(1);
        if !success {
            counter!("bankctl_balance_poll_failures_total").increment(1);
        }
    }

    /// Set the last observed account balance.
    pub fn set_account_balance(&self, balance_wei: u128) {
        gauge!("bankctl_account_balance_wei").set(balance_wei as f64);
    }
}

/// Install the Prometheus metrics exporter and start the HTTP server.
///
/// Returns an error if the server fails to bind to the specified port.
pub fn install_prometheus_exporter(port: u16) -> eyre::Result<()> {
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::net::SocketAddr;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| eyre::eyre!("Failed to install Prometheus exporter: {}", e))?;

    Ok(())
}
