//! Run metrics.
//!
//! # Metrics
//! - `bridge_wallets_total` (counter): wallets processed, by outcome
//! - `bridge_rpc_errors_total` (counter): failed chain RPC calls, by operation
//! - `bridge_pacing_delay_seconds` (histogram): delays slept between wallets
//!
//! Recorded through the `metrics` facade. The binary installs a Prometheus
//! recorder and can write a text snapshot when the run ends, for a node
//! exporter textfile collector.

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::path::Path;
use std::time::Duration;

/// Install the Prometheus recorder globally.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Write the current metrics in Prometheus text format.
pub fn write_snapshot(handle: &PrometheusHandle, path: &Path) -> std::io::Result<()> {
    std::fs::write(path, handle.render())
}

pub fn record_wallet_outcome(outcome: &'static str) {
    ::metrics::counter!("bridge_wallets_total", "outcome" => outcome).increment(1);
}

pub fn record_rpc_error(op: &'static str) {
    ::metrics::counter!("bridge_rpc_errors_total", "op" => op).increment(1);
}

pub fn record_pacing_delay(delay: Duration) {
    ::metrics::histogram!("bridge_pacing_delay_seconds").record(delay.as_secs_f64());
}
