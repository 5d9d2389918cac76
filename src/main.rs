//! batch-bridge
//!
//! Bridges the native balance of every wallet in a list through the
//! bridging service, one wallet at a time.
//!
//! # Run Overview
//!
//! ```text
//!   wallets.txt ──▶ credentials ─────────────────────────────┐
//!                                                            ▼
//!   API key ──▶ session ──▶ catalog ──▶ chain pair ──▶ ┌──────────────┐
//!                                                      │ orchestrator │──▶ report
//!   RPC candidates ──▶ first live endpoint ──────────▶ └──────────────┘
//!                                                        per wallet:
//!                                balance → amount → quote → commit → deposit
//! ```

use clap::Parser;
use std::path::{Path, PathBuf};

use batch_bridge::config::loader::{resolve_config, CliOverrides};
use batch_bridge::observability::logging::init_logging;
use batch_bridge::observability::metrics::{init_metrics, write_snapshot};
use batch_bridge::run_batch;

#[derive(Parser)]
#[command(name = "batch-bridge")]
#[command(about = "Bridge the native balance of every wallet in a list", long_about = None)]
struct Cli {
    /// TOML configuration file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Wallet list, one private key per line (overrides `wallets_file`)
    #[arg(short, long)]
    wallets: Option<String>,

    /// Log level (overrides `observability.log_level`)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = resolve_config(
        cli.config.as_deref(),
        CliOverrides {
            wallets_file: cli.wallets,
            log_level: cli.log_level,
        },
    )?;

    init_logging(&config.observability);
    tracing::info!("batch-bridge v{} starting", env!("CARGO_PKG_VERSION"));

    let metrics = if config.observability.metrics_enabled {
        match init_metrics() {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::warn!(error = %e, "Metrics recorder not installed");
                None
            }
        }
    } else {
        None
    };

    tracing::info!(
        wallets_file = %config.wallets_file,
        rpc_candidates = config.chain.rpc_urls.len(),
        percentage = config.amount.percentage,
        min_delay_secs = config.pacing.min_delay_secs,
        max_delay_secs = config.pacing.max_delay_secs,
        "Configuration loaded"
    );

    let result = run_batch(&config).await;

    if let (Some(handle), Some(path)) = (&metrics, &config.observability.metrics_file) {
        match write_snapshot(handle, Path::new(path)) {
            Ok(()) => tracing::debug!(path = %path, "Metrics snapshot written"),
            Err(e) => tracing::warn!(path = %path, error = %e, "Failed to write metrics snapshot"),
        }
    }

    match result {
        Ok(report) => {
            tracing::info!(
                processed = report.outcomes.len(),
                submitted = report.submitted(),
                "Done"
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Bridge run aborted");
            Err(e.into())
        }
    }
}
