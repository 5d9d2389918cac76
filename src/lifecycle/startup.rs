//! Startup orchestration.
//!
//! # Responsibilities
//! - Load the wallet list
//! - Authenticate with the bridging service and resolve the chain pair
//! - Connect to the first live RPC endpoint
//! - Hand everything to the orchestrator
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal to the run
//! - Subsystems initialize in order, not concurrently

use std::path::Path;

use crate::chain::{load_wallets, ChainConnector};
use crate::config::BridgeConfig;
use crate::error::BridgeResult;
use crate::orchestrator::{BatchReport, BridgeOrchestrator};
use crate::quote::{resolve_chain_pair, QuoteClient};

/// Run one batch end to end.
///
/// Returns an error only for startup failures; wallet-level failures are
/// reported in the [`BatchReport`].
pub async fn run_batch(config: &BridgeConfig) -> BridgeResult<BatchReport> {
    let wallets = load_wallets(Path::new(&config.wallets_file))?;

    let service = &config.quote_service;
    let client = QuoteClient::new(service)?;
    let session = client.authenticate(&service.api_key).await?;

    let catalog = client.fetch_bridge_configs().await?;
    let pair = resolve_chain_pair(&catalog, &service.source_marker, &service.destination_marker)?;
    tracing::info!(chain_in = %pair.chain_in, chain_out = %pair.chain_out, "Chains resolved");

    let chain = ChainConnector::from_config(&config.chain).await?;
    tracing::info!(rpc_url = %chain.endpoint(), "Chain connector ready");

    let orchestrator = BridgeOrchestrator::new(config, &chain, &client, &session, &pair)?;
    Ok(orchestrator.run(wallets).await)
}
