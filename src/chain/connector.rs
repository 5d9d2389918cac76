//! Chain connector: one live JSON-RPC endpoint selected from a candidate list.
//!
//! # Responsibilities
//! - Probe candidate endpoints in order and keep the first live one
//! - Query chain state (balance, nonce, gas price, chain id)
//! - Submit signed raw transactions
//! - Bound every call with the configured timeout

use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::transports::TransportResult;
use async_trait::async_trait;
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::chain::types::{ChainError, ChainId, ChainResult};
use crate::config::ChainConfig;
use crate::observability::metrics;

/// Chain operations the orchestrator depends on.
#[async_trait]
pub trait ChainRpc: Send + Sync {
    /// Native balance of `address` in wei.
    async fn get_balance(&self, address: Address) -> ChainResult<U256>;

    /// Transaction count (next nonce) of `address`.
    async fn get_nonce(&self, address: Address) -> ChainResult<u64>;

    /// Current gas price in wei.
    async fn get_gas_price(&self) -> ChainResult<u128>;

    async fn get_chain_id(&self) -> ChainResult<ChainId>;

    /// Broadcast an EIP-2718 encoded signed transaction.
    async fn submit(&self, raw_tx: Bytes) -> ChainResult<TxHash>;
}

/// Connection to a single live RPC endpoint.
#[derive(Clone)]
pub struct ChainConnector {
    provider: Arc<dyn Provider + Send + Sync>,
    endpoint: url::Url,
    timeout_duration: Duration,
}

impl ChainConnector {
    /// Connect using the endpoint list and timeout from configuration.
    pub async fn from_config(config: &ChainConfig) -> ChainResult<Self> {
        Self::connect(&config.rpc_urls, Duration::from_secs(config.rpc_timeout_secs)).await
    }

    /// Try each candidate in order and keep the first that answers a
    /// liveness probe.
    ///
    /// Makes a single pass; the caller may call again to retry.
    pub async fn connect(candidates: &[String], timeout_duration: Duration) -> ChainResult<Self> {
        for candidate in candidates {
            let endpoint: url::Url = match candidate.parse() {
                Ok(url) => url,
                Err(e) => {
                    tracing::warn!(url = %candidate, error = %e, "Ignoring invalid RPC URL");
                    continue;
                }
            };

            let provider = Arc::new(ProviderBuilder::new().connect_http(endpoint.clone()))
                as Arc<dyn Provider + Send + Sync>;

            match timeout(timeout_duration, provider.get_block_number()).await {
                Ok(Ok(block)) => {
                    tracing::info!(rpc_url = %endpoint, block, "Connected to RPC endpoint");
                    return Ok(Self {
                        provider,
                        endpoint,
                        timeout_duration,
                    });
                }
                Ok(Err(e)) => {
                    tracing::warn!(rpc_url = %endpoint, error = %e, "RPC endpoint failed liveness probe");
                }
                Err(_) => {
                    tracing::warn!(rpc_url = %endpoint, "RPC endpoint timed out on liveness probe");
                }
            }
        }

        Err(ChainError::NoEndpointAvailable {
            tried: candidates.len(),
        })
    }

    /// The endpoint this connector is bound to.
    pub fn endpoint(&self) -> &url::Url {
        &self.endpoint
    }

    async fn read<T, F>(&self, op: &'static str, call: F) -> ChainResult<T>
    where
        F: IntoFuture<Output = TransportResult<T>>,
    {
        match timeout(self.timeout_duration, call).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(e)) => {
                metrics::record_rpc_error(op);
                Err(ChainError::Read {
                    op,
                    reason: e.to_string(),
                })
            }
            Err(_) => {
                metrics::record_rpc_error(op);
                Err(ChainError::Timeout {
                    op,
                    secs: self.timeout_duration.as_secs(),
                })
            }
        }
    }
}

#[async_trait]
impl ChainRpc for ChainConnector {
    async fn get_balance(&self, address: Address) -> ChainResult<U256> {
        self.read("get_balance", self.provider.get_balance(address)).await
    }

    async fn get_nonce(&self, address: Address) -> ChainResult<u64> {
        self.read("get_transaction_count", self.provider.get_transaction_count(address))
            .await
    }

    async fn get_gas_price(&self) -> ChainResult<u128> {
        self.read("get_gas_price", self.provider.get_gas_price()).await
    }

    async fn get_chain_id(&self) -> ChainResult<ChainId> {
        self.read("get_chain_id", self.provider.get_chain_id())
            .await
            .map(ChainId)
    }

    async fn submit(&self, raw_tx: Bytes) -> ChainResult<TxHash> {
        match timeout(self.timeout_duration, self.provider.send_raw_transaction(&raw_tx)).await {
            Ok(Ok(pending)) => Ok(*pending.tx_hash()),
            Ok(Err(e)) => {
                metrics::record_rpc_error("send_raw_transaction");
                Err(ChainError::Submit(e.to_string()))
            }
            Err(_) => {
                metrics::record_rpc_error("send_raw_transaction");
                Err(ChainError::Submit(format!(
                    "timed out after {} seconds",
                    self.timeout_duration.as_secs()
                )))
            }
        }
    }
}

impl std::fmt::Debug for ChainConnector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainConnector")
            .field("endpoint", &self.endpoint.as_str())
            .field("timeout_secs", &self.timeout_duration.as_secs())
            .finish()
    }
}
