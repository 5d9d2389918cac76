//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for a bridging run.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Root configuration for a bridging run.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Path of the wallet list (one private key per line).
    pub wallets_file: String,

    /// Chain endpoint and deposit contract settings.
    pub chain: ChainConfig,

    /// Bridging service (quote/commit API) settings.
    pub quote_service: QuoteServiceConfig,

    /// Bridge amount policy.
    pub amount: AmountConfig,

    /// Inter-wallet pacing.
    pub pacing: PacingConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Chain connector and deposit transaction configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Candidate JSON-RPC endpoints, tried in order.
    pub rpc_urls: Vec<String>,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Address of the bridge deposit contract.
    pub deposit_contract: String,

    /// Gas limit attached to every deposit transaction.
    pub gas_limit: u64,

    /// Maximum gas price in gwei (protection against spikes).
    pub max_gas_price_gwei: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_urls: vec![
                "https://1rpc.io/opbnb".to_string(),
                "https://opbnb-rpc.publicnode.com".to_string(),
            ],
            rpc_timeout_secs: 30,
            deposit_contract: "0x2b4553122d960ca98075028d68735cc6b15deeb5".to_string(),
            gas_limit: 300_000,
            max_gas_price_gwei: 500,
        }
    }
}

/// Bridging service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct QuoteServiceConfig {
    /// Base URL of the service API.
    pub base_url: String,

    /// API key exchanged for a session token.
    pub api_key: ApiKey,

    /// Symbol of the native token being bridged.
    pub token_symbol: String,

    /// Case-insensitive substring identifying the source chain.
    pub source_marker: String,

    /// Case-insensitive substring identifying the destination chain.
    pub destination_marker: String,

    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for QuoteServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.rhino.fi".to_string(),
            api_key: ApiKey::default(),
            token_symbol: "BNB".to_string(),
            source_marker: "opbnb".to_string(),
            destination_marker: "binance".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Bridge amount policy configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AmountConfig {
    /// Share of the balance to bridge, in percent. Must stay below 100 so
    /// the remainder pays for gas.
    pub percentage: u8,

    /// Decimals of the native asset (18 for BNB/ETH).
    pub native_decimals: u8,

    /// Fractional digits the service accepts; amounts are truncated to
    /// this precision.
    pub precision_decimals: u8,
}

impl Default for AmountConfig {
    fn default() -> Self {
        Self {
            percentage: 99,
            native_decimals: 18,
            precision_decimals: 8,
        }
    }
}

/// Pacing between wallets.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Lower bound of the random delay in seconds.
    pub min_delay_secs: f64,

    /// Upper bound of the random delay in seconds.
    pub max_delay_secs: f64,

    /// Move straight to the next wallet after a failure instead of pacing.
    pub skip_after_failure: bool,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            min_delay_secs: 5.0,
            max_delay_secs: 10.0,
            skip_after_failure: false,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Install the Prometheus metrics recorder.
    pub metrics_enabled: bool,

    /// Where to write the Prometheus text snapshot after the run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_file: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_file: None,
        }
    }
}

/// API key for the bridging service.
///
/// Cleared from memory on drop and never printed or serialized.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

impl Serialize for ApiKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("[REDACTED]")
    }
}

impl<'de> Deserialize<'de> for ApiKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self)
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            wallets_file: "wallets.txt".to_string(),
            chain: ChainConfig::default(),
            quote_service: QuoteServiceConfig::default(),
            amount: AmountConfig::default(),
            pacing: PacingConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}
