//! Chain-specific types and error definitions.

use thiserror::Error;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

/// Errors that can occur during chain operations.
#[derive(Debug, Error)]
pub enum ChainError {
    /// No candidate endpoint answered the liveness probe.
    #[error("No RPC endpoint available (tried {tried} candidates)")]
    NoEndpointAvailable { tried: usize },

    /// A read (balance, nonce, gas price, chain id) failed at the node or transport.
    #[error("RPC read '{op}' failed: {reason}")]
    Read { op: &'static str, reason: String },

    /// RPC request timed out.
    #[error("RPC '{op}' timed out after {secs} seconds")]
    Timeout { op: &'static str, secs: u64 },

    /// The node rejected a raw transaction.
    #[error("Transaction submission failed: {0}")]
    Submit(String),

    /// Transaction could not be built or signed.
    #[error("Transaction signing failed: {0}")]
    Signing(String),

    /// Gas price exceeded maximum allowed.
    #[error("Gas price {current_gwei} gwei exceeds maximum {max_gwei} gwei")]
    GasPriceTooHigh { current_gwei: u64, max_gwei: u64 },
}

/// Result type for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;
