//! Top-level error taxonomy.

use thiserror::Error;

use crate::amount::AmountError;
use crate::chain::{ChainError, CredentialError};
use crate::config::ConfigError;
use crate::quote::QuoteError;

/// Any failure of a bridging run or of a single wallet within it.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Wallet list could not be read: {0}")]
    WalletList(#[from] std::io::Error),

    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error(transparent)]
    Amount(#[from] AmountError),

    #[error(transparent)]
    Credential(#[from] CredentialError),
}

/// Result type for bridging operations.
pub type BridgeResult<T> = Result<T, BridgeError>;
