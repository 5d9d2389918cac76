//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, percentage below 100)
//! - Check that endpoints and the contract address parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: BridgeConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use alloy::primitives::Address;
use thiserror::Error;

use crate::amount::MAX_NATIVE_DECIMALS;
use crate::config::schema::BridgeConfig;

/// Longest accepted pacing delay, one day.
pub const MAX_PACING_DELAY_SECS: f64 = 86_400.0;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("chain.rpc_urls must not be empty")]
    NoRpcUrls,

    #[error("chain.rpc_urls contains invalid URL '{0}'")]
    InvalidRpcUrl(String),

    #[error("{field} '{value}' is not a valid URL")]
    InvalidUrl { field: &'static str, value: String },

    #[error("chain.deposit_contract '{0}' is not a valid address")]
    InvalidContractAddress(String),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("amount.percentage must be between 1 and 99, got {0}")]
    PercentageOutOfRange(u8),

    #[error("amount.precision_decimals ({precision}) exceeds amount.native_decimals ({native})")]
    PrecisionTooFine { precision: u8, native: u8 },

    #[error("amount.native_decimals ({0}) exceeds the supported maximum of 77")]
    NativeDecimalsTooLarge(u8),

    #[error("pacing delays must be within 0..=86400 seconds with min <= max")]
    InvalidPacing,

    #[error("quote_service.api_key is empty")]
    MissingApiKey,

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &BridgeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let chain = &config.chain;
    if chain.rpc_urls.is_empty() {
        errors.push(ValidationError::NoRpcUrls);
    }
    for url in &chain.rpc_urls {
        if url.parse::<url::Url>().is_err() {
            errors.push(ValidationError::InvalidRpcUrl(url.clone()));
        }
    }
    if chain.deposit_contract.parse::<Address>().is_err() {
        errors.push(ValidationError::InvalidContractAddress(
            chain.deposit_contract.clone(),
        ));
    }
    if chain.rpc_timeout_secs == 0 {
        errors.push(ValidationError::Zero("chain.rpc_timeout_secs"));
    }
    if chain.gas_limit == 0 {
        errors.push(ValidationError::Zero("chain.gas_limit"));
    }

    let service = &config.quote_service;
    if service.api_key.is_empty() {
        errors.push(ValidationError::MissingApiKey);
    }
    if service.base_url.parse::<url::Url>().is_err() {
        errors.push(ValidationError::InvalidUrl {
            field: "quote_service.base_url",
            value: service.base_url.clone(),
        });
    }
    if service.token_symbol.trim().is_empty() {
        errors.push(ValidationError::Empty("quote_service.token_symbol"));
    }
    if service.source_marker.trim().is_empty() {
        errors.push(ValidationError::Empty("quote_service.source_marker"));
    }
    if service.destination_marker.trim().is_empty() {
        errors.push(ValidationError::Empty("quote_service.destination_marker"));
    }
    if service.request_timeout_secs == 0 {
        errors.push(ValidationError::Zero("quote_service.request_timeout_secs"));
    }

    let amount = &config.amount;
    if amount.percentage == 0 || amount.percentage >= 100 {
        errors.push(ValidationError::PercentageOutOfRange(amount.percentage));
    }
    if amount.native_decimals > MAX_NATIVE_DECIMALS {
        errors.push(ValidationError::NativeDecimalsTooLarge(amount.native_decimals));
    }
    if amount.precision_decimals > amount.native_decimals {
        errors.push(ValidationError::PrecisionTooFine {
            precision: amount.precision_decimals,
            native: amount.native_decimals,
        });
    }

    let pacing = &config.pacing;
    let in_range = |secs: f64| (0.0..=MAX_PACING_DELAY_SECS).contains(&secs);
    if !in_range(pacing.min_delay_secs)
        || !in_range(pacing.max_delay_secs)
        || pacing.min_delay_secs > pacing.max_delay_secs
    {
        errors.push(ValidationError::InvalidPacing);
    }

    let level = config.observability.log_level.to_lowercase();
    if !["trace", "debug", "info", "warn", "error"].contains(&level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if config.wallets_file.trim().is_empty() {
        errors.push(ValidationError::Empty("wallets_file"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
