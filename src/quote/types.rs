//! Bridging service wire models and error definitions.

use alloy::primitives::Address;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use zeroize::Zeroizing;

/// Errors returned by the bridging service client.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Bridge config fetch failed: {0}")]
    ConfigFetch(String),

    #[error("Chain pair not found in bridge configs (chainIn: {chain_in:?}, chainOut: {chain_out:?})")]
    ChainPairNotFound {
        chain_in: Option<String>,
        chain_out: Option<String>,
    },

    #[error("Quote error: {0}")]
    Quote(String),

    #[error("Commit error: {0}")]
    Commit(String),

    #[error("HTTP client setup failed: {0}")]
    Client(String),
}

/// Result type for bridging service operations.
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Session token obtained from the API key. Shared read-only for a whole run.
#[derive(Clone)]
pub struct SessionToken(Zeroizing<String>);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Zeroizing::new(token.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken([REDACTED])")
    }
}

/// Chain names (as keyed in the service catalog) for one bridging direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainPair {
    pub chain_in: String,
    pub chain_out: String,
}

impl std::fmt::Display for ChainPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.chain_in, self.chain_out)
    }
}

/// Service catalog: chain name → chain configuration, in the service's order.
pub type BridgeConfigs = serde_json::Map<String, Value>;

/// Quote identifier issued by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteId(pub String);

impl std::fmt::Display for QuoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Commit confirmation as returned by the service.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct CommitReceipt(pub Value);

/// What the orchestrator asks a quote for.
#[derive(Debug, Clone)]
pub struct QuoteRequest {
    pub token: String,
    pub chain_in: String,
    pub chain_out: String,
    /// Decimal amount string, e.g. `"0.99000000"`.
    pub amount: String,
    pub depositor: Address,
    pub recipient: Address,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthRequest<'a> {
    pub api_key: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AuthResponse {
    pub jwt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserQuoteRequest {
    pub token: String,
    pub chain_in: String,
    pub chain_out: String,
    pub amount: String,
    pub depositor: String,
    pub recipient: String,
    pub mode: &'static str,
    pub amount_native: &'static str,
}

impl From<&QuoteRequest> for UserQuoteRequest {
    fn from(request: &QuoteRequest) -> Self {
        Self {
            token: request.token.clone(),
            chain_in: request.chain_in.clone(),
            chain_out: request.chain_out.clone(),
            amount: request.amount.clone(),
            depositor: request.depositor.to_checksum(None),
            recipient: request.recipient.to_checksum(None),
            mode: "pay",
            amount_native: "0",
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserQuoteResponse {
    pub quote_id: QuoteId,
}

/// A decoded service response: either the expected payload or the service's
/// own error message.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceReply<T> {
    Success(T),
    Failure(String),
}

impl<T: DeserializeOwned> ServiceReply<T> {
    /// Decode a response body. A body carrying a non-empty `error` field is a
    /// failure regardless of the rest of its content.
    pub fn decode(body: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        if let Some(message) = error_message(&value) {
            return Ok(Self::Failure(message));
        }
        serde_json::from_value(value).map(Self::Success)
    }
}

fn error_message(body: &Value) -> Option<String> {
    let error = body.as_object()?.get("error")?;
    match error {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Array(a) if a.is_empty() => None,
        Value::Object(o) if o.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
