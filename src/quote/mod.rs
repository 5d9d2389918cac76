//! Bridging service subsystem.
//!
//! # Data Flow
//! ```text
//! API key
//!     → client.rs authenticate (session token, reused for the run)
//!     → client.rs fetch_bridge_configs (chain catalog)
//!     → chains.rs (source/destination chain names)
//! per wallet:
//!     → client.rs request_quote (quote id)
//!     → client.rs commit_quote (confirmation)
//! ```
//!
//! # Design Decisions
//! - Responses decode into `ServiceReply` (payload or service error), never raw maps
//! - Every request carries the configured timeout
//! - No retries: a failed quote or commit fails the wallet

pub mod chains;
pub mod client;
pub mod types;

pub use chains::resolve_chain_pair;
pub use client::{BridgeService, QuoteClient};
pub use types::{
    BridgeConfigs, ChainPair, CommitReceipt, QuoteError, QuoteId, QuoteRequest, QuoteResult,
    ServiceReply, SessionToken,
};
