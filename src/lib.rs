//! Batch native-asset bridging.
//!
//! For every wallet in a list: read the balance, compute a bridgeable amount,
//! obtain and commit a quote from the bridging service, then submit an
//! on-chain deposit bound to that quote.

pub mod amount;
pub mod chain;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod observability;
pub mod orchestrator;
pub mod quote;

pub use config::schema::BridgeConfig;
pub use error::{BridgeError, BridgeResult};
pub use lifecycle::run_batch;
pub use orchestrator::{BatchReport, BridgeOrchestrator};
