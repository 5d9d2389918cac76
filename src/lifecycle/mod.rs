//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Wallet list → Authenticate → Chain pair → Connect → Orchestrate
//! ```
//!
//! # Design Decisions
//! - Ordered startup: wallet list, then service session, then chain
//! - No mid-batch cancellation; process exit is the only stop point

pub mod startup;

pub use startup::run_batch;
