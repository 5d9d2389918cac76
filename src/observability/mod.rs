//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events, run/wallet spans)
//!     → metrics.rs (counters, histograms)
//! ```
//!
//! # Design Decisions
//! - Human-readable `fmt` output; one line per progress step
//! - Each run carries a run_id span, each wallet a wallet span
//! - Metrics go through the `metrics` facade; no recorder is installed here

pub mod logging;
pub mod metrics;
