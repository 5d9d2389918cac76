//! Bridge orchestration subsystem.
//!
//! # Data Flow
//! ```text
//! wallet credentials (list order)
//!     → runner.rs: derive address
//!         → chain: balance
//!         → amount: bridge amount (zero → skipped)
//!         → quote: request + commit
//!         → amount: commitment id
//!         → chain: nonce, gas price, chain id → build, sign, submit
//!     → state.rs: WalletOutcome per wallet → BatchReport
//!     → pacing.rs: random delay before the next wallet
//! ```
//!
//! # Design Decisions
//! - Strictly sequential; no two wallets are in flight at once
//! - Failures are caught at the wallet boundary and never stop the batch
//! - No retries anywhere; re-running the process is the recovery path

pub mod pacing;
pub mod runner;
pub mod state;

pub use pacing::Pacer;
pub use runner::BridgeOrchestrator;
pub use state::{BatchReport, WalletOutcome, WalletStage, WalletStatus};
