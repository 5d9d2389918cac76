//! Amount policy subsystem.
//!
//! # Data Flow
//! ```text
//! balance (wei)
//!     → policy.rs (percentage cap, truncate to precision quantum)
//!     → bridge amount (wei) + decimal string for the service
//! quote id (string)
//!     → commitment.rs (hex/decimal parse)
//!     → commitment id (uint256) for the deposit call
//! ```
//!
//! All functions are pure.

pub mod commitment;
pub mod policy;

pub use commitment::quote_id_to_commitment_id;
pub use policy::{
    compute_bridge_amount, format_amount, precision_quantum, AmountError, AmountPolicy,
    MAX_NATIVE_DECIMALS,
};
