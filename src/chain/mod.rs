//! Chain integration subsystem.
//!
//! # Data Flow
//! ```text
//! wallet list file
//!     → wallet.rs (zeroizing credentials, address derivation)
//! candidate RPC URLs
//!     → connector.rs (first live endpoint, bounded reads, raw submission)
//! commitment id + amount + live nonce/gas/chain id
//!     → transaction.rs (deposit calldata, build, sign, encode)
//! ```
//!
//! # Security Constraints
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts

pub mod connector;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use connector::{ChainConnector, ChainRpc};
pub use types::{ChainError, ChainId, ChainResult};
pub use wallet::{load_wallets, CredentialError, WalletCredential};
