//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize, env overrides)
//!     → validation.rs (semantic checks)
//!     → BridgeConfig (validated, immutable)
//!     → passed by reference to connector, quote client and orchestrator
//! ```
//!
//! # Design Decisions
//! - Config is built once at process start and never mutated afterwards
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Secrets come from the file or `BRIDGE_API_KEY`, never logged

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    AmountConfig, ApiKey, BridgeConfig, ChainConfig, ObservabilityConfig, PacingConfig,
    QuoteServiceConfig,
};
