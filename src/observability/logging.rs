//! Structured logging.
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` wins over the configured level when set
//! - Key material and session tokens are never recorded

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Default filter: the configured level for this crate, warnings for dependencies.
pub fn default_filter(level: &str) -> String {
    format!("warn,batch_bridge={}", level)
}

/// Install the global subscriber.
pub fn init_logging(config: &ObservabilityConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(&config.log_level))),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
