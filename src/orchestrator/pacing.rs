//! Randomized pacing between wallets.

use rand::Rng;
use std::time::Duration;

use crate::config::validation::MAX_PACING_DELAY_SECS;
use crate::config::PacingConfig;
use crate::observability::metrics;
use crate::orchestrator::state::WalletStatus;

/// Sleeps a uniformly random delay in `[min, max]` between wallets.
#[derive(Debug, Clone)]
pub struct Pacer {
    min: Duration,
    max: Duration,
    skip_after_failure: bool,
}

impl Pacer {
    pub fn new(min: Duration, max: Duration) -> Self {
        Self {
            min,
            max,
            skip_after_failure: false,
        }
    }

    pub fn from_config(config: &PacingConfig) -> Self {
        Self {
            min: delay_from_secs(config.min_delay_secs),
            max: delay_from_secs(config.max_delay_secs),
            skip_after_failure: config.skip_after_failure,
        }
    }

    pub fn skip_after_failure(mut self, skip: bool) -> Self {
        self.skip_after_failure = skip;
        self
    }

    /// Draw the next delay.
    pub fn next_delay(&self) -> Duration {
        let min_ms = self.min.as_millis() as u64;
        let max_ms = self.max.as_millis() as u64;
        if max_ms <= min_ms {
            return self.min;
        }
        Duration::from_millis(rand::thread_rng().gen_range(min_ms..=max_ms))
    }

    /// Whether to pace after a wallet that ended with `status`.
    pub fn should_pace(&self, status: &WalletStatus) -> bool {
        !(self.skip_after_failure && status.is_failed())
    }

    /// Sleep for a freshly drawn delay and return it.
    pub async fn pause(&self) -> Duration {
        let delay = self.next_delay();
        tracing::debug!(delay_ms = delay.as_millis() as u64, "Pacing before next wallet");
        tokio::time::sleep(delay).await;
        metrics::record_pacing_delay(delay);
        delay
    }
}

/// Clamp to `0..=MAX_PACING_DELAY_SECS`; NaN becomes zero.
fn delay_from_secs(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs.clamp(0.0, MAX_PACING_DELAY_SECS)).unwrap_or_default()
}
