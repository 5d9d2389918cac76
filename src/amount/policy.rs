//! Bridge amount computation and display.

use alloy::primitives::U256;
use thiserror::Error;

use crate::config::AmountConfig;

/// Errors from amount and commitment-id handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("percentage must be within 0..=100, got {0}")]
    InvalidPercentage(u8),

    #[error("precision quantum must be non-zero")]
    ZeroQuantum,

    #[error("precision of {precision} decimals exceeds the asset's {native} decimals")]
    InvalidPrecision { precision: u8, native: u8 },

    #[error("quote id '{0}' is not a valid hex or decimal integer")]
    InvalidQuoteId(String),
}

/// Largest decimal count whose unit (`10^decimals`) fits in a `U256`.
pub const MAX_NATIVE_DECIMALS: u8 = 77;

fn ten_pow(exponent: u8, precision: u8, native: u8) -> Result<U256, AmountError> {
    U256::from(10u64)
        .checked_pow(U256::from(exponent))
        .ok_or(AmountError::InvalidPrecision { precision, native })
}

/// Smallest amount step the service accepts: `10^(native - precision)` base units.
pub fn precision_quantum(native_decimals: u8, precision_decimals: u8) -> Result<U256, AmountError> {
    let invalid = AmountError::InvalidPrecision {
        precision: precision_decimals,
        native: native_decimals,
    };
    if native_decimals > MAX_NATIVE_DECIMALS {
        return Err(invalid);
    }
    let exponent = native_decimals.checked_sub(precision_decimals).ok_or(invalid)?;
    ten_pow(exponent, precision_decimals, native_decimals)
}

/// `floor(balance * percentage / 100)` rounded down to a multiple of `quantum`.
///
/// The result never exceeds `balance * percentage / 100`, so it never exceeds
/// the balance.
pub fn compute_bridge_amount(
    balance: U256,
    percentage: u8,
    quantum: U256,
) -> Result<U256, AmountError> {
    if percentage > 100 {
        return Err(AmountError::InvalidPercentage(percentage));
    }
    if quantum.is_zero() {
        return Err(AmountError::ZeroQuantum);
    }

    let hundred = U256::from(100u64);
    let pct = U256::from(percentage);
    // (b / 100) * p + (b % 100) * p / 100 == floor(b * p / 100) without overflow
    let capped = (balance / hundred) * pct + (balance % hundred) * pct / hundred;

    Ok(capped - capped % quantum)
}

/// Render `amount` base units as a fixed-point decimal with `precision_decimals`
/// fractional digits, truncating anything finer.
pub fn format_amount(
    amount: U256,
    native_decimals: u8,
    precision_decimals: u8,
) -> Result<String, AmountError> {
    let unit = ten_pow(native_decimals, precision_decimals, native_decimals)?;
    let whole = amount / unit;
    if precision_decimals == 0 {
        return Ok(whole.to_string());
    }

    let shown = precision_decimals.min(native_decimals);
    let step = ten_pow(native_decimals - shown, precision_decimals, native_decimals)?;
    let fraction = (amount % unit) / step;

    Ok(format!(
        "{}.{:0>width$}",
        whole,
        fraction.to_string(),
        width = shown as usize
    ))
}

/// Amount policy bound to one configuration.
#[derive(Debug, Clone)]
pub struct AmountPolicy {
    percentage: u8,
    quantum: U256,
    native_decimals: u8,
    precision_decimals: u8,
}

impl AmountPolicy {
    pub fn from_config(config: &AmountConfig) -> Result<Self, AmountError> {
        if config.percentage > 100 {
            return Err(AmountError::InvalidPercentage(config.percentage));
        }
        Ok(Self {
            percentage: config.percentage,
            quantum: precision_quantum(config.native_decimals, config.precision_decimals)?,
            native_decimals: config.native_decimals,
            precision_decimals: config.precision_decimals,
        })
    }

    pub fn bridge_amount(&self, balance: U256) -> Result<U256, AmountError> {
        compute_bridge_amount(balance, self.percentage, self.quantum)
    }

    /// Decimal string sent to the bridging service.
    pub fn format(&self, amount: U256) -> Result<String, AmountError> {
        format_amount(amount, self.native_decimals, self.precision_decimals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_NATIVE: u128 = 1_000_000_000_000_000_000;
    const QUANTUM: u64 = 10_000_000_000;

    #[test]
    fn test_quantum_for_eight_decimals() {
        assert_eq!(precision_quantum(18, 8).unwrap(), U256::from(QUANTUM));
        assert_eq!(precision_quantum(18, 18).unwrap(), U256::from(1u64));
        assert_eq!(
            precision_quantum(8, 18),
            Err(AmountError::InvalidPrecision { precision: 18, native: 8 })
        );
    }

    #[test]
    fn test_one_native_unit_at_99_percent() {
        let amount =
            compute_bridge_amount(U256::from(ONE_NATIVE), 99, U256::from(QUANTUM)).unwrap();
        assert_eq!(amount, U256::from(990_000_000_000_000_000u128));
        assert_eq!(format_amount(amount, 18, 8).unwrap(), "0.99000000");
    }

    #[test]
    fn test_below_one_quantum_is_zero() {
        let amount =
            compute_bridge_amount(U256::from(5_000_000_000u64), 99, U256::from(QUANTUM)).unwrap();
        assert!(amount.is_zero());
    }

    #[test]
    fn test_zero_balance_always_zero() {
        for pct in [0u8, 1, 50, 99, 100] {
            for q in [1u64, 7, QUANTUM] {
                assert!(compute_bridge_amount(U256::ZERO, pct, U256::from(q))
                    .unwrap()
                    .is_zero());
            }
        }
    }

    #[test]
    fn test_bounds_and_quantum_multiple() {
        let balances = [
            1u128,
            99,
            100,
            12_345_678_901_234_567_891,
            ONE_NATIVE + 123_456_789,
            u64::MAX as u128 * 1_000,
        ];
        for b in balances {
            let balance = U256::from(b);
            for pct in [0u8, 1, 33, 99, 100] {
                for q in [1u64, 3, 1_000, QUANTUM] {
                    let quantum = U256::from(q);
                    let amount = compute_bridge_amount(balance, pct, quantum).unwrap();
                    assert!(amount <= balance);
                    assert!(amount <= balance * U256::from(pct) / U256::from(100u64));
                    assert!((amount % quantum).is_zero());
                }
            }
        }
    }

    #[test]
    fn test_max_balance_does_not_overflow() {
        let amount = compute_bridge_amount(U256::MAX, 99, U256::from(QUANTUM)).unwrap();
        assert!(amount < U256::MAX);
        assert!((amount % U256::from(QUANTUM)).is_zero());
    }

    #[test]
    fn test_truncates_downward() {
        // 0.123456789987654321 native at 100% keeps 8 decimals, never rounds up
        let amount = compute_bridge_amount(
            U256::from(123_456_789_987_654_321u128),
            100,
            U256::from(QUANTUM),
        )
        .unwrap();
        assert_eq!(amount, U256::from(123_456_780_000_000_000u128));
        assert_eq!(format_amount(amount, 18, 8).unwrap(), "0.12345678");
    }

    #[test]
    fn test_rejects_bad_inputs() {
        assert_eq!(
            compute_bridge_amount(U256::from(1u64), 101, U256::from(1u64)),
            Err(AmountError::InvalidPercentage(101))
        );
        assert_eq!(
            compute_bridge_amount(U256::from(1u64), 50, U256::ZERO),
            Err(AmountError::ZeroQuantum)
        );
    }

    #[test]
    fn test_format_whole_units() {
        let amount = U256::from(12u64) * U256::from(ONE_NATIVE) + U256::from(50_000_000_000_000_000u128);
        assert_eq!(format_amount(amount, 18, 8).unwrap(), "12.05000000");
        assert_eq!(format_amount(amount, 18, 0).unwrap(), "12");
        assert_eq!(format_amount(U256::ZERO, 18, 8).unwrap(), "0.00000000");
    }

    #[test]
    fn test_policy_from_default_config() {
        let policy = AmountPolicy::from_config(&AmountConfig::default()).unwrap();
        assert_eq!(policy.quantum, U256::from(QUANTUM));
        let amount = policy.bridge_amount(U256::from(ONE_NATIVE)).unwrap();
        assert_eq!(policy.format(amount).unwrap(), "0.99000000");
    }

    #[test]
    fn test_decimals_beyond_u256_are_rejected() {
        assert_eq!(
            precision_quantum(100, 8),
            Err(AmountError::InvalidPrecision { precision: 8, native: 100 })
        );
        assert!(precision_quantum(MAX_NATIVE_DECIMALS, 0).is_ok());
        assert!(format_amount(U256::from(1u64), 78, 8).is_err());

        let config = AmountConfig {
            native_decimals: 100,
            ..AmountConfig::default()
        };
        assert!(matches!(
            AmountPolicy::from_config(&config),
            Err(AmountError::InvalidPrecision { native: 100, .. })
        ));
    }
}
