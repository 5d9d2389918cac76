//! Quote id to on-chain commitment id conversion.

use alloy::primitives::U256;

use crate::amount::policy::AmountError;

/// Convert a service quote id into the integer passed to the deposit contract.
///
/// A `0x`-prefixed id is always hexadecimal. Any other id is parsed as
/// hexadecimal first and only falls back to decimal when that fails, so a
/// digits-only id such as `"100"` maps to 256.
pub fn quote_id_to_commitment_id(quote_id: &str) -> Result<U256, AmountError> {
    let id = quote_id.trim();
    let invalid = || AmountError::InvalidQuoteId(id.to_string());

    if let Some(hex) = id.strip_prefix("0x").or_else(|| id.strip_prefix("0X")) {
        if hex.is_empty() {
            return Err(invalid());
        }
        return U256::from_str_radix(hex, 16).map_err(|_| invalid());
    }

    if id.is_empty() {
        return Err(invalid());
    }

    U256::from_str_radix(id, 16)
        .or_else(|_| U256::from_str_radix(id, 10))
        .map_err(|_| invalid())
}
