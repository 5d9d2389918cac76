//! Wallet credentials and wallet list loading.
//!
//! # Security
//! - Key material lives in zeroizing buffers and is wiped on drop
//! - Keys are never logged or serialized
//! - Derivation errors never echo the key

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use std::fs;
use std::path::Path;
use thiserror::Error;
use zeroize::Zeroizing;

/// Errors raised while turning key material into a signer.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Address derivation failed: {0}")]
    AddressDerivation(String),
}

/// One wallet's private key, as read from the wallet list.
pub struct WalletCredential {
    secret: Zeroizing<String>,
}

impl WalletCredential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Zeroizing::new(secret.into()),
        }
    }

    /// Derive the signer (and with it the address) for this key.
    ///
    /// Accepts the key with or without a `0x` prefix.
    pub fn signer(&self) -> Result<PrivateKeySigner, CredentialError> {
        let trimmed = self.secret.trim();
        let key_hex = trimmed.strip_prefix("0x").unwrap_or(trimmed);

        key_hex.parse::<PrivateKeySigner>().map_err(|_| {
            CredentialError::AddressDerivation(format!(
                "invalid private key ({} characters)",
                key_hex.len()
            ))
        })
    }

    #[cfg(test)]
    pub(crate) fn address(&self) -> Result<Address, CredentialError> {
        self.signer().map(|signer| signer.address())
    }
}

impl std::fmt::Debug for WalletCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("WalletCredential([REDACTED])")
    }
}

/// Load the wallet list: one private key per line, blank lines ignored,
/// file order preserved.
pub fn load_wallets(path: &Path) -> std::io::Result<Vec<WalletCredential>> {
    let content = Zeroizing::new(fs::read_to_string(path)?);

    let wallets: Vec<WalletCredential> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(WalletCredential::new)
        .collect();

    tracing::info!(path = %path.display(), count = wallets.len(), "Wallet list loaded");
    Ok(wallets)
}
