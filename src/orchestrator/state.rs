//! Per-wallet state machine and batch report.

use alloy::primitives::{Address, TxHash, U256};
use std::time::Duration;

use crate::quote::QuoteId;

/// Placeholder logged when a wallet's address could not be derived.
pub const UNKNOWN_ADDRESS: &str = "<unknown>";

/// Progress of one wallet through the bridging sequence.
///
/// ```text
/// Start → BalanceRead → AmountComputed → QuoteObtained → QuoteCommitted
///       → TransactionBuilt → TransactionSigned → TransactionSubmitted
/// AmountComputed (zero amount) → Skipped
/// any stage (error) → Failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletStage {
    Start,
    BalanceRead,
    AmountComputed,
    QuoteObtained,
    QuoteCommitted,
    TransactionBuilt,
    TransactionSigned,
    TransactionSubmitted,
}

impl std::fmt::Display for WalletStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WalletStage::Start => "start",
            WalletStage::BalanceRead => "balance_read",
            WalletStage::AmountComputed => "amount_computed",
            WalletStage::QuoteObtained => "quote_obtained",
            WalletStage::QuoteCommitted => "quote_committed",
            WalletStage::TransactionBuilt => "transaction_built",
            WalletStage::TransactionSigned => "transaction_signed",
            WalletStage::TransactionSubmitted => "transaction_submitted",
        };
        f.write_str(name)
    }
}

/// Terminal status of one wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletStatus {
    /// Deposit broadcast.
    Submitted {
        tx_hash: TxHash,
        quote_id: QuoteId,
        amount: U256,
    },
    /// Bridge amount was zero; nothing requested or sent.
    Skipped { balance: U256 },
    /// Failed after reaching `stage`.
    Failed { stage: WalletStage, error: String },
}

impl WalletStatus {
    /// Label used for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            WalletStatus::Submitted { .. } => "submitted",
            WalletStatus::Skipped { .. } => "skipped",
            WalletStatus::Failed { .. } => "failed",
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, WalletStatus::Failed { .. })
    }
}

/// Result of processing one wallet.
#[derive(Debug, Clone)]
pub struct WalletOutcome {
    /// Position in the wallet list.
    pub index: usize,
    /// Derived address, if derivation succeeded.
    pub address: Option<Address>,
    pub status: WalletStatus,
    /// Delay slept before the next wallet, if any.
    pub paced_after: Option<Duration>,
}

impl WalletOutcome {
    /// Last stage this wallet reached.
    pub fn final_stage(&self) -> WalletStage {
        match &self.status {
            WalletStatus::Submitted { .. } => WalletStage::TransactionSubmitted,
            WalletStatus::Skipped { .. } => WalletStage::AmountComputed,
            WalletStatus::Failed { stage, .. } => *stage,
        }
    }

    /// Address for display, or a placeholder.
    pub fn display_address(&self) -> String {
        self.address
            .map(|a| a.to_string())
            .unwrap_or_else(|| UNKNOWN_ADDRESS.to_string())
    }
}

/// Outcomes of a whole run, in wallet list order.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub outcomes: Vec<WalletOutcome>,
}

impl BatchReport {
    fn count(&self, label: &str) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status.label() == label)
            .count()
    }

    pub fn submitted(&self) -> usize {
        self.count("submitted")
    }

    pub fn skipped(&self) -> usize {
        self.count("skipped")
    }

    pub fn failed(&self) -> usize {
        self.count("failed")
    }
}
