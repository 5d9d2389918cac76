//! Bridge orchestrator: runs every wallet through balance → quote → deposit.

use alloy::primitives::utils::format_ether;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use tracing::Instrument;
use uuid::Uuid;

use crate::amount::{quote_id_to_commitment_id, AmountPolicy};
use crate::chain::transaction::{build_deposit, check_gas_price, sign_transaction, DepositParams};
use crate::chain::{ChainRpc, WalletCredential};
use crate::config::validation::ValidationError;
use crate::config::{BridgeConfig, ConfigError};
use crate::error::BridgeResult;
use crate::observability::metrics;
use crate::orchestrator::pacing::Pacer;
use crate::orchestrator::state::{
    BatchReport, WalletOutcome, WalletStage, WalletStatus, UNKNOWN_ADDRESS,
};
use crate::quote::{BridgeService, ChainPair, QuoteRequest, SessionToken};

/// Drives a batch of wallets, one at a time, in list order.
///
/// The chain connection, session token and chain pair are shared read-only
/// across the batch; everything else is per wallet.
pub struct BridgeOrchestrator<'a, C, Q> {
    chain: &'a C,
    service: &'a Q,
    session: &'a SessionToken,
    pair: &'a ChainPair,
    policy: AmountPolicy,
    pacer: Pacer,
    contract: Address,
    token_symbol: String,
    gas_limit: u64,
    max_gas_price_gwei: u64,
}

impl<'a, C, Q> BridgeOrchestrator<'a, C, Q>
where
    C: ChainRpc,
    Q: BridgeService,
{
    pub fn new(
        config: &BridgeConfig,
        chain: &'a C,
        service: &'a Q,
        session: &'a SessionToken,
        pair: &'a ChainPair,
    ) -> BridgeResult<Self> {
        let contract = config.chain.deposit_contract.parse::<Address>().map_err(|_| {
            ConfigError::Validation(vec![ValidationError::InvalidContractAddress(
                config.chain.deposit_contract.clone(),
            )])
        })?;

        Ok(Self {
            chain,
            service,
            session,
            pair,
            policy: AmountPolicy::from_config(&config.amount)?,
            pacer: Pacer::from_config(&config.pacing),
            contract,
            token_symbol: config.quote_service.token_symbol.clone(),
            gas_limit: config.chain.gas_limit,
            max_gas_price_gwei: config.chain.max_gas_price_gwei,
        })
    }

    /// Replace the pacer (e.g. to shorten delays).
    pub fn with_pacer(mut self, pacer: Pacer) -> Self {
        self.pacer = pacer;
        self
    }

    /// Process every wallet. Per-wallet failures are logged and recorded in
    /// the report; they never stop the batch.
    ///
    /// Credentials are consumed so each key is wiped as soon as its wallet
    /// is done.
    pub async fn run(&self, wallets: Vec<WalletCredential>) -> BatchReport {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("bridge_run", %run_id);

        async move {
            let total = wallets.len();
            tracing::info!(wallets = total, pair = %self.pair, "Starting bridge run");

            let mut report = BatchReport::default();
            for (index, credential) in wallets.into_iter().enumerate() {
                let mut outcome = self
                    .process_wallet(index, credential)
                    .instrument(tracing::info_span!("wallet", index))
                    .await;
                metrics::record_wallet_outcome(outcome.status.label());

                let is_last = index + 1 == total;
                if !is_last && self.pacer.should_pace(&outcome.status) {
                    outcome.paced_after = Some(self.pacer.pause().await);
                }
                report.outcomes.push(outcome);
            }

            tracing::info!(
                submitted = report.submitted(),
                skipped = report.skipped(),
                failed = report.failed(),
                "Bridge run finished"
            );
            report
        }
        .instrument(span)
        .await
    }

    async fn process_wallet(&self, index: usize, credential: WalletCredential) -> WalletOutcome {
        let signer = match credential.signer() {
            Ok(signer) => signer,
            Err(e) => {
                tracing::error!(address = UNKNOWN_ADDRESS, error = %e, "Wallet failed");
                return WalletOutcome {
                    index,
                    address: None,
                    status: WalletStatus::Failed {
                        stage: WalletStage::Start,
                        error: e.to_string(),
                    },
                    paced_after: None,
                };
            }
        };
        drop(credential);

        let address = signer.address();
        let mut stage = WalletStage::Start;
        let status = match self.bridge_wallet(signer, &mut stage).await {
            Ok(status) => status,
            Err(e) => {
                tracing::error!(%address, %stage, error = %e, "Wallet failed");
                WalletStatus::Failed {
                    stage,
                    error: e.to_string(),
                }
            }
        };

        WalletOutcome {
            index,
            address: Some(address),
            status,
            paced_after: None,
        }
    }

    /// The per-wallet sequence. `stage` tracks the last step completed so a
    /// failure can be attributed.
    async fn bridge_wallet(
        &self,
        signer: PrivateKeySigner,
        stage: &mut WalletStage,
    ) -> BridgeResult<WalletStatus> {
        let address = signer.address();

        let balance = self.chain.get_balance(address).await?;
        *stage = WalletStage::BalanceRead;

        let amount = self.policy.bridge_amount(balance)?;
        *stage = WalletStage::AmountComputed;

        if amount.is_zero() {
            tracing::info!(%address, balance = %format_ether(balance), "Balance too low, skipped");
            return Ok(WalletStatus::Skipped { balance });
        }

        let amount_str = self.policy.format(amount)?;
        tracing::info!(
            %address,
            balance = %format_ether(balance),
            amount = %amount_str,
            token = %self.token_symbol,
            "Bridging"
        );

        // A capped gas price must fail the wallet before any quote is committed.
        check_gas_price(self.chain.get_gas_price().await?, self.max_gas_price_gwei)?;

        // Bridges to the same address on the destination chain.
        let request = QuoteRequest {
            token: self.token_symbol.clone(),
            chain_in: self.pair.chain_in.clone(),
            chain_out: self.pair.chain_out.clone(),
            amount: amount_str,
            depositor: address,
            recipient: address,
        };
        let quote_id = self.service.request_quote(self.session, &request).await?;
        *stage = WalletStage::QuoteObtained;

        self.service.commit_quote(self.session, &quote_id).await?;
        *stage = WalletStage::QuoteCommitted;
        tracing::debug!(%address, %quote_id, "Quote committed");

        let commitment_id = quote_id_to_commitment_id(&quote_id.0)?;

        let nonce = self.chain.get_nonce(address).await?;
        let gas_price = self.chain.get_gas_price().await?;
        check_gas_price(gas_price, self.max_gas_price_gwei)?;
        let chain_id = self.chain.get_chain_id().await?;

        let tx = build_deposit(&DepositParams {
            from: address,
            contract: self.contract,
            commitment_id,
            value: amount,
            nonce,
            gas_price,
            gas_limit: self.gas_limit,
            chain_id,
        });
        *stage = WalletStage::TransactionBuilt;

        let raw = sign_transaction(tx, signer).await?;
        *stage = WalletStage::TransactionSigned;

        let tx_hash = self.chain.submit(raw).await?;
        *stage = WalletStage::TransactionSubmitted;

        tracing::info!(%address, %tx_hash, %quote_id, "Deposit submitted");
        Ok(WalletStatus::Submitted {
            tx_hash,
            quote_id,
            amount,
        })
    }
}
