//! Deposit transaction building and signing.
//!
//! # Responsibilities
//! - Encode the `depositNativeWithId(uint256)` call
//! - Build a legacy (gas price) transaction from live chain reads
//! - Sign with the wallet key and encode for raw submission

use alloy::eips::eip2718::Encodable2718;
use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::{Address, Bytes, U256};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use alloy::sol;
use alloy::sol_types::SolCall;

use crate::chain::types::{ChainError, ChainId, ChainResult};

sol! {
    /// Bridge contract entry point binding a native deposit to a committed quote.
    function depositNativeWithId(uint256 commitmentId) external payable;
}

/// Everything needed to build one deposit transaction.
#[derive(Debug, Clone)]
pub struct DepositParams {
    pub from: Address,
    pub contract: Address,
    pub commitment_id: U256,
    pub value: U256,
    pub nonce: u64,
    pub gas_price: u128,
    pub gas_limit: u64,
    pub chain_id: ChainId,
}

/// ABI-encoded calldata for `depositNativeWithId(commitment_id)`.
pub fn deposit_calldata(commitment_id: U256) -> Bytes {
    depositNativeWithIdCall {
        commitmentId: commitment_id,
    }
    .abi_encode()
    .into()
}

/// Build the unsigned deposit transaction.
pub fn build_deposit(params: &DepositParams) -> TransactionRequest {
    TransactionRequest::default()
        .with_from(params.from)
        .with_to(params.contract)
        .with_value(params.value)
        .with_input(deposit_calldata(params.commitment_id))
        .with_nonce(params.nonce)
        .with_gas_price(params.gas_price)
        .with_gas_limit(params.gas_limit)
        .with_chain_id(params.chain_id.0)
}

/// Sign a transaction request and return its EIP-2718 encoding.
pub async fn sign_transaction(
    tx: TransactionRequest,
    signer: PrivateKeySigner,
) -> ChainResult<Bytes> {
    let wallet = EthereumWallet::from(signer);
    let envelope = tx
        .build(&wallet)
        .await
        .map_err(|e| ChainError::Signing(e.to_string()))?;

    Ok(envelope.encoded_2718().into())
}

/// Reject gas prices above the configured cap. A cap of zero disables the check.
pub fn check_gas_price(gas_price: u128, max_gwei: u64) -> ChainResult<()> {
    let current_gwei = gas_price / 1_000_000_000;
    if max_gwei > 0 && current_gwei > max_gwei as u128 {
        return Err(ChainError::GasPriceTooHigh {
            current_gwei: current_gwei.min(u64::MAX as u128) as u64,
            max_gwei,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::consensus::{Transaction, TxEnvelope};
    use alloy::eips::eip2718::Decodable2718;

    const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn params(signer: &PrivateKeySigner) -> DepositParams {
        DepositParams {
            from: signer.address(),
            contract: "0x2b4553122d960ca98075028d68735cc6b15deeb5".parse().unwrap(),
            commitment_id: U256::from(256u64),
            value: U256::from(990_000_000_000_000_000u128),
            nonce: 7,
            gas_price: 1_000_000_000,
            gas_limit: 300_000,
            chain_id: ChainId(204),
        }
    }

    #[test]
    fn test_calldata_layout() {
        let data = deposit_calldata(U256::from(1u64));
        assert_eq!(data.len(), 4 + 32);
        assert_eq!(&data[..4], depositNativeWithIdCall::SELECTOR.as_slice());
        assert_eq!(data[35], 1);
    }

    #[test]
    fn test_build_deposit_fields() {
        let signer: PrivateKeySigner = TEST_PRIVATE_KEY.parse().unwrap();
        let tx = build_deposit(&params(&signer));

        assert_eq!(tx.nonce, Some(7));
        assert_eq!(tx.gas_price, Some(1_000_000_000));
        assert_eq!(tx.gas, Some(300_000));
        assert_eq!(tx.chain_id, Some(204));
        assert_eq!(tx.value, Some(U256::from(990_000_000_000_000_000u128)));
    }

    #[tokio::test]
    async fn test_sign_produces_decodable_envelope() {
        let signer: PrivateKeySigner = TEST_PRIVATE_KEY.parse().unwrap();
        let p = params(&signer);
        let raw = sign_transaction(build_deposit(&p), signer).await.unwrap();

        let envelope = TxEnvelope::decode_2718(&mut raw.as_ref()).unwrap();
        assert!(envelope.is_legacy());
        assert_eq!(envelope.nonce(), 7);
        assert_eq!(envelope.value(), p.value);
        assert_eq!(envelope.chain_id(), Some(204));
        assert_eq!(envelope.to(), Some(p.contract));
        assert_eq!(envelope.input(), &deposit_calldata(p.commitment_id));
    }

    #[test]
    fn test_gas_price_cap() {
        assert!(check_gas_price(5_000_000_000, 10).is_ok());
        assert!(check_gas_price(u128::MAX, 0).is_ok());

        let err = check_gas_price(600_000_000_000, 500).unwrap_err();
        assert!(matches!(
            err,
            ChainError::GasPriceTooHigh { current_gwei: 600, max_gwei: 500 }
        ));
    }
}
