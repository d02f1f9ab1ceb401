//! Value-Transfer Helper
//!
//! One-call ether transfer through a [`SimulatedBackend`]: build, sign,
//! submit, mine one block, return the receipt. The protocol is linear and
//! synchronous; the transaction is final as soon as [`send_value`] returns.

pub mod errors;

pub use errors::TransferError;

use alloy_consensus::{SignableTransaction, TxLegacy};
use alloy_primitives::{Address, Bytes, TxKind, U256};
use alloy_signer::SignerSync;
use alloy_signer_local::PrivateKeySigner;
use tracing::debug;

use crate::backend::{SimulatedBackend, TransactionReceipt};
use crate::constants::TRANSFER_GAS_LIMIT;

/// Transfer `amount` wei from `sender` to `receiver` and mine one block.
///
/// The transaction carries the sender's pending nonce (not the latest
/// confirmed one), so back-to-back calls from the same sender are safe, and
/// is signed under the backend's chain id with replay protection. Gas limit
/// is the fixed [`TRANSFER_GAS_LIMIT`]; gas price is the backend's
/// suggestion.
///
/// On any failure the backend is left exactly as it was: nothing is queued
/// until submission succeeds, and mining follows submission unconditionally.
pub fn send_value(
    backend: &mut SimulatedBackend,
    sender: &PrivateKeySigner,
    receiver: Address,
    amount: U256,
) -> Result<TransactionReceipt, TransferError> {
    let nonce = backend.pending_nonce(sender.address());
    let gas_price = backend.suggest_gas_price();

    let tx = TxLegacy {
        chain_id: Some(backend.chain_id()),
        nonce,
        gas_price,
        gas_limit: TRANSFER_GAS_LIMIT,
        to: TxKind::Call(receiver),
        value: amount,
        input: Bytes::new(),
    };

    let signature = sender
        .sign_hash_sync(&tx.signature_hash())
        .map_err(TransferError::Signing)?;
    let signed = tx.into_signed(signature);

    let tx_hash = backend.send_transaction(signed)?;
    let block_hash = backend.commit();
    debug!(%tx_hash, %block_hash, "transfer mined");

    backend
        .transaction_receipt(&tx_hash)
        .cloned()
        .ok_or(TransferError::ReceiptMissing(tx_hash))
}
