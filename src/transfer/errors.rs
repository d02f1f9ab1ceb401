use alloy_primitives::B256;
use thiserror::Error;

use crate::backend::BackendError;

/// Errors surfaced by the value-transfer helper, tagged with the step that
/// produced them. No step is retried; the first failure short-circuits.
#[derive(Debug, Error)]
pub enum TransferError {
    /// Signing the transfer transaction failed
    #[error("signing transfer transaction failed: {0}")]
    Signing(#[source] alloy_signer::Error),

    /// The backend rejected the signed transaction
    #[error("transaction submission rejected: {0}")]
    Submission(#[from] BackendError),

    /// The mined block does not contain a receipt for the transaction
    #[error("no receipt found for mined transaction {0}")]
    ReceiptMissing(B256),
}
