use alloy_primitives::U256;
use thiserror::Error;

/// Errors produced when a transaction is rejected by the simulated backend
#[derive(Debug, Error)]
pub enum BackendError {
    /// Transaction was signed for a different chain
    #[error("invalid chain id: got {got:?}, expected {expected}")]
    InvalidChainId {
        /// Chain ID carried by the transaction, if any
        got: Option<u64>,
        /// Chain ID of the backend
        expected: u64,
    },

    /// Sender recovery from the signature failed
    #[error("invalid transaction signature: {0}")]
    InvalidSignature(String),

    /// Gas limit does not cover the intrinsic cost of the transaction
    #[error("intrinsic gas too low: limit {limit}, need {intrinsic}")]
    IntrinsicGasTooLow {
        /// Gas limit of the transaction
        limit: u64,
        /// Intrinsic gas required
        intrinsic: u64,
    },

    /// Transaction gas limit exceeds the block gas limit
    #[error("gas limit {limit} exceeds block gas limit {max}")]
    ExceedsBlockGasLimit {
        /// Gas limit of the transaction
        limit: u64,
        /// Block gas limit of the backend
        max: u64,
    },

    /// Nonce is below the sender's pending nonce
    #[error("nonce too low: got {got}, expected {expected}")]
    NonceTooLow {
        /// Nonce of the transaction
        got: u64,
        /// Pending nonce of the sender
        expected: u64,
    },

    /// Nonce is ahead of the sender's pending nonce
    #[error("nonce gap: got {got}, expected {expected}")]
    NonceGap {
        /// Nonce of the transaction
        got: u64,
        /// Pending nonce of the sender
        expected: u64,
    },

    /// Sender cannot cover value plus maximum gas cost
    #[error("insufficient funds: need {need}, have {have}")]
    InsufficientFunds {
        /// Value plus gas limit times gas price
        need: U256,
        /// Pending balance of the sender
        have: U256,
    },

    /// The backend only executes plain value transfers
    #[error("contract creation is not supported by the simulated backend")]
    ContractCreationUnsupported,
}
