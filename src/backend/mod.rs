//! In-memory Simulated Backend
//!
//! A single-process stand-in for an Ethereum node, scoped to plain value
//! transfers: per-account balances and nonces, a pending pool, one-shot block
//! mining via [`SimulatedBackend::commit`], and receipt storage. There is no
//! EVM; contract creation and calls are rejected at submission.
//!
//! The backend is not internally synchronized. Callers serialize access
//! through `&mut`, which matches its single-test lifetime.

pub mod errors;

pub use errors::BackendError;

use alloy_consensus::{Signed, TxLegacy};
use alloy_genesis::Genesis;
use alloy_primitives::{Address, Keccak256, TxKind, B256, U256};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::constants::{
    BLOCK_PERIOD_SECS, DEFAULT_GAS_PRICE, TX_BASE_GAS, TX_DATA_NON_ZERO_GAS, TX_DATA_ZERO_GAS,
};
use crate::genesis::{create_genesis, GenesisConfig};

/// Balance and nonce of a single account
#[derive(Debug, Clone, Default)]
struct AccountState {
    balance: U256,
    nonce: u64,
}

/// A validated transaction waiting to be mined
#[derive(Debug, Clone)]
struct PendingTransaction {
    sender: Address,
    tx: Signed<TxLegacy>,
}

/// A mined block
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Block height
    pub number: u64,
    /// Block hash
    pub hash: B256,
    /// Hash of the parent block
    pub parent_hash: B256,
    /// Block timestamp
    pub timestamp: u64,
    /// Total gas consumed by the block's transactions
    pub gas_used: u64,
    /// Hashes of the included transactions, in execution order
    pub transactions: Vec<B256>,
}

/// Post-execution confirmation record for a mined transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// Hash of the transaction
    pub transaction_hash: B256,
    /// Position of the transaction within its block
    pub transaction_index: u64,
    /// Height of the block containing the transaction
    pub block_number: u64,
    /// Hash of the block containing the transaction
    pub block_hash: B256,
    /// Recovered sender
    pub from: Address,
    /// Recipient of the transfer
    pub to: Address,
    /// Gas consumed by this transaction
    pub gas_used: u64,
    /// Gas price actually paid per unit
    pub effective_gas_price: u128,
    /// Gas consumed by the block up to and including this transaction
    pub cumulative_gas_used: u64,
    /// Whether execution succeeded
    pub success: bool,
}

/// In-memory simulated chain seeded from a genesis allocation
#[derive(Debug)]
pub struct SimulatedBackend {
    chain_id: u64,
    gas_limit: u64,
    genesis: Genesis,
    accounts: HashMap<Address, AccountState>,
    pending: Vec<PendingTransaction>,
    blocks: Vec<Block>,
    receipts: HashMap<B256, TransactionReceipt>,
}

impl SimulatedBackend {
    /// Create a backend seeded with the config's allocation and a genesis
    /// block at height 0.
    pub fn new(config: GenesisConfig) -> Self {
        let genesis = create_genesis(&config);

        let mut accounts = HashMap::with_capacity(config.prefunded_accounts.len());
        for (address, balance) in &config.prefunded_accounts {
            accounts.insert(*address, AccountState { balance: *balance, nonce: 0 });
        }

        let genesis_block = Block {
            number: 0,
            hash: block_hash(B256::ZERO, 0, config.timestamp, &[]),
            parent_hash: B256::ZERO,
            timestamp: config.timestamp,
            gas_used: 0,
            transactions: vec![],
        };

        debug!(
            chain_id = config.chain_id,
            accounts = accounts.len(),
            "simulated backend initialized"
        );

        Self {
            chain_id: config.chain_id,
            gas_limit: config.gas_limit,
            genesis,
            accounts,
            pending: Vec::new(),
            blocks: vec![genesis_block],
            receipts: HashMap::new(),
        }
    }

    /// Chain ID of the backend
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Block gas limit of the backend
    pub fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    /// The genesis blob the backend was seeded from
    pub fn genesis(&self) -> &Genesis {
        &self.genesis
    }

    /// Height of the latest mined block
    pub fn block_number(&self) -> u64 {
        self.blocks.last().map(|b| b.number).unwrap_or(0)
    }

    /// Look up a mined block by height
    pub fn block_by_number(&self, number: u64) -> Option<&Block> {
        self.blocks.get(number as usize)
    }

    /// Confirmed balance of an account (zero for unknown addresses)
    pub fn balance_of(&self, address: Address) -> U256 {
        self.accounts.get(&address).map(|a| a.balance).unwrap_or(U256::ZERO)
    }

    /// Confirmed nonce of an account (zero for unknown addresses)
    pub fn nonce_of(&self, address: Address) -> u64 {
        self.accounts.get(&address).map(|a| a.nonce).unwrap_or(0)
    }

    /// Nonce the account's next transaction should carry: the confirmed nonce
    /// plus any transactions already queued from the same sender.
    pub fn pending_nonce(&self, address: Address) -> u64 {
        let queued = self.pending.iter().filter(|p| p.sender == address).count() as u64;
        self.nonce_of(address) + queued
    }

    /// Suggested gas price, fixed in the simulated environment
    pub fn suggest_gas_price(&self) -> u128 {
        DEFAULT_GAS_PRICE
    }

    /// Number of transactions waiting to be mined
    pub fn pending_transaction_count(&self) -> usize {
        self.pending.len()
    }

    /// Validate a signed transaction and queue it for the next block.
    ///
    /// Rejection leaves the backend untouched: confirmed state only changes
    /// in [`Self::commit`], and only for transactions accepted here.
    pub fn send_transaction(&mut self, tx: Signed<TxLegacy>) -> Result<B256, BackendError> {
        let inner = tx.tx();

        match inner.chain_id {
            Some(id) if id == self.chain_id => {}
            got => return Err(BackendError::InvalidChainId { got, expected: self.chain_id }),
        }

        let sender = tx
            .recover_signer()
            .map_err(|e| BackendError::InvalidSignature(e.to_string()))?;

        let to = match inner.to {
            TxKind::Call(address) => address,
            TxKind::Create => return Err(BackendError::ContractCreationUnsupported),
        };

        let intrinsic = intrinsic_gas(inner);
        if inner.gas_limit < intrinsic {
            return Err(BackendError::IntrinsicGasTooLow {
                limit: inner.gas_limit,
                intrinsic,
            });
        }
        if inner.gas_limit > self.gas_limit {
            return Err(BackendError::ExceedsBlockGasLimit {
                limit: inner.gas_limit,
                max: self.gas_limit,
            });
        }

        let expected = self.pending_nonce(sender);
        if inner.nonce < expected {
            return Err(BackendError::NonceTooLow { got: inner.nonce, expected });
        }
        if inner.nonce > expected {
            return Err(BackendError::NonceGap { got: inner.nonce, expected });
        }

        let need = max_cost(inner);
        let have = self.pending_balance(sender);
        if have < need {
            return Err(BackendError::InsufficientFunds { need, have });
        }

        let hash = *tx.hash();
        debug!(%hash, %sender, to = %to, value = %inner.value, "transaction queued");
        self.pending.push(PendingTransaction { sender, tx });

        Ok(hash)
    }

    /// Mine one block containing every queued transaction, in submission
    /// order. Submission-time validation guarantees execution cannot fail, so
    /// every receipt reports success.
    pub fn commit(&mut self) -> B256 {
        let queued = std::mem::take(&mut self.pending);

        let parent = self.blocks.last().expect("genesis block always present");
        let number = parent.number + 1;
        let parent_hash = parent.hash;
        let timestamp = parent.timestamp + BLOCK_PERIOD_SECS;

        let mut cumulative_gas = 0u64;
        let mut tx_hashes = Vec::with_capacity(queued.len());
        let mut executed = Vec::with_capacity(queued.len());

        for (index, pending) in queued.into_iter().enumerate() {
            let inner = pending.tx.tx();
            let gas_used = intrinsic_gas(inner);
            let fee = U256::from(gas_used) * U256::from(inner.gas_price);
            let to = match inner.to {
                TxKind::Call(address) => address,
                // Unreachable: creation is rejected at submission.
                TxKind::Create => Address::ZERO,
            };

            let sender = self
                .accounts
                .entry(pending.sender)
                .or_default();
            sender.balance -= inner.value + fee;
            sender.nonce += 1;

            self.accounts.entry(to).or_default().balance += inner.value;

            cumulative_gas += gas_used;
            let hash = *pending.tx.hash();
            tx_hashes.push(hash);
            executed.push(TransactionReceipt {
                transaction_hash: hash,
                transaction_index: index as u64,
                block_number: number,
                block_hash: B256::ZERO, // patched once the block hash is known
                from: pending.sender,
                to,
                gas_used,
                effective_gas_price: inner.gas_price,
                cumulative_gas_used: cumulative_gas,
                success: true,
            });
        }

        let hash = block_hash(parent_hash, number, timestamp, &tx_hashes);
        for mut receipt in executed {
            receipt.block_hash = hash;
            self.receipts.insert(receipt.transaction_hash, receipt);
        }

        debug!(
            number,
            %hash,
            transactions = tx_hashes.len(),
            gas_used = cumulative_gas,
            "block mined"
        );

        self.blocks.push(Block {
            number,
            hash,
            parent_hash,
            timestamp,
            gas_used: cumulative_gas,
            transactions: tx_hashes,
        });

        hash
    }

    /// Look up the receipt of a mined transaction by hash
    pub fn transaction_receipt(&self, hash: &B256) -> Option<&TransactionReceipt> {
        self.receipts.get(hash)
    }

    /// Balance available to the sender once queued transactions are mined,
    /// reserving the maximum cost of each.
    fn pending_balance(&self, address: Address) -> U256 {
        let reserved: U256 = self
            .pending
            .iter()
            .filter(|p| p.sender == address)
            .map(|p| max_cost(p.tx.tx()))
            .sum();
        self.balance_of(address).saturating_sub(reserved)
    }
}

/// Intrinsic gas of a transaction: base cost plus calldata cost
fn intrinsic_gas(tx: &TxLegacy) -> u64 {
    let mut gas = TX_BASE_GAS;
    for byte in tx.input.iter() {
        if *byte == 0 {
            gas += TX_DATA_ZERO_GAS;
        } else {
            gas += TX_DATA_NON_ZERO_GAS;
        }
    }
    gas
}

/// Maximum cost a transaction can charge its sender
fn max_cost(tx: &TxLegacy) -> U256 {
    tx.value + U256::from(tx.gas_limit) * U256::from(tx.gas_price)
}

/// Hash binding a block to its parent, height, timestamp, and transactions
fn block_hash(parent_hash: B256, number: u64, timestamp: u64, transactions: &[B256]) -> B256 {
    let mut hasher = Keccak256::new();
    hasher.update(parent_hash.as_slice());
    hasher.update(number.to_be_bytes());
    hasher.update(timestamp.to_be_bytes());
    for tx_hash in transactions {
        hasher.update(tx_hash.as_slice());
    }
    hasher.finalize()
}
