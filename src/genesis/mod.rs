//! Genesis Configuration for the Simulated Backend
//!
//! This module provides utilities for creating genesis allocations that seed
//! the in-memory backend, plus export helpers producing a `Genesis` blob
//! compatible with standard Ethereum tooling.

pub mod accounts;

// Re-export public API
pub use accounts::{dev_addresses, dev_signers, DEV_PRIVATE_KEYS};

use alloy_genesis::{Genesis, GenesisAccount};
use alloy_primitives::{Address, U256};
use alloy_signer_local::PrivateKeySigner;
use std::collections::BTreeMap;

use crate::constants::{DEFAULT_CHAIN_ID, GENESIS_GAS_LIMIT};

/// Configuration for seeding a simulated backend
#[derive(Debug, Clone)]
pub struct GenesisConfig {
    /// Chain ID
    pub chain_id: u64,
    /// Gas limit for every block, starting with genesis
    pub gas_limit: u64,
    /// Timestamp of the genesis block
    pub timestamp: u64,
    /// Accounts to prefund with their balances
    pub prefunded_accounts: BTreeMap<Address, U256>,
}

impl Default for GenesisConfig {
    fn default() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID,
            gas_limit: GENESIS_GAS_LIMIT,
            timestamp: 0,
            prefunded_accounts: BTreeMap::new(),
        }
    }
}

impl GenesisConfig {
    /// Create a configuration funding the address of every given key with the
    /// same balance. Allocation entries stay parallel to the key list.
    pub fn funded(keys: &[PrivateKeySigner], balance: U256) -> Self {
        let mut prefunded = BTreeMap::new();
        for key in keys {
            prefunded.insert(key.address(), balance);
        }

        Self { prefunded_accounts: prefunded, ..Default::default() }
    }

    /// Builder method to add a prefunded account
    pub fn with_prefunded_account(mut self, address: Address, balance: U256) -> Self {
        self.prefunded_accounts.insert(address, balance);
        self
    }

    /// Builder method to set the chain ID
    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Builder method to set the block gas limit
    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = gas_limit;
        self
    }

    /// Builder method to set the genesis timestamp
    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Create a tooling-compatible genesis blob from the config
pub fn create_genesis(config: &GenesisConfig) -> Genesis {
    // Convert prefunded accounts to genesis alloc format
    let mut alloc = BTreeMap::new();
    for (address, balance) in &config.prefunded_accounts {
        alloc.insert(
            *address,
            GenesisAccount {
                balance: *balance,
                nonce: None,
                code: None,
                storage: None,
                private_key: None,
            },
        );
    }

    // Build the chain config JSON with all pre-merge forks active from block 0
    let chain_config = serde_json::json!({
        "chainId": config.chain_id,
        "homesteadBlock": 0,
        "eip150Block": 0,
        "eip155Block": 0,
        "eip158Block": 0,
        "byzantiumBlock": 0,
        "constantinopleBlock": 0,
        "petersburgBlock": 0,
        "istanbulBlock": 0,
        "berlinBlock": 0,
        "londonBlock": 0,
    });

    Genesis {
        config: serde_json::from_value(chain_config).expect("valid chain config"),
        nonce: 0,
        timestamp: config.timestamp,
        extra_data: Default::default(),
        gas_limit: config.gas_limit,
        difficulty: U256::from(1),
        mix_hash: Default::default(),
        coinbase: Address::ZERO,
        alloc,
        number: None,
        parent_hash: None,
        base_fee_per_gas: None,
        excess_blob_gas: None,
        blob_gas_used: None,
    }
}

/// Helper to serialize a genesis blob to JSON (for use with other tools)
pub fn genesis_to_json(genesis: &Genesis) -> String {
    serde_json::to_string_pretty(genesis).expect("genesis serialization should not fail")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::default_funding_balance;

    #[test]
    fn test_default_config() {
        let config = GenesisConfig::default();
        assert_eq!(config.chain_id, DEFAULT_CHAIN_ID);
        assert_eq!(config.gas_limit, GENESIS_GAS_LIMIT);
        assert!(config.prefunded_accounts.is_empty());
    }

    #[test]
    fn test_funded_config_parallel_to_keys() {
        let keys: Vec<PrivateKeySigner> =
            (0..4).map(|_| PrivateKeySigner::random()).collect();
        let config = GenesisConfig::funded(&keys, default_funding_balance());

        assert_eq!(config.prefunded_accounts.len(), keys.len());
        for key in &keys {
            assert_eq!(
                config.prefunded_accounts.get(&key.address()),
                Some(&default_funding_balance())
            );
        }
    }

    #[test]
    fn test_create_genesis_alloc() {
        let keys: Vec<PrivateKeySigner> =
            (0..2).map(|_| PrivateKeySigner::random()).collect();
        let config = GenesisConfig::funded(&keys, default_funding_balance());
        let genesis = create_genesis(&config);

        assert_eq!(genesis.config.chain_id, DEFAULT_CHAIN_ID);
        assert_eq!(genesis.gas_limit, GENESIS_GAS_LIMIT);
        assert_eq!(genesis.alloc.len(), 2);
        for key in &keys {
            let account = genesis.alloc.get(&key.address()).unwrap();
            assert_eq!(account.balance, default_funding_balance());
        }
    }

    #[test]
    fn test_genesis_json_roundtrip() {
        let config = GenesisConfig::default()
            .with_prefunded_account(Address::ZERO, U256::from(1u64));
        let genesis = create_genesis(&config);

        let json = genesis_to_json(&genesis);
        let parsed: Genesis = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.alloc.len(), 1);
        assert_eq!(parsed.config.chain_id, DEFAULT_CHAIN_ID);
    }

    #[test]
    fn test_builder_overrides() {
        let config = GenesisConfig::default()
            .with_chain_id(31337)
            .with_gas_limit(30_000_000)
            .with_timestamp(1_700_000_000);

        assert_eq!(config.chain_id, 31337);
        assert_eq!(config.gas_limit, 30_000_000);
        assert_eq!(config.timestamp, 1_700_000_000);
    }
}
