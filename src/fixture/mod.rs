//! Funded Test Fixture
//!
//! Builds a [`SimulatedBackend`] pre-funded with freshly generated keypairs.
//! The fixture owns the backend and the keys; test code borrows the backend
//! (composition and delegation, no inheritance of the backend type).

use alloy_primitives::{Address, U256};
use alloy_signer_local::PrivateKeySigner;
use thiserror::Error;
use tracing::info;

use crate::backend::SimulatedBackend;
use crate::constants::default_funding_balance;
use crate::genesis::GenesisConfig;

/// Errors that can occur while assembling a fixture
#[derive(Debug, Error)]
pub enum FixtureError {
    /// A provided private key could not be parsed
    #[error("invalid private key at index {0}")]
    InvalidPrivateKey(usize),
}

/// A simulated backend plus the keypairs funded in its genesis allocation.
///
/// The key list and the genesis allocation are parallel: the keypair at index
/// `i` owns the `i`-th funded address, and both collections have exactly the
/// length requested at construction.
#[derive(Debug)]
pub struct FundedBackend {
    backend: SimulatedBackend,
    keys: Vec<PrivateKeySigner>,
}

impl FundedBackend {
    /// Build a backend funding `amount` freshly generated keypairs with
    /// 100 ETH each.
    ///
    /// Key generation through `PrivateKeySigner::random()` cannot fail, so
    /// construction is infallible; a zero `amount` yields a valid, empty
    /// fixture.
    pub fn new(amount: usize) -> Self {
        Self::with_config(amount, GenesisConfig::default())
    }

    /// Build a backend funding `amount` freshly generated keypairs, with the
    /// chain parameters of `config`. Any accounts already present in the
    /// config keep their allocation.
    pub fn with_config(amount: usize, config: GenesisConfig) -> Self {
        let keys: Vec<PrivateKeySigner> =
            (0..amount).map(|_| PrivateKeySigner::random()).collect();
        Self::from_keys_with_config(keys, config)
    }

    /// Build a backend funding the given keys instead of random ones, for
    /// reproducible fixtures (see [`crate::genesis::dev_signers`]).
    pub fn from_keys(keys: Vec<PrivateKeySigner>) -> Self {
        Self::from_keys_with_config(keys, GenesisConfig::default())
    }

    /// Build a backend from hex-encoded private keys.
    pub fn from_hex_keys(hex_keys: &[&str]) -> Result<Self, FixtureError> {
        let keys = hex_keys
            .iter()
            .enumerate()
            .map(|(i, key)| key.parse().map_err(|_| FixtureError::InvalidPrivateKey(i)))
            .collect::<Result<Vec<PrivateKeySigner>, _>>()?;
        Ok(Self::from_keys(keys))
    }

    /// Build a backend funding the given keys, with the chain parameters of
    /// `config`.
    pub fn from_keys_with_config(keys: Vec<PrivateKeySigner>, mut config: GenesisConfig) -> Self {
        let balance = default_funding_balance();
        for key in &keys {
            config.prefunded_accounts.insert(key.address(), balance);
        }

        let backend = SimulatedBackend::new(config);
        info!(accounts = keys.len(), "funded fixture ready");

        Self { backend, keys }
    }

    /// The underlying chain handle
    pub fn backend(&self) -> &SimulatedBackend {
        &self.backend
    }

    /// Mutable access to the underlying chain handle, used to submit
    /// transactions and mine blocks
    pub fn backend_mut(&mut self) -> &mut SimulatedBackend {
        &mut self.backend
    }

    /// The funded keypairs, in generation order
    pub fn keys(&self) -> &[PrivateKeySigner] {
        &self.keys
    }

    /// The keypair at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for the requested account count.
    pub fn key(&self, index: usize) -> &PrivateKeySigner {
        &self.keys[index]
    }

    /// Funded address at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for the requested account count.
    pub fn address_of(&self, index: usize) -> Address {
        self.keys[index].address()
    }

    /// Confirmed balance of the account at `index`
    pub fn balance_of(&self, index: usize) -> U256 {
        self.backend.balance_of(self.address_of(index))
    }

    /// Split the fixture into its backend and key list
    pub fn into_parts(self) -> (SimulatedBackend, Vec<PrivateKeySigner>) {
        (self.backend, self.keys)
    }
}
