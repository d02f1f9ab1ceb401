use alloy_primitives::U256;

/// Default chain ID for the simulated backend (standard local-testing ID)
pub const DEFAULT_CHAIN_ID: u64 = 1337;
/// Block gas limit used for the genesis configuration
pub const GENESIS_GAS_LIMIT: u64 = 9_999_999;
/// Gas limit attached to helper-built value transfers (generous for a plain send)
pub const TRANSFER_GAS_LIMIT: u64 = 2_100_000;
/// Gas price the backend suggests for every transaction (1 gwei)
pub const DEFAULT_GAS_PRICE: u128 = 1_000_000_000;
/// Base gas cost for any transaction
pub const TX_BASE_GAS: u64 = 21_000;
/// Gas cost per zero byte of calldata
pub const TX_DATA_ZERO_GAS: u64 = 4;
/// Gas cost per non-zero byte of calldata
pub const TX_DATA_NON_ZERO_GAS: u64 = 16;
/// Simulated timestamp advance per mined block
pub const BLOCK_PERIOD_SECS: u64 = 12;
/// Ether granted to every generated account at genesis
pub const DEFAULT_FUNDING_ETH: u64 = 100;

/// Default balance for prefunded accounts (100 ETH in wei)
pub fn default_funding_balance() -> U256 {
    eth_to_wei(DEFAULT_FUNDING_ETH)
}

/// Convert a whole-ether amount to wei
pub fn eth_to_wei(eth: u64) -> U256 {
    U256::from(eth) * U256::from(10u64).pow(U256::from(18u64))
}
