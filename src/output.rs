//! Colored console output for the fixture demo binary.
//!
//! Color scheme: blue+bold headers, cyan values, green success,
//! yellow warnings, dimmed secondary text.

use alloy_primitives::{Address, U256};
use colored::Colorize;

use crate::backend::TransactionReceipt;

/// Format a wei amount as ether with four decimal places.
pub fn format_eth(wei: U256) -> String {
    let one_eth = U256::from(10u64).pow(U256::from(18u64));
    let whole = wei / one_eth;
    let frac = (wei % one_eth) / U256::from(10u64).pow(U256::from(14u64));
    format!("{whole}.{:0>4} ETH", frac.to_string())
}

/// Print the startup banner with chain identity.
pub fn print_banner(chain_id: u64, gas_limit: u64) {
    println!();
    println!("{}", "=== Ethsim Simulated Backend ===".blue().bold());
    println!("  Chain ID:  {}", chain_id.to_string().cyan());
    println!("  Gas limit: {}", gas_limit.to_string().cyan());
}

/// Print the funded account list with balances.
pub fn print_accounts(accounts: &[(Address, U256)]) {
    println!();
    println!(
        "{} ({}):",
        "Funded accounts".blue().bold(),
        accounts.len().to_string().cyan()
    );
    for (i, (address, balance)) in accounts.iter().enumerate() {
        println!(
            "    {}. {}  {}",
            i.to_string().dimmed(),
            format!("{address}").cyan(),
            format_eth(*balance).dimmed()
        );
    }
}

/// Print a mined transfer receipt.
pub fn print_receipt(receipt: &TransactionReceipt) {
    println!(
        "  {} block {}  tx {}  gas {}",
        if receipt.success { "OK".green().bold() } else { "FAILED".yellow().bold() },
        receipt.block_number.to_string().cyan(),
        format!("{}", receipt.transaction_hash).dimmed(),
        receipt.gas_used.to_string().dimmed()
    );
}

/// Print a transfer header line.
pub fn print_transfer(index: u32, from: &Address, to: &Address, amount: U256) {
    println!();
    println!(
        "{} {} {} -> {} ({})",
        "Transfer".blue().bold(),
        index.to_string().cyan(),
        format!("{from}").cyan(),
        format!("{to}").cyan(),
        format_eth(amount)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_eth() {
        let one_eth = U256::from(10u64).pow(U256::from(18u64));
        assert_eq!(format_eth(one_eth), "1.0000 ETH");
        assert_eq!(format_eth(U256::ZERO), "0.0000 ETH");
        assert_eq!(
            format_eth(U256::from(101u64) * one_eth / U256::from(100u64)),
            "1.0100 ETH"
        );
    }
}
