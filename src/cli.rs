use clap::Parser;

/// CLI arguments for the fixture demo
#[derive(Parser, Debug)]
#[command(name = "ethsim", about = "Funded in-memory simulated Ethereum backend")]
pub struct Cli {
    /// Number of keypairs to generate and fund
    #[arg(long, default_value = "3")]
    pub accounts: usize,

    /// Chain ID for the simulated backend
    #[arg(long, default_value = "1337")]
    pub chain_id: u64,

    /// Override the block gas limit
    #[arg(long)]
    pub gas_limit: Option<u64>,

    /// Number of round-robin transfers to run after setup
    #[arg(long, default_value = "1")]
    pub transfers: u32,

    /// Amount of each transfer, in whole ether
    #[arg(long, default_value = "1")]
    pub amount_eth: u64,

    /// Use the deterministic dev keys instead of random ones
    #[arg(long)]
    pub dev_keys: bool,

    /// Print the genesis allocation as JSON and exit
    #[arg(long)]
    pub dump_genesis: bool,

    /// Enable structured JSON logging instead of human-readable output
    #[arg(long)]
    pub log_json: bool,
}
