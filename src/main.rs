use ethsim::cli::Cli;
use ethsim::constants::eth_to_wei;
use ethsim::fixture::FundedBackend;
use ethsim::genesis::{self, GenesisConfig};
use ethsim::output;
use ethsim::transfer::send_value;

use clap::Parser;
use eyre::ensure;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Demo entry point: build a funded fixture and run a few transfers through it
fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing (human-readable by default, JSON behind --log-json)
    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
    if cli.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    let mut config = GenesisConfig::default().with_chain_id(cli.chain_id);
    if let Some(gas_limit) = cli.gas_limit {
        config = config.with_gas_limit(gas_limit);
    }

    let mut fixture = if cli.dev_keys {
        FundedBackend::from_keys_with_config(genesis::dev_signers(cli.accounts), config)
    } else {
        FundedBackend::with_config(cli.accounts, config)
    };

    if cli.dump_genesis {
        println!("{}", genesis::genesis_to_json(fixture.backend().genesis()));
        return Ok(());
    }

    output::print_banner(fixture.backend().chain_id(), fixture.backend().gas_limit());

    let balances: Vec<_> = (0..fixture.keys().len())
        .map(|i| (fixture.address_of(i), fixture.balance_of(i)))
        .collect();
    output::print_accounts(&balances);

    if cli.transfers > 0 {
        ensure!(
            fixture.keys().len() >= 2,
            "at least 2 accounts are required to run transfers (got {})",
            fixture.keys().len()
        );
    }

    let amount = eth_to_wei(cli.amount_eth);
    let count = fixture.keys().len();
    for i in 0..cli.transfers {
        let from = (i as usize) % count;
        let to = (from + 1) % count;
        let sender = fixture.key(from).clone();
        let receiver = fixture.address_of(to);

        output::print_transfer(i, &sender.address(), &receiver, amount);
        let receipt = send_value(fixture.backend_mut(), &sender, receiver, amount)?;
        output::print_receipt(&receipt);
    }

    let balances: Vec<_> = (0..fixture.keys().len())
        .map(|i| (fixture.address_of(i), fixture.balance_of(i)))
        .collect();
    output::print_accounts(&balances);

    Ok(())
}
