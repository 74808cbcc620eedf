use anyhow::{Context, Result};
use std::env;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use account_core::{Account, BankConfig, BankContext, TimeZone, TransactionCode};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    // Optional first argument: path to a JSON config file
    let config = match args.get(1) {
        Some(path) => BankConfig::from_file(path)?,
        None => BankConfig::default(),
    };
    info!(version = account_core::VERSION, ?config, "starting");

    let bank = Arc::new(
        BankContext::from_config(&config).context("Invalid bank configuration")?,
    );

    run_demo(&bank)
}

fn run_demo(bank: &Arc<BankContext>) -> Result<()> {
    let mut jane = Account::new(bank, "001", "Jane", "Doe")?;
    let karachi = TimeZone::new("PKT", 5, 0)?;
    let ali = Account::open(bank, "002", "Ali", "Khan", Some(karachi), 1500.0)?;

    println!("{}", jane);
    println!("{}", ali);

    // Both accounts draw from the same sequence
    for account in [&jane, &ali, &jane] {
        let id = account.next_transaction_id()?;
        println!("  {} → transaction id {}", account.account_number(), id);
    }

    if let Err(err) = jane.set_first_name("J4ne") {
        println!("  rejected rename: {}", err);
    }
    jane.set_first_name("Janet")?;

    ali.set_interest_rate(0.07)?;
    println!("  interest rate seen by {}: {}", jane.full_name(), jane.interest_rate());

    let codes: Vec<String> = TransactionCode::ALL
        .iter()
        .map(|c| format!("{}={}", c.category(), c.code()))
        .collect();
    println!("  transaction codes: {}", codes.join(", "));

    Ok(())
}
