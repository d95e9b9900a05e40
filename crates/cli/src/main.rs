use tally_banking::{Ledger, LedgerConfig};

fn main() -> anyhow::Result<()> {
    tally_observability::init();

    let config = LedgerConfig::from_env();
    tracing::info!(config = %serde_json::to_string(&config)?, "starting demo");

    let mut ledger = Ledger::with_config(config);
    let mut stdout = std::io::stdout().lock();
    tally_cli::run_demo(&mut ledger, &mut stdout)?;

    tracing::debug!(journal = %ledger.journal().to_json()?, "demo finished");
    Ok(())
}
