use clap::Parser;
use tally_cli::{Cli, CliConfig, init_tracing};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::from_environment().with_overrides(&cli);
    init_tracing(&config)?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting tally");

    let stdout = std::io::stdout();
    cli.execute(&mut stdout.lock())
}
