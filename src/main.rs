mod cli;
mod shutdown;
mod startup;

use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging
    startup::init_logging()?;

    info!("Starting zonesync");

    // Load configuration
    let config = startup::load_config(&cli)?;

    // Run the selected command
    startup::run(cli, config).await
}
