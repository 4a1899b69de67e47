use clap::Parser;

use acquisitions::cli::{self, Cli, Commands};
use acquisitions::logger::init_logger;
use acquisitions::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = cli::load_settings(&cli)?;

    if let Some(Commands::Serve { dry_run: true, .. }) = &cli.command {
        cli::dry_run_report(&settings);
        return Ok(());
    }

    init_logger(settings.logger.clone().into_logger_config()?)?;

    Server::new(settings).run().await
}
