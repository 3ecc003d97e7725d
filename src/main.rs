//! coverage-sync CLI entry point.

use clap::Parser;

use coverage_sync::cli::{handle_error, Cli, CliError};
use coverage_sync::infrastructure::config::ConfigLoader;
use coverage_sync::infrastructure::logging::LoggerImpl;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => handle_error(CliError::Config(format!("{err:#}")).into(), cli.json),
    };

    let _logger = match LoggerImpl::init(&config.logging) {
        Ok(logger) => logger,
        Err(err) => handle_error(CliError::Config(format!("{err:#}")).into(), cli.json),
    };

    if let Err(err) = coverage_sync::cli::commands::sync::execute(cli.sync, &config, cli.json).await {
        handle_error(err, cli.json);
    }
}
