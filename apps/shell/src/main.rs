use anyhow::Context;
use clap::Parser;
use folio::features::terminal::ClientConfig;
use folio::features::terminal::config::CLIENT_ENV_PREFIX;
use folio::kernel::config::load_layered_config;
use folio_logger::{ConsoleTarget, Logger};
use folio_shell::cli::Cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let loaded: ClientConfig = load_layered_config(cli.config.as_ref(), "shell", CLIENT_ENV_PREFIX)
        .context("Critical: Configuration is malformed")?;
    let config = cli.apply(loaded);
    config.validate().context("Invalid client configuration")?;

    let _log =
        Logger::from_config(env!("CARGO_PKG_NAME"), &config.logging, ConsoleTarget::Stderr)?
            .init()?;

    folio_shell::run(cli, config).await
}
