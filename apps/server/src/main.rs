use anyhow::Context;
use folio::domain::config::ApiConfig;
use folio::kernel::config::load_config;
use folio_logger::{ConsoleTarget, Logger};
use folio_server::Server;

/// Optional path to the configuration file; `server.*` in the working directory otherwise.
const CONFIG_PATH_VAR: &str = "FOLIO_CONFIG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let path = std::env::var_os(CONFIG_PATH_VAR);
    let cfg: ApiConfig =
        load_config(path.as_ref()).context("Critical: Configuration is malformed")?;

    let _log = Logger::from_config(env!("CARGO_PKG_NAME"), &cfg.logging, ConsoleTarget::Stdout)?
        .init()?;

    Server::builder().config(cfg).build().await?.run().await
}
