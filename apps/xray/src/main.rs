use anyhow::Context;
use slref_kernel::config::{DEFAULT_CONFIG_FILE, load_config};
use slref_kernel::domain::config::AppConfig;
use slref_logger::{LogFormat, Logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Config first: the stage decides whether segments reach the console.
    let cfg: AppConfig =
        load_config(Some(DEFAULT_CONFIG_FILE)).context("Critical: Configuration is malformed")?;

    let _log = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .format(LogFormat::detect())
        .level(slref_xray::log_level(&cfg.stage()))
        .init()?;

    tracing::info!(service = %cfg.service(), "Tracing requests as segments");

    slref_kernel::server::launch(slref_xray::router(&cfg), &cfg).await
}
