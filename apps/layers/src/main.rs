use anyhow::Context;
use slref_kernel::config::{DEFAULT_CONFIG_FILE, load_config};
use slref_kernel::domain::config::AppConfig;
use slref_logger::{LogFormat, Logger};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).format(LogFormat::detect()).init()?;

    let cfg: AppConfig =
        load_config(Some(DEFAULT_CONFIG_FILE)).context("Critical: Configuration is malformed")?;
    info!(layers_dir = %cfg.layers_dir.display(), "Probing Lambda layers per request");

    slref_kernel::server::launch(slref_layers::router(&cfg), &cfg).await
}
