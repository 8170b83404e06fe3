use anyhow::Context;
use tracing::info;

use counterpick_core::config::AppConfig;
use counterpick_core::logging::init_tracing;
use counterpick_server::{api, load_state};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("reading config")?;
    init_tracing(&config.logging);

    info!("Starting counterpick server...");
    let state = load_state(&config).context("loading catalog")?;
    info!(
        heroes = state.catalog.hero_count(),
        items = state.catalog.item_count(),
        "catalog loaded from {}",
        config.data.dir.display()
    );

    api::start_api_server(state, &config.server).await?;
    info!("server stopped");
    Ok(())
}
