use std::sync::Arc;

use clap::Parser;
use tokio::time::Duration;
use tracing::info;

use cryptofolio::app;
use cryptofolio::config::Config;
use cryptofolio::market_data::coingecko::CoinGeckoClient;
use cryptofolio::telemetry;
use cryptofolio::ui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok(); // load .env
    let cfg = Config::parse();
    telemetry::init_tracing("cryptofolio=info");

    let client = Arc::new(CoinGeckoClient::new(&cfg)?);
    info!(refresh_secs = cfg.refresh_secs, per_page = cfg.per_page, "starting dashboard");

    let mut terminal = ui::setup_terminal()?;
    let result = app::run(
        &mut terminal,
        client,
        Duration::from_secs(cfg.refresh_secs),
    )
    .await;

    // Always put the terminal back, even when the loop errored.
    ui::restore_terminal()?;
    result
}
