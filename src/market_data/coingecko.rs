// CoinGecko REST adapter with the concrete /coins/markets endpoint

use std::time::Duration;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{MarketError, Result};
use crate::market_data::types::CoinQuote;
use crate::market_data::MarketSource;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct CoinGeckoClient {
    base_url: String,
    vs_currency: String,
    per_page: u32,
    client: reqwest::Client,
}

impl CoinGeckoClient {
    pub fn new(cfg: &Config) -> Result<Self> {
        cfg.validate()?;
        let base_url = cfg.api_url.trim().trim_end_matches('/').to_string();

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MarketError::Network(format!("failed to create HTTP client: {}", e)))?;

        info!(base_url = %base_url, vs_currency = %cfg.vs_currency, "created CoinGecko client");

        Ok(Self {
            base_url,
            vs_currency: cfg.vs_currency.clone(),
            per_page: cfg.per_page,
            client,
        })
    }

    /// GET /coins/markets with the fixed parameter set: quote currency,
    /// gecko-rank descending, one page, no sparkline, 24h change window.
    fn markets_url(&self) -> String {
        format!(
            "{}/coins/markets?vs_currency={}&order=gecko_desc&per_page={}&page=1&sparkline=false&price_change_percentage=24h",
            self.base_url, self.vs_currency, self.per_page
        )
    }
}

#[async_trait::async_trait]
impl MarketSource for CoinGeckoClient {
    async fn fetch_markets(&self) -> Result<Vec<CoinQuote>> {
        let url = self.markets_url();
        debug!(url = %url, "fetching market quotes");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| MarketError::Network(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read response body".to_string());
            return Err(MarketError::Network(format!(
                "API returned status {}: {}",
                status, body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| MarketError::Network(format!("failed to read response body: {}", e)))?;

        let quotes: Vec<CoinQuote> = serde_json::from_str(&body)
            .map_err(|e| MarketError::Parse(format!("failed to parse markets response: {}", e)))?;

        debug!(count = quotes.len(), "fetched market quotes");
        Ok(quotes)
    }
}
