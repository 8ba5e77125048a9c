use clap::Parser;

use crate::error::{MarketError, Result};

pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Command-line configuration. Every default reproduces the stock dashboard;
/// running with no flags polls the top ten coins in USD every minute.
#[derive(Parser, Debug, Clone)]
#[command(name = "cryptofolio", version, about = "Live cryptocurrency market dashboard")]
pub struct Config {
    /// Base URL of the CoinGecko-compatible API
    #[arg(long, env = "CRYPTOFOLIO_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Quote currency for prices and market caps
    #[arg(long, default_value = "usd")]
    pub vs_currency: String,

    /// Number of coins per page requested upstream
    #[arg(long, default_value_t = 10)]
    pub per_page: u32,

    /// Seconds between automatic refreshes
    #[arg(long, default_value_t = 60)]
    pub refresh_secs: u64,
}

impl Config {
    /// Reject values the upstream would silently mangle.
    pub fn validate(&self) -> Result<()> {
        let url = self.api_url.trim();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(MarketError::Config(format!(
                "api_url must start with http:// or https://, got: '{}'",
                url
            )));
        }
        if self.per_page == 0 {
            return Err(MarketError::Config("per_page must be at least 1".into()));
        }
        if self.refresh_secs == 0 {
            return Err(MarketError::Config("refresh_secs must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Config {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            vs_currency: "usd".to_string(),
            per_page: 10,
            refresh_secs: 60,
        }
    }

    #[test]
    fn defaults_validate() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn rejects_bad_scheme() {
        let mut cfg = base();
        cfg.api_url = "ftp://example.com".to_string();
        assert!(matches!(cfg.validate(), Err(MarketError::Config(_))));
    }

    #[test]
    fn rejects_zero_page_size() {
        let mut cfg = base();
        cfg.per_page = 0;
        assert!(cfg.validate().is_err());
    }
}
