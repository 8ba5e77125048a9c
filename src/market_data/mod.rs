// Market data module entrypoint
pub mod coingecko; // CoinGecko REST client
pub mod poller;    // repeating fetch driver
pub mod types;     // wire types for /coins/markets

use crate::error::Result;
use types::CoinQuote;

/// What a fetch tells the dashboard. State mutation happens only where these
/// are received, never inside the fetch tasks themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum MarketEvent {
    /// A request went out; the view shows its loading indicator.
    FetchStarted,
    /// Full replacement list from a successful fetch, upstream order kept.
    Snapshot { quotes: Vec<CoinQuote> },
    /// The fetch died (network or parse); previous quotes stay on screen.
    FetchFailed,
}

/// A venue that can produce the current quote list. The poller only sees this
/// trait, so tests can drive it with a scripted source.
#[async_trait::async_trait]
pub trait MarketSource: Send + Sync {
    async fn fetch_markets(&self) -> Result<Vec<CoinQuote>>;
}
