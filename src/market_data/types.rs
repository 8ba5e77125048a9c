// Source: https://api.coingecko.com/api/v3/coins/markets (JSON array)

use serde::{Deserialize, Deserializer};

/// One asset's market snapshot as returned upstream. Deserialized straight
/// off the wire and displayed without transformation; unknown fields are
/// ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CoinQuote {
    pub id: String,     // unique within a fetch, e.g. "bitcoin"
    pub name: String,   // e.g. "Bitcoin"
    pub symbol: String, // lowercase on the wire, e.g. "btc"
    /// Icon URL. The terminal renders a glyph in its place, but the URL is
    /// part of the snapshot and kept verbatim.
    #[serde(default, deserialize_with = "null_to_default")]
    pub image: String,
    pub current_price: f64,
    /// Upstream sends `null` for assets with no 24h history; one bad field
    /// must not fail the whole fetch.
    #[serde(default, deserialize_with = "null_to_default")]
    pub price_change_percentage_24h: f64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub market_cap: f64,
}

impl CoinQuote {
    pub fn is_gaining(&self) -> bool {
        self.price_change_percentage_24h > 0.0
    }
}

// CoinGecko encodes "no data" as an explicit null, not an absent field.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
