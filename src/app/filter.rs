// Free-text filtering over the quote sequence. Purely derived: recomputed on
// every render, never cached.

use crate::market_data::types::CoinQuote;

/// Case-insensitive substring match against display name or ticker symbol.
pub fn matches(quote: &CoinQuote, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    quote.name.to_lowercase().contains(&q) || quote.symbol.to_lowercase().contains(&q)
}

/// Subsequence of `quotes` matching `query`, original relative order kept.
/// An empty query yields the full sequence.
pub fn filter_quotes<'a>(quotes: &'a [CoinQuote], query: &str) -> Vec<&'a CoinQuote> {
    quotes.iter().filter(|q| matches(q, query)).collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn quote(name: &str, symbol: &str) -> CoinQuote {
        CoinQuote {
            id: name.to_lowercase(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            image: String::new(),
            current_price: 1.0,
            price_change_percentage_24h: 0.0,
            market_cap: 0.0,
        }
    }

    #[test]
    fn query_bit_matches_only_bitcoin() {
        let quotes = vec![quote("Bitcoin", "btc"), quote("Ethereum", "eth")];
        let filtered = filter_quotes(&quotes, "bit");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Bitcoin");
    }

    #[test]
    fn empty_query_returns_full_sequence_unchanged() {
        let quotes = vec![quote("Bitcoin", "btc"), quote("Ethereum", "eth")];
        let filtered = filter_quotes(&quotes, "");
        let names: Vec<_> = filtered.iter().map(|q| q.name.as_str()).collect();
        assert_eq!(names, vec!["Bitcoin", "Ethereum"]);
    }

    #[test]
    fn matching_is_case_insensitive_on_name_and_symbol() {
        let quotes = vec![quote("Bitcoin", "btc"), quote("Tether", "usdt")];
        assert_eq!(filter_quotes(&quotes, "BITC").len(), 1);
        assert_eq!(filter_quotes(&quotes, "USDT").len(), 1);
        assert_eq!(filter_quotes(&quotes, "Usd").len(), 1);
    }

    #[test]
    fn relative_order_is_preserved() {
        let quotes = vec![
            quote("Bitcoin", "btc"),
            quote("Bitcoin Cash", "bch"),
            quote("Ethereum", "eth"),
            quote("BitTorrent", "btt"),
        ];
        let names: Vec<_> = filter_quotes(&quotes, "bit")
            .iter()
            .map(|q| q.name.as_str())
            .collect();
        assert_eq!(names, vec!["Bitcoin", "Bitcoin Cash", "BitTorrent"]);
    }

    #[test]
    fn no_match_yields_empty_result() {
        let quotes = vec![quote("Bitcoin", "btc")];
        assert!(filter_quotes(&quotes, "doge").is_empty());
    }

    proptest! {
        // The filtered result is always an order-preserving subsequence whose
        // every element matches; the empty query is the identity.
        #[test]
        fn filter_is_an_order_preserving_matching_subsequence(
            names in proptest::collection::vec("[a-zA-Z]{0,8}", 0..12),
            query in "[a-zA-Z]{0,4}",
        ) {
            let quotes: Vec<CoinQuote> = names
                .iter()
                .enumerate()
                .map(|(i, n)| {
                    let mut q = quote(n, &n.to_lowercase());
                    q.id = format!("{}-{}", n.to_lowercase(), i);
                    q
                })
                .collect();

            let filtered = filter_quotes(&quotes, &query);

            prop_assert!(filtered.iter().all(|q| matches(q, &query)));

            // subsequence check: ids occur in the same order as the original
            let mut cursor = quotes.iter();
            for f in &filtered {
                prop_assert!(cursor.any(|q| q.id == f.id));
            }

            if query.is_empty() {
                prop_assert_eq!(filtered.len(), quotes.len());
            }
        }
    }
}
