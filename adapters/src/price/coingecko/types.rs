use serde::Deserialize;

/// One row of `GET /coins/markets`. Only the fields the dashboard reads.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketEntry {
    pub id: String,

    #[serde(default)]
    pub symbol: String,

    /// `null` when CoinGecko has no recent trades for the asset.
    pub current_price: Option<f64>,
}

/// Price of the first entry whose id matches `asset_id`.
pub fn select_price(entries: &[MarketEntry], asset_id: &str) -> Option<f64> {
    entries
        .iter()
        .find(|e| e.id == asset_id)
        .and_then(|e| e.current_price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_first_matching_entry() {
        let body = r#"[
            {"id": "other", "symbol": "oth", "current_price": 9.0},
            {"id": "liquidus-2", "symbol": "liq", "current_price": 0.0421, "market_cap": 123},
            {"id": "liquidus-2", "symbol": "liq", "current_price": 1.0}
        ]"#;
        let entries: Vec<MarketEntry> = serde_json::from_str(body).unwrap();

        assert_eq!(select_price(&entries, "liquidus-2"), Some(0.0421));
    }

    #[test]
    fn missing_asset_or_null_price_is_none() {
        let entries: Vec<MarketEntry> =
            serde_json::from_str(r#"[{"id": "liquidus-2", "current_price": null}]"#).unwrap();
        assert_eq!(select_price(&entries, "liquidus-2"), None);
        assert_eq!(select_price(&entries, "bitcoin"), None);
        assert_eq!(select_price(&[], "liquidus-2"), None);
    }
}
