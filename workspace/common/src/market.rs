//! Market table logic: the price API row shape plus the search filter and
//! column sorting the market view applies before rendering.

use serde::{Deserialize, Serialize};

/// One ranked asset as returned by the public price API.
///
/// The API may omit the 24h change for freshly listed assets, so it is
/// optional here and treated as 0 for ordering and display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketAsset {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    pub market_cap: f64,
    pub image: String,
}

impl MarketAsset {
    pub fn change_24h(&self) -> f64 {
        self.price_change_percentage_24h.unwrap_or(0.0)
    }

    /// Case-insensitive match against name or symbol.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.symbol.to_lowercase().contains(&term)
    }
}

/// Sortable columns of the market table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Price,
    Change24h,
    MarketCap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Column ordering state. Defaults to market cap descending, which is the
/// rank order the price API already returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self {
            key: SortKey::MarketCap,
            direction: SortDirection::Descending,
        }
    }
}

impl SortOrder {
    /// Clicking a header sorts by it descending, or flips direction when it
    /// is already the active column.
    pub fn clicked(self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                direction: self.direction.toggled(),
            }
        } else {
            Self {
                key,
                direction: SortDirection::Descending,
            }
        }
    }
}

/// Filter by search text, then order by the selected column.
pub fn filter_and_sort(assets: &[MarketAsset], term: &str, order: SortOrder) -> Vec<MarketAsset> {
    let mut rows: Vec<MarketAsset> = assets
        .iter()
        .filter(|asset| term.is_empty() || asset.matches(term))
        .cloned()
        .collect();

    rows.sort_by(|a, b| {
        let ordering = match order.key {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Price => a
                .current_price
                .partial_cmp(&b.current_price)
                .unwrap_or(std::cmp::Ordering::Equal),
            SortKey::Change24h => a
                .change_24h()
                .partial_cmp(&b.change_24h())
                .unwrap_or(std::cmp::Ordering::Equal),
            SortKey::MarketCap => a
                .market_cap
                .partial_cmp(&b.market_cap)
                .unwrap_or(std::cmp::Ordering::Equal),
        };
        match order.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(id: &str, symbol: &str, name: &str, price: f64, change: f64, cap: f64) -> MarketAsset {
        MarketAsset {
            id: id.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            current_price: price,
            price_change_percentage_24h: Some(change),
            market_cap: cap,
            image: String::new(),
        }
    }

    fn sample() -> Vec<MarketAsset> {
        vec![
            asset("bitcoin", "btc", "Bitcoin", 64000.0, 1.2, 1.2e12),
            asset("ethereum", "eth", "Ethereum", 3100.0, -0.5, 3.8e11),
            asset("tether", "usdt", "Tether", 1.0, 0.01, 1.1e11),
        ]
    }

    #[test]
    fn filter_matches_name_and_symbol_case_insensitively() {
        let assets = sample();

        let by_name = filter_and_sort(&assets, "BITC", SortOrder::default());
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "bitcoin");

        let by_symbol = filter_and_sort(&assets, "usdt", SortOrder::default());
        assert_eq!(by_symbol.len(), 1);
        assert_eq!(by_symbol[0].id, "tether");
    }

    #[test]
    fn empty_search_keeps_every_row() {
        let assets = sample();
        assert_eq!(filter_and_sort(&assets, "", SortOrder::default()).len(), 3);
    }

    #[test]
    fn default_order_is_market_cap_descending() {
        let rows = filter_and_sort(&sample(), "", SortOrder::default());
        let ids: Vec<&str> = rows.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["bitcoin", "ethereum", "tether"]);
    }

    #[test]
    fn clicking_active_column_flips_direction() {
        let order = SortOrder::default().clicked(SortKey::MarketCap);
        assert_eq!(order.direction, SortDirection::Ascending);

        let rows = filter_and_sort(&sample(), "", order);
        assert_eq!(rows[0].id, "tether");
    }

    #[test]
    fn clicking_new_column_sorts_it_descending() {
        let order = SortOrder::default().clicked(SortKey::Change24h);
        assert_eq!(order.key, SortKey::Change24h);
        assert_eq!(order.direction, SortDirection::Descending);

        let rows = filter_and_sort(&sample(), "", order);
        assert_eq!(rows[0].id, "bitcoin");
        assert_eq!(rows[2].id, "ethereum");
    }

    #[test]
    fn missing_24h_change_sorts_as_zero() {
        let mut assets = sample();
        assets[2].price_change_percentage_24h = None;

        let order = SortOrder {
            key: SortKey::Change24h,
            direction: SortDirection::Ascending,
        };
        let rows = filter_and_sort(&assets, "", order);
        assert_eq!(rows[0].id, "ethereum");
        assert_eq!(rows[1].id, "tether");
    }

    #[test]
    fn api_row_with_null_change_deserializes() {
        let json = r#"{
            "id": "newcoin",
            "symbol": "new",
            "name": "New Coin",
            "current_price": 0.002,
            "price_change_percentage_24h": null,
            "market_cap": 1000.0,
            "image": "https://example.com/new.png"
        }"#;

        let asset: MarketAsset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.change_24h(), 0.0);
    }
}
