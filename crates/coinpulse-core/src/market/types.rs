use serde::{Deserialize, Deserializer, Serialize};

// Upstream JSON shapes. Fields the UI does not read are left out; unknown
// fields are ignored by serde.

fn null_as_zero<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(d)?.unwrap_or(0.0))
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UsdValue {
    #[serde(default, deserialize_with = "null_as_zero")]
    pub usd: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CoinImage {
    #[serde(default)]
    pub large: String,
    #[serde(default)]
    pub small: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketData {
    pub current_price: UsdValue,
    pub price_change_24h_in_currency: UsdValue,
    pub price_change_percentage_24h_in_currency: UsdValue,
    pub price_change_percentage_30d_in_currency: UsdValue,
    pub market_cap: UsdValue,
    pub total_volume: UsdValue,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Description {
    #[serde(default)]
    pub en: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    pub homepage: Vec<String>,
    pub blockchain_site: Vec<String>,
    pub subreddit_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CoinDetails {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub asset_platform_id: Option<String>,
    #[serde(default)]
    pub image: CoinImage,
    #[serde(default)]
    pub market_data: MarketData,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub description: Description,
    #[serde(default)]
    pub links: Links,
    #[serde(default)]
    pub tickers: Vec<serde_json::Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub top_3_coins: Vec<String>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub market_cap_change_24h: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub market_cap: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub volume_24h: f64,
}

/// `[timestamp_ms, open, high, low, close]`
pub type Ohlc = (i64, f64, f64, f64, f64);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendingData {
    #[serde(default, deserialize_with = "null_as_zero")]
    pub price: f64,
    #[serde(default)]
    pub price_change_percentage_24h: UsdValue,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendingItem {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub thumb: String,
    #[serde(default)]
    pub large: String,
    #[serde(default)]
    pub data: TrendingData,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendingCoin {
    pub item: TrendingItem,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendingCoins {
    #[serde(default)]
    pub coins: Vec<TrendingCoin>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolData {
    pub id: String,
    pub address: String,
    pub name: String,
    pub network: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolList {
    #[serde(default)]
    pub data: Vec<PoolData>,
}

/// Error payload the upstream API returns alongside non-success statuses.
#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub(crate) error: Option<String>,
}
