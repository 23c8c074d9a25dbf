//! Deterministic stand-in data for the market API.
//!
//! Lookups go through an ordered rule list; the first rule whose predicate
//! accepts the endpoint supplies the payload.

use super::types::{Category, CoinDetails, CoinImage, Description, Links, MarketData, Ohlc, UsdValue};
use rand::prelude::*;
use regex::Regex;
use serde_json::{json, Value};
use std::sync::OnceLock;

const HOUR_MS: i64 = 3_600_000;
const OHLC_CANDLES: i64 = 24; // plus the current hour
const OHLC_VOLATILITY: f64 = 0.005;
const BITCOIN_OHLC_BASE: f64 = 96_000.0;
const IMAGE_HOST: &str = "https://coin-images.coingecko.com/coins/images";

struct MockCoin {
    id: &'static str,
    name: &'static str,
    symbol: &'static str,
    rank: u32,
    image: &'static str, // "<number>/<size>/<file>" with {size} placeholder
    price: f64,
    change_24h: f64,
    pct_24h: f64,
    pct_30d: f64,
    market_cap: f64,
    volume: f64,
}

const MOCK_COINS: &[MockCoin] = &[
    MockCoin {
        id: "bitcoin",
        name: "Bitcoin",
        symbol: "btc",
        rank: 1,
        image: "1/{size}/bitcoin.png",
        price: 97_500.0,
        change_24h: 1_250.5,
        pct_24h: 1.3,
        pct_30d: 12.5,
        market_cap: 1_920_000_000_000.0,
        volume: 45_000_000_000.0,
    },
    MockCoin {
        id: "ethereum",
        name: "Ethereum",
        symbol: "eth",
        rank: 2,
        image: "279/{size}/ethereum.png",
        price: 3_450.0,
        change_24h: 85.5,
        pct_24h: 2.1,
        pct_30d: 8.3,
        market_cap: 415_000_000_000.0,
        volume: 18_000_000_000.0,
    },
    MockCoin {
        id: "solana",
        name: "Solana",
        symbol: "sol",
        rank: 5,
        image: "4128/{size}/solana.png",
        price: 185.0,
        change_24h: 6.2,
        pct_24h: 3.5,
        pct_30d: 15.8,
        market_cap: 87_000_000_000.0,
        volume: 4_500_000_000.0,
    },
    MockCoin {
        id: "ripple",
        name: "XRP",
        symbol: "xrp",
        rank: 4,
        image: "44/{size}/xrp-symbol-white-128.png",
        price: 2.35,
        change_24h: -0.02,
        pct_24h: -0.8,
        pct_30d: 45.2,
        market_cap: 135_000_000_000.0,
        volume: 8_500_000_000.0,
    },
    MockCoin {
        id: "dogecoin",
        name: "Dogecoin",
        symbol: "doge",
        rank: 8,
        image: "5/{size}/dogecoin.png",
        price: 0.32,
        change_24h: 0.016,
        pct_24h: 5.2,
        pct_30d: 22.1,
        market_cap: 47_000_000_000.0,
        volume: 2_800_000_000.0,
    },
    MockCoin {
        id: "cardano",
        name: "Cardano",
        symbol: "ada",
        rank: 9,
        image: "975/{size}/cardano.png",
        price: 0.95,
        change_24h: -0.012,
        pct_24h: -1.2,
        pct_30d: 18.5,
        market_cap: 33_000_000_000.0,
        volume: 1_200_000_000.0,
    },
];

// (name, top-3 image paths, 24h change %, market cap, 24h volume)
const MOCK_CATEGORIES: &[(&str, [&str; 3], f64, f64, f64)] = &[
    (
        "Layer 1 (L1)",
        ["1/small/bitcoin.png", "279/small/ethereum.png", "4128/small/solana.png"],
        2.5,
        2_500_000_000_000.0,
        85_000_000_000.0,
    ),
    (
        "Smart Contract Platform",
        ["279/small/ethereum.png", "4128/small/solana.png", "975/small/cardano.png"],
        1.8,
        650_000_000_000.0,
        32_000_000_000.0,
    ),
    (
        "DeFi",
        [
            "12559/small/Avalanche_Circle_RedWhite_Trans.png",
            "13442/small/steth_logo.png",
            "9956/small/Badge_Dai.png",
        ],
        -0.5,
        120_000_000_000.0,
        8_500_000_000.0,
    ),
    (
        "Meme",
        [
            "5/small/dogecoin.png",
            "11939/small/shiba.png",
            "29850/small/pepe-token.jpeg",
        ],
        8.2,
        75_000_000_000.0,
        12_000_000_000.0,
    ),
    (
        "Exchange Token",
        [
            "825/small/bnb-icon2_2x.png",
            "2822/small/huobi-token-logo.png",
            "4713/small/matic-token-icon.png",
        ],
        0.9,
        95_000_000_000.0,
        5_500_000_000.0,
    ),
    (
        "Gaming (GameFi)",
        [
            "12129/small/sandbox_logo.jpg",
            "12493/small/GALA-COINGECKO.png",
            "13029/small/axie_infinity_logo.png",
        ],
        -2.1,
        18_000_000_000.0,
        1_200_000_000.0,
    ),
    (
        "AI & Big Data",
        [
            "26375/small/FET_logo.png",
            "22959/small/AGIX-token-img.png",
            "16547/small/photo_2023-03-29_21.47.00.jpeg",
        ],
        4.5,
        25_000_000_000.0,
        3_200_000_000.0,
    ),
    (
        "Stablecoins",
        [
            "325/small/Tether.png",
            "6319/small/usdc.png",
            "9956/small/Badge_Dai.png",
        ],
        0.1,
        165_000_000_000.0,
        95_000_000_000.0,
    ),
    (
        "Privacy Coins",
        [
            "69/small/monero_logo.png",
            "486/small/circle-zcash-color.png",
            "63/small/dash-logo.png",
        ],
        -1.5,
        4_500_000_000.0,
        180_000_000.0,
    ),
    (
        "Layer 2 (L2)",
        [
            "25244/small/Optimism.png",
            "16547/small/photo_2023-03-29_21.47.00.jpeg",
            "4713/small/matic-token-icon.png",
        ],
        3.2,
        22_000_000_000.0,
        2_800_000_000.0,
    ),
];

fn image_url(path: &str, size: &str) -> String {
    format!("{IMAGE_HOST}/{}", path.replace("{size}", size))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn usd(v: f64) -> UsdValue {
    UsdValue { usd: v }
}

fn ohlc_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/coins/([^/]+)/ohlc").expect("valid ohlc pattern"))
}

fn coin_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/coins/([^/?]+)").expect("valid coin pattern"))
}

fn capture_id<'a>(re: &Regex, endpoint: &'a str) -> Option<&'a str> {
    re.captures(endpoint)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// One entry in the ordered mock table.
pub struct MockRule {
    pub name: &'static str,
    matches: fn(&str) -> bool,
    supply: fn(&MockCatalog, &str) -> Value,
}

fn is_bitcoin_ohlc(e: &str) -> bool {
    e.contains("/coins/bitcoin/ohlc")
}

fn is_bitcoin_detail(e: &str) -> bool {
    e == "/coins/bitcoin" || e.starts_with("/coins/bitcoin?")
}

fn is_categories(e: &str) -> bool {
    e.contains("/coins/categories")
}

fn is_coin_ohlc(e: &str) -> bool {
    ohlc_re().is_match(e)
}

fn is_coin_detail(e: &str) -> bool {
    coin_re().is_match(e)
}

fn is_trending(e: &str) -> bool {
    e.contains("/search/trending")
}

fn supply_bitcoin_ohlc(m: &MockCatalog, _: &str) -> Value {
    json!(m.ohlc("bitcoin", BITCOIN_OHLC_BASE))
}

fn supply_bitcoin_detail(_: &MockCatalog, _: &str) -> Value {
    json!(bitcoin_details())
}

fn supply_categories(_: &MockCatalog, _: &str) -> Value {
    json!(categories())
}

fn supply_coin_ohlc(m: &MockCatalog, e: &str) -> Value {
    let id = capture_id(ohlc_re(), e).unwrap_or_default();
    let base = coin_details(id).market_data.current_price.usd;
    json!(m.ohlc(id, base))
}

fn supply_coin_detail(_: &MockCatalog, e: &str) -> Value {
    json!(coin_details(capture_id(coin_re(), e).unwrap_or_default()))
}

fn supply_trending(_: &MockCatalog, _: &str) -> Value {
    trending()
}

// Evaluation order is part of the contract: specific paths before patterns.
const RULES: &[MockRule] = &[
    MockRule {
        name: "bitcoin_ohlc",
        matches: is_bitcoin_ohlc,
        supply: supply_bitcoin_ohlc,
    },
    MockRule {
        name: "bitcoin_detail",
        matches: is_bitcoin_detail,
        supply: supply_bitcoin_detail,
    },
    MockRule {
        name: "categories",
        matches: is_categories,
        supply: supply_categories,
    },
    MockRule {
        name: "coin_ohlc",
        matches: is_coin_ohlc,
        supply: supply_coin_ohlc,
    },
    MockRule {
        name: "coin_detail",
        matches: is_coin_detail,
        supply: supply_coin_detail,
    },
    MockRule {
        name: "trending",
        matches: is_trending,
        supply: supply_trending,
    },
];

/// Mock payload source. OHLC candles end at `anchor_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockCatalog {
    anchor_ms: i64,
}

impl MockCatalog {
    pub fn new(anchor_ms: i64) -> Self {
        Self { anchor_ms }
    }

    /// Anchored at the current wall-clock time.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn anchored_now() -> Self {
        let ms = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);
        Self::new(ms)
    }

    #[inline]
    pub fn anchor_ms(&self) -> i64 {
        self.anchor_ms
    }

    /// Rule names in evaluation order.
    pub fn rule_names() -> impl Iterator<Item = &'static str> {
        RULES.iter().map(|r| r.name)
    }

    pub fn matching_rule(endpoint: &str) -> Option<&'static str> {
        RULES.iter().find(|r| (r.matches)(endpoint)).map(|r| r.name)
    }

    pub fn lookup(&self, endpoint: &str) -> Option<Value> {
        log::debug!("[mock] requesting endpoint {endpoint}");
        RULES
            .iter()
            .find(|r| (r.matches)(endpoint))
            .map(|r| (r.supply)(self, endpoint))
    }

    /// 25 hourly candles ending at the anchor, seeded by coin id and price.
    pub fn ohlc(&self, coin_id: &str, base_price: f64) -> Vec<Ohlc> {
        let seed = coin_id
            .bytes()
            .fold(base_price.to_bits(), |h, b| {
                (h ^ b as u64).wrapping_mul(0x0000_0100_0000_01B3)
            });
        let mut rng = StdRng::seed_from_u64(seed);
        let volatility = base_price * OHLC_VOLATILITY;
        let mut price = base_price;
        (0..=OHLC_CANDLES)
            .rev()
            .map(|i| {
                let ts = self.anchor_ms - i * HOUR_MS;
                let open = price;
                let close = price + (rng.gen::<f64>() - 0.48) * volatility;
                let high = open.max(close) + rng.gen::<f64>() * volatility * 0.4;
                let low = open.min(close) - rng.gen::<f64>() * volatility * 0.4;
                price = close;
                (ts, open, high, low, close)
            })
            .collect()
    }
}

/// The fixed record served for `/coins/bitcoin`.
pub fn bitcoin_details() -> CoinDetails {
    let mut coin = coin_details("bitcoin");
    coin.description.en =
        "Bitcoin is the first successful internet money based on peer-to-peer technology."
            .to_string();
    coin.links = Links {
        homepage: vec!["https://bitcoin.org".to_string()],
        blockchain_site: vec!["https://blockchain.info".to_string()],
        subreddit_url: Some("https://reddit.com/r/bitcoin".to_string()),
    };
    coin
}

/// Detail record for any coin id; unknown ids get a generic placeholder.
pub fn coin_details(coin_id: &str) -> CoinDetails {
    let links = Links {
        homepage: vec![format!("https://{coin_id}.org")],
        blockchain_site: vec![format!("https://explorer.{coin_id}.org")],
        subreddit_url: Some(format!("https://reddit.com/r/{coin_id}")),
    };
    match MOCK_COINS.iter().find(|c| c.id == coin_id) {
        Some(c) => CoinDetails {
            id: c.id.to_string(),
            name: c.name.to_string(),
            symbol: c.symbol.to_string(),
            asset_platform_id: None,
            image: CoinImage {
                large: image_url(c.image, "large"),
                small: image_url(c.image, "small"),
            },
            market_data: MarketData {
                current_price: usd(c.price),
                price_change_24h_in_currency: usd(c.change_24h),
                price_change_percentage_24h_in_currency: usd(c.pct_24h),
                price_change_percentage_30d_in_currency: usd(c.pct_30d),
                market_cap: usd(c.market_cap),
                total_volume: usd(c.volume),
            },
            market_cap_rank: Some(c.rank),
            description: Description {
                en: format!("{} is a popular cryptocurrency.", c.name),
            },
            links,
            tickers: Vec::new(),
        },
        None => CoinDetails {
            id: coin_id.to_string(),
            name: capitalize(coin_id),
            symbol: coin_id.chars().take(3).collect::<String>().to_uppercase(),
            asset_platform_id: None,
            image: CoinImage {
                large: image_url("1/{size}/bitcoin.png", "large"),
                small: image_url("1/{size}/bitcoin.png", "small"),
            },
            market_data: MarketData {
                current_price: usd(100.0),
                price_change_24h_in_currency: usd(2.5),
                price_change_percentage_24h_in_currency: usd(2.5),
                price_change_percentage_30d_in_currency: usd(10.0),
                market_cap: usd(1_000_000_000.0),
                total_volume: usd(50_000_000.0),
            },
            market_cap_rank: Some(100),
            description: Description {
                en: format!("{coin_id} is a cryptocurrency."),
            },
            links,
            tickers: Vec::new(),
        },
    }
}

pub fn categories() -> Vec<Category> {
    MOCK_CATEGORIES
        .iter()
        .map(|(name, top3, change, cap, volume)| Category {
            name: name.to_string(),
            top_3_coins: top3.iter().map(|p| format!("{IMAGE_HOST}/{p}")).collect(),
            market_cap_change_24h: *change,
            market_cap: *cap,
            volume_24h: *volume,
        })
        .collect()
}

fn trending() -> Value {
    let coins: Vec<Value> = MOCK_COINS
        .iter()
        .map(|c| {
            json!({
                "item": {
                    "id": c.id,
                    "name": c.name,
                    "symbol": c.symbol.to_uppercase(),
                    "market_cap_rank": c.rank,
                    "thumb": image_url(c.image, "thumb"),
                    "large": image_url(c.image, "large"),
                    "data": {
                        "price": c.price,
                        "price_change_percentage_24h": { "usd": c.pct_24h },
                    },
                }
            })
        })
        .collect();
    json!({ "coins": coins })
}
