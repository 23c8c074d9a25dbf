// Fetch-layer tests driven by a scripted transport; async calls run on pollster.

use async_trait::async_trait;
use coinpulse_core::market::*;
use pollster::block_on;
use std::cell::RefCell;
use std::collections::VecDeque;

const ANCHOR_MS: i64 = 1_700_000_000_000;

/// Replays canned responses and records every request it sees.
#[derive(Default)]
struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    seen: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    fn replying(status: u16, body: &str) -> Self {
        let t = Self::default();
        t.replies.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
        t
    }

    fn failing(reason: &str) -> Self {
        let t = Self::default();
        t.replies
            .borrow_mut()
            .push_back(Err(TransportError(reason.to_string())));
        t
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn get(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.seen.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted reply".to_string())))
    }
}

fn live(transport: ScriptedTransport) -> MarketClient<ScriptedTransport> {
    MarketClient::new(
        ApiConfig::live("https://api.example.com/api/v3", "test-key"),
        transport,
        MockCatalog::new(ANCHOR_MS),
    )
}

fn mocked() -> MarketClient<ScriptedTransport> {
    MarketClient::new(
        ApiConfig::mock(),
        ScriptedTransport::default(),
        MockCatalog::new(ANCHOR_MS),
    )
}

fn header<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers
        .iter()
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.as_str())
}

// ---------------- config ----------------

#[test]
fn mock_mode_when_flagged_or_incomplete() {
    assert!(ApiConfig::mock().is_mock_mode());
    assert!(ApiConfig::from_values(Some("https://x"), None, None).is_mock_mode());
    assert!(ApiConfig::from_values(None, Some("k"), None).is_mock_mode());
    assert!(ApiConfig::from_values(Some(""), Some("k"), None).is_mock_mode());
    assert!(ApiConfig::from_values(Some("https://x"), Some("k"), Some("true")).is_mock_mode());
    assert!(!ApiConfig::from_values(Some("https://x"), Some("k"), Some("1")).is_mock_mode());
    assert!(!ApiConfig::live("https://x", "k").is_mock_mode());
}

// ---------------- mock rules ----------------

#[test]
fn rules_are_evaluated_in_declared_order() {
    let names: Vec<_> = MockCatalog::rule_names().collect();
    assert_eq!(
        names,
        [
            "bitcoin_ohlc",
            "bitcoin_detail",
            "categories",
            "coin_ohlc",
            "coin_detail",
            "trending"
        ]
    );
}

#[test]
fn specific_rules_win_over_patterns() {
    assert_eq!(
        MockCatalog::matching_rule("/coins/bitcoin/ohlc?vs_currency=usd"),
        Some("bitcoin_ohlc")
    );
    assert_eq!(MockCatalog::matching_rule("/coins/bitcoin"), Some("bitcoin_detail"));
    assert_eq!(MockCatalog::matching_rule("/coins/categories"), Some("categories"));
    assert_eq!(MockCatalog::matching_rule("/coins/solana/ohlc"), Some("coin_ohlc"));
    assert_eq!(MockCatalog::matching_rule("/coins/solana"), Some("coin_detail"));
    assert_eq!(MockCatalog::matching_rule("/search/trending"), Some("trending"));
    assert_eq!(MockCatalog::matching_rule("/unknown/endpoint"), None);
}

#[test]
fn mock_bitcoin_details() {
    let btc = block_on(mocked().coin("bitcoin")).unwrap();
    assert_eq!(btc.id, "bitcoin");
    assert_eq!(btc.name, "Bitcoin");
    assert_eq!(btc.market_data.current_price.usd, 97_500.0);
    assert_eq!(btc.market_cap_rank, Some(1));
    assert!(btc.image.large.ends_with("/1/large/bitcoin.png"));
    assert_eq!(
        btc.links.subreddit_url.as_deref(),
        Some("https://reddit.com/r/bitcoin")
    );
}

#[test]
fn mock_unknown_coin_gets_placeholder() {
    let coin = block_on(mocked().coin("foocoin")).unwrap();
    assert_eq!(coin.id, "foocoin");
    assert_eq!(coin.name, "Foocoin");
    assert_eq!(coin.symbol, "FOO");
    assert_eq!(coin.market_data.current_price.usd, 100.0);
    assert_eq!(coin.market_cap_rank, Some(100));
}

#[test]
fn mock_categories_has_ten_entries() {
    let cats = block_on(mocked().categories()).unwrap();
    assert_eq!(cats.len(), 10);
    assert_eq!(cats[0].name, "Layer 1 (L1)");
    assert_eq!(cats[3].name, "Meme");
    assert!(cats.iter().all(|c| c.top_3_coins.len() == 3));
}

#[test]
fn mock_trending_lists_known_coins() {
    let trending = block_on(mocked().trending()).unwrap();
    assert_eq!(trending.coins.len(), 6);
    let first = &trending.coins[0].item;
    assert_eq!(first.id, "bitcoin");
    assert_eq!(first.symbol, "BTC");
    assert_eq!(first.data.price, 97_500.0);
}

#[test]
fn mock_mode_unmatched_endpoint_fails() {
    let err = block_on(mocked().fetch::<serde_json::Value>("/unknown/endpoint", &[], 60))
        .unwrap_err();
    assert!(matches!(err, FetchError::NoMockData { .. }));
    assert_eq!(
        err.to_string(),
        "No mock data available for endpoint: /unknown/endpoint"
    );
}

#[test]
fn mock_mode_never_touches_transport() {
    let client = mocked();
    block_on(client.coin("ethereum")).unwrap();
    block_on(client.categories()).unwrap();
    let pools = block_on(client.pools("ethereum", None, None));
    assert_eq!(pools, PoolData::default());
    assert!(client.transport().seen.borrow().is_empty());
}

#[test]
fn mock_ohlc_is_deterministic_and_anchored() {
    let catalog = MockCatalog::new(ANCHOR_MS);
    let a = catalog.ohlc("solana", 185.0);
    let b = catalog.ohlc("solana", 185.0);
    assert_eq!(a, b);
    assert_eq!(a.len(), 25);
    assert_eq!(a.last().map(|c| c.0), Some(ANCHOR_MS));
    assert_eq!(a[0].0, ANCHOR_MS - 24 * 3_600_000);
    assert_ne!(a, catalog.ohlc("ethereum", 185.0));
}

#[test]
fn mock_ohlc_candles_are_consistent() {
    let candles = MockCatalog::new(ANCHOR_MS).ohlc("bitcoin", 96_000.0);
    assert_eq!(candles[0].1, 96_000.0);
    for w in candles.windows(2) {
        assert_eq!(w[0].4, w[1].1, "next open continues previous close");
        assert_eq!(w[1].0 - w[0].0, 3_600_000);
    }
    for &(_, open, high, low, close) in &candles {
        assert!(high >= open.max(close));
        assert!(low <= open.min(close));
    }
}

#[test]
fn mock_coin_ohlc_via_client() {
    let candles = block_on(mocked().coin_ohlc("solana", 1)).unwrap();
    assert_eq!(candles.len(), 25);
    assert_eq!(candles[0].1, 185.0);
}

// ---------------- live requests ----------------

#[test]
fn builds_url_from_base_endpoint_and_params() {
    let client = live(ScriptedTransport::default());
    let url = client
        .build_url("/coins/bitcoin/ohlc", &[("vs_currency", "usd"), ("days", "1")])
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://api.example.com/api/v3/coins/bitcoin/ohlc?vs_currency=usd&days=1"
    );
}

#[test]
fn build_url_skips_empty_params() {
    let client = live(ScriptedTransport::default());
    let url = client
        .build_url("/search/trending", &[("query", "")])
        .unwrap();
    assert_eq!(url.as_str(), "https://api.example.com/api/v3/search/trending");
}

#[test]
fn sends_key_and_cache_headers() {
    let client = live(ScriptedTransport::replying(200, r#"{"coins": []}"#));
    let trending = block_on(client.trending()).unwrap();
    assert!(trending.coins.is_empty());

    let seen = client_requests(&client);
    assert_eq!(seen.len(), 1);
    assert_eq!(header(&seen[0], API_KEY_HEADER), Some("test-key"));
    assert_eq!(header(&seen[0], "Cache-Control"), Some("max-age=60"));
}

#[test]
fn success_decodes_body() {
    let body = r#"[
        {"name": "A", "market_cap": 1.0, "market_cap_change_24h": null, "volume_24h": 2.0, "top_3_coins": []},
        {"name": "B", "market_cap": null, "market_cap_change_24h": 0.5, "volume_24h": 1.0}
    ]"#;
    let cats = block_on(live(ScriptedTransport::replying(200, body)).categories()).unwrap();
    assert_eq!(cats.len(), 2);
    assert_eq!(cats[0].market_cap_change_24h, 0.0);
    assert_eq!(cats[1].market_cap, 0.0);
}

#[test]
fn categories_are_truncated_to_top_ten() {
    let body = serde_json::to_string(
        &(0..15)
            .map(|i| serde_json::json!({ "name": format!("c{i}") }))
            .collect::<Vec<_>>(),
    )
    .unwrap();
    let cats = block_on(live(ScriptedTransport::replying(200, &body)).categories()).unwrap();
    assert_eq!(cats.len(), TOP_CATEGORIES);
    assert_eq!(cats[9].name, "c9");
}

#[test]
fn rate_limit_falls_back_to_mock_data() {
    let client = live(ScriptedTransport::replying(429, r#"{"error": "slow down"}"#));
    let btc = block_on(client.coin("bitcoin")).unwrap();
    assert_eq!(btc.market_data.current_price.usd, 97_500.0);
}

#[test]
fn auth_and_bad_request_fall_back_to_mock_data() {
    for status in [400, 401] {
        let client = live(ScriptedTransport::replying(status, ""));
        let cats = block_on(client.categories()).unwrap();
        assert_eq!(cats.len(), 10, "status {status}");
    }
}

#[test]
fn rate_limit_without_mock_rule_reports_api_error() {
    let client = live(ScriptedTransport::replying(429, r#"{"error": "slow down"}"#));
    let err = block_on(client.fetch::<serde_json::Value>("/global", &[], 60)).unwrap_err();
    assert_eq!(err.status(), Some(429));
    assert_eq!(err.to_string(), "API Error: 429: slow down");
}

#[test]
fn server_error_does_not_fall_back() {
    let client = live(ScriptedTransport::replying(500, "oops"));
    let err = block_on(client.coin("bitcoin")).unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "API Error: 500: Internal Server Error");
}

#[test]
fn network_failure_falls_back_to_mock_data() {
    let client = live(ScriptedTransport::failing("connection refused"));
    let trending = block_on(client.trending()).unwrap();
    assert_eq!(trending.coins.len(), 6);
}

#[test]
fn network_failure_without_mock_rule_is_reported() {
    let client = live(ScriptedTransport::failing("connection refused"));
    let err = block_on(client.fetch::<serde_json::Value>("/global", &[], 60)).unwrap_err();
    assert!(matches!(err, FetchError::Transport(ref m) if m == "connection refused"));
    assert_eq!(err.status(), None);
}

#[test]
fn malformed_body_is_a_decode_error() {
    let client = live(ScriptedTransport::replying(200, "not json"));
    let err = block_on(client.coin("bitcoin")).unwrap_err();
    assert!(matches!(err, FetchError::Decode { .. }));
}

#[test]
fn pools_by_contract_returns_first_pool() {
    let body = r#"{"data": [
        {"id": "eth_0xabc", "address": "0xabc", "name": "WETH / USDC", "network": "eth"},
        {"id": "eth_0xdef", "address": "0xdef", "name": "WETH / DAI", "network": "eth"}
    ]}"#;
    let client = live(ScriptedTransport::replying(200, body));
    let pool = block_on(client.pools("weth", Some("eth"), Some("0xc02a")));
    assert_eq!(pool.address, "0xabc");

    let seen = client_requests(&client);
    assert_eq!(
        seen[0].url.path(),
        "/api/v3/onchain/networks/eth/tokens/0xc02a/pools"
    );
}

#[test]
fn pools_search_by_id_without_contract() {
    let client = live(ScriptedTransport::replying(200, r#"{"data": []}"#));
    let pool = block_on(client.pools("bitcoin", None, None));
    assert_eq!(pool, PoolData::default());

    let seen = client_requests(&client);
    assert_eq!(seen[0].url.path(), "/api/v3/onchain/search/pools");
    assert_eq!(seen[0].url.query(), Some("query=bitcoin"));
}

#[test]
fn pools_swallow_errors() {
    let client = live(ScriptedTransport::replying(500, ""));
    assert_eq!(
        block_on(client.pools("bitcoin", Some("eth"), Some("0x1"))),
        PoolData::default()
    );
}

fn client_requests(client: &MarketClient<ScriptedTransport>) -> Vec<HttpRequest> {
    client.transport().seen.borrow().clone()
}
