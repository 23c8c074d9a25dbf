//! Market API client with mock substitution.
//!
//! Resilience is limited to one mechanism: falling back to mock data. There
//! are no retries and no backoff; each call makes at most one request.

use super::config::ApiConfig;
use super::error::FetchError;
use super::mock::MockCatalog;
use super::transport::{HttpRequest, ReqwestTransport, Transport};
use super::types::{Category, CoinDetails, ErrorBody, Ohlc, PoolData, PoolList, TrendingCoins};
use serde::de::DeserializeOwned;
use url::Url;

pub const DEFAULT_CACHE_SECONDS: u32 = 60;
pub const API_KEY_HEADER: &str = "x-cg-pro-api-key";
pub const TOP_CATEGORIES: usize = 10;

/// Statuses that fall back to mock data when a rule matches.
const FALLBACK_STATUSES: [u16; 3] = [429, 400, 401];

pub struct MarketClient<T: Transport = ReqwestTransport> {
    config: ApiConfig,
    transport: T,
    mocks: MockCatalog,
}

impl MarketClient<ReqwestTransport> {
    pub fn with_reqwest(config: ApiConfig, mocks: MockCatalog) -> Self {
        Self::new(config, ReqwestTransport::new(), mocks)
    }
}

impl<T: Transport> MarketClient<T> {
    pub fn new(config: ApiConfig, transport: T, mocks: MockCatalog) -> Self {
        if config.is_mock_mode() {
            log::info!("[market] mock mode enabled");
        }
        Self {
            config,
            transport,
            mocks,
        }
    }

    #[inline]
    pub fn is_mock_mode(&self) -> bool {
        self.config.is_mock_mode()
    }

    #[inline]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    #[inline]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `{base}/{endpoint}` plus query params; empty values are skipped.
    pub fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url, FetchError> {
        let invalid = |reason: String| FetchError::InvalidUrl {
            endpoint: endpoint.to_string(),
            reason,
        };
        let base = self
            .config
            .base_url
            .as_deref()
            .ok_or_else(|| invalid("no base URL configured".to_string()))?;
        let raw = format!(
            "{}/{}",
            base.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );
        let mut url = Url::parse(&raw).map_err(|e| invalid(e.to_string()))?;
        let mut kept = params.iter().filter(|(_, v)| !v.is_empty()).peekable();
        if kept.peek().is_some() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in kept {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    fn mock<R: DeserializeOwned>(&self, endpoint: &str) -> Option<Result<R, FetchError>> {
        let value = self.mocks.lookup(endpoint)?;
        Some(
            serde_json::from_value(value).map_err(|source| FetchError::Decode {
                endpoint: endpoint.to_string(),
                source,
            }),
        )
    }

    /// Fetch and decode `endpoint`, substituting mock data in mock mode and
    /// after rate-limit/auth/bad-request statuses or network failures.
    pub async fn fetch<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        cache_seconds: u32,
    ) -> Result<R, FetchError> {
        if self.config.is_mock_mode() {
            return self.mock(endpoint).unwrap_or_else(|| {
                Err(FetchError::NoMockData {
                    endpoint: endpoint.to_string(),
                })
            });
        }

        let url = self.build_url(endpoint, params)?;
        let request = HttpRequest {
            url,
            headers: vec![
                (API_KEY_HEADER, self.config.api_key.clone().unwrap_or_default()),
                ("Content-Type", "application/json".to_string()),
                ("Cache-Control", format!("max-age={cache_seconds}")),
            ],
        };

        let response = match self.transport.get(request).await {
            Ok(r) => r,
            Err(e) => {
                if let Some(mocked) = self.mock(endpoint) {
                    log::warn!("[market] network error ({e}), falling back to mock data");
                    return mocked;
                }
                return Err(FetchError::Transport(e.0));
            }
        };

        if !response.is_success() {
            let status = response.status;
            if FALLBACK_STATUSES.contains(&status) {
                if let Some(mocked) = self.mock(endpoint) {
                    log::warn!("[market] API error {status}, falling back to mock data");
                    return mocked;
                }
            }
            let message = serde_json::from_str::<ErrorBody>(&response.body)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| status_reason(status));
            return Err(FetchError::Api { status, message });
        }

        serde_json::from_str(&response.body).map_err(|source| FetchError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    pub async fn coin(&self, id: &str) -> Result<CoinDetails, FetchError> {
        self.fetch(&format!("/coins/{id}"), &[], DEFAULT_CACHE_SECONDS)
            .await
    }

    pub async fn coin_ohlc(&self, id: &str, days: u32) -> Result<Vec<Ohlc>, FetchError> {
        let days = days.to_string();
        self.fetch(
            &format!("/coins/{id}/ohlc"),
            &[("vs_currency", "usd"), ("days", days.as_str())],
            DEFAULT_CACHE_SECONDS,
        )
        .await
    }

    /// The first `TOP_CATEGORIES` categories.
    pub async fn categories(&self) -> Result<Vec<Category>, FetchError> {
        let mut all: Vec<Category> = self
            .fetch("/coins/categories", &[], DEFAULT_CACHE_SECONDS)
            .await?;
        all.truncate(TOP_CATEGORIES);
        Ok(all)
    }

    pub async fn trending(&self) -> Result<TrendingCoins, FetchError> {
        self.fetch("/search/trending", &[], DEFAULT_CACHE_SECONDS)
            .await
    }

    /// First liquidity pool for a coin. Never fails: an empty `PoolData` is
    /// returned in mock mode, on error, or when nothing is listed.
    pub async fn pools(
        &self,
        id: &str,
        network: Option<&str>,
        contract_address: Option<&str>,
    ) -> PoolData {
        if self.config.is_mock_mode() {
            return PoolData::default();
        }
        let result = match (network, contract_address) {
            (Some(network), Some(contract)) if !network.is_empty() && !contract.is_empty() => {
                self.fetch::<PoolList>(
                    &format!("/onchain/networks/{network}/tokens/{contract}/pools"),
                    &[],
                    DEFAULT_CACHE_SECONDS,
                )
                .await
            }
            _ => {
                self.fetch::<PoolList>("/onchain/search/pools", &[("query", id)], DEFAULT_CACHE_SECONDS)
                    .await
            }
        };
        match result {
            Ok(list) => list.data.into_iter().next().unwrap_or_default(),
            Err(e) => {
                log::warn!("[market] pool lookup for {id} failed: {e}");
                PoolData::default()
            }
        }
    }
}

fn status_reason(status: u16) -> String {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown Status")
        .to_string()
}
