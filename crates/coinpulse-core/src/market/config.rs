//! API configuration from the environment.

pub const BASE_URL_ENV: &str = "COINGECKO_BASE_URL";
pub const API_KEY_ENV: &str = "COINGECKO_API_KEY";
pub const MOCK_MODE_ENV: &str = "MOCK_MODE";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    /// `MOCK_MODE=true`
    pub mock_flag: bool,
}

fn non_blank(v: Option<&str>) -> Option<String> {
    v.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

impl ApiConfig {
    pub fn from_values(base_url: Option<&str>, api_key: Option<&str>, mock_mode: Option<&str>) -> Self {
        Self {
            base_url: non_blank(base_url),
            api_key: non_blank(api_key),
            mock_flag: mock_mode.map(str::trim) == Some("true"),
        }
    }

    /// Runtime environment (native targets and tests).
    pub fn from_env() -> Self {
        let base = std::env::var(BASE_URL_ENV).ok();
        let key = std::env::var(API_KEY_ENV).ok();
        let mock = std::env::var(MOCK_MODE_ENV).ok();
        Self::from_values(base.as_deref(), key.as_deref(), mock.as_deref())
    }

    /// Values baked in at compile time; the only option inside the wasm bundle.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("COINGECKO_BASE_URL"),
            option_env!("COINGECKO_API_KEY"),
            option_env!("MOCK_MODE"),
        )
    }

    /// Mock-only configuration, used for demos and tests.
    pub fn mock() -> Self {
        Self {
            mock_flag: true,
            ..Default::default()
        }
    }

    pub fn live(base_url: &str, api_key: &str) -> Self {
        Self::from_values(Some(base_url), Some(api_key), None)
    }

    /// Mock mode is on when explicitly requested or when the base URL or API
    /// key is missing or blank.
    pub fn is_mock_mode(&self) -> bool {
        self.mock_flag || self.base_url.is_none() || self.api_key.is_none()
    }
}
