//! Server configuration
//!
//! Loaded once at start-up from Shuttle secrets (falling back to the process
//! environment, which `.env` populates locally) and read-only afterwards.

use anyhow::{bail, Result};
use std::time::Duration;

pub const NAVER_API_BASE_URL: &str = "https://openapi.naver.com/v1/search";
pub const GOOGLE_API_BASE_URL: &str = "https://www.googleapis.com/customsearch/v1";
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Naver Search API credentials
#[derive(Debug, Clone)]
pub struct NaverConfig {
    pub client_id: String,
    pub client_secret: String,
    pub base_url: String,
}

impl NaverConfig {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            base_url: NAVER_API_BASE_URL.to_string(),
        }
    }

    /// Override the API base URL (used to point at a mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn has_credentials(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

/// Google Custom Search credentials
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub api_key: String,
    /// Custom search engine id (`cx`)
    pub cse_id: String,
    pub base_url: String,
}

impl GoogleConfig {
    pub fn new(api_key: impl Into<String>, cse_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            cse_id: cse_id.into(),
            base_url: GOOGLE_API_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn has_credentials(&self) -> bool {
        !self.api_key.is_empty() && !self.cse_id.is_empty()
    }
}

/// Full server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Pre-shared key expected in the `key` request header
    pub api_key: String,
    pub naver: NaverConfig,
    pub google: GoogleConfig,
    pub provider_timeout: Duration,
}

impl AppConfig {
    /// Build the configuration from a key lookup.
    ///
    /// `UNISEARCH_API_KEY` is required. Missing provider credentials only
    /// warn: that provider will then fail (and be skipped) on every request.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let Some(api_key) = get("UNISEARCH_API_KEY") else {
            bail!("UNISEARCH_API_KEY is not set");
        };

        let mut naver = NaverConfig::new(
            get("NAVER_CLIENT_ID").unwrap_or_default(),
            get("NAVER_CLIENT_SECRET").unwrap_or_default(),
        );
        if let Some(url) = get("NAVER_BASE_URL") {
            naver = naver.with_base_url(url);
        }
        if !naver.has_credentials() {
            tracing::warn!("⚠️  NAVER_CLIENT_ID / NAVER_CLIENT_SECRET not set - Naver searches will be skipped");
        }

        let mut google = GoogleConfig::new(
            get("GOOGLE_API_KEY").unwrap_or_default(),
            get("GOOGLE_CSE_ID").unwrap_or_default(),
        );
        if let Some(url) = get("GOOGLE_BASE_URL") {
            google = google.with_base_url(url);
        }
        if !google.has_credentials() {
            tracing::warn!("⚠️  GOOGLE_API_KEY / GOOGLE_CSE_ID not set - Google searches will be skipped");
        }

        let provider_timeout = match get("PROVIDER_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => bail!("PROVIDER_TIMEOUT_SECS must be a positive integer, got {:?}", raw),
            },
            None => DEFAULT_PROVIDER_TIMEOUT,
        };

        Ok(Self {
            api_key,
            naver,
            google,
            provider_timeout,
        })
    }

    /// Load from Shuttle secrets, falling back to environment variables
    pub fn from_secrets(secrets: &shuttle_runtime::SecretStore) -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| secrets.get(key).or_else(|| std::env::var(key).ok()))
    }
}
