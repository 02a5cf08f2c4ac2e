//! HTTP client for mercari.jp requests using wreq for TLS fingerprint emulation.

use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;
use wreq::Client;
use wreq_util::Emulation;

/// Why a search page could not be fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network, DNS, TLS or timeout failure.
    #[error("Failed to send request to {url}")]
    Request {
        url: String,
        #[source]
        source: wreq::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("Request failed with status: {0}")]
    Status(u16),

    /// The response body could not be read.
    #[error("Failed to read response body")]
    Body(#[source] wreq::Error),
}

/// Trait for fetching search pages - enables mocking for tests.
#[async_trait]
pub trait MercariSearch: Send + Sync {
    /// Fetches the page at `url` and returns its HTML. No retries.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// mercari.jp HTTP client with browser impersonation.
pub struct MercariClient {
    client: Client,
}

impl MercariClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout());

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl MercariSearch for MercariClient {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .emulation(Emulation::Chrome131)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .header("Accept-Language", "ja-JP,ja;q=0.9,en;q=0.8")
            .header("Cache-Control", "no-cache")
            .header("Upgrade-Insecure-Requests", "1")
            .send()
            .await
            .map_err(|source| FetchError::Request { url: url.to_string(), source })?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response.text().await.map_err(FetchError::Body)
    }
}
